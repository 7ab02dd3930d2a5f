mod scene;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use layered_spacing::SpacingOption;
use scene::{report, Scene};
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Place the layers of a ranked graph and print the resulting coordinates
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// RON scene file (reads from stdin if not provided)
    scene: Option<PathBuf>,

    /// Also print the ideal distance between neighbors of each layer
    #[arg(short, long)]
    siblings: bool,

    /// Override a graph-level option, e.g. `-O "level distance=40"`
    #[arg(short = 'O', long = "option", value_parser = parse_option)]
    options: Vec<(SpacingOption, f32)>,
}

fn parse_option(arg: &str) -> Result<(SpacingOption, f32)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {arg:?}"))?;
    let key = key.parse::<SpacingOption>()?;
    let value = value
        .trim()
        .parse::<f32>()
        .with_context(|| format!("invalid value for {key}"))?;
    Ok((key, value))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let text = match &args.scene {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };

    let mut scene = Scene::parse(&text)?;
    for &(key, value) in &args.options {
        debug!("Setting {key} = {value}");
        scene.options.set(key, value);
    }

    print!("{}", report(&scene, args.siblings)?);
    Ok(())
}
