//! Spacing options and their two-tier resolution
//!
//! Every option has a graph-level value in [`SpacingOptions`]. Any node may
//! shadow it through its [`NodeOptions`]; [`resolve`] applies that
//! precedence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One centimeter, in points
pub const CM: f32 = 28.452_756;

/// A third of an em at a 10pt font size, in points
pub const THIRD_EM: f32 = 10.0 / 3.0;

/// Keys understood by the spacing procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingOption {
    SiblingDistance,
    SiblingPreSep,
    SiblingPostSep,
    LevelDistance,
    LevelPreSep,
    LevelPostSep,
}

impl SpacingOption {
    pub const ALL: [SpacingOption; 6] = [
        SpacingOption::SiblingDistance,
        SpacingOption::SiblingPreSep,
        SpacingOption::SiblingPostSep,
        SpacingOption::LevelDistance,
        SpacingOption::LevelPreSep,
        SpacingOption::LevelPostSep,
    ];

    /// User-facing option name
    pub fn name(self) -> &'static str {
        match self {
            SpacingOption::SiblingDistance => "sibling distance",
            SpacingOption::SiblingPreSep => "sibling pre sep",
            SpacingOption::SiblingPostSep => "sibling post sep",
            SpacingOption::LevelDistance => "level distance",
            SpacingOption::LevelPreSep => "level pre sep",
            SpacingOption::LevelPostSep => "level post sep",
        }
    }
}

impl fmt::Display for SpacingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown spacing option {0:?}")]
pub struct UnknownOption(pub String);

impl FromStr for SpacingOption {
    type Err = UnknownOption;

    /// Accepts the user-facing name, with `_` or `-` in place of spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['_', '-'], " ");
        SpacingOption::ALL
            .into_iter()
            .find(|option| option.name() == normalized)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Graph-level option values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingOptions {
    pub sibling_distance: f32,
    pub sibling_pre_sep: f32,
    pub sibling_post_sep: f32,
    pub level_distance: f32,
    pub level_pre_sep: f32,
    pub level_post_sep: f32,
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self {
            sibling_distance: CM,
            sibling_pre_sep: THIRD_EM,
            sibling_post_sep: THIRD_EM,
            level_distance: CM,
            level_pre_sep: THIRD_EM,
            level_post_sep: THIRD_EM,
        }
    }
}

impl SpacingOptions {
    pub fn get(&self, key: SpacingOption) -> f32 {
        match key {
            SpacingOption::SiblingDistance => self.sibling_distance,
            SpacingOption::SiblingPreSep => self.sibling_pre_sep,
            SpacingOption::SiblingPostSep => self.sibling_post_sep,
            SpacingOption::LevelDistance => self.level_distance,
            SpacingOption::LevelPreSep => self.level_pre_sep,
            SpacingOption::LevelPostSep => self.level_post_sep,
        }
    }

    pub fn set(&mut self, key: SpacingOption, value: f32) {
        *self.slot(key) = value;
    }

    fn slot(&mut self, key: SpacingOption) -> &mut f32 {
        match key {
            SpacingOption::SiblingDistance => &mut self.sibling_distance,
            SpacingOption::SiblingPreSep => &mut self.sibling_pre_sep,
            SpacingOption::SiblingPostSep => &mut self.sibling_post_sep,
            SpacingOption::LevelDistance => &mut self.level_distance,
            SpacingOption::LevelPreSep => &mut self.level_pre_sep,
            SpacingOption::LevelPostSep => &mut self.level_post_sep,
        }
    }
}

/// Node-level overrides; `None` falls through to the graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeOptions {
    pub sibling_distance: Option<f32>,
    pub sibling_pre_sep: Option<f32>,
    pub sibling_post_sep: Option<f32>,
    pub level_distance: Option<f32>,
    pub level_pre_sep: Option<f32>,
    pub level_post_sep: Option<f32>,
}

impl NodeOptions {
    pub fn get(&self, key: SpacingOption) -> Option<f32> {
        match key {
            SpacingOption::SiblingDistance => self.sibling_distance,
            SpacingOption::SiblingPreSep => self.sibling_pre_sep,
            SpacingOption::SiblingPostSep => self.sibling_post_sep,
            SpacingOption::LevelDistance => self.level_distance,
            SpacingOption::LevelPreSep => self.level_pre_sep,
            SpacingOption::LevelPostSep => self.level_post_sep,
        }
    }

    pub fn set(&mut self, key: SpacingOption, value: f32) {
        *self.slot(key) = Some(value);
    }

    /// Builder form of [`NodeOptions::set`]
    pub fn with(mut self, key: SpacingOption, value: f32) -> Self {
        self.set(key, value);
        self
    }

    fn slot(&mut self, key: SpacingOption) -> &mut Option<f32> {
        match key {
            SpacingOption::SiblingDistance => &mut self.sibling_distance,
            SpacingOption::SiblingPreSep => &mut self.sibling_pre_sep,
            SpacingOption::SiblingPostSep => &mut self.sibling_post_sep,
            SpacingOption::LevelDistance => &mut self.level_distance,
            SpacingOption::LevelPreSep => &mut self.level_pre_sep,
            SpacingOption::LevelPostSep => &mut self.level_post_sep,
        }
    }
}

/// Effective value of `key`: the node's own value if it sets one, the
/// graph's otherwise
pub fn resolve(key: SpacingOption, node: Option<&NodeOptions>, graph: &SpacingOptions) -> f32 {
    node.and_then(|options| options.get(key))
        .unwrap_or_else(|| graph.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn node_value_shadows_graph_value() {
        let graph = SpacingOptions {
            level_distance: 20.0,
            ..Default::default()
        };
        let node = NodeOptions::default().with(SpacingOption::LevelDistance, 35.0);

        assert_eq!(resolve(SpacingOption::LevelDistance, Some(&node), &graph), 35.0);
        assert_eq!(resolve(SpacingOption::LevelDistance, None, &graph), 20.0);
    }

    #[test]
    fn unset_node_value_falls_through() {
        let graph = SpacingOptions::default();
        let node = NodeOptions::default().with(SpacingOption::LevelDistance, 35.0);

        assert_eq!(
            resolve(SpacingOption::SiblingPreSep, Some(&node), &graph),
            THIRD_EM
        );
    }

    #[test]
    fn parse_option_names() {
        assert_eq!(
            "sibling distance".parse::<SpacingOption>(),
            Ok(SpacingOption::SiblingDistance)
        );
        assert_eq!(
            "level_post_sep".parse::<SpacingOption>(),
            Ok(SpacingOption::LevelPostSep)
        );
        assert_eq!(
            "level-pre-sep".parse::<SpacingOption>(),
            Ok(SpacingOption::LevelPreSep)
        );
        assert_eq!(
            "node distance".parse::<SpacingOption>(),
            Err(UnknownOption("node distance".to_string()))
        );
    }

    #[test]
    fn every_key_round_trips_through_set() {
        let mut graph = SpacingOptions::default();
        let mut node = NodeOptions::default();
        for (i, key) in SpacingOption::ALL.into_iter().enumerate() {
            graph.set(key, i as f32);
            node.set(key, 100.0 + i as f32);
        }
        for (i, key) in SpacingOption::ALL.into_iter().enumerate() {
            assert_eq!(graph.get(key), i as f32);
            assert_eq!(node.get(key), Some(100.0 + i as f32));
            assert_eq!(key.to_string().parse::<SpacingOption>(), Ok(key));
        }
    }
}
