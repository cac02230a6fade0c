//! AI and game configuration with documented constants
//!
//! AI weights are loaded from TOML (`data/ai/{name}.toml`). Every section is
//! optional; missing sections fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{ClueError, Result};

/// How the notebook turns its knowledge into a room desirability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Every candidate room scores the same; the agent camps on candidates
    Flat,
    /// Candidate rooms lose value with repeated visits and suggestions
    #[default]
    Graded,
}

/// Room scoring weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub strategy: ScoringStrategy,
    /// Score of a room already proven innocent
    pub eliminated_score: f32,
    /// Base score of a room still in the candidate set
    pub candidate_score: f32,
    /// Bonus split across remaining candidate rooms (graded only).
    ///
    /// With 9 candidates each gets ~3.3, with 2 candidates each gets 15.
    pub certainty_weight: f32,
    /// Penalty per recorded visit (graded only)
    pub visit_penalty: f32,
    /// Penalty per suggestion made in the room (graded only)
    pub suggestion_penalty: f32,
    /// Penalty for the room most recently entered (graded only)
    pub last_room_penalty: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strategy: ScoringStrategy::Graded,
            eliminated_score: -100.0,
            candidate_score: 50.0,
            certainty_weight: 30.0,
            visit_penalty: 4.0,
            suggestion_penalty: 6.0,
            last_room_penalty: 20.0,
        }
    }
}

/// Move-decision tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Utility lost per hallway step between the agent and a door
    pub distance_weight: f32,
    /// Random step attempts when stuck inside a room with no known door
    pub room_wander_attempts: u32,
    /// Random step attempts when no door route produced a move
    pub hallway_wander_attempts: u32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            distance_weight: 0.5,
            room_wander_attempts: 10,
            hallway_wander_attempts: 15,
        }
    }
}

/// Suggestion / passage / accusation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// A passage destination must score within this margin of the best room
    pub passage_margin: f32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            passage_margin: 15.0,
        }
    }
}

/// Complete AI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    /// Name of this configuration (set from filename)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl AiConfig {
    /// Default weights with a different scoring strategy
    pub fn with_strategy(strategy: ScoringStrategy) -> Self {
        let mut config = Self::default();
        config.scoring.strategy = strategy;
        config
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AiConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        if s.eliminated_score >= s.candidate_score {
            return Err(ClueError::InvalidConfig(format!(
                "eliminated_score ({}) must be below candidate_score ({})",
                s.eliminated_score, s.candidate_score
            )));
        }

        let weights = [
            ("certainty_weight", s.certainty_weight),
            ("visit_penalty", s.visit_penalty),
            ("suggestion_penalty", s.suggestion_penalty),
            ("last_room_penalty", s.last_room_penalty),
            ("distance_weight", self.movement.distance_weight),
            ("passage_margin", self.policy.passage_margin),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ClueError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if self.movement.room_wander_attempts == 0 || self.movement.hallway_wander_attempts == 0 {
            return Err(ClueError::InvalidConfig(
                "wander attempt counts must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Load an AI configuration from TOML file
///
/// Loads from `data/ai/{name}.toml`
pub fn load_ai_config(name: &str) -> Result<AiConfig> {
    let mut config = load_ai_config_from(&ai_config_path(name))?;
    config.name = name.to_string();
    Ok(config)
}

/// Load an AI configuration from an explicit path
pub fn load_ai_config_from(path: &Path) -> Result<AiConfig> {
    let contents = fs::read_to_string(path)?;
    let mut config = AiConfig::from_toml_str(&contents)?;
    if config.name.is_empty() {
        config.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(config)
}

fn ai_config_path(name: &str) -> PathBuf {
    PathBuf::from("data/ai").join(format!("{}.toml", name))
}

/// Turn-loop settings for a headless game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Hard cap on turns before the game is declared unsolved
    pub max_turns: u32,
    /// Consecutive rejected steps that end a movement phase
    ///
    /// A controller that keeps proposing illegal moves would otherwise spin
    /// forever, since rejected steps don't consume movement points.
    pub max_rejected_steps: u32,
    pub dice_sides: u32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            max_rejected_steps: 4,
            dice_sides: 6,
            seed: 12345,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dice_sides == 0 {
            return Err(ClueError::InvalidConfig("dice_sides must be positive".into()));
        }
        if self.max_rejected_steps == 0 {
            return Err(ClueError::InvalidConfig(
                "max_rejected_steps must be positive".into(),
            ));
        }
        Ok(())
    }
}
