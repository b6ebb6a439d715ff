//! Simulation configuration
//!
//! Screen dimensions are supplied once by the host and stay constant for the
//! lifetime of a game. Loaded from JSON; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::Rect;

/// Which generation of game rules to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Bottom edge is a wall, no score, the ball runs forever
    Classic,
    /// Bottom edge ends the run, island hits score
    #[default]
    Scoring,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Classic => "classic",
            Ruleset::Scoring => "scoring",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "bounce" => Some(Ruleset::Classic),
            "scoring" | "score" => Some(Ruleset::Scoring),
            _ => None,
        }
    }
}

/// When an island overlap counts as a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrigger {
    /// Every tick the ball overlaps the island scores
    #[default]
    Level,
    /// Only the first tick of a continuous overlap scores
    Edge,
}

/// Screen and gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Distance travelled per tick
    pub speed: f32,
    pub ball_width: f32,
    /// Paddle width as a fraction of screen width, in (0, 1]
    pub paddle_width_ratio: f32,
    pub paddle_height: f32,
    /// Distance from the bottom of the screen to the paddle's top edge
    pub paddle_bottom_offset: f32,
    /// Island collision rectangle
    pub island: Rect,
    pub ruleset: Ruleset,
    pub score_trigger: ScoreTrigger,
    /// Seed for the initial ball direction
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: 428.0,
            screen_height: 926.0,
            speed: BALL_SPEED,
            ball_width: BALL_WIDTH,
            paddle_width_ratio: PADDLE_WIDTH_RATIO,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            island: Rect::new(150.0, 11.0, 126.0, 25.0),
            ruleset: Ruleset::Scoring,
            score_trigger: ScoreTrigger::Level,
            seed: 0x5eed,
        }
    }
}

impl SimConfig {
    /// Default configuration for a screen of the given size
    pub fn for_screen(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject dimensions the simulation has no defined behavior for
    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("speed", self.speed),
            ("ball_width", self.ball_width),
            ("paddle_height", self.paddle_height),
            ("island.w", self.island.w),
            ("island.h", self.island.h),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.paddle_width_ratio > 0.0 && self.paddle_width_ratio <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "paddle_width_ratio must be in (0, 1], got {}",
                self.paddle_width_ratio
            )));
        }
        if self.ball_width >= self.screen_width || self.ball_width >= self.screen_height {
            return Err(SimError::InvalidConfig(
                "ball_width must be smaller than the screen".to_string(),
            ));
        }
        Ok(())
    }

    pub fn paddle_width(&self) -> f32 {
        self.screen_width * self.paddle_width_ratio
    }

    /// Centered spawn point for the ball
    pub fn spawn_point(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
