//! Game state and core simulation types
//!
//! Everything the engine reads or writes lives in `GameState`. Collaborators
//! only see it through `Snapshot`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::DirectionSource;
use super::rect::Rect;
use crate::consts::*;
use crate::error::SimResult;
use crate::settings::{Ruleset, ScoreTrigger, SimConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in motion
    Playing,
    /// Ball crossed the bottom edge; only `restart` leaves this phase
    GameOver,
}

/// Something that happened during a tick, for feedback collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    IslandHit { score: u32 },
    PaddleHit,
    GameOver { score: u32 },
    Restarted,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's box
    pub pos: Vec2,
    /// Unit-length travel direction
    pub dir: Vec2,
    /// Diameter, also the side of the collision box
    pub width: f32,
}

impl Ball {
    /// Position after one step along `dir`
    #[inline]
    pub fn next_pos(&self, dir: Vec2, speed: f32) -> Vec2 {
        self.pos + dir * speed
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; `y` is fixed after construction
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.screen_width / 4.0,
                config.screen_height - config.paddle_bottom_offset,
            ),
            size: Vec2::new(config.paddle_width(), config.paddle_height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Move the paddle's left edge to `x`
    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Center the paddle horizontally on `pointer_x`
    pub fn center_on(&mut self, pointer_x: f32) {
        self.pos.x = pointer_x - self.size.x / 2.0;
    }
}

/// The island obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Island {
    /// Collision rectangle, never changes
    pub rect: Rect,
    /// Visual pulse intensity (0-1, decays over time)
    #[serde(default)]
    pub pulse: f32,
}

impl Island {
    pub fn new(rect: Rect) -> Self {
        Self { rect, pulse: 0.0 }
    }

    /// Trigger the hit pulse
    pub fn trigger_pulse(&mut self) {
        self.pulse = 1.0;
    }

    pub fn decay_pulse(&mut self) {
        if self.pulse > 0.0 {
            self.pulse = (self.pulse - ISLAND_PULSE_DECAY).max(0.0);
        }
    }

    /// Rectangle to draw: grows with the pulse, centered on the collision rect
    pub fn display_rect(&self) -> Rect {
        self.rect
            .scaled_about_center(1.0 + ISLAND_PULSE_GROWTH * self.pulse)
    }
}

/// Read-only view of the game after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_pos: Vec2,
    pub ball_dir: Vec2,
    pub ball_width: f32,
    pub paddle: Rect,
    /// Island as it should be drawn (includes the hit pulse)
    pub island: Rect,
    pub score: u32,
    pub game_over: bool,
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub screen: Vec2,
    pub speed: f32,
    pub ruleset: Ruleset,
    pub score_trigger: ScoreTrigger,
    /// Where the ball starts and restarts
    pub spawn: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    pub island: Island,
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter (ticks that actually ran)
    pub time_ticks: u64,
    /// Whether the ball overlapped the island on the previous tick
    #[serde(default)]
    pub island_overlap: bool,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game, seeding the ball direction from `directions`
    pub fn new(config: &SimConfig, directions: &mut dyn DirectionSource) -> SimResult<Self> {
        config.validate()?;
        let dir = directions.next_direction()?;
        let spawn = config.spawn_point();
        log::debug!("New game: spawn={spawn}, dir={dir}, ruleset={}", config.ruleset.as_str());

        Ok(Self {
            screen: Vec2::new(config.screen_width, config.screen_height),
            speed: config.speed,
            ruleset: config.ruleset,
            score_trigger: config.score_trigger,
            spawn,
            ball: Ball {
                pos: spawn,
                dir,
                width: config.ball_width,
            },
            paddle: Paddle::new(config),
            island: Island::new(config.island),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            island_overlap: false,
            events: Vec::new(),
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Back to play: score cleared, ball at spawn, direction kept
    pub fn restart(&mut self) {
        log::info!("Restart (previous score {})", self.score);
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.ball.pos = self.spawn;
        self.island_overlap = false;
        self.events.clear();
        self.events.push(GameEvent::Restarted);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            ball_dir: self.ball.dir,
            ball_width: self.ball.width,
            paddle: self.paddle.rect(),
            island: self.island.display_rect(),
            score: self.score,
            game_over: self.is_game_over(),
            time_ticks: self.time_ticks,
            events: self.events.clone(),
        }
    }
}
