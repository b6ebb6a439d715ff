//! Island Bounce - a bouncing ball / breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, AABB collisions, score state)
//! - `session`: Fixed-rate lifecycle around the simulation (start/stop/restart)
//! - `settings`: Data-driven screen and gameplay configuration
//! - `highscores`: In-memory best score board

pub mod error;
pub mod highscores;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use highscores::HighScores;
pub use session::Session;
pub use settings::{Ruleset, ScoreTrigger, SimConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal timer rate (calls per second)
    pub const TICK_RATE_HZ: u32 = 60;
    /// Tick period in milliseconds
    pub const TICK_MILLIS: f32 = 1000.0 / TICK_RATE_HZ as f32;

    /// Distance the ball travels per tick
    pub const BALL_SPEED: f32 = 10.0;
    /// Ball diameter, also the side of its collision box
    pub const BALL_WIDTH: f32 = 15.0;

    /// Paddle width as a fraction of the screen width
    pub const PADDLE_WIDTH_RATIO: f32 = 0.5;
    pub const PADDLE_HEIGHT: f32 = 37.0;
    /// Paddle top edge sits this far above the bottom of the screen
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;

    /// How much the displayed island grows at full pulse (fraction of size)
    pub const ISLAND_PULSE_GROWTH: f32 = 0.2;
    /// Pulse lost per tick (full pulse fades in ~1/4 second at 60 Hz)
    pub const ISLAND_PULSE_DECAY: f32 = 0.066;
}

/// Scale a vector to unit length.
///
/// The zero vector has no direction, so it is rejected with
/// [`SimError::ZeroVector`] instead of producing NaNs.
pub fn normalize(v: Vec2) -> SimResult<Vec2> {
    if !v.is_finite() {
        return Err(SimError::NonFinite(v.x, v.y));
    }
    let magnitude = (v.x * v.x + v.y * v.y).sqrt();
    if magnitude == 0.0 {
        return Err(SimError::ZeroVector);
    }
    Ok(Vec2::new(v.x / magnitude, v.y / magnitude))
}
