//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected direction source only
//! - No rendering or platform dependencies

pub mod collision;
pub mod direction;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::Reflection;
pub use direction::{DirectionSource, FixedDirection, SeededDirections};
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Island, Paddle, Snapshot};
pub use tick::{TickInput, tick};
