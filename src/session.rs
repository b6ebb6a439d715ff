//! Game session: lifecycle around the simulation
//!
//! The host owns one `Session`. A periodic timer calls `on_timer`, input
//! handlers call `drag_paddle` between ticks, and the renderer reads
//! `snapshot` afterwards. Everything runs on one thread.

use crate::error::SimResult;
use crate::highscores::HighScores;
use crate::settings::SimConfig;
use crate::sim::{DirectionSource, GameEvent, GameState, Snapshot, TickInput, tick};

pub struct Session {
    state: GameState,
    input: TickInput,
    running: bool,
    last: Snapshot,
    high_scores: HighScores,
}

impl Session {
    pub fn new(config: &SimConfig, directions: &mut dyn DirectionSource) -> SimResult<Self> {
        let state = GameState::new(config, directions)?;
        let last = state.snapshot();
        Ok(Self {
            state,
            input: TickInput::default(),
            running: false,
            last,
            high_scores: HighScores::new(),
        })
    }

    /// Register the periodic tick
    pub fn start(&mut self) {
        if !self.running {
            log::info!("Session started");
            self.running = true;
        }
    }

    /// Release the periodic tick
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Session stopped after {} ticks", self.state.time_ticks);
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Timer callback: exactly one tick, no catch-up for missed callbacks
    pub fn on_timer(&mut self) -> &Snapshot {
        if !self.running || self.state.is_game_over() {
            return &self.last;
        }

        self.last = tick(&mut self.state, &self.input);

        for event in &self.last.events {
            if let GameEvent::GameOver { score } = *event {
                if let Some(rank) = self.high_scores.add_score(score, self.state.time_ticks) {
                    log::info!("New best score #{rank}: {score}");
                }
            }
        }
        &self.last
    }

    /// Drag handler: center the paddle under the pointer
    pub fn drag_paddle(&mut self, pointer_x: f32) {
        self.state.paddle.center_on(pointer_x);
        self.last.paddle = self.state.paddle.rect();
    }

    /// Set the paddle's left edge. Applies immediately, even while stopped
    /// or game over; the next tick reads whatever was written last.
    pub fn set_paddle_x(&mut self, x: f32) {
        self.state.paddle.set_x(x);
        self.last.paddle = self.state.paddle.rect();
    }

    /// Let the paddle follow the ball on its own
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Start a new run from the spawn point, keeping the ball's direction
    pub fn restart(&mut self) -> &Snapshot {
        self.state.restart();
        self.last = self.state.snapshot();
        &self.last
    }

    /// Latest snapshot
    pub fn snapshot(&self) -> &Snapshot {
        &self.last
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }
}
