//! Collision rules and reflection
//!
//! Every rule looks at the candidate position for this tick and reports which
//! axes of the *pre-tick* direction it wants negated. Rules never see each
//! other's output. Merging is per axis and last-writer-wins: because every
//! writer negates the same source value, an axis claimed by two rules is
//! still negated exactly once.

use glam::Vec2;

use super::rect::Rect;

/// Axes to negate, accumulated across rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Reflection {
    pub const NONE: Self = Self {
        flip_x: false,
        flip_y: false,
    };
    pub const X: Self = Self {
        flip_x: true,
        flip_y: false,
    };
    pub const Y: Self = Self {
        flip_x: false,
        flip_y: true,
    };

    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }

    /// Fold another rule's writes into this one
    pub fn merge(&mut self, other: Reflection) {
        self.flip_x |= other.flip_x;
        self.flip_y |= other.flip_y;
    }

    /// Apply to the direction the rules were evaluated against
    pub fn apply(&self, dir: Vec2) -> Vec2 {
        Vec2::new(
            if self.flip_x { -dir.x } else { dir.x },
            if self.flip_y { -dir.y } else { dir.y },
        )
    }
}

/// Left and right screen edges
pub fn side_walls(candidate: Vec2, ball_width: f32, screen_width: f32) -> Reflection {
    if candidate.x < 0.0 || candidate.x > screen_width - ball_width {
        Reflection::X
    } else {
        Reflection::NONE
    }
}

/// Top screen edge
pub fn top_wall(candidate: Vec2) -> Reflection {
    if candidate.y < 0.0 {
        Reflection::Y
    } else {
        Reflection::NONE
    }
}

/// Whether the candidate would put the ball past the bottom edge
#[inline]
pub fn crosses_bottom(candidate: Vec2, ball_width: f32, screen_height: f32) -> bool {
    candidate.y > screen_height - ball_width
}

/// Bottom screen edge treated as a wall (classic rules)
pub fn bottom_wall(candidate: Vec2, ball_width: f32, screen_height: f32) -> Reflection {
    if crosses_bottom(candidate, ball_width, screen_height) {
        Reflection::Y
    } else {
        Reflection::NONE
    }
}

/// Ball box at `candidate` against an obstacle.
///
/// On overlap the axis is picked from the ball's *current* x: outside the
/// obstacle's horizontal span means a side hit (flip x), otherwise a
/// top/bottom hit (flip y). Returns `None` when there is no overlap.
pub fn obstacle(current: Vec2, candidate: Vec2, ball_width: f32, rect: &Rect) -> Option<Reflection> {
    if !Rect::square(candidate, ball_width).overlaps(rect) {
        return None;
    }
    if rect.outside_x_span(current.x) {
        Some(Reflection::X)
    } else {
        Some(Reflection::Y)
    }
}
