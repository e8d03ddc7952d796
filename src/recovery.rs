//! Last-valid-position recovery for movers.
//!
//! Owned alongside the mover it tracks. Each tick the mover's proposed
//! position is checked first: a clear position is remembered, a colliding
//! one is rolled back to the last clear position and the mover's speed is
//! damped. The rollback is a full revert, so any motion made during the
//! colliding tick is lost.

use kurbo::Point;

use crate::collision::{check_collision, CollisionVerdict, Mover};
use crate::config::ShorelineConfig;
use crate::shape::Island;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRecovery {
    last_valid: Point,
}

impl PositionRecovery {
    /// Start tracking from the mover's current position.
    pub fn new(mover: &Mover) -> Self {
        Self {
            last_valid: mover.position(),
        }
    }

    pub fn last_valid(&self) -> Point {
        self.last_valid
    }

    /// Remember the mover's current position as valid.
    pub fn update_last_valid(&mut self, mover: &Mover) {
        self.last_valid = mover.position();
    }

    /// Snap the mover back to the last valid position and damp its speed
    /// by the current `speed_damping`.
    pub fn revert(&self, mover: &mut Mover, config: &ShorelineConfig) {
        mover.set_position(self.last_valid);
        mover.speed *= config.speed_damping;
    }

    /// One tick: check the mover at its proposed position, then either
    /// record it as valid or revert it. `on_collision` runs after a revert
    /// with the verdict that caused it (sound, screen shake, ...).
    pub fn step<F>(
        &mut self,
        mover: &mut Mover,
        islands: &[Island],
        config: &ShorelineConfig,
        mut on_collision: F,
    ) -> CollisionVerdict
    where
        F: FnMut(&CollisionVerdict),
    {
        let verdict = check_collision(mover, islands, config);
        if verdict.collided {
            self.revert(mover, config);
            tracing::trace!(x = mover.x, y = mover.y, speed = mover.speed, "mover reverted");
            on_collision(&verdict);
        } else {
            self.update_last_valid(mover);
        }
        verdict
    }
}
