//! Persisted game state
//!
//! The fixed-shape record written to the save file, plus the small value
//! types it carries. Field order in the struct declarations is the field
//! order in the serialized JSON.

use serde::{Deserialize, Serialize};

/// 3D position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 2D velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Complete persisted game state.
///
/// Constructed fresh when no save exists, mutated by gameplay events, and
/// written out by the store after every mutating event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateRecord {
    /// Total active play time in seconds
    pub elapsed_seconds: f32,
    /// Coins collected
    pub coins: u32,
    /// Last known ball position
    pub ball_position: Vec3,
    /// Last known ball velocity
    pub ball_velocity: Vec2,
}

impl GameStateRecord {
    /// Fresh first-run state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a coin pickup
    pub fn record_coin(&mut self) {
        self.coins += 1;
    }

    /// Advance play time; negative deltas are ignored so elapsed time
    /// never decreases
    pub fn add_time(&mut self, delta_seconds: f32) {
        if delta_seconds > 0.0 {
            self.elapsed_seconds += delta_seconds;
        }
    }

    /// Record the ball's last known physics state
    pub fn record_ball_state(&mut self, position: Vec3, velocity: Vec2) {
        self.ball_position = position;
        self.ball_velocity = velocity;
    }

    /// Reset to fresh first-run state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
