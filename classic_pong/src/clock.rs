//!
//! The clock module caps how often the game loop runs. Every tick of the game
//! moves the ball and paddles by a fixed number of pixels, so the tick rate is
//! also the game speed.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use std::thread;
use std::time::{Duration, Instant};

use bevy::prelude::*;

// -------------------------------------------------------------------------------------------------
// Constants

/// Maximum number of game loop iterations per second
pub const TARGET_TICKS_PER_SEC: u32 = 60;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The FrameClockPlugin holds each iteration of the app loop until at least one tick
/// interval has passed since the previous iteration ended. It runs in the Last schedule,
/// after everything else in the iteration.
///
pub struct FrameClockPlugin;

impl Plugin for FrameClockPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FrameLimiter::from_rate(TARGET_TICKS_PER_SEC))
            .add_systems(Last, limit_frame_rate);
    }
}

///
/// Tracks when the last tick finished, to determine how long the next one must wait
/// to keep the loop at or under the target rate.
///
#[derive(Resource, Debug)]
pub struct FrameLimiter {
    tick_interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameLimiter {
    /// Creates a limiter that allows at most `ticks_per_sec` ticks each second.
    pub fn from_rate(ticks_per_sec: u32) -> Self {
        FrameLimiter {
            tick_interval: Duration::from_secs(1) / ticks_per_sec.max(1),
            last_tick: None,
        }
    }

    /// The minimum time between the ends of two consecutive ticks.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    ///
    /// How much longer the current tick must wait at time `now`. Zero if the interval
    /// has already passed, or if no tick has finished yet.
    ///
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .tick_interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Marks the current tick as finished at time `now`.
    pub fn finish_tick(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

// Sleeps out whatever remains of the current tick interval
fn limit_frame_rate(mut limiter: ResMut<FrameLimiter>) {
    let wait = limiter.remaining(Instant::now());
    if !wait.is_zero() {
        thread::sleep(wait);
    }
    limiter.finish_tick(Instant::now());
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
