//!
//! This module contains a subset of items that are relevant across the pong codebase
//! and will be included by many of the core modules.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;

// -------------------------------------------------------------------------------------------------
// Constants

/// Width of the pong arena (the display surface) in pixels
pub const ARENA_WIDTH: i32 = 500;
/// Height of the pong arena (the display surface) in pixels
pub const ARENA_HEIGHT: i32 = 400;
/// Size of the pong arena in pixels, as a single vector
pub const ARENA_SIZE: IVec2 = IVec2::new(ARENA_WIDTH, ARENA_HEIGHT);

/// Z index for components overlayed on background but behind core gameplay
pub const Z_BEHIND_GAMEPLAY: f32 = -1f32;
/// Z index for components in the foreground, in front of core gameplay
pub const Z_FOREGROUND: f32 = 1f32;

// -------------------------------------------------------------------------------------------------
// Re-Exports

pub use PlayerId::Player1;
pub use PlayerId::Player2;

// -------------------------------------------------------------------------------------------------
// Public Types

/// PlayerId to differentiate between players 1 and 2 throughout game logic
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// The player number as shown to the user (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player1 => 1,
            Player2 => 2,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Public Functions

///
/// Converts a point on the arena surface (pixels, origin at the top left corner,
/// y growing downward) into a translation in the 2d world (origin at the center
/// of the arena, y growing upward) at the given z index.
///
pub fn to_world(point: IVec2, z: f32) -> Vec3 {
    Vec3::new(
        point.x as f32 - (ARENA_WIDTH as f32 / 2f32),
        (ARENA_HEIGHT as f32 / 2f32) - point.y as f32,
        z,
    )
}

// -------------------------------------------------------------------------------------------------
// Public Traits and Blanket Impls

///
/// A trait that can be implemented for any type that contains some data T for both
/// of the 2 players in the game. It allows retrieval of the data per-player.
///
pub trait AsPerPlayerData<T> {
    ///
    /// Required Method:
    /// Consumes the value and returns a tuple of T types for players 1 and 2.
    /// The first tuple item is for player 1. The second is for player 2.
    ///
    fn as_per_player(self) -> (T, T);
}

impl<T, U> AsPerPlayerData<T> for U
where
    U: Iterator<Item = (PlayerId, T)>,
{
    ///
    /// Consumes the iterator (assuming it contains exactly 1 entry for each player)
    /// and identifies which player each item T belongs to. Then returns the appropriate tuple.
    ///
    /// This is intended for common use in query results that exist for each player. The
    /// query iterator can be mapped to the appropriate iterator type (PlayerId, T) and
    /// then this function can be called to return the p1 and p2 data as a tuple.
    ///
    fn as_per_player(mut self) -> (T, T) {
        let item1 = self.next();
        let item2 = self.next();
        assert!(
            self.next().is_none(),
            "Expected 1 iterator entry for each player. Got more than 2."
        );

        match (item1, item2) {
            (Some((Player1, p1)), Some((Player2, p2))) => (p1, p2),
            (Some((Player2, p2)), Some((Player1, p1))) => (p1, p2),
            (Some((pid, _)), Some(_)) => {
                panic!("Expected 1 iterator entry for each player. Got 2 for {pid:?}")
            }
            _ => panic!("Expected 1 iterator entry for each player. Got less than 2."),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
