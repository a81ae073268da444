//!
//! A two-paddle pong game on a fixed 500 x 400 pixel arena. Everything the game needs
//! is added to an App through the PongPlugins plugin group.
//!

mod arena;
mod ball;
mod clock;
mod common;
mod game;
mod paddle;
mod score;
mod window;

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

pub use ball::Ball;
pub use common::PlayerId;
pub use game::GameState;
pub use paddle::Paddle;
pub use score::PlayerScored;

///
/// All plugins making up the pong game, starting with the window and engine defaults.
/// Adding this group to an empty App and running it plays the game.
///
pub struct PongPlugins;

impl PluginGroup for PongPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(window::PongWindowPlugin)
            .add(arena::ArenaPlugin)
            .add(paddle::PaddlePlugin)
            .add(ball::BallPlugin)
            .add(score::ScorePlugin)
            .add(game::GamePlugin)
            .add(clock::FrameClockPlugin)
    }
}
