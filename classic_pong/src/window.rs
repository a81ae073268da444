//!
//! The window module contains code to set up the base engine, its logging, and the
//! fixed size window in which the pong game is played.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::window::WindowResolution;

use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

const PONG_WINDOW_TITLE: &str = "Pong Game";
const LOG_LEVEL: Level = Level::INFO;
const LOG_FILTER: &str = "wgpu=error,naga=warn";

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The PongWindowPlugin is the main type required to be added to the game to implement
/// the window for pong. It adds the default engine plugins, configured for a window
/// exactly the size of the arena that cannot be resized.
///
/// Closing the window does not exit the app directly. A close request is delivered as a
/// WindowCloseRequested message, which the game module handles.
///
pub struct PongWindowPlugin;

impl Plugin for PongWindowPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(pong_window()),
                    close_when_requested: false,
                    ..default()
                })
                .set(LogPlugin {
                    level: LOG_LEVEL,
                    filter: LOG_FILTER.to_string(),
                    ..default()
                }),
        );
    }
}

// -------------------------------------------------------------------------------------------------
// Private Functions

// The primary window settings, sized to the arena
fn pong_window() -> Window {
    Window {
        title: PONG_WINDOW_TITLE.to_string(),
        present_mode: PresentMode::AutoVsync,
        resolution: WindowResolution::new(ARENA_WIDTH as u32, ARENA_HEIGHT as u32),
        resizable: false,
        ..default()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
