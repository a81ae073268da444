//!
//! The game module ties the paddles and ball together. It maps keyboard input onto
//! paddle commands, handles requests to close the game, and runs the per-tick update
//! where the ball is tested against both paddles before everything moves.
//!
//! Each tick of the app runs, in order: input handling, drawing, and (while the game
//! is running) the update. Drawing happens before the update, so the frame shown for
//! a tick is the state the tick started with.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::ball::{self, Ball};
use crate::common::*;
use crate::paddle::{self, Paddle};
use crate::score::{self, PlayerScored};

// -------------------------------------------------------------------------------------------------
// Constants

// Each paddle owns one up key and one down key. Every other key is ignored.
const PADDLE_KEY_BINDINGS: [(KeyCode, PlayerId, PaddleKey); 4] = [
    (KeyCode::KeyQ, Player1, PaddleKey::Up),
    (KeyCode::KeyA, Player1, PaddleKey::Down),
    (KeyCode::KeyP, Player2, PaddleKey::Up),
    (KeyCode::KeyL, Player2, PaddleKey::Down),
];

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The GamePlugin adds the game state and the systems that drive each tick. It expects
/// the PaddlePlugin, BallPlugin and ScorePlugin to be added as well, and orders their
/// system sets around its own.
///
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .add_systems(
                Update,
                (handle_close_request, handle_paddle_keys).in_set(Systems::HandleInput),
            )
            .add_systems(
                Update,
                update_game.run_if(game_running).in_set(Systems::Physics),
            )
            .configure_sets(
                Update,
                (Systems::HandleInput, Systems::Draw, Systems::Physics).chain(),
            )
            .configure_sets(
                Update,
                (
                    paddle::Systems::Draw.in_set(Systems::Draw),
                    ball::Systems::Draw.in_set(Systems::Draw),
                    Systems::Physics.before(score::Systems::Update),
                ),
            );
    }
}

///
/// The SystemSets making up one tick of the game, in the order they run.
///
#[derive(SystemSet, Debug, Clone, Hash, PartialEq, Eq)]
pub enum Systems {
    /// Reads keyboard and window messages and applies them to paddles and game state.
    HandleInput,

    /// Copies the current simulation state onto the on-screen entities.
    Draw,

    /// Advances the ball and paddles by one tick. Skipped while the game is not running.
    Physics,
}

///
/// Flags describing whether the game should keep going. Nothing in the game currently
/// ends a round, so `running` stays true for the life of the app.
///
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Set once the player asks to close the window. The app exits after this tick.
    pub close_requested: bool,
    /// While false, ticks still handle input and draw, but nothing moves.
    pub running: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            close_requested: false,
            running: true,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Private Types

// The direction a bound key moves its paddle while pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaddleKey {
    Up,
    Down,
}

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Applies key presses and releases to the paddles, in the order they happened. A press
// sets the paddle moving in that key's direction. A release of either of a paddle's keys
// stops it, even if the other key is still held.
//
fn handle_paddle_keys(mut keys: MessageReader<KeyboardInput>, paddles: Query<&mut Paddle>) {
    if keys.is_empty() {
        return;
    }

    let (p1, p2) = paddles
        .into_iter()
        .map(|paddle| (paddle.player(), paddle.into_inner()))
        .as_per_player();

    for key in keys.read() {
        if key.repeat {
            continue;
        }

        let Some((player, dir)) = paddle_key(key.key_code) else {
            continue;
        };

        let paddle = match player {
            Player1 => &mut *p1,
            Player2 => &mut *p2,
        };

        match (key.state, dir) {
            (ButtonState::Pressed, PaddleKey::Up) => paddle.move_up(),
            (ButtonState::Pressed, PaddleKey::Down) => paddle.move_down(),
            (ButtonState::Released, _) => paddle.stop(),
        }
        debug!("{player:?} paddle velocity now {}", paddle.velocity());
    }
}

// Marks the game as closing when the window asks to close, and tells the app to exit
fn handle_close_request(
    mut requests: MessageReader<WindowCloseRequested>,
    mut game_state: ResMut<GameState>,
    mut exit_msgs: MessageWriter<AppExit>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    if !game_state.close_requested {
        info!("Window close requested, exiting after this tick");
        game_state.close_requested = true;
        exit_msgs.write(AppExit::Success);
    }
}

//
// Runs one tick of the simulation. Both paddle hit-tests use the ball's center from
// before it moves. The ball moves next, reporting any scores, then both paddles move.
//
fn update_game(
    ball: Single<&mut Ball>,
    paddles: Query<&mut Paddle>,
    mut scored_msgs: MessageWriter<PlayerScored>,
) {
    let mut ball = ball.into_inner();
    let (p1, p2) = paddles
        .into_iter()
        .map(|paddle| (paddle.player(), paddle.into_inner()))
        .as_per_player();

    let point = ball.position();
    let hit_left_paddle = p1.contains_point(point);
    let hit_right_paddle = p2.contains_point(point);

    scored_msgs.write_batch(ball.step(hit_left_paddle, hit_right_paddle, ARENA_SIZE));

    p1.step(ARENA_HEIGHT);
    p2.step(ARENA_HEIGHT);
}

// Run condition gating the per-tick update
fn game_running(game_state: Res<GameState>) -> bool {
    game_state.running
}

// -------------------------------------------------------------------------------------------------
// Private Functions

// Looks up which paddle and direction a key is bound to, if any
fn paddle_key(key_code: KeyCode) -> Option<(PlayerId, PaddleKey)> {
    PADDLE_KEY_BINDINGS
        .iter()
        .find(|(bound, ..)| *bound == key_code)
        .map(|&(_, player, dir)| (player, dir))
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
