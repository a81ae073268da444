//!
//! Contains code to setup and manage the paddles on either side of the pong screen,
//! and allow other code to move them and query them for collision with the ball.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

/// Pixels per tick a paddle travels while a move key is held
pub const PADDLE_SPEED: i32 = 10;

const PADDLE_WIDTH: i32 = 10;
const PADDLE_HEIGHT: i32 = 60;
const PADDLE_TOP_Y: i32 = 10;
const P1_PADDLE_X: i32 = 50;
const P2_PADDLE_X: i32 = 450;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The PaddlePlugin adds 2 paddles to the screen, one for each player, and keeps
/// their on-screen sprites in sync with their simulated rectangles. Moving the
/// paddles is left to the game module via the Paddle API.
///
pub struct PaddlePlugin;

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_paddles.in_set(Systems::PaddleCreation))
            .add_systems(Update, draw_paddles.in_set(Systems::Draw));
    }
}

/// These SystemSets are used to control any system ordering dependencies on this plugin
#[derive(SystemSet, Debug, Clone, Hash, PartialEq, Eq)]
pub enum Systems {
    /// Creates the paddle entities. Must be in Startup.
    PaddleCreation,

    ///
    /// Copies each paddle's rectangle onto its sprite transform. Must be in Update.
    /// Anything ordered before this set is visible in the current frame.
    ///
    Draw,
}

///
/// A paddle on the arena surface. The rectangle is in surface pixels (origin at top
/// left, y growing downward). Only the vertical component of the velocity is ever
/// nonzero, and it is always one of -PADDLE_SPEED, 0, or PADDLE_SPEED.
///
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Paddle {
    player: PlayerId,
    rect: IRect,
    velocity: IVec2,
}

impl Paddle {
    /// Creates a stationary paddle for the given player with its top left corner at (x, y).
    pub fn new(player: PlayerId, x: i32, y: i32, width: i32, height: i32) -> Self {
        Paddle {
            player,
            rect: IRect::new(x, y, x + width, y + height),
            velocity: IVec2::ZERO,
        }
    }

    /// The player who controls this paddle.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The current rectangle of the paddle, in surface pixels.
    pub fn rect(&self) -> IRect {
        self.rect
    }

    /// The current velocity of the paddle, in pixels per tick.
    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    /// Start moving up the screen on the next step.
    pub fn move_up(&mut self) {
        self.velocity.y = -PADDLE_SPEED;
    }

    /// Start moving down the screen on the next step.
    pub fn move_down(&mut self) {
        self.velocity.y = PADDLE_SPEED;
    }

    /// Stop moving.
    pub fn stop(&mut self) {
        self.velocity.y = 0;
    }

    ///
    /// Moves the paddle by its velocity. If the paddle's top edge reaches the top of
    /// the arena, or its bottom edge reaches `arena_height`, the paddle stops. It is
    /// NOT pushed back inside the arena, so it may rest slightly past the edge.
    ///
    pub fn step(&mut self, arena_height: i32) {
        self.rect.min += self.velocity;
        self.rect.max += self.velocity;

        if self.rect.min.y <= 0 || self.rect.max.y >= arena_height {
            self.velocity.y = 0;
        }
    }

    /// Whether the point lies within the paddle's rectangle, edges included.
    pub fn contains_point(&self, point: IVec2) -> bool {
        self.rect.contains(point)
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Creates two paddles - one for each player. Both start near the top of the arena,
// the player 1 paddle towards the left edge and the player 2 paddle towards the right.
//
fn setup_paddles(mut commands: Commands) {
    for (player, x) in [(Player1, P1_PADDLE_X), (Player2, P2_PADDLE_X)] {
        let paddle = Paddle::new(player, x, PADDLE_TOP_Y, PADDLE_WIDTH, PADDLE_HEIGHT);
        debug!("Spawning {player:?} paddle at {:?}", paddle.rect);

        commands.spawn((
            Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::ONE),
                ..default()
            },
            Anchor::TOP_LEFT,
            paddle_transform(&paddle),
            paddle,
        ));
    }
}

// Moves each paddle's sprite to match its current rectangle
fn draw_paddles(paddles: Query<(&Paddle, &mut Transform)>) {
    for (paddle, mut tf) in paddles {
        *tf = paddle_transform(paddle);
    }
}

// -------------------------------------------------------------------------------------------------
// Private Functions

// The unit sprite is scaled up to the rectangle size and anchored at its top left corner
fn paddle_transform(paddle: &Paddle) -> Transform {
    Transform {
        translation: to_world(paddle.rect.min, Z_FOREGROUND),
        scale: paddle.rect.size().as_vec2().extend(1f32),
        ..default()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
