//!
//! This module contains code to manage the ball within the game, including
//! its creation, movement, and bounce physics. The ball also keeps count of
//! how often it has hit the left and top walls, and reports each hit as a score.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;

use crate::common::*;
use crate::score::PlayerScored;

// -------------------------------------------------------------------------------------------------
// Constants

const BALL_START_CENTER: IVec2 = IVec2::new(50, 50);
const BALL_START_VELOCITY: IVec2 = IVec2::new(4, 4);
const BALL_RADIUS: i32 = 5;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// This plugin adds the pong ball to the screen and keeps its on-screen circle in
/// sync with the simulated ball. Stepping the ball is left to the game module,
/// which owns the collision queries against the paddles.
///
pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball.in_set(Systems::BallCreation))
            .add_systems(Update, draw_ball.in_set(Systems::Draw));
    }
}

///
/// System sets to allow modules consuming this plugin to create ordering constraints
/// based on functionality exposed in the API of the Plugin.
///
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Systems {
    /// Startup systems which create the ball. After this, one Ball entity will exist.
    BallCreation,

    /// Update systems which move the ball's circle to its current center.
    Draw,
}

///
/// The ball, in surface pixels (origin at top left, y growing downward).
///
/// The velocity starts with both components nonzero, and every bounce only flips
/// the sign of one component, so the ball never comes to rest.
///
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Ball {
    center: IVec2,
    radius: i32,
    velocity: IVec2,
    left_wall_hits: u32,
    top_wall_hits: u32,
}

impl Ball {
    /// Creates a ball with no wall hits counted yet.
    pub fn new(center: IVec2, radius: i32, velocity: IVec2) -> Self {
        Ball {
            center,
            radius,
            velocity,
            left_wall_hits: 0,
            top_wall_hits: 0,
        }
    }

    /// The current center of the ball. This is the point used for paddle hit-tests.
    pub fn position(&self) -> IVec2 {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    /// Times the ball has hit the left wall. Each one scored for player 1.
    pub fn left_wall_hits(&self) -> u32 {
        self.left_wall_hits
    }

    /// Times the ball has hit the top wall. Each one scored for player 2.
    pub fn top_wall_hits(&self) -> u32 {
        self.top_wall_hits
    }

    ///
    /// Advances the ball by one tick within an arena of the given size, and bounces it
    /// off walls and paddles. The paddle hit flags come from the caller's hit-tests
    /// against the center as it was BEFORE this step.
    ///
    /// Each check below runs every tick, in order, regardless of earlier ones. Two
    /// checks may both flip the same component in one tick, cancelling each other out.
    ///
    /// Returns a PlayerScored for each wall hit that counted as a score.
    ///
    pub fn step(
        &mut self,
        hit_left_paddle: bool,
        hit_right_paddle: bool,
        arena: IVec2,
    ) -> Vec<PlayerScored> {
        let mut scored = Vec::new();

        self.center += self.velocity;

        // Left wall
        if self.center.x < self.radius {
            self.velocity.x = -self.velocity.x;
            self.left_wall_hits += 1;
            scored.push(PlayerScored {
                player: Player1,
                total: self.left_wall_hits,
            });
        }

        // Top wall
        if self.center.y < self.radius {
            self.velocity.y = -self.velocity.y;
            self.top_wall_hits += 1;
            scored.push(PlayerScored {
                player: Player2,
                total: self.top_wall_hits,
            });
        }

        // Right wall
        if self.center.x + self.radius > arena.x {
            self.velocity.x = -self.velocity.x;
        }

        // Bottom wall
        if self.center.y + self.radius > arena.y {
            self.velocity.y = -self.velocity.y;
        }

        if hit_left_paddle && self.velocity.x < 1 {
            self.velocity.x = -self.velocity.x;
        }

        if hit_right_paddle && self.velocity.x > 1 {
            self.velocity.x = -self.velocity.x;
        }

        scored
    }
}

impl Default for Ball {
    fn default() -> Self {
        Ball::new(BALL_START_CENTER, BALL_RADIUS, BALL_START_VELOCITY)
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Adds the Ball entity to the app as a white filled circle, at its starting
// location and already moving.
//
fn setup_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let ball = Ball::default();
    debug!("Spawning ball at {} with velocity {}", ball.center, ball.velocity);

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(ball.radius as f32))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::WHITE))),
        Transform::from_translation(to_world(ball.center, Z_FOREGROUND)),
        ball,
    ));
}

// Moves the ball's circle to its current center
fn draw_ball(ball_q: Single<(&Ball, &mut Transform)>) {
    let (ball, mut ball_tf) = ball_q.into_inner();
    ball_tf.translation = to_world(ball.center, Z_FOREGROUND);
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
