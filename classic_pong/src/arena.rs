//!
//! The arena module contains code to set up the surface the pong game is drawn on:
//! a black background of ARENA_WIDTH x ARENA_HEIGHT pixels, and the camera that
//! renders it.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

const ARENA_BACKGROUND_COLOR: Color = Color::BLACK;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The ArenaPlugin sets the background color the whole arena is cleared to each frame,
/// and adds a single 2d camera framing exactly the arena. One world unit on screen is
/// one arena pixel while the window matches the arena size.
///
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(ARENA_BACKGROUND_COLOR))
            .add_systems(Startup, setup_camera.in_set(Systems::CameraSetup));
    }
}

/// These SystemSets are used to control any system ordering dependencies on this plugin
#[derive(SystemSet, Debug, Clone, Hash, PartialEq, Eq)]
pub enum Systems {
    /// Implements all logic to create the 2d camera entity. Must be in Startup.
    CameraSetup,
}

// -------------------------------------------------------------------------------------------------
// Private Systems

// Sets up the 2D camera centered on the arena, keeping the whole arena in view
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: ARENA_WIDTH as f32,
                min_height: ARENA_HEIGHT as f32,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

// -------------------------------------------------------------------------------------------------
// Unit Tests

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::query::QuerySingleError::{MultipleEntities, NoEntities};
    use bevy_test_helpers::prelude::*;

    #[test]
    fn test_plugin_build() {
        let mut app = App::new();
        app.add_plugins(ArenaPlugin);

        let clear_color = app
            .world()
            .get_resource::<ClearColor>()
            .expect("Expected ClearColor resource to be added by ArenaPlugin");
        assert_eq!(clear_color.0, Color::BLACK, "Expected black arena background");
    }

    #[test]
    fn test_plugin_sys_added_camera() {
        validate_sys_in_plugin(ArenaPlugin, Startup, setup_camera, Systems::CameraSetup);
    }

    #[test]
    fn test_camera_setup_system() {
        let mut world = World::default();
        let setup_sys = world.register_system(setup_camera);

        // Run the system and validate 1 Camera was created with correct Projection
        world.run_system(setup_sys).unwrap();
        let mut query = world.query_filtered::<&Projection, With<Camera2d>>();
        match query.single(&world) {
            Ok(Projection::Orthographic(proj)) => match proj.scaling_mode {
                ScalingMode::AutoMin {
                    min_width,
                    min_height,
                } => {
                    assert_eq!(
                        min_width, 500f32,
                        "Expected ScalingMode min_width of the arena width, but got {min_width}",
                    );
                    assert_eq!(
                        min_height, 400f32,
                        "Expected ScalingMode min_height of the arena height, but got {min_height}",
                    );
                }
                _ => panic!("Expected Scaling Mode AutoMin, got {:?}", proj.scaling_mode),
            },
            Ok(proj) => panic!("Expected Camera with OrthographicProjection, got {proj:?}"),
            Err(NoEntities(_)) => panic!("Expected single Camera, but none found."),
            Err(MultipleEntities(_)) => panic!("Expected single Camera, but found multiple."),
        }
    }

    #[test]
    fn test_camera_centered_on_arena() {
        let mut world = World::default();
        let setup_sys = world.register_system(setup_camera);
        world.run_system(setup_sys).unwrap();

        // The arena center maps to the world origin, which is where the camera looks
        let mut query = world.query_filtered::<Option<&Transform>, With<Camera2d>>();
        let tf = query.single(&world).unwrap().copied().unwrap_or_default();
        assert_eq!(tf.translation.truncate(), to_world(ARENA_SIZE / 2, 0f32).truncate());
    }
}
