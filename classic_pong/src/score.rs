//!
//! The pong score module contains the ScorePlugin, which reports score
//! notifications raised by the ball and manages the on-screen score text.
//!
//! The on-screen scores are placeholders: both always read "0", no matter
//! how many notifications have been reported.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

const SCORE_FONT_SIZE: f32 = 70f32;
const SCORE_PLACEHOLDER_TEXT: &str = "0";
const P1_SCORE_TEXT_CORNER: IVec2 = IVec2::new(10, 10);
const P2_SCORE_TEXT_CORNER: IVec2 = IVec2::new(470, 10);

// -------------------------------------------------------------------------------------------------
// Public API

///
/// This plugin adds all score keeping UI to the game. Note that it does not detect
/// score events on its own. Other game logic sends PlayerScored messages, and this
/// plugin reports them.
///
/// To ensure necessary ordering constraints are maintained, see descriptions
/// of below Messages and SystemSets.
///
pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerScored>()
            .add_systems(Startup, setup.in_set(Systems::Startup))
            .add_systems(Update, report_player_score.in_set(Systems::Update));
    }
}

///
/// This message should be written by other code to notify the score module when
/// a player has scored. It carries the scorer's PlayerId and that player's new total.
///
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScored {
    pub player: PlayerId,
    pub total: u32,
}

///
/// Contains the SystemSets relevant to external code using this plugin.
/// These are exposed to enable proper ordering constraints in the game.
///
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Systems {
    /// Spawns the on-screen score text entities. Must be in Startup.
    Startup,

    ///
    /// Systems writing PlayerScored messages SHOULD occur in the Update schedule
    /// BEFORE this SystemSet is run, so scores are reported in the same game loop
    /// iteration they are detected.
    ///
    Update,
}

// -------------------------------------------------------------------------------------------------
// Private Components

// Component for the ScoreText Entity of each player (on-screen score numbers)
#[derive(Component)]
struct ScoreText(PlayerId);

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Setup system to spawn the 2 on-screen ScoreText entities, one in each top corner
// of the arena. Both show the placeholder text for the whole game.
//
fn setup(mut commands: Commands) {
    for (player, corner) in [
        (Player1, P1_SCORE_TEXT_CORNER),
        (Player2, P2_SCORE_TEXT_CORNER),
    ] {
        commands.spawn((
            ScoreText(player),
            Text2d::new(SCORE_PLACEHOLDER_TEXT),
            TextFont {
                font_size: SCORE_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Anchor::TOP_LEFT,
            Transform::from_translation(to_world(corner, Z_BEHIND_GAMEPLAY)),
        ));
    }
}

// Reports each PlayerScored message to the log as it arrives
fn report_player_score(mut messages: MessageReader<PlayerScored>) {
    for PlayerScored { player, total } in messages.read() {
        info!("Player {}: {}", player.number(), total);
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_test_helpers::prelude::*;

    #[test]
    fn test_plugin_build() {
        let mut app = App::new();
        app.add_plugins(ScorePlugin);

        assert!(
            app.world().is_resource_added::<Messages<PlayerScored>>(),
            "Expected PlayerScored messages to be added by ScorePlugin"
        );
    }

    #[test]
    fn test_plugin_sys_added_setup() {
        validate_sys_in_plugin(ScorePlugin, Startup, setup, Systems::Startup);
    }

    #[test]
    fn test_plugin_sys_added_report() {
        validate_sys_in_plugin(ScorePlugin, Update, report_player_score, Systems::Update);
    }

    #[test]
    fn test_setup_system() {
        let mut world = World::default();

        let setup_sys = world.register_system(setup);
        world
            .run_system(setup_sys)
            .expect("Expected setup system to run successfully");

        let mut query = world.query::<(&ScoreText, &Text2d, &TextFont, &Anchor, &Transform)>();
        let (p1, p2) = query
            .iter(&world)
            .map(|item| (item.0.0, item))
            .as_per_player();

        for ((_, text2d, font, anchor, tf), corner) in
            [(p1, P1_SCORE_TEXT_CORNER), (p2, P2_SCORE_TEXT_CORNER)]
        {
            assert_eq!(text2d.0, "0", "Expected ScoreTexts to read '0'");
            assert_eq!(font.font_size, SCORE_FONT_SIZE);
            assert_eq!(*anchor, Anchor::TOP_LEFT, "Expected score text anchored at top left");
            assert_eq!(
                tf.translation,
                to_world(corner, Z_BEHIND_GAMEPLAY),
                "Expected score text top left corner at {corner}",
            );
        }
    }

    #[test]
    fn test_score_text_stays_placeholder() {
        let mut world = World::default();
        world.init_resource::<Messages<PlayerScored>>();

        let setup_sys = world.register_system(setup);
        let report_sys = world.register_system(report_player_score);
        world.run_system(setup_sys).unwrap();

        world.write_message(PlayerScored {
            player: Player1,
            total: 3,
        });
        world.write_message(PlayerScored {
            player: Player2,
            total: 1,
        });
        world.run_system(report_sys).unwrap();

        let mut query = world.query::<&Text2d>();
        for text2d in query.iter(&world) {
            assert_eq!(
                text2d.0, "0",
                "Expected score text to remain a placeholder after scoring"
            );
        }
    }
}
