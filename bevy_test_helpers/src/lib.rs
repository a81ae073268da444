//!
//! This crate contains helper functions to facilitate easier validation of certain bevy
//! constructs or situations, and to build the inputs that drive them in tests.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::app::Plugins;
use bevy::ecs::schedule::ScheduleBuildError;
use bevy::ecs::schedule::ScheduleLabel;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput, NativeKey};
use bevy::prelude::*;

use core::any::type_name;

// -------------------------------------------------------------------------------------------------
// Public API

/// The prelude includes all basic members of this crate and should be included with prelude::*
pub mod prelude {
    pub use super::keyboard_message;
    pub use super::read_messages;
    pub use super::validate_sets_ordered;
    pub use super::validate_sys_in_plugin;
}

///
/// Validates that the given system was added to the given schedule as part of the given
/// system set, after installing the given plugin in a new App.
///
/// Ordering the set before the system leads to a schedule build error if the system is
/// in the set, so the check is that building the schedule fails in exactly that way.
///
pub fn validate_sys_in_plugin<P, L, S, Marker, SS>(plugin: P, schedule: L, system: S, set: SS)
where
    P: Plugin,
    L: ScheduleLabel + Clone,
    S: IntoSystemSet<Marker>,
    SS: SystemSet,
{
    let mut app = App::new();
    app.add_plugins(plugin);

    app.configure_sets(schedule.clone(), set.before(system));
    let init_result = app
        .world_mut()
        .try_schedule_scope(schedule, |world, sched| sched.initialize(world))
        .unwrap_or_else(|_| {
            panic!(
                "Expected {} schedule to exist in app after adding {} plugin",
                type_name::<L>(),
                type_name::<P>(),
            )
        });
    let Err(ScheduleBuildError::SetsHaveOrderButIntersect(..)) = init_result else {
        panic!(
            concat!(
                "Expected {} schedule build to fail, ",
                "since {} should be in {} system set. But it succeeded unexpectedly, ",
                "suggesting the system is not in the set as it should be"
            ),
            type_name::<L>(),
            type_name::<S>(),
            type_name::<SS>(),
        );
    };
}

///
/// Validates that, after installing the given plugins in a new App, the `first` system
/// set is ordered to run before the `then` system set within the given schedule.
///
/// Ordering `then` before `first` on top of the plugins' own ordering must make the
/// schedule fail to build. An ordering inherited from a parent set is only seen through
/// the systems in the child set, so in that case the plugins must add systems to it.
///
pub fn validate_sets_ordered<P, M, L, S1, S2>(plugins: P, schedule: L, first: S1, then: S2)
where
    P: Plugins<M>,
    L: ScheduleLabel + Clone,
    S1: SystemSet,
    S2: SystemSet,
{
    let mut app = App::new();
    app.add_plugins(plugins);

    app.configure_sets(schedule.clone(), then.before(first));
    let init_result = app
        .world_mut()
        .try_schedule_scope(schedule, |world, sched| sched.initialize(world))
        .unwrap_or_else(|_| panic!("Expected {} schedule to exist in app", type_name::<L>()));

    assert!(
        init_result.is_err(),
        "Expected {} to be ordered before {} in {} schedule, but the reverse order was accepted",
        type_name::<S1>(),
        type_name::<S2>(),
        type_name::<L>(),
    );
}

///
/// Builds a non-repeating KeyboardInput message for the given physical key, as if it
/// came from the primary window. Only the key code and state are meaningful.
///
pub fn keyboard_message(key_code: KeyCode, state: ButtonState) -> KeyboardInput {
    KeyboardInput {
        key_code,
        logical_key: Key::Unidentified(NativeKey::Unidentified),
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    }
}

///
/// Returns clones of every message of type M still buffered in the world, oldest first.
/// The messages are left in place for any other readers.
///
pub fn read_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    let read_sys = world
        .register_system(|mut reader: MessageReader<M>| reader.read().cloned().collect::<Vec<M>>());
    world.run_system(read_sys).unwrap_or_else(|err| {
        panic!(
            "Expected to read {} messages, got error: {err}",
            type_name::<M>()
        )
    })
}
