use bevy::prelude::*;

use classic_pong::PongPlugins;

fn main() {
    App::new().add_plugins(PongPlugins).run();
}
