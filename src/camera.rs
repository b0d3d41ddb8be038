use bevy::prelude::*;

use crate::{prelude::BG_COLOR, state::GameState};

pub struct CamPlugin;

impl Plugin for CamPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BG_COLOR))
            .add_systems(OnEnter(GameState::Load), spawn_cam);
    }
}

// Init
fn spawn_cam(mut commands: Commands) {
    // one world unit per logical pixel, so the board lines up with the cursor
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: bevy::render::camera::ScalingMode::WindowSize,
            scale: 1.0,
            ..OrthographicProjection::default_2d()
        },
        Msaa::Off,
    ));
}
