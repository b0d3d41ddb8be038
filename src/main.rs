use bevy::{prelude::*, window::WindowResolution};
use conway_life::{camera::CamPlugin, life::LifePlugin, prelude::*, state::GameState};

fn main() -> AppExit {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.into(),
                        resizable: false,
                        focused: true,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(WINDOW_SIZE_PX, WINDOW_SIZE_PX),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .init_state::<GameState>()
        .add_plugins((CamPlugin, LifePlugin))
        .run()
}
