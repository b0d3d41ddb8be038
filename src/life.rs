use std::time::Duration;

use bevy::prelude::*;

use crate::{
    grid::Grid,
    input::{toggle_cell_on_click, MouseEdge},
    prelude::*,
    render::{load_meshes_and_materials, spawn_cells, sync_cell_materials, Board},
    state::{GameState, StopReason},
};

pub struct LifePlugin;

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Board::default())
            .insert_resource(Grid::default())
            .insert_resource(MouseEdge::default())
            .insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(
                UPDATE_INTERVAL_MS,
            )))
            .add_systems(
                OnEnter(GameState::Load),
                (
                    print_welcome,
                    load_meshes_and_materials,
                    spawn_cells,
                    finish_setup,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                advance_generation.run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                // FixedUpdate runs before Update, so each frame draws the grid after that
                // frame's generations have been committed
                (
                    (toggle_cell_on_click, handle_setup_kbd, start_on_space)
                        .chain()
                        .run_if(in_state(GameState::Editing)),
                    sync_cell_materials.run_if(resource_changed::<Grid>),
                )
                    .chain(),
            );
    }
}

// ——> SYSTEMS

fn print_welcome() {
    info!("****WELCOME****");
    info!("**INSTRUCTIONS**");
    info!("Click cells to bring them to life or kill them");
    info!("Press <space> to begin simulation");
    info!("Press <backspace> to halt simulation");
    info!("Press <r> to randomize, <c> to clear the board");
}

fn finish_setup(mut next_state: ResMut<NextState<GameState>>) {
    info!("**Set Up Complete**");
    next_state.set(GameState::Editing);
}

/// Switches to running on any frame where space is held down.
pub fn start_on_space(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    grid: Res<Grid>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.pressed(KeyCode::Space) {
        info!("simulation started with {} live cells", grid.population());
        next_state.set(GameState::Running);
    }
}

fn handle_setup_kbd(mut grid: ResMut<Grid>, keyboard_input: Res<ButtonInput<KeyCode>>) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        grid.randomize();
    } else if keyboard_input.just_pressed(KeyCode::KeyC) {
        grid.clear();
    }
}

/// Computes one generation and goes back to editing when the simulation is halted, stable or
/// extinct.
pub fn advance_generation(
    mut grid: ResMut<Grid>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    // a fixed step catching up in the same frame must not advance past the stopping generation
    if matches!(*next_state, NextState::Pending(_)) {
        return;
    }

    let changed = grid.step();
    let stop = StopReason::check(
        keyboard_input.pressed(KeyCode::Backspace),
        changed,
        grid.population(),
    );

    if let Some(reason) = stop {
        info!("{reason} (generation {})", grid.generation());
        next_state.set(GameState::Editing);
    }
}
