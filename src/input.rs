use bevy::{prelude::*, window::PrimaryWindow};

use crate::{grid::Grid, render::Board};

pub const LEFT_BUTTON: u32 = 1;
pub const MIDDLE_BUTTON: u32 = 1 << 1;
pub const RIGHT_BUTTON: u32 = 1 << 2;

/// Remembers the last seen mouse button bitmask so that a click toggles a cell once, no matter
/// how long the button stays down.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MouseEdge {
    previous: u32,
}

impl MouseEdge {
    /// Records `buttons` and reports whether it is a press of the left button relative to the
    /// previously recorded bitmask.
    pub fn press_edge(&mut self, buttons: u32) -> bool {
        let edge = buttons.wrapping_sub(self.previous) == LEFT_BUTTON;
        self.previous = buttons;
        edge
    }
}

/// Packs the held mouse buttons into a bitmask.
pub fn mouse_bitmask(mouse: &ButtonInput<MouseButton>) -> u32 {
    [
        (MouseButton::Left, LEFT_BUTTON),
        (MouseButton::Middle, MIDDLE_BUTTON),
        (MouseButton::Right, RIGHT_BUTTON),
    ]
    .into_iter()
    .filter(|(button, _)| mouse.pressed(*button))
    .fold(0, |mask, (_, bit)| mask | bit)
}

/// Flips the cell under the cursor on a left click.
pub fn toggle_cell_on_click(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    board: Res<Board>,
    mut edge: ResMut<MouseEdge>,
    mut grid: ResMut<Grid>,
) {
    if !edge.press_edge(mouse_bitmask(&mouse)) {
        return;
    }
    let Some(cursor) = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
    else {
        return;
    };

    let coord = board.cursor_to_cell_coord(cursor);
    if let Some(alive) = grid.toggle(coord) {
        debug!("cell {coord} toggled, alive: {alive}");
    }
}
