pub mod camera;
pub mod grid;
pub mod input;
pub mod life;
pub mod render;
pub mod state;

pub mod prelude {
    use bevy::{color::Color, math::Vec2};

    pub const WINDOW_TITLE: &str = "Conway's Game of Life";
    pub const WINDOW_SIZE_PX: f32 = 800.0;

    /// time between two generations while the simulation runs (5 per second)
    pub const UPDATE_INTERVAL_MS: u64 = 200;
    pub const BG_COLOR: Color = Color::BLACK;

    pub const BOARD_SIZE: u32 = 50;
    pub const BOARD_POS: Vec2 = Vec2::ZERO;

    /// derived from the window and board size so the whole board fills the window
    pub const CELL_SIZE_PX: Vec2 = Vec2::splat(WINDOW_SIZE_PX / BOARD_SIZE as f32);
    pub const CELL_ALIVE_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
    pub const CELL_DEAD_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
}
