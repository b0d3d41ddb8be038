use bevy::{ecs::system::SystemState, math::vec2, prelude::*};

use crate::{grid::Grid, prelude::*};

// ——> SYSTEMS

/// initialize the cell mesh and materials in a resource
pub(crate) fn load_meshes_and_materials(
    world: &mut World,
    params: &mut SystemState<(
        ResMut<Assets<Mesh>>,
        ResMut<Assets<ColorMaterial>>,
        Res<Board>,
    )>,
) {
    let (mut meshes, mut materials, board) = params.get_mut(world);
    let cell = meshes.add(Rectangle::from_size(board.cell_size));
    let alive = materials.add(ColorMaterial::from_color(CELL_ALIVE_COLOR));
    let dead = materials.add(ColorMaterial::from_color(CELL_DEAD_COLOR));

    world.insert_resource(MeshAndMats { cell, alive, dead });
}

/// spawn one square per grid cell
pub(crate) fn spawn_cells(
    mut commands: Commands,
    meshes_and_mats: Res<MeshAndMats>,
    board: Res<Board>,
    grid: Res<Grid>,
) {
    let cells = grid
        .iter()
        .map(|(coord, alive)| {
            (
                CellSprite(coord),
                Mesh2d(meshes_and_mats.cell.clone()),
                MeshMaterial2d(meshes_and_mats.material_for(alive)),
                Transform::from_translation(board.cell_coord_to_translation(coord)),
            )
        })
        .collect::<Vec<_>>();
    commands.spawn_batch(cells);
}

/// Recolors every cell from the grid. Runs only on frames where the grid changed.
pub(crate) fn sync_cell_materials(
    mut cell_query: Query<(&CellSprite, &mut MeshMaterial2d<ColorMaterial>)>,
    meshes_and_mats: Option<Res<MeshAndMats>>,
    grid: Res<Grid>,
) {
    let Some(meshes_and_mats) = meshes_and_mats else {
        warn!("cell materials are not loaded, skipping redraw");
        return;
    };

    for (cell, mut material) in cell_query.iter_mut() {
        let wanted = meshes_and_mats.material_for(grid.is_alive(**cell));
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}

// ——> COMPONENTS

/// On-screen square of the grid cell at this coordinate.
#[derive(Component, Debug, Deref)]
pub struct CellSprite(UVec2);

// ——> RESOURCES

/// hold handles for the cell mesh and materials
#[derive(Resource, Clone)]
pub(crate) struct MeshAndMats {
    cell: Handle<Mesh>,
    alive: Handle<ColorMaterial>,
    dead: Handle<ColorMaterial>,
}

impl MeshAndMats {
    fn material_for(&self, alive: bool) -> Handle<ColorMaterial> {
        if alive {
            self.alive.clone()
        } else {
            self.dead.clone()
        }
    }
}

/// Where and how large the grid is drawn.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Board {
    /// the center of the board
    pub center: Vec2,
    /// the amount of cells on each axis
    pub size: u32,
    /// the size of each individual cell
    pub cell_size: Vec2,
}

impl Board {
    /// computes full size of the board in pixels
    #[inline]
    pub fn pixel_size(&self) -> Vec2 {
        vec2(
            self.size as f32 * self.cell_size.x,
            self.size as f32 * self.cell_size.y,
        )
    }

    /// World position of a cell's center. Row 0 is drawn at the top of the board.
    #[inline]
    pub fn cell_coord_to_translation(&self, cell_coord: UVec2) -> Vec3 {
        let top_left = self.center + self.pixel_size() * vec2(-0.5, 0.5);
        let offset =
            (cell_coord.as_vec2() * self.cell_size + self.cell_size * 0.5) * vec2(1.0, -1.0);
        (top_left + offset).extend(10.0)
    }

    /// Maps a window cursor position (origin top left, y down) to the cell under it.
    ///
    /// The board is expected to fill the window; positions past its edges clamp to the
    /// nearest cell.
    #[inline]
    pub fn cursor_to_cell_coord(&self, cursor: Vec2) -> UVec2 {
        let cell = (cursor.max(Vec2::ZERO) / self.cell_size).as_uvec2();
        cell.min(UVec2::splat(self.size.saturating_sub(1)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            center: BOARD_POS,
            size: BOARD_SIZE,
            cell_size: CELL_SIZE_PX,
        }
    }
}
