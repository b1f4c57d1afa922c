use crate::data::{CanvasConfig, GridConfig};
use crate::math::Vec2;
use super::plant::Plant;

/// Place one pot per grid cell, evenly spread across the canvas width.
///
/// Columns sit at `(col + 1) * width / (cols + 1)`; rows are spaced by
/// `height / (rows + 1)` plus a fixed extra so the pots clear the sky in the
/// background art.
pub fn layout_plants(canvas: &CanvasConfig, grid: &GridConfig) -> Vec<Plant> {
    let spacing_x = canvas.width / (grid.cols + 1) as f32;
    let spacing_y = canvas.height / (grid.rows + 1) as f32 + grid.row_spacing_extra;

    let mut plants = Vec::with_capacity(grid.rows * grid.cols);
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let position = Vec2::new(
                (col + 1) as f32 * spacing_x,
                spacing_y * row as f32 + grid.top_offset,
            );
            plants.push(Plant::new(position, row, col));
        }
    }
    plants
}
