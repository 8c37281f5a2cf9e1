//! Brick grid
//!
//! Cells are stored column-major (index = column * rows + row), which is also
//! the traversal order for drawing and collision. Each brick's rectangle is
//! computed once from its (column, row) when the grid is built.

use super::collision::Rect;
use crate::color::Rgba;
use crate::config::Config;
use crate::consts::BRICK_COLORS;

/// A single destructible cell
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub rect: Rect,
    pub color: Rgba,
    alive: bool,
}

impl Brick {
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Fixed-size grid of bricks
#[derive(Debug, Clone)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    cells: Vec<Brick>,
}

impl BrickGrid {
    /// Build a fully alive grid laid out per the config
    pub fn new(config: &Config) -> Self {
        let columns = config.brick_columns;
        let rows = config.brick_rows;
        let mut cells = Vec::with_capacity(columns * rows);

        for column in 0..columns {
            for row in 0..rows {
                let x = column as f32 * (config.brick_width + config.brick_padding)
                    + config.brick_offset_left;
                let y = row as f32 * (config.brick_height + config.brick_padding)
                    + config.brick_offset_top;
                cells.push(Brick {
                    column,
                    row,
                    rect: Rect::new(x, y, config.brick_width, config.brick_height),
                    color: row_color(row),
                    alive: true,
                });
            }
        }

        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Bring every cell back to life with its row colour
    pub fn initialize(&mut self) {
        for brick in &mut self.cells {
            brick.alive = true;
            brick.color = row_color(brick.row);
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column < self.columns && row < self.rows {
            self.cells.get(column * self.rows + row)
        } else {
            None
        }
    }

    /// Alive bricks in column-major, then row order
    pub fn iter_alive(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter().filter(|b| b.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }

    /// Win condition: no alive cell remains
    pub fn all_destroyed(&self) -> bool {
        self.cells.iter().all(|b| !b.alive)
    }

    /// Index of the first alive brick (traversal order) overlapping `rect`
    pub fn first_overlap(&self, rect: &Rect) -> Option<usize> {
        self.cells
            .iter()
            .position(|b| b.alive && b.rect.overlaps(rect))
    }

    /// Destroy the brick at `index`
    ///
    /// Returns the brick only on its alive → destroyed transition; destroying
    /// an already-destroyed or out-of-range cell yields `None`.
    pub fn destroy(&mut self, index: usize) -> Option<&Brick> {
        let brick = self.cells.get_mut(index)?;
        if !brick.alive {
            return None;
        }
        brick.alive = false;
        Some(brick)
    }

    /// Destroy the cell at (column, row); see [`BrickGrid::destroy`]
    pub fn destroy_at(&mut self, column: usize, row: usize) -> Option<&Brick> {
        if column < self.columns && row < self.rows {
            self.destroy(column * self.rows + row)
        } else {
            None
        }
    }
}

/// Row-indexed brick colour (palette repeats for tall grids)
pub fn row_color(row: usize) -> Rgba {
    BRICK_COLORS[row % BRICK_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> BrickGrid {
        BrickGrid::new(&Config::new())
    }

    #[test]
    fn test_layout() {
        let grid = grid();
        assert_eq!(grid.alive_count(), 60);

        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.rect, Rect::new(35.0, 60.0, 70.0, 20.0));

        let last = grid.get(9, 5).unwrap();
        assert_eq!(last.rect, Rect::new(710.0, 185.0, 70.0, 20.0));
        assert_eq!(last.color, BRICK_COLORS[5]);

        assert!(grid.get(10, 0).is_none());
        assert!(grid.get(0, 6).is_none());
    }

    #[test]
    fn test_traversal_is_column_major() {
        let grid = grid();
        let order: Vec<(usize, usize)> = grid
            .iter_alive()
            .take(8)
            .map(|b| (b.column, b.row))
            .collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_all_destroyed() {
        let mut grid = grid();
        assert!(!grid.all_destroyed());

        grid.destroy_at(3, 2);
        assert!(!grid.all_destroyed());
        assert_eq!(grid.alive_count(), 59);

        for i in 0..59 {
            let idx = if i >= 3 * 6 + 2 { i + 1 } else { i };
            assert!(grid.destroy(idx).is_some());
        }
        assert_eq!(grid.alive_count(), 0);
        assert!(grid.all_destroyed());
    }

    #[test]
    fn test_fifty_nine_of_sixty_is_not_a_win() {
        let mut grid = grid();
        for i in 0..59 {
            grid.destroy(i);
        }
        assert_eq!(grid.alive_count(), 1);
        assert!(!grid.all_destroyed());
    }

    #[test]
    fn test_destroy_is_once_only() {
        let mut grid = grid();
        assert!(grid.destroy_at(1, 1).is_some());
        assert!(grid.destroy_at(1, 1).is_none());
        assert!(!grid.get(1, 1).unwrap().is_alive());
        assert!(grid.destroy(1000).is_none());
    }

    #[test]
    fn test_initialize_revives() {
        let mut grid = grid();
        grid.destroy_at(0, 0);
        grid.destroy_at(9, 5);
        grid.initialize();
        assert_eq!(grid.alive_count(), 60);
    }

    #[test]
    fn test_first_overlap_picks_traversal_order() {
        let grid = grid();
        // Straddles the gap between column 0 and column 1 in row 0
        let probe = Rect::around_circle(glam::Vec2::new(107.5, 70.0), 8.0);
        let idx = grid.first_overlap(&probe).unwrap();
        let brick = grid.iter_alive().nth(idx).unwrap();
        assert_eq!((brick.column, brick.row), (0, 0));
    }
}
