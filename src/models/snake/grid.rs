//! Coordinate space the snake lives in.
use super::heading::Heading;

/// A discrete grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step along `heading`.
    #[must_use]
    pub fn step(self, heading: Heading) -> Self {
        let (dc, dr) = heading.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Static play-field dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Whether `cell` lies in `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < i32::from(self.width)
            && cell.row < i32::from(self.height)
    }

    #[must_use]
    pub fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Row-major walk over every cell.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }

    /// Centre cell, rounding down like the original layout (13x10 -> (6, 5)).
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let grid = Grid::new(13, 10);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(12, 9)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
        assert!(!grid.contains(Cell::new(13, 0)));
        assert!(!grid.contains(Cell::new(0, 10)));
    }

    #[test]
    fn test_step_follows_heading() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Heading::Up), Cell::new(5, 4));
        assert_eq!(cell.step(Heading::Down), Cell::new(5, 6));
        assert_eq!(cell.step(Heading::Left), Cell::new(4, 5));
        assert_eq!(cell.step(Heading::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_cells_covers_area() {
        let grid = Grid::new(4, 3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(1, 1));
        assert!(cells.iter().all(|c| grid.contains(*c)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(13, 10).center(), Cell::new(6, 5));
    }

    #[test]
    fn test_queries_by_value_leave_grid_usable() {
        let grid = Grid::new(3, 2);
        let walk = grid.cells();
        assert_eq!(grid.area(), 6);
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(walk.last(), Some(Cell::new(2, 1)));
        assert!(grid.contains(grid.center()));
    }
}
