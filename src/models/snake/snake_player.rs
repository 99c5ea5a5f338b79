//! Module for containing the player's snake.
use std::collections::VecDeque;

use super::{grid::Cell, heading::Heading};

/// The player's snake: its occupied cells (head first) and heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    squares_taken: VecDeque<Cell>,
    /// Direction of the last executed move.
    last_heading: Heading,
    /// Direction the next move will take.
    next_heading: Heading,
}

impl Snake {
    /// Lays out `length` cells from `head` backwards against `heading`. The
    /// snake always keeps at least its head, so a zero length gives one cell.
    #[must_use]
    pub fn new(head: Cell, heading: Heading, length: usize) -> Self {
        let behind = heading.opposite();
        let length = length.max(1);
        let mut squares_taken = VecDeque::with_capacity(length);
        let mut cell = head;
        for _ in 0..length {
            squares_taken.push_back(cell);
            cell = cell.step(behind);
        }
        Self {
            squares_taken,
            last_heading: heading,
            next_heading: heading,
        }
    }

    /// Builds a snake from explicit cells, head first. `cells` must not be
    /// empty.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = Cell>, heading: Heading) -> Self {
        Self {
            squares_taken: cells.into_iter().collect(),
            last_heading: heading,
            next_heading: heading,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &VecDeque<Cell> {
        &self.squares_taken
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.squares_taken[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares_taken.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares_taken.is_empty()
    }

    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.squares_taken.contains(&cell)
    }

    /// Heading the next move will use.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.next_heading
    }

    #[must_use]
    pub fn last_heading(&self) -> Heading {
        self.last_heading
    }

    /// Buffers `requested` for the next move. Reversals of either the buffered
    /// or the last executed heading are ignored. Returns whether it was taken.
    pub fn set_heading(&mut self, requested: Heading) -> bool {
        if requested.is_opposite(self.next_heading) || requested.is_opposite(self.last_heading) {
            return false;
        }
        self.next_heading = requested;
        true
    }

    /// Cell the head would enter on the next move.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.next_heading)
    }

    /// Pushes `new_head` and commits the buffered heading.
    pub(crate) fn push_head(&mut self, new_head: Cell) {
        self.squares_taken.push_front(new_head);
        self.last_heading = self.next_heading;
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        self.squares_taken.pop_back()
    }
}
