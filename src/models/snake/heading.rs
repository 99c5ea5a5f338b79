/// Direction the snake's head travels in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const VARIANTS: &'static [Heading] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit `(col, row)` delta. Rows grow downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    #[must_use]
    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }

    /// Heading whose delta is exactly `(dc, dr)`, if any.
    #[must_use]
    pub fn from_delta(dc: i32, dr: i32) -> Option<Heading> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|heading| heading.delta() == (dc, dr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snake::grid::Cell;

    #[test]
    fn test_opposites() {
        for heading in Heading::VARIANTS {
            assert!(heading.is_opposite(heading.opposite()));
            assert!(!heading.is_opposite(*heading));
            assert_eq!(heading.opposite().opposite(), *heading);
        }
        assert!(!Heading::Up.is_opposite(Heading::Left));
    }

    #[test]
    fn test_from_delta() {
        for heading in Heading::VARIANTS {
            let (dc, dr) = heading.delta();
            assert_eq!(Heading::from_delta(dc, dr), Some(*heading));
        }
        assert_eq!(Heading::from_delta(1, 1), None);
        assert_eq!(Heading::from_delta(0, 0), None);
    }

    #[test]
    fn test_heading_queries_by_value() {
        let heading = Heading::Left;
        let back = heading.opposite();
        assert_eq!(back, Heading::Right);
        assert!(heading.is_opposite(back));
        assert_eq!(heading.delta(), (-1, 0));
        assert_eq!(Cell::new(1, 1).step(heading), Cell::new(0, 1));
    }
}
