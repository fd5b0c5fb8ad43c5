use super::error::GameError;
use super::types::{Mark, Position};

pub const SUPPORTED_SIDE_SIZES: [usize; 3] = [3, 4, 5];

/// Square grid of marks. The only mutators are `make_move` and `clear`,
/// which keep `turn_count` equal to the number of occupied cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Mark>,
    side_size: usize,
    turn_count: usize,
}

impl Board {
    pub fn new(side_size: usize) -> Result<Self, GameError> {
        if !SUPPORTED_SIDE_SIZES.contains(&side_size) {
            return Err(GameError::InvalidConfiguration { side_size });
        }

        Ok(Self {
            cells: vec![Mark::Empty; side_size * side_size],
            side_size,
            turn_count: 0,
        })
    }

    #[cfg(test)]
    pub fn from_marks(side_size: usize, marks: &[Mark]) -> Self {
        assert_eq!(marks.len(), side_size * side_size);
        Self {
            cells: marks.to_vec(),
            side_size,
            turn_count: marks.iter().filter(|&&mark| mark != Mark::Empty).count(),
        }
    }

    pub fn side_size(&self) -> usize {
        self.side_size
    }

    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn total_cells(&self) -> usize {
        self.side_size * self.side_size
    }

    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
        self.turn_count = 0;
    }

    /// Row-major snapshot of the grid, detached from the live board.
    pub fn grid(&self) -> Vec<Vec<Mark>> {
        self.cells
            .chunks(self.side_size)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn flat_grid(&self) -> Vec<Mark> {
        self.cells.clone()
    }

    pub fn mark_at(&self, position: Position) -> Option<Mark> {
        if !self.contains(position) {
            return None;
        }
        Some(self.cells[position.row * self.side_size + position.col])
    }

    fn contains(&self, position: Position) -> bool {
        position.row < self.side_size && position.col < self.side_size
    }

    /// Empty cells in row-major scan order. The order is deterministic so
    /// seeded bot games replay identically.
    pub fn available_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..self.side_size {
            for col in 0..self.side_size {
                if self.cells[row * self.side_size + col] == Mark::Empty {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }

    pub fn index_to_position(&self, index: usize) -> Result<Position, GameError> {
        if index >= self.total_cells() {
            return Err(GameError::OutOfRange);
        }
        Ok(Position::new(index / self.side_size, index % self.side_size))
    }

    pub fn position_to_index(&self, position: Position) -> Result<usize, GameError> {
        if !self.contains(position) {
            return Err(GameError::OutOfRange);
        }
        Ok(position.row * self.side_size + position.col)
    }

    pub fn make_move(&mut self, position: Position, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty || !self.contains(position) {
            return Err(GameError::IllegalMove);
        }

        let index = position.row * self.side_size + position.col;
        if self.cells[index] != Mark::Empty {
            return Err(GameError::IllegalMove);
        }

        self.cells[index] = mark;
        self.turn_count += 1;
        Ok(())
    }

    pub fn check_for_draw(&self) -> bool {
        self.turn_count == self.total_cells()
    }
}
