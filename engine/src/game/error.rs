#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidConfiguration { side_size: usize },
    OutOfRange,
    IllegalMove,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidConfiguration { side_size } => {
                write!(f, "Unsupported board side size: {}", side_size)
            }
            GameError::OutOfRange => write!(f, "Index or coordinate outside the grid"),
            GameError::IllegalMove => write!(f, "Target cell is occupied or out of range"),
        }
    }
}

impl std::error::Error for GameError {}
