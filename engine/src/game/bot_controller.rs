use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{BotDifficulty, Mark, Position};

/// Snapshot of what a bot is allowed to see when picking a move.
pub struct BotInput {
    pub available_positions: Vec<Position>,
    pub mark: Mark,
}

impl BotInput {
    pub fn from_board(board: &Board, mark: Mark) -> Self {
        Self {
            available_positions: board.available_positions(),
            mark,
        }
    }
}

pub fn calculate_move(
    difficulty: BotDifficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    // Every difficulty tier plays the random strategy; the tag only affects
    // how the bot is displayed.
    match difficulty {
        BotDifficulty::Easy | BotDifficulty::Medium | BotDifficulty::Impossible => {
            calculate_random_move(input, rng)
        }
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    rng.choose(&input.available_positions).copied()
}

/// Selects a move and applies it in one step. Unlike the human path, where
/// the session validates and applies separately, the bot only samples from
/// the empty cells, so the apply cannot be rejected.
pub fn play_bot_move(
    board: &mut Board,
    mark: Mark,
    difficulty: BotDifficulty,
    rng: &mut SessionRng,
) -> Option<Position> {
    let input = BotInput::from_board(board, mark);
    let position = calculate_move(difficulty, &input, rng)?;
    board.make_move(position, mark).ok()?;
    Some(position)
}
