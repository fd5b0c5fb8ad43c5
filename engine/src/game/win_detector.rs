use super::board::Board;
use super::types::{Mark, Position};

/// Returns the ordered coordinates of the line completed by placing `mark`
/// at `last_position`, or `None` when that move did not win.
///
/// Only the four lines through the last move can have just been completed,
/// so only those are scanned: the row, the column, the main diagonal when
/// `row == col` and the anti-diagonal when `row + col == side_size - 1`.
pub fn check_for_winner(board: &Board, last_position: Position, mark: Mark) -> Option<Vec<Position>> {
    if mark == Mark::Empty {
        return None;
    }
    if board.turn_count() < minimum_turns_for_win(board.side_size()) {
        return None;
    }
    board.mark_at(last_position)?;

    check_row(board, last_position.row, mark)
        .or_else(|| check_column(board, last_position.col, mark))
        .or_else(|| check_diagonal(board, last_position, mark))
        .or_else(|| check_anti_diagonal(board, last_position, mark))
}

/// No line of `side_size` marks can exist before either side has placed
/// that many, which takes `2 * side_size - 1` total moves.
fn minimum_turns_for_win(side_size: usize) -> usize {
    2 * side_size - 1
}

fn check_row(board: &Board, row: usize, mark: Mark) -> Option<Vec<Position>> {
    let mut line = Vec::with_capacity(board.side_size());
    for col in 0..board.side_size() {
        let position = Position::new(row, col);
        if board.mark_at(position) != Some(mark) {
            return None;
        }
        line.push(position);
    }
    Some(line)
}

fn check_column(board: &Board, col: usize, mark: Mark) -> Option<Vec<Position>> {
    let mut line = Vec::with_capacity(board.side_size());
    for row in 0..board.side_size() {
        let position = Position::new(row, col);
        if board.mark_at(position) != Some(mark) {
            return None;
        }
        line.push(position);
    }
    Some(line)
}

fn check_diagonal(board: &Board, last_position: Position, mark: Mark) -> Option<Vec<Position>> {
    if last_position.row != last_position.col {
        return None;
    }

    let mut line = Vec::with_capacity(board.side_size());
    for i in 0..board.side_size() {
        let position = Position::new(i, i);
        if board.mark_at(position) != Some(mark) {
            return None;
        }
        line.push(position);
    }
    Some(line)
}

fn check_anti_diagonal(board: &Board, last_position: Position, mark: Mark) -> Option<Vec<Position>> {
    let side_size = board.side_size();
    if last_position.row + last_position.col != side_size - 1 {
        return None;
    }

    let mut line = Vec::with_capacity(side_size);
    for i in 0..side_size {
        let position = Position::new(i, side_size - 1 - i);
        if board.mark_at(position) != Some(mark) {
            return None;
        }
        line.push(position);
    }
    Some(line)
}
