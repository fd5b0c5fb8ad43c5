use super::board::Board;
use super::bot_controller::play_bot_move;
use super::error::GameError;
use super::player::Player;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::types::{GameMode, Mark, Position};
use super::win_detector::check_for_winner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Win { mark: Mark, line: Vec<Position> },
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    InRound,
    RoundEnded(RoundOutcome),
}

/// What a resolved move meant for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    RoundWon,
    RoundDrawn,
}

/// Turn and round orchestrator for one match: a board, two actors, and the
/// current-actor pointer. Dropping the session is the "new game" teardown;
/// scores live only as long as it does.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    player_x: Player,
    player_o: Player,
    current_mark: Mark,
    phase: SessionPhase,
    round: u64,
}

impl GameSession {
    pub fn new(settings: &GameSettings) -> Result<Self, GameError> {
        let board = Board::new(settings.side_size)?;

        let first_mark = settings.player_one_mark;
        let second_mark = match first_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };

        let player_one = Player::human(settings.player_one_name.clone(), first_mark);
        let player_two = match settings.game_mode {
            GameMode::TwoPlayer => Player::human(settings.player_two_name.clone(), second_mark),
            GameMode::VersusBot => Player::bot(
                format!("{} Bot", settings.bot_difficulty.label()),
                second_mark,
                settings.bot_difficulty,
            ),
        };

        let (player_x, player_o) = if first_mark == Mark::X {
            (player_one, player_two)
        } else {
            (player_two, player_one)
        };

        Ok(Self {
            board,
            player_x,
            player_o,
            current_mark: Mark::X,
            phase: SessionPhase::InRound,
            round: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn player_x(&self) -> &Player {
        &self.player_x
    }

    pub fn player_o(&self) -> &Player {
        &self.player_o
    }

    pub fn current_player(&self) -> &Player {
        match self.current_mark {
            Mark::O => &self.player_o,
            _ => &self.player_x,
        }
    }

    fn current_player_mut(&mut self) -> &mut Player {
        match self.current_mark {
            Mark::O => &mut self.player_o,
            _ => &mut self.player_x,
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_x.score(), self.player_o.score())
    }

    pub fn play_at_index(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let position = self.board.index_to_position(index)?;
        self.play_at(position)
    }

    /// Applies the current actor's mark at `position` and resolves the
    /// round: win check first, then draw check, then the turn flips.
    pub fn play_at(&mut self, position: Position) -> Result<MoveOutcome, GameError> {
        if self.phase != SessionPhase::InRound {
            return Err(GameError::IllegalMove);
        }

        let mark = self.current_mark;
        self.board.make_move(position, mark)?;
        Ok(self.resolve_move(position, mark))
    }

    /// Combined select-and-apply for the bot seat. Returns `None` when the
    /// current actor is not a bot, the round is over, or no cell remains.
    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Option<(Position, MoveOutcome)> {
        if self.phase != SessionPhase::InRound {
            return None;
        }

        let difficulty = self.current_player().difficulty()?;
        let mark = self.current_mark;
        let position = play_bot_move(&mut self.board, mark, difficulty, rng)?;
        Some((position, self.resolve_move(position, mark)))
    }

    fn resolve_move(&mut self, position: Position, mark: Mark) -> MoveOutcome {
        if let Some(line) = check_for_winner(&self.board, position, mark) {
            self.current_player_mut().increase_score();
            self.phase = SessionPhase::RoundEnded(RoundOutcome::Win { mark, line });
            return MoveOutcome::RoundWon;
        }

        if self.board.check_for_draw() {
            self.phase = SessionPhase::RoundEnded(RoundOutcome::Draw);
            return MoveOutcome::RoundDrawn;
        }

        self.switch_turn();
        MoveOutcome::Continued
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::O => Mark::X,
            _ => Mark::O,
        };
    }

    /// Starts the next round of the same match: empty board, X moves first,
    /// scores untouched. Also reachable mid-round via the in-game menu.
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.phase = SessionPhase::InRound;
        self.round += 1;
    }

    pub fn continue_round(&mut self) {
        self.clear_board();
    }
}
