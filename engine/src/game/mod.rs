mod board;
mod bot_controller;
mod error;
mod player;
mod session;
mod session_handle;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, SUPPORTED_SIDE_SIZES};
pub use bot_controller::{BotInput, calculate_move, play_bot_move};
pub use error::GameError;
pub use player::{Player, PlayerKind};
pub use session::{GameSession, MoveOutcome, RoundOutcome, SessionPhase};
pub use session_handle::SessionHandle;
pub use session_rng::SessionRng;
pub use settings::{DEFAULT_SIDE_SIZE, GameSettings, MAX_NAME_LENGTH, RawGameSettings};
pub use types::{BotDifficulty, GameMode, Mark, Position};
pub use win_detector::check_for_winner;
