use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::EngineConfig;
use crate::log;
use super::error::GameError;
use super::session::{GameSession, MoveOutcome, SessionPhase};
use super::session_rng::SessionRng;
use super::settings::GameSettings;

/// Shared async surface over a [`GameSession`] for the presentation layer.
///
/// A bot turn is never applied inline: it is scheduled after a fixed delay
/// so the move is visually paced. The scheduled task is cancelled whenever
/// the board is cleared, and it re-checks the round generation under the
/// session lock before playing, so a stale task cannot land a move on a
/// board that was cleared while it slept.
#[derive(Clone)]
pub struct SessionHandle {
    pub session: Arc<Mutex<GameSession>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub bot_move_delay: Duration,
    pending_bot_move: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SessionHandle {
    pub fn new(
        settings: &GameSettings,
        config: &EngineConfig,
        rng: SessionRng,
    ) -> Result<Self, GameError> {
        let session = GameSession::new(settings)?;

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            rng: Arc::new(Mutex::new(rng)),
            bot_move_delay: Duration::from_millis(config.bot_move_delay_ms),
            pending_bot_move: Arc::new(Mutex::new(None)),
        })
    }

    /// Kicks off the first turn. Needed when the bot holds the X seat and
    /// therefore opens the round.
    pub async fn start(&self) {
        self.maybe_schedule_bot_turn().await;
    }

    pub async fn handle_cell_click(&self, index: usize) -> Result<MoveOutcome, GameError> {
        let outcome = {
            let mut session = self.session.lock().await;

            if session.current_player().is_bot() {
                return Err(GameError::IllegalMove);
            }

            match session.play_at_index(index) {
                Ok(outcome) => outcome,
                Err(e) => {
                    log!("Rejected move at cell {}: {}", index, e);
                    return Err(e);
                }
            }
        };

        if outcome == MoveOutcome::Continued {
            self.maybe_schedule_bot_turn().await;
        }
        Ok(outcome)
    }

    async fn maybe_schedule_bot_turn(&self) {
        let (is_bot_turn, round) = {
            let session = self.session.lock().await;
            let is_bot_turn =
                session.phase() == &SessionPhase::InRound && session.current_player().is_bot();
            (is_bot_turn, session.round())
        };

        if !is_bot_turn {
            return;
        }

        let session = Arc::clone(&self.session);
        let rng = Arc::clone(&self.rng);
        let delay = self.bot_move_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut session = session.lock().await;
            if session.round() != round
                || session.phase() != &SessionPhase::InRound
                || !session.current_player().is_bot()
            {
                log!("Discarding stale scheduled bot move for round {}", round);
                return;
            }

            let mut rng = rng.lock().await;
            if let Some((position, _)) = session.play_bot_turn(&mut rng) {
                log!("Bot played at ({}, {})", position.row, position.col);
            }
        });

        let mut pending = self.pending_bot_move.lock().await;
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Clears the board mid-round or starts the next round after one ended.
    /// Any scheduled bot move is abandoned first.
    pub async fn clear_board(&self) {
        self.cancel_pending_bot_move().await;

        {
            let mut session = self.session.lock().await;
            session.clear_board();
        }

        self.maybe_schedule_bot_turn().await;
    }

    pub async fn continue_round(&self) {
        self.clear_board().await;
    }

    /// Session teardown on "new game": abandon any scheduled bot move so it
    /// cannot outlive the match.
    pub async fn shutdown(&self) {
        self.cancel_pending_bot_move().await;
    }

    async fn cancel_pending_bot_move(&self) {
        if let Some(handle) = self.pending_bot_move.lock().await.take() {
            handle.abort();
        }
    }
}
