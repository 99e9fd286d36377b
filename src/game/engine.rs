use std::sync::mpsc;

use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::ConfigError;

use super::grid::{GridIndex, WinLine};
use super::player::Player;
use super::scanner::LineScanner;
use super::state::{GameResult, GameState, MoveError, MoveToken};

/// Successful outcome of a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move recorded, game continues with the other player.
    Placed(MoveToken),
    /// Move recorded and it completed a winning run. The turn does not pass.
    Won { token: MoveToken, player: Player },
    /// Move recorded and it filled the board with no winner.
    Draw(MoveToken),
}

/// Notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GameStarted {
        rows: u32,
        cols: u32,
        threshold: usize,
    },
    GameOver {
        result: GameResult,
    },
    /// A new game is about to begin; the listed tokens are no longer valid
    /// and their visuals should be cleared.
    GameReset {
        released: Vec<MoveToken>,
    },
}

/// The turn/result state machine.
///
/// Owns the [`GameState`], validates and records submitted moves, runs the
/// parallel win scan after each qualifying move, and drives the reset timer
/// once a game has ended. All operations are synchronous; the win scan joins
/// its workers before `submit_move` returns.
#[derive(Debug)]
pub struct Engine {
    rows: u32,
    cols: u32,
    threshold: usize,
    state: GameState,
    scanner: LineScanner,
    reset_delay: f32,
    reset_timer: f32,
    config_error: Option<ConfigError>,
    next_token: u64,
    events: Option<mpsc::Sender<EngineEvent>>,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        let mut engine = Engine {
            rows: 0,
            cols: 0,
            threshold: 0,
            state: GameState::initial(),
            scanner: LineScanner::new(config.scan.num_threads),
            reset_delay: config.reset.delay_secs,
            reset_timer: 0.0,
            config_error: None,
            next_token: 0,
            events: None,
        };
        engine.start_game(config.board.rows, config.board.cols);
        engine
    }

    /// Convenience constructor with default reset/scan settings.
    pub fn with_dimensions(rows: u32, cols: u32) -> Self {
        let mut config = EngineConfig::default();
        config.board.rows = rows;
        config.board.cols = cols;
        Self::new(&config)
    }

    /// Subscribe to engine notifications. Replaces any previous subscriber.
    pub fn subscribe(&mut self) -> mpsc::Receiver<EngineEvent> {
        let (tx, rx) = mpsc::channel();
        self.events = Some(tx);
        rx
    }

    /// Begin a fresh game on a `rows` x `cols` grid.
    ///
    /// Releases every placed-move token and clears win lines. A grid smaller
    /// than 2x2 leaves the engine non-playable, queryable through
    /// [`Engine::configuration_error`]; no move is accepted until a later
    /// `start_game` with valid dimensions.
    pub fn start_game(&mut self, rows: u32, cols: u32) {
        let released = self.state.drain_tokens();
        if !released.is_empty() {
            self.emit(EngineEvent::GameReset { released });
        }
        self.state = GameState::initial();
        self.rows = rows;
        self.cols = cols;
        self.threshold = rows.min(cols).min(5) as usize;
        self.reset_timer = self.reset_delay;

        if rows < 2 || cols < 2 {
            warn!(rows, cols, "grid smaller than 2x2, game is not playable");
            self.config_error = Some(ConfigError::Validation(format!(
                "grid must be at least 2x2, got {rows}x{cols}"
            )));
            return;
        }
        self.config_error = None;

        info!(
            rows,
            cols,
            threshold = self.threshold,
            "new game started, {} to move",
            Player::First.name()
        );
        self.emit(EngineEvent::GameStarted {
            rows,
            cols,
            threshold: self.threshold,
        });
    }

    /// Submit a move for the active player.
    ///
    /// Invalid moves (non-playable engine, finished game, out-of-bounds or
    /// occupied cell) are rejected without touching any state. A move that
    /// fills the board is a draw; the win scan is skipped for it.
    pub fn submit_move(&mut self, index: GridIndex) -> Result<MoveOutcome, MoveError> {
        if self.config_error.is_some() {
            return Err(MoveError::NotPlayable);
        }
        if self.state.result().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.in_bounds(index) {
            return Err(MoveError::OutOfBounds);
        }
        if self.state.is_occupied(index) {
            return Err(MoveError::CellOccupied);
        }

        let player = self.state.current_player();
        let token = self.issue_token();
        self.state.place(player, index, token);

        if self.state.move_count() == (self.rows * self.cols) as usize {
            info!("game over: draw");
            self.state.set_result(GameResult::Draw);
            self.emit(EngineEvent::GameOver {
                result: GameResult::Draw,
            });
            return Ok(MoveOutcome::Draw(token));
        }

        if self.state.moves_of(player).len() >= self.threshold {
            let coords = self.state.sorted_moves(player);
            let lines = self.scanner.scan(&coords, self.threshold);
            if !lines.is_empty() {
                let result = match player {
                    Player::First => GameResult::FirstWins,
                    Player::Second => GameResult::SecondWins,
                };
                info!("game over: {} has won", player.name());
                self.state.record_win_lines(lines);
                self.state.set_result(result);
                self.emit(EngineEvent::GameOver { result });
                return Ok(MoveOutcome::Won { token, player });
            }
        }

        self.state.toggle_turn();
        Ok(MoveOutcome::Placed(token))
    }

    /// Advance the post-game reset countdown.
    ///
    /// Does nothing while a game is in progress. Returns `true` when the
    /// timer expired and a fresh game was started with the same dimensions.
    pub fn tick_reset(&mut self, delta_secs: f32) -> bool {
        if !self.state.result().is_terminal() {
            return false;
        }
        self.reset_timer -= delta_secs;
        if self.reset_timer < 0.0 {
            self.start_game(self.rows, self.cols);
            return true;
        }
        false
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    /// The player whose move is next (or who just won, on a won game).
    pub fn active_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn win_lines(&self) -> &[WinLine] {
        self.state.win_lines()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The error that made the engine non-playable, if any.
    pub fn configuration_error(&self) -> Option<&ConfigError> {
        self.config_error.as_ref()
    }

    fn in_bounds(&self, index: GridIndex) -> bool {
        index.row >= 0
            && index.col >= 0
            && (index.row as u32) < self.rows
            && (index.col as u32) < self.cols
    }

    fn issue_token(&mut self) -> MoveToken {
        self.next_token += 1;
        MoveToken(self.next_token)
    }

    fn emit(&self, event: EngineEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}
