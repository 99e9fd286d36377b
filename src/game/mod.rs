//! Core m,n,k game logic: grid coordinates, parallel line scanner, and the
//! turn/result state machine.

mod engine;
mod grid;
mod player;
mod scanner;
mod state;

pub use engine::{Engine, EngineEvent, MoveOutcome};
pub use grid::{GridIndex, WinLine};
pub use player::Player;
pub use scanner::{find_winning_runs, LineScanner};
pub use state::{GameResult, GameState, MoveError, MoveToken};
