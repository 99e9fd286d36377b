use std::collections::HashMap;

use super::grid::{GridIndex, WinLine};
use super::player::Player;

/// Overall result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    FirstWins,
    SecondWins,
    Draw,
}

impl GameResult {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::FirstWins => Some(Player::First),
            GameResult::SecondWins => Some(Player::Second),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}

/// Opaque handle for one placed move.
///
/// The presentation layer keys its visuals (sprites, scene objects) off these
/// tokens; the engine only issues and releases them, it never owns visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    CellOccupied,
    GameOver,
    NotPlayable,
}

/// Full game state: whose turn it is, both players' placed moves, the result,
/// and any detected win lines. Mutated exclusively by [`super::Engine`].
#[derive(Debug, Clone)]
pub struct GameState {
    current_player: Player,
    result: GameResult,
    first_moves: HashMap<GridIndex, MoveToken>,
    second_moves: HashMap<GridIndex, MoveToken>,
    win_lines: Vec<WinLine>,
}

impl GameState {
    /// Fresh state: first player to move, empty board.
    pub fn initial() -> Self {
        GameState {
            current_player: Player::First,
            result: GameResult::InProgress,
            first_moves: HashMap::new(),
            second_moves: HashMap::new(),
            win_lines: Vec::new(),
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn win_lines(&self) -> &[WinLine] {
        &self.win_lines
    }

    /// Total moves placed by both players.
    pub fn move_count(&self) -> usize {
        self.first_moves.len() + self.second_moves.len()
    }

    pub fn moves_of(&self, player: Player) -> &HashMap<GridIndex, MoveToken> {
        match player {
            Player::First => &self.first_moves,
            Player::Second => &self.second_moves,
        }
    }

    /// Whether either player has claimed this cell.
    pub fn is_occupied(&self, index: GridIndex) -> bool {
        self.first_moves.contains_key(&index) || self.second_moves.contains_key(&index)
    }

    /// The current player's coordinates, sorted row-major for the scanner.
    pub fn sorted_moves(&self, player: Player) -> Vec<GridIndex> {
        let mut coords: Vec<GridIndex> = self.moves_of(player).keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    pub(super) fn place(&mut self, player: Player, index: GridIndex, token: MoveToken) {
        match player {
            Player::First => self.first_moves.insert(index, token),
            Player::Second => self.second_moves.insert(index, token),
        };
    }

    pub(super) fn toggle_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    pub(super) fn set_result(&mut self, result: GameResult) {
        self.result = result;
    }

    pub(super) fn record_win_lines(&mut self, lines: Vec<WinLine>) {
        self.win_lines = lines;
    }

    /// Drain every placed-move token from both sets, for release on reset.
    pub(super) fn drain_tokens(&mut self) -> Vec<MoveToken> {
        let mut released: Vec<MoveToken> = self
            .first_moves
            .drain()
            .chain(self.second_moves.drain())
            .map(|(_, token)| token)
            .collect();
        released.sort_unstable_by_key(|t| t.0);
        released
    }
}
