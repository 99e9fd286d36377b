#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::First => "First",
            Player::Second => "Second",
        }
    }
}
