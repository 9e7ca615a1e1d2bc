//! Game session state
//!
//! One in-progress multiplayer game: seats with running totals, a turn log
//! and the rotation. Owned by a single score-keeping session; nothing here
//! is shared or concurrent.

use crate::wordlists::Region;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One seat at the table, with its running total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatState {
    pub name: String,
    pub total: u32,
}

/// One scored turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: String,
    pub word: String,
    pub points: u32,
    /// Whether the word was in the selected word list when played.
    /// A miss can still be recorded; house rules decide that, not the log.
    pub dictionary_hit: bool,
}

/// Final score for one seat of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub name: String,
    pub points: u32,
}

/// A finished game as it goes into the history file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGame {
    pub finished_at: DateTime<Utc>,
    pub region: String,
    pub players: Vec<FinalScore>,
    pub winners: Vec<String>,
    pub turns: Vec<TurnRecord>,
}

/// An in-progress multiplayer game
#[derive(Debug, Clone)]
pub struct GameSession {
    region: Region,
    seats: Vec<SeatState>,
    turns: Vec<TurnRecord>,
    current: usize,
}

impl GameSession {
    /// Start a game with the given players, first seat to move
    #[must_use]
    pub fn new<I, S>(region: Region, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seats = names
            .into_iter()
            .map(|name| SeatState {
                name: name.as_ref().trim().to_string(),
                total: 0,
            })
            .filter(|seat| !seat.name.is_empty())
            .collect();

        Self {
            region,
            seats,
            turns: Vec::new(),
            current: 0,
        }
    }

    /// The region this game validates against
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// All seats in play order
    #[must_use]
    pub fn seats(&self) -> &[SeatState] {
        &self.seats
    }

    /// The turn log so far
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// The seat whose turn it is, if anyone is seated
    #[must_use]
    pub fn current_seat(&self) -> Option<&SeatState> {
        self.seats.get(self.current)
    }

    /// Score a word for the current player and advance the rotation
    ///
    /// With no seats this is a no-op.
    pub fn record_turn(&mut self, word: &str, points: u32, dictionary_hit: bool) {
        let Some(seat) = self.seats.get_mut(self.current) else {
            return;
        };

        seat.total += points;
        self.turns.push(TurnRecord {
            player: seat.name.clone(),
            word: word.to_string(),
            points,
            dictionary_hit,
        });

        self.advance();
    }

    /// Advance the rotation without scoring
    pub fn pass_turn(&mut self) {
        self.advance();
    }

    /// Take back the most recent scored turn
    ///
    /// Restores that player's total and hands the rotation back to them.
    pub fn undo_last_turn(&mut self) -> Option<TurnRecord> {
        let turn = self.turns.pop()?;

        if let Some(index) = self.seats.iter().position(|s| s.name == turn.player) {
            self.seats[index].total -= turn.points;
            self.current = index;
        }

        Some(turn)
    }

    /// Seats ordered by total, highest first
    #[must_use]
    pub fn standings(&self) -> Vec<SeatState> {
        let mut ordered = self.seats.clone();
        ordered.sort_by(|a, b| b.total.cmp(&a.total));
        ordered
    }

    /// Every seat sharing the highest total
    #[must_use]
    pub fn leaders(&self) -> Vec<&SeatState> {
        let Some(top) = self.seats.iter().map(|s| s.total).max() else {
            return Vec::new();
        };
        self.seats.iter().filter(|s| s.total == top).collect()
    }

    /// Close the game out into its history record
    #[must_use]
    pub fn finish(self) -> FinishedGame {
        let winners = self
            .leaders()
            .iter()
            .map(|seat| seat.name.clone())
            .collect();

        FinishedGame {
            finished_at: Utc::now(),
            region: self.region.as_str().to_string(),
            players: self
                .seats
                .iter()
                .map(|seat| FinalScore {
                    name: seat.name.clone(),
                    points: seat.total,
                })
                .collect(),
            winners,
            turns: self.turns,
        }
    }

    fn advance(&mut self) {
        if !self.seats.is_empty() {
            self.current = (self.current + 1) % self.seats.len();
        }
    }
}
