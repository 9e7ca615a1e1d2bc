//! Player profiles
//!
//! Lifetime records for the people who keep showing up to play, keyed by a
//! stable identifier derived from the player's name.

use super::session::FinishedGame;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable identifier for a player name
#[must_use]
pub fn profile_id(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Best single word a player has ever recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestWord {
    pub word: String,
    pub points: u32,
}

/// Lifetime record for one player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub games_played: u32,
    pub games_won: u32,
    pub total_points: u64,
    pub best_word: Option<BestWord>,
}

impl PlayerProfile {
    /// Create a fresh profile for a player name
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: profile_id(name),
            name: name.trim().to_string(),
            created_at: Utc::now(),
            games_played: 0,
            games_won: 0,
            total_points: 0,
            best_word: None,
        }
    }

    /// Consider a played word for the best-word slot
    ///
    /// Upgrades only on strictly higher points, so the first word to reach a
    /// score keeps the title.
    pub fn record_word(&mut self, word: &str, points: u32) {
        let beats_current = self.best_word.as_ref().is_none_or(|best| points > best.points);
        if beats_current {
            self.best_word = Some(BestWord {
                word: word.to_string(),
                points,
            });
        }
    }
}

/// All known player profiles, persisted as a versioned document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStore {
    pub version: u32,
    #[serde(default)]
    pub players: HashMap<String, PlayerProfile>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create a new empty store with the current schema version
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: 1,
            players: HashMap::new(),
        }
    }

    /// Look up a profile by player name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlayerProfile> {
        self.players.get(&profile_id(name))
    }

    /// Fetch or create the profile for a player name
    pub fn entry(&mut self, name: &str) -> &mut PlayerProfile {
        self.players
            .entry(profile_id(name))
            .or_insert_with(|| PlayerProfile::new(name))
    }

    /// Fold a finished game into every participating profile
    ///
    /// Increments games played for all seats, games won for the winners,
    /// accumulates points and updates best words from the turn log.
    pub fn apply_game(&mut self, game: &FinishedGame) {
        for seat in &game.players {
            let won = game.winners.iter().any(|w| profile_id(w) == profile_id(&seat.name));
            let profile = self.entry(&seat.name);

            profile.games_played += 1;
            if won {
                profile.games_won += 1;
            }
            profile.total_points += u64::from(seat.points);
        }

        for turn in &game.turns {
            self.entry(&turn.player).record_word(&turn.word, turn.points);
        }
    }
}
