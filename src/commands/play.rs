//! Interactive score-keeping session
//!
//! Plain-text REPL for a multiplayer game: each player in turn types a
//! word, adjusts tile bonuses, and accepts the score. The finished game can
//! be saved to history, which also updates the player profiles.

use crate::core::CandidateWord;
use crate::engine::{Verdict, classify, score_candidate, sync_input};
use crate::game::storage;
use crate::game::{FinishedGame, GameSession};
use crate::output::display::print_standings;
use crate::output::formatters::format_tiles;
use crate::wordlists::{Dictionary, Region};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive score-keeping session
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(dictionary: &Dictionary, region: Region) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Scrabble Scorer - Game Session                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Keeping score against the {region} word list.\n");

    let names_input = get_user_input("Players (comma-separated)")?;
    let mut session = GameSession::new(region, names_input.split(','));

    if session.seats().is_empty() {
        println!("\nNo players, nothing to keep score for.\n");
        return Ok(());
    }

    print_help();

    loop {
        let Some(seat) = session.current_seat() else {
            break;
        };
        let prompt = format!("{} ({} pts) - word or command", seat.name, seat.total);
        let name = seat.name.clone();

        let input = get_user_input(&prompt)?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "done" => break,
            "pass" | "p" => {
                println!("→ {name} passes\n");
                session.pass_turn();
            }
            "undo" | "u" => match session.undo_last_turn() {
                Some(turn) => println!(
                    "↩ Took back {} ({} pts) from {}\n",
                    turn.word, turn.points, turn.player
                ),
                None => println!("Nothing to undo!\n"),
            },
            "board" | "standings" => print_standings(&session),
            "help" | "?" => print_help(),
            "" => {}
            _ => {
                if let Some((word, points, hit)) = edit_word(&input, dictionary, region)? {
                    println!(
                        "\n✓ {} for {}: {}\n",
                        word.bright_white().bold(),
                        name,
                        format!("{points} pts").bright_yellow().bold()
                    );
                    session.record_turn(&word, points, hit);
                }
            }
        }
    }

    println!();
    print_standings(&session);

    let winners: Vec<String> = session
        .leaders()
        .iter()
        .map(|seat| seat.name.clone())
        .collect();
    if !winners.is_empty() && !session.turns().is_empty() {
        println!(
            "{}",
            format!("🏆 Winner: {}", winners.join(" & ")).green().bold()
        );
    }

    if !session.turns().is_empty() {
        let answer = get_user_input("\nSave this game to history? (yes/no)")?;
        if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            match save_finished(session.finish()) {
                Ok(()) => println!("💾 Game saved.\n"),
                Err(e) => eprintln!("Warning: could not save game: {e}\n"),
            }
        }
    }

    println!("👋 Thanks for playing!\n");
    Ok(())
}

/// Build a candidate word from raw input and let the user adjust bonuses
///
/// Returns the accepted `(word, points, dictionary_hit)`, or `None` if the
/// user skipped the turn.
fn edit_word(
    raw: &str,
    dictionary: &Dictionary,
    region: Region,
) -> Result<Option<(String, u32, bool)>, String> {
    let mut candidate = CandidateWord::new();
    sync_input(&mut candidate, raw);

    if candidate.is_empty() {
        println!("No letters in that input.\n");
        return Ok(None);
    }

    let verdict = classify(raw, dictionary.list(region));
    if verdict == Verdict::NotFound {
        println!(
            "{}",
            format!(
                "⚠ {} is not in the {region} list (you can still record it)",
                candidate.word()
            )
            .yellow()
        );
    }

    loop {
        println!("\n  {}   {}", format_tiles(candidate.tiles()), verdict_tag(verdict));
        println!(
            "  word ×{}{}  →  {} pts",
            candidate.word_multiplier(),
            if candidate.has_bingo() { " + bingo" } else { "" },
            score_candidate(&candidate)
        );

        let cmd = get_user_input("Bonus (l<N>/b<N>/w/g, 'ok' to record, 'skip')")?;
        match cmd.to_lowercase().as_str() {
            "ok" | "" => {
                return Ok(Some((
                    candidate.word(),
                    score_candidate(&candidate),
                    verdict.is_valid(),
                )));
            }
            "skip" | "s" => return Ok(None),
            "w" => candidate.cycle_word_multiplier(),
            "g" => {
                let want = !candidate.has_bingo();
                candidate.set_bingo(want);
                if want && !candidate.has_bingo() {
                    println!("Bingo needs a full rack (7 tiles).");
                }
            }
            other => {
                if let Some(index) = parse_position(other, 'l', candidate.len()) {
                    candidate.cycle_multiplier_at(index);
                } else if let Some(index) = parse_position(other, 'b', candidate.len()) {
                    candidate.toggle_blank_at(index);
                } else {
                    println!("❌ Unknown command! Use l<N>, b<N>, w, g, 'ok' or 'skip'.");
                }
            }
        }
    }
}

/// Parse a `l3` / `b1` style command into a zero-based tile index
fn parse_position(cmd: &str, prefix: char, len: usize) -> Option<usize> {
    let digits = cmd.strip_prefix(prefix)?;
    let position: usize = digits.parse().ok()?;
    if position >= 1 && position <= len {
        Some(position - 1)
    } else {
        None
    }
}

fn verdict_tag(verdict: Verdict) -> String {
    match verdict {
        Verdict::Valid => format!("{}", "✓ valid".green()),
        Verdict::NotFound => format!("{}", "✗ not in list".yellow()),
        Verdict::TooShort | Verdict::InvalidCharacters => {
            format!("{}", format!("✗ {verdict}").red())
        }
    }
}

fn save_finished(game: FinishedGame) -> anyhow::Result<()> {
    let history_path = storage::history_path();
    let mut history = storage::load_history(&history_path)?;
    history.record(game.clone());
    storage::save_history(&history_path, &history)?;

    let profiles_path = storage::profiles_path();
    let mut profiles = storage::load_profiles(&profiles_path)?;
    profiles.apply_game(&game);
    storage::save_profiles(&profiles_path, &profiles)?;

    Ok(())
}

fn print_help() {
    println!("Type a word to score it for the current player.");
    println!("While editing: l<N> cycles the letter bonus on tile N, b<N> toggles");
    println!("a blank, w cycles the word bonus, g toggles the bingo.");
    println!("Commands: 'pass', 'undo', 'board', 'help', 'quit'\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
