use crate::generator::GeneratedPlate;
use crate::plate::Plate;
use crate::results::GuessOutcome;
use crate::scoring::calculate_score;
use crate::scoring::calculate_stats;
use crate::scoring::ScoreStats;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// How long a round lasts, in seconds.
pub const ROUND_SECONDS: u32 = 300;
/// The longest guess a round accepts, in letters.
pub const MAX_GUESS_LETTERS: usize = 31;

/// Which part of its lifecycle a round is in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum RoundPhase {
    /// The plate is on display but the clock has not started.
    Idle,
    /// The clock is running and guesses are accepted.
    Playing,
    /// The clock ran out or the round was stopped.
    Ended,
}

/// A single timed round: one plate, a countdown clock, and the player's guesses.
///
/// The round holds no timer of its own. The caller drives it through `start`, one
/// `tick` per elapsed second, and `stop`; the round ends itself when the clock
/// reaches zero.
#[derive(Clone, Debug)]
pub struct Round {
    plate: GeneratedPlate,
    guesses: Vec<Arc<str>>,
    guessed: HashSet<Arc<str>>,
    remaining_seconds: u32,
    phase: RoundPhase,
}

impl Round {
    /// Creates an idle round for the given plate with a full clock.
    pub fn new(plate: GeneratedPlate) -> Round {
        Round {
            plate,
            guesses: Vec::new(),
            guessed: HashSet::new(),
            remaining_seconds: ROUND_SECONDS,
            phase: RoundPhase::Idle,
        }
    }

    /// The plate being played.
    pub fn plate(&self) -> &GeneratedPlate {
        &self.plate
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Seconds left on the clock.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Starts (or restarts) the round. Previous guesses are discarded and the clock is
    /// refilled.
    pub fn start(&mut self) {
        self.guesses.clear();
        self.guessed.clear();
        self.remaining_seconds = ROUND_SECONDS;
        self.phase = RoundPhase::Playing;
    }

    /// Advances the clock by one second and returns the resulting phase.
    ///
    /// Ticks are ignored unless the round is playing; the round ends when the clock
    /// reaches zero.
    pub fn tick(&mut self) -> RoundPhase {
        if self.phase == RoundPhase::Playing {
            self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
            if self.remaining_seconds == 0 {
                self.phase = RoundPhase::Ended;
            }
        }
        self.phase
    }

    /// Ends the round before the clock runs out.
    pub fn stop(&mut self) {
        if self.phase == RoundPhase::Playing {
            self.phase = RoundPhase::Ended;
        }
    }

    /// Submits one guess.
    ///
    /// The guess is matched against the plate's valid words after dropping any
    /// non-letter characters and lowercasing, mirroring what the game's input field
    /// lets a player type. A word scores its length in letters, once per round.
    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        if self.phase != RoundPhase::Playing {
            return GuessOutcome::NotPlaying;
        }
        let normalized: String = guess
            .chars()
            .filter(|letter| letter.is_ascii_alphabetic())
            .map(|letter| letter.to_ascii_lowercase())
            .collect();
        if normalized.len() > MAX_GUESS_LETTERS {
            return GuessOutcome::TooLong;
        }
        let found = self
            .plate
            .valid_words()
            .iter()
            .find(|word| word.as_ref() == normalized);
        match found {
            None => GuessOutcome::NotInPlateWords,
            Some(word) => {
                if !self.guessed.insert(Arc::clone(word)) {
                    return GuessOutcome::AlreadyGuessed;
                }
                self.guesses.push(Arc::clone(word));
                GuessOutcome::Accepted {
                    points: normalized.len() as u32,
                }
            }
        }
    }

    /// The words found so far, in submission order.
    pub fn guessed_words(&self) -> &[Arc<str>] {
        &self.guesses
    }

    /// The player's score so far.
    pub fn score(&self) -> u32 {
        calculate_score(&self.guesses)
    }

    /// Statistics over the words found so far.
    pub fn stats(&self) -> ScoreStats {
        calculate_stats(&self.guesses)
    }

    /// Statistics over everything the plate allows, e.g. the total possible points.
    pub fn possible_stats(&self) -> ScoreStats {
        self.plate.possible_stats()
    }

    /// Snapshots the round for the presentation layer.
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            letters: self.plate.letters(),
            plate_number: self.plate.plate_number(),
            phase: self.phase,
            score: self.score(),
            words_found: self.guesses.len(),
            words_possible: self.plate.word_count(),
            guess_stats: self.stats(),
            possible_stats: self.possible_stats(),
        }
    }
}

/// A point-in-time report of a round, ready to render.
#[derive(Clone, Debug, Serialize)]
pub struct RoundSummary {
    pub letters: Plate,
    pub plate_number: String,
    pub phase: RoundPhase,
    pub score: u32,
    pub words_found: usize,
    pub words_possible: usize,
    pub guess_stats: ScoreStats,
    pub possible_stats: ScoreStats,
}

/// Formats a second count the way the game's timer displays it, e.g. `"5:00"`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
