use crate::data::get_valid_words;
use crate::data::Dictionary;
use crate::data::US_STATES;
use crate::plate::Plate;
use crate::plate::PLATE_LETTERS;
use crate::results::PlateSpellError;
use crate::scoring::calculate_stats;
use crate::scoring::ScoreStats;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// The lowest valid-word count accepted by default.
pub const DEFAULT_MIN_WORDS: usize = 100;
/// The highest valid-word count accepted by default.
pub const DEFAULT_MAX_WORDS: usize = 999;
/// How many candidate plates may be drawn before the generator gives up. High enough
/// that any dictionary with an acceptable plate is effectively guaranteed to find one.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// A plate along with the dictionary words that can be spelled for it.
#[derive(Clone, Debug, Serialize)]
pub struct GeneratedPlate {
    letters: Plate,
    valid_words: Vec<Arc<str>>,
}

impl GeneratedPlate {
    /// Builds the entry for a specific plate, computing its valid words from the given
    /// dictionary.
    pub fn for_plate(letters: Plate, dictionary: &Dictionary) -> GeneratedPlate {
        GeneratedPlate {
            valid_words: get_valid_words(&letters, dictionary),
            letters,
        }
    }

    /// The plate's letters.
    pub fn letters(&self) -> Plate {
        self.letters
    }

    /// Every dictionary word that can be spelled for this plate, in dictionary order.
    pub fn valid_words(&self) -> &[Arc<str>] {
        &self.valid_words
    }

    /// The number of words that can be spelled for this plate.
    pub fn word_count(&self) -> usize {
        self.valid_words.len()
    }

    /// The number displayed on the plate: the valid-word count, zero-padded to three
    /// digits. It is not a serial number.
    pub fn plate_number(&self) -> String {
        format!("{:03}", self.word_count())
    }

    /// Statistics over every spellable word, e.g. a round's total possible points.
    pub fn possible_stats(&self) -> ScoreStats {
        calculate_stats(&self.valid_words)
    }
}

/// Generates plates by rejection sampling.
///
/// Candidate plates are drawn uniformly at random until one's valid-word count falls
/// within the configured inclusive range, so a round offers enough words without being
/// overwhelming.
#[derive(Clone, Copy, Debug)]
pub struct PlateGenerator {
    min_words: usize,
    max_words: usize,
    max_attempts: usize,
}

impl Default for PlateGenerator {
    fn default() -> PlateGenerator {
        PlateGenerator::new(DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS)
    }
}

impl PlateGenerator {
    /// Creates a generator that accepts plates whose valid-word count is within
    /// `min_words..=max_words`.
    pub fn new(min_words: usize, max_words: usize) -> PlateGenerator {
        PlateGenerator {
            min_words,
            max_words,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides how many candidate plates may be drawn before the generator returns
    /// [`PlateSpellError::NoPlateInRange`].
    pub fn with_max_attempts(mut self, max_attempts: usize) -> PlateGenerator {
        self.max_attempts = max_attempts;
        self
    }

    /// Generates a plate whose valid-word count is within this generator's range.
    pub fn generate(&self, dictionary: &Dictionary) -> Result<GeneratedPlate, PlateSpellError> {
        self.generate_with_rng(dictionary, &mut rand::thread_rng())
    }

    /// As [`PlateGenerator::generate`], drawing letters from the given source of
    /// randomness.
    ///
    /// Each candidate's three letters are drawn independently and uniformly over A to
    /// Z, repeats allowed. If no candidate is accepted within the attempt limit this
    /// returns [`PlateSpellError::NoPlateInRange`]; an inverted range fails up front
    /// with [`PlateSpellError::EmptyRange`].
    pub fn generate_with_rng<R: Rng>(
        &self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<GeneratedPlate, PlateSpellError> {
        if self.min_words > self.max_words {
            return Err(PlateSpellError::EmptyRange {
                min_words: self.min_words,
                max_words: self.max_words,
            });
        }
        for _ in 0..self.max_attempts {
            let letters = random_plate(rng);
            let valid_words = get_valid_words(&letters, dictionary);
            if (self.min_words..=self.max_words).contains(&valid_words.len()) {
                return Ok(GeneratedPlate {
                    letters,
                    valid_words,
                });
            }
        }
        Err(PlateSpellError::NoPlateInRange {
            min_words: self.min_words,
            max_words: self.max_words,
        })
    }
}

fn random_letter<R: Rng>(rng: &mut R) -> char {
    (b'A' + rng.gen_range(0..26u8)) as char
}

fn random_plate<R: Rng>(rng: &mut R) -> Plate {
    let mut letters = ['A'; PLATE_LETTERS];
    for letter in letters.iter_mut() {
        *letter = random_letter(rng);
    }
    Plate::from_letters(letters)
}

/// Picks a random U.S. state name for the plate's banner.
pub fn random_state() -> &'static str {
    random_state_with_rng(&mut rand::thread_rng())
}

/// As [`random_state`], drawing from the given source of randomness.
pub fn random_state_with_rng<R: Rng>(rng: &mut R) -> &'static str {
    US_STATES[rng.gen_range(0..US_STATES.len())]
}
