use std::fmt;
use std::io;

/// Indicates that an error occurred while building a plate, loading game data, or
/// generating a puzzle.
#[derive(Debug)]
pub enum PlateSpellError {
    /// Indicates that a plate was built from the wrong number of letters.
    PlateLength(usize),
    /// Indicates that one or more given characters are not in the supported set (A to Z).
    UnsupportedCharacter(char),
    /// Indicates that the generator was configured with `min_words` above `max_words`, so
    /// no valid-word count can ever be accepted.
    EmptyRange { min_words: usize, max_words: usize },
    /// Indicates that no plate with a valid-word count in the requested range was found
    /// within the configured number of attempts.
    NoPlateInRange { min_words: usize, max_words: usize },
    /// Indicates that a word list or motto file could not be read.
    Io(io::Error),
    /// Indicates that a JSON document could not be parsed.
    Json(serde_json::Error),
}

impl fmt::Display for PlateSpellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateSpellError::PlateLength(num_letters) => write!(
                f,
                "a plate must have exactly {} letters, got {}",
                crate::plate::PLATE_LETTERS,
                num_letters
            ),
            PlateSpellError::UnsupportedCharacter(letter) => {
                write!(f, "unsupported plate character: {:?}", letter)
            }
            PlateSpellError::EmptyRange {
                min_words,
                max_words,
            } => write!(
                f,
                "the word-count range [{}, {}] is empty",
                min_words, max_words
            ),
            PlateSpellError::NoPlateInRange {
                min_words,
                max_words,
            } => write!(
                f,
                "no plate with a valid-word count in [{}, {}] was found",
                min_words, max_words
            ),
            PlateSpellError::Io(error) => write!(f, "failed to read game data: {}", error),
            PlateSpellError::Json(error) => write!(f, "failed to parse game data: {}", error),
        }
    }
}

impl std::error::Error for PlateSpellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlateSpellError::Io(error) => Some(error),
            PlateSpellError::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for PlateSpellError {
    fn from(error: io::Error) -> PlateSpellError {
        PlateSpellError::Io(error)
    }
}

impl From<serde_json::Error> for PlateSpellError {
    fn from(error: serde_json::Error) -> PlateSpellError {
        PlateSpellError::Json(error)
    }
}

/// The outcome of submitting a single word during a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The word was accepted and scored the given number of points.
    Accepted { points: u32 },
    /// The word was already found earlier this round.
    AlreadyGuessed,
    /// The word cannot be spelled for this plate, or is not in the dictionary.
    NotInPlateWords,
    /// The word is longer than [`MAX_GUESS_LETTERS`](crate::MAX_GUESS_LETTERS).
    TooLong,
    /// The round is not currently accepting guesses.
    NotPlaying,
}

impl GuessOutcome {
    /// Returns `true` iff the guess scored points.
    pub fn is_accepted(&self) -> bool {
        matches!(self, GuessOutcome::Accepted { .. })
    }
}
