use crate::results::PlateSpellError;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::str::FromStr;

/// The number of letters on a plate.
pub const PLATE_LETTERS: usize = 3;

/// A license plate's letter sequence: exactly three ASCII letters, stored uppercase.
///
/// A dictionary word can be spelled for a plate iff it starts with the plate's first
/// letter and contains all three plate letters in order, not necessarily adjacent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Plate {
    letters: [char; PLATE_LETTERS],
}

impl Plate {
    /// Constructs a `Plate` from the given letters, normalizing them to uppercase.
    ///
    /// Returns [`PlateSpellError::PlateLength`] unless exactly three characters are
    /// given, or [`PlateSpellError::UnsupportedCharacter`] if any of them is not an
    /// ASCII letter.
    pub fn new(letters: &str) -> Result<Plate, PlateSpellError> {
        let mut normalized = ['A'; PLATE_LETTERS];
        let mut num_letters = 0;
        for letter in letters.chars() {
            if num_letters == PLATE_LETTERS {
                return Err(PlateSpellError::PlateLength(letters.chars().count()));
            }
            if !letter.is_ascii_alphabetic() {
                return Err(PlateSpellError::UnsupportedCharacter(letter));
            }
            normalized[num_letters] = letter.to_ascii_uppercase();
            num_letters += 1;
        }
        if num_letters < PLATE_LETTERS {
            return Err(PlateSpellError::PlateLength(num_letters));
        }
        Ok(Plate {
            letters: normalized,
        })
    }

    /// Constructs a `Plate` directly from already-uppercase letters.
    pub(crate) fn from_letters(letters: [char; PLATE_LETTERS]) -> Plate {
        Plate { letters }
    }

    /// The plate's first letter. Every valid word starts with it.
    pub fn first_letter(&self) -> char {
        self.letters[0]
    }

    /// The plate's letters in order.
    pub fn letters(&self) -> [char; PLATE_LETTERS] {
        self.letters
    }

    /// Returns `true` iff `word` can be spelled for this plate.
    ///
    /// The comparison is case-insensitive and never mutates the input: the word must
    /// start with the plate's first letter, and the plate's letters must occur in the
    /// word as an ordered subsequence. A repeated plate letter has to match a strictly
    /// later position than the previous one, so `"AAA"` needs three separate `A`s.
    pub fn is_valid_word(&self, word: &str) -> bool {
        let mut plate_cursor = 0;
        for (index, letter) in word
            .chars()
            .map(|letter| letter.to_ascii_uppercase())
            .enumerate()
        {
            if index == 0 && letter != self.letters[0] {
                return false;
            }
            if plate_cursor < PLATE_LETTERS && letter == self.letters[plate_cursor] {
                plate_cursor += 1;
            }
        }
        // An empty word never enters the loop and fails here.
        plate_cursor == PLATE_LETTERS
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for Plate {
    type Err = PlateSpellError;

    fn from_str(letters: &str) -> Result<Plate, PlateSpellError> {
        Plate::new(letters)
    }
}

impl Serialize for Plate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn new_normalizes_case() -> Result<(), PlateSpellError> {
        assert_eq!(Plate::new("bam")?, Plate::new("BAM")?);
        assert_eq!(Plate::new("bAm")?.to_string(), "BAM");
        Ok(())
    }

    #[test]
    fn new_rejects_wrong_length() {
        assert_matches!(Plate::new(""), Err(PlateSpellError::PlateLength(0)));
        assert_matches!(Plate::new("ab"), Err(PlateSpellError::PlateLength(2)));
        assert_matches!(Plate::new("abcd"), Err(PlateSpellError::PlateLength(4)));
    }

    #[test]
    fn new_rejects_unsupported_characters() {
        assert_matches!(
            Plate::new("a1c"),
            Err(PlateSpellError::UnsupportedCharacter('1'))
        );
        assert_matches!(
            Plate::new("a c"),
            Err(PlateSpellError::UnsupportedCharacter(' '))
        );
    }

    #[test]
    fn parses_from_str() -> Result<(), PlateSpellError> {
        let plate: Plate = "cat".parse()?;
        assert_eq!(plate.to_string(), "CAT");
        assert_eq!(plate.first_letter(), 'C');
        assert_eq!(plate.letters(), ['C', 'A', 'T']);
        Ok(())
    }

    #[test]
    fn accepts_words_with_letters_in_order() -> Result<(), PlateSpellError> {
        let plate = Plate::new("BAM")?;

        assert!(plate.is_valid_word("BECAME"));
        assert!(plate.is_valid_word("bamboo"));
        assert!(plate.is_valid_word("balm"));
        Ok(())
    }

    #[test]
    fn accepts_word_equal_to_plate() -> Result<(), PlateSpellError> {
        assert!(Plate::new("BAM")?.is_valid_word("bam"));
        Ok(())
    }

    #[test]
    fn accepts_repeated_plate_letters_matched_separately() -> Result<(), PlateSpellError> {
        let plate = Plate::new("AAA")?;

        assert!(plate.is_valid_word("AARDVARK"));
        // Only two As.
        assert!(!plate.is_valid_word("AREA"));
        Ok(())
    }

    #[test]
    fn rejects_letters_out_of_order() -> Result<(), PlateSpellError> {
        // The A appears only after the M.
        assert!(!Plate::new("BAM")?.is_valid_word("BEMOAN"));
        Ok(())
    }

    #[test]
    fn rejects_wrong_first_letter() -> Result<(), PlateSpellError> {
        assert!(!Plate::new("BAM")?.is_valid_word("EMBALM"));
        assert!(!Plate::new("CAT")?.is_valid_word("SCATTER"));
        Ok(())
    }

    #[test]
    fn rejects_missing_or_short_words() -> Result<(), PlateSpellError> {
        let plate = Plate::new("BAM")?;

        assert!(!plate.is_valid_word(""));
        assert!(!plate.is_valid_word("BA"));
        // Missing the M.
        assert!(!plate.is_valid_word("BAD"));
        Ok(())
    }

    #[test]
    fn matching_is_case_insensitive() -> Result<(), PlateSpellError> {
        assert!(Plate::new("abc")?.is_valid_word("AbCdEf"));
        assert!(Plate::new("ABC")?.is_valid_word("abcdef"));
        Ok(())
    }
}
