use crate::plate::Plate;
use crate::results::PlateSpellError;
use std::collections::HashMap;
use std::io::BufRead;
use std::io::Read;
use std::ops::Deref;
use std::sync::Arc;

/// Contains all the words a player may spell in this game.
///
/// Words are stored lowercase in their original order. The dictionary derefs to a
/// slice of [`Arc<str>`], so filtered views share storage with it instead of copying.
#[derive(Clone, Debug)]
pub struct Dictionary {
    all_words: Vec<Arc<str>>,
    max_word_length: usize,
}

impl Dictionary {
    /// Constructs a `Dictionary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Surrounding whitespace is trimmed,
    /// empty lines are skipped, and each word is converted to lowercase.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Dictionary, PlateSpellError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_lowercase());
            }
        }
        Ok(Dictionary::from_iterator(words))
    }

    /// Constructs a `Dictionary` from the given words, skipping empty entries.
    pub fn from_iterator<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut max_word_length = 0;
        let all_words: Vec<Arc<str>> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim();
                if word.is_empty() {
                    return None;
                }
                let word_length = word.chars().count();
                if max_word_length < word_length {
                    max_word_length = word_length;
                }
                Some(Arc::from(word.to_lowercase().as_str()))
            })
            .collect();
        Dictionary {
            all_words,
            max_word_length,
        }
    }

    /// Constructs a `Dictionary` from a JSON object whose keys are the accepted words.
    ///
    /// This is the on-disk format the game ships its word list in; the values are
    /// ignored.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Dictionary, PlateSpellError> {
        let document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_reader(reader)?;
        Ok(Dictionary::from_iterator(document.keys()))
    }

    /// Returns the length of the longest word, in characters.
    pub fn max_word_len(&self) -> usize {
        self.max_word_length
    }
}

impl Deref for Dictionary {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.all_words
    }
}

/// Gets the ordered list of dictionary words that can be spelled for the given plate.
///
/// Relative order is preserved, and the returned words share storage with the
/// dictionary. An empty dictionary, or a plate nothing matches, yields an empty list.
pub fn get_valid_words(plate: &Plate, dictionary: &Dictionary) -> Vec<Arc<str>> {
    dictionary
        .iter()
        .filter(|word| plate.is_valid_word(word))
        .map(Arc::clone)
        .collect()
}

/// All 50 U.S. state names, as printed across the top of a plate.
pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// State mottos keyed by state name, shown under the plate's state banner.
#[derive(Clone, Debug, Default)]
pub struct StateMottos {
    mottos: HashMap<String, String>,
}

impl StateMottos {
    /// Constructs a `StateMottos` from a JSON object mapping state names to mottos.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<StateMottos, PlateSpellError> {
        let document: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(StateMottos {
            mottos: document
                .into_iter()
                .map(|(state, motto)| (state.to_lowercase(), motto))
                .collect(),
        })
    }

    /// Looks up the motto for the given state. The state name is matched
    /// case-insensitively.
    pub fn motto(&self, state: &str) -> Option<&str> {
        self.mottos
            .get(&state.to_lowercase())
            .map(String::as_str)
    }

    /// Returns the number of known mottos.
    pub fn len(&self) -> usize {
        self.mottos.len()
    }

    /// Returns `true` iff no mottos were loaded.
    pub fn is_empty(&self) -> bool {
        self.mottos.is_empty()
    }
}
