use serde::Serialize;

/// Aggregate statistics for a list of words.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreStats {
    /// The summed score of every word in the list.
    pub total_points: u32,
    /// The mean word length, or 0 for an empty list.
    pub average_length: f64,
}

/// Computes the total score for the given words.
///
/// Each word is worth its length in characters. An empty list scores 0.
pub fn calculate_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words
        .iter()
        .map(|word| word.as_ref().chars().count() as u32)
        .sum()
}

/// Reduces the given words to their total points and mean length.
///
/// An empty list yields zeroed stats rather than dividing by zero.
pub fn calculate_stats<S: AsRef<str>>(words: &[S]) -> ScoreStats {
    if words.is_empty() {
        return ScoreStats {
            total_points: 0,
            average_length: 0.0,
        };
    }
    let total_points = calculate_score(words);
    ScoreStats {
        total_points,
        average_length: total_points as f64 / words.len() as f64,
    }
}
