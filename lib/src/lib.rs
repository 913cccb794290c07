//! Core logic for the License To Spell word game.
//!
//! A plate shows three letters; a word counts iff it starts with the plate's first
//! letter and contains all three letters in order. This crate provides the matcher,
//! the dictionary filter, score/statistics reducers, the rejection-sampling plate
//! generator, and a timer-driven round for a presentation layer to build on.

mod data;
mod generator;
mod plate;
mod results;
mod round;
mod scoring;

pub use data::get_valid_words;
pub use data::Dictionary;
pub use data::StateMottos;
pub use data::US_STATES;
pub use generator::*;
pub use plate::*;
pub use results::*;
pub use round::*;
pub use scoring::*;
