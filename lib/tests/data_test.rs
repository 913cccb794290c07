#[macro_use]
extern crate assert_matches;

use rs_plate_spell::*;

use std::io::Cursor;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn dictionary_from_reader_succeeds() -> Result<(), PlateSpellError> {
    let cursor = Cursor::new(String::from("\n\nbecame\n Balm\nBAM \n"));

    let dictionary = Dictionary::from_reader(cursor)?;

    assert_eq!(dictionary.len(), 3);
    assert_arc_eq!(&dictionary, &["became", "balm", "bam"]);
    assert_eq!(dictionary.max_word_len(), 6);
    Ok(())
}

#[test]
fn dictionary_from_iterator_succeeds() {
    let dictionary = Dictionary::from_iterator(vec!["", "became", "Balm "]);

    assert_eq!(dictionary.len(), 2);
    assert_arc_eq!(&dictionary, &["became", "balm"]);
}

#[test]
fn dictionary_from_string_iterator_succeeds() {
    let dictionary = Dictionary::from_iterator(vec![
        "".to_string(),
        "became".to_string(),
        "Balm ".to_string(),
    ]);

    assert_eq!(dictionary.len(), 2);
    assert_arc_eq!(&dictionary, &["became", "balm"]);
}

#[test]
fn dictionary_from_json_reader_takes_object_keys() -> Result<(), PlateSpellError> {
    let cursor = Cursor::new(String::from(
        r#"{"cab": 1, "abbey": {"definition": "a monastery"}, "bam": true}"#,
    ));

    let dictionary = Dictionary::from_json_reader(cursor)?;

    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.iter().any(|word| word.as_ref() == "cab"));
    assert!(dictionary.iter().any(|word| word.as_ref() == "abbey"));
    assert!(dictionary.iter().any(|word| word.as_ref() == "bam"));
    Ok(())
}

#[test]
fn dictionary_from_json_reader_rejects_malformed_document() {
    let cursor = Cursor::new(String::from("[\"not\", \"an\", \"object\"]"));

    assert_matches!(
        Dictionary::from_json_reader(cursor),
        Err(PlateSpellError::Json(_))
    );
}

#[test]
fn get_valid_words_preserves_dictionary_order() -> Result<(), PlateSpellError> {
    let dictionary = Dictionary::from_iterator(vec![
        "became",
        "bemoan",
        "embalm",
        "bamboo",
        "balm",
        "beam",
        "bam",
    ]);

    let valid_words = get_valid_words(&Plate::new("BAM")?, &dictionary);

    assert_arc_eq!(&valid_words, &["became", "bamboo", "balm", "beam", "bam"]);
    Ok(())
}

#[test]
fn get_valid_words_empty_dictionary() -> Result<(), PlateSpellError> {
    let dictionary = Dictionary::from_iterator(Vec::<String>::new());

    assert!(get_valid_words(&Plate::new("BAM")?, &dictionary).is_empty());
    Ok(())
}

#[test]
fn get_valid_words_nothing_matches() -> Result<(), PlateSpellError> {
    let dictionary =
        Dictionary::from_iterator(vec!["cat", "catapult", "communicate", "scatter"]);

    assert!(get_valid_words(&Plate::new("XQZ")?, &dictionary).is_empty());
    Ok(())
}

#[test]
fn get_valid_words_matches_case_insensitively() -> Result<(), PlateSpellError> {
    let dictionary = Dictionary::from_iterator(vec!["cat", "CATAPULT", "scatter"]);

    let valid_words = get_valid_words(&Plate::new("cat")?, &dictionary);

    assert_arc_eq!(&valid_words, &["cat", "catapult"]);
    Ok(())
}

#[test]
fn state_mottos_look_up_case_insensitively() -> Result<(), PlateSpellError> {
    let cursor = Cursor::new(String::from(
        r#"{"California": "Eureka", "New Hampshire": "Live Free or Die"}"#,
    ));

    let mottos = StateMottos::from_json_reader(cursor)?;

    assert_eq!(mottos.len(), 2);
    assert_eq!(mottos.motto("California"), Some("Eureka"));
    assert_eq!(mottos.motto("new hampshire"), Some("Live Free or Die"));
    assert_eq!(mottos.motto("Atlantis"), None);
    Ok(())
}

#[test]
fn state_mottos_from_malformed_document_fails() {
    let cursor = Cursor::new(String::from(r#"{"California": 7}"#));

    assert_matches!(
        StateMottos::from_json_reader(cursor),
        Err(PlateSpellError::Json(_))
    );
}

#[test]
fn all_fifty_states_are_listed() {
    assert_eq!(US_STATES.len(), 50);
    assert!(US_STATES.contains(&"California"));
    assert!(US_STATES.contains(&"Wyoming"));
}
