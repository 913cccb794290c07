use clap::{Parser, Subcommand};
use rs_plate_spell::*;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::Write;
use std::time::Instant;

/// Plays License To Spell from the command line: words must start with the plate's
/// first letter and contain all three plate letters in order.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the word list: one word per line, or a .json object whose keys are the
    /// accepted words.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Optional path to a JSON object mapping state names to mottos.
    #[clap(short = 'm', long)]
    mottos_file: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a plate whose valid-word count falls in the given range.
    Generate {
        #[clap(long, default_value_t = DEFAULT_MIN_WORDS)]
        min_words: usize,
        #[clap(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
    },
    /// List every word that can be spelled for the given plate letters.
    Words { letters: String },
    /// Play a timed round against the clock.
    Play,
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();

    let dictionary = load_dictionary(&args.words_file)?;
    println!("There are {} words in the dictionary.", dictionary.len());

    let mottos = match &args.mottos_file {
        Some(path) => StateMottos::from_json_reader(File::open(path)?)?,
        None => StateMottos::default(),
    };

    match args.command {
        Command::Generate {
            min_words,
            max_words,
        } => generate_plate(min_words, max_words, &dictionary, &mottos)?,
        Command::Words { letters } => list_words(&letters, &dictionary)?,
        Command::Play => play_round(&dictionary, &mottos)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_dictionary(path: &str) -> Result<Dictionary, PlateSpellError> {
    let file = File::open(path)?;
    if path.ends_with(".json") {
        Dictionary::from_json_reader(file)
    } else {
        Dictionary::from_reader(io::BufReader::new(file))
    }
}

fn print_plate(plate: &GeneratedPlate, mottos: &StateMottos) {
    let state = random_state();
    match mottos.motto(state) {
        Some(motto) => println!("\n  {} - \"{}\"", state.to_uppercase(), motto),
        None => println!("\n  {}", state.to_uppercase()),
    }
    println!("  [ {} * {} ]\n", plate.letters(), plate.plate_number());
}

fn generate_plate(
    min_words: usize,
    max_words: usize,
    dictionary: &Dictionary,
    mottos: &StateMottos,
) -> Result<(), PlateSpellError> {
    let plate = PlateGenerator::new(min_words, max_words).generate(dictionary)?;

    print_plate(&plate, mottos);
    let stats = plate.possible_stats();
    println!(
        "{} valid words, {} possible points, average length {:.2}.",
        plate.word_count(),
        stats.total_points,
        stats.average_length
    );
    Ok(())
}

fn list_words(letters: &str, dictionary: &Dictionary) -> Result<(), PlateSpellError> {
    let plate: Plate = letters.parse()?;
    let valid_words = get_valid_words(&plate, dictionary);

    println!("{} words can be spelled for {}:", valid_words.len(), plate);
    for word in valid_words.iter() {
        println!("\t{}", word);
    }
    Ok(())
}

fn play_round(dictionary: &Dictionary, mottos: &StateMottos) -> Result<(), Box<dyn Error>> {
    let plate = PlateGenerator::default().generate(dictionary)?;
    print_plate(&plate, mottos);
    println!(
        "Type words that start with {} and contain {} in order. You have {}.\n",
        plate.letters().first_letter(),
        plate.letters(),
        format_clock(ROUND_SECONDS)
    );

    let mut round = Round::new(plate);
    round.start();

    let started = Instant::now();
    let mut seconds_applied = 0;
    let mut input = String::new();
    loop {
        print!("[{}] > ", format_clock(round.remaining_seconds()));
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            round.stop();
            break;
        }

        let elapsed = started.elapsed().as_secs() as u32;
        while seconds_applied < elapsed {
            round.tick();
            seconds_applied += 1;
        }
        if round.phase() == RoundPhase::Ended {
            println!("Time's up!");
            break;
        }

        let guess = input.trim();
        if guess.is_empty() {
            continue;
        }
        match round.submit_guess(guess) {
            GuessOutcome::Accepted { points } => {
                println!("{} points! Total: {}.", points, round.score())
            }
            GuessOutcome::AlreadyGuessed => println!("You already found that one."),
            GuessOutcome::NotInPlateWords => println!("That word doesn't work for this plate."),
            GuessOutcome::TooLong => println!("That word is too long."),
            GuessOutcome::NotPlaying => break,
        }
    }

    let summary = round.summary();
    println!(
        "\nYou scored {} points, finding {} of {} words ({} possible points).",
        summary.score,
        summary.words_found,
        summary.words_possible,
        summary.possible_stats.total_points
    );
    Ok(())
}
