//! Terminal front end for Word Scramble.
//!
//! # Usage
//!
//! ```bash
//! # Titles and dictionary from one list
//! word-scramble --words start.txt
//!
//! # Separate dictionary, reproducible titles
//! word-scramble --words start.txt --dictionary words.txt --seed 42
//! ```
//!
//! Type a word to submit it. `:new` starts a new round, `:words` lists the
//! accepted words, `:quit` exits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use word_scramble::{
    Lexicon, RandomPicker, RoundConfig, SubmissionResult, WordList, WordRng, WordScramble,
};

/// Word Scramble: spell words from the letters of the title
#[derive(Parser, Debug)]
#[command(name = "word-scramble")]
#[command(version)]
struct Args {
    /// Start-word list, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Dictionary for real-word checks (defaults to the start-word list)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Seed for title selection (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Minimum word length
    #[arg(long, default_value_t = word_scramble::core::DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Title used when the start-word list is missing or empty
    #[arg(long, default_value = word_scramble::core::DEFAULT_FALLBACK_WORD)]
    fallback: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if args.fallback.trim().is_empty() {
        return Err("--fallback must not be blank".into());
    }
    let config = RoundConfig::new()
        .with_min_length(args.min_length)
        .with_fallback_word(args.fallback);

    let words = match &args.words {
        Some(path) => WordList::load_or_fallback(path, &config.fallback_word),
        None => WordList::fallback(&config.fallback_word),
    };
    let dictionary = match &args.dictionary {
        Some(path) => WordList::load(path)?.to_word_set(),
        None => words.to_word_set(),
    };
    let rng = match args.seed {
        Some(seed) => WordRng::new(seed),
        None => WordRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), words = words.len(), "session ready");

    let mut game = WordScramble::new(words, dictionary, rng, config);
    game.new_round()?;
    play(&mut game)
}

fn play<L: Lexicon, P: RandomPicker>(
    game: &mut WordScramble<L, P>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "Title: {}", game.title().unwrap_or_default())?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            ":quit" | ":q" => break,
            ":new" => {
                let title = game.new_round()?;
                writeln!(out, "Title: {title}")?;
            }
            ":words" => {
                for word in game.used_words() {
                    writeln!(out, "  {word}")?;
                }
            }
            _ => match game.submit(input)? {
                SubmissionResult::Accepted(word) => writeln!(out, "+ {word}")?,
                SubmissionResult::Rejected { message, .. } => writeln!(out, "! {message}")?,
            },
        }
        prompt(&mut out)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
