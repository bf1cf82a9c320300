use anyhow::Context;
use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_filter::*;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

const SPEC_HELP: &str = "\
Enter one spec per guess you've made so far
    For example: wordle-filter 'we!ar?y' 'te!nor?' 've!r?ve' 'r!e!ads!'

Spec: 'we!ar?y'
    ! = correct letter/spot
    ? = correct letter/incorrect spot
    no suffix = mismatch

Tip: surround each spec in single quotes to prevent bash from interpreting the '!'s";

/// Lists the words from a word list that fit the Wordle feedback you've received so far.
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = SPEC_HELP)]
struct Args {
    /// One spec per guess, e.g. 'we!ar?y'.
    specs: Vec<String>,

    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long, default_value = "words")]
    words_file: PathBuf,

    /// The maximum number of matching words to print.
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// Seed for choosing which matching words to print.
    #[arg(long)]
    seed: Option<u64>,

    /// Print more details. Repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    if args.specs.is_empty() {
        print_usage(out)?;
        return Ok(());
    }

    let specs = SpecSet::from_specs(&args.specs)?;

    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("could not open {}", args.words_file.display()))?,
    );
    let word_bank = WordBank::from_reader(words_reader)?;

    let possible_words = get_possible_words(&specs, &word_bank);
    let num_matches = possible_words.len();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sample = choose_display_sample(possible_words, args.limit, &mut rng);

    print_matches(out, num_matches, args.limit, &sample)?;
    Ok(())
}

fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", Args::command().render_help())
}

fn print_matches<W: Write>(
    out: &mut W,
    num_matches: usize,
    limit: usize,
    sample: &[&str],
) -> io::Result<()> {
    if num_matches == 0 {
        return writeln!(out, "No matches found");
    }

    if num_matches > limit {
        writeln!(out, "{} matches found, here's {}:", num_matches, limit)?;
    } else {
        writeln!(out, "{} matches found:", num_matches)?;
    }
    for word in sample {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_default_env()
        .init();
}

fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["wordle-filter", "we!ar?y", "te!nor?"]);

        assert_eq!(args.specs, vec!["we!ar?y", "te!nor?"]);
        assert_eq!(args.words_file, PathBuf::from("words"));
        assert_eq!(args.limit, 10);
        assert_eq!(args.seed, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_options() {
        let args = Args::parse_from([
            "wordle-filter",
            "-vv",
            "-f",
            "/tmp/words.txt",
            "-n",
            "3",
            "--seed",
            "42",
            "we!ar?y",
        ]);

        assert_eq!(args.specs, vec!["we!ar?y"]);
        assert_eq!(args.words_file, PathBuf::from("/tmp/words.txt"));
        assert_eq!(args.limit, 3);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn args_are_valid() {
        Args::command().debug_assert();
    }

    fn output_of(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_matches_none() {
        let output = output_of(|out| print_matches(out, 0, 10, &[]));

        assert_eq!(output, "No matches found\n");
    }

    #[test]
    fn print_matches_under_limit() {
        let output = output_of(|out| print_matches(out, 2, 10, &["rebus", "berms"]));

        assert_eq!(output, "2 matches found:\nrebus\nberms\n");
    }

    #[test]
    fn print_matches_at_limit() {
        let output = output_of(|out| print_matches(out, 2, 2, &["rebus", "berms"]));

        assert_eq!(output, "2 matches found:\nrebus\nberms\n");
    }

    #[test]
    fn print_matches_over_limit() {
        let output = output_of(|out| print_matches(out, 23, 2, &["rebus", "berms"]));

        assert_eq!(output, "23 matches found, here's 2:\nrebus\nberms\n");
    }

    #[test]
    fn run_without_specs_prints_usage() {
        let args = Args::parse_from(["wordle-filter", "-f", "/no/such/words/file"]);

        let output = output_of(|out| {
            run(&args, out).map_err(|error| io::Error::new(io::ErrorKind::Other, error.to_string()))
        });

        assert!(output.contains("Usage:"));
        assert!(output.contains("'we!ar?y' 'te!nor?' 've!r?ve' 'r!e!ads!'"));
        assert!(output.contains("no suffix = mismatch"));
        assert!(output.contains("Tip: surround each spec in single quotes"));
    }

    #[test]
    fn run_with_invalid_spec_fails() {
        let args = Args::parse_from(["wordle-filter", "-f", "/no/such/words/file", "we!ar?"]);

        let error = run(&args, &mut Vec::new()).unwrap_err();

        assert_eq!(error.to_string(), "Spec 'we!ar?' must match ([a-z][!?]? *){5}");
    }

    #[test]
    fn run_with_missing_words_file_fails() {
        let args = Args::parse_from(["wordle-filter", "-f", "/no/such/words/file", "we!ar?y"]);

        assert!(run(&args, &mut Vec::new()).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Info);
        assert_eq!(level_for_verbosity(1), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(2), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }
}
