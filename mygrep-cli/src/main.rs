//! `mygrep`: a grep-like line matcher over `regexen`'s compiled automata.
//!
//! Converts an infix pattern to postfix (see [`infix`]), wraps it as
//! `.*P.*` (the core only decides whole-string membership; see
//! [`occurrence_pattern`]), compiles it once, and tests every line of every
//! input file (or stdin) against the resulting read-only DFA.

mod error;
mod infix;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use regexen::{Alphabet, Regex};

use error::CliError;

/// A grep-like line matcher backed by a Thompson/subset/Brzozowski regex engine.
#[derive(Parser, Debug)]
#[command(name = "mygrep")]
struct Args {
    /// Pattern to match, in ordinary infix regex syntax.
    pattern: String,

    /// Files to search. Reads standard input if none are given.
    files: Vec<PathBuf>,

    /// Print non-matching lines instead of matching ones.
    #[arg(short = 'i', long = "invert-match")]
    invert_match: bool,

    /// Print only a count of matching lines per file.
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Prefix each printed line with its 1-based line number.
    #[arg(short = 'n', long = "line-number")]
    line_number: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::from(0),
        Ok(false) => ExitCode::from(1),
        Err(err @ (CliError::MalformedPattern(_) | CliError::Parse(_))) => {
            eprintln!("mygrep: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("mygrep: {err}");
            ExitCode::from(1)
        }
    }
}

/// Returns whether any line matched across all inputs.
fn run(args: &Args) -> Result<bool, CliError> {
    let alphabet = Alphabet::default();
    let postfix = infix::to_postfix(&args.pattern, &alphabet).map_err(CliError::MalformedPattern)?;
    let regex = Regex::compile(&occurrence_pattern(&postfix), alphabet)?;

    let show_source = args.files.len() > 1;
    let mut any_match = false;

    if args.files.is_empty() {
        any_match |= scan(io::stdin().lock(), None, &regex, args)?;
    } else {
        for path in &args.files {
            let label = path.display().to_string();
            let file = File::open(path).map_err(|source| CliError::Io {
                path: label.clone(),
                source,
            })?;
            let source_label = show_source.then_some(label.as_str());
            any_match |= scan(BufReader::new(file), source_label, &regex, args)?;
        }
    }

    Ok(any_match)
}

/// Wraps a postfix pattern `P` as `.*P.*`, so the core's whole-string
/// acceptance decides line occurrence instead: the core only answers "is the
/// whole string in the language", and grep wants "does `P` occur anywhere in
/// the line". Postfix for `Concat(Star(.), Concat(P, Star(.)))`.
fn occurrence_pattern(postfix: &str) -> String {
    format!(".*{postfix}@.*@")
}

fn scan(
    reader: impl BufRead,
    source_label: Option<&str>,
    regex: &Regex,
    args: &Args,
) -> Result<bool, CliError> {
    let path_for_errors = source_label.unwrap_or("(standard input)").to_string();
    let mut matched_any = false;
    let mut count = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path_for_errors.clone(),
            source,
        })?;
        let is_match = regex.accepts(&line) != args.invert_match;
        if !is_match {
            continue;
        }
        matched_any = true;
        count += 1;
        if args.count {
            continue;
        }
        print_line(source_label, idx + 1, &line, args.line_number);
    }

    if args.count {
        match source_label {
            Some(label) => println!("{label}:{count}"),
            None => println!("{count}"),
        }
    }

    Ok(matched_any)
}

fn print_line(source_label: Option<&str>, line_number: usize, line: &str, show_number: bool) {
    match (source_label, show_number) {
        (Some(label), true) => println!("{label}:{line_number}:{line}"),
        (Some(label), false) => println!("{label}:{line}"),
        (None, true) => println!("{line_number}:{line}"),
        (None, false) => println!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pattern: &str, invert_match: bool, count: bool, line_number: bool) -> Args {
        Args {
            pattern: pattern.to_string(),
            files: Vec::new(),
            invert_match,
            count,
            line_number,
        }
    }

    fn compile_occurrence(pattern: &str) -> Regex {
        let alphabet = Alphabet::default();
        let postfix = infix::to_postfix(pattern, &alphabet).unwrap();
        Regex::compile(&occurrence_pattern(&postfix), alphabet).unwrap()
    }

    #[test]
    fn occurrence_matching_finds_substrings_not_just_whole_lines() {
        let regex = compile_occurrence("ab");
        assert!(regex.accepts("ab"));
        assert!(regex.accepts("xxabyy"));
        assert!(regex.accepts("xxab"));
        assert!(!regex.accepts("axb"));
    }

    #[test]
    fn scan_reports_matching_lines_only() {
        let regex = compile_occurrence("ab");
        let input = "ab\nxx\nyyabzz\n";
        let matched = scan(input.as_bytes(), None, &regex, &args("ab", false, false, false)).unwrap();
        assert!(matched);
    }

    #[test]
    fn scan_reports_false_when_nothing_matches() {
        let regex = compile_occurrence("ab");
        let input = "xx\nyy\n";
        let matched = scan(input.as_bytes(), None, &regex, &args("ab", false, false, false)).unwrap();
        assert!(!matched);
    }

    #[test]
    fn invert_match_flips_the_decision() {
        let regex = compile_occurrence("ab");
        let input = "ab\nxx\n";
        let matched = scan(input.as_bytes(), None, &regex, &args("ab", true, false, false)).unwrap();
        assert!(matched, "the non-matching line xx should count under -i");
    }
}
