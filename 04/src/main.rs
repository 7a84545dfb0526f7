#![deny(clippy::pedantic)]
use std::{fmt, fs, io, path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
	/// The first variant of the problem, where we check if in a pair of assignments, one overlaps entirely with the other
	Entire,
	/// The second variant of the problem, where we check if in a pair of assignments, one overlaps the other at all
	Partial,
}

#[derive(Parser)]
struct Args {
	/// Input file path
	#[arg(short, long, default_value = "input/day04.txt")]
	input_file: PathBuf,
	/// Only run the problem in this mode. Both modes are run if left out
	#[arg(value_enum)]
	mode: Option<Mode>,
	/// Print more diagnostics to stderr (repeat for even more)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

/// A range of section IDs, inclusive on both ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Sections {
	start: u64,
	end: u64,
}

impl Sections {
	fn new(start: u64, end: u64) -> Result<Self> {
		if start > end {
			bail!("section range {start}-{end} ends before it starts");
		}

		Ok(Sections { start, end })
	}
}

/// A pair of section assignments, one for each elf in the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Assignments(Sections, Sections);

impl Assignments {
	/// Test if one assignment fully contains the other
	fn fully_contains(&self) -> bool {
		let (Sections { start: a, end: b }, Sections { start: x, end: y }) = (self.0, self.1);

		(a <= x && y <= b) || (x <= a && b <= y)
	}

	/// Test if the assignments share at least one section
	fn overlaps(&self) -> bool {
		let (Sections { start: a, end: b }, Sections { start: x, end: y }) = (self.0, self.1);

		// Neither range ends before the other one starts
		a <= y && x <= b
	}
}

impl FromStr for Assignments {
	type Err = anyhow::Error;

	fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
		// Lazily initialize a static regular expression for parsing a pair of assignments
		lazy_static! {
			static ref REGEX: Regex =
				Regex::new("^([[:digit:]]+)-([[:digit:]]+),([[:digit:]]+)-([[:digit:]]+)$")
					.unwrap();
		}

		// Each number above is captured in a capture group - use those to parse
		let captures = REGEX
			.captures(text)
			.context("expected a pair of section ranges, like `2-4,6-8`")?;

		Ok(Assignments(
			Sections::new(captures[1].parse()?, captures[2].parse()?)?,
			Sections::new(captures[3].parse()?, captures[4].parse()?)?,
		))
	}
}

impl fmt::Display for Assignments {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}-{},{}-{}",
			self.0.start, self.0.end, self.1.start, self.1.end
		)
	}
}

fn parse(text: &str) -> Result<Vec<Assignments>> {
	text.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(i, line)| {
			line.trim()
				.parse()
				.with_context(|| format!("line {}: `{line}`", i + 1))
		})
		.collect()
}

fn count_fully_contained(pairs: &[Assignments]) -> usize {
	pairs.iter().filter(|pair| pair.fully_contains()).count()
}

fn count_overlapping(pairs: &[Assignments]) -> usize {
	pairs.iter().filter(|pair| pair.overlaps()).count()
}

fn init_logging(verbosity: u8) -> Result<()> {
	let level = match verbosity {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};

	let subscriber = FmtSubscriber::builder()
		.with_max_level(level)
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose)?;

	info!(path = %args.input_file.display(), "reading section assignments");
	let text = fs::read_to_string(&args.input_file)
		.with_context(|| format!("couldn't read `{}`", args.input_file.display()))?;

	let pairs = parse(&text)?;
	debug!(pairs = pairs.len(), "parsed section assignments");

	if matches!(args.mode, None | Some(Mode::Entire)) {
		println!("Part 1: {}", count_fully_contained(&pairs));
	}

	if matches!(args.mode, None | Some(Mode::Partial)) {
		println!("Part 2: {}", count_overlapping(&pairs));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const EXAMPLE: &str = include_str!("../input/example.txt");

	#[test]
	fn test_overlaps() {
		macro_rules! test_entirely {
			($str:expr, $truth:expr) => {
				let assignment: Assignments = $str.parse().unwrap();
				let overlaps = assignment.fully_contains();

				assert_eq!(overlaps, $truth, "(entire overlap)\n  text: `{}`", $str)
			};
		}

		test_entirely!("2-4,6-8", false);
		test_entirely!("2-3,4-5", false);
		test_entirely!("5-7,7-9", false);
		test_entirely!("2-8,3-7", true);
		test_entirely!("6-6,4-6", true);
		test_entirely!("2-6,4-8", false);
		// Identical ranges contain each other
		test_entirely!("3-5,3-5", true);

		macro_rules! test_partially {
			($str:expr, $truth:expr) => {
				let assignment: Assignments = $str.parse().unwrap();
				let overlaps = assignment.overlaps();

				assert_eq!(overlaps, $truth, "(partial overlap)\n  text: `{}`", $str)
			};
		}

		test_partially!("2-4,6-8", false);
		test_partially!("2-3,4-5", false);
		test_partially!("5-7,7-9", true);
		test_partially!("2-8,3-7", true);
		test_partially!("6-6,4-6", true);
		test_partially!("2-6,4-8", true);
		test_partially!("6-8,2-4", false);
	}

	#[test]
	fn test_counts() {
		let pairs = parse(EXAMPLE).unwrap();

		assert_eq!(count_fully_contained(&pairs), 2);
		assert_eq!(count_overlapping(&pairs), 4);
	}

	#[test]
	fn test_parse() {
		macro_rules! test {
			($str:expr, $n_tuple:expr) => {
				let assignment: Assignments = $str.parse().unwrap();
				let nums = (
					assignment.0.start,
					assignment.0.end,
					assignment.1.start,
					assignment.1.end,
				);

				assert_eq!(nums, $n_tuple, "\n  text: `{}`", $str)
			};
		}

		test!("2-4,6-8", (2, 4, 6, 8));
		test!("2-3,4-5", (2, 3, 4, 5));
		test!("5-7,7-9", (5, 7, 7, 9));
		test!("2-8,3-7", (2, 8, 3, 7));
		test!("6-6,4-6", (6, 6, 4, 6));
		test!("2-6,4-8", (2, 6, 4, 8));

		// An extra one to make sure it works with multiple digits (as mentioned in the prompt)
		test!("22-63,4-888", (22, 63, 4, 888));
		// Section IDs aren't limited to 32 bits
		test!(
			"4294967296-99999999999,1-4294967296",
			(4_294_967_296, 99_999_999_999, 1, 4_294_967_296)
		);

		assert_eq!(parse(EXAMPLE).unwrap().len(), 6);
	}

	#[test]
	fn test_bad_input() {
		macro_rules! test {
			($str:expr) => {
				assert!($str.parse::<Assignments>().is_err(), "\n  text: `{}`", $str);
			};
		}

		test!("2-4");
		test!("2-4,6-8,1-1");
		test!("2-4, 6-8");
		test!("a-b,c-d");
		test!("-2-4,6-8");
		test!("4-2,6-8");
		test!("99999999999999999999-1,1-1");

		let err = parse("2-4,6-8\n2-4\n").unwrap_err();
		assert!(err.to_string().contains("line 2"), "{err:#}");
	}

	fn sections(max: u64) -> impl Strategy<Value = Sections> {
		(0..=max, 0..=max).prop_map(|(a, b)| Sections {
			start: a.min(b),
			end: a.max(b),
		})
	}

	proptest! {
		#[test]
		fn assignments_round_trip(pairs in prop::collection::vec((sections(1000), sections(1000)), 0..20)) {
			let pairs = pairs.into_iter().map(|(first, second)| Assignments(first, second)).collect::<Vec<_>>();
			let text = pairs.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");

			prop_assert_eq!(parse(&text).unwrap(), pairs);
		}

		#[test]
		fn predicates_match_section_sets(first in sections(20), second in sections(20)) {
			let pair = Assignments(first, second);
			let first = first.start..=first.end;
			let second = second.start..=second.end;

			let contained = first.clone().all(|id| second.contains(&id))
				|| second.clone().all(|id| first.contains(&id));
			let shared = first.clone().any(|id| second.contains(&id));

			prop_assert_eq!(pair.fully_contains(), contained);
			prop_assert_eq!(pair.overlaps(), shared);
		}
	}
}
