#![deny(clippy::pedantic)]
use std::{fmt, fs, io, path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// The first variant of the problem, where the second letter in each line of the file tells you what shape to put your hand in
	Shape,
	/// The second variant of the problem, where the second letter in each line of the file tells you how the round should end
	Outcome,
}

#[derive(Parser)]
struct Args {
	/// Input file path
	#[arg(short, long, default_value = "input/day02.txt")]
	input_file: PathBuf,
	/// Only run the problem in this mode. Both modes are run if left out
	#[arg(value_enum)]
	mode: Option<Mode>,
	/// Print more diagnostics to stderr (repeat for even more)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
	Rock,
	Paper,
	Scissors,
}

impl Shape {
	/// The opponent's codes are `A`, `B`, `C` and ours are `X`, `Y`, `Z`, both in the order rock, paper, scissors
	fn from_code(code: char) -> Result<Self> {
		match code {
			'A' | 'X' => Ok(Shape::Rock),
			'B' | 'Y' => Ok(Shape::Paper),
			'C' | 'Z' => Ok(Shape::Scissors),
			_ => bail!("`{code}` is not a shape code"),
		}
	}

	fn score(self) -> u32 {
		match self {
			Shape::Rock => 1,
			Shape::Paper => 2,
			Shape::Scissors => 3,
		}
	}

	/// The shape to play against `self` so that the round ends in `outcome`
	fn for_outcome(self, outcome: Outcome) -> Shape {
		use Shape::{Paper, Rock, Scissors};

		match (self, outcome) {
			(Rock, Outcome::Lost) => Scissors,
			(Rock, Outcome::Draw) => Rock,
			(Rock, Outcome::Won) => Paper,
			(Paper, Outcome::Lost) => Rock,
			(Paper, Outcome::Draw) => Paper,
			(Paper, Outcome::Won) => Scissors,
			(Scissors, Outcome::Lost) => Paper,
			(Scissors, Outcome::Draw) => Scissors,
			(Scissors, Outcome::Won) => Rock,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
	Lost,
	Draw,
	Won,
}

impl Outcome {
	fn from_code(code: char) -> Result<Self> {
		match code {
			'X' => Ok(Outcome::Lost),
			'Y' => Ok(Outcome::Draw),
			'Z' => Ok(Outcome::Won),
			_ => bail!("`{code}` is not an outcome code"),
		}
	}

	fn score(self) -> u32 {
		match self {
			Outcome::Lost => 0,
			Outcome::Draw => 3,
			Outcome::Won => 6,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Round {
	player: Shape,
	opponent: Shape,
}

impl Round {
	/// How the round ended, from the player's point of view
	fn outcome(self) -> Outcome {
		use Shape::{Paper, Rock, Scissors};

		match (self.player, self.opponent) {
			(Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Outcome::Draw,
			(Rock, Scissors) | (Paper, Rock) | (Scissors, Paper) => Outcome::Won,
			(Rock, Paper) | (Paper, Scissors) | (Scissors, Rock) => Outcome::Lost,
		}
	}

	fn score(self) -> u32 {
		self.player.score() + self.outcome().score()
	}
}

/// One line of the strategy guide: what the opponent will play, and a second code whose meaning depends on the [`Mode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GuideEntry {
	opponent: char,
	response: char,
}

impl GuideEntry {
	fn round(self, mode: Mode) -> Result<Round> {
		// Both columns share the shape mapping, but each has its own alphabet
		if !matches!(self.opponent, 'A'..='C') {
			bail!("the opponent's code should be `A`, `B` or `C`, not `{}`", self.opponent);
		}
		if !matches!(self.response, 'X'..='Z') {
			bail!("the second code should be `X`, `Y` or `Z`, not `{}`", self.response);
		}

		let opponent = Shape::from_code(self.opponent)?;
		let player = match mode {
			Mode::Shape => Shape::from_code(self.response)?,
			Mode::Outcome => opponent.for_outcome(Outcome::from_code(self.response)?),
		};

		Ok(Round { player, opponent })
	}
}

impl FromStr for GuideEntry {
	type Err = anyhow::Error;

	fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
		let mut chars = line.chars();

		match (chars.next(), chars.next(), chars.next(), chars.next()) {
			(Some(opponent), Some(' '), Some(response), None) => Ok(GuideEntry { opponent, response }),
			_ => bail!("expected two codes separated by a space, like `A Y`"),
		}
	}
}

impl fmt::Display for GuideEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.opponent, self.response)
	}
}

fn parse(text: &str) -> Result<Vec<GuideEntry>> {
	text.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(i, line)| {
			line.trim_end()
				.parse()
				.with_context(|| format!("line {}: `{line}`", i + 1))
		})
		.collect()
}

fn rounds(guide: &[GuideEntry], mode: Mode) -> Result<Vec<Round>> {
	guide
		.iter()
		.enumerate()
		.map(|(i, entry)| {
			entry
				.round(mode)
				.with_context(|| format!("guide entry {} (`{entry}`)", i + 1))
		})
		.collect()
}

fn total_score(rounds: &[Round]) -> u32 {
	rounds.iter().copied().map(Round::score).sum()
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

	info!(path = %args.input_file.display(), "reading strategy guide");
	let text = fs::read_to_string(&args.input_file)
		.with_context(|| format!("couldn't read `{}`", args.input_file.display()))?;

	let guide = parse(&text)?;
	debug!(entries = guide.len(), "parsed strategy guide");

	// Part 1 reads the guide as shapes, part 2 as outcomes
	for (part, mode) in [(1, Mode::Shape), (2, Mode::Outcome)] {
		if args.mode.is_some_and(|only| only != mode) {
			continue;
		}

		let rounds = rounds(&guide, mode)?;
		println!("Part {part}: {}", total_score(&rounds));
	}

	Ok(())
}
