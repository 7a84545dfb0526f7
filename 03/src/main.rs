#![deny(clippy::pedantic)]
use std::{collections::HashSet, fmt, fs, io, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use tracing::{debug, info, trace, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
	/// The first variant of the problem, where a single rucksack is split into two to search for the common item
	Single,
	/// The second variant of the problem, where three rucksacks are searched for a common item
	Triple,
}

#[derive(Parser)]
struct Args {
	/// Input file path
	#[arg(short, long, default_value = "input/day03.txt")]
	input_file: PathBuf,
	/// Only run the problem in this mode. Both modes are run if left out
	#[arg(value_enum)]
	mode: Option<Mode>,
	/// Print more diagnostics to stderr (repeat for even more)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

/// A rucksack, with its items split evenly between two compartments
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Sack<'a> {
	first: &'a str,
	second: &'a str,
}

impl<'a> Sack<'a> {
	fn parse(line: &'a str) -> Result<Self> {
		// Items are single letters, so splitting by bytes is the same as splitting by items
		if !line.is_ascii() {
			bail!("items should all be letters");
		}
		if line.len() % 2 != 0 {
			bail!(
				"{} items can't be split evenly between two compartments",
				line.len()
			);
		}

		let (first, second) = line.split_at(line.len() / 2);
		Ok(Sack { first, second })
	}

	/// The first item in the first compartment which also shows up in the second
	fn common_item(&self) -> Option<char> {
		self.first.chars().find(|&item| self.second.contains(item))
	}

	fn items(&self) -> HashSet<char> {
		self.first.chars().chain(self.second.chars()).collect()
	}
}

impl fmt::Display for Sack<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.first, self.second)
	}
}

fn parse(text: &str) -> Result<Vec<Sack<'_>>> {
	text.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(i, line)| Sack::parse(line.trim_end()).with_context(|| format!("line {}: `{line}`", i + 1)))
		.collect()
}

/// Finds the item carried in every one of `sacks`. If there's more than one, the smallest is picked so the answer
/// doesn't depend on hash order.
fn common_item_across(sacks: &[Sack<'_>]) -> Option<char> {
	// Only the smallest set has to be walked, the rest are just probed
	let mut sets = sacks.iter().map(Sack::items).sorted_by_key(HashSet::len);
	let smallest = sets.next()?;
	let rest = sets.collect::<Vec<_>>();

	smallest
		.into_iter()
		.filter(|item| rest.iter().all(|set| set.contains(item)))
		.min()
}

/// a-z are 1-26, A-Z are 27-52
fn priority(item: char) -> Option<u32> {
	match item {
		'a'..='z' => Some(u32::from(item) - u32::from('a') + 1),
		'A'..='Z' => Some(u32::from(item) - u32::from('A') + 27),
		_ => None,
	}
}

fn part_one(sacks: &[Sack<'_>]) -> Result<u32> {
	let mut sum = 0;

	for (i, sack) in sacks.iter().enumerate() {
		let Some(item) = sack.common_item() else {
			warn!(sack = i + 1, "no item is in both compartments, skipping it");
			continue;
		};
		trace!(sack = i + 1, %item, "found common item");

		sum += priority(item).with_context(|| format!("sack {}: `{item}` has no priority", i + 1))?;
	}

	Ok(sum)
}

fn part_two(sacks: &[Sack<'_>]) -> Result<u32> {
	sacks
		.chunks(3)
		.enumerate()
		.map(|(i, group)| -> Result<u32> {
			let badge = common_item_across(group).with_context(|| format!("group {} has no badge", i + 1))?;
			trace!(group = i + 1, %badge, "found badge");

			priority(badge).with_context(|| format!("group {}: badge `{badge}` has no priority", i + 1))
		})
		.sum()
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

	info!(path = %args.input_file.display(), "reading rucksack list");
	let text = fs::read_to_string(&args.input_file)
		.with_context(|| format!("couldn't read `{}`", args.input_file.display()))?;

	let sacks = parse(&text)?;
	debug!(sacks = sacks.len(), groups = sacks.len().div_ceil(3), "parsed rucksacks");

	if matches!(args.mode, None | Some(Mode::Single)) {
		println!("Part 1: {}", part_one(&sacks)?);
	}

	if matches!(args.mode, None | Some(Mode::Triple)) {
		println!("Part 2: {}", part_two(&sacks)?);
	}

	Ok(())
}
