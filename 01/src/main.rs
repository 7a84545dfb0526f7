#![deny(clippy::pedantic)]
use std::{cmp::Reverse, collections::BinaryHeap, fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
	/// The first part of the problem, where we find the most calories carried by any one elf
	Top,
	/// The second part of the problem, where we sum the calories carried by the `num_elves` best stocked elves
	TopN,
}

#[derive(Parser)]
struct Args {
	/// Input file path
	#[arg(short, long, default_value = "input/day01.txt")]
	input_file: PathBuf,
	/// The number of elves to sum up in the second part of the problem
	#[arg(short, long, default_value_t = 3)]
	num_elves: usize,
	/// Only run one part of the problem. Both parts are run if left out
	#[arg(value_enum)]
	mode: Option<Mode>,
	/// Print more diagnostics to stderr (repeat for even more)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

/// Totals up the calories carried by each elf.
///
/// Each line is the calories of a single snack, and elves are separated by one or more blank lines.
fn parse(text: &str) -> Result<Vec<u64>> {
	// Runs of blank lines and runs of snack lines alternate, so group on blankness and skip the blank runs
	let groups = text
		.lines()
		.enumerate()
		.group_by(|(_, line)| line.trim().is_empty());

	let mut sums = Vec::new();
	for (blank, mut group) in &groups {
		if blank {
			continue;
		}

		let sum = group.try_fold(0_u64, |sum, (i, line)| -> Result<u64> {
			let calories = line
				.trim()
				.parse::<u64>()
				.with_context(|| format!("line {}: `{line}` is not a calorie count", i + 1))?;

			sum.checked_add(calories)
				.with_context(|| format!("line {}: calorie total overflows", i + 1))
		})?;
		sums.push(sum);
	}

	Ok(sums)
}

fn top(sums: &[u64]) -> Option<u64> {
	sums.iter().copied().max()
}

/// Sums the `n` largest totals. If there are fewer than `n` elves, all of them are summed.
/// `None` if that sum doesn't fit in a `u64`.
fn top_n(sums: &[u64], n: usize) -> Option<u64> {
	// Min-heap (hence Reverse) of the n largest totals seen so far, seeded with the first n elves
	let mut sums = sums.iter().copied().map(Reverse);
	let mut heap = sums.by_ref().take(n).collect::<BinaryHeap<_>>();

	// A total belongs in the top n if it beats the smallest one kept so far, which sits on top of the heap.
	// Comparisons are backwards because of Reverse.
	for sum in sums {
		if heap.peek().is_some_and(|smallest| *smallest > sum) {
			heap.pop();
			heap.push(sum);
		}
	}

	heap.into_iter()
		.try_fold(0_u64, |total, Reverse(sum)| total.checked_add(sum))
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

	info!(path = %args.input_file.display(), "reading calorie list");
	let text = fs::read_to_string(&args.input_file)
		.with_context(|| format!("couldn't read `{}`", args.input_file.display()))?;

	let sums = parse(&text)?;
	debug!(elves = sums.len(), "totalled calories per elf");

	if matches!(args.mode, None | Some(Mode::Top)) {
		let most = top(&sums).context("the calorie list has no elves in it")?;
		println!("Part 1: {most}");
	}

	if matches!(args.mode, None | Some(Mode::TopN)) {
		let total = top_n(&sums, args.num_elves).context("the top calorie total overflows")?;
		println!("Part 2: {total}");
	}

	Ok(())
}
