use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::Rng;
use std::{
    cell::Cell,
    collections::BTreeSet,
    rc::Rc,
    time::{Duration, Instant},
};

use crate::arrays::{remove_duplicates, remove_element, sorted_squares, three_sum};

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const TEN_THOUSAND: usize = 10_000;
const HUNDRED_THOUSAND: usize = 100_000;
const MILLION: usize = 1_000_000;

// Values are drawn from a narrow range so that duplicates and zero sums actually show up.
const VALUE_RANGE: std::ops::RangeInclusive<i32> = -1_000..=1_000;

// `elem` is what gets compared. Every comparison bumps the shared `comparisons` counter, which
// needs interior mutability since `PartialEq` and friends only hand out `&self`.
#[derive(Clone)]
struct Evaluator<T> {
    elem: T,
    comparisons: Rc<Cell<usize>>,
}

impl<T> Evaluator<T> {
    fn new(elem: T, comparisons: Rc<Cell<usize>>) -> Self {
        Self { elem, comparisons }
    }

    fn tick(&self) {
        self.comparisons.set(self.comparisons.get() + 1);
    }
}

impl<T: Eq> Eq for Evaluator<T> {}

impl<T: PartialEq> PartialEq for Evaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tick();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for Evaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.tick();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for Evaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.tick();
        self.elem.cmp(&other.elem)
    }
}

// Resets the counter, runs `f` and reports how many comparisons it made and how long it took.
fn measure<F: FnOnce()>(comparisons: &Rc<Cell<usize>>, f: F) -> (usize, Duration) {
    comparisons.set(0);
    let now = Instant::now();
    f();
    (comparisons.get(), now.elapsed())
}

// The cubic baseline for `three_sum`: try every index triple and let a set weed out repeats.
fn brute_force_three_sum(nums: &[i32]) -> Vec<[i32; 3]> {
    let mut found = BTreeSet::new();
    for i in 0..nums.len() {
        for j in (i + 1)..nums.len() {
            for k in (j + 1)..nums.len() {
                let sum = i64::from(nums[i]) + i64::from(nums[j]) + i64::from(nums[k]);
                if sum == 0 {
                    let mut triplet = [nums[i], nums[j], nums[k]];
                    triplet.sort_unstable();
                    found.insert(triplet);
                }
            }
        }
    }
    found.into_iter().collect()
}

fn random_values(n: usize) -> Vec<i32> {
    let mut random = rand::thread_rng();
    (0..n).map(|_| random.gen_range(VALUE_RANGE)).collect()
}

/// Pits each two pointer routine against a naive counterpart over a ladder of random inputs and
/// prints a table per input size. Sizes above `max_size` are skipped.
pub fn run_bench(max_size: usize) -> anyhow::Result<()> {
    let sizes = [ZERO, ONE, HUNDRED, TEN_THOUSAND, HUNDRED_THOUSAND, MILLION]
        .into_iter()
        .filter(|&n| n <= max_size)
        .collect::<Vec<_>>();

    let pb = ProgressBar::new(sizes.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sizes: ({pos}/{len})",
    )?);

    let counter = Rc::new(Cell::new(0));

    for n in sizes {
        let values = random_values(n);
        let mut sorted_values = values.clone();
        sorted_values.sort_unstable();

        let evaluators = values
            .iter()
            .map(|&v| Evaluator::new(v, counter.clone()))
            .collect::<Vec<_>>();
        let sorted_evaluators = sorted_values
            .iter()
            .map(|&v| Evaluator::new(v, counter.clone()))
            .collect::<Vec<_>>();
        let target = Evaluator::new(0, counter.clone());

        let mut table = Table::new();
        table.add_row(row![
            "Routine".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        let mut input = evaluators.clone();
        let (took, elapsed) = measure(&counter, || {
            remove_element(&mut input, &target);
        });
        table.add_row(row![
            "Remove Element (two pointers)",
            took.to_string(),
            format!("{elapsed:?}")
        ]);

        let mut input = evaluators;
        let (took, elapsed) = measure(&counter, || input.retain(|v| *v != target));
        table.add_row(row![
            "Remove Element (Vec::retain)",
            took.to_string(),
            format!("{elapsed:?}")
        ]);

        let mut input = sorted_evaluators.clone();
        let (took, elapsed) = measure(&counter, || {
            remove_duplicates(&mut input);
        });
        table.add_row(row![
            "Remove Duplicates (two pointers)",
            took.to_string(),
            format!("{elapsed:?}")
        ]);

        let mut input = sorted_evaluators;
        let (took, elapsed) = measure(&counter, || input.dedup());
        table.add_row(row![
            "Remove Duplicates (Vec::dedup)",
            took.to_string(),
            format!("{elapsed:?}")
        ]);

        let now = Instant::now();
        sorted_squares(&sorted_values);
        table.add_row(row![
            "Sorted Squares (two pointers)",
            "-",
            format!("{:?}", now.elapsed())
        ]);

        let now = Instant::now();
        let mut squares = sorted_values
            .iter()
            .map(|&v| i64::from(v) * i64::from(v))
            .collect::<Vec<_>>();
        squares.sort_unstable();
        table.add_row(row![
            "Sorted Squares (square + sort)",
            "-",
            format!("{:?}", now.elapsed())
        ]);

        if n <= HUNDRED_THOUSAND {
            let mut input = values.clone();
            let now = Instant::now();
            three_sum(&mut input);
            table.add_row(row![
                "Three Sum (two pointers)",
                "-",
                format!("{:?}", now.elapsed())
            ]);
        } else {
            table.add_row(row![
                "Three Sum (two pointers)",
                "Not Doing It".red(),
                "Too Many Anchors"
            ]);
        }

        if n <= HUNDRED {
            let now = Instant::now();
            brute_force_three_sum(&values);
            table.add_row(row![
                "Three Sum (brute force)",
                "-",
                format!("{:?}", now.elapsed())
            ]);
        } else {
            table.add_row(row![
                "Three Sum (brute force)",
                "Not Doing It".red(),
                "It is Cubic"
            ]);
        }

        pb.suspend(|| {
            println!(
                "{} {}",
                "List Size -> ".bold().underline().blue(),
                n.to_string().bold()
            );
            table.printstd();
            println!();
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn evaluator_counts_comparisons() {
        let counter = Rc::new(Cell::new(0));
        let a = Evaluator::new(1, counter.clone());
        let b = Evaluator::new(2, counter.clone());

        assert!(a != b);
        assert!(a < b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn remove_duplicates_compares_once_per_element() {
        let counter = Rc::new(Cell::new(0));
        let mut values = [1, 1, 2, 3, 3]
            .into_iter()
            .map(|v| Evaluator::new(v, counter.clone()))
            .collect::<Vec<_>>();

        let (took, _) = measure(&counter, || {
            remove_duplicates(&mut values);
        });
        assert_eq!(took, 4);
    }

    #[test]
    fn brute_force_agrees_with_two_pointers() {
        for _ in 0..20 {
            let values = random_values(40)
                .into_iter()
                .map(|v| v % 10)
                .collect::<Vec<_>>();
            let expected = brute_force_three_sum(&values);

            let mut input = values.clone();
            let mut found = three_sum(&mut input);
            found.sort_unstable();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn small_ladder_runs() {
        assert!(run_bench(HUNDRED).is_ok());
    }
}
