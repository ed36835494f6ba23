//! # Introduction
//!
//! Classic two pointer exercises over strings and arrays. Every routine is a plain function that
//! runs in linear time (plus a sort for [`three_sum`](arrays::three_sum)) and, where it works in
//! place, uses constant extra space.
//!
//! - [`strings`]: palindrome check, in place reversal and run-length compression.
//! - [`arrays`]: value removal, sorted deduplication, sorted squares, zero-sum triplets and the
//!   Dutch national flag partition.
//! - [`benchmark`]: compares the routines against their naive counterparts.
//!
//! # Example
//!
//! ```
//! use pincer_mini::arrays::sort_colors;
//! use pincer_mini::strings::PalindromeExt;
//!
//! let mut colors = [2, 0, 2, 1, 1, 0];
//! sort_colors(&mut colors);
//! assert_eq!(colors, [0, 0, 1, 1, 2, 2]);
//!
//! assert!("No 'x' in Nixon".is_palindrome());
//! ```

pub mod arrays;
pub mod benchmark;
mod demo;
pub mod strings;

use anyhow::bail;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::fmt::Display;

/// Run the exercises on the commandline. Install the `pincer` crate and run `pincer run --help`
/// to see what options are available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct PointerArgs {
    #[command(subcommand)]
    command: PointerCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum PointerCommands {
    /// Check whether the text is a palindrome, ignoring case and anything not alphanumeric.
    Palindrome { text: String },

    /// Reverse the characters of the text in place.
    Reverse { text: String },

    /// Remove every occurrence of a value from a list of numbers.
    RemoveElement {
        /// Comma separated list of numbers, e.g. `5,8,8,5,3`
        #[arg(
            short,
            long,
            required = true,
            value_delimiter = ',',
            allow_hyphen_values = true
        )]
        nums: Vec<i32>,

        /// The value to remove
        #[arg(short, long, allow_hyphen_values = true)]
        val: i32,
    },

    /// Remove duplicates from a sorted list of numbers.
    RemoveDuplicates {
        /// Comma separated list of numbers sorted in ascending order
        #[arg(
            short,
            long,
            required = true,
            value_delimiter = ',',
            allow_hyphen_values = true
        )]
        nums: Vec<i32>,
    },

    /// Square a sorted list of numbers, keeping the result sorted.
    SortedSquares {
        /// Comma separated list of numbers sorted in ascending order
        #[arg(
            short,
            long,
            required = true,
            value_delimiter = ',',
            allow_hyphen_values = true
        )]
        nums: Vec<i32>,
    },

    /// Find every unique triplet that sums to zero.
    ThreeSum {
        /// Comma separated list of numbers
        #[arg(
            short,
            long,
            required = true,
            value_delimiter = ',',
            allow_hyphen_values = true
        )]
        nums: Vec<i32>,
    },

    /// Sort a list of 0s, 1s and 2s in a single pass.
    SortColors {
        /// Comma separated list made up of 0, 1 and 2
        #[arg(short, long, required = true, value_delimiter = ',')]
        colors: Vec<i32>,
    },

    /// Run-length compress the characters of the text in place.
    Compress { text: String },

    /// Run every exercise over a fixed set of inputs and compare against the expected output.
    Demo,

    /// Benchmark the exercises against naive implementations on random inputs.
    Bench {
        /// Largest input size to run
        #[arg(long, default_value_t = 100_000)]
        max_size: usize,
    },
}

fn report(label: &str, value: impl Display) {
    println!("{} {}", format!("{label} ->").bold().blue(), value);
}

impl PointerArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            PointerCommands::Palindrome { text } => {
                let verdict = if strings::is_palindrome(&text) {
                    "true".green()
                } else {
                    "false".red()
                };
                report("Palindrome", verdict);
            }

            PointerCommands::Reverse { text } => {
                let mut chars = text.chars().collect::<Vec<_>>();
                strings::reverse_string(&mut chars);
                report("Reversed", chars.into_iter().collect::<String>());
            }

            PointerCommands::RemoveElement { mut nums, val } => {
                let k = arrays::remove_element(&mut nums, &val);
                report("k", k);
                report("Remaining", format!("{:?}", &nums[..k]));
            }

            PointerCommands::RemoveDuplicates { mut nums } => {
                let k = arrays::remove_duplicates(&mut nums);
                report("k", k);
                report("Unique", format!("{:?}", &nums[..k]));
            }

            PointerCommands::SortedSquares { nums } => {
                report("Squares", format!("{:?}", arrays::sorted_squares(&nums)));
            }

            PointerCommands::ThreeSum { mut nums } => {
                let triplets = arrays::three_sum(&mut nums);
                report("Triplets", format!("{triplets:?}"));
            }

            PointerCommands::SortColors { mut colors } => {
                if let Some(bad) = colors.iter().find(|c| !(0..=2).contains(*c)) {
                    bail!("colors may only be 0, 1 or 2, found {bad}");
                }
                arrays::sort_colors(&mut colors);
                report("Sorted", format!("{colors:?}"));
            }

            PointerCommands::Compress { text } => {
                let mut chars = text.chars().collect::<Vec<_>>();
                let len = strings::compress(&mut chars);
                report("Length", len);
                report("Compressed", chars[..len].iter().collect::<String>());
            }

            PointerCommands::Demo => demo::run_demo(),

            PointerCommands::Bench { max_size } => benchmark::run_bench(max_size)?,
        }

        Ok(())
    }
}
