use colored::Colorize;
use prettytable::{row, Table};

use crate::arrays::{remove_duplicates, remove_element, sort_colors, sorted_squares, three_sum};
use crate::strings::{compress, is_palindrome, reverse_string};

// One line of the demo table. `output` and `expected` are compared as rendered strings.
struct Case {
    routine: &'static str,
    input: String,
    output: String,
    expected: &'static str,
}

fn palindrome_cases() -> Vec<Case> {
    [
        ("A man, a plan, a canal: Panama", "true"),
        ("race a car", "false"),
        ("1A@2!3 23!2@a1", "true"),
        ("No 'x' in Nixon", "true"),
        ("12321", "true"),
    ]
    .into_iter()
    .map(|(s, expected)| Case {
        routine: "Valid Palindrome",
        input: format!("{s:?}"),
        output: is_palindrome(s).to_string(),
        expected,
    })
    .collect()
}

fn reverse_cases() -> Vec<Case> {
    [
        ("hello", "olleh"),
        ("Hannah", "hannaH"),
        ("a", "a"),
        ("ab", "ba"),
        ("racecar", "racecar"),
    ]
    .into_iter()
    .map(|(s, expected)| {
        let mut chars = s.chars().collect::<Vec<_>>();
        reverse_string(&mut chars);
        Case {
            routine: "Reverse String",
            input: s.to_string(),
            output: chars.into_iter().collect(),
            expected,
        }
    })
    .collect()
}

fn remove_element_cases() -> Vec<Case> {
    [
        (vec![5, 8, 8, 5, 3], 5, "3 [8, 8, 3]"),
        (vec![50, 49, 48, 47, 46, 45], 48, "5 [50, 49, 47, 46, 45]"),
        (vec![0, 0, 0, 0, 1, 0, 0, 0, 0], 0, "1 [1]"),
        (vec![10, 20, 30, 40, 50], 25, "5 [10, 20, 30, 40, 50]"),
        (vec![0, 50], 0, "1 [50]"),
    ]
    .into_iter()
    .map(|(mut nums, val, expected)| {
        let input = format!("{nums:?}, val = {val}");
        let k = remove_element(&mut nums, &val);
        Case {
            routine: "Remove Element",
            input,
            output: format!("{k} {:?}", &nums[..k]),
            expected,
        }
    })
    .collect()
}

fn remove_duplicates_cases() -> Vec<Case> {
    [
        (vec![1, 1, 2, 2, 3], "3 [1, 2, 3]"),
        (vec![-1, -1, 0, 0, 1, 1, 2], "4 [-1, 0, 1, 2]"),
        (vec![5, 5, 5, 5], "1 [5]"),
        (vec![1, 2, 3, 4], "4 [1, 2, 3, 4]"),
        (vec![0, 1, 1], "2 [0, 1]"),
    ]
    .into_iter()
    .map(|(mut nums, expected)| {
        let input = format!("{nums:?}");
        let k = remove_duplicates(&mut nums);
        Case {
            routine: "Remove Duplicates",
            input,
            output: format!("{k} {:?}", &nums[..k]),
            expected,
        }
    })
    .collect()
}

fn sorted_squares_cases() -> Vec<Case> {
    [
        (vec![-4, -1, 0, 3, 10], "[0, 1, 9, 16, 100]"),
        (vec![-5, -4, -3, -2, -1], "[1, 4, 9, 16, 25]"),
        (vec![1, 2, 3, 4, 5], "[1, 4, 9, 16, 25]"),
    ]
    .into_iter()
    .map(|(nums, expected)| Case {
        routine: "Squares of a Sorted Array",
        input: format!("{nums:?}"),
        output: format!("{:?}", sorted_squares(&nums)),
        expected,
    })
    .collect()
}

fn three_sum_cases() -> Vec<Case> {
    [
        (vec![-1, 0, 1, 2, -1, -4], "[[-1, -1, 2], [-1, 0, 1]]"),
        (vec![0, 1, 1], "[]"),
        (vec![0, 0, 0], "[[0, 0, 0]]"),
        (vec![-2, 0, 1, 1, 2], "[[-2, 0, 2], [-2, 1, 1]]"),
        (vec![-5, -4, -3, -2, -1], "[]"),
    ]
    .into_iter()
    .map(|(mut nums, expected)| {
        let input = format!("{nums:?}");
        Case {
            routine: "3Sum",
            input,
            output: format!("{:?}", three_sum(&mut nums)),
            expected,
        }
    })
    .collect()
}

fn sort_colors_cases() -> Vec<Case> {
    [
        (vec![2, 0, 2, 1, 1, 0], "[0, 0, 1, 1, 2, 2]"),
        (vec![0, 0, 1, 1, 2, 2], "[0, 0, 1, 1, 2, 2]"),
        (vec![2, 2, 1, 1, 0, 0], "[0, 0, 1, 1, 2, 2]"),
        (vec![0, 0, 0, 0], "[0, 0, 0, 0]"),
        (vec![2, 2, 2, 2], "[2, 2, 2, 2]"),
        (vec![1], "[1]"),
    ]
    .into_iter()
    .map(|(mut colors, expected)| {
        let input = format!("{colors:?}");
        sort_colors(&mut colors);
        Case {
            routine: "Sort Colors",
            input,
            output: format!("{colors:?}"),
            expected,
        }
    })
    .collect()
}

fn compress_cases() -> Vec<Case> {
    [
        ("aabbccc", "6 a2b2c3"),
        ("abc", "3 abc"),
        ("aaaaaa", "2 a6"),
        ("abbbbbbbbbbbb", "4 ab12"),
        ("a", "1 a"),
        ("aa", "2 a2"),
    ]
    .into_iter()
    .map(|(s, expected)| {
        let mut chars = s.chars().collect::<Vec<_>>();
        let len = compress(&mut chars);
        Case {
            routine: "String Compression",
            input: s.to_string(),
            output: format!("{len} {}", chars[..len].iter().collect::<String>()),
            expected,
        }
    })
    .collect()
}

fn all_cases() -> Vec<Case> {
    [
        palindrome_cases(),
        reverse_cases(),
        remove_element_cases(),
        remove_duplicates_cases(),
        sorted_squares_cases(),
        three_sum_cases(),
        sort_colors_cases(),
        compress_cases(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(crate) fn run_demo() {
    let mut table = Table::new();
    table.add_row(row![
        "Routine".bold(),
        "Input".bold(),
        "Output".bold(),
        "Expected".bold(),
        "".bold()
    ]);

    for case in all_cases() {
        let verdict = if case.output == case.expected {
            "ok".green()
        } else {
            "mismatch".red()
        };
        table.add_row(row![
            case.routine,
            case.input,
            case.output,
            case.expected,
            verdict
        ]);
    }

    table.printstd();
}
