//! Two pointer exercises over integer arrays.
//!
//! Routines that work in place take a mutable slice and, where elements get dropped, return the
//! length `k` of the meaningful prefix. Anything in `slice[k..]` is left over from the scan and
//! carries no meaning.
//!
//! # Example
//!
//! ```
//! use pincer_mini::arrays::{remove_duplicates, remove_element};
//!
//! let mut nums = vec![1, 1, 2, 3, 3, 3, 4];
//! let k = remove_duplicates(&mut nums);
//! assert_eq!(nums[..k], [1, 2, 3, 4]);
//!
//! let k = remove_element(&mut nums[..k], &3);
//! assert_eq!(nums[..k], [1, 2, 4]);
//! ```

mod remove_duplicates;
mod remove_element;
mod sort_colors;
mod sorted_squares;
mod three_sum;

pub use remove_duplicates::remove_duplicates;
pub use remove_element::remove_element;
pub use sort_colors::{partition_three_way_by, sort_colors, Color};
pub use sorted_squares::sorted_squares;
pub use three_sum::three_sum;
