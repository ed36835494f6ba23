/// The three categories of the Dutch national flag, in the order they end up in after
/// partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    White,
    Blue,
}

impl From<i32> for Color {
    /// `0` is red and `1` is white. Any other value counts as blue.
    fn from(value: i32) -> Self {
        match value {
            0 => Color::Red,
            1 => Color::White,
            _ => Color::Blue,
        }
    }
}

/// Sorts a slice of `0`s, `1`s and `2`s in place with a single pass.
///
/// # Usage
///```
/// use pincer_mini::arrays::sort_colors;
///
/// let mut colors = [2, 0, 2, 1, 1, 0];
/// sort_colors(&mut colors);
/// assert_eq!(colors, [0, 0, 1, 1, 2, 2]);
///```
///
/// Values other than `0`, `1` or `2` are not checked. They are treated as `2`, so the output is
/// still partitioned but no longer sorted.
pub fn sort_colors(colors: &mut [i32]) {
    partition_three_way_by(colors, |&value| Color::from(value));
}

/// Partitions `slice` in place so that every [`Color::Red`] element comes before every
/// [`Color::White`] element, which in turn come before every [`Color::Blue`] element.
///
/// # Usage
///```
/// use pincer_mini::arrays::{partition_three_way_by, Color};
///
/// let mut words = ["pear", "fig", "banana", "kiwi", "apple"];
/// partition_three_way_by(&mut words, |w| match w.len() {
///     0..=3 => Color::Red,
///     4 => Color::White,
///     _ => Color::Blue,
/// });
/// assert_eq!(words[0], "fig");
/// assert!(words[1..3].iter().all(|w| w.len() == 4));
/// assert!(words[3..].iter().all(|w| w.len() > 4));
///```
/// # Explanation
///
/// This is Dijkstra's Dutch national flag algorithm. Three cursors split the slice into four
/// regions:
///
/// ```text
/// [ red .. | white .. | unclassified .. | blue .. ]
///   0       low        mid               high     len
/// ```
///
/// While `mid` has not reached `high`, the element at `mid` is classified:
///
/// - red: swap it with `low`, advance both `low` and `mid`;
/// - white: advance `mid`;
/// - blue: shrink `high` and swap it in. `mid` stays put because the element that was just swapped
///   in has not been looked at yet.
///
/// Every element is classified exactly once, giving a single O(n) pass. The partition is not
/// stable.
pub fn partition_three_way_by<T, F>(slice: &mut [T], mut color_of: F)
where
    F: FnMut(&T) -> Color,
{
    let mut low = 0;
    let mut mid = 0;
    // Exclusive: `slice[high..]` is already blue.
    let mut high = slice.len();

    while mid < high {
        match color_of(&slice[mid]) {
            Color::Red => {
                slice.swap(low, mid);
                low += 1;
                mid += 1;
            }
            Color::White => mid += 1,
            Color::Blue => {
                high -= 1;
                slice.swap(mid, high);
            }
        }
    }
}
