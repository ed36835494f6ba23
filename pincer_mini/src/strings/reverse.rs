/// Reverses `slice` in place by swapping from both ends towards the middle.
///
/// # Usage
///```
/// use pincer_mini::strings::reverse_string;
///
/// let mut s = ['h', 'e', 'l', 'l', 'o'];
/// reverse_string(&mut s);
/// assert_eq!(s, ['o', 'l', 'l', 'e', 'h']);
///```
/// # Algorithm
///
/// ```
/// let mut slice = vec!['h', 'e', 'l', 'l', 'o'];
///
/// let mut left = 0;
/// let mut right = slice.len().saturating_sub(1);
///
/// while left < right {
///     slice.swap(left, right);
///     left += 1;
///     right -= 1;
/// }
/// # assert_eq!(slice, vec!['o', 'l', 'l', 'e', 'h']);
/// ```
///
/// Only half of the slice is visited and nothing is allocated. Applying the function twice
/// gives back the original order. Works for any element type, not just characters.
pub fn reverse_string<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = slice.len() - 1;

    while left < right {
        slice.swap(left, right);
        left += 1;
        right -= 1;
    }
}
