/// Returns the squares of a sorted slice, themselves sorted in ascending order.
///
/// # Usage
///```
/// use pincer_mini::arrays::sorted_squares;
///
/// assert_eq!(sorted_squares(&[-4, -1, 0, 3, 10]), vec![0, 1, 9, 16, 100]);
///```
/// # Explanation
///
/// In a sorted slice the largest square always sits at one of the two ends: either the most
/// negative or the most positive value. Two cursors start at those ends. On every step the
/// larger of the two squares is written to the back of the result and its cursor moves inward,
/// so the result fills from the back to the front in a single pass.
///
/// When both squares are equal the right cursor's value is taken first.
///
/// Squares are returned as `i64`, so even `i32::MIN` squares without overflow. The input must be
/// sorted ascending. This is not checked.
pub fn sorted_squares(nums: &[i32]) -> Vec<i64> {
    let mut result = vec![0; nums.len()];
    if nums.is_empty() {
        return result;
    }

    let mut left = 0;
    let mut right = nums.len() - 1;

    for pos in (0..nums.len()).rev() {
        let left_square = square(nums[left]);
        let right_square = square(nums[right]);

        if left_square > right_square {
            result[pos] = left_square;
            left += 1;
        } else {
            result[pos] = right_square;
            // Only reaches zero on the final iteration, when left == right == 0.
            right = right.saturating_sub(1);
        }
    }

    result
}

#[inline]
fn square(n: i32) -> i64 {
    let n = i64::from(n);
    n * n
}
