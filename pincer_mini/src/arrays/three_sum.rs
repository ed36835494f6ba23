use std::cmp::Ordering;

/// Finds every unique triplet in `nums` that sums to zero.
///
/// # Usage
///```
/// use pincer_mini::arrays::three_sum;
///
/// let mut nums = [-1, 0, 1, 2, -1, -4];
/// assert_eq!(three_sum(&mut nums), vec![[-1, -1, 2], [-1, 0, 1]]);
///```
/// # Side effects
///
/// `nums` is sorted in place. The caller's original order is lost:
///
///```
/// use pincer_mini::arrays::three_sum;
///
/// let mut nums = [3, -3, 0];
/// three_sum(&mut nums);
/// assert_eq!(nums, [-3, 0, 3]);
///```
/// Clone the input first if its order matters.
///
/// # Explanation
///
/// After sorting, every index is tried as the anchor of a triplet. For each anchor a `low`
/// cursor starts just after it and a `high` cursor at the end of the slice:
///
/// - if the sum is negative, `low` moves right to grow it;
/// - if the sum is positive, `high` moves left to shrink it;
/// - on zero the triplet is recorded and both cursors step past any run of equal values.
///
/// Anchors equal to the previous anchor are skipped. Together with the run skipping this means
/// no triplet is reported twice. Once the anchor itself is positive no later triplet can sum to
/// zero and the scan stops.
///
/// Triplets come out in ascending anchor order, each sorted ascending. Sums are computed in
/// `i64` so extreme values cannot overflow.
pub fn three_sum(nums: &mut [i32]) -> Vec<[i32; 3]> {
    let mut result = Vec::new();
    nums.sort_unstable();

    let n = nums.len();
    for i in 0..n.saturating_sub(2) {
        if nums[i] > 0 {
            break;
        }

        if i > 0 && nums[i] == nums[i - 1] {
            continue;
        }

        let mut low = i + 1;
        let mut high = n - 1;

        while low < high {
            let sum = i64::from(nums[i]) + i64::from(nums[low]) + i64::from(nums[high]);

            match sum.cmp(&0) {
                Ordering::Less => low += 1,
                Ordering::Greater => high -= 1,
                Ordering::Equal => {
                    result.push([nums[i], nums[low], nums[high]]);

                    low += 1;
                    while low < high && nums[low] == nums[low - 1] {
                        low += 1;
                    }

                    high -= 1;
                    while low < high && nums[high] == nums[high + 1] {
                        high -= 1;
                    }
                }
            }
        }
    }

    result
}
