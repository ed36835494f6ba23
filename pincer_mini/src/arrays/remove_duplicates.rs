/// Removes duplicates from a sorted slice in place and returns the number of unique elements.
///
/// # Usage
///```
/// use pincer_mini::arrays::remove_duplicates;
///
/// let mut nums = [1, 1, 2, 2, 3];
/// let k = remove_duplicates(&mut nums);
/// assert_eq!(k, 3);
/// assert_eq!(nums[..k], [1, 2, 3]);
///```
/// # Explanation
///
/// `last` points at the most recent unique element, starting at index 0. A second cursor scans
/// from index 1. Whenever it finds an element different from `nums[last]`, `last` moves forward
/// and that element is swapped into place.
///
/// The input is expected to be sorted so that equal values are adjacent. This is not checked:
/// unsorted input gives a prefix where only neighbouring duplicates have been collapsed.
pub fn remove_duplicates<T: PartialEq>(nums: &mut [T]) -> usize {
    if nums.len() <= 1 {
        return nums.len();
    }

    let mut last = 0;

    for read in 1..nums.len() {
        if nums[read] != nums[last] {
            last += 1;
            nums.swap(last, read);
        }
    }

    last + 1
}
