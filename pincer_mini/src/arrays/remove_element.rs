/// Removes every occurrence of `val` from `nums` in place and returns how many elements are left.
///
/// # Usage
///```
/// use pincer_mini::arrays::remove_element;
///
/// let mut nums = [5, 8, 8, 5, 3];
/// let k = remove_element(&mut nums, &5);
/// assert_eq!(k, 3);
/// assert_eq!(nums[..k], [8, 8, 3]);
///```
/// # Explanation
///
/// A read cursor scans every element once while a write cursor marks where the next kept
/// element goes. Kept elements are swapped down to the write cursor, so their relative order is
/// preserved and the removed values collect behind the returned length. Nothing past `nums[..k]`
/// should be relied on.
pub fn remove_element<T: PartialEq>(nums: &mut [T], val: &T) -> usize {
    let mut write = 0;

    for read in 0..nums.len() {
        if nums[read] != *val {
            nums.swap(write, read);
            write += 1;
        }
    }

    write
}
