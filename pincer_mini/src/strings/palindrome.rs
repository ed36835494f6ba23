/// Returns `true` if `s` reads the same forwards and backwards, considering only alphanumeric
/// characters and ignoring case.
///
/// # Usage
///```
/// use pincer_mini::strings::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("race a car"));
///```
/// # Explanation
///
/// Two cursors start at both ends of the string and walk towards each other. Each cursor skips
/// over anything that is not alphanumeric, and the two characters they land on are compared
/// case-insensitively. The first mismatch settles the answer. When the cursors meet or cross
/// every pair has matched and the string is a palindrome.
///
/// `str::chars` is a [`DoubleEndedIterator`], so `next` is the left cursor and `next_back` is
/// the right one. The iterator guarantees they never hand out the same character twice, which
/// is exactly the "until the pointers cross" condition.
///
/// An empty string, or a string with no alphanumeric characters at all, is a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();

    loop {
        let Some(left) = chars.by_ref().find(|c| c.is_alphanumeric()) else {
            return true;
        };
        let Some(right) = chars.by_ref().rev().find(|c| c.is_alphanumeric()) else {
            // `left` was the middle character.
            return true;
        };

        if !left.to_lowercase().eq(right.to_lowercase()) {
            return false;
        }
    }
}

/// Extends string types with an [`is_palindrome()`](PalindromeExt::is_palindrome()) method.
///
/// # Example
///
/// ```
/// use pincer_mini::strings::PalindromeExt;
///
/// assert!("No 'x' in Nixon".is_palindrome());
/// assert!(String::from("12321").is_palindrome());
/// ```
pub trait PalindromeExt {
    /// See [`is_palindrome`].
    fn is_palindrome(&self) -> bool;
}

impl PalindromeExt for str {
    fn is_palindrome(&self) -> bool {
        is_palindrome(self)
    }
}

impl PalindromeExt for String {
    fn is_palindrome(&self) -> bool {
        is_palindrome(self)
    }
}
