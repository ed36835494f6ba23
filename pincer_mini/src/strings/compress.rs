use super::reverse_string;

/// Run-length compresses `chars` in place and returns the length of the compressed prefix.
///
/// # Usage
///```
/// use pincer_mini::strings::compress;
///
/// let mut chars = ['a', 'a', 'b', 'b', 'c', 'c', 'c'];
/// let len = compress(&mut chars);
/// assert_eq!(len, 6);
/// assert_eq!(chars[..len], ['a', '2', 'b', '2', 'c', '3']);
///```
/// # Explanation
///
/// A read cursor walks over each run of identical characters and counts it. A write cursor then
/// emits the character once, followed by the decimal digits of the run length when the run is
/// longer than one. A run of `n >= 2` characters takes `1 + digits(n) <= n` slots, so the write
/// cursor can never overtake the read cursor and the output always fits in the input.
///
/// The digits are written least significant first and then put in order with
/// [`reverse_string`], so no intermediate string is built for the count.
///
/// Everything after the returned length is left in an unspecified state.
pub fn compress(chars: &mut [char]) -> usize {
    if chars.len() <= 1 {
        return chars.len();
    }

    let mut read = 0;
    let mut write = 0;

    while read < chars.len() {
        let current = chars[read];

        let mut count = 0usize;
        while read < chars.len() && chars[read] == current {
            read += 1;
            count += 1;
        }

        chars[write] = current;
        write += 1;

        if count > 1 {
            let digits_start = write;
            while count > 0 {
                chars[write] = char::from(b'0' + (count % 10) as u8);
                write += 1;
                count /= 10;
            }
            reverse_string(&mut chars[digits_start..write]);
        }
    }

    write
}

/// Expands the output of [`compress`] back into the original characters.
///
/// A character followed by ASCII digits is repeated that many times, and a character with no
/// digits after it appears once. This only round trips when the original input held no ASCII
/// digits, since a digit in the input cannot be told apart from a run length.
///
/// # Usage
///```
/// use pincer_mini::strings::expand;
///
/// assert_eq!(expand(&['a', '2', 'b', 'c', '1', '0']).len(), 13);
/// assert_eq!(expand(&['x', '3']), vec!['x', 'x', 'x']);
///```
pub fn expand(chars: &[char]) -> Vec<char> {
    let mut expanded = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        i += 1;

        let mut count = 0usize;
        let mut has_count = false;
        while let Some(digit) = chars.get(i).and_then(|c| c.to_digit(10)) {
            count = count * 10 + digit as usize;
            has_count = true;
            i += 1;
        }

        let count = if has_count { count } else { 1 };
        expanded.extend(std::iter::repeat(current).take(count));
    }

    expanded
}

#[cfg(test)]
mod tests {

    use super::*;

    fn compressed(input: &str) -> (usize, String) {
        let mut chars = input.chars().collect::<Vec<_>>();
        let len = compress(&mut chars);
        (len, chars[..len].iter().collect())
    }

    #[test]
    fn consecutive_duplicates() {
        assert_eq!(compressed("aabbccc"), (6, String::from("a2b2c3")));
    }

    #[test]
    fn nothing_to_compress() {
        assert_eq!(compressed("abc"), (3, String::from("abc")));
    }

    #[test]
    fn single_run() {
        assert_eq!(compressed("aaaaaa"), (2, String::from("a6")));
        assert_eq!(compressed("aa"), (2, String::from("a2")));
    }

    #[test]
    fn multi_digit_count() {
        assert_eq!(compressed("abbbbbbbbbbbb"), (4, String::from("ab12")));

        let hundred = "z".repeat(100);
        assert_eq!(compressed(&hundred), (4, String::from("z100")));

        let ten = "x".repeat(10);
        assert_eq!(compressed(&ten), (3, String::from("x10")));
    }

    #[test]
    fn repeated_character_in_separate_runs() {
        assert_eq!(compressed("aabaa"), (5, String::from("a2ba2")));
    }

    #[test]
    fn simple_edge_cases() {
        assert_eq!(compressed(""), (0, String::new()));
        assert_eq!(compressed("a"), (1, String::from("a")));
        assert_eq!(compressed("ab"), (2, String::from("ab")));
    }

    #[test]
    fn expand_reverses_compress() {
        for input in ["aabbccc", "abc", "abbbbbbbbbbbb", "a", "", "qqqqqqqqqqqqqqqqqqqqqqqqr"] {
            let original = input.chars().collect::<Vec<_>>();
            let mut chars = original.clone();
            let len = compress(&mut chars);
            assert!(len <= original.len());
            assert_eq!(expand(&chars[..len]), original);
        }
    }
}
