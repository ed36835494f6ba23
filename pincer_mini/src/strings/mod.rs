//! Two pointer exercises over strings and character sequences.
//!
//! # Example
//!
//! ```
//! use pincer_mini::strings::{compress, is_palindrome, reverse_string};
//!
//! assert!(is_palindrome("A man, a plan, a canal: Panama"));
//!
//! let mut s = ['h', 'e', 'l', 'l', 'o'];
//! reverse_string(&mut s);
//! assert_eq!(s, ['o', 'l', 'l', 'e', 'h']);
//!
//! let mut chars = ['a', 'a', 'a'];
//! let len = compress(&mut chars);
//! assert_eq!(chars[..len], ['a', '3']);
//! ```

mod compress;
mod palindrome;
mod reverse;

pub use compress::{compress, expand};
pub use palindrome::{is_palindrome, PalindromeExt};
pub use reverse::reverse_string;
