pub mod error;
pub mod input;
pub mod lcs;
pub mod palindrome;

pub use error::{InputError, Result};
pub use input::{read_problem, MAX_LEN};
pub use lcs::lcs_length;
pub use palindrome::min_edits_to_palindrome;
