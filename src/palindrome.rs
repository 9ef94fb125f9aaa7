use crate::lcs::lcs_length;

/// Returns the minimum number of single-character edits required to turn
/// `s` into a palindrome.
///
/// Uses the classic reduction: the characters worth keeping form a longest
/// common subsequence of `s` and its reverse, so the answer is
/// `n - lcs(s, reverse(s))`.
///
/// # Examples
///
/// ```
/// use palin::palindrome::min_edits_to_palindrome;
///
/// assert_eq!(min_edits_to_palindrome(b"ababa"), 0); // already a palindrome
/// assert_eq!(min_edits_to_palindrome(b"abca"), 1);
/// assert_eq!(min_edits_to_palindrome(b"abc"), 2);
/// assert_eq!(min_edits_to_palindrome(b""), 0);
/// ```
pub fn min_edits_to_palindrome(s: &[u8]) -> usize {
    let rs: Vec<u8> = s.iter().rev().copied().collect();
    s.len() - lcs_length(s, &rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::lcs_length;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
        const ALPHABET: &[u8] = b"abc";
        (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
    }

    #[test]
    fn test_known_answers() {
        assert_eq!(min_edits_to_palindrome(b"ababa"), 0);
        assert_eq!(min_edits_to_palindrome(b"abca"), 1);
        assert_eq!(min_edits_to_palindrome(b"abc"), 2);
        assert_eq!(min_edits_to_palindrome(b"z"), 0);
        assert_eq!(min_edits_to_palindrome(b""), 0);
    }

    #[test]
    fn test_palindromes_need_no_edits() {
        for s in [&b"a"[..], b"aa", b"aba", b"abba", b"racecar", b"xyzzyx"] {
            assert_eq!(min_edits_to_palindrome(s), 0);
        }
    }

    #[test]
    fn test_answer_is_bounded() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let n = rng.gen_range(1..128);
            let s = random_bytes(&mut rng, n);
            let answer = min_edits_to_palindrome(&s);
            // At least one character always matches its counterpart when the
            // string is compared with its reverse, so the answer stays below n.
            assert!(answer < n, "answer {answer} out of range for n={n}");
        }
    }

    #[test]
    fn test_reverse_argument_order_is_irrelevant() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let len = rng.gen_range(0..64);
            let s = random_bytes(&mut rng, len);
            let rs: Vec<u8> = s.iter().rev().copied().collect();
            assert_eq!(lcs_length(&s, &rs), lcs_length(&rs, &s));
            assert_eq!(min_edits_to_palindrome(&s), min_edits_to_palindrome(&rs));
        }
    }
}
