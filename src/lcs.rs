use log::debug;

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// Uses the standard dynamic program with a rolling pair of rows, so memory
/// is O(min-side) rather than O(n·m). Only lengths are computed; no
/// subsequence is reconstructed.
///
/// # Examples
///
/// ```
/// use palin::lcs::lcs_length;
///
/// assert_eq!(lcs_length(b"ABCDGH", b"AEDFHR"), 3); // "ADH" is one possible LCS
/// assert_eq!(lcs_length(b"abca", b"acba"), 3);
/// assert_eq!(lcs_length(b"", b"xyz"), 0);
/// ```
pub fn lcs_length(a: &[u8], b: &[u8]) -> usize {
    let m = a.len();
    let n = b.len();
    if m == 0 || n == 0 {
        return 0;
    }

    // Two named rows of the conceptual (m+1) x (n+1) table. Index 0 of each
    // row is the empty-prefix base case and is never written below, so it
    // stays 0 across the copy at the end of every outer iteration.
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
            } else {
                curr[j] = curr[j - 1].max(prev[j]);
            }
        }
        prev.copy_from_slice(&curr);
    }

    debug!("lcs_length({m}, {n}) = {}", prev[n]);
    prev[n]
}
