// src/batch/build.rs
// =============================================================================
// Builds the candidate URLs: every base URL joined with every URI suffix.
//
// The join is plain string concatenation: "http://a.test" + "x" gives
// "http://a.testx". Slashes are never added or removed.
//
// Order is base-major: all suffixes for bases[0], then all suffixes for
// bases[1], and so on. Item i*n + j is always bases[i] + suffixes[j], so
// every output line can be traced back to its two input lines.
// =============================================================================

/// Returns `bases.len() * suffixes.len()` candidate URLs in base-major order.
///
/// Either side being empty yields an empty batch. Duplicates are kept.
pub fn build<B, S>(bases: &[B], suffixes: &[S]) -> Vec<String>
where
    B: AsRef<str>,
    S: AsRef<str>,
{
    let mut candidates = Vec::with_capacity(bases.len() * suffixes.len());

    for base in bases {
        let base = base.as_ref();
        for suffix in suffixes {
            let suffix = suffix.as_ref();
            let mut candidate = String::with_capacity(base.len() + suffix.len());
            candidate.push_str(base);
            candidate.push_str(suffix);
            candidates.push(candidate);
        }
    }

    tracing::debug!(
        bases = bases.len(),
        suffixes = suffixes.len(),
        candidates = candidates.len(),
        "built candidate batch"
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_base_major_order() {
        let bases = ["http://a.test", "http://b.test"];
        let suffixes = ["/x", "/y"];

        let candidates = build(&bases, &suffixes);

        assert_eq!(
            candidates,
            vec![
                "http://a.test/x",
                "http://a.test/y",
                "http://b.test/x",
                "http://b.test/y",
            ]
        );
    }

    #[test]
    fn test_build_length_and_positions() {
        let bases: Vec<String> = (0..4).map(|i| format!("http://h{}.test", i)).collect();
        let suffixes: Vec<String> = (0..3).map(|j| format!("/p{}", j)).collect();

        let candidates = build(&bases, &suffixes);
        let n = suffixes.len();

        assert_eq!(candidates.len(), bases.len() * n);
        for (i, base) in bases.iter().enumerate() {
            for (j, suffix) in suffixes.iter().enumerate() {
                assert_eq!(candidates[i * n + j], format!("{}{}", base, suffix));
            }
        }
    }

    #[test]
    fn test_build_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(build(&none, &["/x"]).is_empty());
        assert!(build(&["http://a.test"], &none).is_empty());
        assert!(build(&none, &none).is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let bases = ["http://a.test/", "http://b.test/"];
        let suffixes = ["index.html", "robots.txt", "index.html"];

        assert_eq!(build(&bases, &suffixes), build(&bases, &suffixes));
    }

    #[test]
    fn test_build_concatenates_verbatim() {
        // No slash is inserted and duplicates are kept
        let candidates = build(&["http://a.test", "http://a.test"], &["x"]);
        assert_eq!(candidates, vec!["http://a.testx", "http://a.testx"]);
    }
}
