// Fallback digest scorer: used only when feature extraction is unavailable.
//
// Compares two content digests character by character. This detects byte-level
// coincidence and nothing else: two visually identical images with different
// encodings will score near the chance level for hex (about 6%). Reports built
// from this score are tagged as degraded so they're never read as equivalent
// to a vector comparison.

use tracing::debug;

use super::to_percentage;

/// Positional agreement between two digests as a percentage in [0, 100].
///
/// Identical digests score 100. Otherwise the score is the share of matching
/// characters over the shorter digest's length. An empty digest on either
/// side leaves nothing to compare and scores 0.
pub fn digest_score(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        debug!(
            left_len = a.len(),
            right_len = b.len(),
            "Empty content digest, returning 0"
        );
        return 0;
    }

    if a == b {
        return 100;
    }

    let compared = a.chars().count().min(b.chars().count());
    let matches = a
        .chars()
        .zip(b.chars())
        .filter(|(x, y)| x == y)
        .count();

    to_percentage(matches as f64 / compared as f64 * 100.0)
}
