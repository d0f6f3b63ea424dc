//! Range reduction from a 64-bit digest to a nine-digit chain code.

/// Largest code the reducer emits.
pub const TOKEN_CEILING: u32 = 999_999_999;

/// Subtracted from reduced values above [`TOKEN_CEILING`].
///
/// `2^30 - 1 - 73_741_825 = 999_999_998`, so every corrected value fits in
/// nine digits.
pub const FOLD_BIAS: u32 = 73_741_825;

/// Bits 2 through 32 of the folded word.
const FOLD_MASK: u64 = ((1 << 31) - 1) << 2;

/// Folds a digest into a code of at most nine decimal digits.
///
/// The high and low 32-bit halves are XORed, the two lowest bits are
/// dropped, and values past the nine-digit ceiling are pulled back by
/// [`FOLD_BIAS`]. Devices reproduce this bit-for-bit, so none of the
/// constants may change.
#[must_use]
pub fn fold_digest(digest: u64) -> u32 {
    let hi = digest >> 32;
    let lo = digest & 0xFFFF_FFFF;
    let folded = hi ^ lo;

    // Shifted value has at most 30 significant bits.
    let reduced = ((folded & FOLD_MASK) >> 2) as u32;
    if reduced > TOKEN_CEILING {
        reduced - FOLD_BIAS
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_digest_folds_to_zero() {
        assert_eq!(fold_digest(0), 0);
    }

    #[test]
    fn equal_halves_cancel() {
        assert_eq!(fold_digest(0xDEAD_BEEF_DEAD_BEEF), 0);
    }

    #[test]
    fn low_two_bits_are_dropped() {
        assert_eq!(fold_digest(0b11), 0);
        assert_eq!(fold_digest(0b100), 1);
    }

    #[test]
    fn saturated_digest_is_biased_under_ceiling() {
        // hi = 0, lo = all ones -> reduced = 2^30 - 1
        assert_eq!(fold_digest(0xFFFF_FFFF), 999_999_998);
    }

    #[test]
    fn ceiling_itself_is_not_biased() {
        let digest = u64::from(TOKEN_CEILING) << 2;
        assert_eq!(fold_digest(digest), TOKEN_CEILING);
        assert_eq!(fold_digest(digest + 4), TOKEN_CEILING + 1 - FOLD_BIAS);
    }
}
