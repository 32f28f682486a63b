//! Seed derivation: polynomial string hash with signed 32-bit wraparound.

use crate::constants::SEED_HASH_BASE;

/// Build the seed key for a student/question pair: roll number concatenated
/// with the zero-based question index, no separator.
pub fn seed_key(roll_number: &str, question_index: u32) -> String {
    format!("{roll_number}{question_index}")
}

/// Hash a seed key to a 32-bit non-negative seed.
///
/// Iterates UTF-16 code units computing `hash = hash * 31 + code`, wrapping
/// exactly as signed 32-bit overflow would at every step, then takes the
/// absolute value. Same key always yields the same seed; collisions across
/// keys are acceptable (this is not cryptographic).
pub fn derive_seed(key: &str) -> u32 {
    let mut hash: i32 = 0;
    for code in key.encode_utf16() {
        hash = hash
            .wrapping_mul(SEED_HASH_BASE)
            .wrapping_add(i32::from(code));
    }
    hash.unsigned_abs()
}
