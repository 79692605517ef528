//! RNG seed derivation for deterministic dealing.
//!
//! A match carries one base seed; every hand derives its own dealing seed
//! from it, so replaying a saved match re-deals identical hands.

/// Derive the dealing seed for a 1-based hand number.
pub fn derive_dealing_seed(match_seed: u64, round_no: u8) -> u64 {
    // SplitMix64 finaliser over (seed, round) keeps neighbouring rounds far apart.
    let mut z = match_seed
        .wrapping_add((round_no as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(2);
    z ^= z >> 30;
    z = z.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
