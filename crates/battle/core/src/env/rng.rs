//! RNG oracle for deterministic random number generation.
//!
//! This module provides a trait-based RNG system so that crits, dodges,
//! recoil, gold, and loot rolls are reproducible: every roll is a pure
//! function of the battle seed and its position in the action sequence,
//! never of hidden generator state.

use crate::state::Side;

/// Roll contexts, used to keep independent rolls within one cycle from
/// sharing a seed.
///
/// A `(seed, cycle, side, context)` tuple uniquely identifies a roll.
/// Context values only need to be distinct per side within a cycle.
pub mod context {
    /// Critical-hit check for a basic attack.
    pub const CRIT: u32 = 0;
    /// Dodge check against an incoming monster attack.
    pub const DODGE: u32 = 1;
    /// Risky-blast rebound check.
    pub const RECOIL: u32 = 2;
    /// Victory gold roll.
    pub const GOLD: u32 = 3;
    /// Battle seed derivation for one campaign encounter.
    pub const ENCOUNTER: u32 = 8;
    /// Loot drop check for rule `i` rolls at `LOOT_CHANCE_BASE + 2 * i`.
    pub const LOOT_CHANCE_BASE: u32 = 16;
    /// Loot quantity roll for rule `i` rolls at `LOOT_QUANTITY_BASE + 2 * i`.
    pub const LOOT_QUANTITY_BASE: u32 = 17;
    /// Advancement offer draw `k` rolls at `OFFER_BASE + k`.
    pub const OFFER_BASE: u32 = 32;
}

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Common for percentage-based mechanics like crit and dodge chance:
    /// a roll of at most `percent` means the check passed.
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
/// - **Good quality**: Passes statistical tests (PractRand, TestU01)
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
/// - Implementation based on PCG-XSH-RR variant
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// Uses the LCG (Linear Congruential Generator) formula:
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    ///
    /// This is where the "permutation" happens - transforms the LCG state
    /// into high-quality random output.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        // Random rotation provides the final permutation
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic roll seed from battle state components.
///
/// Combines the entropy sources so every roll in a battle gets a unique
/// seed while staying fully replayable.
///
/// # Arguments
///
/// * `battle_seed` - Base seed fixed when the battle opens
/// * `cycle` - Battle cycle counter (increments each completed cycle)
/// * `side` - Combatant the roll belongs to
/// * `context` - Which roll within the cycle, see [`context`]
pub fn compute_seed(battle_seed: u64, cycle: u64, side: Side, context: u32) -> u64 {
    // Mix all inputs using simple hash combiners
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = battle_seed;

    // Mix in the cycle (action sequence)
    hash ^= cycle.wrapping_mul(0x9e3779b97f4a7c15);

    // Mix in the combatant side
    hash ^= (side.index() as u64).wrapping_mul(0x517cc1b727220a95);

    // Mix in the roll context
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
