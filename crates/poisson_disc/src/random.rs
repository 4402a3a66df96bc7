//! Uniform random helpers over a [`Rng`] source.
//!
//! Every draw made by the sampler goes through these functions, so a seeded or
//! stubbed generator fully determines the output.
use rand::Rng;

const UNIT_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Generate a random float in the range [0, 1).
///
/// Uses the top 24 bits of a `u32` draw so the result is exactly representable
/// and never rounds up to 1.0.
#[inline]
pub fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 * UNIT_SCALE
}

/// Generate a random float in the range [0, upper).
#[inline]
pub fn random_below(rng: &mut dyn Rng, upper: f32) -> f32 {
    random_range(rng, 0.0, upper)
}

/// Generate a random float in the range [lo, hi).
///
/// The result is clamped below `hi` to guard against rounding in `lo + u * (hi - lo)`.
#[inline]
pub fn random_range(rng: &mut dyn Rng, lo: f32, hi: f32) -> f32 {
    let value = lo + rand01(rng) * (hi - lo);
    if value >= hi && hi > lo {
        next_down(hi)
    } else {
        value
    }
}

/// Pick a uniformly random index in `0..len`. `len` must be non-zero.
#[inline]
pub fn random_index(rng: &mut dyn Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rng.next_u32() as u64 * len as u64) >> 32) as usize
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a domain.
#[inline]
pub fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}
