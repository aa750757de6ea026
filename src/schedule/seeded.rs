//! Reproducible pseudo-randomness for schedule decoration
//!
//! A stateless sine hash of the seed. The same seed always lands on the
//! same value.

/// Scale applied to `sin(seed)` before taking the fractional part
const SINE_SCALE: f64 = 10_000.0;

/// Map an integer seed to a reproducible float in `[0, 1)`.
///
/// Only repeatability is guaranteed, not uniformity.
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * SINE_SCALE;
    let frac = x - x.floor();
    // x - floor(x) rounds up to 1.0 for tiny negative x
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Scale a seeded value into `base + [0, spread)`, truncated.
pub fn seeded_range(seed: i64, base: u32, spread: u32) -> u32 {
    base + (seeded_random(seed) * spread as f64) as u32
}
