// File: crates/meridian-core/src/settings.rs
// Summary: Process-wide debug flag and seeded random source (jitter, identifiers).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::LazyLock;

static DEBUG: AtomicBool = AtomicBool::new(true);

static SEED: LazyLock<AtomicU64> = LazyLock::new(|| AtomicU64::new(rand::rng().random_range(0..100_000)));

pub fn debug() -> bool { DEBUG.load(Ordering::Relaxed) }

pub fn set_debug(on: bool) { DEBUG.store(on, Ordering::Relaxed); }

/// Current global seed (the seed the next `random()` draw will use).
pub fn seed() -> u64 { SEED.load(Ordering::Relaxed) }

pub fn set_seed(value: u64) { SEED.store(value, Ordering::Relaxed); }

/// Next value in [0, 1) from the global sequence; advances the seed by one.
pub fn random() -> f64 {
    let s = SEED.fetch_add(1, Ordering::Relaxed);
    pseudorandom(s)
}

/// Pure function of `seed`, in [0, 1).
pub fn pseudorandom(seed: u64) -> f64 {
    StdRng::seed_from_u64(seed).random::<f64>()
}

/// `u`-prefixed identifier shaped like a UUID (8-4-4-4-12 hex), drawn from the global sequence.
pub fn uuid() -> String {
    fn quad() -> String { format!("{:04x}", ((random() * 65536.0) as u32) & 0xffff) }
    format!(
        "u{}{}-{}-{}-{}-{}{}{}",
        quad(), quad(), quad(), quad(), quad(), quad(), quad(), quad()
    )
}
