use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Uniform sample in [0, 1), added to every heuristic leaf score.
pub fn tie_breaker<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Uniform::new(0.0f64, 1.0).sample(rng)
}

/// Seeded generator when a seed is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Per-game seed for match play: independent streams that do not depend on scheduling.
pub fn game_seed(match_seed: u64, game_index: usize) -> u64 {
    splitmix64(match_seed ^ splitmix64(game_index as u64))
}
