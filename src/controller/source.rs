//! Random input arrays.

use rand::Rng;

use crate::config::Config;

/// Generates `size` values uniformly drawn from `cfg.value_range()`.
pub fn random_array(size: usize, cfg: &Config) -> Vec<i32> {
    let range = cfg.value_range();
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(range.clone())).collect()
}
