//! Fixtures shared by tests and the demo drivers.

use rand::prelude::*;
use rand::SeedableRng;

/// Values fixture for testing, uniformly sampled between `min` and `max`
/// (defaulting to `[0, 1)`), seeded for reproducibility.
pub fn values_fixture(n: usize, min: Option<f64>, max: Option<f64>) -> Vec<f64> {
    let mut range = StdRng::seed_from_u64(0);

    let between;
    if let (Some(min), Some(max)) = (min, max) {
        between = rand::distributions::Uniform::from(min..max);
    } else {
        between = rand::distributions::Uniform::from(0.0_f64..1.0_f64);
    }

    (0..n).map(|_| between.sample(&mut range)).collect()
}
