//! Seeded train/test partitioning

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::dataset::TrainingData;

/// Shuffle row indices with a fixed seed and carve off `ceil(n * test_ratio)`
/// rows for the test side. Returns `(train, test)`.
pub fn train_test_split(
    data: &TrainingData,
    test_ratio: f64,
    seed: u64,
) -> (TrainingData, TrainingData) {
    let n = data.len();
    let n_test = ((n as f64) * test_ratio.clamp(0.0, 1.0)).ceil() as usize;
    let n_test = n_test.min(n);

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);
    (data.select(train_idx), data.select(test_idx))
}
