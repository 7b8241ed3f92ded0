//! Generate sample deal records

use rand::{SeedableRng, rngs::StdRng};

use crate::sample::generate;

#[derive(Debug, Clone)]
pub struct SampleOptions {
    pub count: usize,
    /// Fixed seed for repeatable output
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            count: 100,
            seed: None,
        }
    }
}

/// Generate records as a JSON array
pub fn execute_sample(options: &SampleOptions) -> serde_json::Value {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let deals = generate(options.count, &mut rng);
    serde_json::Value::Array(deals.iter().map(|deal| deal.to_json()).collect())
}
