use rand::SeedableRng as _;
use rand_distr::{Distribution as _, Normal, NormalError};
use rand_pcg::Pcg64;

/// Generates example datasets for learners to experiment with.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    rng: Pcg64,
}

impl SampleGenerator {
    /// Creates a generator.
    ///
    /// With `seed`, the generated samples are reproducible; otherwise the
    /// seed is taken from the OS's random data source.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_os_rng(),
        };
        Self { rng }
    }

    /// Draws `count` values from a normal distribution, rounded to one decimal.
    pub fn normal(
        &mut self,
        count: usize,
        mean: f64,
        std_dev: f64,
    ) -> Result<Vec<f64>, NormalError> {
        let normal = Normal::new(mean, std_dev)?;
        Ok((0..count)
            .map(|_| (normal.sample(&mut self.rng) * 10.0).round() / 10.0)
            .collect())
    }
}

/// Formats values as the comma-separated text accepted by the parser.
pub fn to_input_text(values: &[f64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use statlab_stats::parse::parse_sample;

    use super::*;

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = SampleGenerator::new(Some(7)).normal(20, 50.0, 10.0).unwrap();
        let b = SampleGenerator::new(Some(7)).normal(20, 50.0, 10.0).unwrap();
        assert_eq!(a.len(), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_std_dev() {
        let mut generator = SampleGenerator::new(Some(1));
        assert!(generator.normal(5, 0.0, -1.0).is_err());
    }

    #[test]
    fn test_text_round_trips_through_parser() {
        let values = SampleGenerator::new(Some(3)).normal(8, 0.0, 3.0).unwrap();
        let text = to_input_text(&values);
        assert_eq!(parse_sample(&text).unwrap(), values);
    }

    #[test]
    fn test_to_input_text() {
        assert_eq!(to_input_text(&[1.0, -2.5, 30.0]), "1, -2.5, 30");
    }
}
