use anyhow::Context as _;

use crate::{
    sample::{self, SampleGenerator},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of values to draw
    #[arg(long, default_value_t = 20)]
    count: usize,
    /// Mean of the normal distribution
    #[arg(long, default_value_t = 50.0, allow_hyphen_values = true)]
    mean: f64,
    /// Standard deviation of the normal distribution
    #[arg(long, default_value_t = 10.0)]
    std_dev: f64,
    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,
    /// Print the values as a JSON array
    #[arg(long)]
    json: bool,
}

pub fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        count,
        mean,
        std_dev,
        seed,
        json,
    } = *arg;

    let values = SampleGenerator::new(seed)
        .normal(count, mean, std_dev)
        .with_context(|| {
            format!("Failed to generate a sample with mean {mean} and standard deviation {std_dev}")
        })?;
    log::info!("generated {} values", values.len());

    if json {
        util::print_json(&values)?;
    } else {
        println!("{}", sample::to_input_text(&values));
    }
    Ok(())
}
