use statlab_stats::z_score::ZScoreSummary;

use crate::{
    lesson::{
        LessonError, Report,
        report::{self, describe_position},
    },
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SampleArg {
    /// Comma-separated numbers, e.g. "2, 4, 4, 5"
    #[arg(allow_hyphen_values = true)]
    pub(crate) data: String,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HistogramArg {
    /// Comma-separated numbers, e.g. "2, 4, 4, 5"
    #[arg(allow_hyphen_values = true)]
    pub(crate) data: String,
    /// Number of equal-width bins
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub(crate) bins: String,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ZScoreArg {
    /// The value to standardize
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) x: String,
    /// Mean of the distribution
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) mean: String,
    /// Standard deviation of the distribution (> 0)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) std_dev: String,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub fn run_histogram(arg: &HistogramArg) -> anyhow::Result<()> {
    let HistogramArg { data, bins, json } = arg;
    print_report(&report::histogram(data, bins), *json)
}

pub fn run_center(arg: &SampleArg) -> anyhow::Result<()> {
    print_report(&report::center(&arg.data), arg.json)
}

pub fn run_spread(arg: &SampleArg) -> anyhow::Result<()> {
    print_report(&report::spread(&arg.data), arg.json)
}

pub fn run_z_score(arg: &ZScoreArg) -> anyhow::Result<()> {
    let ZScoreArg {
        x,
        mean,
        std_dev,
        json,
    } = arg;
    print_report(&report::z_score(x, mean, std_dev), *json)
}

fn print_report(outcome: &Result<Report, LessonError>, json: bool) -> anyhow::Result<()> {
    let report = match outcome {
        Ok(report) => report,
        Err(err) => {
            log::debug!("rejected input: {err:?}");
            anyhow::bail!("{err}");
        }
    };
    if json {
        return print_report_json(report);
    }

    util::print_key_values(&report::key_values(report))?;
    match report {
        Report::Histogram(histogram) => {
            println!();
            let rows = histogram
                .labelled_counts()
                .map(|(label, count)| (label, count.to_string()))
                .collect::<Vec<_>>();
            util::print_key_values(&rows)?;
        }
        Report::ZScore { summary, .. } => {
            println!();
            println!("{}", describe_position(summary.position));
        }
        Report::Center(_) | Report::Spread(_) => {}
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct ZScoreOutput {
    x: f64,
    mean: f64,
    std_dev: f64,
    #[serde(flatten)]
    summary: ZScoreSummary,
}

fn print_report_json(report: &Report) -> anyhow::Result<()> {
    match report {
        Report::Histogram(histogram) => util::print_json(histogram),
        Report::Center(summary) => util::print_json(summary),
        Report::Spread(summary) => util::print_json(summary),
        &Report::ZScore {
            x,
            mean,
            std_dev,
            summary,
        } => util::print_json(&ZScoreOutput {
            x,
            mean,
            std_dev,
            summary,
        }),
    }
}
