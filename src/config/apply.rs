use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{AnalyzeArgs, LogEncoding, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to `analyze` arguments. Flags given on the
/// command line keep precedence over the file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut AnalyzeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "log_file")
        && let Some(log_file) = config.log_file.clone()
    {
        args.log_file = log_file;
    }

    if !is_cli(matches, "encoding")
        && let Some(encoding) = config.encoding.as_deref()
    {
        args.encoding = encoding.parse::<LogEncoding>()?;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "output")
        && let Some(output) = config.output.clone()
    {
        args.output = Some(output);
    }

    if !is_cli(matches, "charts_path")
        && let Some(charts_path) = config.charts_path.clone()
    {
        args.charts_path = charts_path;
    }

    if !is_cli(matches, "no_charts")
        && let Some(no_charts) = config.no_charts
    {
        args.no_charts = no_charts;
    }

    if !is_cli(matches, "top_n")
        && let Some(top_n) = config.top_n
    {
        args.top_n = ensure_positive_usize(top_n, "top_n")?;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}
