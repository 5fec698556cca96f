use std::fmt::Write as _;

use crate::error::{AppError, AppResult, OutputError};

pub(super) fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::output(OutputError::WriteLine { source: err }))
}

pub(super) fn format_x100(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}

pub(super) fn format_signed_x100(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, format_x100(value.unsigned_abs()))
}
