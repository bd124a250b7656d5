use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::dataset::{Dataset, StatisticsTable};
use crate::error::Result;

pub const CSV_HEADER: [&str; 2] = ["Category", "Value"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unsupported export format `{}`", other)),
        }
    }
}

/// A ready-to-save export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime: &'static str,
    pub body: String,
}

/// Host primitive that hands a payload to the user as a file.
pub trait FileSaver {
    fn save(&self, payload: &ExportPayload) -> Result<()>;
}

/// `<prefix>-<YYYY-MM-DD>.<ext>`
pub fn export_filename(prefix: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!("{}-{}.{}", prefix, date.format("%Y-%m-%d"), format.extension())
}

pub fn to_json(table: &StatisticsTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

pub fn to_csv(table: &StatisticsTable) -> Result<String> {
    datasets_to_csv(table.iter().map(|(id, dataset)| (id.csv_prefix(), dataset)))
}

/// Writes `Category,Value` then one `<prefix> <label>,<value>` row per entry,
/// datasets in the given order.
pub fn datasets_to_csv<'a>(datasets: impl IntoIterator<Item = (&'a str, &'a Dataset)>) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for (prefix, dataset) in datasets {
        for (label, value) in dataset.iter() {
            writer.write_record([format!("{} {}", prefix, label), value.to_string()])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn build_export(
    table: &StatisticsTable,
    format: ExportFormat,
    prefix: &str,
    date: NaiveDate,
) -> Result<ExportPayload> {
    let body = match format {
        ExportFormat::Json => to_json(table)?,
        ExportFormat::Csv => to_csv(table)?,
    };
    Ok(ExportPayload {
        filename: export_filename(prefix, date, format),
        mime: format.mime(),
        body,
    })
}
