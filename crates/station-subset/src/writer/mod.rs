//! Output writers for station subsets.
//!
//! A writer receives one header, then one call per (station, observation)
//! row, then `finish`. The pipeline tracks whether the header has gone out
//! with a [`HeaderState`].

mod csv;
mod xml;

pub use self::csv::CsvWriter;
pub use self::xml::XmlWriter;

use std::fmt;
use std::str::FromStr;

use ncss_common::{SubsetError, SubsetResult};
use serde::{Deserialize, Serialize};

use crate::station::{Observation, Station};

/// A variable column in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub units: String,
}

impl Column {
    pub fn new(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
        }
    }
}

/// One output row: a station and one of its observations.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub station: &'a Station,
    pub observation: &'a Observation,
    /// The columns announced in the header.
    pub columns: &'a [Column],
}

/// Whether the header has been written for the current response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    NotStarted,
    HeaderWritten,
}

/// Sink for station subset output.
pub trait StationWriter {
    /// Emit the header. Called once, before the first row.
    fn write_header(&mut self, columns: &[Column]) -> SubsetResult<()>;

    /// Emit one row.
    fn write_row(&mut self, row: &Row<'_>) -> SubsetResult<()>;

    /// Complete the document and flush.
    fn finish(&mut self) -> SubsetResult<()>;
}

impl<T: StationWriter + ?Sized> StationWriter for Box<T> {
    fn write_header(&mut self, columns: &[Column]) -> SubsetResult<()> {
        (**self).write_header(columns)
    }

    fn write_row(&mut self, row: &Row<'_>) -> SubsetResult<()> {
        (**self).write_row(row)
    }

    fn finish(&mut self) -> SubsetResult<()> {
        (**self).finish()
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Xml,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Xml => "application/xml",
        }
    }

    /// Build a writer for this format over `out`.
    pub fn writer<'w, W: std::io::Write + 'w>(&self, out: W, coord_decimals: usize) -> Box<dyn StationWriter + 'w> {
        match self {
            OutputFormat::Csv => Box::new(CsvWriter::new(out).with_decimals(coord_decimals)),
            OutputFormat::Xml => Box::new(XmlWriter::new(out).with_decimals(coord_decimals)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Xml => f.write_str("xml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SubsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" | "text/csv" => Ok(OutputFormat::Csv),
            "xml" | "application/xml" | "text/xml" => Ok(OutputFormat::Xml),
            other => Err(SubsetError::malformed("accept", format!("unsupported format '{}'", other))),
        }
    }
}

/// Format a coordinate with a fixed number of fraction digits.
pub(crate) fn format_coord(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
