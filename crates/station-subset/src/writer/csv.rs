use std::io::Write;

use ncss_common::{format_iso8601, SubsetResult};

use super::{format_coord, Column, Row, StationWriter};

/// Comma-separated output, one line per observation.
pub struct CsvWriter<W: Write> {
    out: W,
    decimals: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, decimals: 3 }
    }

    /// Fraction digits for latitude and longitude.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StationWriter for CsvWriter<W> {
    fn write_header(&mut self, columns: &[Column]) -> SubsetResult<()> {
        write!(
            self.out,
            "time,station,latitude[unit=\"degrees_north\"],longitude[unit=\"degrees_east\"]"
        )?;
        for column in columns {
            write!(self.out, ",{}", escape(&column.name))?;
            if !column.units.is_empty() {
                write!(self.out, "[unit=\"{}\"]", column.units)?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_row(&mut self, row: &Row<'_>) -> SubsetResult<()> {
        write!(
            self.out,
            "{},{},{},{}",
            format_iso8601(&row.observation.time),
            escape(&row.station.name),
            format_coord(row.station.lat, self.decimals),
            format_coord(row.station.lon, self.decimals)
        )?;
        for column in row.columns {
            match row.observation.get(&column.name) {
                Some(value) => write!(self.out, ",{}", escape(&value.to_string()))?,
                None => write!(self.out, ",")?,
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> SubsetResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Quote a field holding a comma, quote or newline.
fn escape(field: &str) -> std::borrow::Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\"")).into()
    } else {
        field.into()
    }
}
