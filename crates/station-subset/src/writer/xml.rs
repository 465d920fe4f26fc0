use std::io::Write;

use ncss_common::{format_iso8601, SubsetError, SubsetResult};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{format_coord, Column, Row, StationWriter};

const ROOT: &str = "stationFeatureCollection";

/// XML output: one `<stationFeature>` element per observation.
pub struct XmlWriter<W: Write> {
    writer: quick_xml::Writer<W>,
    decimals: usize,
    open: bool,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: quick_xml::Writer::new_with_indent(out, b' ', 2),
            decimals: 3,
            open: false,
        }
    }

    /// Fraction digits for latitude and longitude.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn event(&mut self, event: Event<'_>) -> SubsetResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SubsetError::Write(e.to_string()))
    }
}

impl<W: Write> StationWriter for XmlWriter<W> {
    fn write_header(&mut self, _columns: &[Column]) -> SubsetResult<()> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.event(Event::Start(BytesStart::new(ROOT)))?;
        self.open = true;
        Ok(())
    }

    fn write_row(&mut self, row: &Row<'_>) -> SubsetResult<()> {
        let date = format_iso8601(&row.observation.time);
        let mut feature = BytesStart::new("stationFeature");
        feature.push_attribute(("date", date.as_str()));
        self.event(Event::Start(feature))?;

        let latitude = format_coord(row.station.lat, self.decimals);
        let longitude = format_coord(row.station.lon, self.decimals);
        let mut station = BytesStart::new("station");
        station.push_attribute(("name", row.station.name.as_str()));
        station.push_attribute(("latitude", latitude.as_str()));
        station.push_attribute(("longitude", longitude.as_str()));
        if let Some(altitude) = row.station.altitude {
            let altitude = altitude.to_string();
            station.push_attribute(("altitude", altitude.as_str()));
        }
        self.event(Event::Empty(station))?;

        for column in row.columns {
            let Some(value) = row.observation.get(&column.name) else {
                continue;
            };
            let mut data = BytesStart::new("data");
            data.push_attribute(("name", column.name.as_str()));
            data.push_attribute(("units", column.units.as_str()));
            self.event(Event::Start(data))?;
            let text = value.to_string();
            self.event(Event::Text(BytesText::new(&text)))?;
            self.event(Event::End(BytesEnd::new("data")))?;
        }

        self.event(Event::End(BytesEnd::new("stationFeature")))
    }

    fn finish(&mut self) -> SubsetResult<()> {
        if self.open {
            self.event(Event::End(BytesEnd::new(ROOT)))?;
            self.open = false;
        }
        self.writer.get_mut().write_all(b"\n")?;
        self.writer.get_mut().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::{Observation, Station};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_document_structure() {
        let station = Station::new("KDEN", 39.85, -104.66).with_altitude(1655.0);
        let observation = Observation::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
            .with_value("air_temperature", -3.5)
            .with_value("remarks", "A<B & C");
        let columns = vec![
            Column::new("air_temperature", "Celsius"),
            Column::new("wind_speed", "m/s"),
            Column::new("remarks", ""),
        ];

        let mut writer = XmlWriter::new(Vec::new());
        writer.write_header(&columns).unwrap();
        writer
            .write_row(&Row {
                station: &station,
                observation: &observation,
                columns: &columns,
            })
            .unwrap();
        writer.finish().unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<stationFeature date=\"2024-01-15T12:00:00Z\">"));
        assert!(xml.contains(
            "<station name=\"KDEN\" latitude=\"39.850\" longitude=\"-104.660\" altitude=\"1655\"/>"
        ));
        assert!(xml.contains("<data name=\"air_temperature\" units=\"Celsius\">-3.5</data>"));
        assert!(xml.contains("A&lt;B &amp; C"));
        assert!(!xml.contains("wind_speed"));
        assert!(xml.trim_end().ends_with("</stationFeatureCollection>"));
    }

    #[test]
    fn test_finish_without_rows() {
        let mut writer = XmlWriter::new(Vec::new());
        writer.finish().unwrap();
        assert_eq!(writer.into_inner(), b"\n");
    }
}
