//! Subset requests and NCSS-style query parsing.

use chrono::{DateTime, Utc};
use ncss_common::{parse_iso8601, BoundingBox, LatLonPoint, SubsetError, SubsetResult, TimeRange};

use crate::collection::FeatureType;

/// Station-list value meaning "every station".
pub const ALL_STATIONS: &str = "all";

/// What to extract from a station dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubsetRequest {
    pub stations: Option<Vec<String>>,
    pub bbox: Option<BoundingBox>,
    pub point: Option<LatLonPoint>,
    pub time_range: Option<TimeRange>,
    pub time: Option<DateTime<Utc>>,
    pub variables: Option<Vec<String>>,
    /// Requested feature type; the configured default applies when unset.
    pub feature_type: Option<FeatureType>,
}

/// The spatial criterion in effect once precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialSelection<'a> {
    /// Explicit station names.
    Stations(&'a [String]),
    BoundingBox(&'a BoundingBox),
    Nearest(&'a LatLonPoint),
    All,
}

impl SubsetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stations<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.stations = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_point(mut self, point: LatLonPoint) -> Self {
        self.point = Some(point);
        self
    }

    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_variables<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.variables = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_feature_type(mut self, feature_type: FeatureType) -> Self {
        self.feature_type = Some(feature_type);
        self
    }

    /// Apply precedence: station list, then bounding box, then point.
    ///
    /// A list holding only `"all"` selects every station; any other list,
    /// including one that contains `"all"` among other names, is literal.
    pub fn spatial_selection(&self) -> SpatialSelection<'_> {
        if let Some(names) = &self.stations {
            if names.len() == 1 && names[0] == ALL_STATIONS {
                return SpatialSelection::All;
            }
            return SpatialSelection::Stations(names);
        }
        if let Some(bbox) = &self.bbox {
            return SpatialSelection::BoundingBox(bbox);
        }
        if let Some(point) = &self.point {
            return SpatialSelection::Nearest(point);
        }
        SpatialSelection::All
    }

    /// Requested variable names, or `None` for all of them.
    pub fn variable_names(&self) -> Option<&[String]> {
        self.variables.as_deref()
    }

    /// Build a request from query parameters.
    ///
    /// Recognized keys: `stns`, `north`, `south`, `east`, `west`, `latitude`,
    /// `longitude`, `time_start`, `time_end`, `time`, `var`, `featureType`.
    /// List values are comma-separated. A repeated key keeps the last value.
    /// Unknown keys are ignored.
    pub fn from_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> SubsetResult<Self> {
        let mut raw = RawParams::default();
        for (key, value) in params {
            let value = value.trim();
            match key {
                "stns" => raw.stns = Some(value),
                "north" => raw.north = Some(value),
                "south" => raw.south = Some(value),
                "east" => raw.east = Some(value),
                "west" => raw.west = Some(value),
                "latitude" => raw.latitude = Some(value),
                "longitude" => raw.longitude = Some(value),
                "time_start" => raw.time_start = Some(value),
                "time_end" => raw.time_end = Some(value),
                "time" => raw.time = Some(value),
                "var" => raw.var = Some(value),
                "featureType" => raw.feature_type = Some(value),
                _ => {}
            }
        }
        raw.into_request()
    }

    /// Parse an `a=1&b=2` query string.
    pub fn from_query(query: &str) -> SubsetResult<Self> {
        Self::from_params(
            query
                .trim_start_matches('?')
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| pair.split_once('=').unwrap_or((pair, ""))),
        )
    }
}

#[derive(Default)]
struct RawParams<'a> {
    stns: Option<&'a str>,
    north: Option<&'a str>,
    south: Option<&'a str>,
    east: Option<&'a str>,
    west: Option<&'a str>,
    latitude: Option<&'a str>,
    longitude: Option<&'a str>,
    time_start: Option<&'a str>,
    time_end: Option<&'a str>,
    time: Option<&'a str>,
    var: Option<&'a str>,
    feature_type: Option<&'a str>,
}

impl RawParams<'_> {
    fn into_request(self) -> SubsetResult<SubsetRequest> {
        let mut request = SubsetRequest::new();

        request.stations = self.stns.map(split_list).filter(|names| !names.is_empty());

        let edges = [self.north, self.south, self.east, self.west];
        if edges.iter().any(Option::is_some) {
            let [north, south, east, west] = match edges {
                [Some(n), Some(s), Some(e), Some(w)] => [
                    parse_number("north", n)?,
                    parse_number("south", s)?,
                    parse_number("east", e)?,
                    parse_number("west", w)?,
                ],
                _ => {
                    return Err(SubsetError::malformed(
                        "bbox",
                        "north, south, east and west must all be given",
                    ))
                }
            };
            let bbox = BoundingBox::from_edges(north, south, east, west);
            bbox.validate()?;
            request.bbox = Some(bbox);
        }

        match (self.latitude, self.longitude) {
            (None, None) => {}
            (Some(lat), Some(lon)) => {
                let point = LatLonPoint::new(parse_number("latitude", lat)?, parse_number("longitude", lon)?);
                if !point.is_valid() {
                    return Err(SubsetError::malformed("latitude", "latitude must be within [-90, 90]"));
                }
                request.point = Some(point);
            }
            _ => {
                return Err(SubsetError::malformed(
                    "latitude",
                    "latitude and longitude must be given together",
                ))
            }
        }

        if self.time_start.is_some() || self.time_end.is_some() {
            let start = self.time_start.map(|s| parse_time("time_start", s)).transpose()?;
            let end = self.time_end.map(|s| parse_time("time_end", s)).transpose()?;
            let range = TimeRange::from_bounds(start, end);
            if range.start > range.end {
                return Err(SubsetError::malformed("time_start", "time_start is after time_end"));
            }
            request.time_range = Some(range);
        }

        request.time = match self.time {
            None => None,
            Some(s) if s.eq_ignore_ascii_case("present") => Some(Utc::now()),
            Some(s) => Some(parse_time("time", s)?),
        };

        request.variables = self
            .var
            .map(split_list)
            .filter(|names| !names.is_empty() && !(names.len() == 1 && names[0] == "all"));

        if let Some(ft) = self.feature_type {
            request.feature_type = Some(ft.parse()?);
        }

        Ok(request)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_number(param: &str, value: &str) -> SubsetResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SubsetError::malformed(param, format!("'{}' is not a number", value)))
}

fn parse_time(param: &str, value: &str) -> SubsetResult<DateTime<Utc>> {
    parse_iso8601(value).map_err(|e| SubsetError::malformed(param, e.to_string()))
}
