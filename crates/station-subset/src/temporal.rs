//! Time-restricted views over a station's observations.

use chrono::{DateTime, Utc};
use ncss_common::TimeRange;

use crate::station::{Observation, Station, StationFeature};

/// A station with a borrowed, time-ordered slice of its observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureView<'a> {
    pub station: &'a Station,
    pub observations: &'a [Observation],
}

impl<'a> FeatureView<'a> {
    /// An unrestricted view.
    pub fn of(feature: &'a StationFeature) -> Self {
        Self {
            station: &feature.station,
            observations: feature.observations(),
        }
    }

    /// Observations whose time lies in `range`, both ends included.
    ///
    /// `None` leaves the view unchanged.
    pub fn subset(self, range: Option<&TimeRange>) -> Self {
        let Some(range) = range else {
            return self;
        };
        let obs = self.observations;
        let start = obs.partition_point(|o| o.time < range.start);
        let end = start + obs[start..].iter().take_while(|o| range.contains(&o.time)).count();
        Self {
            observations: &obs[start..end],
            ..self
        }
    }

    /// Only the observation closest to `wanted`; ties go to the earlier one.
    ///
    /// An empty view stays empty.
    pub fn closest_time(self, wanted: DateTime<Utc>) -> Self {
        let obs = self.observations;
        let mut best: Option<(usize, i64)> = None;
        for (i, o) in obs.iter().enumerate() {
            let distance = (o.time - wanted).num_milliseconds().abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }
        let observations = match best {
            Some((i, _)) => &obs[i..=i],
            None => &obs[..0],
        };
        Self { observations, ..self }
    }

    /// Apply a range and, if given, the closest-time restriction.
    pub fn restrict(self, range: Option<&TimeRange>, wanted: Option<DateTime<Utc>>) -> Self {
        let view = self.subset(range);
        match wanted {
            Some(t) => view.closest_time(t),
            None => view,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }
}
