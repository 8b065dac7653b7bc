//! Data shapes consumed by the dashboard
//!
//! Both shapes are produced outside the renderer and handed to it for a
//! single render call. Counts are unsigned, so the non-negative invariant is
//! carried by the type; the shared-label invariant of the timeline is checked
//! on construction and on deserialization.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LogdashError, Result};

/// Series name used for error counts
pub const ERROR_SERIES: &str = "ERROR";

/// Series name used for warning counts
pub const WARNING_SERIES: &str = "WARNING";

/// One time bucket of the timeline with a count per series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub label: String,
    pub values: BTreeMap<String, u64>,
}

/// Ordered time buckets sharing one set of named series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct TimelineSeries {
    series: Vec<String>,
    buckets: Vec<TimelineBucket>,
}

#[derive(Deserialize)]
struct RawTimeline {
    series: Vec<String>,
    buckets: Vec<TimelineBucket>,
}

impl TryFrom<RawTimeline> for TimelineSeries {
    type Error = LogdashError;

    fn try_from(raw: RawTimeline) -> Result<Self> {
        TimelineSeries::new(raw.series, raw.buckets)
    }
}

impl TimelineSeries {
    /// Build a timeline, checking that every bucket carries exactly the
    /// declared series.
    pub fn new(series: Vec<String>, buckets: Vec<TimelineBucket>) -> Result<Self> {
        let mut seen = HashSet::new();
        for name in &series {
            if !seen.insert(name.as_str()) {
                return Err(LogdashError::InvalidData(format!(
                    "duplicate series '{}'",
                    name
                )));
            }
        }

        for bucket in &buckets {
            if bucket.values.len() != series.len()
                || !series.iter().all(|s| bucket.values.contains_key(s))
            {
                let found: Vec<&str> = bucket.values.keys().map(String::as_str).collect();
                return Err(LogdashError::InvalidData(format!(
                    "bucket '{}' has series {:?}, expected {:?}",
                    bucket.label, found, series
                )));
            }
        }

        Ok(Self { series, buckets })
    }

    /// Build a timeline from bucket labels and one value column per series
    pub fn from_columns<L, S>(labels: L, columns: Vec<(S, Vec<u64>)>) -> Result<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut series = Vec::with_capacity(columns.len());
        let mut buckets: Vec<TimelineBucket> = labels
            .iter()
            .map(|label| TimelineBucket {
                label: label.clone(),
                values: BTreeMap::new(),
            })
            .collect();

        for (name, values) in columns {
            let name = name.into();
            if values.len() != labels.len() {
                return Err(LogdashError::InvalidData(format!(
                    "series '{}' has {} values for {} time buckets",
                    name,
                    values.len(),
                    labels.len()
                )));
            }
            for (bucket, value) in buckets.iter_mut().zip(values) {
                bucket.values.insert(name.clone(), value);
            }
            series.push(name);
        }

        Self::new(series, buckets)
    }

    /// Series names in declaration order
    pub fn series_names(&self) -> &[String] {
        &self.series
    }

    pub fn buckets(&self) -> &[TimelineBucket] {
        &self.buckets
    }

    /// Time-bucket labels in order
    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.label.clone()).collect()
    }

    /// Values of one series, one per bucket, or `None` for an unknown series
    pub fn values_for(&self, series: &str) -> Option<Vec<u64>> {
        if !self.series.iter().any(|s| s == series) {
            return None;
        }
        Some(
            self.buckets
                .iter()
                .map(|b| b.values.get(series).copied().unwrap_or(0))
                .collect(),
        )
    }

    /// Sum of one series over all buckets; zero for an unknown series
    pub fn total_for(&self, series: &str) -> u64 {
        self.values_for(series)
            .map(|values| values.iter().sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Error count for a single host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCount {
    pub host: String,
    pub count: u64,
}

/// Per-host counts in caller-supplied order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostAggregate {
    entries: Vec<HostCount>,
}

impl HostAggregate {
    pub fn new(entries: Vec<HostCount>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HostCount] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.host.clone()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.count).collect()
    }

    /// Copy ordered by descending count. Ties keep their original order.
    pub fn sorted_desc(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Into<String>> FromIterator<(H, u64)> for HostAggregate {
    fn from_iter<T: IntoIterator<Item = (H, u64)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(host, count)| HostCount {
                    host: host.into(),
                    count,
                })
                .collect(),
        )
    }
}

/// Everything one render call consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub timeline: TimelineSeries,
    pub hosts: HostAggregate,
}

/// Headline totals shown next to the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u64,
    pub errors: u64,
    pub warnings: u64,
    pub first_bucket: Option<String>,
    pub last_bucket: Option<String>,
}

impl DashboardData {
    pub fn summary(&self) -> Summary {
        if self.timeline.is_empty() {
            return Summary {
                total: 0,
                errors: 0,
                warnings: 0,
                first_bucket: None,
                last_bucket: None,
            };
        }

        let total = self
            .timeline
            .series_names()
            .iter()
            .map(|s| self.timeline.total_for(s))
            .sum();

        Summary {
            total,
            errors: self.timeline.total_for(ERROR_SERIES),
            warnings: self.timeline.total_for(WARNING_SERIES),
            first_bucket: self.timeline.buckets().first().map(|b| b.label.clone()),
            last_bucket: self.timeline.buckets().last().map(|b| b.label.clone()),
        }
    }
}
