//! Built-in sample data used until a backend feeds the dashboard

use crate::error::Result;
use crate::model::{DashboardData, HostAggregate, TimelineSeries, ERROR_SERIES, WARNING_SERIES};

pub const SAMPLE_BUCKETS: [&str; 6] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];
pub const SAMPLE_ERRORS: [u64; 6] = [12, 19, 8, 25, 14, 9];
pub const SAMPLE_WARNINGS: [u64; 6] = [30, 42, 27, 55, 38, 24];
pub const SAMPLE_HOSTS: [(&str, u64); 4] = [
    ("srv-db01", 120),
    ("srv-web02", 85),
    ("srv-app03", 47),
    ("srv-cache01", 22),
];

pub fn sample_timeline() -> Result<TimelineSeries> {
    TimelineSeries::from_columns(
        SAMPLE_BUCKETS,
        vec![
            (ERROR_SERIES, SAMPLE_ERRORS.to_vec()),
            (WARNING_SERIES, SAMPLE_WARNINGS.to_vec()),
        ],
    )
}

pub fn sample_hosts() -> HostAggregate {
    SAMPLE_HOSTS.into_iter().collect()
}

pub fn sample_data() -> Result<DashboardData> {
    Ok(DashboardData {
        timeline: sample_timeline()?,
        hosts: sample_hosts(),
    })
}
