use chrono::{DateTime, FixedOffset};

use crate::api::dto::query_options_dto::TimeRange;
use crate::core::template::interpolator::Interpolator;
use crate::core::util::query_string::encode_pairs;

/// Backend date format, `YYYY/MM/DD-HH:mm` in the timestamp's own offset.
pub const DATE_FORMAT: &str = "%Y/%m/%d-%H:%M";

/// Drop points without enough hosts reporting.
pub const REMOVE_INCOMPLETE: u8 = 1;
pub const OMIT_POINTS: &str = "null";

/// Window and sampling parameters shared by every target of one query.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardQueryParams {
    /// `s`
    pub start: String,
    /// `e`
    pub end: String,
    /// `tzo`: UTC offset of the range start, in hours.
    pub tz_offset_hours: f64,
    /// `sample`, milliseconds
    pub sample: i64,
    /// `removeincomplete`
    pub remove_incomplete: u8,
    /// `omitpoints`
    pub omit_points: String,
}

impl DashboardQueryParams {
    pub fn from_range(range: &TimeRange, sample: i64, interpolator: &dyn Interpolator) -> Self {
        Self {
            start: interpolator.interpolate(&format_date(&range.from)),
            end: interpolator.interpolate(&format_date(&range.to)),
            tz_offset_hours: range.from.offset().local_minus_utc() as f64 / 3600.0,
            sample,
            remove_incomplete: REMOVE_INCOMPLETE,
            omit_points: OMIT_POINTS.to_string(),
        }
    }

    pub fn to_query_string(&self) -> String {
        let tzo = format_hours(self.tz_offset_hours);
        let sample = self.sample.to_string();
        let remove_incomplete = self.remove_incomplete.to_string();

        encode_pairs([
            ("s", self.start.as_str()),
            ("e", self.end.as_str()),
            ("tzo", tzo.as_str()),
            ("sample", sample.as_str()),
            ("removeincomplete", remove_incomplete.as_str()),
            ("omitpoints", self.omit_points.as_str()),
        ])
    }
}

pub fn format_date(ts: &DateTime<FixedOffset>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

// Whole hours print without a fractional part: `2`, `-7`, `5.5`.
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{}", hours)
    }
}
