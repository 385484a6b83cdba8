use crate::api::dto::series_dto::{Datapoint, Series};
use crate::domain::query::dto::backend_response::{BackendResponse, RawPoint};

/// Flattens one backend response into series, applying the target's alias.
///
/// With an alias, a lone series is renamed to the alias itself; several
/// series become `"<alias> <seriesId>"`.
pub fn transform_result(response: BackendResponse, alias: Option<&str>) -> Vec<Series> {
    let mut series: Vec<Series> = response
        .data
        .all_series
        .into_iter()
        .map(|s| Series {
            target: s.series_id,
            datapoints: s
                .data_points
                .unwrap_or_default()
                .into_iter()
                .map(to_datapoint)
                .collect(),
        })
        .collect();

    if let Some(alias) = alias.filter(|a| !a.is_empty()) {
        if series.len() == 1 {
            series[0].target = alias.to_string();
        } else {
            for s in series.iter_mut() {
                s.target = format!("{} {}", alias, s.target);
            }
        }
    }

    series
}

fn to_datapoint(raw: Option<RawPoint>) -> Datapoint {
    match raw {
        Some(RawPoint(value, epoch_seconds)) => {
            Datapoint(value, Some((epoch_seconds * 1000.0).round() as i64))
        }
        None => Datapoint::MISSING,
    }
}
