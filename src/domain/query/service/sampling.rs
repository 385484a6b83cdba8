/// Finest sampling interval ever requested from the backend.
pub const MIN_SAMPLE_MS: i64 = 10_000;

/// `max(10000, round(span_ms / max_data_points))`, rounding halves up.
pub fn derive_sample(span_ms: i64, max_data_points: u32) -> i64 {
    let per_point = span_ms as f64 / max_data_points.max(1) as f64;
    let rounded = (per_point + 0.5).floor() as i64;
    rounded.max(MIN_SAMPLE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ranges_hit_the_floor() {
        assert_eq!(derive_sample(3_600_000, 1_000), 10_000);
        assert_eq!(derive_sample(0, 100), 10_000);
    }

    #[test]
    fn long_ranges_divide_by_point_count() {
        assert_eq!(derive_sample(10_000_000, 10), 1_000_000);
        assert_eq!(derive_sample(3_600_000, 100), 36_000);
    }

    #[test]
    fn rounds_half_up() {
        // 100_001 / 4 = 25_000.25, 100_002 / 4 = 25_000.5
        assert_eq!(derive_sample(100_001, 4), 25_000);
        assert_eq!(derive_sample(100_002, 4), 25_001);
    }

    #[test]
    fn inverted_range_falls_back_to_floor() {
        assert_eq!(derive_sample(-3_600_000, 10), MIN_SAMPLE_MS);
    }
}
