use rustc_hash::FxHashMap;
use std::time::Duration;

use crate::core::types::{ProbeResult, Report};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Compute summary statistics over one run's results.
///
/// Pure: the report depends only on its inputs. For an empty run the
/// average is `Duration::ZERO`.
pub fn summarize(results: Vec<ProbeResult>, wall_clock: Duration) -> Report {
    let total_count = results.len();
    let success_count = results.iter().filter(|r| r.reachable).count();
    let total_nanos: u128 = results.iter().map(|r| r.elapsed.as_nanos()).sum();

    let average_elapsed = if total_count == 0 {
        Duration::ZERO
    } else {
        // The mean never exceeds the largest elapsed time, so the seconds fit in u64
        let nanos = total_nanos / total_count as u128;
        Duration::new(
            (nanos / NANOS_PER_SEC) as u64,
            (nanos % NANOS_PER_SEC) as u32,
        )
    };

    Report {
        results,
        total_count,
        success_count,
        failure_count: total_count - success_count,
        average_elapsed,
        wall_clock_elapsed: wall_clock,
    }
}

/// Reachability keyed by URL. Duplicate targets collapse; the last result wins.
pub fn status_map(results: &[ProbeResult]) -> FxHashMap<String, bool> {
    let mut map = FxHashMap::with_capacity_and_hasher(results.len(), Default::default());
    for result in results {
        map.insert(result.url.clone(), result.reachable);
    }
    map
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn up(url: &str, ms: u64) -> ProbeResult {
        ProbeResult::up(url, Duration::from_millis(ms), 200)
    }

    fn down(url: &str, ms: u64) -> ProbeResult {
        ProbeResult::down(url, Duration::from_millis(ms), "connection refused")
    }

    #[test]
    fn test_summarize__mixed_results() {
        let results = vec![
            up("http://reachable.example", 50),
            down("http://unreachable.example", 10),
        ];

        let report = summarize(results, Duration::from_millis(55));

        assert_eq!(report.total_count, 2);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.failure_count, 1);
        assert_eq!(report.average_elapsed, Duration::from_millis(30));
        assert_eq!(report.wall_clock_elapsed, Duration::from_millis(55));
        assert_eq!(report.results.len(), 2);
    }

    #[test]
    fn test_summarize__empty_input() {
        let report = summarize(vec![], Duration::from_millis(3));

        assert_eq!(report.total_count, 0);
        assert_eq!(report.success_count, 0);
        assert_eq!(report.failure_count, 0);
        assert_eq!(report.average_elapsed, Duration::ZERO);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_summarize__is_idempotent() {
        let results = vec![up("http://a.test", 7), down("http://b.test", 13), up("http://c.test", 1)];

        let first = summarize(results.clone(), Duration::from_millis(20));
        let second = summarize(results, Duration::from_millis(20));

        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize__keeps_result_order() {
        let results = vec![down("http://z.test", 1), up("http://a.test", 2)];

        let report = summarize(results.clone(), Duration::ZERO);

        assert_eq!(report.results, results);
    }

    #[test]
    fn test_summarize__all_reachable() {
        let report = summarize(vec![up("http://a.test", 4), up("http://b.test", 6)], Duration::ZERO);

        assert_eq!(report.failure_count, 0);
        assert_eq!(report.average_elapsed, Duration::from_millis(5));
        assert!(report.is_all_reachable());
        assert_eq!(report.success_rate(), 100.0);
    }

    #[test]
    fn test_summarize__average_truncates_to_nanos() {
        let results = vec![
            ProbeResult::up("http://a.test", Duration::from_nanos(1), 200),
            ProbeResult::up("http://b.test", Duration::from_nanos(2), 200),
        ];

        let report = summarize(results, Duration::ZERO);

        assert_eq!(report.average_elapsed, Duration::from_nanos(1));
    }

    #[test]
    fn test_summarize__average_beyond_u64_nanos() {
        let thousand_years = Duration::from_secs(1000 * 365 * 24 * 60 * 60);
        let results = vec![ProbeResult::down("http://slow.test", thousand_years, "timeout")];

        let report = summarize(results, Duration::ZERO);

        assert_eq!(report.average_elapsed, thousand_years);
    }

    #[test]
    fn test_summarize__sum_of_max_durations_does_not_overflow() {
        let results = vec![
            ProbeResult::down("http://a.test", Duration::MAX, "timeout"),
            ProbeResult::down("http://b.test", Duration::MAX, "timeout"),
        ];

        let report = summarize(results, Duration::ZERO);

        assert_eq!(report.total_count, 2);
        assert_eq!(report.average_elapsed, Duration::MAX);
    }

    #[test]
    fn test_status_map__collapses_duplicates() {
        let results = vec![down("http://a.test", 1), up("http://b.test", 1), up("http://a.test", 1)];

        let map = status_map(&results);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("http://a.test"), Some(&true));
        assert_eq!(map.get("http://b.test"), Some(&true));
    }

    #[test]
    fn test_status_map__empty() {
        assert!(status_map(&[]).is_empty());
    }
}
