/// Tests for per-worker result state
#[cfg(test)]
mod tests {
    use crate::aggregator::ResultAggregator;
    use crate::types::{ResultCounters, WorkerId};

    fn worker(id: &str) -> WorkerId {
        WorkerId::new(id)
    }

    #[test]
    fn test_runner_start_initializes_worker() {
        let mut agg = ResultAggregator::new();
        let cid = worker("0-0");
        agg.on_runner_start(&cid, &["features/login.feature".to_string()]);

        assert_eq!(agg.counters(&cid), ResultCounters::default());
        assert_eq!(agg.specs(&cid).to_vec(), vec!["features/login.feature".to_string()]);
        assert_eq!(agg.current_passing(&cid), 0);
        assert_eq!(agg.worker_count(), 1);
    }

    #[test]
    fn test_counts_match_events_per_worker() {
        let mut agg = ResultAggregator::new();
        let a = worker("0-0");
        let b = worker("1-0");
        agg.on_runner_start(&a, &[]);
        agg.on_runner_start(&b, &[]);

        // Interleave the two workers
        agg.on_test_pass(&a);
        agg.on_test_fail(&b);
        agg.on_test_pass(&a);
        agg.on_test_pending(&b);
        agg.on_test_pass(&b);
        agg.on_test_fail(&a);

        assert_eq!(agg.counters(&a), ResultCounters { passing: 2, pending: 0, failing: 1 });
        assert_eq!(agg.counters(&b), ResultCounters { passing: 1, pending: 1, failing: 1 });
        // Reading twice changes nothing
        assert_eq!(agg.counters(&a), ResultCounters { passing: 2, pending: 0, failing: 1 });
        assert_eq!(agg.totals(), ResultCounters { passing: 3, pending: 1, failing: 2 });
    }

    #[test]
    fn test_current_passing_resets_on_suite_boundaries() {
        let mut agg = ResultAggregator::new();
        let cid = worker("0-0");
        agg.on_runner_start(&cid, &[]);

        agg.on_suite_start(&cid);
        agg.on_test_pass(&cid);
        agg.on_test_pass(&cid);
        agg.on_test_fail(&cid);
        assert_eq!(agg.current_passing(&cid), 2);

        agg.on_suite_end(&cid);
        assert_eq!(agg.current_passing(&cid), 0);

        agg.on_test_pass(&cid);
        agg.on_suite_start(&cid);
        assert_eq!(agg.current_passing(&cid), 0);
        // Cumulative counters are untouched by suite boundaries
        assert_eq!(agg.counters(&cid).passing, 3);
    }

    #[test]
    fn test_current_passing_is_per_worker() {
        let mut agg = ResultAggregator::new();
        let a = worker("0-0");
        let b = worker("0-1");
        agg.on_test_pass(&a);
        agg.on_test_pass(&b);
        agg.on_test_pass(&b);
        agg.on_suite_end(&a);

        assert_eq!(agg.current_passing(&a), 0);
        assert_eq!(agg.current_passing(&b), 2);
    }

    #[test]
    fn test_error_sequence_numbers_and_reset() {
        let mut agg = ResultAggregator::new();
        let cid = worker("0-0");
        assert_eq!(agg.next_error_sequence(&cid), 1);
        assert_eq!(agg.next_error_sequence(&cid), 2);
        assert_eq!(agg.next_error_sequence(&cid), 3);

        agg.reset_error_sequence(&cid);
        assert_eq!(agg.next_error_sequence(&cid), 1);
    }

    #[test]
    fn test_unknown_worker_reads_as_zero() {
        let agg = ResultAggregator::new();
        let cid = worker("9-9");
        assert_eq!(agg.counters(&cid), ResultCounters::default());
        assert!(agg.specs(&cid).is_empty());
        assert_eq!(agg.current_passing(&cid), 0);
    }
}
