//! # Membership Flow
//!
//! The service, the in-memory directory and the runtime wired together the
//! way the runtime binary wires them.
//!
//! ## Flow Tested:
//!
//! 1. **Register**: directory write, then filter write
//! 2. **Check**: filter miss answers alone; filter hit is confirmed
//! 3. **Restart**: directory contents seeded into a fresh filter

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use adaptive_bloom::{
        AdaptiveBloomConfig, InMemoryUserDirectory, MembershipApi, MembershipError,
        MembershipService, Metrics, Resolution,
    };
    use membership_runtime::{MembershipRuntime, RuntimeConfig};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn small_config() -> AdaptiveBloomConfig {
        AdaptiveBloomConfig {
            expected_items: 200,
            ..Default::default()
        }
    }

    fn build(
        directory: Arc<InMemoryUserDirectory>,
    ) -> (MembershipService<InMemoryUserDirectory>, Arc<Metrics>) {
        let metrics = Arc::new(Metrics::new());
        let service = MembershipService::new(small_config(), directory)
            .unwrap()
            .with_metrics(metrics.clone());
        (service, metrics)
    }

    // =============================================================================
    // REGISTER + CHECK
    // =============================================================================

    #[tokio::test]
    async fn test_register_then_check_round_trip() {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let (service, metrics) = build(directory.clone());

        for i in 0..1_000 {
            service.register(&format!("member_{}", i)).await.unwrap();
        }
        assert_eq!(directory.len(), 1_000);
        assert!(service.stats().filter_count > 1);

        for i in 0..1_000 {
            let outcome = service.check(&format!("member_{}", i)).await.unwrap();
            assert!(!outcome.available);
            assert_eq!(outcome.resolution, Resolution::Confirmed);
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.items_added, 1_000);
        assert_eq!(snapshot.authoritative_checks, 1_000);
        assert_eq!(snapshot.false_positives_recovered, 0);
    }

    #[tokio::test]
    async fn test_unregistered_names_are_always_available() {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let (service, metrics) = build(directory);

        for i in 0..1_000 {
            service.register(&format!("member_{}", i)).await.unwrap();
        }

        let mut directory_round_trips = 0;
        for i in 0..2_000 {
            let outcome = service.check(&format!("visitor_{}", i)).await.unwrap();
            assert!(outcome.available, "visitor_{} reported taken", i);
            if outcome.consulted_directory() {
                directory_round_trips += 1;
            }
        }

        // Only filter false positives cost a directory round-trip
        assert_eq!(
            metrics.snapshot().false_positives_recovered,
            directory_round_trips
        );
        assert!(directory_round_trips < 200);
    }

    #[tokio::test]
    async fn test_suggestions_are_registrable() {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let (service, _) = build(directory);
        service.register("writer").await.unwrap();

        let outcome = service.check("Writer").await.unwrap();
        assert!(!outcome.available);
        assert_eq!(outcome.suggestions.len(), 5);

        for suggestion in &outcome.suggestions {
            assert!(service.check(suggestion).await.unwrap().available);
            service.register(suggestion).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_rejected() {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let (service, _) = build(directory.clone());

        service.register("Quinn").await.unwrap();
        let err = service.register("quinn ").await.unwrap_err();

        assert!(matches!(err, MembershipError::AlreadyRegistered(_)));
        assert_eq!(directory.len(), 1);
    }

    // =============================================================================
    // RESTART
    // =============================================================================

    #[tokio::test]
    async fn test_seed_from_directory_after_restart() {
        let directory = Arc::new(InMemoryUserDirectory::new());
        {
            let (service, _) = build(directory.clone());
            for i in 0..500 {
                service.register(&format!("member_{}", i)).await.unwrap();
            }
        }

        // Fresh filter, same directory
        let (service, metrics) = build(directory.clone());
        assert!(service.check("member_7").await.unwrap().available);

        let growths = service.seed(directory.identifiers());
        assert!(growths > 0);
        assert_eq!(metrics.snapshot().growth_events as usize, growths);

        for i in 0..500 {
            assert!(!service.check(&format!("member_{}", i)).await.unwrap().available);
        }
    }

    // =============================================================================
    // RUNTIME
    // =============================================================================

    #[tokio::test]
    async fn test_runtime_demo_load() {
        let config = RuntimeConfig {
            filter: small_config(),
            demo_items: 2_000,
            log_every: 500,
            ..Default::default()
        };
        let runtime = MembershipRuntime::new(config).unwrap();

        let report = runtime.run_demo().await.unwrap();

        assert_eq!(report.stats.total_items, 2_000);
        assert_eq!(runtime.service().directory().len(), 2_000);
        assert_eq!(
            report.metrics.growth_events as usize,
            report.stats.filter_count - 1
        );
        assert!(report.stats.current_fpr <= report.stats.target_fpr);
    }
}
