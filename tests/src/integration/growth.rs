//! # Growth Behaviour
//!
//! End-to-end checks of the adaptive filter's epoch transitions at the
//! default configuration.

#[cfg(test)]
mod tests {
    use adaptive_bloom::domain::snapshot;
    use adaptive_bloom::{AdaptiveBloomConfig, AdaptiveBloomFilter, GrowthEvent};
    use rand::{distributions::Alphanumeric, Rng, SeedableRng};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn load(filter: &mut AdaptiveBloomFilter, range: std::ops::Range<usize>) -> Vec<GrowthEvent> {
        range
            .filter_map(|i| filter.add(&format!("user_{}", i)))
            .collect()
    }

    fn shape(filter: &AdaptiveBloomFilter) -> Vec<(usize, usize, usize)> {
        filter
            .filters()
            .iter()
            .map(|f| (f.size_bits(), f.hash_count(), f.count()))
            .collect()
    }

    // =============================================================================
    // GROWTH TRACE
    // =============================================================================

    #[test]
    fn test_default_config_growth_trace() {
        let mut filter = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();

        let events = load(&mut filter, 0..15_000);

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.epoch, 1);
        assert_eq!(event.previous_size, 95_851);
        assert_eq!(event.previous_count, 9_992);
        assert!(event.observed_fpr > 0.01);
        assert_eq!(event.new_size, 191_702);
        assert_eq!(event.new_hash_count, 7);

        assert_eq!(shape(&filter), vec![(95_851, 7, 9_992), (191_702, 7, 5_008)]);
    }

    #[test]
    fn test_current_fpr_is_back_under_target_after_growth() {
        let mut filter = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();

        for i in 0..40_000 {
            filter.add(&format!("user_{}", i));
            assert!(filter.current_false_positive_rate() <= filter.target_fpr());
        }
        assert!(filter.filter_count() >= 3);
    }

    #[test]
    fn test_fractional_growth_factor() {
        let config = AdaptiveBloomConfig {
            expected_items: 1_000,
            target_fpr: 0.01,
            growth_factor: 1.5,
        };
        let mut filter = AdaptiveBloomFilter::new(config).unwrap();

        let events = load(&mut filter, 0..5_000);

        assert!(!events.is_empty());
        for pair in filter.filters().windows(2) {
            let expected = (pair[0].size_bits() as f64 * 1.5).ceil() as usize;
            assert_eq!(pair[1].size_bits(), expected);
        }
    }

    // =============================================================================
    // FALSE POSITIVE RATE
    // =============================================================================

    #[test]
    fn test_observed_fpr_stays_bounded_across_epochs() {
        let mut filter = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();
        load(&mut filter, 0..30_000);

        let false_positives = (0..10_000)
            .filter(|i| filter.contains(&format!("absent_{}", i)))
            .count();
        let observed = false_positives as f64 / 10_000.0;

        // Each frozen filter contributes up to the target
        let bound = filter.target_fpr() * filter.filter_count() as f64;
        assert!(observed <= bound, "observed {} > bound {}", observed, bound);
    }

    #[test]
    fn test_no_false_negatives_for_random_identifiers() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let items: Vec<String> = (0..5_000)
            .map(|_| {
                let len = rng.gen_range(2..=20);
                (&mut rng)
                    .sample_iter(&Alphanumeric)
                    .take(len)
                    .map(char::from)
                    .collect()
            })
            .collect();

        let config = AdaptiveBloomConfig {
            expected_items: 500,
            ..Default::default()
        };
        let mut filter = AdaptiveBloomFilter::new(config).unwrap();
        for item in &items {
            filter.add(item);
        }

        assert!(filter.filter_count() > 1);
        for item in &items {
            assert!(filter.contains(item), "false negative for {}", item);
        }
    }

    // =============================================================================
    // SNAPSHOT
    // =============================================================================

    #[test]
    fn test_snapshot_restore_then_continue() {
        let mut original = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();
        load(&mut original, 0..12_000);

        let bytes = snapshot::encode(&original).unwrap();
        let mut restored = snapshot::decode(AdaptiveBloomConfig::default(), &bytes).unwrap();
        assert_eq!(shape(&restored), shape(&original));

        let a = load(&mut original, 12_000..15_000);
        let b = load(&mut restored, 12_000..15_000);
        assert_eq!(a, b);
        assert_eq!(shape(&restored), shape(&original));
    }
}
