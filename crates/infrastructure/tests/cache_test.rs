use cachesim_application::ports::CacheModel;
use cachesim_domain::{AccessOutcome, CacheGeometry, SimulationStats};
use cachesim_infrastructure::cache::{EvictionStrategy, SetAssociativeCache};

use AccessOutcome::{Hit, Miss};

fn cache(cache_size: u64, block_size: u64, ways: u64, policy: &str) -> SetAssociativeCache {
    let geometry = CacheGeometry::new(cache_size, block_size, ways).unwrap();
    SetAssociativeCache::new(geometry, EvictionStrategy::from_name(policy))
}

fn run(cache: &mut SetAssociativeCache, addresses: &[u64]) -> Vec<AccessOutcome> {
    addresses.iter().map(|&a| cache.access(a)).collect()
}

fn resident_tags(cache: &SetAssociativeCache, set: usize) -> Vec<Option<u64>> {
    cache.sets()[set].lines().iter().map(|l| l.tag).collect()
}

#[test]
fn test_reference_scenario() {
    let mut cache = cache(1024, 64, 2, "LRU");
    assert_eq!(cache.geometry().num_sets(), 8);

    let outcomes = run(&mut cache, &[0, 64, 128, 0]);
    assert_eq!(outcomes, vec![Miss, Miss, Miss, Hit]);

    let mut stats = SimulationStats::new();
    outcomes.into_iter().for_each(|o| stats.record(o));
    let report = stats.report();
    assert_eq!(report.total_accesses, 4);
    assert_eq!(report.hits, 1);
    assert_eq!(report.misses, 3);
    assert_eq!(report.hit_rate, 0.25);
    assert_eq!(report.miss_rate, 0.75);
    assert!((report.amat - 8.5).abs() < 1e-12);
}

#[test]
fn test_lru_evicts_least_recently_used() {
    // 2 sets x 2 ways x 64 bytes: 0, 128, 256 all land in set 0 with tags 0, 1, 2.
    let mut cache = cache(256, 64, 2, "LRU");

    assert_eq!(run(&mut cache, &[0, 128, 256]), vec![Miss, Miss, Miss]);
    assert_eq!(resident_tags(&cache, 0), vec![Some(2), Some(1)]);

    // B still resident, A gone.
    assert_eq!(cache.access(128), Hit);
    assert_eq!(cache.access(0), Miss);
}

#[test]
fn test_lru_hit_refreshes_recency() {
    let mut cache = cache(256, 64, 2, "LRU");

    // A, B, A again, then C: B is now the oldest.
    assert_eq!(run(&mut cache, &[0, 128, 0, 256]), vec![Miss, Miss, Hit, Miss]);
    assert_eq!(resident_tags(&cache, 0), vec![Some(0), Some(2)]);
}

#[test]
fn test_fresh_set_fills_ways_in_ascending_order() {
    // One set, four ways.
    let mut cache = cache(256, 64, 4, "LRU");

    for (expected_way, address) in [0u64, 64, 128, 192].into_iter().enumerate() {
        cache.access(address);
        let lines = cache.sets()[0].lines();
        for (way, line) in lines.iter().enumerate() {
            assert_eq!(line.is_empty(), way > expected_way, "after filling way {expected_way}");
        }
    }
    assert_eq!(
        resident_tags(&cache, 0),
        vec![Some(0), Some(1), Some(2), Some(3)]
    );
}

#[test]
fn test_clock_is_shared_across_sets() {
    let mut cache = cache(1024, 64, 2, "LRU");

    run(&mut cache, &[0, 64, 128, 0]);
    assert_eq!(cache.clock().now(), 4);

    // Stamps on different sets come from one timeline.
    assert_eq!(cache.sets()[1].lines()[0].recency, 2);
    assert_eq!(cache.sets()[2].lines()[0].recency, 3);
    assert_eq!(cache.sets()[0].lines()[0].recency, 4);
}

#[test]
fn test_unknown_policy_always_evicts_way_zero() {
    let mut cache = cache(256, 64, 2, "RANDOM");
    assert_eq!(cache.strategy(), EvictionStrategy::FallbackEvictFirst);

    // Every miss lands in way 0, even while way 1 is still empty.
    run(&mut cache, &[0, 128]);
    assert_eq!(resident_tags(&cache, 0), vec![Some(1), None]);

    // Way 0 is replaced regardless of recency or prior access order.
    run(&mut cache, &[256, 384]);
    assert_eq!(resident_tags(&cache, 0), vec![Some(3), None]);
    assert_eq!(cache.access(384), Hit);
    assert_eq!(cache.access(256), Miss);
    assert_eq!(resident_tags(&cache, 0), vec![Some(2), None]);
}

#[test]
fn test_fallback_reuses_way_zero_after_hits() {
    let mut cache = cache(256, 64, 2, "FIFO");

    run(&mut cache, &[0]);
    assert_eq!(resident_tags(&cache, 0), vec![Some(0), None]);

    // The most recently used line in way 0 is still the victim.
    assert_eq!(cache.access(0), Hit);
    assert_eq!(cache.access(128), Miss);
    assert_eq!(resident_tags(&cache, 0), vec![Some(1), None]);
}

#[test]
fn test_replaying_sequence_is_deterministic() {
    let addresses: Vec<u64> = (0..2_000u64)
        .map(|i| (i.wrapping_mul(2_654_435_761) >> 7) % 8192)
        .collect();

    for policy in ["LRU", "RANDOM"] {
        let mut first = cache(1024, 32, 4, policy);
        let mut second = cache(1024, 32, 4, policy);

        assert_eq!(run(&mut first, &addresses), run(&mut second, &addresses));
        assert_eq!(first.metrics(), second.metrics());
    }
}

#[test]
fn test_metrics_split_cold_fills_and_evictions() {
    let mut cache = cache(256, 64, 2, "LRU");

    run(&mut cache, &[0, 128, 256, 0, 128]);

    // Set 0 has two ways: two cold fills, then three evictions.
    assert_eq!(cache.cold_fills(), 2);
    assert_eq!(cache.evictions(), 3);
}

#[test]
fn test_direct_mapped_conflicts() {
    let mut cache = cache(256, 64, 1, "LRU");

    // 0 and 256 share set 0 in a 4-set direct-mapped cache.
    assert_eq!(run(&mut cache, &[0, 256, 0, 64, 64]), vec![Miss, Miss, Miss, Miss, Hit]);
}

#[test]
fn test_same_block_hits_regardless_of_offset() {
    let mut cache = cache(1024, 64, 2, "LRU");
    assert_eq!(run(&mut cache, &[100, 64, 127]), vec![Miss, Hit, Hit]);
}
