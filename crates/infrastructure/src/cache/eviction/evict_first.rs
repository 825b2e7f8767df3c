use super::policy::EvictionPolicy;
use crate::cache::line::CacheLine;

/// Fallback for unrecognised policy names: always way 0, whatever the
/// recency stamps or empty ways say.
pub struct EvictFirstPolicy;

impl EvictionPolicy for EvictFirstPolicy {
    #[inline]
    fn select_victim(&self, _lines: &[CacheLine]) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evict_first_ignores_recency_and_empty_ways() {
        let lines = [
            CacheLine {
                tag: Some(9),
                recency: 50,
            },
            CacheLine::default(),
            CacheLine {
                tag: Some(4),
                recency: 1,
            },
        ];
        assert_eq!(EvictFirstPolicy.select_victim(&lines), 0);
    }
}
