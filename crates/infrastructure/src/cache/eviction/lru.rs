use super::policy::EvictionPolicy;
use crate::cache::line::CacheLine;

/// Least-recently-used: the way with the smallest recency stamp.
///
/// Ties go to the lowest way index, so untouched ways (all at recency 0) are
/// filled in ascending order.
pub struct LruPolicy;

impl EvictionPolicy for LruPolicy {
    fn select_victim(&self, lines: &[CacheLine]) -> usize {
        let mut victim = 0;
        for (way, line) in lines.iter().enumerate().skip(1) {
            if line.recency < lines[victim].recency {
                victim = way;
            }
        }
        victim
    }
}
