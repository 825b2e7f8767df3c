use crate::cache::line::CacheLine;

/// Chooses which way of a full (or partly empty) set receives a missing tag.
///
/// Called only on a miss, with every way of the set; must return an index
/// into `lines`. Implementations are pure: the same lines always give the
/// same victim.
pub trait EvictionPolicy: Send + Sync {
    fn select_victim(&self, lines: &[CacheLine]) -> usize;
}
