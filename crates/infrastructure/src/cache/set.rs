use super::clock::RecencyClock;
use super::eviction::ActiveEvictionPolicy;
use super::line::CacheLine;
use cachesim_domain::AccessOutcome;
use smallvec::SmallVec;

/// What one access did to its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetAccess {
    pub outcome: AccessOutcome,
    /// Way that was hit or filled.
    pub way: usize,
    /// Tag displaced by a miss; `None` on hits and cold fills.
    pub evicted: Option<u64>,
}

/// Fixed number of ways, index-addressed by way number.
///
/// The way count is set at construction and never changes; a tag is resident
/// in at most one way.
#[derive(Debug, Clone)]
pub struct CacheSet {
    lines: SmallVec<[CacheLine; 8]>,
}

impl CacheSet {
    pub fn new(associativity: usize) -> Self {
        Self {
            lines: smallvec::smallvec![CacheLine::default(); associativity],
        }
    }

    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    pub fn associativity(&self) -> usize {
        self.lines.len()
    }

    /// Looks `tag` up and, on a miss, installs it over the policy's victim.
    ///
    /// Either way the clock advances once and the touched line takes the new
    /// stamp.
    pub fn access(
        &mut self,
        tag: u64,
        clock: &mut RecencyClock,
        policy: &ActiveEvictionPolicy,
    ) -> SetAccess {
        if let Some(way) = self.lines.iter().position(|line| line.holds(tag)) {
            self.lines[way].recency = clock.tick();
            return SetAccess {
                outcome: AccessOutcome::Hit,
                way,
                evicted: None,
            };
        }

        let stamp = clock.tick();
        let way = policy.select_victim(&self.lines);
        let victim = &mut self.lines[way];
        let evicted = victim.tag;
        victim.fill(tag, stamp);

        SetAccess {
            outcome: AccessOutcome::Miss,
            way,
            evicted,
        }
    }
}
