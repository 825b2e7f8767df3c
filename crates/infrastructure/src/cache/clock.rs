/// Logical recency clock shared by every set of one cache.
///
/// Each access that touches a line advances it by exactly one and stamps the
/// new value on that line. Owned by a single cache instance and passed down
/// by `&mut`; separate caches never share a clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecencyClock {
    now: u64,
}

impl RecencyClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Advances the clock and returns the new value.
    #[inline]
    pub fn tick(&mut self) -> u64 {
        self.now += 1;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero_and_ticks_by_one() {
        let mut clock = RecencyClock::new();
        assert_eq!(clock.now(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.now(), 2);
    }
}
