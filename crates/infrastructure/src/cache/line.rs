/// One way of a set.
///
/// `tag == None` is the empty sentinel; a fresh line has recency 0, which is
/// older than any stamp the clock can hand out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheLine {
    pub tag: Option<u64>,
    pub recency: u64,
}

impl CacheLine {
    #[inline]
    pub fn holds(&self, tag: u64) -> bool {
        self.tag == Some(tag)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
    }

    #[inline]
    pub(crate) fn fill(&mut self, tag: u64, recency: u64) {
        self.tag = Some(tag);
        self.recency = recency;
    }
}
