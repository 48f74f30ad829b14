/// Half-open byte range `[start, end)` in a document.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Range { start, end }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    // NOTE: ranges are used as accumulators by the attribute parser: characters
    // are always appended contiguously, so extending the range is enough.
    #[inline]
    pub fn extend_with(&mut self, pos: usize, ch: char) {
        if self.is_empty() {
            self.start = pos;
        }

        self.end = pos + ch.len_utf8();
    }

    #[inline]
    pub fn slice<'i>(&self, input: &'i str) -> &'i str {
        &input[self.start..self.end]
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Range::default();
    }
}
