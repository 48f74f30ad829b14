use super::{TagMarkers, TagScanner};

impl TagScanner<'_> {
    /// Returns the position right after the `>` of the end tag that closes the
    /// start tag whose content begins at `from`, or `None` if the start tag is
    /// never closed.
    ///
    /// Nested tags with the same name are balanced: every start tag met before
    /// the next end tag has to be closed first. Tags with other names are not
    /// taken into account, e.g. in `<a><b></a></b>` the `</a>` closes the `a`.
    pub fn after_closure(&self, markers: &TagMarkers, from: usize) -> Option<usize> {
        let mut pending_closures = 1usize;
        let mut pos = from;

        while pending_closures > 0 {
            let end_tag = self.find_end_tag(markers, pos)?;

            match self.find_start_tag(markers, pos) {
                // NOTE: ranges are compared by their ends, so a start tag that
                // contains the end tag marker (`<a </a>`) counts as a nested one.
                Some(start_tag) if start_tag.end <= end_tag.end => {
                    pending_closures += 1;
                    pos = start_tag.end;
                }
                _ => {
                    pending_closures -= 1;
                    pos = end_tag.end;
                }
            }

            trace!(@closure "{} pending at {}", pending_closures, pos);
        }

        Some(pos)
    }
}
