mod closure;

use crate::base::Range;
use crate::finder::TagNameMatching;
use memchr::memmem::Finder;
use memchr::{memchr, memchr_iter};

/// Opening (`<name`) and closing (`</name`) markers of a tag name.
pub struct TagMarkers {
    start: Finder<'static>,
    end: Finder<'static>,
}

impl TagMarkers {
    pub fn new(name: &str) -> Self {
        TagMarkers {
            start: Finder::new(&format!("<{name}")).into_owned(),
            end: Finder::new(&format!("</{name}")).into_owned(),
        }
    }

    #[inline]
    pub fn start_len(&self) -> usize {
        self.start.needle().len()
    }
}

// Tag scanner doesn't tokenize the document: it only looks for tag markers and
// the nearest `>` after them. Thus, a `>` inside of a quoted attribute value
// terminates the tag early, and tags inside of comments or scripts are found
// like any other tag.
pub struct TagScanner<'i> {
    input: &'i str,
    tag_name_matching: TagNameMatching,
}

impl<'i> TagScanner<'i> {
    pub fn new(input: &'i str, tag_name_matching: TagNameMatching) -> Self {
        TagScanner {
            input,
            tag_name_matching,
        }
    }

    #[inline]
    pub fn find_start_tag(&self, markers: &TagMarkers, from: usize) -> Option<Range> {
        self.find_tag(&markers.start, from)
    }

    #[inline]
    pub fn find_end_tag(&self, markers: &TagMarkers, from: usize) -> Option<Range> {
        self.find_tag(&markers.end, from)
    }

    /// Returns the range of the first tag starting with `marker` at or after
    /// `from`, from its `<` to its `>` inclusive.
    ///
    /// The marker must be followed by whitespace, `>` or `/`; otherwise it is
    /// a prefix of a longer tag name (e.g. `<a` in `<article>`) and the search
    /// continues after that tag.
    pub fn find_tag(&self, marker: &Finder<'_>, from: usize) -> Option<Range> {
        let bytes = self.input.as_bytes();
        let mut pos = from;

        while pos < bytes.len() {
            let start = pos + self.find_marker(&bytes[pos..], marker)?;
            let end = start + memchr(b'>', &bytes[start..])? + 1;

            if self.is_name_boundary(start + marker.needle().len()) {
                trace!(@scanner "tag at {}..{}", start, end);

                return Some(Range::new(start, end));
            }

            trace!(@scanner "marker at {} is a prefix of a longer name", start);

            pos = end;
        }

        None
    }

    #[inline]
    fn find_marker(&self, haystack: &[u8], marker: &Finder<'_>) -> Option<usize> {
        match self.tag_name_matching {
            TagNameMatching::Exact => marker.find(haystack),
            TagNameMatching::AsciiCaseInsensitive => {
                let needle = marker.needle();

                memchr_iter(b'<', haystack).find(|&pos| {
                    haystack[pos..]
                        .get(..needle.len())
                        .is_some_and(|candidate| candidate.eq_ignore_ascii_case(needle))
                })
            }
        }
    }

    #[inline]
    fn is_name_boundary(&self, pos: usize) -> bool {
        self.input
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|ch| ch.is_whitespace() || ch == '>' || ch == '/')
    }
}
