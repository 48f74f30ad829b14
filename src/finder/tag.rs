use super::Search;
use crate::base::Range;
use crate::parser::Attributes;
use std::fmt::{self, Debug};

/// A tag found in a document.
///
/// The tag borrows the document, the searched name and the checks, so the search
/// can be resumed with [`Tag::next`]. All offsets are byte offsets in the
/// document the search was started on.
#[derive(Clone)]
pub struct Tag<'a> {
    search: Search<'a>,
    attributes: Attributes<'a>,
    start: usize,
    content_start: usize,
    after_closure: Option<usize>,
}

impl<'a> Tag<'a> {
    pub(super) fn new(
        search: Search<'a>,
        attributes: Attributes<'a>,
        start_tag: Range,
        after_closure: Option<usize>,
    ) -> Self {
        Tag {
            search,
            attributes,
            start: start_tag.start,
            content_start: start_tag.end,
            after_closure,
        }
    }

    /// The name the tag was searched by.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.search.name
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes<'a> {
        &self.attributes
    }

    /// Returns the value of an attribute. The name is case-insensitive for ASCII letters.
    #[inline]
    pub fn get_attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes.get(name)
    }

    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Position of the `<` of the start tag.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position right after the `>` of the start tag.
    #[inline]
    pub fn content_start(&self) -> usize {
        self.content_start
    }

    /// Position right after the `>` of the matching end tag, if there is one.
    #[inline]
    pub fn after_closure(&self) -> Option<usize> {
        self.after_closure
    }

    /// The document the tag was found in.
    #[inline]
    pub fn document(&self) -> &'a str {
        self.search.doc
    }

    /// Returns the text between the start tag and the matching end tag.
    ///
    /// The content is empty if the tag is never closed.
    pub fn content(&self) -> &'a str {
        let Some(after_closure) = self.after_closure else {
            return "";
        };

        let content_and_end_tag = &self.search.doc[self.content_start..after_closure];

        content_and_end_tag
            .rfind("</")
            .map_or("", |end_tag_start| &content_and_end_tag[..end_tag_start])
    }

    /// Returns the next tag with the same name that passes the same checks.
    ///
    /// The search resumes right after the start tag of `self`, so a tag nested
    /// in the content of `self` is found before its siblings.
    #[inline]
    pub fn next(&self) -> Option<Tag<'a>> {
        self.search.find_from(self.content_start)
    }

    /// Returns the next tag with the same name that passes the same checks and
    /// starts after the end tag of `self`.
    ///
    /// Tags nested in `self` are skipped. If `self` is never closed, this is the
    /// same as [`Tag::next`].
    #[inline]
    pub fn next_after_closure(&self) -> Option<Tag<'a>> {
        self.search.find_from(self.after_closure.unwrap_or(self.content_start))
    }
}

impl Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name())
            .field("attributes", &self.attributes)
            .field("start", &self.start)
            .field("content_start", &self.content_start)
            .field("after_closure", &self.after_closure)
            .finish()
    }
}

/// Lets a search be chained without unwrapping intermediate results: a missing
/// tag has empty content and no successor.
///
/// # Example
/// ```
/// use tag_finder::{find, OptionalTag};
///
/// assert_eq!(find("<p>1</p><p>2</p>", "p", &[]).next().content(), "2");
/// assert_eq!(find("<p>1</p>", "div", &[]).content(), "");
/// ```
pub trait OptionalTag<'a> {
    fn content(&self) -> &'a str;
    fn next(&self) -> Option<Tag<'a>>;
}

impl<'a> OptionalTag<'a> for Option<Tag<'a>> {
    #[inline]
    fn content(&self) -> &'a str {
        self.as_ref().map_or("", Tag::content)
    }

    #[inline]
    fn next(&self) -> Option<Tag<'a>> {
        self.as_ref().and_then(Tag::next)
    }
}
