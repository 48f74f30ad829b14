mod settings;
mod tag;

pub use self::settings::*;
pub use self::tag::{OptionalTag, Tag};

use crate::base::Range;
use crate::checks::Check;
use crate::parser::{parse_attributes_with_policy, TagMarkers, TagScanner};
use std::iter::FusedIterator;
use std::sync::Arc;

// Everything that is needed to resume a search from another position.
// NOTE: markers are built once per search and shared by all the found tags.
#[derive(Clone)]
pub(crate) struct Search<'a> {
    pub doc: &'a str,
    pub name: &'a str,
    pub checks: &'a [&'a dyn Check],
    pub settings: Settings,
    pub markers: Arc<TagMarkers>,
}

impl<'a> Search<'a> {
    pub fn find_from(&self, from: usize) -> Option<Tag<'a>> {
        let scanner = TagScanner::new(self.doc, self.settings.tag_name_matching);
        let mut pos = from;

        while pos < self.doc.len() {
            let start_tag = scanner.find_start_tag(&self.markers, pos)?;
            let tag = self.create_tag(&scanner, start_tag);

            if self.checks.iter().all(|check| check.check(&tag)) {
                return Some(tag);
            }

            trace!(@finder "`{}` at {} rejected by checks", self.name, start_tag.start);

            pos = start_tag.end;
        }

        None
    }

    fn create_tag(&self, scanner: &TagScanner<'a>, start_tag: Range) -> Tag<'a> {
        // NOTE: the attribute list is everything between the tag name and `>`.
        let attributes = self
            .doc
            .get(start_tag.start + self.markers.start_len()..start_tag.end - 1)
            .unwrap_or_default();

        Tag::new(
            self.clone(),
            parse_attributes_with_policy(attributes, self.settings.malformed_attributes),
            start_tag,
            scanner.after_closure(&self.markers, start_tag.end),
        )
    }
}

/// Searches documents for tags with the given [`Settings`].
///
/// # Example
/// ```
/// use tag_finder::{Check, Finder, OptionalTag, Settings, TagNameMatching, equal};
///
/// let finder = Finder::new(Settings {
///     tag_name_matching: TagNameMatching::AsciiCaseInsensitive,
///     ..Settings::default()
/// });
///
/// let checks: [&dyn Check; 1] = [&equal("ID", "main")];
/// let div = finder.find(r#"<DIV id="main">Hello</DIV>"#, "div", &checks);
///
/// assert_eq!(div.content(), "Hello");
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Finder {
    settings: Settings,
}

impl Finder {
    #[inline]
    pub fn new(settings: Settings) -> Self {
        Finder { settings }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the first tag named `name` in `doc` that passes all the `checks`.
    pub fn find<'a>(
        &self,
        doc: &'a str,
        name: &'a str,
        checks: &'a [&'a dyn Check],
    ) -> Option<Tag<'a>> {
        self.search(doc, name, checks).find_from(0)
    }

    /// Returns an iterator over the first matching tag and each of its
    /// successors produced by [`Tag::next`].
    pub fn find_iter<'a>(
        &self,
        doc: &'a str,
        name: &'a str,
        checks: &'a [&'a dyn Check],
    ) -> Matches<'a> {
        Matches {
            search: self.search(doc, name, checks),
            from: Some(0),
        }
    }

    #[inline]
    fn search<'a>(&self, doc: &'a str, name: &'a str, checks: &'a [&'a dyn Check]) -> Search<'a> {
        Search {
            doc,
            name,
            checks,
            settings: self.settings,
            markers: Arc::new(TagMarkers::new(name)),
        }
    }
}

/// Returns the first tag named `name` in `doc` that passes all the `checks`,
/// using the default [`Settings`].
///
/// # Example
/// ```
/// use tag_finder::{find, has, Check};
///
/// let doc = r#"<a>skip</a><a href="/next">Next</a>"#;
/// let checks: [&dyn Check; 1] = [&has("href")];
/// let link = find(doc, "a", &checks).unwrap();
///
/// assert_eq!(link.get_attribute("href"), Some("/next"));
/// assert_eq!(link.content(), "Next");
/// ```
#[inline]
pub fn find<'a>(doc: &'a str, name: &'a str, checks: &'a [&'a dyn Check]) -> Option<Tag<'a>> {
    Finder::default().find(doc, name, checks)
}

/// Returns an iterator over matching tags in `doc`, using the default [`Settings`].
///
/// See [`Finder::find_iter`].
#[inline]
pub fn find_iter<'a>(doc: &'a str, name: &'a str, checks: &'a [&'a dyn Check]) -> Matches<'a> {
    Finder::default().find_iter(doc, name, checks)
}

/// Iterator over matching tags, created by [`find_iter`] and [`Finder::find_iter`].
///
/// Each search resumes from the content of the previous match, so tags nested in
/// a match are yielded as well.
pub struct Matches<'a> {
    search: Search<'a>,
    from: Option<usize>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let tag = self.search.find_from(self.from.take()?)?;

        self.from = Some(tag.content_start());

        Some(tag)
    }
}

impl FusedIterator for Matches<'_> {}
