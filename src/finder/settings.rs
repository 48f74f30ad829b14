/// How tag names are compared with the name being searched for.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TagNameMatching {
    /// Tag names must be written exactly as searched for.
    #[default]
    Exact,
    /// ASCII letters of tag names are compared case-insensitively, so
    /// searching for `div` finds `<DIV>` and `<Div>` too.
    AsciiCaseInsensitive,
}

/// What happens to the attributes of a tag whose attribute list is malformed
/// (e.g. `<br name="val""">`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum MalformedAttributes {
    /// The tag is treated as having no attributes at all.
    #[default]
    Discard,
    /// Attributes that were complete before the syntax error are kept.
    KeepParsed,
}

/// Specifies settings for a [`Finder`](crate::Finder).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Tag name comparison mode.
    ///
    /// ### Default
    ///
    /// [`TagNameMatching::Exact`].
    pub tag_name_matching: TagNameMatching,

    /// Handling of malformed attribute lists.
    ///
    /// ### Default
    ///
    /// [`MalformedAttributes::Discard`].
    pub malformed_attributes: MalformedAttributes,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Settings {
            tag_name_matching: TagNameMatching::Exact,
            malformed_attributes: MalformedAttributes::Discard,
        }
    }
}
