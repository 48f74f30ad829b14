//! Checks that a found tag has to pass to be returned from a search.
//!
//! Attribute names given to the checks are case-insensitive for ASCII letters,
//! attribute values are compared as is.

use crate::finder::Tag;
use crate::parser::to_ascii_lowercase;

/// A predicate over a found tag.
///
/// Implemented by the checks of this module and by any `Fn(&Tag<'_>) -> bool`
/// closure. A tag is returned from a search only if it passes all the checks
/// (an empty list of checks is always passed).
pub trait Check: Sync {
    fn check(&self, tag: &Tag<'_>) -> bool;
}

impl<F> Check for F
where
    F: Fn(&Tag<'_>) -> bool + Sync,
{
    #[inline]
    fn check(&self, tag: &Tag<'_>) -> bool {
        self(tag)
    }
}

#[inline]
fn lowercase_name(name: &str) -> String {
    to_ascii_lowercase(name).into_owned()
}

/// Passes if the tag has the attribute, with or without a value.
#[derive(Debug, Clone)]
pub struct Has {
    name: String,
}

impl Has {
    #[inline]
    pub fn new(name: &str) -> Self {
        Has {
            name: lowercase_name(name),
        }
    }
}

impl Check for Has {
    #[inline]
    fn check(&self, tag: &Tag<'_>) -> bool {
        tag.has_attribute(&self.name)
    }
}

/// Passes if the attribute value contains the given text.
#[derive(Debug, Clone)]
pub struct Contains {
    name: String,
    text: String,
}

impl Contains {
    #[inline]
    pub fn new(name: &str, text: &str) -> Self {
        Contains {
            name: lowercase_name(name),
            text: text.to_owned(),
        }
    }
}

impl Check for Contains {
    #[inline]
    fn check(&self, tag: &Tag<'_>) -> bool {
        tag.get_attribute(&self.name)
            .is_some_and(|value| value.contains(self.text.as_str()))
    }
}

/// Passes if the attribute value is equal to the given text.
#[derive(Debug, Clone)]
pub struct Equal {
    name: String,
    value: String,
}

impl Equal {
    #[inline]
    pub fn new(name: &str, value: &str) -> Self {
        Equal {
            name: lowercase_name(name),
            value: value.to_owned(),
        }
    }
}

impl Check for Equal {
    #[inline]
    fn check(&self, tag: &Tag<'_>) -> bool {
        tag.get_attribute(&self.name) == Some(self.value.as_str())
    }
}

/// Passes if the tag has the attribute and its value is not empty.
#[derive(Debug, Clone)]
pub struct NotEmpty {
    name: String,
}

impl NotEmpty {
    #[inline]
    pub fn new(name: &str) -> Self {
        NotEmpty {
            name: lowercase_name(name),
        }
    }
}

impl Check for NotEmpty {
    #[inline]
    fn check(&self, tag: &Tag<'_>) -> bool {
        tag.get_attribute(&self.name)
            .is_some_and(|value| !value.is_empty())
    }
}

/// Shorthand for [`Has::new`].
#[inline]
pub fn has(name: &str) -> Has {
    Has::new(name)
}

/// Shorthand for [`Contains::new`].
#[inline]
pub fn contains(name: &str, text: &str) -> Contains {
    Contains::new(name, text)
}

/// Shorthand for [`Equal::new`].
#[inline]
pub fn equal(name: &str, value: &str) -> Equal {
    Equal::new(name, value)
}

/// Shorthand for [`NotEmpty::new`].
#[inline]
pub fn not_empty(name: &str) -> NotEmpty {
    NotEmpty::new(name)
}
