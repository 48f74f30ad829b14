mod state_machine;

use self::state_machine::{Action, State};
use crate::base::{Cursor, Range};
use crate::finder::MalformedAttributes;
use hashbrown::HashMap;
use std::borrow::Cow;
use std::fmt::{self, Debug};
use thiserror::Error;

/// The kind of syntax error found in an attribute list.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum AttributeSyntaxError {
    #[error("Unexpected `=` before an attribute name")]
    UnexpectedEqualsSign,
    #[error("Unexpected character {0:?} in an attribute name")]
    UnexpectedCharInName(char),
    #[error("Unexpected character {0:?} in an unquoted attribute value")]
    UnexpectedCharInUnquotedValue(char),
    #[error("Unexpected character {0:?} after a quoted attribute value")]
    UnexpectedCharAfterQuotedValue(char),
}

/// An error that aborts parsing of an attribute list.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
#[error("{kind} at byte {pos}.")]
pub struct AttributeError {
    pub kind: AttributeSyntaxError,
    /// Byte offset of the offending character in the attribute list.
    pub pos: usize,
}

#[inline]
pub(crate) fn to_ascii_lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Attributes of a tag, keyed by lowercase name.
///
/// Values are borrowed from the document verbatim. An attribute without a value
/// (e.g. `disabled`) maps to an empty string.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Attributes<'i> {
    map: HashMap<Cow<'i, str>, &'i str>,
}

impl<'i> Attributes<'i> {
    /// Returns the value of the attribute with the given name. The name is
    /// case-insensitive for ASCII letters.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'i str> {
        self.map.get(&*to_ascii_lowercase(name)).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&*to_ascii_lowercase(name))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'i str)> + '_ {
        self.map.iter().map(|(name, value)| (&**name, *value))
    }

    // NOTE: a later attribute with the same name overwrites the earlier one.
    #[inline]
    fn insert(&mut self, name: Cow<'i, str>, value: &'i str) {
        self.map.insert(name, value);
    }
}

impl Debug for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Outcome of a single [`AttributeParser::step`].
#[derive(Debug, PartialEq, Eq)]
pub enum AttributeStep<'i> {
    /// A character was consumed without completing an attribute.
    Continue,
    /// A character completed an attribute (or the end of input was reached
    /// with a pending attribute name).
    Emit { name: Cow<'i, str>, value: &'i str },
    EndOfInput,
}

/// Parser for the attribute list of a tag, i.e. the text between the tag
/// name and the closing `>`.
///
/// Each [`step`](AttributeParser::step) consumes one character of input.
pub struct AttributeParser<'i> {
    input: &'i str,
    cursor: Cursor,
    state: State,
    name: Range,
    value: Range,
}

impl<'i> AttributeParser<'i> {
    pub fn new(input: &'i str) -> Self {
        AttributeParser {
            input,
            cursor: Cursor::default(),
            state: State::BeforeName,
            name: Range::default(),
            value: Range::default(),
        }
    }

    pub fn step(&mut self) -> Result<AttributeStep<'i>, AttributeError> {
        let Some(ch) = self.cursor.consume_ch(self.input) else {
            // NOTE: an unterminated trailing attribute (e.g. `attr="value` or
            // a lone `attr`) is emitted with whatever value has been collected.
            return Ok(if self.name.is_empty() {
                AttributeStep::EndOfInput
            } else {
                self.take_attr()
            });
        };

        let pos = self.cursor.pos();

        let transition = self
            .state
            .transition(ch)
            .map_err(|kind| AttributeError { kind, pos })?;

        trace!(@transition self.state, ch => transition);

        self.state = transition.state;

        Ok(match transition.action {
            Action::Skip => AttributeStep::Continue,
            Action::Reconsume => {
                self.cursor.unconsume_ch();
                AttributeStep::Continue
            }
            Action::AppendToName => {
                self.name.extend_with(pos, ch);
                AttributeStep::Continue
            }
            Action::AppendToValue => {
                self.value.extend_with(pos, ch);
                AttributeStep::Continue
            }
            Action::EmitAttr => self.take_attr(),
            Action::EmitValuelessAttrAndReconsume => {
                self.cursor.unconsume_ch();
                self.value.clear();
                self.take_attr()
            }
        })
    }

    fn take_attr(&mut self) -> AttributeStep<'i> {
        let name = to_ascii_lowercase(self.name.slice(self.input));
        let value = self.value.slice(self.input);

        self.name.clear();
        self.value.clear();

        AttributeStep::Emit { name, value }
    }
}

fn collect_attributes(input: &str) -> Result<Attributes<'_>, (AttributeError, Attributes<'_>)> {
    let mut parser = AttributeParser::new(input);
    let mut attributes = Attributes::default();

    loop {
        match parser.step() {
            Ok(AttributeStep::Continue) => (),
            Ok(AttributeStep::Emit { name, value }) => attributes.insert(name, value),
            Ok(AttributeStep::EndOfInput) => return Ok(attributes),
            Err(err) => return Err((err, attributes)),
        }
    }
}

/// Parses the attribute list of a tag.
///
/// Attribute names are lowercased (ASCII letters only). Any syntax error aborts
/// the whole list; no partial result is returned.
///
/// # Example
/// ```
/// use tag_finder::parse_attributes;
///
/// let attrs = parse_attributes(r#" Href="/home" hidden"#).unwrap();
///
/// assert_eq!(attrs.get("href"), Some("/home"));
/// assert_eq!(attrs.get("hidden"), Some(""));
/// assert!(parse_attributes("= oops").is_err());
/// ```
pub fn parse_attributes(input: &str) -> Result<Attributes<'_>, AttributeError> {
    collect_attributes(input).map_err(|(err, _)| err)
}

pub(crate) fn parse_attributes_with_policy(
    input: &str,
    policy: MalformedAttributes,
) -> Attributes<'_> {
    match collect_attributes(input) {
        Ok(attributes) => attributes,
        Err((_err, parsed)) => {
            trace!(@attributes "{} in {:?}", _err, input);

            match policy {
                MalformedAttributes::Discard => Attributes::default(),
                MalformedAttributes::KeepParsed => parsed,
            }
        }
    }
}
