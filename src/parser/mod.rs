mod attributes;
mod tag_scanner;

pub use self::attributes::{
    parse_attributes, AttributeError, AttributeParser, AttributeStep, AttributeSyntaxError,
    Attributes,
};
pub(crate) use self::attributes::{parse_attributes_with_policy, to_ascii_lowercase};
pub(crate) use self::tag_scanner::{TagMarkers, TagScanner};
