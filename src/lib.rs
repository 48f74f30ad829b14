//! Finds HTML tags by name and attributes without building a DOM.
//!
//! The crate is meant for extraction of particular elements from documents that are
//! *approximately* well-formed, e.g. scraped web pages. Tags are located by scanning
//! the document for their names, so the search is fast and never fails on malformed
//! markup elsewhere in the document. The price is that the HTML specification isn't
//! followed: comments, scripts, CDATA sections and character references are not
//! recognized, and a `>` inside of a quoted attribute value ends the tag.
//!
//! # Example
//! ```
//! use tag_finder::{equal, find, has, Check, OptionalTag};
//!
//! let doc = r#"
//!     <div id="interesting">
//!         <a href="https://example.com/1">Link 1</a>
//!         <a href="https://example.com/2">Link 2</a>
//!     </div>
//!     <div id="not">
//!         <a href="https://example.com/3">Link 3</a>
//!     </div>
//! "#;
//!
//! let div_checks: [&dyn Check; 1] = [&equal("id", "interesting")];
//! let interesting = find(doc, "div", &div_checks).content();
//!
//! let link_checks: [&dyn Check; 1] = [&has("href")];
//! let mut link = find(interesting, "a", &link_checks);
//! let mut links = Vec::new();
//!
//! while let Some(a) = link {
//!     links.push((a.content(), a.get_attribute("href").unwrap()));
//!     link = a.next();
//! }
//!
//! assert_eq!(
//!     links,
//!     [
//!         ("Link 1", "https://example.com/1"),
//!         ("Link 2", "https://example.com/2"),
//!     ]
//! );
//! ```

#[macro_use]
mod debug_trace;

mod base;
mod checks;
mod finder;
mod parser;

pub mod errors;

pub use self::base::decode_document;
pub use self::checks::{contains, equal, has, not_empty, Check, Contains, Equal, Has, NotEmpty};
pub use self::finder::{
    find, find_iter, Finder, MalformedAttributes, Matches, OptionalTag, Settings, Tag,
    TagNameMatching,
};
pub use self::parser::{parse_attributes, AttributeParser, AttributeStep, Attributes};
