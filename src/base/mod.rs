mod cursor;
mod encoding;
mod range;

pub use self::cursor::Cursor;
pub use self::encoding::decode_document;
pub use self::range::Range;
