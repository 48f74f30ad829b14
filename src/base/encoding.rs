use crate::errors::EncodingError;
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Decodes a byte document with the encoding named by `label` so it can be
/// searched.
///
/// Labels are resolved as described in the [WHATWG Encoding Standard] (e.g.
/// `"latin1"` resolves to `windows-1252`), except that labels of the
/// replacement encoding are unknown. A byte order mark overrides the
/// label, and malformed sequences are replaced with U+FFFD. The bytes are
/// borrowed when they are already valid UTF-8.
///
/// [WHATWG Encoding Standard]: https://encoding.spec.whatwg.org/#concept-encoding-get
pub fn decode_document<'b>(bytes: &'b [u8], label: &str) -> Result<Cow<'b, str>, EncodingError> {
    // NOTE: labels of the replacement encoding (e.g. `iso-2022-kr`) would
    // decode any document to a single U+FFFD, so they are rejected as unknown.
    let encoding = Encoding::for_label_no_replacement(label.as_bytes())
        .ok_or(EncodingError::UnknownEncoding)?;

    trace!(@decode "{} bytes labeled as {}", bytes.len(), encoding.name());

    let (text, _, _) = encoding.decode(bytes);

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label() {
        let err = decode_document(b"<a>", "klingon").unwrap_err();

        assert_eq!(err, EncodingError::UnknownEncoding);
    }

    #[test]
    fn replacement_encoding_labels() {
        for label in ["iso-2022-kr", "csiso2022kr", "hz-gb-2312"] {
            assert_eq!(
                decode_document(b"<a href=x>link</a>", label),
                Err(EncodingError::UnknownEncoding),
                "{label}"
            );
        }
    }

    #[test]
    fn legacy_encoding() {
        let text = decode_document(b"<p title=\"caf\xE9\">", "latin1").unwrap();

        assert_eq!(text, "<p title=\"café\">");
    }

    #[test]
    fn utf8_is_borrowed() {
        let text = decode_document("<p>ü</p>".as_bytes(), "utf-8").unwrap();

        assert!(matches!(text, Cow::Borrowed(_)));
    }

    #[test]
    fn bom_overrides_label() {
        let text = decode_document(b"\xEF\xBB\xBF<b>\xC3\xA9</b>", "windows-1252").unwrap();

        assert_eq!(text, "<b>é</b>");
    }
}
