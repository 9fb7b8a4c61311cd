// src/infrastructure/encoding.rs
use crate::constants::DECLARATION_SCAN_LIMIT;
use crate::domain::error::XmlError;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use tracing::debug;

/// Decode raw document bytes to text.
///
/// A byte-order mark wins over the `<?xml encoding="..."?>` declaration.
/// Without either, the content must be UTF-8.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, XmlError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "Decoding by byte-order mark");
        return decode_with(encoding, &bytes[bom_len..]);
    }

    match declared_encoding(bytes) {
        Some(label) => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| XmlError::UnsupportedEncoding(label.to_string()))?;
            debug!(label, encoding = encoding.name(), "Decoding by declaration");
            if encoding == UTF_8 {
                Ok(Cow::Borrowed(std::str::from_utf8(bytes)?))
            } else {
                decode_with(encoding, bytes)
            }
        }
        None => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
    }
}

fn decode_with<'a>(
    encoding: &'static Encoding,
    bytes: &'a [u8],
) -> Result<Cow<'a, str>, XmlError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(XmlError::Decode(encoding.name()))
}

/// Value of the `encoding` pseudo-attribute of a leading XML declaration.
fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(DECLARATION_SCAN_LIMIT)];
    if !head.starts_with(b"<?xml") {
        return None;
    }
    let end = head.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&head[..end]).ok()?;

    let after = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let value = after.trim_start().strip_prefix('=')?.trim_start();
    let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &value[1..];
    Some(&value[..value.find(quote)?])
}
