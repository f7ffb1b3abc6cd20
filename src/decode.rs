//! Percent-decoding of the raw input

use std::borrow::Cow;

/// Decode every `%XX` escape in `text`.
///
/// Invalid escapes are kept as they are and `+` is not treated as a space.
/// Decoded bytes that do not form valid UTF-8 become U+FFFD.
pub fn percent_decode(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'%', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let bytes = urlencoding::decode_binary(text.as_bytes());
    let decoded = match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(valid) => valid.to_owned(),
        Cow::Owned(replaced) => {
            log::warn!("Percent-decoded input contains invalid UTF-8, using lossy conversion");
            replaced
        }
    };

    Cow::Owned(decoded)
}
