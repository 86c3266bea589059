//! Item identity as seen by the carousel.
//!
//! The carousel never looks at presentation fields; it only needs a key for
//! render keying and for matching the navigation id of a detail route. Keys
//! compare as strings, so `42` matches the route segment `"42"` but not
//! `"042"`.

use std::fmt::{self, Display};
use std::io::Write;

use uuid::Uuid;

/// Large enough for a hyphenated UUID or any `i64` in decimal.
pub const KEY_BUFFER_LEN: usize = 45;

const UUID_STR_LEN: usize = 36;

/// Borrowed identity of a carousel item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey<'a> {
    Numeric(i64),
    Text(&'a str),
    Uuid(Uuid),
}

impl ItemKey<'_> {
    /// Render the canonical string form into `buffer`.
    ///
    /// Text keys are returned as-is without touching the buffer.
    pub fn as_str<'b>(
        &'b self,
        buffer: &'b mut [u8; KEY_BUFFER_LEN],
    ) -> &'b str {
        match self {
            ItemKey::Numeric(n) => {
                let len = {
                    let mut cursor: &mut [u8] = &mut buffer[..];
                    let before = cursor.len();
                    if write!(cursor, "{n}").is_err() {
                        return "";
                    }
                    before - cursor.len()
                };
                std::str::from_utf8(&buffer[..len]).unwrap_or_default()
            }
            ItemKey::Text(text) => *text,
            ItemKey::Uuid(uuid) => {
                uuid.hyphenated().encode_lower(&mut buffer[..UUID_STR_LEN])
            }
        }
    }

    /// String comparison against an externally supplied id.
    pub fn matches(&self, id: &str) -> bool {
        let mut buffer = [0u8; KEY_BUFFER_LEN];
        self.as_str(&mut buffer) == id
    }
}

impl Display for ItemKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = [0u8; KEY_BUFFER_LEN];
        f.write_str(self.as_str(&mut buffer))
    }
}

/// Anything the carousel can page through.
pub trait CarouselItem {
    fn key(&self) -> ItemKey<'_>;
}

impl<T: CarouselItem + ?Sized> CarouselItem for &T {
    fn key(&self) -> ItemKey<'_> {
        (**self).key()
    }
}

impl CarouselItem for i64 {
    fn key(&self) -> ItemKey<'_> {
        ItemKey::Numeric(*self)
    }
}

impl CarouselItem for String {
    fn key(&self) -> ItemKey<'_> {
        ItemKey::Text(self.as_str())
    }
}

impl CarouselItem for str {
    fn key(&self) -> ItemKey<'_> {
        ItemKey::Text(self)
    }
}

impl CarouselItem for Uuid {
    fn key(&self) -> ItemKey<'_> {
        ItemKey::Uuid(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_render_in_decimal() {
        let mut buffer = [0u8; KEY_BUFFER_LEN];
        assert_eq!(ItemKey::Numeric(550).as_str(&mut buffer), "550");
        assert_eq!(ItemKey::Numeric(-7).as_str(&mut buffer), "-7");
        assert_eq!(
            ItemKey::Numeric(i64::MIN).as_str(&mut buffer),
            "-9223372036854775808"
        );
    }

    #[test]
    fn numeric_match_is_string_equality() {
        let key = ItemKey::Numeric(42);
        assert!(key.matches("42"));
        assert!(!key.matches("042"));
        assert!(!key.matches("42 "));
    }

    #[test]
    fn uuid_keys_use_lowercase_hyphenated_form() {
        let id = Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        let key = id.key();
        assert!(key.matches("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(!key.matches("67E55044-10B1-426F-9247-BB680E5FE0C8"));
        assert_eq!(key.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn text_keys_compare_verbatim() {
        let id = String::from("tt0111161");
        assert!(id.key().matches("tt0111161"));
        assert!(!id.key().matches("TT0111161"));
    }
}
