//! All standard tag names contain only ASCII alpha characters
//! and digits from 1 to 6 (in numbered header tags, i.e. <h1> - <h6>).
//! Considering that tag names are case insensitive we have only
//! 26 + 6 = 32 characters. Thus, single character can be encoded in
//! 5 bits and we can fit up to 64 / 5 ≈ 12 characters in a 64-bit
//! integer. This is enough to encode all standard tag names, so
//! the classification tables compare integers instead of strings.
//!
//! Numbers from 0 to 5 are reserved for digits from 1 to 6 and numbers
//! from 6 to 31 for ASCII alphas. Otherwise, if we used numbers from
//! 0 to 25 for ASCII alphas, repetitive `a` characters would be
//! ambiguous: `a`, `aaa` and even `aaaaa` would all hash to 0. Names that
//! start with a digit get an empty hash, so leading `1` digits can't collide
//! with the names that follow them.
//!
//! The hash is computable in const context, which lets [`Tag`] derive its
//! discriminants from the tag names themselves.
//!
//! [`Tag`]: super::Tag
use super::Tag;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct LocalNameHash(Option<u64>);

impl LocalNameHash {
    #[inline]
    pub const fn new() -> Self {
        LocalNameHash(Some(0))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub const fn value(&self) -> Option<u64> {
        self.0
    }

    #[inline]
    pub const fn update(self, ch: u8) -> Self {
        match self.0 {
            // NOTE: check if we still have space for yet another
            // character and if not then invalidate the hash.
            // Note, that we can't have `1` (which is encoded as 0b00000) as
            // a first character of a tag name, so it's safe to perform
            // check this way.
            Some(h) if h >> (64 - 5) == 0 => LocalNameHash(match ch {
                // NOTE: apply 0x1F mask on ASCII alpha to convert it to the
                // number from 1 to 26 (character case is controlled by one of
                // upper bits which we eliminate with the mask). Then add
                // 5, since numbers from 0 to 5 are reserved for digits.
                b'a'..=b'z' | b'A'..=b'Z' => Some((h << 5) | ((ch as u64 & 0x1F) + 5)),

                // NOTE: apply 0x0F mask on ASCII digit to convert it to number
                // from 1 to 6. Then substract 1 to make it zero-based.
                b'1'..=b'6' => Some((h << 5) | ((ch as u64 & 0x0F) - 1)),

                // NOTE: for any other characters hash function is not
                // applicable, so we completely invalidate the hash.
                _ => None,
            }),
            _ => LocalNameHash(None),
        }
    }

    pub const fn of(name: &str) -> Self {
        let bytes = name.as_bytes();

        if !bytes.is_empty() && bytes[0].is_ascii_digit() {
            return LocalNameHash(None);
        }

        let mut hash = LocalNameHash::new();
        let mut i = 0;

        while i < bytes.len() {
            hash = hash.update(bytes[i]);
            i += 1;
        }

        hash
    }
}

impl From<&str> for LocalNameHash {
    #[inline]
    fn from(string: &str) -> Self {
        LocalNameHash::of(string)
    }
}

impl PartialEq<Tag> for LocalNameHash {
    #[inline]
    fn eq(&self, tag: &Tag) -> bool {
        match self.0 {
            Some(h) => *tag as u64 == h,
            None => false,
        }
    }
}
