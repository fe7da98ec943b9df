//! Start and end tag grammar.
//!
//! Tag names are runs of ASCII word characters, attribute names additionally
//! allow `-`. Every attribute must be separated from the previous token by
//! whitespace. A value is either double-quoted, single-quoted or unquoted, tried
//! in that order; an unterminated quote is read as an unquoted value.
use super::Attributes;
use crate::html::is_boolean_attribute;
use memchr::memchr;

#[derive(Debug)]
pub struct ScannedStartTag<'i> {
    pub name: &'i str,
    pub attributes: Attributes,
    pub self_closing: bool,
    pub len: usize,
}

#[derive(Debug)]
pub struct ScannedEndTag<'i> {
    pub name: &'i str,
    pub len: usize,
}

#[inline]
fn is_name_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

#[inline]
fn is_attr_name_char(ch: u8) -> bool {
    is_name_char(ch) || ch == b'-'
}

#[inline]
fn is_unquoted_value_char(ch: u8) -> bool {
    !ch.is_ascii_whitespace() && ch != b'>'
}

fn decode_value(name: &str, raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ if is_boolean_attribute(name) => name.to_owned(),
        _ => String::new(),
    }
}

struct Scanner<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Scanner<'i> {
    #[inline]
    fn new(input: &'i str, pos: usize) -> Self {
        Scanner { input, pos }
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'i str {
        let start = self.pos;

        while self.peek().is_some_and(&predicate) {
            self.pos += 1;
        }

        &self.input[start..self.pos]
    }

    #[inline]
    fn skip_whitespace(&mut self) -> usize {
        self.take_while(|ch| ch.is_ascii_whitespace()).len()
    }

    fn quoted(&mut self, quote: u8) -> Option<&'i str> {
        if self.peek() != Some(quote) {
            return None;
        }

        let start = self.pos + 1;
        let len = memchr(quote, &self.input.as_bytes()[start..])?;

        self.pos = start + len + 1;

        Some(&self.input[start..start + len])
    }

    fn value(&mut self) -> Option<&'i str> {
        self.quoted(b'"')
            .or_else(|| self.quoted(b'\''))
            .or_else(|| Some(self.take_while(is_unquoted_value_char)).filter(|v| !v.is_empty()))
    }

    fn value_assignment(&mut self) -> Option<&'i str> {
        let checkpoint = self.pos;

        self.skip_whitespace();

        if self.peek() == Some(b'=') {
            self.pos += 1;
            self.skip_whitespace();
            self.value()
        } else {
            // NOTE: the whitespace belongs to the next attribute.
            self.pos = checkpoint;
            None
        }
    }
}

/// Scans a start tag at the beginning of `input` (which starts with `<`).
/// Returns `None` if the input doesn't form a complete start tag.
pub fn scan_start_tag(input: &str) -> Option<ScannedStartTag<'_>> {
    let mut scanner = Scanner::new(input, 1);
    let name = scanner.take_while(is_name_char);

    if name.is_empty() {
        return None;
    }

    let mut attributes = Attributes::new();

    loop {
        let whitespace_len = scanner.skip_whitespace();

        let self_closing = match scanner.peek()? {
            b'>' => Some(false),
            b'/' if scanner.peek_at(1) == Some(b'>') => Some(true),
            _ if whitespace_len == 0 => return None,
            _ => None,
        };

        if let Some(self_closing) = self_closing {
            return Some(ScannedStartTag {
                name,
                attributes,
                self_closing,
                len: scanner.pos + if self_closing { 2 } else { 1 },
            });
        }

        let attr_name = scanner.take_while(is_attr_name_char);

        if attr_name.is_empty() {
            return None;
        }

        let attr_name = attr_name.to_ascii_lowercase();
        let value = decode_value(&attr_name, scanner.value_assignment());

        attributes.insert(attr_name, value);
    }
}

/// Scans an end tag at the beginning of `input` (which starts with `</`).
/// Anything between the tag name and the closing `>` is ignored.
pub fn scan_end_tag(input: &str) -> Option<ScannedEndTag<'_>> {
    let mut scanner = Scanner::new(input, 2);
    let name = scanner.take_while(is_name_char);

    if name.is_empty() {
        return None;
    }

    let gt = memchr(b'>', &input.as_bytes()[scanner.pos..])?;

    Some(ScannedEndTag {
        name,
        len: scanner.pos + gt + 1,
    })
}
