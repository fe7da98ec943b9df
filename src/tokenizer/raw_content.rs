//! `script` and `style` elements: their body is never tokenized, it runs up to
//! the first matching closing tag and is surfaced as a single raw block with
//! comment and CDATA wrappers removed.
use super::tag_syntax::scan_start_tag;
use super::RawTextKind;
use memchr::{memchr, memmem};
use std::borrow::Cow;

const MARKERS: [(&str, &str); 2] = [("<!--", "-->"), ("<![CDATA[", "]]>")];

#[derive(Debug)]
pub struct ScannedRawBlock<'i> {
    pub kind: RawTextKind,
    pub content: Cow<'i, str>,
    pub len: usize,
}

#[inline]
fn starts_with_ignore_case(haystack: &[u8], prefix: &[u8]) -> bool {
    haystack.len() >= prefix.len() && haystack[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[inline]
fn is_tag_name_boundary(ch: Option<&u8>) -> bool {
    !matches!(ch, Some(ch) if ch.is_ascii_alphanumeric() || *ch == b'_')
}

/// Returns the kind of raw text element if `input` opens one.
pub fn raw_text_kind(input: &str) -> Option<RawTextKind> {
    let bytes = input.strip_prefix('<')?.as_bytes();

    [RawTextKind::Script, RawTextKind::Style]
        .into_iter()
        .find(|kind| {
            let name = kind.tag_name().as_bytes();

            starts_with_ignore_case(bytes, name)
                && matches!(
                    bytes.get(name.len()),
                    Some(ch) if ch.is_ascii_whitespace() || *ch == b'/' || *ch == b'>'
                )
        })
}

/// Finds the closing tag for `name`, returning its offset and the offset
/// right after its `>`.
fn find_closing_tag(haystack: &[u8], name: &str) -> Option<(usize, usize)> {
    let name = name.as_bytes();

    memmem::find_iter(haystack, b"</").find_map(|pos| {
        let name_start = pos + 2;
        let name_end = name_start + name.len();

        if starts_with_ignore_case(&haystack[name_start..], name)
            && is_tag_name_boundary(haystack.get(name_end))
        {
            memchr(b'>', &haystack[name_end..]).map(|gt| (pos, name_end + gt + 1))
        } else {
            None
        }
    })
}

fn unwrap_marker(input: &str, open: &str, close: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = memmem::find(rest.as_bytes(), open.as_bytes()) {
        let inner_start = start + open.len();

        match memmem::find(&rest.as_bytes()[inner_start..], close.as_bytes()) {
            Some(inner_len) => {
                output.push_str(&rest[..start]);
                output.push_str(&rest[inner_start..inner_start + inner_len]);
                rest = &rest[inner_start + inner_len + close.len()..];
            }
            None => break,
        }
    }

    output.push_str(rest);

    output
}

fn unwrap_markers(body: &str) -> Cow<'_, str> {
    let mut content = Cow::Borrowed(body);

    for (open, close) in MARKERS {
        if memmem::find(content.as_bytes(), open.as_bytes()).is_some() {
            content = Cow::Owned(unwrap_marker(&content, open, close));
        }
    }

    content
}

/// Scans a complete raw text element. Returns `None` if its opening tag is
/// malformed or there is no closing tag in the rest of the input.
pub fn scan_raw_block(input: &str, kind: RawTextKind) -> Option<ScannedRawBlock<'_>> {
    let opening = scan_start_tag(input)?;

    if opening.self_closing {
        return Some(ScannedRawBlock {
            kind,
            content: Cow::Borrowed(""),
            len: opening.len,
        });
    }

    let body = &input[opening.len..];
    let (body_len, closing_end) = find_closing_tag(body.as_bytes(), kind.tag_name())?;

    Some(ScannedRawBlock {
        kind,
        content: unwrap_markers(&body[..body_len]),
        len: opening.len + closing_end,
    })
}
