use crate::html::TagClass;
use crate::tokenizer::StartTag;

/// What a completed match contributes to the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Markup of the matched element including its own tags.
    Outer,
    /// Markup nested in the matched element.
    Inner,
    /// Text nested in the matched element, without any tags.
    Text,
    /// Value of the named attribute of the matched element. Elements that
    /// lack the attribute produce no result.
    Attribute(String),
}

impl OutputMode {
    #[inline]
    pub fn attribute(name: &str) -> Self {
        OutputMode::Attribute(name.to_ascii_lowercase())
    }

    #[inline]
    pub(super) fn keeps_text(&self) -> bool {
        !matches!(self, OutputMode::Attribute(_))
    }

    #[inline]
    pub(super) fn keeps_nested_tags(&self) -> bool {
        matches!(self, OutputMode::Outer | OutputMode::Inner)
    }

    #[inline]
    pub(super) fn keeps_own_tags(&self) -> bool {
        matches!(self, OutputMode::Outer)
    }
}

/// Values holding both quote kinds can only come from the unquoted syntax,
/// so they never contain whitespace or `>` and are written back unquoted.
fn write_attribute_value(buffer: &mut String, value: &str) {
    let quote = match (value.contains('"'), value.contains('\'')) {
        (true, true) => {
            buffer.push_str(value);
            return;
        }
        (true, false) => '\'',
        _ => '"',
    };

    buffer.push(quote);
    buffer.push_str(value);
    buffer.push(quote);
}

pub(super) fn write_start_tag(buffer: &mut String, tag: &StartTag<'_>) {
    buffer.push('<');
    buffer.push_str(tag.name());

    for attr in tag.attributes() {
        buffer.push(' ');
        buffer.push_str(attr.name());
        buffer.push('=');
        write_attribute_value(buffer, attr.value());
    }

    if tag.self_closing() && !TagClass::of(tag.name()).contains(TagClass::VOID) {
        buffer.push('/');
    }

    buffer.push('>');
}

pub(super) fn write_end_tag(buffer: &mut String, name: &str) {
    buffer.push_str("</");
    buffer.push_str(name);
    buffer.push('>');
}
