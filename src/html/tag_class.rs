use super::LocalNameHash;
use bitflags::bitflags;

bitflags! {
    /// Classification of a tag name used by the tokenizer to apply implicit
    /// closing rules. A tag can belong to several classes at once
    /// (e.g. `button` is both a block and an inline element).
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct TagClass: u8 {
        /// Elements without content that are never pushed on the open tag stack.
        const VOID = 0b0000_0001;
        /// Elements that implicitly close open inline elements.
        const BLOCK = 0b0000_0010;
        const INLINE = 0b0000_0100;
        /// Elements that implicitly close an open sibling of the same name.
        const CLOSE_SELF = 0b0000_1000;
        /// Elements whose content is passed through without tag recognition.
        const RAW_TEXT = 0b0001_0000;
    }
}

impl TagClass {
    pub fn of(name: &str) -> Self {
        Self::from_hash(LocalNameHash::from(name))
    }

    pub fn from_hash(hash: LocalNameHash) -> Self {
        let mut class = TagClass::empty();

        // NOTE: non-standard names can't be represented as a hash and
        // never belong to any class.
        if hash.is_empty() {
            return class;
        }

        if tag_is_one_of!(
            hash,
            [
                Area, Base, Basefont, Br, Col, Frame, Hr, Img, Input, Isindex, Link, Meta, Param,
                Embed
            ]
        ) {
            class |= TagClass::VOID;
        }

        if tag_is_one_of!(
            hash,
            [
                Address, Applet, Blockquote, Button, Center, Dd, Del, Dir, Div, Dl, Dt, Fieldset,
                Form, Frameset, Hr, Iframe, Ins, Isindex, Li, Map, Menu, Noframes, Noscript,
                Object, Ol, P, Pre, Script, Table, Tbody, Td, Tfoot, Th, Thead, Tr, Ul
            ]
        ) {
            class |= TagClass::BLOCK;
        }

        if tag_is_one_of!(
            hash,
            [
                A, Abbr, Acronym, Applet, B, Basefont, Bdo, Big, Br, Button, Cite, Code, Del, Dfn,
                Em, Font, I, Iframe, Img, Input, Ins, Kbd, Label, Map, Object, Q, S, Samp, Script,
                Select, Small, Span, Strike, Strong, Sub, Sup, Textarea, Tt, U, Var
            ]
        ) {
            class |= TagClass::INLINE;
        }

        if tag_is_one_of!(
            hash,
            [Colgroup, Dd, Dt, Li, Option, P, Td, Tfoot, Th, Thead, Tr]
        ) {
            class |= TagClass::CLOSE_SELF;
        }

        if tag_is_one_of!(hash, [Script, Style]) {
            class |= TagClass::RAW_TEXT;
        }

        class
    }
}

/// Attributes that get their own name as a value when written without one,
/// e.g. `<input disabled>` has `disabled="disabled"`.
#[inline]
pub fn is_boolean_attribute(name: &str) -> bool {
    matches!(
        name,
        "checked"
            | "compact"
            | "declare"
            | "defer"
            | "disabled"
            | "ismap"
            | "multiple"
            | "nohref"
            | "noresize"
            | "noshade"
            | "nowrap"
            | "readonly"
            | "selected"
    )
}
