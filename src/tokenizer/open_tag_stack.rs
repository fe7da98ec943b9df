use crate::html::TagClass;

#[derive(Debug)]
struct StackItem {
    name: String,
    class: TagClass,
}

/// Names of the tags for which a start event has been emitted, but the end
/// event hasn't been yet.
///
/// Every entry removed from the stack is reported to the provided handler
/// innermost first, so the tokenizer can emit the end event for it.
#[derive(Debug, Default)]
pub struct OpenTagStack(Vec<StackItem>);

impl OpenTagStack {
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn current(&self) -> Option<&str> {
        self.0.last().map(|item| item.name.as_str())
    }

    fn pop_with(&mut self, popped_tag_handler: &mut impl FnMut(String)) {
        if let Some(item) = self.0.pop() {
            trace!(@stack "pop `{}`", item.name);
            popped_tag_handler(item.name);
        }
    }

    /// Applies the implicit closing rules triggered by a start tag:
    /// a block element closes all the inline elements on top of the stack and
    /// a close-self element closes an open sibling of the same name.
    pub fn close_implied_by(
        &mut self,
        name: &str,
        class: TagClass,
        mut popped_tag_handler: impl FnMut(String),
    ) {
        if class.contains(TagClass::BLOCK) {
            while self
                .0
                .last()
                .is_some_and(|item| item.class.contains(TagClass::INLINE))
            {
                trace!(@stack "`{}` implicitly closes inline element", name);
                self.pop_with(&mut popped_tag_handler);
            }
        }

        if class.contains(TagClass::CLOSE_SELF) && self.current() == Some(name) {
            trace!(@stack "`{}` implicitly closes its sibling", name);
            self.pop_with(&mut popped_tag_handler);
        }
    }

    /// Pushes the tag unless it's self-closing. Returns whether the tag has been pushed.
    pub fn try_push(&mut self, name: &str, class: TagClass, self_closing: bool) -> bool {
        if self_closing {
            false
        } else {
            trace!(@stack "push `{}`", name);

            self.0.push(StackItem {
                name: name.to_owned(),
                class,
            });

            true
        }
    }

    /// Pops all the entries up to and including the closest one with the given
    /// name. Does nothing if there is no such entry.
    pub fn pop_up_to(&mut self, name: &str, mut popped_tag_handler: impl FnMut(String)) {
        if let Some(pos) = self.0.iter().rposition(|item| item.name == name) {
            while self.0.len() > pos {
                self.pop_with(&mut popped_tag_handler);
            }
        } else {
            trace!(@stack "ignore unmatched end tag `{}`", name);
        }
    }

    pub fn pop_all(&mut self, mut popped_tag_handler: impl FnMut(String)) {
        while !self.0.is_empty() {
            self.pop_with(&mut popped_tag_handler);
        }
    }
}
