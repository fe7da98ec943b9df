use super::{AttributePredicate, Constraint, QueryToken, SelectorStep, TagPattern};
use std::slice::Iter;

/// An ordered list of selector steps.
///
/// The chain is built token by token. Attribute constraints always apply to
/// the last step pushed so far; if there is none yet an implicit wildcard step
/// is created for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorChain {
    steps: Vec<SelectorStep>,
}

impl SelectorChain {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles a list of textual query tokens.
    ///
    /// # Example
    /// ```
    /// use html_extractor::{Constraint, SelectorChain};
    ///
    /// let chain = SelectorChain::compile(["^div", "@id=main", ">p"]);
    ///
    /// assert_eq!(chain.len(), 2);
    /// assert_eq!(chain.steps()[0].constraint(), Constraint::Anchor);
    /// assert_eq!(chain.steps()[0].predicates().len(), 1);
    /// assert_eq!(chain.steps()[1].constraint(), Constraint::DirectChild);
    /// ```
    pub fn compile<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut chain = Self::new();

        for token in tokens {
            chain.push_token(token.as_ref());
        }

        chain
    }

    pub fn push_token(&mut self, token: &str) {
        match QueryToken::parse(token) {
            QueryToken::Tag(name) => {
                self.push_step(SelectorStep::new(TagPattern::parse(name), Constraint::Descendant))
            }
            QueryToken::Anchor(name) => {
                self.push_step(SelectorStep::new(TagPattern::parse(name), Constraint::Anchor))
            }
            QueryToken::Child(name) => self.push_step(SelectorStep::new(
                TagPattern::parse(name),
                Constraint::DirectChild,
            )),
            QueryToken::AttrExact { name, value } => {
                self.push_predicate(AttributePredicate::exact(name, value))
            }
            QueryToken::AttrPattern { name, pattern } => {
                self.push_predicate(AttributePredicate::pattern(name, pattern))
            }
        }
    }

    #[inline]
    pub fn push_step(&mut self, step: SelectorStep) {
        trace!(@selector "step #{}: {:?}", self.steps.len(), step);
        self.steps.push(step);
    }

    pub fn push_predicate(&mut self, predicate: AttributePredicate) {
        if self.steps.is_empty() {
            self.push_step(SelectorStep::any());
        }

        if let Some(step) = self.steps.last_mut() {
            step.add_predicate(predicate);
        }
    }

    #[inline]
    pub fn steps(&self) -> &[SelectorStep] {
        &self.steps
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, SelectorStep> {
        self.steps.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl<'a> IntoIterator for &'a SelectorChain {
    type Item = &'a SelectorStep;
    type IntoIter = Iter<'a, SelectorStep>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectorChain {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::compile(iter)
    }
}
