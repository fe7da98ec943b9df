use super::AttributePredicate;
use crate::tokenizer::Attributes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPattern {
    Any,
    /// Lower-cased tag name.
    Name(String),
}

impl TagPattern {
    pub fn parse(name: &str) -> Self {
        if name == "*" {
            TagPattern::Any
        } else {
            TagPattern::Name(name.to_ascii_lowercase())
        }
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            TagPattern::Any => true,
            TagPattern::Name(expected) => expected == name,
        }
    }
}

/// Positional requirement of a step relative to the document and to the
/// previous step of the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Matches at any depth below the previous step.
    Descendant,
    /// Must be the first tag of the document.
    Anchor,
    /// Must be nested exactly one level below the previous step's match.
    DirectChild,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorStep {
    tag: TagPattern,
    constraint: Constraint,
    predicates: Vec<AttributePredicate>,
}

impl SelectorStep {
    pub fn new(tag: TagPattern, constraint: Constraint) -> Self {
        SelectorStep {
            tag,
            constraint,
            predicates: Vec::new(),
        }
    }

    #[inline]
    pub fn any() -> Self {
        Self::new(TagPattern::Any, Constraint::Descendant)
    }

    #[inline]
    pub fn tag(&self) -> &TagPattern {
        &self.tag
    }

    #[inline]
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    #[inline]
    pub fn predicates(&self) -> &[AttributePredicate] {
        &self.predicates
    }

    #[inline]
    pub fn add_predicate(&mut self, predicate: AttributePredicate) {
        self.predicates.push(predicate);
    }

    /// Checks the tag name and every attribute predicate. Positional
    /// constraints depend on the match state and are checked by the engine.
    pub fn matches(&self, name: &str, attributes: &Attributes) -> bool {
        self.tag.matches(name) && self.predicates.iter().all(|p| p.matches(attributes))
    }
}
