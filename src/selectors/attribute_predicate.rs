use crate::tokenizer::Attributes;
use regex::Regex;

#[derive(Debug, Clone)]
pub enum ValuePredicate {
    Exact(String),
    Pattern(Regex),
    /// Produced from a pattern that failed to compile. Never matches.
    Unmatchable,
}

impl PartialEq for ValuePredicate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Unmatchable, Self::Unmatchable) => true,
            _ => false,
        }
    }
}

impl Eq for ValuePredicate {}

/// A constraint on the value of a single attribute. An element that lacks the
/// attribute never satisfies the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePredicate {
    name: String,
    value: ValuePredicate,
}

impl AttributePredicate {
    pub fn exact(name: &str, value: impl Into<String>) -> Self {
        AttributePredicate {
            name: name.to_ascii_lowercase(),
            value: ValuePredicate::Exact(value.into()),
        }
    }

    /// Creates a predicate that searches the attribute value for `pattern`.
    ///
    /// A pattern that isn't a valid regular expression yields a predicate
    /// that matches nothing.
    pub fn pattern(name: &str, pattern: &str) -> Self {
        let value = match Regex::new(pattern) {
            Ok(regex) => ValuePredicate::Pattern(regex),
            Err(_e) => {
                trace!(@selector "invalid pattern for `{}`: {}", name, _e);
                ValuePredicate::Unmatchable
            }
        };

        AttributePredicate {
            name: name.to_ascii_lowercase(),
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> &ValuePredicate {
        &self.value
    }

    pub fn matches(&self, attributes: &Attributes) -> bool {
        let Some(actual) = attributes.get(&self.name) else {
            return false;
        };

        match &self.value {
            ValuePredicate::Exact(expected) => actual == expected,
            ValuePredicate::Pattern(regex) => regex.is_match(actual),
            ValuePredicate::Unmatchable => false,
        }
    }
}
