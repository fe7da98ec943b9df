/// A single query token in its textual form.
///
/// | token            | meaning                                       |
/// |------------------|-----------------------------------------------|
/// | `name`           | step matching `name` at any depth             |
/// | `*`              | step matching any tag                         |
/// | `^name`          | step that must be the first tag of the input  |
/// | `>name`          | step that must be a direct child              |
/// | `@name=value`    | exact attribute constraint on the last step   |
/// | `@@name=pattern` | regex attribute constraint on the last step   |
///
/// Tokens of any other shape are read as plain tag names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryToken<'t> {
    Tag(&'t str),
    Anchor(&'t str),
    Child(&'t str),
    AttrExact { name: &'t str, value: &'t str },
    AttrPattern { name: &'t str, pattern: &'t str },
}

impl<'t> QueryToken<'t> {
    pub fn parse(token: &'t str) -> Self {
        if let Some(name) = token.strip_prefix('^') {
            QueryToken::Anchor(name)
        } else if let Some(name) = token.strip_prefix('>') {
            QueryToken::Child(name)
        } else if let Some(expr) = token.strip_prefix("@@") {
            match split_assignment(expr) {
                Some((name, pattern)) => QueryToken::AttrPattern { name, pattern },
                None => Self::lenient(token),
            }
        } else if let Some(expr) = token.strip_prefix('@') {
            match split_assignment(expr) {
                Some((name, value)) => QueryToken::AttrExact { name, value },
                None => Self::lenient(token),
            }
        } else {
            QueryToken::Tag(token)
        }
    }

    #[inline]
    fn lenient(token: &'t str) -> Self {
        trace!(@selector "malformed attribute token {:?} read as a tag name", token);
        QueryToken::Tag(token)
    }
}

fn split_assignment(expr: &str) -> Option<(&str, &str)> {
    expr.split_once('=').filter(|(name, _)| !name.is_empty())
}
