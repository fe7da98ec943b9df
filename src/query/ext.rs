use super::Extractor;
use crate::errors::ParseStallError;
use crate::tokenizer::Attributes;

/// Shortcuts for running a token-list query directly over a string.
///
/// ```
/// use html_extractor::ExtractExt;
///
/// let html = r#"<ul><li><a href="/a">A</a></li><li><a href="/b">B</a></li></ul>"#;
///
/// assert_eq!(html.extract_attr(["li", ">a"], "href").unwrap(), ["/a", "/b"]);
/// assert_eq!(html.extract_text(["a", "@href=/b"]).unwrap(), ["B"]);
/// ```
pub trait ExtractExt {
    fn extract_outer<I>(&self, tokens: I) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    fn extract_inner<I>(&self, tokens: I) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    fn extract_text<I>(&self, tokens: I) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    fn extract_attr<I>(&self, tokens: I, name: &str) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    fn extract_outer_with<I, F, R>(&self, tokens: I, transform: F) -> Result<Vec<R>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(usize, &Attributes, String) -> R;
}

impl ExtractExt for str {
    #[inline]
    fn extract_outer<I>(&self, tokens: I) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Extractor::new(self).tokens(tokens).outer_html()
    }

    #[inline]
    fn extract_inner<I>(&self, tokens: I) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Extractor::new(self).tokens(tokens).inner_html()
    }

    #[inline]
    fn extract_text<I>(&self, tokens: I) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Extractor::new(self).tokens(tokens).texts()
    }

    #[inline]
    fn extract_attr<I>(&self, tokens: I, name: &str) -> Result<Vec<String>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Extractor::new(self).tokens(tokens).attr_values(name)
    }

    #[inline]
    fn extract_outer_with<I, F, R>(&self, tokens: I, transform: F) -> Result<Vec<R>, ParseStallError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(usize, &Attributes, String) -> R,
    {
        Extractor::new(self).tokens(tokens).outer_html_with(transform)
    }
}
