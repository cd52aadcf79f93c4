use maud::Render;

/// Replaces `&`, `<`, `>`, `"` and `'` with their entities in a single pass.
///
/// Output is not meant to be escaped again: `&lt;` becomes `&amp;lt;`.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// User supplied text that has gone through [`escape`].
///
/// The inner string is private and only [`Escaped::new`] builds one, so any
/// markup spliced from `Escaped` values is safe to embed in element content
/// and in quoted attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Escaped(String);

impl Escaped {
    pub fn new(text: &str) -> Self {
        Self(escape(text))
    }
}

impl Render for Escaped {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.0);
    }
}
