//! HTML output buffer.
//!
//! Components write raw markup through `std::fmt::Write` and wrap every
//! authored plain-text value in [`Escaped`]. Rich text fields are the only
//! authored content written without escaping.

use std::fmt;

use layout::Content;

/// Rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append trusted markup verbatim.
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.0.push_str(html);
        self
    }

    /// Append text with HTML special characters escaped.
    pub fn text(&mut self, text: &str) -> &mut Self {
        push_escaped(&mut self.0, text);
        self
    }

    /// Append a text-like field body: markup verbatim, plain text escaped.
    pub fn content(&mut self, content: Content<'_>) -> &mut Self {
        match content {
            Content::Markup(html) => self.raw(html),
            Content::Plain(text) => self.text(text),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Write for Markup {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display adapter that escapes its contents for text and attribute positions.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#x27;")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}

fn push_escaped(out: &mut String, s: &str) {
    use fmt::Write as _;
    let _ = write!(out, "{}", Escaped(s));
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use super::*;

    #[test]
    fn text_escapes_special_chars() {
        let mut out = Markup::new();
        out.text("<>&\"'");
        assert_eq!(out.as_str(), "&lt;&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn text_leaves_safe_string_alone() {
        let mut out = Markup::new();
        out.text("Spreads from 0.6 pips");
        assert_eq!(out.as_str(), "Spreads from 0.6 pips");
    }

    #[test]
    fn content_escapes_plain_and_keeps_markup() {
        let mut out = Markup::new();
        out.content(Content::Plain("1:30 & <b>x</b>")).content(Content::Markup("<b>y</b>"));
        assert_eq!(out.as_str(), "1:30 &amp; &lt;b&gt;x&lt;/b&gt;<b>y</b>");
    }

    #[test]
    fn text_escapes_and_raw_does_not() {
        let mut out = Markup::new();
        out.raw("<p>").text("Tom & Jerry <3").raw("</p>");
        assert_eq!(out.as_str(), "<p>Tom &amp; Jerry &lt;3</p>");
    }

    #[test]
    fn escaped_adapter_in_format_args() {
        let mut out = Markup::new();
        let _ = write!(out, "<a href=\"{}\">", Escaped("/search?q=\"cfd\""));
        assert_eq!(out.into_string(), "<a href=\"/search?q=&quot;cfd&quot;\">");
    }
}
