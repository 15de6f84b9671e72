//! Inline style declarations
//!
//! Visibility of slides and steps is written straight into each element's
//! `style` attribute, the same way a page script sets `element.style.display`.

use std::fmt;

/// Values of the `display` property the navigator writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    /// CSS keyword
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }

    /// Parse a `display` keyword; other layouts are not modelled
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "block" => Some(Display::Block),
            "none" => Some(Display::None),
            _ => None,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self != Display::None
    }
}

impl From<bool> for Display {
    fn from(visible: bool) -> Self {
        if visible { Display::Block } else { Display::None }
    }
}

/// Parsed `style` attribute, declarations kept in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline style string into property-value pairs.
    ///
    /// Property names are lowercased; empty or malformed declarations are dropped.
    /// A `;` inside quotes or parentheses belongs to the value.
    pub fn parse(style: &str) -> Self {
        let declarations = split_declarations(style)
            .into_iter()
            .filter_map(|decl| {
                let (name, value) = decl.trim().split_once(':')?;
                let name = name.trim();
                let value = value.trim();
                if name.is_empty() || value.is_empty() {
                    return None;
                }
                Some((name.to_ascii_lowercase(), value.to_string()))
            })
            .collect();
        Self { declarations }
    }

    /// Get a property value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, replacing an existing declaration in place
    pub fn set(&mut self, name: &str, value: &str) {
        match self.declarations.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.declarations.push((name.to_string(), value.to_string())),
        }
    }

    /// The `display` declaration, if it holds a known keyword
    pub fn display(&self) -> Option<Display> {
        self.get("display").and_then(Display::parse)
    }

    pub fn set_display(&mut self, display: Display) {
        self.set("display", display.as_str());
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Split a declaration block on top-level semicolons
fn split_declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;

    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);
    parts
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_malformed() {
        let style = InlineStyle::parse("color: red;; bogus; :x; width:10px");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("width"), Some("10px"));
    }

    #[test]
    fn test_semicolons_inside_values_are_kept() {
        let mut style = InlineStyle::parse(
            r#"background: url('bg;v=2.png') no-repeat; content: "a;b"; mask: url(m.svg#x;y)"#,
        );
        assert_eq!(style.len(), 3);
        assert_eq!(style.get("background"), Some("url('bg;v=2.png') no-repeat"));
        assert_eq!(style.get("content"), Some(r#""a;b""#));

        style.set_display(Display::None);
        assert_eq!(
            style.to_string(),
            r#"background: url('bg;v=2.png') no-repeat; content: "a;b"; mask: url(m.svg#x;y); display: none;"#
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let style = InlineStyle::parse(r#"content: "say \"hi;\""; color: red"#);
        assert_eq!(style.get("content"), Some(r#""say \"hi;\"""#));
        assert_eq!(style.get("color"), Some("red"));
    }

    #[test]
    fn test_set_display_preserves_other_declarations() {
        let mut style = InlineStyle::parse("color: red; display: block; margin: 0");
        style.set_display(Display::None);
        assert_eq!(style.to_string(), "color: red; display: none; margin: 0;");
    }

    #[test]
    fn test_set_display_appends_when_missing() {
        let mut style = InlineStyle::new();
        style.set_display(Display::Block);
        assert_eq!(style.to_string(), "display: block;");
        assert_eq!(style.display(), Some(Display::Block));
    }

    #[test]
    fn test_display_keywords() {
        assert_eq!(Display::parse(" NONE "), Some(Display::None));
        assert_eq!(Display::parse("flex"), None);
        assert_eq!(Display::from(true), Display::Block);
        assert!(!Display::None.is_visible());
    }

    #[test]
    fn test_property_names_are_lowercased() {
        let style = InlineStyle::parse("DISPLAY: none");
        assert_eq!(style.display(), Some(Display::None));
    }
}
