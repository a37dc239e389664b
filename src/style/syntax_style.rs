//! Complete syntax color schemes
//!
//! [`SyntaxStyle`] is the normalized scheme every format reads into and
//! writes from. [`ExternalStyle`] is the boundary shape of an upstream
//! style: colors and per-token attribute strings.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::color::{normalize, Color};
use super::resolve::resolve;
use super::token_style::TokenStyle;
use super::tokens::TokenType;
use crate::error::Result;

/// Mapping from token to its explicit style
pub type StyleMap = BTreeMap<TokenType, TokenStyle>;

/// A syntax highlighting color scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxStyle {
    /// Default background color
    pub bgcolor: Color,
    /// Current-line highlight color
    pub hlcolor: Color,
    styles: StyleMap,
}

impl Default for SyntaxStyle {
    fn default() -> Self {
        Self {
            bgcolor: Color::WHITE,
            hlcolor: Color::PALE_YELLOW,
            styles: StyleMap::new(),
        }
    }
}

impl SyntaxStyle {
    /// Create an empty scheme with default colors
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style for a token.
    ///
    /// Empty styles are not stored; inserting one removes any existing
    /// entry, leaving the token to inherit from its ancestors.
    pub fn insert(&mut self, token: TokenType, style: TokenStyle) {
        if style.is_empty() {
            self.styles.remove(&token);
        } else {
            self.styles.insert(token, style);
        }
    }

    /// Explicit style for a token, if any
    pub fn get(&self, token: &TokenType) -> Option<&TokenStyle> {
        self.styles.get(token)
    }

    /// All explicit styles, ordered by token
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Effective style for a token via the nearest styled ancestor
    pub fn resolve(&self, token: &TokenType) -> &TokenStyle {
        resolve(&self.styles, token)
    }

    /// Build a scheme from an upstream style.
    ///
    /// A source produced by [`SyntaxStyle::to_external`] hands back the
    /// scheme it came from. Otherwise every non-empty attribute string
    /// becomes a token style; empty ones are skipped.
    pub fn from_external(source: &ExternalStyle) -> Result<Self> {
        if let Some(origin) = &source.origin {
            return Ok(SyntaxStyle::clone(origin));
        }

        let mut style = SyntaxStyle::new();
        if let Some(bg) = normalize(Some(source.background_color.as_str()))? {
            style.bgcolor = bg;
        }
        if let Some(hl) = normalize(Some(source.highlight_color.as_str()))? {
            style.hlcolor = hl;
        }
        for (token, attrs) in &source.styles {
            if attrs.trim().is_empty() {
                continue;
            }
            style.insert(token.clone(), TokenStyle::parse(attrs)?);
        }
        Ok(style)
    }

    /// Convert to an upstream style carrying a back-reference to this scheme
    pub fn to_external(&self) -> ExternalStyle {
        ExternalStyle {
            background_color: self.bgcolor.to_string(),
            highlight_color: self.hlcolor.to_string(),
            styles: self
                .styles
                .iter()
                .map(|(token, ts)| (token.clone(), ts.serialize()))
                .collect(),
            origin: Some(Arc::new(self.clone())),
        }
    }
}

/// An upstream style source
#[derive(Debug, Clone, Default)]
pub struct ExternalStyle {
    /// Background color literal
    pub background_color: String,
    /// Highlight color literal
    pub highlight_color: String,
    /// Attribute string per token
    pub styles: BTreeMap<TokenType, String>,
    /// Scheme this source was converted from, if any
    pub origin: Option<Arc<SyntaxStyle>>,
}

impl ExternalStyle {
    /// Build a source from a table of `(token name, attribute string)` pairs
    pub fn from_table(background: &str, highlight: &str, table: &[(&str, &str)]) -> Result<Self> {
        let mut styles = BTreeMap::new();
        for (name, attrs) in table {
            styles.insert(TokenType::parse(name)?, attrs.to_string());
        }
        Ok(Self {
            background_color: background.to_string(),
            highlight_color: highlight.to_string(),
            styles,
            origin: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    fn tok(name: &str) -> TokenType {
        TokenType::parse(name).unwrap()
    }

    #[test]
    fn test_defaults() {
        let style = SyntaxStyle::new();
        assert_eq!(style.bgcolor.to_string(), "#ffffff");
        assert_eq!(style.hlcolor.to_string(), "#ffffcc");
        assert!(style.styles().is_empty());
    }

    #[test]
    fn test_from_external_skips_empty() {
        let source = ExternalStyle::from_table(
            "#272822",
            "#49483e",
            &[
                ("Token", "#f8f8f2"),
                ("Whitespace", ""),
                ("Name.Property", "   "),
                ("Text", "mono"),
                ("String", "#e6db74"),
                ("Generic.Emph", "italic"),
            ],
        )
        .unwrap();

        let style = SyntaxStyle::from_external(&source).unwrap();
        assert_eq!(style.bgcolor.to_string(), "#272822");
        assert_eq!(style.hlcolor.to_string(), "#49483e");
        assert_eq!(style.styles().len(), 3);
        assert!(style.get(&tok("Whitespace")).is_none());
        assert!(style.get(&tok("Text")).is_none());
        assert_eq!(style.get(&tok("Generic.Emph")).unwrap().italic, Some(true));
        assert!(style.styles().values().all(|ts| !ts.is_empty()));
    }

    #[test]
    fn test_from_external_empty_colors_keep_defaults() {
        let source = ExternalStyle::default();
        let style = SyntaxStyle::from_external(&source).unwrap();
        assert_eq!(style, SyntaxStyle::new());
    }

    #[test]
    fn test_from_external_errors() {
        let bad_color = ExternalStyle::from_table("white", "", &[]).unwrap();
        assert!(matches!(
            SyntaxStyle::from_external(&bad_color),
            Err(StyleError::InvalidColor(_))
        ));

        let bad_directive = ExternalStyle::from_table("", "", &[("String", "ansired")]).unwrap();
        assert!(matches!(
            SyntaxStyle::from_external(&bad_directive),
            Err(StyleError::UnrecognisedDirective(_))
        ));
    }

    #[test]
    fn test_external_round_trip() {
        let mut style = SyntaxStyle::new();
        style.bgcolor = Color::rgb(0, 0, 0);
        style.insert(tok("Keyword"), TokenStyle::parse("bold #008000").unwrap());

        let external = style.to_external();
        assert_eq!(external.background_color, "#000000");
        assert_eq!(external.styles[&tok("Keyword")], "bold #008000");
        assert!(external.origin.is_some());
        assert_eq!(SyntaxStyle::from_external(&external).unwrap(), style);

        // Without the back-reference the scheme is rebuilt from strings
        let detached = ExternalStyle {
            origin: None,
            ..external
        };
        assert_eq!(SyntaxStyle::from_external(&detached).unwrap(), style);
    }

    #[test]
    fn test_insert_empty_removes() {
        let mut style = SyntaxStyle::new();
        style.insert(tok("String"), TokenStyle::parse("#f00").unwrap());
        style.insert(tok("String"), TokenStyle::new());
        assert!(style.get(&tok("String")).is_none());
    }

    #[test]
    fn test_resolve_through_scheme() {
        let mut style = SyntaxStyle::new();
        style.insert(tok("String"), TokenStyle::parse("#f00").unwrap());
        assert_eq!(
            style.resolve(&tok("String.Escape")).color,
            Some(Color::rgb(255, 0, 0))
        );
        assert!(style.resolve(&tok("Name")).is_empty());
    }
}
