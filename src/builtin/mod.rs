//! Built-in styles
//!
//! A small catalogue of upstream styles, kept as the attribute strings the
//! upstream highlighter uses so they go through the same conversion as any
//! other external source.

mod default;
mod monokai;

use crate::error::{Result, StyleError};
use crate::style::ExternalStyle;

/// A named upstream style kept as static data
#[derive(Debug, Clone, Copy)]
pub struct BuiltinStyle {
    pub name: &'static str,
    pub background: &'static str,
    pub highlight: &'static str,
    pub styles: &'static [(&'static str, &'static str)],
}

impl BuiltinStyle {
    /// Convert to an external style source
    pub fn to_external(&self) -> Result<ExternalStyle> {
        ExternalStyle::from_table(self.background, self.highlight, self.styles)
    }
}

/// Get all built-in styles
pub fn all_styles() -> Vec<BuiltinStyle> {
    vec![default::default_style(), monokai::monokai_style()]
}

/// Names of the built-in styles, sorted
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = all_styles().iter().map(|s| s.name).collect();
    names.sort_unstable();
    names
}

/// Look up a built-in style by name
pub fn find(name: &str) -> Result<ExternalStyle> {
    all_styles()
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| StyleError::UnknownStyle(name.to_string()))?
        .to_external()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SyntaxStyle, TokenType};

    #[test]
    fn test_all_builtin_styles_convert() {
        for builtin in all_styles() {
            let external = builtin.to_external().unwrap();
            let style = SyntaxStyle::from_external(&external).unwrap();
            assert!(!style.styles().is_empty(), "{} is empty", builtin.name);
            assert!(style.styles().values().all(|ts| !ts.is_empty()));
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(names(), ["default", "monokai"]);
        let monokai = SyntaxStyle::from_external(&find("monokai").unwrap()).unwrap();
        assert_eq!(monokai.bgcolor.to_string(), "#272822");
        // Empty upstream entries are dropped
        assert!(monokai.get(&TokenType::parse("Whitespace").unwrap()).is_none());
        assert!(matches!(find("nope"), Err(StyleError::UnknownStyle(_))));
    }
}
