//! Token identifiers for syntax styles
//!
//! Tokens form a hierarchy rooted at `Token`: `String.Escape` is a child of
//! `String`, which is a child of the root. Styles are looked up by walking
//! that chain from the most specific name to the root.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StyleError};

/// Name of the root token
pub const ROOT_NAME: &str = "Token";

/// Standard token names understood by the upstream highlighter
pub const STANDARD_TOKENS: &[&str] = &[
    "Token",
    "Text",
    "Whitespace",
    "Escape",
    "Error",
    "Other",
    "Keyword",
    "Keyword.Constant",
    "Keyword.Declaration",
    "Keyword.Namespace",
    "Keyword.Pseudo",
    "Keyword.Reserved",
    "Keyword.Type",
    "Name",
    "Name.Attribute",
    "Name.Builtin",
    "Name.Builtin.Pseudo",
    "Name.Class",
    "Name.Constant",
    "Name.Decorator",
    "Name.Entity",
    "Name.Exception",
    "Name.Function",
    "Name.Function.Magic",
    "Name.Property",
    "Name.Label",
    "Name.Namespace",
    "Name.Other",
    "Name.Tag",
    "Name.Variable",
    "Name.Variable.Class",
    "Name.Variable.Global",
    "Name.Variable.Instance",
    "Name.Variable.Magic",
    "Literal",
    "Literal.Date",
    "String",
    "String.Affix",
    "String.Backtick",
    "String.Char",
    "String.Delimiter",
    "String.Doc",
    "String.Double",
    "String.Escape",
    "String.Heredoc",
    "String.Interpol",
    "String.Other",
    "String.Regex",
    "String.Single",
    "String.Symbol",
    "Number",
    "Number.Bin",
    "Number.Float",
    "Number.Hex",
    "Number.Integer",
    "Number.Integer.Long",
    "Number.Oct",
    "Operator",
    "Operator.Word",
    "Punctuation",
    "Comment",
    "Comment.Hashbang",
    "Comment.Multiline",
    "Comment.Preproc",
    "Comment.PreprocFile",
    "Comment.Single",
    "Comment.Special",
    "Generic",
    "Generic.Deleted",
    "Generic.Emph",
    "Generic.Error",
    "Generic.Heading",
    "Generic.Inserted",
    "Generic.Output",
    "Generic.Prompt",
    "Generic.Strong",
    "Generic.Subheading",
    "Generic.Traceback",
];

/// A hierarchical token identifier such as `String.Escape`
///
/// The root token has an empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenType {
    path: Vec<String>,
}

impl TokenType {
    /// The root token
    pub const ROOT: TokenType = TokenType { path: Vec::new() };

    /// Parse a token name.
    ///
    /// Accepts `Token`, `Token.String.Escape` and `String.Escape`. An empty
    /// name is the root.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() || name == ROOT_NAME {
            return Ok(Self::ROOT);
        }
        let rest = name
            .strip_prefix(ROOT_NAME)
            .and_then(|r| r.strip_prefix('.'))
            .unwrap_or(name);

        let path: Vec<String> = rest.split('.').map(str::to_string).collect();
        if path.iter().any(|segment| segment.is_empty()) {
            return Err(StyleError::InvalidToken(name.to_string()));
        }
        Ok(Self { path })
    }

    /// Build a child token
    pub fn child(&self, name: &str) -> Self {
        let mut path = self.path.clone();
        path.push(name.to_string());
        Self { path }
    }

    /// Whether this is the root token
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Path segments below the root
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// The parent token, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.path.split_last()?;
        Some(Self {
            path: parent.to_vec(),
        })
    }

    /// Ancestor paths from this token up to and including the root
    pub fn ancestor_paths(&self) -> impl Iterator<Item = &[String]> + '_ {
        (0..=self.path.len()).rev().map(move |n| &self.path[..n])
    }

    /// Ancestor tokens from this token up to and including the root
    pub fn ancestors(&self) -> impl Iterator<Item = TokenType> + '_ {
        self.ancestor_paths().map(|p| Self { path: p.to_vec() })
    }

    /// Name without the root prefix (`String.Escape`); the root is `Token`
    pub fn short_name(&self) -> String {
        if self.is_root() {
            ROOT_NAME.to_string()
        } else {
            self.path.join(".")
        }
    }

    /// Whether the upstream highlighter defines this token
    pub fn is_standard(&self) -> bool {
        STANDARD_TOKENS.contains(&self.short_name().as_str())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_NAME)?;
        for segment in &self.path {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for TokenType {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        TokenType::parse(s)
    }
}

impl Borrow<[String]> for TokenType {
    fn borrow(&self) -> &[String] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(name: &str) -> TokenType {
        TokenType::parse(name).unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert!(tok("").is_root());
        assert!(tok("Token").is_root());
        assert_eq!(tok("String.Escape"), tok("Token.String.Escape"));
        assert_eq!(tok("String.Escape"), TokenType::ROOT.child("String").child("Escape"));
        assert_eq!(tok("Tokenizer").segments(), ["Tokenizer".to_string()]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            TokenType::parse("String..Escape"),
            Err(StyleError::InvalidToken(_))
        ));
        assert!(TokenType::parse("String.").is_err());
        assert!(TokenType::parse(".String").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenType::ROOT.to_string(), "Token");
        assert_eq!(tok("Name.Builtin").to_string(), "Token.Name.Builtin");
        assert_eq!(tok("Name.Builtin").short_name(), "Name.Builtin");
        assert_eq!(TokenType::ROOT.short_name(), "Token");
    }

    #[test]
    fn test_ancestors() {
        let chain: Vec<String> = tok("String.Escape").ancestors().map(|t| t.to_string()).collect();
        assert_eq!(chain, ["Token.String.Escape", "Token.String", "Token"]);
        assert_eq!(TokenType::ROOT.ancestors().count(), 1);
        assert_eq!(tok("String.Escape").parent(), Some(tok("String")));
        assert_eq!(TokenType::ROOT.parent(), None);
    }

    #[test]
    fn test_ordering() {
        let mut tokens = vec![tok("String.Escape"), tok("Name"), tok("Token"), tok("String")];
        tokens.sort();
        let names: Vec<String> = tokens.iter().map(|t| t.short_name()).collect();
        assert_eq!(names, ["Token", "Name", "String", "String.Escape"]);
    }

    #[test]
    fn test_is_standard() {
        assert!(tok("String.Escape").is_standard());
        assert!(TokenType::ROOT.is_standard());
        assert!(!tok("String.Lolol").is_standard());
    }
}
