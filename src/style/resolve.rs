//! Token hierarchy resolution
//!
//! Finds the nearest explicitly styled ancestor of a token. Styles along
//! the chain are not merged: a child's `bold` does not pick up its
//! parent's color. Generators rely on exactly this behaviour.

use super::syntax_style::StyleMap;
use super::token_style::TokenStyle;
use super::tokens::TokenType;

/// Resolve the effective style for `token`.
///
/// Walks from the token itself up to the root and returns the first style
/// found. Falls back to an empty style when even the root is unstyled.
pub fn resolve<'a>(styles: &'a StyleMap, token: &TokenType) -> &'a TokenStyle {
    token
        .ancestor_paths()
        .find_map(|path| styles.get(path))
        .unwrap_or(&TokenStyle::EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(name: &str) -> TokenType {
        TokenType::parse(name).unwrap()
    }

    fn sample() -> StyleMap {
        let mut styles = StyleMap::new();
        styles.insert(tok("String"), TokenStyle::parse("#ba2121").unwrap());
        styles.insert(TokenType::ROOT, TokenStyle::parse("#000").unwrap());
        styles
    }

    #[test]
    fn test_nearest_ancestor() {
        let styles = sample();
        assert_eq!(resolve(&styles, &tok("String.Escape")), &styles[&tok("String")]);
        assert_eq!(resolve(&styles, &tok("String.Double")), &styles[&tok("String")]);
        assert_eq!(resolve(&styles, &tok("String")), &styles[&tok("String")]);
    }

    #[test]
    fn test_root_fallback() {
        let styles = sample();
        assert_eq!(resolve(&styles, &tok("Keyword.Type")), &styles[&TokenType::ROOT]);
    }

    #[test]
    fn test_empty_when_root_missing() {
        let mut styles = sample();
        styles.remove(&TokenType::ROOT);
        assert!(resolve(&styles, &tok("Keyword")).is_empty());
    }

    #[test]
    fn test_no_merging() {
        let mut styles = sample();
        styles.insert(tok("String.Escape"), TokenStyle::parse("bold").unwrap());
        let resolved = resolve(&styles, &tok("String.Escape.Deep"));
        assert_eq!(resolved.bold, Some(true));
        assert_eq!(resolved.color, None);
    }
}
