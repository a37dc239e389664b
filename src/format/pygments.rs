//! Pygments style class generator
//!
//! Writes a Python module defining a `pygments.style.Style` subclass, so a
//! scheme edited as a definition file can be installed back into Pygments.

use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Format;
use crate::error::Result;
use crate::style::{SyntaxStyle, TokenType};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Pygments style module writer
#[derive(Debug, Clone)]
pub struct Pygments {
    scheme_name: String,
}

impl Pygments {
    /// Create a writer for a named scheme
    pub fn new(scheme_name: &str) -> Self {
        Self {
            scheme_name: scheme_name.to_string(),
        }
    }

    /// Python class name derived from the scheme name, e.g. `solar-flare` -> `SolarFlareStyle`
    pub fn class_name(&self) -> String {
        let mut name: String = self
            .scheme_name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                    .unwrap_or_default()
            })
            .collect();
        if name.chars().next().map_or(true, |c| c.is_ascii_digit()) {
            name.insert_str(0, "Generated");
        }
        name + "Style"
    }
}

impl Format for Pygments {
    fn can_write(&self) -> bool {
        true
    }

    fn write(&self, out: &mut dyn Write, style: &SyntaxStyle) -> Result<()> {
        let external = style.to_external();
        let entries: Vec<(String, &String)> = external
            .styles
            .iter()
            .map(|(token, attrs)| (python_token(token), attrs))
            .collect();
        let needs_lookup = external.styles.keys().any(|token| !is_attribute_path(token));

        writeln!(out, "# Generated by colorport")?;
        writeln!(out, "from pygments.style import Style")?;
        if needs_lookup {
            writeln!(out, "from pygments.token import Token, string_to_tokentype")?;
        } else {
            writeln!(out, "from pygments.token import Token")?;
        }
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "class {}(Style):", self.class_name())?;
        writeln!(out, "    background_color = \"{}\"", external.background_color)?;
        writeln!(out, "    highlight_color = \"{}\"", external.highlight_color)?;
        writeln!(out)?;
        writeln!(out, "    styles = {{")?;
        for (token, attrs) in entries {
            writeln!(out, "        {token}: \"{attrs}\",")?;
        }
        writeln!(out, "    }}")?;
        Ok(())
    }
}

/// Whether every segment can be written as a Python attribute
fn is_attribute_path(token: &TokenType) -> bool {
    token.segments().iter().all(|s| IDENTIFIER.is_match(s))
}

fn python_token(token: &TokenType) -> String {
    if is_attribute_path(token) {
        token.to_string()
    } else {
        let name = token.to_string().replace('\\', "\\\\").replace('"', "\\\"");
        format!("string_to_tokentype(\"{name}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TokenStyle;

    fn tok(name: &str) -> TokenType {
        TokenType::parse(name).unwrap()
    }

    #[test]
    fn test_class_name() {
        assert_eq!(Pygments::new("colorport").class_name(), "ColorportStyle");
        assert_eq!(Pygments::new("solar-flare dark").class_name(), "SolarFlareDarkStyle");
        assert_eq!(Pygments::new("256").class_name(), "Generated256Style");
        assert_eq!(Pygments::new("").class_name(), "GeneratedStyle");
    }

    #[test]
    fn test_write_module() {
        let mut style = SyntaxStyle::new();
        style.insert(TokenType::ROOT, TokenStyle::parse("#000").unwrap());
        style.insert(tok("String.Escape"), TokenStyle::parse("bold #a00").unwrap());

        let mut out = Vec::new();
        Pygments::new("sample").write(&mut out, &style).unwrap();
        let expected = "\
# Generated by colorport
from pygments.style import Style
from pygments.token import Token


class SampleStyle(Style):
    background_color = \"#ffffff\"
    highlight_color = \"#ffffcc\"

    styles = {
        Token: \"#000000\",
        Token.String.Escape: \"bold #aa0000\",
    }
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_non_identifier_tokens() {
        let mut style = SyntaxStyle::new();
        style.insert(tok("Name.My Thing"), TokenStyle::parse("italic").unwrap());

        let mut out = Vec::new();
        Pygments::new("x").write(&mut out, &style).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("import Token, string_to_tokentype"));
        assert!(output.contains("string_to_tokentype(\"Token.Name.My Thing\"): \"italic\","));
    }
}
