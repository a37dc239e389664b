//! Native definition format
//!
//! One INI section per token, named after the token; sections whose name
//! starts with a lowercase letter are reserved and skipped on read, which
//! makes them useful as palettes for `${palette:name}` interpolation.
//! Sections may use the short (`String`) or full (`Token.String`) name;
//! the writer always uses the full name so no token lands in a reserved
//! section.
//!
//! ```text
//! [palette]
//! red = #cc0000
//!
//! [String]
//! color = ${palette:red}
//! bold = true
//!
//! [String.Escape]
//! bgcolor = #eeeeee
//! inherit = false
//! ```
//!
//! Background and highlight colors are not stored in this format.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::ini::Ini;
use super::Format;
use crate::error::{Result, StyleError};
use crate::style::{normalize, SyntaxStyle, TokenStyle, TokenType};

/// Reader and writer for definition files
#[derive(Debug, Clone, Copy, Default)]
pub struct Definition;

impl Format for Definition {
    fn can_read(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        true
    }

    fn read(&self, input: &mut dyn BufRead) -> Result<SyntaxStyle> {
        let ini = Ini::read(input)?;
        let mut style = SyntaxStyle::new();

        for section in ini.sections() {
            let name = section.name();
            if is_reserved(name) {
                debug!(section = name, "skipping reserved section");
                continue;
            }

            let token = TokenType::parse(name)
                .map_err(|e| StyleError::malformed(section.line(), e.to_string()))?;
            if !token.is_standard() {
                warn!(token = %token, "non-standard token in definition file");
            }

            let token_style = read_token_style(&ini, name)?;
            debug!(token = %token, style = %token_style, "read section");
            style.insert(token, token_style);
        }

        Ok(style)
    }

    fn write(&self, out: &mut dyn Write, style: &SyntaxStyle) -> Result<()> {
        let mut entries: Vec<_> = style.styles().iter().collect();
        entries.sort_by_cached_key(|(token, _)| token.to_string());

        for (i, (token, ts)) in entries.into_iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "[{token}]")?;
            write_token_style(out, ts)?;
        }
        Ok(())
    }
}

/// Sections starting with a lowercase letter are not tokens
fn is_reserved(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

fn read_token_style(ini: &Ini, section: &str) -> Result<TokenStyle> {
    let mut ts = TokenStyle::new();
    ts.color = normalize(ini.get(section, "color")?.as_deref())?;

    // `background` is the older spelling of `bgcolor`
    let bgcolor = match ini.get(section, "bgcolor")? {
        Some(value) => Some(value),
        None => ini.get(section, "background")?,
    };
    ts.bgcolor = normalize(bgcolor.as_deref())?;
    ts.border = normalize(ini.get(section, "border")?.as_deref())?;

    ts.bold = ini.get_bool(section, "bold")?;
    ts.italic = ini.get_bool(section, "italic")?;
    ts.underline = ini.get_bool(section, "underline")?;
    ts.inherit = ini.get_bool(section, "inherit")?.unwrap_or(true);
    Ok(ts)
}

fn write_token_style(out: &mut dyn Write, ts: &TokenStyle) -> Result<()> {
    let colors = [("color", ts.color), ("bgcolor", ts.bgcolor), ("border", ts.border)];
    for (key, color) in colors {
        if let Some(color) = color {
            writeln!(out, "{key} = {color}")?;
        }
    }

    let switches = [("bold", ts.bold), ("italic", ts.italic), ("underline", ts.underline)];
    for (key, value) in switches {
        if let Some(value) = value {
            writeln!(out, "{key} = {value}")?;
        }
    }

    if !ts.inherit {
        writeln!(out, "inherit = false")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use std::io::Cursor;

    fn tok(name: &str) -> TokenType {
        TokenType::parse(name).unwrap()
    }

    fn read(contents: &str) -> Result<SyntaxStyle> {
        Definition.read(&mut Cursor::new(contents.as_bytes()))
    }

    fn write(style: &SyntaxStyle) -> String {
        let mut out = Vec::new();
        Definition.write(&mut out, style).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_read_sections() {
        let style = read(
            r#"
[meta]
author = someone

[palette]
red = #c00

[Token]
color = #000

[String]
color = ${palette:red}
bold = yes

[String.Escape]
bgcolor = #eee
border = #00f
italic = off
underline = 1
inherit = false
"#,
        )
        .unwrap();

        assert_eq!(style.styles().len(), 3);
        assert_eq!(style.get(&TokenType::ROOT).unwrap().color, Some(Color::rgb(0, 0, 0)));

        let string = style.get(&tok("String")).unwrap();
        assert_eq!(string.color, Some(Color::rgb(0xcc, 0, 0)));
        assert_eq!(string.bold, Some(true));
        assert!(string.inherit);

        let escape = style.get(&tok("String.Escape")).unwrap();
        assert_eq!(escape.serialize(), "noinherit noitalic underline bg:#eeeeee border:#0000ff");

        // Not persisted by this format
        assert_eq!(style.bgcolor, Color::WHITE);
        assert_eq!(style.hlcolor, Color::PALE_YELLOW);
    }

    #[test]
    fn test_read_background_alias() {
        let style = read("[Name]\nbackground = #123\n").unwrap();
        assert_eq!(style.get(&tok("Name")).unwrap().bgcolor, Some(Color::rgb(0x11, 0x22, 0x33)));
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(read("[String]\ncolor = red\n"), Err(StyleError::InvalidColor(_))));
        assert!(matches!(
            read("[String]\nbold = sometimes\n"),
            Err(StyleError::MalformedDefinition { .. })
        ));
        assert!(matches!(
            read("[String..Escape]\ncolor = #fff\n"),
            Err(StyleError::MalformedDefinition { line: 1, .. })
        ));
        assert!(matches!(read("color = #fff\n"), Err(StyleError::MalformedDefinition { .. })));
    }

    #[test]
    fn test_empty_section_dropped() {
        let style = read("[Keyword]\n[Name]\nbold = true\n").unwrap();
        assert!(style.get(&tok("Keyword")).is_none());
        assert!(style.get(&tok("Name")).is_some());
    }

    #[test]
    fn test_write_format() {
        let mut style = SyntaxStyle::new();
        style.insert(tok("String.Escape"), TokenStyle::parse("noinherit italic bg:#eee").unwrap());
        style.insert(tok("String"), TokenStyle::parse("#f00 bold nounderline").unwrap());
        style.insert(TokenType::ROOT, TokenStyle::parse("#000").unwrap());

        let expected = "\
[Token]
color = #000000

[Token.String]
color = #ff0000
bold = true
underline = false

[Token.String.Escape]
bgcolor = #eeeeee
italic = true
inherit = false
";
        assert_eq!(write(&style), expected);
    }

    #[test]
    fn test_round_trip() {
        let mut style = SyntaxStyle::new();
        style.insert(tok("String"), TokenStyle::new().with_color(Color::rgb(255, 0, 0)).with_bold(true));
        style.insert(tok("Comment"), TokenStyle::parse("italic #888 border:#f0f noinherit").unwrap());
        style.insert(tok("Name.Builtin"), TokenStyle::parse("nobold bg:#fff").unwrap());
        style.bgcolor = Color::rgb(0, 0, 0);

        let back = read(&write(&style)).unwrap();
        assert_eq!(back.styles(), style.styles());
        assert_eq!(back.get(&tok("String")), style.get(&tok("String")));
    }

    #[test]
    fn test_round_trip_unusual_tokens() {
        let bold = TokenStyle::new().with_bold(true);
        let tokens = [
            TokenType::ROOT.child("custom"),
            TokenType::ROOT.child("Token"),
            TokenType::ROOT.child("Token").child("Foo"),
            tok("String"),
        ];

        let mut style = SyntaxStyle::new();
        for token in &tokens {
            style.insert(token.clone(), bold);
        }

        let written = write(&style);
        assert!(written.contains("[Token.custom]\n"));
        assert!(written.contains("[Token.Token.Foo]\n"));

        let back = read(&written).unwrap();
        assert_eq!(back.styles(), style.styles());
        for token in &tokens {
            assert_eq!(back.get(token), Some(&bold), "{token} lost");
        }
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("palette"));
        assert!(!is_reserved("String"));
        assert!(!is_reserved("_meta"));
        assert!(!is_reserved(""));
    }
}
