//! Terminal preview of a scheme
//!
//! Prints one swatch per styled token using true-color escape sequences,
//! for eyeballing a scheme before installing it.

use std::io::Write;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle, StyledContent};
use unicode_width::UnicodeWidthStr;

use super::Format;
use crate::error::Result;
use crate::style::{Color, SyntaxStyle, TokenStyle, TokenType};

const SAMPLE: &str = " Sample text ";

/// Swatch writer for terminals
#[derive(Debug, Clone, Copy, Default)]
pub struct Preview;

impl Format for Preview {
    fn can_write(&self) -> bool {
        true
    }

    fn write(&self, out: &mut dyn Write, style: &SyntaxStyle) -> Result<()> {
        let root_color = style.resolve(&TokenType::ROOT).color;

        writeln!(
            out,
            "background {} {}   highlight {} {}",
            style.bgcolor,
            swatch(style.bgcolor),
            style.hlcolor,
            swatch(style.hlcolor)
        )?;
        writeln!(out)?;

        let names: Vec<String> = style.styles().keys().map(TokenType::short_name).collect();
        let width = names.iter().map(|n| n.width()).max().unwrap_or(0);

        for (name, ts) in names.iter().zip(style.styles().values()) {
            let sample = StyledContent::new(sample_style(ts, style.bgcolor, root_color), SAMPLE);
            let pad = " ".repeat(width - name.width());
            writeln!(out, "{name}{pad}  {sample}  {ts}")?;
        }
        Ok(())
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn swatch(color: Color) -> StyledContent<&'static str> {
    let mut cs = ContentStyle::new();
    cs.background_color = Some(term_color(color));
    StyledContent::new(cs, "    ")
}

fn sample_style(ts: &TokenStyle, bgcolor: Color, root_color: Option<Color>) -> ContentStyle {
    let mut cs = ContentStyle::new();
    cs.foreground_color = ts.color.or(root_color).map(term_color);
    cs.background_color = Some(term_color(ts.bgcolor.unwrap_or(bgcolor)));

    if ts.bold == Some(true) {
        cs.attributes.set(Attribute::Bold);
    }
    if ts.italic == Some(true) {
        cs.attributes.set(Attribute::Italic);
    }
    if ts.underline == Some(true) {
        cs.attributes.set(Attribute::Underlined);
    }
    if let Some(border) = ts.border {
        cs.underline_color = Some(term_color(border));
        cs.attributes.set(Attribute::Undercurled);
    }
    cs
}
