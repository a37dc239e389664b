//! Per-token style attributes
//!
//! A [`TokenStyle`] is the delta one token applies on top of its parent in
//! the token hierarchy. Unset fields say nothing about the token; they are
//! not the same as an explicit `false`.
//!
//! The textual form is the upstream attribute string, e.g.
//! `"bold #f00 bg:#000 noinherit"`.

use std::fmt;
use std::str::FromStr;

use super::color::{normalize, Color};
use crate::error::{Result, StyleError};

/// Text style attributes for one token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenStyle {
    /// Whether the parent token's style applies underneath this one
    pub inherit: bool,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underlined text
    pub underline: Option<bool>,
    /// Foreground color
    pub color: Option<Color>,
    /// Background color
    pub bgcolor: Option<Color>,
    /// Border color (rendered as a special/undercurl color by editors)
    pub border: Option<Color>,
}

impl TokenStyle {
    /// A style with nothing set
    pub const EMPTY: TokenStyle = TokenStyle {
        inherit: true,
        bold: None,
        italic: None,
        underline: None,
        color: None,
        bgcolor: None,
        border: None,
    };

    /// Create an empty style
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Parse a style from an attribute string
    pub fn parse(style: &str) -> Result<Self> {
        let mut ts = Self::new();
        ts.apply(style)?;
        Ok(ts)
    }

    /// Apply an attribute string on top of this style.
    ///
    /// Directives are applied left to right; fields not mentioned keep their
    /// value. On error the style is left untouched.
    pub fn apply(&mut self, style: &str) -> Result<()> {
        let mut next = *self;
        for directive in style.split_whitespace() {
            match directive {
                "noinherit" => next.inherit = false,
                "bold" => next.bold = Some(true),
                "nobold" => next.bold = Some(false),
                "italic" => next.italic = Some(true),
                "noitalic" => next.italic = Some(false),
                "underline" => next.underline = Some(true),
                "nounderline" => next.underline = Some(false),
                // Font family hints mean nothing to an editor
                "roman" | "sans" | "mono" => {}
                _ => {
                    if let Some(value) = directive.strip_prefix("bg:") {
                        next.bgcolor = normalize(Some(value))?;
                    } else if let Some(value) = directive.strip_prefix("border:") {
                        next.border = normalize(Some(value))?;
                    } else if directive.starts_with('#') {
                        next.color = normalize(Some(directive))?;
                    } else {
                        return Err(StyleError::UnrecognisedDirective(directive.to_string()));
                    }
                }
            }
        }
        *self = next;
        Ok(())
    }

    /// Serialize to an attribute string.
    ///
    /// Only explicitly set fields are emitted, in the order
    /// inherit, bold, italic, underline, color, bgcolor, border.
    pub fn serialize(&self) -> String {
        let parts = [
            (!self.inherit).then(|| "noinherit".to_string()),
            switch(self.bold, "bold", "nobold"),
            switch(self.italic, "italic", "noitalic"),
            switch(self.underline, "underline", "nounderline"),
            self.color.map(|c| c.to_string()),
            self.bgcolor.map(|c| format!("bg:{c}")),
            self.border.map(|c| format!("border:{c}")),
        ];
        parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Set the foreground color from a literal; empty unsets it
    pub fn set_color(&mut self, value: &str) -> Result<()> {
        self.color = normalize(Some(value))?;
        Ok(())
    }

    /// Set the background color from a literal; empty unsets it
    pub fn set_bgcolor(&mut self, value: &str) -> Result<()> {
        self.bgcolor = normalize(Some(value))?;
        Ok(())
    }

    /// Set the border color from a literal; empty unsets it
    pub fn set_border(&mut self, value: &str) -> Result<()> {
        self.border = normalize(Some(value))?;
        Ok(())
    }

    /// Builder: set foreground color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: set background color
    pub fn with_bgcolor(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }
}

impl Default for TokenStyle {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for TokenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for TokenStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        TokenStyle::parse(s)
    }
}

fn switch(value: Option<bool>, if_true: &str, if_false: &str) -> Option<String> {
    value.map(|v| if v { if_true } else { if_false }.to_string())
}
