//! Vim colorscheme generator
//!
//! Produces a script for `~/.vim/colors/`, targeting GUI (and termguicolors)
//! attributes only.

use std::io::Write;

use tracing::debug;

use super::Format;
use crate::config::Background;
use crate::error::Result;
use crate::style::{SyntaxStyle, TokenStyle, TokenType};

/// Token to Vim highlight group table, in output order
pub const VIM_GROUPS: &[(&str, &[&str])] = &[
    ("Token", &["Normal"]),
    ("Comment", &["Comment"]),
    ("Comment.Preproc", &["PreProc", "Include", "Define", "Macro"]),
    ("Comment.Special", &["SpecialComment", "Todo"]),
    ("Keyword", &["Keyword", "Statement", "Conditional", "Repeat"]),
    ("Keyword.Constant", &["Boolean"]),
    ("Keyword.Declaration", &["StorageClass"]),
    ("Keyword.Type", &["Type", "Typedef"]),
    ("Name", &["Identifier", "Function", "Label"]),
    ("Name.Builtin", &["Special"]),
    ("Name.Class", &["Structure"]),
    ("Name.Constant", &["Constant"]),
    ("Name.Exception", &["Exception"]),
    ("Name.Tag", &["Tag"]),
    ("Number", &["Number"]),
    ("Number.Float", &["Float"]),
    ("String", &["String"]),
    ("String.Char", &["Character"]),
    ("String.Escape", &["SpecialChar"]),
    ("Operator", &["Operator"]),
    ("Punctuation", &["Delimiter"]),
    ("Error", &["Error"]),
    ("Generic.Deleted", &["DiffDelete"]),
    ("Generic.Inserted", &["DiffAdd"]),
    ("Generic.Heading", &["Title"]),
    ("Generic.Error", &["ErrorMsg"]),
];

/// Vim colorscheme writer
#[derive(Debug, Clone)]
pub struct Vim {
    scheme_name: String,
    background: Background,
}

impl Vim {
    /// Create a writer for a named scheme
    pub fn new(scheme_name: &str, background: Background) -> Self {
        Self {
            scheme_name: scheme_name.to_string(),
            background,
        }
    }
}

impl Default for Vim {
    fn default() -> Self {
        Self::new("colorport", Background::Auto)
    }
}

impl Format for Vim {
    fn can_write(&self) -> bool {
        true
    }

    fn write(&self, out: &mut dyn Write, style: &SyntaxStyle) -> Result<()> {
        writeln!(out, "set background={}", self.background.resolve(style.bgcolor))?;
        writeln!(out, "hi clear")?;
        writeln!(out, "if exists(\"syntax_on\")")?;
        writeln!(out, "    syntax reset")?;
        writeln!(out, "endif")?;
        writeln!(out, "let g:colors_name=\"{}\"", vim_string(&self.scheme_name))?;
        writeln!(out)?;

        writeln!(out, "hi Normal guibg={}", style.bgcolor)?;
        writeln!(out, "hi CursorLine guibg={}", style.hlcolor)?;
        writeln!(out)?;

        for (name, groups) in VIM_GROUPS {
            let token = TokenType::parse(name)?;
            let attrs = highlight_attrs(style.resolve(&token));
            if attrs.is_empty() {
                debug!(token = %token, "nothing to emit");
                continue;
            }

            writeln!(out, "\" {token}")?;
            for group in *groups {
                writeln!(out, "hi {group} {attrs}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Escape text for a double-quoted Vim string
fn vim_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Build the `guifg=.. guibg=.. guisp=.. gui=..` clause for a style
fn highlight_attrs(ts: &TokenStyle) -> String {
    let mut attrs = Vec::new();
    if let Some(fg) = ts.color {
        attrs.push(format!("guifg={fg}"));
    }
    if let Some(bg) = ts.bgcolor {
        attrs.push(format!("guibg={bg}"));
    }

    let mut gui: Vec<&str> = [
        ("bold", ts.bold),
        ("italic", ts.italic),
        ("underline", ts.underline),
    ]
    .into_iter()
    .filter(|(_, value)| *value == Some(true))
    .map(|(flag, _)| flag)
    .collect();

    if let Some(sp) = ts.border {
        attrs.push(format!("guisp={sp}"));
        gui.push("undercurl");
    }
    if !gui.is_empty() {
        attrs.push(format!("gui={}", gui.join(",")));
    }
    attrs.join(" ")
}
