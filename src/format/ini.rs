//! INI-style definition file parser
//!
//! Format:
//! ```text
//! # comment
//! [palette]
//! red = #cc0000
//!
//! [String.Escape]
//! color = ${palette:red}
//! bold = yes
//! ```
//!
//! Keys are case-insensitive, section names are not. `${key}` and
//! `${section:key}` interpolate other values; `$$` is a literal `$`.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::error::{Result, StyleError};

/// Maximum nesting of `${...}` references
const MAX_INTERPOLATION_DEPTH: usize = 10;

/// A raw option value and the line it was defined on
#[derive(Debug, Clone)]
struct RawValue {
    value: String,
    line: usize,
}

/// One `[section]` of a definition file
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    line: usize,
    options: BTreeMap<String, RawValue>,
}

impl Section {
    /// Section name as written
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line the section header first appeared on
    pub fn line(&self) -> usize {
        self.line
    }
}

/// A parsed definition file
#[derive(Debug, Clone, Default)]
pub struct Ini {
    sections: Vec<Section>,
}

impl Ini {
    /// Read and parse a whole stream
    pub fn read(input: &mut dyn BufRead) -> Result<Self> {
        let mut contents = String::new();
        input.read_to_string(&mut contents)?;
        Self::parse(&contents)
    }

    /// Parse file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut ini = Ini::default();
        let mut current: Option<usize> = None;
        let mut last_key: Option<String> = None;

        for (idx, raw_line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();

            // Blank lines end any multi-line value
            if line.is_empty() {
                last_key = None;
                continue;
            }
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            // Indented line continues the previous value
            if raw_line.starts_with(char::is_whitespace) {
                if let (Some(sec), Some(key)) = (current, &last_key) {
                    if let Some(raw) = ini.sections[sec].options.get_mut(key) {
                        raw.value.push('\n');
                        raw.value.push_str(line);
                        continue;
                    }
                }
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| StyleError::malformed(line_no, format!("bad section header: {line}")))?;
                current = Some(ini.section_index_or_insert(name, line_no));
                last_key = None;
                continue;
            }

            let sec = current.ok_or_else(|| {
                StyleError::malformed(line_no, "option defined before any section header")
            })?;
            let (key, value) = split_option(line)
                .ok_or_else(|| StyleError::malformed(line_no, format!("expected key = value: {line}")))?;

            // Duplicate keys: last value wins
            ini.sections[sec].options.insert(
                key.clone(),
                RawValue {
                    value: value.to_string(),
                    line: line_no,
                },
            );
            last_key = Some(key);
        }

        Ok(ini)
    }

    fn section_index_or_insert(&mut self, name: &str, line: usize) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.name == name) {
            return idx;
        }
        self.sections.push(Section {
            name: name.to_string(),
            line,
            options: BTreeMap::new(),
        });
        self.sections.len() - 1
    }

    /// Sections in file order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Interpolated value of `key` in `section`
    pub fn get(&self, section: &str, key: &str) -> Result<Option<String>> {
        let key = key.to_lowercase();
        match self.section(section).and_then(|s| s.options.get(&key)) {
            Some(raw) => self.interpolate(section, raw, 0).map(Some),
            None => Ok(None),
        }
    }

    /// Boolean value of `key` in `section`
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        let Some(value) = self.get(section, key)? else {
            return Ok(None);
        };
        match parse_bool(&value) {
            Some(b) => Ok(Some(b)),
            None => {
                let line = self
                    .section(section)
                    .and_then(|s| s.options.get(&key.to_lowercase()))
                    .map_or(0, |raw| raw.line);
                Err(StyleError::malformed(
                    line,
                    format!("[{section}] {key}: not a boolean: {value}"),
                ))
            }
        }
    }

    fn interpolate(&self, section: &str, raw: &RawValue, depth: usize) -> Result<String> {
        if depth > MAX_INTERPOLATION_DEPTH {
            return Err(StyleError::malformed(
                raw.line,
                "interpolation nested too deeply",
            ));
        }

        let mut out = String::with_capacity(raw.value.len());
        let mut rest = raw.value.as_str();
        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos + 1..];

            if let Some(after) = rest.strip_prefix('$') {
                out.push('$');
                rest = after;
            } else if let Some(after) = rest.strip_prefix('{') {
                let end = after.find('}').ok_or_else(|| {
                    StyleError::malformed(raw.line, format!("unterminated reference in {}", raw.value))
                })?;
                let reference = &after[..end];
                rest = &after[end + 1..];

                let (ref_section, ref_key) = match reference.split_once(':') {
                    Some((s, k)) => (s, k),
                    None => (section, reference),
                };
                let target = self
                    .section(ref_section)
                    .and_then(|s| s.options.get(&ref_key.to_lowercase()))
                    .ok_or_else(|| {
                        StyleError::malformed(raw.line, format!("unknown reference ${{{reference}}}"))
                    })?;
                out.push_str(&self.interpolate(ref_section, target, depth + 1)?);
            } else {
                return Err(StyleError::malformed(
                    raw.line,
                    format!("'$' must be followed by '$' or '{{': {}", raw.value),
                ));
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Split `key = value` or `key: value` on the first delimiter
fn split_option(line: &str) -> Option<(String, &str)> {
    let pos = line.find(|c: char| c == '=' || c == ':')?;
    let key = line[..pos].trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_lowercase(), line[pos + 1..].trim()))
}

/// Parse a boolean literal
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
