//! Input and output formats
//!
//! Every format is a stateless strategy that can read a scheme, write one,
//! or both. Formats are collected into a [`FormatRegistry`] once at startup
//! and looked up by their canonical name.

mod definition;
mod ini;
mod preview;
mod pygments;
mod vim;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, StyleError};
use crate::style::SyntaxStyle;

pub use definition::Definition;
pub use ini::{Ini, Section};
pub use preview::Preview;
pub use pygments::Pygments;
pub use vim::{Vim, VIM_GROUPS};

/// A named scheme reader and/or writer
pub trait Format: Send + Sync {
    /// Full path of the implementing type
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Canonical name: the lowercased type name without its module path
    fn name(&self) -> String {
        canonical_name(self.type_name())
    }

    /// Whether [`Format::read`] is implemented
    fn can_read(&self) -> bool {
        false
    }

    /// Whether [`Format::write`] is implemented
    fn can_write(&self) -> bool {
        false
    }

    /// Read a scheme from a stream
    fn read(&self, _input: &mut dyn BufRead) -> Result<SyntaxStyle> {
        Err(StyleError::Unsupported {
            format: self.name(),
            operation: "read",
        })
    }

    /// Write a scheme to a stream
    fn write(&self, _out: &mut dyn Write, _style: &SyntaxStyle) -> Result<()> {
        Err(StyleError::Unsupported {
            format: self.name(),
            operation: "write",
        })
    }
}

/// Lowercased last path segment of a type name
pub fn canonical_name(type_name: &str) -> String {
    type_name
        .rsplit("::")
        .next()
        .unwrap_or(type_name)
        .to_lowercase()
}

/// Formats indexed by canonical name
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Build a registry.
    ///
    /// Fails if two formats share a canonical name; no registry is built
    /// in that case.
    pub fn new(formats: Vec<Box<dyn Format>>) -> Result<Self> {
        let mut map: BTreeMap<String, Box<dyn Format>> = BTreeMap::new();
        for format in formats {
            let name = format.name();
            if let Some(existing) = map.get(&name) {
                return Err(StyleError::DuplicateFormat {
                    first: existing.type_name().to_string(),
                    second: format.type_name().to_string(),
                });
            }
            debug!(format = %name, "registered format");
            map.insert(name, format);
        }
        Ok(Self { formats: map })
    }

    /// Registry of the formats shipped with this crate
    pub fn builtin(config: &Config) -> Result<Self> {
        Self::new(vec![
            Box::new(Definition),
            Box::new(Vim::new(&config.scheme_name, config.background)),
            Box::new(Pygments::new(&config.scheme_name)),
            Box::new(Preview),
        ])
    }

    /// Look up a format by name
    pub fn get(&self, name: &str) -> Option<&dyn Format> {
        self.formats.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    /// Look up a format by name, failing if it is not registered
    pub fn require(&self, name: &str) -> Result<&dyn Format> {
        self.get(name)
            .ok_or_else(|| StyleError::UnknownFormat(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    /// Number of registered formats
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
