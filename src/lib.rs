//! colorport - syntax highlighting color scheme conversion
//!
//! Schemes are held as a [`SyntaxStyle`]: background and highlight colors
//! plus per-token [`TokenStyle`] deltas. A style comes from an upstream
//! [`ExternalStyle`] or from a definition file, and is written out through
//! any registered [`Format`].
//!
//! ```no_run
//! use colorport::{builtin, Config, Format, FormatRegistry, SyntaxStyle};
//!
//! let registry = FormatRegistry::builtin(&Config::default())?;
//! let style = SyntaxStyle::from_external(&builtin::find("monokai")?)?;
//! registry.require("vim")?.write(&mut std::io::stdout(), &style)?;
//! # Ok::<(), colorport::StyleError>(())
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod format;
pub mod style;

pub use config::{Background, Config};
pub use error::{Result, StyleError};
pub use format::{Format, FormatRegistry};
pub use style::{Color, ExternalStyle, SyntaxStyle, TokenStyle, TokenType};
