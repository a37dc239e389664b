//! Style model
//!
//! This module provides the normalized representation of a color scheme:
//! - Colors and their canonical form
//! - Per-token styles and their attribute-string syntax
//! - Token identifiers and hierarchy resolution
//! - Complete schemes and the upstream style boundary

mod color;
mod resolve;
mod syntax_style;
mod token_style;
mod tokens;

pub use color::{normalize, Color};
pub use resolve::resolve;
pub use syntax_style::{ExternalStyle, StyleMap, SyntaxStyle};
pub use token_style::TokenStyle;
pub use tokens::{TokenType, ROOT_NAME, STANDARD_TOKENS};
