//! Compile the template source into a sequence of items that can be expanded.
//!
//! This process has two stages:
//! - The lexer chunks the template source into raw text and `{...}` blocks.
//! - The parser parses the body of each block into an expansion, validating
//!   the operator and variables.

mod lex;
mod parse;

use crate::types::ast::Template;
use crate::Result;

/// Compile a template.
pub fn template(source: &str) -> Result<Template<'_>> {
    parse::Parser::new(source).parse_template()
}
