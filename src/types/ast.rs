//! Defines the compiled form of a URI template.
//!
//! A URI template has no nesting so the "tree" is flat: a sequence of raw
//! text items and expansions, each expansion holding the parsed contents of
//! one `{...}` block.

use std::fmt;

use crate::types::span::Span;

#[derive(Debug, Clone)]
pub struct Template<'source> {
    pub source: &'source str,
    pub items: Vec<Item<'source>>,
}

#[derive(Debug, Clone)]
pub enum Item<'source> {
    /// Literal template text, emitted unchanged.
    Raw(Span),
    /// A `{...}` block.
    Expansion(Expansion<'source>),
}

/// The parsed contents of a single `{...}` block.
#[derive(Debug, Clone)]
pub struct Expansion<'source> {
    /// `None` means plain substitution.
    pub operator: Option<Operator>,
    /// Always `Some` when there is an operator, possibly empty.
    pub arg: Option<&'source str>,
    /// Declared variables in order of first appearance.
    pub vars: Vec<VarSpec<'source>>,
    /// The span of the entire block including the braces.
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSpec<'source> {
    pub name: &'source str,
    pub default: Option<&'source str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Opt,
    Neg,
    ListJoin,
    Join,
    Prefix,
    Append,
}

impl Operator {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "opt" => Some(Self::Opt),
            "neg" => Some(Self::Neg),
            "listjoin" => Some(Self::ListJoin),
            "join" => Some(Self::Join),
            "prefix" => Some(Self::Prefix),
            "append" => Some(Self::Append),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Opt => "opt",
            Self::Neg => "neg",
            Self::ListJoin => "listjoin",
            Self::Join => "join",
            Self::Prefix => "prefix",
            Self::Append => "append",
        }
    }
}

impl<'source> Expansion<'source> {
    /// Returns the first declared variable.
    pub fn first(&self) -> &VarSpec<'source> {
        // The parser never produces an expansion without variables.
        &self.vars[0]
    }
}

/// Writes the expansion back out in block body form, i.e. without braces.
impl fmt::Display for Expansion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(op) = self.operator {
            write!(f, "-{}|{}|", op.name(), self.arg.unwrap_or_default())?;
        }
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{var}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VarSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.default {
            Some(default) => write!(f, "{}={}", self.name, default),
            None => f.write_str(self.name),
        }
    }
}
