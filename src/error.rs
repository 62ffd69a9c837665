use std::cmp::max;
use std::fmt;

use crate::types::span::Span;

/// An error that can occur while compiling a template or converting values.
///
/// Syntax errors carry the template source and the span of the offending
/// token. The alternate formatting (`{:#}`) renders a pretty excerpt of the
/// template pointing at the problem.
#[derive(Clone)]
pub struct Error {
    msg: String,
    span: Option<(String, Span)>,
}

impl Error {
    /// Construct a new syntax error pointing at a region of the source.
    pub(crate) fn syntax(msg: impl Into<String>, source: &str, span: impl Into<Span>) -> Self {
        assert!(!source.is_empty(), "source must be populated");
        Self {
            msg: msg.into(),
            span: Some((source.to_string(), span.into())),
        }
    }

    /// Construct a new error without a source location.
    #[cfg(feature = "serde")]
    pub(crate) fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            span: None,
        }
    }

    /// Returns the reason for the error without any location information.
    pub fn reason(&self) -> &str {
        &self.msg
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::message(msg.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => fmt_pretty(&self.msg, source, *span, f),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => {
                if f.alternate() {
                    write!(f, "invalid syntax")?;
                    fmt_pretty(&self.msg, source, *span, f)
                } else {
                    write!(f, "invalid syntax: {}", self.msg)
                }
            }
            None => write!(f, "{}", self.msg),
        }
    }
}

fn fmt_pretty(msg: &str, source: &str, span: Span, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines: Vec<_> = source.split_terminator('\n').collect();
    let (line, col) = to_line_col(&lines, span.m);
    let width = max(1, width(&source[span]));
    let code = lines
        .get(line)
        .or_else(|| lines.last())
        .copied()
        .unwrap_or_default();

    let num = (line + 1).to_string();
    let pad = num.len();
    let pipe = "|";
    let underline = "^".repeat(width);

    write!(
        f,
        "\n \
        {0:pad$} {pipe}\n \
        {num:>} {pipe} {code}\n \
        {0:pad$} {pipe} {underline:>width$} {msg}\n",
        "",
        pad = pad,
        pipe = pipe,
        num = num,
        code = code,
        underline = underline,
        width = col + width,
        msg = msg
    )
}

fn to_line_col(lines: &[&str], offset: usize) -> (usize, usize) {
    let mut n = 0;
    for (i, line) in lines.iter().enumerate() {
        let len = line.len() + 1;
        if n + len > offset {
            return (i, width(&line[..offset - n]));
        }
        n += len;
    }
    (lines.len(), lines.last().map(|l| width(l)).unwrap_or(0))
}

#[cfg(feature = "unicode")]
fn width(s: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(s)
}

#[cfg(not(feature = "unicode"))]
fn width(s: &str) -> usize {
    s.chars().count()
}
