//! Expand URI Templates.
//!
//! A URI Template is a string containing `{...}` blocks that are replaced
//! with percent-encoded values. A block is either a single variable with an
//! optional default or an operator, an argument and a list of variables.
//!
//! ```text
//! {var}                      plain substitution
//! {var=default}              plain substitution with a default
//! {-opt|arg|a,b}             `arg` if any variable is defined
//! {-neg|arg|a,b}             `arg` if no variable is defined
//! {-prefix|arg|var}          `arg` followed by the value, if not empty
//! {-append|arg|var}          the value followed by `arg`, if not empty
//! {-join|arg|a,b=1}          `name=value` pairs separated by `arg`
//! {-listjoin|arg|list}       list elements separated by `arg`
//! ```
//!
//! A variable is "defined" if it is present in the values or has a default.
//! For `opt` and `neg` an empty list counts as undefined while an empty
//! string does not.
//!
//! # Getting started
//!
//! The simplest way to expand a template is the [`expand`] function which
//! takes any [`serde`] serializable map or struct.
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Context { host: &'static str, path: Vec<&'static str> }
//!
//! let ctx = Context { host: "example.com", path: vec!["a", "b"] };
//! let uri = uri_template::expand("http://{host}/{-listjoin|/|path}", &ctx)?;
//! assert_eq!(uri, "http://example.com/a/b");
//! # Ok::<(), uri_template::Error>(())
//! ```
//!
//! Values can also be constructed directly, using the [`values!`] macro or
//! [`Values`]' `From` impls, and passed to [`expand_from`].
//!
//! ```
//! let uri = uri_template::expand_from(
//!     "http://example.com/{foo}",
//!     &uri_template::values! { foo: "it worked" },
//! )?;
//! assert_eq!(uri, "http://example.com/it%20worked");
//! # Ok::<(), uri_template::Error>(())
//! ```
//!
//! # Compiling once
//!
//! If the same template is expanded many times it can be compiled once using
//! [`Template::compile`]. All syntax errors are reported at this point, the
//! compiled template can then be expanded any number of times.
//!
//! ```
//! use uri_template::{values, Template};
//!
//! let template = Template::compile("http://example.com/{p}?{-join|&|a,b,c}")?;
//!
//! let uri = template.expand_from(&values! { p: "foo", a: "1" });
//! assert_eq!(uri, "http://example.com/foo?a=1");
//!
//! let uri = template.expand_from(&values! { p: "bar", b: "2", c: "3" });
//! assert_eq!(uri, "http://example.com/bar?b=2&c=3");
//! # Ok::<(), uri_template::Error>(())
//! ```
//!
//! # Errors
//!
//! Invalid templates fail with an [`Error`] pointing at the offending token.
//! Use the alternate formatting `{:#}` for a pretty excerpt of the template.
//!
//! ```
//! let err = uri_template::Template::compile("{fred=}").unwrap_err();
//! assert_eq!(err.to_string(), "invalid syntax: invalid variable `fred=`");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod compile;
mod error;
mod expand;
mod macros;
mod types;
mod value;

pub use crate::error::Error;
#[cfg(feature = "serde")]
pub use crate::value::to_values;
pub use crate::value::{Value, Values};

use crate::types::ast;

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A compiled URI template.
#[derive(Debug, Clone)]
pub struct Template<'source> {
    template: ast::Template<'source>,
}

impl<'source> Template<'source> {
    /// Compile a template.
    ///
    /// Every `{...}` block is parsed and validated.
    #[inline]
    pub fn compile(source: &'source str) -> Result<Self> {
        let template = compile::template(source)?;
        Ok(Self { template })
    }

    /// Expand the template using the provided values.
    ///
    /// The values must serialize to a map or struct, see [`to_values`].
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[inline]
    pub fn expand<S>(&self, values: S) -> Result<String>
    where
        S: serde::Serialize,
    {
        Ok(self.expand_from(&to_values(values)?))
    }

    /// Expand the template using the provided [`Values`].
    #[inline]
    pub fn expand_from(&self, values: &Values) -> String {
        expand::template(&self.template, values)
    }

    /// Returns the original template source.
    #[inline]
    pub fn source(&self) -> &'source str {
        self.template.source
    }
}

/// Compile and expand a template in one go.
///
/// # Examples
///
/// ```
/// let uri = uri_template::expand(
///     "http://example.org/{a}{b}/{a_b}",
///     uri_template::values! { a: "foo", b: "bar", a_b: "baz" },
/// )?;
/// assert_eq!(uri, "http://example.org/foobar/baz");
/// # Ok::<(), uri_template::Error>(())
/// ```
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub fn expand<S>(source: &str, values: S) -> Result<String>
where
    S: serde::Serialize,
{
    Template::compile(source)?.expand(values)
}

/// Compile and expand a template in one go using the provided [`Values`].
pub fn expand_from(source: &str, values: &Values) -> Result<String> {
    Ok(Template::compile(source)?.expand_from(values))
}
