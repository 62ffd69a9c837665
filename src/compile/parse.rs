use crate::compile::lex::{Lexer, Token};
use crate::types::ast;
use crate::types::span::Span;
use crate::{Error, Result};

/// A parser that constructs the template items from the lexer's token
/// stream, parsing the body of every `{...}` block into an
/// [`ast::Expansion`].
pub struct Parser<'source> {
    /// A lexer that chunks the template source.
    tokens: Lexer<'source>,
}

impl<'source> Parser<'source> {
    /// Construct a new parser.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: Lexer::new(source),
        }
    }

    /// Parses a template.
    pub fn parse_template(mut self) -> Result<ast::Template<'source>> {
        let mut items = Vec::new();
        while let Some((tk, span)) = self.tokens.next() {
            let item = match tk {
                Token::Raw => ast::Item::Raw(span),
                Token::Block => ast::Item::Expansion(self.parse_expansion(span)?),
            };
            items.push(item);
        }
        Ok(ast::Template {
            source: self.source(),
            items,
        })
    }

    /// Parses the body of a `{...}` block.
    ///
    /// The body is either a variable list, e.g. `a,b=1`, or an operator
    /// followed by an argument and a variable list, e.g. `-join|&|a,b=1`.
    fn parse_expansion(&self, span: Span) -> Result<ast::Expansion<'source>> {
        let body = span.inner();
        let (op, arg, vars) = match self.split3(body, '|') {
            Some([op, arg, vars]) => (Some(op), Some(arg), vars),
            None if self.source()[body].contains('|') => {
                return Err(self.err_expected_operator(span));
            }
            None => (None, None, body),
        };

        let vars = self.parse_vars(vars)?;

        let operator = match op {
            Some(op) => Some(self.parse_operator(op, span)?),
            None => None,
        };

        if operator.is_none() && vars.len() != 1 {
            return Err(Error::syntax(
                "expected exactly one variable",
                self.source(),
                span,
            ));
        }

        Ok(ast::Expansion {
            operator,
            arg: arg.map(|arg| &self.source()[arg]),
            vars,
            span,
        })
    }

    /// Parses the operator token, e.g. `-join`.
    fn parse_operator(&self, op: Span, block: Span) -> Result<ast::Operator> {
        let token = &self.source()[op];
        let name = token
            .strip_prefix('-')
            .ok_or_else(|| self.err_expected_operator(block))?;
        ast::Operator::from_name(name).ok_or_else(|| {
            Error::syntax(format!("unexpected operator `{name}`"), self.source(), op)
        })
    }

    /// Parses a comma separated variable list, e.g. `a,b=1`.
    ///
    /// Variables keep the order in which they were first declared, a repeated
    /// name replaces the earlier default in place.
    fn parse_vars(&self, vars: Span) -> Result<Vec<ast::VarSpec<'source>>> {
        let mut specs: Vec<ast::VarSpec<'source>> = Vec::new();
        for var in self.split(vars, ',') {
            let spec = self.parse_var(var)?;
            match specs.iter_mut().find(|s| s.name == spec.name) {
                Some(existing) => existing.default = spec.default,
                None => specs.push(spec),
            }
        }
        Ok(specs)
    }

    /// Parses a single variable with an optional default, e.g. `b=1`.
    fn parse_var(&self, var: Span) -> Result<ast::VarSpec<'source>> {
        let token = &self.source()[var];
        let (name, default) = match token.find('=') {
            Some(i) => {
                let default = &token[i + 1..];
                if default.is_empty() {
                    return Err(self.err_invalid_variable(var));
                }
                (Span::from(var.m..var.m + i), Some(default))
            }
            None => (var, None),
        };
        if !is_var_name(&self.source()[name]) {
            return Err(self.err_invalid_variable(name));
        }
        Ok(ast::VarSpec {
            name: &self.source()[name],
            default,
        })
    }

    /// Splits the region of the source on `sep` returning the span of each
    /// part. There is always at least one part.
    fn split(&self, span: Span, sep: char) -> impl Iterator<Item = Span> + 'source {
        let mut m = span.m;
        self.source()[span].split(sep).map(move |part| {
            let s = Span::from(m..m + part.len());
            m = s.n + sep.len_utf8();
            s
        })
    }

    /// Splits the region of the source into exactly three parts, returning
    /// `None` if there are more or fewer.
    fn split3(&self, span: Span, sep: char) -> Option<[Span; 3]> {
        let mut parts = self.split(span, sep);
        let three = [parts.next()?, parts.next()?, parts.next()?];
        match parts.next() {
            Some(_) => None,
            None => Some(three),
        }
    }

    fn source(&self) -> &'source str {
        self.tokens.source
    }

    fn err_invalid_variable(&self, span: Span) -> Error {
        let token = &self.source()[span];
        Error::syntax(format!("invalid variable `{token}`"), self.source(), span)
    }

    fn err_expected_operator(&self, span: Span) -> Error {
        Error::syntax(
            "expected `-operator|argument|variables`",
            self.source(),
            span,
        )
    }
}

/// Whether the string is a valid variable name: an ASCII letter or digit
/// followed by any number of ASCII letters, digits or underscores.
fn is_var_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => chars.all(is_ident),
        _ => false,
    }
}

fn is_ident(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::ast::{Operator, VarSpec};

    #[test]
    fn parse_plain() {
        let exp = parse("c=1").unwrap();
        assert_eq!(exp.operator, None);
        assert_eq!(exp.arg, None);
        assert_eq!(exp.vars, [var("c", Some("1"))]);
    }

    #[test]
    fn parse_operator() {
        let exp = parse("-join|&|a,b,c=1").unwrap();
        assert_eq!(exp.operator, Some(Operator::Join));
        assert_eq!(exp.arg, Some("&"));
        assert_eq!(
            exp.vars,
            [var("a", None), var("b", None), var("c", Some("1"))]
        );
    }

    #[test]
    fn parse_empty_arg() {
        let exp = parse("-prefix||foo=wilma").unwrap();
        assert_eq!(exp.operator, Some(Operator::Prefix));
        assert_eq!(exp.arg, Some(""));
        assert_eq!(exp.vars, [var("foo", Some("wilma"))]);
    }

    #[test]
    fn parse_default_split_on_first_equals() {
        let exp = parse("a=b=c").unwrap();
        assert_eq!(exp.vars, [var("a", Some("b=c"))]);
    }

    #[test]
    fn parse_duplicate_var_keeps_position() {
        let exp = parse("-join|&|a,b,a=1").unwrap();
        assert_eq!(exp.vars, [var("a", Some("1")), var("b", None)]);
    }

    #[test]
    fn parse_all_operators() {
        for (name, op) in [
            ("opt", Operator::Opt),
            ("neg", Operator::Neg),
            ("listjoin", Operator::ListJoin),
            ("join", Operator::Join),
            ("prefix", Operator::Prefix),
            ("append", Operator::Append),
        ] {
            let exp = parse(&format!("-{name}|x|a")).unwrap();
            assert_eq!(exp.operator, Some(op));
        }
    }

    #[test]
    fn parse_var_names() {
        for name in ["a", "A", "0", "a_b", "a1", "9_"] {
            parse(name).unwrap();
        }
        for name in ["_a", "a-b", "f:", "f<", "<:", "a b", "é"] {
            let err = parse(name).unwrap_err();
            assert_eq!(err.reason(), format!("invalid variable `{name}`"));
        }
    }

    #[test]
    fn parse_err_empty_var() {
        let err = parse("-join|&|").unwrap_err();
        assert_eq!(err.reason(), "invalid variable ``");
        let err = parse("-join|&|a,,b").unwrap_err();
        assert_eq!(err.reason(), "invalid variable ``");
    }

    #[test]
    fn parse_err_empty_default() {
        let err = parse("fred=").unwrap_err();
        assert_eq!(err.reason(), "invalid variable `fred=`");
    }

    #[test]
    fn parse_err_invalid_name_with_default() {
        let err = parse("<:fred=1").unwrap_err();
        assert_eq!(err.reason(), "invalid variable `<:fred`");
    }

    #[test]
    fn parse_err_unknown_operator() {
        let err = parse("-unknown|&|a").unwrap_err();
        assert_eq!(err.reason(), "unexpected operator `unknown`");
        let err = parse("-|&|a").unwrap_err();
        assert_eq!(err.reason(), "unexpected operator ``");
    }

    #[test]
    fn parse_err_variables_checked_before_operator() {
        let err = parse("-unknown|&|a:").unwrap_err();
        assert_eq!(err.reason(), "invalid variable `a:`");
    }

    #[test]
    fn parse_err_operator_syntax() {
        for body in ["a|b", "-join|&|a|b", "join|&|a", "|&|a"] {
            let err = parse(body).unwrap_err();
            assert_eq!(err.reason(), "expected `-operator|argument|variables`");
        }
    }

    #[test]
    fn parse_err_plain_multiple_vars() {
        let err = parse("a,b").unwrap_err();
        assert_eq!(err.reason(), "expected exactly one variable");
    }

    #[test]
    fn parse_round_trip() {
        for body in [
            "foo",
            "foo=wilma",
            "-join|&|a,b=2,c",
            "-prefix||foo=wilma",
            "-listjoin|/|path",
            "-neg|&amp;|a,b",
        ] {
            let exp = parse(body).unwrap();
            let text = exp.to_string();
            assert_eq!(text, body);
            let again = parse(&text).unwrap();
            assert_eq!(again.operator, exp.operator);
            assert_eq!(again.arg, exp.arg);
            assert_eq!(again.vars, exp.vars);
        }
    }

    #[test]
    fn parse_round_trip_normalizes_duplicates() {
        let exp = parse("-join|&|a,b,a=1").unwrap();
        let text = exp.to_string();
        assert_eq!(text, "-join|&|a=1,b");
        let again = parse(&text).unwrap();
        assert_eq!(again.vars, exp.vars);
    }

    #[test]
    fn parse_template_items() {
        let source = "http://{host}/{-listjoin|/|path}";
        let template = Parser::new(source).parse_template().unwrap();
        assert_eq!(template.items.len(), 4);
        match &template.items[3] {
            ast::Item::Expansion(exp) => {
                assert_eq!(&source[exp.span], "{-listjoin|/|path}");
            }
            ast::Item::Raw(_) => panic!("expected expansion"),
        }
    }

    #[test]
    fn parse_error_span_points_at_token() {
        let source = "/x/{-join|&|a,b:,c}";
        let err = Parser::new(source).parse_template().unwrap_err();
        assert_eq!(err.to_string(), "invalid syntax: invalid variable `b:`");
    }

    fn var<'a>(name: &'a str, default: Option<&'a str>) -> VarSpec<'a> {
        VarSpec { name, default }
    }

    fn parse(body: &str) -> Result<ast::Expansion<'static>> {
        // Leak the wrapped source so the expansion can borrow from it.
        let source: &'static str = Box::leak(format!("{{{body}}}").into_boxed_str());
        let template = Parser::new(source).parse_template()?;
        match template.items.into_iter().next() {
            Some(ast::Item::Expansion(exp)) => Ok(exp),
            _ => panic!("expected a single expansion for `{body}`"),
        }
    }
}
