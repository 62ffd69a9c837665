//! Evaluation of a single expansion against the encoded values.

use std::borrow::Cow;

use crate::types::ast::{Expansion, Operator, VarSpec};
use crate::{Value, Values};

/// The resolved value of a variable, either from the values or from the
/// default declared in the template.
#[derive(Debug, Clone, Copy)]
enum Lookup<'a> {
    Str(&'a str),
    List(&'a [String]),
}

/// Returns the substitution text for the expansion.
pub fn expansion<'a>(exp: &'a Expansion<'_>, values: &'a Values) -> Cow<'a, str> {
    let arg = exp.arg.unwrap_or_default();
    match exp.operator {
        None => lookup(exp.first(), values)
            .map(Lookup::to_text)
            .unwrap_or_default(),
        Some(Operator::Opt) => when(opt(exp, values), arg),
        Some(Operator::Neg) => when(!opt(exp, values), arg),
        Some(Operator::ListJoin) => match lookup(exp.first(), values) {
            Some(Lookup::List(list)) => Cow::Owned(list.join(arg)),
            Some(Lookup::Str(s)) => Cow::Borrowed(s),
            None => Cow::Borrowed(""),
        },
        Some(Operator::Join) => {
            let pairs: Vec<_> = exp
                .vars
                .iter()
                .filter_map(|var| {
                    let value = lookup(var, values)?;
                    Some(format!("{}={}", var.name, value.to_text()))
                })
                .collect();
            Cow::Owned(pairs.join(arg))
        }
        Some(Operator::Prefix) => match non_empty(exp.first(), values) {
            Some(value) => Cow::Owned(format!("{arg}{value}")),
            None => Cow::Borrowed(""),
        },
        Some(Operator::Append) => match non_empty(exp.first(), values) {
            Some(value) => Cow::Owned(format!("{value}{arg}")),
            None => Cow::Borrowed(""),
        },
    }
}

/// Whether any declared variable is present and is not an empty list.
///
/// An empty string counts as present.
fn opt(exp: &Expansion<'_>, values: &Values) -> bool {
    exp.vars.iter().any(|var| match lookup(var, values) {
        Some(Lookup::Str(_)) => true,
        Some(Lookup::List(list)) => !list.is_empty(),
        None => false,
    })
}

fn when<'a>(cond: bool, arg: &'a str) -> Cow<'a, str> {
    Cow::Borrowed(if cond { arg } else { "" })
}

/// Returns the text of the variable unless it is missing or has length zero.
fn non_empty<'a>(var: &VarSpec<'a>, values: &'a Values) -> Option<Cow<'a, str>> {
    match lookup(var, values)? {
        Lookup::Str("") => None,
        Lookup::List([]) => None,
        value => Some(value.to_text()),
    }
}

fn lookup<'a>(var: &VarSpec<'a>, values: &'a Values) -> Option<Lookup<'a>> {
    match values.get(var.name) {
        Some(Value::String(s)) => Some(Lookup::Str(s)),
        Some(Value::List(list)) => Some(Lookup::List(list)),
        None => var.default.map(Lookup::Str),
    }
}

impl<'a> Lookup<'a> {
    /// Lists in a text position are joined with commas.
    fn to_text(self) -> Cow<'a, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::List(list) => Cow::Owned(list.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::compile;

    #[test]
    fn eval_plain() {
        assert_eq!(eval("{foo}", &Values::new()), "");
        assert_eq!(eval("{foo}", &Values::from([("foo", "barney")])), "barney");
        assert_eq!(eval("{foo=wilma}", &Values::new()), "wilma");
    }

    #[test]
    fn eval_plain_list() {
        assert_eq!(eval("{foo}", &Values::from([("foo", ["a", "b"])])), "a,b");
    }

    #[test]
    fn eval_opt_empty_string_is_present() {
        assert_eq!(eval("{-opt|&|foo}", &Values::from([("foo", "")])), "&");
        assert_eq!(eval("{-neg|&|foo}", &Values::from([("foo", "")])), "");
    }

    #[test]
    fn eval_opt_default_is_present() {
        assert_eq!(eval("{-opt|&|foo=1}", &Values::new()), "&");
        assert_eq!(eval("{-neg|&|foo=1}", &Values::new()), "");
    }

    #[test]
    fn eval_listjoin_scalar() {
        assert_eq!(eval("{-listjoin|/|foo}", &Values::from([("foo", "a")])), "a");
        assert_eq!(eval("{-listjoin|/|foo=x}", &Values::new()), "x");
    }

    #[test]
    fn eval_join_keeps_empty_string() {
        let values = Values::from([("a", "")]);
        assert_eq!(eval("{-join|&|a,b}", &values), "a=");
    }

    #[test]
    fn eval_join_declaration_order() {
        let values = Values::from([("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(eval("{-join|&|c,a,b}", &values), "c=3&a=1&b=2");
    }

    #[test]
    fn eval_join_list() {
        let values = Values::from([("a", ["x", "y"])]);
        assert_eq!(eval("{-join|&|a}", &values), "a=x,y");
    }

    #[test]
    fn eval_prefix_append_empty() {
        let values = Values::from([("a", Value::from("")), ("b", Value::List(vec![]))]);
        assert_eq!(eval("{-prefix|/|a}", &values), "");
        assert_eq!(eval("{-prefix|/|b}", &values), "");
        assert_eq!(eval("{-append|/|a}", &values), "");
        assert_eq!(eval("{-append|/|b}", &values), "");
    }

    #[test]
    fn eval_prefix_append_first_variable_only() {
        let values = Values::from([("b", "2")]);
        assert_eq!(eval("{-prefix|/|a,b}", &values), "");
        assert_eq!(eval("{-append|/|a,b}", &values), "");
    }

    #[test]
    fn eval_prefix_list() {
        let values = Values::from([("a", ["x", "y"])]);
        assert_eq!(eval("{-prefix|/|a}", &values), "/x,y");
    }

    #[track_caller]
    fn eval(source: &str, values: &Values) -> String {
        let template = compile::template(source).unwrap();
        match &template.items[..] {
            [crate::types::ast::Item::Expansion(exp)] => expansion(exp, values).into_owned(),
            _ => panic!("expected a single expansion"),
        }
    }
}
