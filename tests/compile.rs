use uri_template::{Error, Template};

#[test]
fn compile_empty() {
    Template::compile("").unwrap();
}

#[test]
fn compile_raw() {
    Template::compile("http://example.com/lorem/ipsum").unwrap();
}

#[test]
fn compile_expansions() {
    Template::compile("http://{host}/{-listjoin|/|path}{-opt|?|q}{-join|&|q,lang=en}")
        .unwrap();
}

#[test]
fn compile_all_operators() {
    for op in ["opt", "neg", "listjoin", "join", "prefix", "append"] {
        Template::compile(&format!("{{-{op}|&|foo}}")).unwrap();
    }
}

#[test]
fn compile_source() {
    let source = String::from("/users/{id}");
    let template = Template::compile(&source).unwrap();
    assert_eq!(template.source(), "/users/{id}");
}

#[test]
fn compile_err_empty_default() {
    let err = Template::compile("{fred=}").unwrap_err();
    assert_err(
        &err,
        "invalid variable `fred=`",
        "
   |
 1 | {fred=}
   |  ^^^^^ REASON
",
    );
}

#[test]
fn compile_err_invalid_variable() {
    let err = Template::compile("/x/{-join|&|a,b:}").unwrap_err();
    assert_err(
        &err,
        "invalid variable `b:`",
        "
   |
 1 | /x/{-join|&|a,b:}
   |               ^^ REASON
",
    );
}

#[test]
fn compile_err_multiline() {
    let err = Template::compile("a\n{b:}").unwrap_err();
    assert_err(
        &err,
        "invalid variable `b:`",
        "
   |
 2 | {b:}
   |  ^^ REASON
",
    );
}

#[test]
fn compile_err_unexpected_operator() {
    let err = Template::compile("{-wat|&|foo}").unwrap_err();
    assert_err(
        &err,
        "unexpected operator `wat`",
        "
   |
 1 | {-wat|&|foo}
   |  ^^^^ REASON
",
    );
}

#[test]
fn compile_err_operator_syntax() {
    let err = Template::compile("{a|b}").unwrap_err();
    assert_err(
        &err,
        "expected `-operator|argument|variables`",
        "
   |
 1 | {a|b}
   | ^^^^^ REASON
",
    );
}

#[test]
fn compile_err_operator_missing_dash() {
    let err = Template::compile("{join|&|a}").unwrap_err();
    assert_eq!(err.reason(), "expected `-operator|argument|variables`");
}

#[test]
fn compile_err_too_many_parts() {
    let err = Template::compile("{-join|&|a|b}").unwrap_err();
    assert_eq!(err.reason(), "expected `-operator|argument|variables`");
}

#[test]
fn compile_err_plain_multiple_variables() {
    let err = Template::compile("{a,b}").unwrap_err();
    assert_eq!(err.reason(), "expected exactly one variable");
}

#[test]
fn compile_err_empty_variable() {
    let err = Template::compile("{-join|&|}").unwrap_err();
    assert_eq!(err.reason(), "invalid variable ``");
}

#[test]
fn compile_err_underscore_prefix() {
    let err = Template::compile("{_foo}").unwrap_err();
    assert_eq!(err.reason(), "invalid variable `_foo`");
}

#[test]
fn compile_err_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Template::compile("{f<}").unwrap_err());
    assert_eq!(err.to_string(), "invalid syntax: invalid variable `f<`");
}

#[track_caller]
fn assert_err(err: &Error, reason: &str, pretty: &str) {
    let display = format!("invalid syntax: {reason}");
    let display_alt = format!("invalid syntax{}", pretty.replace("REASON", reason));
    assert_eq!(err.reason(), reason);
    assert_eq!(err.to_string(), display);
    assert_eq!(format!("{err:#}"), display_alt);
}
