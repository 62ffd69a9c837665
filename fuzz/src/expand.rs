#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use uri_template::{Template, Value, Values};

#[derive(Debug, Arbitrary)]
enum Input {
    String(String),
    List(Vec<String>),
}

fuzz_target!(|data: (&str, Vec<(String, Input)>)| {
    let (source, entries) = data;
    let template = match Template::compile(source) {
        Ok(template) => template,
        Err(_) => return,
    };
    let values: Values = entries
        .into_iter()
        .map(|(name, input)| match input {
            Input::String(s) => (name, Value::String(s)),
            Input::List(list) => (name, Value::List(list)),
        })
        .collect();
    let _ = template.expand_from(&values);
});
