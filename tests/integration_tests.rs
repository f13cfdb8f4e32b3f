//! End-to-end runs of the bundled demo scripts

use notjs::config::Config;
use notjs::interpreter::RuntimeError;
use notjs::{run_source, run_source_with};

fn run_demo(source: &str) -> String {
    let mut out = Vec::new();
    run_source(source, &mut out).expect("demo failed");
    String::from_utf8(out).expect("output is utf-8")
}

#[test]
fn closure_demo_prints_42() {
    assert_eq!(run_demo(include_str!("../demos/closure.js")), "42\n");
}

#[test]
fn list_demo_prints_each_element() {
    assert_eq!(run_demo(include_str!("../demos/list.js")), "1\n2\n3\n4\n");
}

#[test]
fn sum_demo_prints_10() {
    assert_eq!(run_demo(include_str!("../demos/sum.js")), "10\n");
}

#[test]
fn fib_demo_prints_75025() {
    assert_eq!(run_demo(include_str!("../demos/fib.js")), "75025\n");
}

#[test]
fn let_demo_prints_3() {
    assert_eq!(run_demo(include_str!("../demos/let.js")), "3\n");
}

#[test]
fn sum_of_empty_encoded_list_is_zero() {
    let source = r#"
        function sum(list) {
            return list === null ? 0 : first(list) + sum(second(list));
        }
        function first(p) { return p((a, b) => a); }
        function second(p) { return p((a, b) => b); }
        console.log(sum(null));
    "#;
    assert_eq!(run_demo(source), "0\n");
}

#[test]
fn parse_errors_surface_through_run_source() {
    let mut out = Vec::new();
    let err = run_source("function (", &mut out).unwrap_err();
    assert!(err.to_string().contains("expected"), "{err}");
}

fn countdown(depth: usize) -> String {
    format!(
        "function down(n) {{ return n === 0 ? 0 : 1 + down(n - 1); }} console.log(down({depth}));"
    )
}

#[test]
fn recursion_just_under_the_default_limit_succeeds() {
    let limit = Config::default().max_call_depth;
    // down(n) makes n + 1 nested calls
    let depth = limit - 1;
    assert_eq!(run_demo(&countdown(depth)), format!("{depth}\n"));
}

#[test]
fn recursion_past_the_default_limit_is_an_error() {
    let limit = Config::default().max_call_depth;
    let mut out = Vec::new();
    let err = run_source(&countdown(limit), &mut out).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RuntimeError>(),
        Some(RuntimeError::CallStackExceeded { limit: l, .. }) if *l == limit
    ));
}

#[test]
fn raised_limit_gets_a_matching_stack() {
    let config = Config::default().with_max_call_depth(2_000);
    let mut out = Vec::new();
    run_source_with(&countdown(1_500), &mut out, config).expect("deep recursion failed");
    assert_eq!(String::from_utf8(out).unwrap(), "1500\n");
}
