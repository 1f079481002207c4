mod common;
use common::*;
use rpn::lang::ErrorCode;
use rpn::mach::{Engine, Frame, Quote};

#[test]
fn test_add() {
    let mut e = Engine::default();
    e.exec(&["2", "3", "+"]).unwrap();
    assert_eq!(e.stack_strings(), ["5"]);
}

#[test]
fn test_first_radix_wins() {
    let mut e = Engine::default();
    e.exec(&["5d", "2d", "+"]).unwrap();
    assert_eq!(e.stack_strings(), ["7d"]);
    assert_eq!(run("10x 10d +"), ["1ax"]);
    assert_eq!(run("10d 10x +"), ["26d"]);
}

#[test]
fn test_string_concatenation() {
    let mut e = Engine::default();
    e.exec(&["'foo'", "7", "+"]).unwrap();
    assert_eq!(e.stack_strings(), ["'foo7'"]);
    assert_eq!(run("7 {foo} +"), ["{7foo}"]);
    assert_eq!(run("'x' true +"), ["'xtrue'"]);
    assert_eq!(run("\"a\" 3d +"), ["\"a3d\""]);
}

#[test]
fn test_polar_reads_back() {
    let shown = run("3 deg 0.5 rad 4 grad");
    assert_eq!(shown, ["3@0deg", "0.5@0r", "4@0grad"]);
    assert_eq!(run(&shown.join(" ")), shown);
    assert_eq!(run("2@90deg 2i =="), ["true"]);
    assert_eq!(run("1+i deg str num 1+i =="), ["true"]);
}

#[test]
fn test_divide_by_zero_keeps_stack() {
    let mut e = Engine::default();
    let err = e.exec(&["5", "0", "/"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DivideByZero);
    assert_eq!(err.trace(), ["5 0 ->/<-"]);
    assert_eq!(e.stack_strings(), ["5", "0"]);
}

#[test]
fn test_variable_round_trip() {
    let mut e = Engine::default();
    e.exec(&["0", "x=", "$x"]).unwrap();
    assert_eq!(e.stack_strings(), ["0"]);
}

#[test]
fn test_macro() {
    let mut e = Engine::default();
    e.exec(&["'2 3 +'", "foo=", "@foo"]).unwrap();
    assert_eq!(e.stack_strings(), ["5"]);
}

#[test]
fn test_numeric_macro_is_a_constant() {
    assert_eq!(run("2.5 k= @k @k *"), ["6.25"]);
    assert_eq!(run("7x k= @k"), ["7x"]);
    let mut e = Engine::default();
    let err = fail(&mut e, "true k= @k");
    assert_eq!(err.code(), ErrorCode::ExpectedAString);
}

#[test]
fn test_bool_arithmetic() {
    let mut e = Engine::default();
    assert_eq!(fail(&mut e, "true 1 +").code(), ErrorCode::IllegalValue);
    assert_eq!(fail(&mut e, "clear 1 true -").code(), ErrorCode::ExpectedANumber);
    assert_eq!(e.stack_strings(), ["1", "true"]);
}

#[test]
fn test_clear_variable() {
    let mut e = Engine::default();
    run_in(&mut e, "1 x= x/");
    let err = fail(&mut e, "$x");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.detail(), "x");
    assert_eq!(fail(&mut e, "x/").code(), ErrorCode::NotFound);
}

#[test]
fn test_lone_equals_and_slash_are_not_assignments() {
    let mut e = Engine::new(8);
    assert_eq!(fail(&mut e, "=").code(), ErrorCode::Syntax);
    assert_eq!(fail(&mut e, "/").code(), ErrorCode::Syntax);
}

#[test]
fn test_assign_empty_stack() {
    let mut e = Engine::default();
    assert_eq!(fail(&mut e, "x=").code(), ErrorCode::StackEmpty);
}

#[test]
fn test_stack_full() {
    let mut e = Engine::new(2);
    e.exec(&["1", "2"]).unwrap();
    let err = e.exec(&["3"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::StackFull);
    assert_eq!(e.stack_strings(), ["1", "2"]);
}

#[test]
fn test_nested_trace() {
    let mut e = Engine::default();
    let err = fail(&mut e, "'1 bogus' m= 5 @m");
    assert_eq!(err.code(), ErrorCode::Syntax);
    assert_eq!(err.trace(), ["1 ->bogus<-", "'1 bogus' m= 5 ->@m<-"]);
    assert_eq!(
        err.to_string(),
        "SYNTAX ERROR; NOT A NUMBER\n  IN 1 ->bogus<-\n  IN '1 bogus' m= 5 ->@m<-"
    );
    assert_eq!(e.stack_strings(), ["5", "1"]);
}

#[test]
fn test_tokenizer_error_from_eval() {
    let mut e = Engine::default();
    let err = fail(&mut e, "1 'oops");
    assert_eq!(err.code(), ErrorCode::Syntax);
    assert!(err.trace().is_empty());
    assert_eq!(e.stack_len(), 0);
}

#[test]
fn test_based_literal_error_surfaces_parse_error() {
    let mut e = Engine::default();
    let err = fail(&mut e, "19o");
    assert_eq!(err.code(), ErrorCode::Syntax);
    assert_eq!(err.detail(), "invalid digit found in string");
}

#[test]
fn test_host_operator_overrides_builtin() {
    let mut e = Engine::default();
    e.register(
        "+",
        |e| {
            let (a, b) = e.pop_two_numbers()?;
            let sum = a.to_complex() + b.to_complex();
            e.push_frame(Frame::complex(sum).with_note("host"))
        },
        "host",
        "a b -- host sum",
    );
    assert_eq!(run_in(&mut e, "1d 2d +"), ["3 host"]);
    assert_eq!(e.registry().help("+"), Some("a b -- host sum"));
}

#[test]
fn test_host_configuration_variables() {
    let mut e = Engine::default();
    run_in(&mut e, "'1 2 3 4' .plotwin= 3+4i .origin=");
    assert_eq!(e.get_string_variable(".plotwin").unwrap(), "1 2 3 4");
    let origin = e.get_complex_variable(".origin").unwrap();
    assert_eq!((origin.re, origin.im), (3.0, 4.0));
    assert_eq!(
        e.get_string_variable(".origin").unwrap_err().code(),
        ErrorCode::ExpectedAString
    );
    assert_eq!(
        e.get_complex_variable(".plotwin").unwrap_err().code(),
        ErrorCode::ExpectedAComplexNumber
    );
    assert_eq!(
        e.get_variable(".missing").unwrap_err().code(),
        ErrorCode::NotFound
    );
}

#[test]
fn test_macro_scope_locals() {
    let mut e = Engine::default();
    let body = "scope n= $n $n * $outer + endscope";
    e.set_variable("sqplus", Frame::string(body, Quote::Single))
        .unwrap();
    run_in(&mut e, "10 outer= 1 n= 3 @sqplus $n");
    assert_eq!(e.stack_strings(), ["19", "1"]);
}

#[test]
fn test_interrupt_stops_loop() {
    let mut e = Engine::default();
    let mut polls = 0;
    e.set_interrupt(move || {
        polls += 1;
        polls > 50
    });
    let err = fail(&mut e, "0 'true' '1 +' while");
    assert!(err.is_interrupt());
    assert_eq!(err.code(), ErrorCode::Interrupted);
}

#[test]
fn test_print_and_input_hooks() {
    let mut e = Engine::default();
    let out = capture(&mut e);
    let mut answers = vec!["2".to_string(), "3".to_string()].into_iter();
    e.set_input(move || Ok(answers.next().unwrap_or_default()));
    run_in(&mut e, "input num input num * print 'done' print");
    assert_eq!(*out.borrow(), ["6", "done"]);
    assert_eq!(e.stack_len(), 0);
}

#[test]
fn test_vars_prints_visible_names() {
    let mut e = Engine::default();
    let out = capture(&mut e);
    run_in(&mut e, "1 b= 'x' a= scope 2 b= vars");
    assert_eq!(*out.borrow(), ["a = 'x'", "b = 2"]);
}
