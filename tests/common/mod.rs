#![allow(dead_code)]

use rpn::lang::Error;
use rpn::mach::Engine;
use std::cell::RefCell;
use std::rc::Rc;

/// Evaluate `text` on a fresh engine and return the stack, top last.
pub fn run(text: &str) -> Vec<String> {
    run_in(&mut Engine::default(), text)
}

pub fn run_in(engine: &mut Engine, text: &str) -> Vec<String> {
    if let Err(error) = engine.eval(text) {
        panic!("{} failed:\n{}", text, error);
    }
    engine.stack_strings()
}

pub fn fail(engine: &mut Engine, text: &str) -> Error {
    match engine.eval(text) {
        Ok(()) => panic!("{} should have failed, stack {:?}", text, engine.stack_strings()),
        Err(error) => error,
    }
}

/// Route the print hook into a shared buffer.
pub fn capture(engine: &mut Engine) -> Rc<RefCell<Vec<String>>> {
    let out = Rc::new(RefCell::new(vec![]));
    let sink = out.clone();
    engine.set_print(move |s| sink.borrow_mut().push(s.to_string()));
    out
}
