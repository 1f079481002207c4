use crate::error;
use crate::lang::Error;
use crate::mach::{Engine, Frame, Val};

type Result<T> = std::result::Result<T, Error>;

pub fn install(e: &mut Engine) {
    // compare
    e.register(
        "==",
        |e| e.binary(|a, b| Ok(Frame::boolean(a.is_equal(b)))),
        "compare",
        "a b -- true if a equals b",
    );
    e.register(
        "!=",
        |e| e.binary(|a, b| Ok(Frame::boolean(!a.is_equal(b)))),
        "compare",
        "a b -- true if a differs from b",
    );
    e.register(
        "<",
        |e| e.binary(|a, b| Ok(Frame::boolean(a.is_less_than(b)))),
        "compare",
        "a b -- true if a is below b",
    );
    e.register(
        "<=",
        |e| e.binary(|a, b| Ok(Frame::boolean(a.is_less_than_or_equal(b)))),
        "compare",
        "a b -- true if a is not above b",
    );
    e.register(
        ">",
        |e| e.binary(|a, b| Ok(Frame::boolean(b.is_less_than(a)))),
        "compare",
        "a b -- true if a is above b",
    );
    e.register(
        ">=",
        |e| e.binary(|a, b| Ok(Frame::boolean(b.is_less_than_or_equal(a)))),
        "compare",
        "a b -- true if a is not below b",
    );

    // logic
    e.register(
        "and",
        |e| e.binary(|a, b| Ok(Frame::boolean(boolean(a)? && boolean(b)?))),
        "logic",
        "a b -- true if both are true",
    );
    e.register(
        "or",
        |e| e.binary(|a, b| Ok(Frame::boolean(boolean(a)? || boolean(b)?))),
        "logic",
        "a b -- true if either is true",
    );
    e.register(
        "not",
        |e| e.unary(|a| Ok(Frame::boolean(!boolean(a)?))),
        "logic",
        "a -- logical negation",
    );
}

fn boolean(frame: &Frame) -> Result<bool> {
    match frame.val() {
        Val::Bool(b) => Ok(*b),
        _ => Err(error!(ExpectedABoolean)),
    }
}
