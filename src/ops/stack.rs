use crate::error;
use crate::mach::{Engine, Frame, Radix};

pub fn install(e: &mut Engine) {
    e.register(
        "dup",
        |e| {
            e.stack().require(1)?;
            let top = e.peek_frame(0)?.clone();
            e.push_frame(top)
        },
        "stack",
        "a -- a a",
    );
    e.register("drop", |e| e.drop_frames(1), "stack", "a --");
    e.register(
        "swap",
        |e| {
            let (a, b) = e.pop_two_frames()?;
            e.push_frame(b)?;
            e.push_frame(a)
        },
        "stack",
        "a b -- b a",
    );
    e.register(
        "over",
        |e| {
            e.stack().require(2)?;
            let second = e.peek_frame(1)?.clone();
            e.push_frame(second)
        },
        "stack",
        "a b -- a b a",
    );
    e.register(
        "rot",
        |e| {
            e.stack().require(3)?;
            let c = e.pop_frame()?;
            let (a, b) = e.pop_two_frames()?;
            e.push_frame(b)?;
            e.push_frame(c)?;
            e.push_frame(a)
        },
        "stack",
        "a b c -- b c a",
    );
    e.register(
        "clear",
        |e| {
            e.clear_stack();
            Ok(())
        },
        "stack",
        "... --",
    );
    e.register(
        "depth",
        |e| {
            let depth = e.stack_len() as i64;
            e.push_frame(Frame::integer(depth, Radix::Decimal))
        },
        "stack",
        "-- number of values on the stack",
    );
    e.register(
        "pick",
        |e| {
            let n = e.peek_integer(0)?;
            if n < 0 {
                return Err(error!(IllegalValue; "NEGATIVE INDEX"));
            }
            let picked = e.peek_frame(n as usize + 1)?.clone();
            e.drop_frames(1)?;
            e.push_frame(picked)
        },
        "stack",
        "... n -- ... copy of the value n below the top",
    );
}
