use crate::lang::Error;
use crate::mach::{Engine, Frame, Quote, Radix};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

pub fn install(e: &mut Engine) {
    // vars
    e.register(
        "scope",
        |e| {
            e.push_scope();
            Ok(())
        },
        "vars",
        "-- open a new variable scope",
    );
    e.register("endscope", |e| e.pop_scope(), "vars", "-- close the innermost scope");
    e.register(
        "vars",
        |e| {
            for name in e.variable_names() {
                let line = format!("{} = {}", name, e.get_variable(&name)?.quoted());
                e.print(&line);
            }
            Ok(())
        },
        "vars",
        "-- print every visible variable",
    );

    // control
    e.register("exec", exec, "control", "s -- run the fields in s");
    e.register("if", if_then, "control", "b s -- run s when b is true");
    e.register(
        "ifelse",
        if_else,
        "control",
        "b s1 s2 -- run s1 when b is true, otherwise s2",
    );
    e.register("times", times, "control", "n s -- run s n times");
    e.register(
        "for",
        for_each,
        "control",
        "m n s -- push each integer from m to n, running s after each",
    );
    e.register(
        "while",
        while_loop,
        "control",
        "s1 s2 -- run s2 for as long as s1 leaves true",
    );
    e.register(
        "try",
        try_body,
        "control",
        "s -- true after running s, or the error text and false",
    );
}

fn exec(e: &mut Engine) -> Result<()> {
    let body = e.peek_string(0)?;
    e.drop_frames(1)?;
    e.eval(&body)
}

fn if_then(e: &mut Engine) -> Result<()> {
    let cond = e.peek_bool(1)?;
    let body = e.peek_string(0)?;
    e.drop_frames(2)?;
    if cond {
        e.eval(&body)?;
    }
    Ok(())
}

fn if_else(e: &mut Engine) -> Result<()> {
    let cond = e.peek_bool(2)?;
    let then = e.peek_string(1)?;
    let other = e.peek_string(0)?;
    e.drop_frames(3)?;
    if cond {
        e.eval(&then)
    } else {
        e.eval(&other)
    }
}

fn times(e: &mut Engine) -> Result<()> {
    let count = e.peek_integer(1)?;
    let body = e.peek_string(0)?;
    e.drop_frames(2)?;
    for _ in 0..count {
        e.check_interrupt()?;
        e.eval(&body)?;
    }
    Ok(())
}

fn for_each(e: &mut Engine) -> Result<()> {
    let start = e.peek_integer(2)?;
    let end = e.peek_integer(1)?;
    let body = e.peek_string(0)?;
    e.drop_frames(3)?;
    let step = if start <= end { 1 } else { -1 };
    let mut index = start;
    loop {
        e.check_interrupt()?;
        e.push_frame(Frame::integer(index, Radix::Decimal))?;
        e.eval(&body)?;
        if index == end {
            return Ok(());
        }
        index += step;
    }
}

fn while_loop(e: &mut Engine) -> Result<()> {
    let cond = e.peek_string(1)?;
    let body = e.peek_string(0)?;
    e.drop_frames(2)?;
    loop {
        e.check_interrupt()?;
        e.eval(&cond)?;
        if !e.pop_bool()? {
            return Ok(());
        }
        e.eval(&body)?;
    }
}

fn try_body(e: &mut Engine) -> Result<()> {
    let body = e.peek_string(0)?;
    e.drop_frames(1)?;
    match e.eval(&body) {
        Ok(()) => e.push_frame(Frame::boolean(true)),
        Err(error) if error.is_interrupt() => Err(error),
        Err(error) => {
            debug!(%error, "caught by try");
            let text = error.to_string();
            let first = text.lines().next().unwrap_or_default();
            e.push_frame(Frame::string(first, Quote::Single))?;
            e.push_frame(Frame::boolean(false))
        }
    }
}
