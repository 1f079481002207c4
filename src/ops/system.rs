use crate::error;
use crate::mach::{Engine, Frame, Quote, Radix};
use chrono::Utc;

pub fn install(e: &mut Engine) {
    // io
    e.register(
        "print",
        |e| {
            let line = e.peek_frame(0)?.to_string();
            e.drop_frames(1)?;
            e.print(&line);
            Ok(())
        },
        "io",
        "a -- print a",
    );
    e.register(
        "input",
        |e| {
            if e.stack().is_full() {
                return Err(error!(StackFull));
            }
            let line = e.input()?;
            e.push_frame(Frame::string(&line, Quote::Single))
        },
        "io",
        "-- a line read from the host",
    );
    e.register(
        "help",
        |e| {
            let token = e.peek_string(0)?;
            let line = match e.registry().get(&token) {
                Some(op) => format!("{} ({}): {}", token, op.category, op.help),
                None => return Err(error!(NotFound; &token)),
            };
            e.drop_frames(1)?;
            e.print(&line);
            Ok(())
        },
        "io",
        "s -- print help for the operator named s",
    );
    e.register(
        "ops",
        |e| {
            let lines: Vec<String> = e
                .registry()
                .categories()
                .iter()
                .map(|category| {
                    let tokens: Vec<String> = e
                        .registry()
                        .tokens_in(category)
                        .iter()
                        .map(|t| t.to_string())
                        .collect();
                    format!("{}: {}", category, tokens.join(" "))
                })
                .collect();
            for line in lines {
                e.print(&line);
            }
            Ok(())
        },
        "io",
        "-- print every operator by category",
    );

    // misc
    e.register(
        "rand",
        |e| e.push_frame(Frame::real(rand::random::<f64>())),
        "misc",
        "-- a random real from 0 up to 1",
    );
    e.register(
        "now",
        |e| e.push_frame(Frame::integer(Utc::now().timestamp(), Radix::Decimal)),
        "misc",
        "-- seconds since the Unix epoch",
    );
    e.register(
        "date",
        |e| e.push_frame(Frame::string(&Utc::now().to_rfc3339(), Quote::Single)),
        "misc",
        "-- the current UTC date and time",
    );
}
