use crate::error;
use crate::lang::{number, Error};
use crate::mach::{Engine, Frame, Quote, Radix, Val};

type Result<T> = std::result::Result<T, Error>;

pub fn install(e: &mut Engine) {
    e.register(
        "len",
        |e| {
            e.unary(|f| {
                let len = string(f)?.chars().count() as i64;
                Ok(Frame::integer(len, Radix::Decimal))
            })
        },
        "string",
        "s -- number of characters in s",
    );
    e.register(
        "str",
        |e| e.unary(|f| Ok(Frame::string(&f.text(), Quote::Single))),
        "string",
        "a -- a as a string",
    );
    e.register(
        "num",
        |e| e.unary(|f| Ok(Frame::new(number(string(f)?)?))),
        "string",
        "s -- the number or boolean written in s",
    );
    e.register(
        "note",
        |e| e.binary(|v, n| Ok(v.clone().with_note(string(n)?))),
        "string",
        "a s -- a annotated with s, an empty s clears it",
    );
}

fn string(frame: &Frame) -> Result<&str> {
    match frame.val() {
        Val::String(s, _) => Ok(s),
        _ => Err(error!(ExpectedAString)),
    }
}

#[cfg(test)]
mod tests {
    use crate::lang::ErrorCode;
    use crate::mach::Engine;

    fn run(text: &str) -> Vec<String> {
        let mut e = Engine::default();
        e.eval(text).unwrap();
        e.stack_strings()
    }

    #[test]
    fn test_string_ops() {
        assert_eq!(run("'héllo' len"), ["5d"]);
        assert_eq!(run("3+4i str"), ["'3+4i'"]);
        assert_eq!(run("'ffx' num 1d +"), ["100x"]);
        assert_eq!(run("{2.5} num"), ["2.5"]);
        assert_eq!(run("'a' 1 +"), ["'a1'"]);
    }

    #[test]
    fn test_num_rejects_text() {
        let mut e = Engine::default();
        let err = e.eval("'abc' num").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Syntax);
        assert_eq!(e.stack_strings(), ["'abc'"]);
        let err = e.eval("clear 5 num").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ExpectedAString);
    }

    #[test]
    fn test_annotation() {
        assert_eq!(run("3 'kg' note 2 *"), ["6 kg"]);
        assert_eq!(run("3 'kg' note '' note"), ["3"]);
        assert_eq!(run("3 'kg' note str"), ["'3'"]);
    }
}
