use crate::mach::{AngleUnit, Engine, Frame, Function, Operation, Radix};

pub fn install(e: &mut Engine) {
    // arithmetic
    e.register("+", |e| e.binary(Operation::add), "arithmetic", "a b -- a+b, joins strings");
    e.register("-", |e| e.binary(Operation::subtract), "arithmetic", "a b -- a-b");
    e.register("*", |e| e.binary(Operation::multiply), "arithmetic", "a b -- a*b");
    e.register("/", |e| e.binary(Operation::divide), "arithmetic", "a b -- a/b");
    e.register("%", |e| e.binary(Operation::modulo), "arithmetic", "a b -- remainder of a/b");
    e.register("^", |e| e.binary(Operation::power), "arithmetic", "a b -- a raised to b");
    e.register("neg", |e| e.unary(Operation::negate), "arithmetic", "a -- -a");
    e.register("abs", |e| e.unary(Function::abs), "arithmetic", "a -- magnitude of a");
    e.register("inv", |e| e.unary(Function::inv), "arithmetic", "a -- 1/a");
    e.register("sq", |e| e.unary(Function::sq), "arithmetic", "a -- a*a");
    e.register("sqrt", |e| e.unary(Function::sqrt), "arithmetic", "a -- square root");
    e.register("exp", |e| e.unary(Function::exp), "arithmetic", "a -- e raised to a");
    e.register("ln", |e| e.unary(Function::ln), "arithmetic", "a -- natural logarithm");
    e.register("log", |e| e.unary(Function::log), "arithmetic", "a -- base 10 logarithm");
    e.register("floor", |e| e.unary(Function::floor), "arithmetic", "a -- round down");
    e.register("ceil", |e| e.unary(Function::ceil), "arithmetic", "a -- round up");
    e.register("round", |e| e.unary(Function::round), "arithmetic", "a -- round to nearest");

    // trig
    e.register("sin", |e| e.unary(Function::sin), "trig", "a -- sine, radians");
    e.register("cos", |e| e.unary(Function::cos), "trig", "a -- cosine, radians");
    e.register("tan", |e| e.unary(Function::tan), "trig", "a -- tangent, radians");
    e.register("asin", |e| e.unary(Function::asin), "trig", "a -- arc sine in radians");
    e.register("acos", |e| e.unary(Function::acos), "trig", "a -- arc cosine in radians");
    e.register("atan", |e| e.unary(Function::atan), "trig", "a -- arc tangent in radians");
    e.register(
        "pi",
        |e| e.push_frame(Frame::real(std::f64::consts::PI)),
        "trig",
        "-- 3.14159...",
    );

    // complex
    e.register("re", |e| e.unary(Function::re), "complex", "z -- real part");
    e.register("im", |e| e.unary(Function::im), "complex", "z -- imaginary part");
    e.register("conj", |e| e.unary(Function::conj), "complex", "z -- complex conjugate");
    e.register("arg", |e| e.unary(Function::arg), "complex", "z -- angle in radians");
    e.register("cplx", |e| e.binary(Function::cplx), "complex", "re im -- re+im*i");
    e.register(
        "rad",
        |e| e.unary(|f| Function::angle(f, Some(AngleUnit::Radians))),
        "complex",
        "z -- z shown as magnitude@radians",
    );
    e.register(
        "deg",
        |e| e.unary(|f| Function::angle(f, Some(AngleUnit::Degrees))),
        "complex",
        "z -- z shown as magnitude@degrees",
    );
    e.register(
        "grad",
        |e| e.unary(|f| Function::angle(f, Some(AngleUnit::Gradians))),
        "complex",
        "z -- z shown as magnitude@gradians",
    );
    e.register(
        "rect",
        |e| e.unary(|f| Function::angle(f, None)),
        "complex",
        "z -- z shown as re+im*i",
    );

    // base
    e.register(
        "dec",
        |e| e.unary(|f| Function::radix(f, Radix::Decimal)),
        "base",
        "n -- integer shown in base 10",
    );
    e.register(
        "hex",
        |e| e.unary(|f| Function::radix(f, Radix::Hex)),
        "base",
        "n -- integer shown in base 16",
    );
    e.register(
        "oct",
        |e| e.unary(|f| Function::radix(f, Radix::Octal)),
        "base",
        "n -- integer shown in base 8",
    );
    e.register(
        "bin",
        |e| e.unary(|f| Function::radix(f, Radix::Binary)),
        "base",
        "n -- integer shown in base 2",
    );
    e.register("float", |e| e.unary(Function::float), "base", "n -- n as a real");

    // bitwise
    e.register("&", |e| e.binary(Operation::bit_and), "bitwise", "a b -- bitwise and");
    e.register("|", |e| e.binary(Operation::bit_or), "bitwise", "a b -- bitwise or");
    e.register("<<", |e| e.binary(Operation::shift_left), "bitwise", "a n -- a shifted left n bits");
    e.register(">>", |e| e.binary(Operation::shift_right), "bitwise", "a n -- a shifted right n bits");
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
    fn test_arithmetic() {
        assert_eq!(run("1 2 + 3 *"), ["9"]);
        assert_eq!(run("7d 2d /"), ["3d"]);
        assert_eq!(run("7d 2 /"), ["3.5"]);
        assert_eq!(run("-1 sqrt"), ["i"]);
        assert_eq!(run("2d 10d ^"), ["1024d"]);
    }

    #[test]
    fn test_base_conversion() {
        assert_eq!(run("255 hex"), ["ffx"]);
        assert_eq!(run("ffx bin"), ["11111111b"]);
        assert_eq!(run("10x float"), ["16"]);
    }

    #[test]
    fn test_failure_leaves_operands() {
        let mut e = Engine::default();
        let err = e.eval("1 0 /").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DivideByZero);
        assert_eq!(e.stack_strings(), ["1", "0"]);
        let err = e.eval("clear 2.5 hex").unwrap_err();
        assert_eq!(err.code(), ErrorCode::IllegalValue);
        assert_eq!(e.stack_strings(), ["2.5"]);
    }

    #[test]
    fn test_complex_ops() {
        assert_eq!(run("3 4 cplx"), ["3+4i"]);
        assert_eq!(run("3+4i abs"), ["5"]);
        assert_eq!(run("3+4i conj"), ["3-4i"]);
        assert_eq!(run("3 deg"), ["3@0deg"]);
        assert_eq!(run("3 deg rect"), ["3"]);
    }
}
