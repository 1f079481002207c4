use super::{Complex, Frame, Number, Operator, Registry, Stack, Val, Var};
use crate::error;
use crate::lang::{fields, literal, Error};
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_MAX_STACK: usize = 1024;
pub const DEFAULT_MAX_MACRO_DEPTH: usize = 256;

/// ## Expression engine
///
/// Owns the value stack, the variable scopes, and the operator registry.
/// Text goes in through [`Engine::eval`] or pre-split fields through
/// [`Engine::exec`]; each field is dispatched in this order:
///
/// 1. interrupt check
/// 2. registered operator
/// 3. `name=` assignment or `name/` removal
/// 4. `$name` variable reference
/// 5. `@name` macro
/// 6. quoted or braced string
/// 7. integer with `d`, `x`, `o`, or `b` suffix
/// 8. `true` or `false`
/// 9. real or complex number
///
/// An operator that fails leaves the stack as it found it.

pub struct Engine {
    stack: Stack<Frame>,
    var: Var,
    registry: Registry,
    print: Box<dyn FnMut(&str)>,
    input: Box<dyn FnMut() -> Result<String>>,
    interrupt: Option<Box<dyn FnMut() -> bool>>,
    macro_depth: usize,
    max_macro_depth: usize,
}

impl Default for Engine {
    fn default() -> Engine {
        let mut engine = Engine::new(DEFAULT_MAX_STACK);
        crate::ops::install(&mut engine);
        engine
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Engine {{ stack: {:?} }}", self.stack)
    }
}

impl Engine {
    /// An engine with no operators, no output, and no input.
    pub fn new(max_stack_depth: usize) -> Engine {
        Engine {
            stack: Stack::new(max_stack_depth),
            var: Var::new(),
            registry: Registry::new(),
            print: Box::new(|_| {}),
            input: Box::new(|| Err(error!(NotSupported; "NO INPUT AVAILABLE"))),
            interrupt: None,
            macro_depth: 0,
            max_macro_depth: DEFAULT_MAX_MACRO_DEPTH,
        }
    }

    pub fn set_max_macro_depth(&mut self, depth: usize) {
        self.max_macro_depth = depth;
    }

    // *** Operators

    pub fn register<F>(&mut self, token: &str, handler: F, category: &str, help: &str)
    where
        F: Fn(&mut Engine) -> Result<()> + 'static,
    {
        let op = Operator {
            handler: Rc::new(handler),
            category: category.into(),
            help: help.into(),
        };
        if self.registry.insert(token, op).is_some() {
            debug!(token, category, "replaced operator");
        } else {
            trace!(token, category, "registered operator");
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // *** Execution

    /// Split `text` into fields and run them. Counts as one level of
    /// macro nesting.
    pub fn eval(&mut self, text: &str) -> Result<()> {
        if self.macro_depth >= self.max_macro_depth {
            return Err(error!(StackFull; "MACRO NESTING TOO DEEP"));
        }
        let fields = fields(text)?;
        self.macro_depth += 1;
        let result = self.exec(&fields);
        self.macro_depth -= 1;
        result
    }

    /// Run fields in order, stopping at the first failure. The error
    /// records the field list with the failing field marked.
    pub fn exec<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        for (index, field) in fields.iter().enumerate() {
            if let Err(error) = self.dispatch(field.as_ref()) {
                debug!(field = field.as_ref(), %error, "exec failed");
                return Err(error.in_fields(fields, index));
            }
        }
        Ok(())
    }

    pub fn dispatch(&mut self, field: &str) -> Result<()> {
        trace!(field, depth = self.stack.len(), "dispatch");
        self.check_interrupt()?;
        if let Some(handler) = self.registry.handler(field) {
            return handler(self);
        }
        if field.chars().count() > 1 {
            if let Some(name) = field.strip_suffix('=') {
                check_name(name)?;
                let frame = self.stack.pop()?;
                self.var.store(name, frame);
                return Ok(());
            }
            if let Some(name) = field.strip_suffix('/') {
                check_name(name)?;
                return self.var.remove(name).map(|_| ());
            }
        }
        if let Some(name) = field.strip_prefix('$') {
            let frame = self.get_variable(name)?.clone();
            return self.stack.push(frame);
        }
        if let Some(name) = field.strip_prefix('@') {
            return self.run_macro(name);
        }
        let val = literal(field)?;
        self.stack.push(Frame::new(val))
    }

    fn run_macro(&mut self, name: &str) -> Result<()> {
        let frame = self.get_variable(name)?.clone();
        match frame.val() {
            Val::Complex(..) | Val::Integer(..) => self.stack.push(frame),
            Val::String(text, _) => self.eval(text),
            _ => Err(error!(ExpectedAString; "MACRO IS NOT A STRING")),
        }
    }

    // *** Hooks

    pub fn set_print<F: FnMut(&str) + 'static>(&mut self, print: F) {
        self.print = Box::new(print);
    }

    pub fn set_input<F: FnMut() -> Result<String> + 'static>(&mut self, input: F) {
        self.input = Box::new(input);
    }

    pub fn set_interrupt<F: FnMut() -> bool + 'static>(&mut self, interrupt: F) {
        self.interrupt = Some(Box::new(interrupt));
    }

    pub fn clear_interrupt(&mut self) {
        self.interrupt = None;
    }

    /// Poll the interrupt hook. Looping operators call this once per pass
    /// so an empty body can still be stopped.
    pub fn check_interrupt(&mut self) -> Result<()> {
        if let Some(interrupt) = self.interrupt.as_mut() {
            if interrupt() {
                return Err(error!(Interrupted));
            }
        }
        Ok(())
    }

    pub fn print(&mut self, text: &str) {
        (self.print)(text)
    }

    pub fn input(&mut self) -> Result<String> {
        (self.input)()
    }

    // *** Stack

    pub fn stack(&self) -> &Stack<Frame> {
        &self.stack
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear()
    }

    /// The stack bottom to top, written the way it would be typed.
    pub fn stack_strings(&self) -> Vec<String> {
        self.stack.iter().map(|f| f.quoted()).collect()
    }

    pub fn push_frame(&mut self, frame: Frame) -> Result<()> {
        self.stack.push(frame)
    }

    pub fn push_val(&mut self, val: Val) -> Result<()> {
        self.stack.push(Frame::new(val))
    }

    pub fn pop_frame(&mut self) -> Result<Frame> {
        self.stack.pop()
    }

    pub fn peek_frame(&self, n: usize) -> Result<&Frame> {
        self.stack.peek(n)
    }

    /// Pops two frames, returned in the order they were pushed.
    pub fn pop_two_frames(&mut self) -> Result<(Frame, Frame)> {
        self.stack.pop_2()
    }

    /// Discard the top `n` frames, or none if there are fewer than `n`.
    pub fn drop_frames(&mut self, n: usize) -> Result<()> {
        self.stack.pop_n(n).map(|_| ())
    }

    pub fn peek_string(&self, n: usize) -> Result<String> {
        string_of(self.stack.peek(n)?)
    }

    pub fn peek_bool(&self, n: usize) -> Result<bool> {
        bool_of(self.stack.peek(n)?)
    }

    pub fn peek_integer(&self, n: usize) -> Result<i64> {
        integer_of(self.stack.peek(n)?)
    }

    pub fn pop_string(&mut self) -> Result<String> {
        self.pop_with(string_of)
    }

    pub fn pop_bool(&mut self) -> Result<bool> {
        self.pop_with(bool_of)
    }

    pub fn pop_number(&mut self) -> Result<Number> {
        self.pop_with(|frame| frame.number().ok_or_else(|| error!(ExpectedANumber)))
    }

    pub fn pop_complex(&mut self) -> Result<Complex> {
        self.pop_with(|frame| match frame.number() {
            Some(n) => Ok(n.to_complex()),
            None => Err(error!(ExpectedAComplexNumber)),
        })
    }

    /// Pops a whole number, from either an integer or an integral real.
    pub fn pop_integer(&mut self) -> Result<i64> {
        self.pop_with(integer_of)
    }

    /// Pops two numbers promoted to a common type, in push order.
    pub fn pop_two_numbers(&mut self) -> Result<(Number, Number)> {
        let (lhs, rhs) = self.stack.pop_2()?;
        match (lhs.number(), rhs.number()) {
            (Some(l), Some(r)) => Ok(Number::promote(l, r)),
            _ => {
                self.stack.restore(lhs);
                self.stack.restore(rhs);
                Err(error!(ExpectedANumber))
            }
        }
    }

    fn pop_with<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Frame) -> Result<T>,
    {
        let frame = self.stack.pop()?;
        match f(&frame) {
            Ok(t) => Ok(t),
            Err(error) => {
                self.stack.restore(frame);
                Err(error)
            }
        }
    }

    /// Replace the top frame with `f(top)`. Nothing changes on failure.
    pub fn unary<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&Frame) -> Result<Frame>,
    {
        self.stack.require(1)?;
        let result = f(self.stack.peek(0)?)?;
        self.stack.pop()?;
        self.stack.push(result)
    }

    /// Replace the top two frames with `f(second, top)`. Nothing changes
    /// on failure.
    pub fn binary<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&Frame, &Frame) -> Result<Frame>,
    {
        self.stack.require(2)?;
        let result = f(self.stack.peek(1)?, self.stack.peek(0)?)?;
        self.stack.pop_2()?;
        self.stack.push(result)
    }

    // *** Variables

    pub fn get_variable(&self, name: &str) -> Result<&Frame> {
        self.var.fetch(name).ok_or_else(|| error!(NotFound; name))
    }

    pub fn get_string_variable(&self, name: &str) -> Result<String> {
        match self.get_variable(name)?.val() {
            Val::String(s, _) => Ok(s.clone()),
            _ => Err(error!(ExpectedAString; name)),
        }
    }

    pub fn get_complex_variable(&self, name: &str) -> Result<Complex> {
        match self.get_variable(name)?.number() {
            Some(n) => Ok(n.to_complex()),
            None => Err(error!(ExpectedAComplexNumber; name)),
        }
    }

    pub fn set_variable(&mut self, name: &str, frame: Frame) -> Result<()> {
        check_name(name)?;
        self.var.store(name, frame);
        Ok(())
    }

    pub fn clear_variable(&mut self, name: &str) -> Result<()> {
        self.var.remove(name).map(|_| ())
    }

    pub fn variable_names(&self) -> Vec<Rc<str>> {
        self.var.names()
    }

    pub fn push_scope(&mut self) {
        self.var.push_scope();
        debug!(depth = self.var.depth(), "push scope");
    }

    pub fn pop_scope(&mut self) -> Result<()> {
        self.var.pop_scope()?;
        debug!(depth = self.var.depth(), "pop scope");
        Ok(())
    }
}

fn string_of(frame: &Frame) -> Result<String> {
    match frame.val() {
        Val::String(s, _) => Ok(s.clone()),
        _ => Err(error!(ExpectedAString)),
    }
}

fn bool_of(frame: &Frame) -> Result<bool> {
    match frame.val() {
        Val::Bool(b) => Ok(*b),
        _ => Err(error!(ExpectedABoolean)),
    }
}

fn integer_of(frame: &Frame) -> Result<i64> {
    match frame.number() {
        Some(Number::Integer(n, _)) => Ok(n),
        Some(Number::Complex(c)) => {
            if c.is_real() && c.re.fract() == 0.0 && c.re.abs() < i64::MAX as f64 {
                Ok(c.re as i64)
            } else {
                Err(error!(IllegalValue; "NOT AN INTEGER"))
            }
        }
        None => Err(error!(ExpectedANumber)),
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('=') || name.contains('$') {
        Err(error!(IllegalName; name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::{Quote, Radix};

    #[test]
    fn test_bare_engine_has_no_operators() {
        let mut e = Engine::new(16);
        assert!(e.registry().is_empty());
        let err = e.exec(&["1", "2", "+"]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Syntax);
        assert_eq!(err.trace(), ["1 2 ->+<-"]);
        assert_eq!(e.stack_len(), 2);
    }

    #[test]
    fn test_registered_operator_wins() {
        let mut e = Engine::new(16);
        e.register("x=", |e| e.push_val(Val::Bool(true)), "test", "shadow");
        e.exec(&["x="]).unwrap();
        assert_eq!(e.stack_strings(), ["true"]);
    }

    #[test]
    fn test_reregister_overwrites() {
        let mut e = Engine::new(16);
        e.register("one", |e| e.push_frame(Frame::real(1.0)), "a", "first");
        e.register("one", |e| e.push_frame(Frame::real(2.0)), "b", "second");
        e.exec(&["one"]).unwrap();
        assert_eq!(e.stack_strings(), ["2"]);
        assert_eq!(e.registry().help("one"), Some("second"));
        assert_eq!(e.registry().len(), 1);
    }

    #[test]
    fn test_typed_pop_restores() {
        let mut e = Engine::new(16);
        e.push_frame(Frame::real(1.0)).unwrap();
        e.push_frame(Frame::string("s", Quote::Single)).unwrap();
        assert_eq!(e.pop_bool().unwrap_err().code(), ErrorCode::ExpectedABoolean);
        assert_eq!(
            e.pop_two_numbers().unwrap_err().code(),
            ErrorCode::ExpectedANumber
        );
        assert_eq!(e.stack_strings(), ["1", "'s'"]);
        assert_eq!(e.pop_string().unwrap(), "s");
    }

    #[test]
    fn test_pop_integer() {
        let mut e = Engine::new(16);
        e.push_frame(Frame::real(2.5)).unwrap();
        assert_eq!(e.pop_integer().unwrap_err().code(), ErrorCode::IllegalValue);
        e.pop_frame().unwrap();
        e.push_frame(Frame::real(4.0)).unwrap();
        e.push_frame(Frame::integer(-3, Radix::Hex)).unwrap();
        assert_eq!(e.pop_integer().unwrap(), -3);
        assert_eq!(e.pop_integer().unwrap(), 4);
    }

    #[test]
    fn test_illegal_names() {
        let mut e = Engine::new(16);
        e.exec(&["1"]).unwrap();
        let err = e.exec(&["a$b="]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::IllegalName);
        let err = e.exec(&["a=b/"]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::IllegalName);
        assert_eq!(e.stack_len(), 1);
    }

    #[test]
    fn test_interrupt_before_anything() {
        let mut e = Engine::new(16);
        e.set_interrupt(|| true);
        let err = e.exec(&["1"]).unwrap_err();
        assert!(err.is_interrupt());
        assert_eq!(e.stack_len(), 0);
        e.clear_interrupt();
        e.exec(&["1"]).unwrap();
    }

    #[test]
    fn test_macro_depth_limit() {
        let mut e = Engine::new(16);
        e.set_max_macro_depth(8);
        let body = Frame::string("@loop", Quote::Single);
        e.set_variable("loop", body).unwrap();
        let err = e.exec(&["@loop"]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::StackFull);
        assert_eq!(err.trace().len(), 9);
    }

    #[test]
    fn test_input_default_not_supported() {
        let mut e = Engine::new(16);
        assert_eq!(e.input().unwrap_err().code(), ErrorCode::NotSupported);
    }
}
