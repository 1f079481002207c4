use super::{Complex, Number, Quote, Radix, Val};
use std::cmp::Ordering;

/// ## Stack frame
///
/// A [`Val`] plus an optional annotation, such as a unit label, that is
/// shown after the value and otherwise ignored.

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    val: Val,
    note: Option<String>,
}

impl Frame {
    pub fn new(val: Val) -> Frame {
        Frame { val, note: None }
    }

    pub fn empty() -> Frame {
        Frame::new(Val::Empty)
    }

    pub fn string(s: &str, quote: Quote) -> Frame {
        Frame::new(Val::String(s.to_string(), quote))
    }

    pub fn complex(c: Complex) -> Frame {
        Frame::new(Val::Complex(c, None))
    }

    pub fn real(n: f64) -> Frame {
        Frame::new(Val::real(n))
    }

    pub fn integer(n: i64, radix: Radix) -> Frame {
        Frame::new(Val::Integer(n, radix))
    }

    pub fn boolean(b: bool) -> Frame {
        Frame::new(Val::Bool(b))
    }

    pub fn val(&self) -> &Val {
        &self.val
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Replace the annotation. An empty note removes it.
    pub fn with_note(self, note: &str) -> Frame {
        Frame {
            val: self.val,
            note: if note.is_empty() {
                None
            } else {
                Some(note.to_string())
            },
        }
    }

    pub fn number(&self) -> Option<Number> {
        Number::from_val(&self.val)
    }

    /// The value written the way it would be typed, with strings
    /// wrapped in their original quotes.
    pub fn quoted(&self) -> String {
        let s = match &self.val {
            Val::String(s, quote) => quote.wrap(s),
            _ => self.text(),
        };
        self.append_note(s)
    }

    /// The value without quotes or annotation.
    pub fn text(&self) -> String {
        match &self.val {
            Val::Empty => String::new(),
            Val::String(s, _) => s.clone(),
            Val::Complex(c, angle) => c.format(*angle),
            Val::Bool(b) => b.to_string(),
            Val::Integer(n, radix) => radix.format(*n),
        }
    }

    fn append_note(&self, s: String) -> String {
        match &self.note {
            Some(note) => format!("{} {}", s, note),
            None => s,
        }
    }

    fn class(&self) -> u8 {
        match self.val {
            Val::Empty => 0,
            Val::Bool(_) => 1,
            Val::Complex(..) | Val::Integer(..) => 2,
            Val::String(..) => 3,
        }
    }

    pub fn is_equal(&self, other: &Frame) -> bool {
        match (&self.val, &other.val) {
            (Val::Bool(a), Val::Bool(b)) => a == b,
            (Val::String(a, _), Val::String(b, _)) => a == b,
            (Val::Integer(a, _), Val::Integer(b, _)) => a == b,
            _ => match (self.number(), other.number()) {
                (Some(a), Some(b)) => a.to_complex().approx_eq(&b.to_complex()),
                _ => false,
            },
        }
    }

    pub fn is_less_than(&self, other: &Frame) -> bool {
        match (&self.val, &other.val) {
            (Val::Empty, Val::Empty) => false,
            (Val::Bool(a), Val::Bool(b)) => !*a && *b,
            (Val::String(a, _), Val::String(b, _)) => a < b,
            (Val::Integer(a, _), Val::Integer(b, _)) => a < b,
            _ => match (self.number(), other.number()) {
                (Some(a), Some(b)) => a.to_complex().approx_lt(&b.to_complex()),
                _ => self.class() < other.class(),
            },
        }
    }

    pub fn is_less_than_or_equal(&self, other: &Frame) -> bool {
        self.is_less_than(other) || self.is_equal(other)
    }

    /// Total order over frames built from the comparison predicates.
    pub fn compare(&self, other: &Frame) -> Ordering {
        if self.is_less_than(other) {
            Ordering::Less
        } else if other.is_less_than(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.append_note(self.text()))
    }
}

impl From<Val> for Frame {
    fn from(val: Val) -> Frame {
        Frame::new(val)
    }
}

impl From<Number> for Frame {
    fn from(n: Number) -> Frame {
        Frame::new(n.into())
    }
}
