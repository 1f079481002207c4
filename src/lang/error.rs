pub struct Error {
    code: ErrorCode,
    message: String,
    trace: Vec<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
            trace: vec![],
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn is_interrupt(&self) -> bool {
        self.code == ErrorCode::Interrupted
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            message: message.to_string(),
            trace: self.trace,
        }
    }

    /// The detail text without the error kind or position.
    pub fn detail(&self) -> &str {
        &self.message
    }

    /// Positional diagnostics, innermost field list first.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Record the field list that was running, with the failing field marked.
    pub fn in_fields<S: AsRef<str>>(mut self, fields: &[S], index: usize) -> Error {
        let line = fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                if i == index {
                    format!("->{}<-", f.as_ref())
                } else {
                    f.as_ref().to_string()
                }
            })
            .collect::<Vec<String>>()
            .join(" ");
        self.trace.push(line);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    StackEmpty,
    StackFull,
    NotEnoughStackFrames,
    ExpectedANumber,
    ExpectedAString,
    ExpectedABoolean,
    ExpectedAComplexNumber,
    IllegalValue,
    IllegalName,
    DivideByZero,
    ComplexNumberNotSupported,
    Syntax,
    NotFound,
    Interrupted,
    NotSupported,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            StackEmpty => "STACK EMPTY",
            StackFull => "STACK FULL",
            NotEnoughStackFrames => "NOT ENOUGH STACK FRAMES",
            ExpectedANumber => "EXPECTED A NUMBER",
            ExpectedAString => "EXPECTED A STRING",
            ExpectedABoolean => "EXPECTED A BOOLEAN",
            ExpectedAComplexNumber => "EXPECTED A COMPLEX NUMBER",
            IllegalValue => "ILLEGAL VALUE",
            IllegalName => "ILLEGAL NAME",
            DivideByZero => "DIVIDE BY ZERO",
            ComplexNumberNotSupported => "COMPLEX NUMBER NOT SUPPORTED",
            Syntax => "SYNTAX ERROR",
            NotFound => "NOT FOUND",
            Interrupted => "INTERRUPTED",
            NotSupported => "NOT SUPPORTED",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        for line in self.trace.iter() {
            write!(f, "\n  IN {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_failing_field() {
        let e = error!(Syntax; "BAD NUMBER").in_fields(&["2", "3q", "+"], 1);
        assert_eq!(e.trace(), ["2 ->3q<- +"]);
        assert_eq!(e.to_string(), "SYNTAX ERROR; BAD NUMBER\n  IN 2 ->3q<- +");
    }

    #[test]
    fn test_nesting_keeps_code() {
        let e = error!(DivideByZero)
            .in_fields(&["5", "0", "/"], 2)
            .in_fields(&["@div"], 0);
        assert_eq!(e.code(), ErrorCode::DivideByZero);
        assert_eq!(e.trace().len(), 2);
        assert_eq!(e.trace()[1], "->@div<-");
    }
}
