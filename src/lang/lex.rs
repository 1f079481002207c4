use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Split program text into fields.
///
/// Quoted and braced fields keep their delimiters. Outside of quotes a
/// backslash makes the next character literal and is itself dropped.
pub fn fields(s: &str) -> Result<Vec<String>> {
    FieldLexer::new(s).lex()
}

/// Join fields back into text that [`fields`] splits the same way.
pub fn quote_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| {
            let f = f.as_ref();
            if is_delimited(f) {
                f.to_string()
            } else {
                let mut s = String::with_capacity(f.len());
                for (i, ch) in f.chars().enumerate() {
                    let special = is_field_whitespace(ch)
                        || ch == '#'
                        || ch == '\\'
                        || (i == 0 && (ch == '\'' || ch == '"' || ch == '{'));
                    if special {
                        s.push('\\');
                    }
                    s.push(ch);
                }
                s
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn is_field_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_delimited(f: &str) -> bool {
    match f.chars().next() {
        Some('\'') | Some('"') | Some('{') => match fields(f) {
            Ok(v) => v.len() == 1 && v[0] == f,
            Err(_) => false,
        },
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Whitespace,
    Token,
    SingleQuote,
    DoubleQuote,
    Brace(usize),
    Comment,
}

struct FieldLexer<'a> {
    chars: std::str::Chars<'a>,
    state: State,
    token: String,
    fields: Vec<String>,
}

impl<'a> FieldLexer<'a> {
    fn new(s: &'a str) -> FieldLexer<'a> {
        FieldLexer {
            chars: s.chars(),
            state: State::Whitespace,
            token: String::new(),
            fields: vec![],
        }
    }

    fn flush(&mut self) {
        self.fields.push(std::mem::take(&mut self.token));
        self.state = State::Whitespace;
    }

    fn escape(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.token.push(ch);
            self.state = State::Token;
        }
    }

    fn lex(mut self) -> Result<Vec<String>> {
        while let Some(ch) = self.chars.next() {
            match self.state {
                State::Whitespace => match ch {
                    '#' => self.state = State::Comment,
                    '\\' => self.escape(),
                    '\'' => {
                        self.token.push(ch);
                        self.state = State::SingleQuote;
                    }
                    '"' => {
                        self.token.push(ch);
                        self.state = State::DoubleQuote;
                    }
                    '{' => {
                        self.token.push(ch);
                        self.state = State::Brace(1);
                    }
                    _ if is_field_whitespace(ch) => {}
                    _ => {
                        self.token.push(ch);
                        self.state = State::Token;
                    }
                },
                State::Token => match ch {
                    '#' => {
                        self.flush();
                        self.state = State::Comment;
                    }
                    '\\' => self.escape(),
                    _ if is_field_whitespace(ch) => self.flush(),
                    _ => self.token.push(ch),
                },
                State::SingleQuote | State::DoubleQuote => {
                    self.token.push(ch);
                    let closing = if self.state == State::SingleQuote {
                        '\''
                    } else {
                        '"'
                    };
                    if ch == closing {
                        self.flush();
                    }
                }
                State::Brace(depth) => {
                    self.token.push(ch);
                    match ch {
                        '{' => self.state = State::Brace(depth + 1),
                        '}' if depth == 1 => self.flush(),
                        '}' => self.state = State::Brace(depth - 1),
                        _ => {}
                    }
                }
                State::Comment => {
                    if ch == '\n' {
                        self.state = State::Whitespace;
                    }
                }
            }
        }
        match self.state {
            State::SingleQuote => Err(error!(Syntax; "UNTERMINATED QUOTE '")),
            State::DoubleQuote => Err(error!(Syntax; "UNTERMINATED QUOTE \"")),
            State::Brace(_) => Err(error!(Syntax; "UNTERMINATED BRACE")),
            State::Token => {
                self.flush();
                Ok(self.fields)
            }
            State::Whitespace | State::Comment => Ok(self.fields),
        }
    }
}
