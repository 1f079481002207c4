use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use rpn::error;
use rpn::mach::Engine;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Run `text` once and print the stack, top last. Returns the exit code.
pub fn eval(max_stack_depth: usize, text: &str) -> i32 {
    let mut engine = new_engine(max_stack_depth);
    engine.set_print(|s| println!("{}", s));
    match engine.eval(text) {
        Ok(()) => {
            for line in engine.stack_strings() {
                println!("{}", line);
            }
            0
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            1
        }
    }
}

pub fn main(max_stack_depth: usize, quiet: bool) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
        return 1;
    }
    match main_loop(max_stack_depth, quiet, interrupted) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn new_engine(max_stack_depth: usize) -> Engine {
    let mut engine = Engine::new(max_stack_depth);
    rpn::ops::install(&mut engine);
    engine
}

fn main_loop(
    max_stack_depth: usize,
    quiet: bool,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<()> {
    let command = Rc::new(Interface::new("rpn")?);
    command.set_prompt("> ")?;
    let input = Rc::new(Interface::new("input")?);
    input.set_prompt("? ")?;
    input.set_report_signal(Signal::Interrupt, true);

    let mut engine = new_engine(max_stack_depth);
    let out = command.clone();
    engine.set_print(move |s| {
        if let Err(error) = out.write_fmt(format_args!("{}\n", s)) {
            debug!(%error, "print failed");
        }
    });
    let reader = input.clone();
    engine.set_input(move || match reader.read_line() {
        Ok(ReadResult::Input(line)) => {
            reader.add_history_unique(line.clone());
            Ok(line)
        }
        Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => Err(error!(Interrupted)),
        Err(error) => Err(error!(NotSupported; &error.to_string())),
    });
    let flag = interrupted.clone();
    engine.set_interrupt(move || flag.swap(false, Ordering::SeqCst));

    if !quiet {
        command.write_fmt(format_args!("RPN {}\n", env!("CARGO_PKG_VERSION")))?;
    }
    loop {
        command.set_completer(Arc::new(FieldCompleter::new(&engine)));
        let line = match command.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        command.add_history_unique(line.clone());
        interrupted.store(false, Ordering::SeqCst);
        if let Err(error) = engine.eval(&line) {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
        }
        command.write_fmt(format_args!("{}\n", show_stack(&engine)))?;
    }
    Ok(())
}

fn show_stack(engine: &Engine) -> String {
    let lines = engine.stack_strings();
    let depth = lines.len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>3}: {}", depth - i, line))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Tab completion for operator tokens and variable names.
struct FieldCompleter {
    words: Vec<String>,
}

impl FieldCompleter {
    fn new(engine: &Engine) -> FieldCompleter {
        let registry = engine.registry();
        let mut words: Vec<String> = registry
            .categories()
            .iter()
            .flat_map(|c| registry.tokens_in(c))
            .map(|t| t.to_string())
            .collect();
        words.extend(engine.variable_names().iter().map(|n| n.to_string()));
        words.sort();
        words.dedup();
        FieldCompleter { words }
    }
}

impl<Term: Terminal> Completer<Term> for FieldCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let found: Vec<Completion> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion::simple(w.clone()))
            .collect();
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}
