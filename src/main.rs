//! # RPN
//!
//! Interactive stack calculator. Fields typed at the prompt run against
//! a persistent stack which is shown after every line.

use clap::Parser;
use rpn::mach::DEFAULT_MAX_STACK;
use tracing_subscriber::EnvFilter;

mod term;

#[derive(Parser)]
#[command(name = "rpn")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reverse Polish notation calculator", long_about = None)]
struct Args {
    /// Maximum number of values the stack can hold
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_STACK)]
    stack_depth: usize,

    /// Evaluate TEXT, print the resulting stack, and exit
    #[arg(short, long, value_name = "TEXT")]
    eval: Option<String>,

    /// Don't print the banner
    #[arg(long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rpn=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let code = match args.eval {
        Some(text) => term::eval(args.stack_depth, &text),
        None => term::main(args.stack_depth, args.quiet),
    };
    std::process::exit(code);
}
