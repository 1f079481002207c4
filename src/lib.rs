//! # RPN
//!
//! A small stack language for calculators, consoles, and anything else
//! that wants to hand a user a programmable prompt.
//!
//! Text is split into fields and each field acts on a single stack of
//! values: numbers, strings, and booleans. Operators are looked up in a
//! registry the host fills in, so the same engine serves a desktop
//! calculator or a serial console on a microcontroller.
//!
//! Install with `cargo install rpn-lang` then run `rpn`.
//! ```text
//! RPN 0.3.0
//! > 2 3 +
//!   1: 5
//! > █
//! ```
//!
//! Embedding takes a few lines.
//! ```
//! use rpn::mach::Engine;
//!
//! let mut engine = Engine::default();
//! engine.eval("2 3 + 4 *").unwrap();
//! assert_eq!(engine.stack_strings(), ["20"]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod ops;
