/*!
## Rust Machine Module

This Rust module holds the values, stack, variables, and operator
dispatch of the RPN engine.

*/

mod complex;
mod engine;
mod frame;
mod function;
mod number;
mod operation;
mod registry;
mod stack;
mod val;
mod var;

pub use complex::Complex;
pub use complex::TOLERANCE;
pub use engine::Engine;
pub use engine::DEFAULT_MAX_MACRO_DEPTH;
pub use engine::DEFAULT_MAX_STACK;
pub use frame::Frame;
pub use function::Function;
pub use number::Number;
pub use operation::Operation;
pub use registry::Handler;
pub use registry::Operator;
pub use registry::Registry;
pub use stack::Stack;
pub use val::AngleUnit;
pub use val::Quote;
pub use val::Radix;
pub use val::Val;
pub use var::Var;
