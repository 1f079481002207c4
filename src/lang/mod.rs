/*!
# Rust Language Module

This Rust module turns program text into fields and fields into values.

*/

#[macro_use]
mod error;
mod lex;
mod literal;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::fields;
pub use lex::quote_fields;
pub use literal::literal;
pub use literal::number;
