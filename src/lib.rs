#![allow(nonstandard_style)]

//! Interactive arithmetic expression evaluator.
//!
//! ```
//! assert_eq!(calc_rs::evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(calc_rs::evaluate("2^3^2"), Ok(512.0));
//! ```

pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;

pub use error_handling::{CalcError, Result};
pub use evaluating::evaluate;
