//! Evaluates infix arithmetic expressions by converting them to postfix
//! notation with the shunting-yard algorithm.
//!
//! ```
//! # use anyhow::Result;
//! # fn main() -> Result<()> {
//! let value = shunting_yard::interpreter::calculate("-4*-2/-(1-3)^2")?;
//! assert_eq!(value, -2.0);
//! # Ok::<(), anyhow::Error>(()) }
//! ```

pub mod interpreter;
