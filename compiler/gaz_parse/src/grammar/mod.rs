//! Grammar productions, split by node family.
//!
//! - `stmt.rs`: statements, `if` chains and `{ ... }` blocks
//! - `expr.rs`: the precedence chain from `expr` down to `factor`
//! - `operators.rs`: token to operator matching per precedence level

mod expr;
mod operators;
mod stmt;
