//! Code generation phase tests.
//!
//! - `emit` - exact instruction text for whole programs
//! - `parity` - emitted code, executed by the reference machine in
//!   `common`, prints what the interpreter prints

mod emit;
mod parity;
