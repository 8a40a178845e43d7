//! Stack growth guard for the recursive GazLang passes.
//!
//! The parser, interpreter and code generator all walk the tree by direct
//! recursion. Source such as `((((((1))))))` nested a few hundred thousand
//! levels deep, or a long `else if` chain, would otherwise exhaust the
//! native stack. Every recursive entry point wraps its body in
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand through `stacker`; on
//! `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn visit_expr(&mut self, expr: &Expr) -> Result<Value, EvalError> {
///     ensure_sufficient_stack(|| match &expr.kind { /* ... */ })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// `wasm32` manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
