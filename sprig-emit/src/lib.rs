//! Lowers the syntax tree into JavaScript source text.

pub mod emitter;

pub use emitter::{emit, Emitter};
