//! Deterministic, pure logic shared by the unary and binary combinators.
//!
//! Core modules never invoke predicates themselves. They operate on streams of
//! boolean results and on the predicate sequence as plain data.

pub mod config;
pub mod gate;
pub mod predicates;
