//! Logic-gate combinators for boolean predicates.
//!
//! Builds one composite predicate out of an ordered, non-empty sequence of
//! simpler predicates by applying AND, NAND, OR, NOR, XOR or XNOR semantics.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure gate logic, the non-empty predicate sequence, and the
//!   evaluation policy. No closures over caller state, fully testable in
//!   isolation.
//! - **[`unary`]** / **[`binary`]**: Factories producing composite predicates
//!   over one input (`Fn(&T) -> bool`) or two inputs (`Fn(&T, &U) -> bool`).
//!
//! ```
//! use gates::Predicates;
//! use gates::unary;
//!
//! let in_range = unary::and(Predicates::new(vec![
//!     Box::new(|x: &i32| *x > 0) as Box<dyn Fn(&i32) -> bool>,
//!     Box::new(|x: &i32| *x < 10),
//! ])?);
//! assert!(in_range(&4));
//! assert!(!in_range(&12));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod binary;
pub mod core;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod unary;

pub use crate::core::config::{GateConfig, ReferencePolicy};
pub use crate::core::gate::Gate;
pub use crate::core::predicates::Predicates;
pub use binary::BinaryGate;
pub use unary::UnaryGate;
