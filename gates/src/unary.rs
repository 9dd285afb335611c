//! Gate combinators over single-input predicates (`Fn(&T) -> bool`).
//!
//! Each factory captures an owned [`Predicates`] sequence and returns a
//! composite predicate that re-evaluates it, in order, on every call.

use std::fmt;
use std::iter;

use tracing::{debug, trace};

use crate::core::config::{GateConfig, ReferencePolicy};
use crate::core::gate::Gate;
use crate::core::predicates::Predicates;

/// Boxed single-input predicate, for sequences mixing closure types.
pub type BoxPredicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Composite predicate applying `gate` across a predicate sequence.
pub struct UnaryGate<P> {
    gate: Gate,
    config: GateConfig,
    predicates: Predicates<P>,
}

impl<P> UnaryGate<P> {
    pub fn new(gate: Gate, predicates: Predicates<P>) -> Self {
        Self::with_config(gate, predicates, GateConfig::default())
    }

    pub fn with_config(gate: Gate, predicates: Predicates<P>, config: GateConfig) -> Self {
        debug!(
            %gate,
            predicates = predicates.len(),
            reference = ?config.reference,
            "unary gate built"
        );
        Self {
            gate,
            config,
            predicates,
        }
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn config(&self) -> GateConfig {
        self.config
    }

    pub fn predicates(&self) -> &Predicates<P> {
        &self.predicates
    }

    /// Evaluate the gate for `x`, invoking predicates in sequence order.
    ///
    /// Only the prefix of predicates needed to decide the outcome is invoked.
    /// A panicking predicate unwinds through this call unchanged.
    pub fn evaluate<T>(&self, x: &T) -> bool
    where
        T: ?Sized,
        P: Fn(&T) -> bool,
    {
        let results = self.predicates.iter().map(|predicate| predicate(x));
        let result = match self.config.reference {
            ReferencePolicy::Reevaluate if self.gate.compares_reference() => {
                let reference = self.predicates.first()(x);
                self.gate.evaluate(iter::once(reference).chain(results))
            }
            _ => self.gate.evaluate(results),
        };
        trace!(gate = %self.gate, result, "unary gate evaluated");
        result
    }

    /// Convert into a plain closure owning the predicate sequence.
    pub fn into_fn<T>(self) -> impl Fn(&T) -> bool
    where
        T: ?Sized,
        P: Fn(&T) -> bool,
    {
        move |x: &T| self.evaluate(x)
    }
}

impl<P> fmt::Debug for UnaryGate<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryGate")
            .field("gate", &self.gate)
            .field("config", &self.config)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// Composite predicate applying `gate` with the default configuration.
pub fn combine<T, P>(gate: Gate, predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    UnaryGate::new(gate, predicates).into_fn()
}

/// AND gate: true if every predicate is true. Stops at the first false.
pub fn and<T, P>(predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    combine(Gate::And, predicates)
}

/// NAND gate: true if at least one predicate is false. Stops at the first false.
pub fn nand<T, P>(predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    combine(Gate::Nand, predicates)
}

/// OR gate: true if at least one predicate is true. Stops at the first true.
pub fn or<T, P>(predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    combine(Gate::Or, predicates)
}

/// NOR gate: true if every predicate is false. Stops at the first true.
pub fn nor<T, P>(predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    combine(Gate::Nor, predicates)
}

/// XOR gate: true if the results are mixed.
pub fn xor<T, P>(predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    combine(Gate::Xor, predicates)
}

/// XNOR gate: true if every result agrees with the first.
pub fn xnor<T, P>(predicates: Predicates<P>) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    combine(Gate::Xnor, predicates)
}
