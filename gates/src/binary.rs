//! Gate combinators over two-input predicates (`Fn(&T, &U) -> bool`).

use std::fmt;
use std::iter;

use tracing::{debug, trace};

use crate::core::config::{GateConfig, ReferencePolicy};
use crate::core::gate::Gate;
use crate::core::predicates::Predicates;

/// Boxed two-input predicate, for sequences mixing closure types.
pub type BoxPredicate<'a, T, U> = Box<dyn Fn(&T, &U) -> bool + 'a>;

/// Composite two-input predicate applying `gate` across a predicate sequence.
pub struct BinaryGate<P> {
    gate: Gate,
    config: GateConfig,
    predicates: Predicates<P>,
}

impl<P> BinaryGate<P> {
    pub fn new(gate: Gate, predicates: Predicates<P>) -> Self {
        Self::with_config(gate, predicates, GateConfig::default())
    }

    pub fn with_config(gate: Gate, predicates: Predicates<P>, config: GateConfig) -> Self {
        debug!(
            %gate,
            predicates = predicates.len(),
            reference = ?config.reference,
            "binary gate built"
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

    /// Evaluate the gate for `(x, y)`; same ordering and short-circuit rules
    /// as [`crate::unary::UnaryGate::evaluate`].
    pub fn evaluate<T, U>(&self, x: &T, y: &U) -> bool
    where
        T: ?Sized,
        U: ?Sized,
        P: Fn(&T, &U) -> bool,
    {
        let results = self.predicates.iter().map(|predicate| predicate(x, y));
        let result = match self.config.reference {
            ReferencePolicy::Reevaluate if self.gate.compares_reference() => {
                let reference = self.predicates.first()(x, y);
                self.gate.evaluate(iter::once(reference).chain(results))
            }
            _ => self.gate.evaluate(results),
        };
        trace!(gate = %self.gate, result, "binary gate evaluated");
        result
    }

    pub fn into_fn<T, U>(self) -> impl Fn(&T, &U) -> bool
    where
        T: ?Sized,
        U: ?Sized,
        P: Fn(&T, &U) -> bool,
    {
        move |x: &T, y: &U| self.evaluate(x, y)
    }
}

impl<P> fmt::Debug for BinaryGate<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryGate")
            .field("gate", &self.gate)
            .field("config", &self.config)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

pub fn combine<T, U, P>(gate: Gate, predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    BinaryGate::new(gate, predicates).into_fn()
}

/// AND gate: true if every predicate is true.
pub fn and<T, U, P>(predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    combine(Gate::And, predicates)
}

/// NAND gate: true if at least one predicate is false.
pub fn nand<T, U, P>(predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    combine(Gate::Nand, predicates)
}

/// OR gate: true if at least one predicate is true.
pub fn or<T, U, P>(predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    combine(Gate::Or, predicates)
}

/// NOR gate: true if every predicate is false.
pub fn nor<T, U, P>(predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    combine(Gate::Nor, predicates)
}

/// XOR gate: true if the results are mixed.
pub fn xor<T, U, P>(predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    combine(Gate::Xor, predicates)
}

/// XNOR gate: true if the results are not mixed.
pub fn xnor<T, U, P>(predicates: Predicates<P>) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    P: Fn(&T, &U) -> bool,
{
    combine(Gate::Xnor, predicates)
}
