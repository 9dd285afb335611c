//! Test-only helpers for building instrumented predicates.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::predicates::Predicates;

/// Shared record of which predicates were invoked, in invocation order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<usize>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of invoked predicates, in the order they ran.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }

    /// Number of times the predicate at `index` ran.
    pub fn count(&self, index: usize) -> usize {
        self.calls.borrow().iter().filter(|&&i| i == index).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// A predicate that records `index` and returns a fixed `result`.
    pub fn predicate(&self, index: usize, result: bool) -> impl Fn(&i32) -> bool + use<> {
        let calls = Rc::clone(&self.calls);
        move |_: &i32| {
            calls.borrow_mut().push(index);
            result
        }
    }

    /// A two-input predicate that records `index` and returns a fixed `result`.
    pub fn binary_predicate(
        &self,
        index: usize,
        result: bool,
    ) -> impl Fn(&i32, &i32) -> bool + use<> {
        let calls = Rc::clone(&self.calls);
        move |_: &i32, _: &i32| {
            calls.borrow_mut().push(index);
            result
        }
    }

    /// One recording predicate per entry of `results`, indexed by position.
    ///
    /// Panics if `results` is empty.
    pub fn predicates(&self, results: &[bool]) -> Predicates<impl Fn(&i32) -> bool + use<>> {
        let items = results
            .iter()
            .enumerate()
            .map(|(index, result)| self.predicate(index, *result))
            .collect();
        Predicates::new(items).expect("at least one scripted result")
    }

    /// Two-input counterpart of [`CallLog::predicates`].
    pub fn binary_predicates(
        &self,
        results: &[bool],
    ) -> Predicates<impl Fn(&i32, &i32) -> bool + use<>> {
        let items = results
            .iter()
            .enumerate()
            .map(|(index, result)| self.binary_predicate(index, *result))
            .collect();
        Predicates::new(items).expect("at least one scripted result")
    }
}
