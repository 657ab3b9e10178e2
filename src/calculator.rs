use crate::history::SharedHistory;
use crate::operation::Operation;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Errors that can occur while evaluating a calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    /// Division with a zero divisor, carrying the rejected dividend.
    #[error("division by zero: {0} / 0")]
    DivisionByZero(i64),
}

/// Capability contract for a calculator that records its operations.
///
/// Every successful operation appends exactly one formatted entry
/// (`"<a> <op> <b> = <result>"`) to the bound history before returning.
pub trait Calculator {
    /// Returns `a + b` and logs the operation.
    fn add(&mut self, a: i64, b: i64) -> i64;

    /// Returns `a - b` and logs the operation.
    fn subtract(&mut self, a: i64, b: i64) -> i64;

    /// Returns `a * b` and logs the operation.
    fn multiply(&mut self, a: i64, b: i64) -> i64;

    /// Returns `a / b` truncated toward zero and logs the operation.
    ///
    /// A zero divisor yields [`CalculatorError::DivisionByZero`] and logs
    /// nothing.
    fn divide(&mut self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Rebinds the calculator to `history`.
    ///
    /// Entries already logged stay where they are; subsequent operations log
    /// to `history` only.
    fn set_history(&mut self, history: SharedHistory);
}

/// Calculator for the four basic integer operations.
///
/// Arithmetic follows native `i64` semantics; overflow is not separately
/// guarded. The history handle is supplied by the caller and replaceable via
/// [`Calculator::set_history`].
pub struct BasicCalculator {
    history: SharedHistory,
}

impl BasicCalculator {
    /// Creates a calculator bound to the given history.
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    fn record(&mut self, op: Operation, a: i64, b: i64, result: i64) -> i64 {
        let entry = op.describe(a, b, result);
        debug!("recording operation: {}", entry);
        self.history.borrow_mut().add_entry(entry);
        result
    }
}

impl Debug for BasicCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCalculator").finish_non_exhaustive()
    }
}

impl Calculator for BasicCalculator {
    fn add(&mut self, a: i64, b: i64) -> i64 {
        let result = a + b;
        self.record(Operation::Add, a, b, result)
    }

    fn subtract(&mut self, a: i64, b: i64) -> i64 {
        let result = a - b;
        self.record(Operation::Subtract, a, b, result)
    }

    fn multiply(&mut self, a: i64, b: i64) -> i64 {
        let result = a * b;
        self.record(Operation::Multiply, a, b, result)
    }

    fn divide(&mut self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        if b == 0 {
            warn!("division by zero rejected: {} / 0", a);
            return Err(CalculatorError::DivisionByZero(a));
        }
        let result = a / b;
        Ok(self.record(Operation::Divide, a, b, result))
    }

    fn set_history(&mut self, history: SharedHistory) {
        debug!("history handle rebound");
        self.history = history;
    }
}
