//! Arithmetic calculator with an append-only operation history.
//!
//! A [`Calculator`] performs the four basic integer operations and records a
//! description of every successful call (`"2 + 2 = 4"`) into the [`History`]
//! it is bound to. A history keeps its entries in insertion order without
//! ever evicting, and answers most-recent-N queries; [`InMemoryHistory`] is
//! the built-in unbounded implementation. Both sides are traits, so either
//! can be replaced (by a test double, for instance) without touching the
//! other.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tallylog::{BasicCalculator, Calculator, History, InMemoryHistory};
//!
//! let history = Rc::new(RefCell::new(InMemoryHistory::new()));
//! let mut calculator = BasicCalculator::new(history.clone());
//!
//! assert_eq!(calculator.add(2, 2), 4);
//! assert_eq!(calculator.divide(7, 2).unwrap(), 3);
//! assert_eq!(
//!     history.borrow().get_last_operations(2),
//!     vec!["2 + 2 = 4", "7 / 2 = 3"]
//! );
//! ```

pub mod calculator;
pub mod history;
pub mod operation;

pub use calculator::{BasicCalculator, Calculator, CalculatorError};
pub use history::{History, InMemoryHistory, SharedHistory};
pub use operation::Operation;
