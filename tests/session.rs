use std::cell::RefCell;
use std::rc::Rc;
use tallylog::{BasicCalculator, Calculator, CalculatorError, History, InMemoryHistory};

/// Creates a fresh shared in-memory history.
fn shared_history() -> Rc<RefCell<InMemoryHistory>> {
    Rc::new(RefCell::new(InMemoryHistory::new()))
}

#[test]
fn session_logs_every_operation_in_order() {
    let history = shared_history();
    let mut calculator = BasicCalculator::new(history.clone());

    assert_eq!(calculator.add(2, 2), 4);
    assert_eq!(calculator.multiply(-4, -5), 20);
    assert_eq!(calculator.divide(7, 2).unwrap(), 3);

    assert_eq!(
        history.borrow().get_last_operations(3),
        ["2 + 2 = 4", "-4 * -5 = 20", "7 / 2 = 3"]
    );
}

#[test]
fn session_continues_after_rejected_division() {
    let history = shared_history();
    let mut calculator = BasicCalculator::new(history.clone());

    calculator.add(1, 2);
    assert_eq!(
        calculator.divide(9, 0),
        Err(CalculatorError::DivisionByZero(9))
    );
    calculator.subtract(9, 9);

    // The rejected division leaves no trace in the log.
    assert_eq!(
        history.borrow().get_last_operations(10),
        ["1 + 2 = 3", "9 - 9 = 0"]
    );
}

#[test]
fn session_rebinds_history_without_moving_entries() {
    let first = shared_history();
    let second = shared_history();
    let mut calculator = BasicCalculator::new(first.clone());

    calculator.add(1, 1);
    calculator.set_history(second.clone());
    calculator.multiply(2, 3);

    assert_eq!(first.borrow().get_last_operations(10), ["1 + 1 = 2"]);
    assert_eq!(second.borrow().get_last_operations(10), ["2 * 3 = 6"]);
}

#[test]
fn session_accumulates_entries_without_bound() {
    let history = shared_history();
    let mut calculator = BasicCalculator::new(history.clone());

    for i in 0..100 {
        calculator.add(i, i);
    }

    let all = history.borrow().get_last_operations(100);
    assert_eq!(all.len(), 100);
    assert_eq!(all[0], "0 + 0 = 0");
    assert_eq!(all[99], "99 + 99 = 198");
}
