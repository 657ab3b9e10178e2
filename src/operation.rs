/// The four arithmetic operations a calculator performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Returns the operator symbol used in history entries.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Formats the history entry for one completed operation.
    ///
    /// Operands and result are rendered in plain decimal, so the entry for
    /// `add(2, 2)` reads exactly `"2 + 2 = 4"`.
    pub fn describe(&self, a: i64, b: i64, result: i64) -> String {
        format!("{} {} {} = {}", a, self.symbol(), b, result)
    }
}
