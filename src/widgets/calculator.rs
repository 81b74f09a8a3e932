//! Four-function calculator overlay.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Remainder => "%",
        }
    }

    /// Maps a typed key to an operator; `*` and `/` stand for `×` and `÷`.
    pub fn from_key(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            '%' => Some(Operator::Remainder),
            _ => None,
        }
    }

    fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(a + b),
            Operator::Subtract => Some(a - b),
            Operator::Multiply => Some(a * b),
            Operator::Divide if b == 0.0 => None,
            Operator::Divide => Some(a / b),
            Operator::Remainder => Some(a % b),
        }
    }
}

pub const ERROR_DISPLAY: &str = "Error";

/// Prints a number without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Non-integer results with a long representation are cut to 10 decimals.
fn round_result(value: f64) -> f64 {
    if value.fract() == 0.0 || format_number(value).len() <= 10 {
        return value;
    }
    format!("{value:.10}").parse().unwrap_or(value)
}

#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    history: String,
    pending: Option<(f64, Operator)>,
    clear_on_input: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            history: String::new(),
            pending: None,
            clear_on_input: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Appends a digit or the decimal point.
    pub fn input(&mut self, c: char) {
        match c {
            '.' => {
                if self.clear_on_input {
                    self.display = "0.".to_string();
                    self.clear_on_input = false;
                } else if !self.display.contains('.') {
                    self.display.push('.');
                }
            }
            '0'..='9' => {
                if self.display == "0" || self.clear_on_input {
                    self.display = c.to_string();
                    self.clear_on_input = false;
                } else {
                    self.display.push(c);
                }
            }
            _ => {}
        }
    }

    /// Stores the displayed value with `op`, resolving any pending
    /// operation first.
    pub fn operator(&mut self, op: Operator) {
        if self.pending.is_some() && !self.clear_on_input {
            self.equals();
        }
        let value = self.value();
        self.pending = Some((value, op));
        self.clear_on_input = true;
        self.history = format!("{} {}", format_number(value), op.symbol());
    }

    pub fn equals(&mut self) {
        let Some((left, op)) = self.pending else {
            return;
        };
        let right = self.value();
        let Some(result) = op.apply(left, right) else {
            debug!("calculator division by zero");
            self.clear();
            self.display = ERROR_DISPLAY.to_string();
            self.clear_on_input = true;
            return;
        };
        let result = round_result(result);
        self.history = format!(
            "{} {} {} =",
            format_number(left),
            op.symbol(),
            format_number(right)
        );
        self.display = format_number(result);
        self.pending = None;
        self.clear_on_input = true;
    }

    pub fn toggle_sign(&mut self) {
        if self.display != "0" && self.display != ERROR_DISPLAY {
            self.display = format_number(-self.value());
        }
    }

    /// Clears and starts a fresh entry with `c`.
    pub fn start_with(&mut self, c: char) {
        self.clear();
        self.input(c);
    }
}
