use calculator_sdk::{CalculatorApi, Operation};
use tracing::debug;

/// Shown when divide is requested with a zero divisor; detected locally,
/// no request is issued.
const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// Calculator keypad state.
///
/// Invariant: the first operand and the pending operation are both set or
/// both unset.
#[derive(Debug)]
pub struct Keypad {
    display: String,
    first_number: Option<String>,
    operation: Option<Operation>,
    waiting_for_second: bool,
    error: Option<String>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// A cleared keypad showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_owned(),
            first_number: None,
            operation: None,
            waiting_for_second: false,
            error: None,
        }
    }

    /// Current display string.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Error message, if one is shown.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Snapshotted first operand and pending operation, for status rendering.
    #[must_use]
    pub fn pending(&self) -> Option<(&str, Operation)> {
        match (&self.first_number, self.operation) {
            (Some(first), Some(op)) => Some((first.as_str(), op)),
            _ => None,
        }
    }

    /// Press a digit key (`'0'..='9'`). Non-digit characters are ignored.
    pub fn press_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.error = None;
        if self.waiting_for_second {
            self.display.clear();
            self.display.push(digit);
            self.waiting_for_second = false;
        } else if self.display == "0" {
            self.display.clear();
            self.display.push(digit);
        } else {
            self.display.push(digit);
        }
    }

    /// Press the decimal point key.
    ///
    /// An entry never gains a second point, and a point starting a fresh
    /// entry produces `0.`; every display string stays parseable.
    pub fn press_point(&mut self) {
        self.error = None;
        if self.waiting_for_second {
            self.display.clear();
            self.display.push_str("0.");
            self.waiting_for_second = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Press an operation key: snapshot the display as the first operand and
    /// wait for the second number.
    pub fn press_operation(&mut self, op: Operation) {
        self.error = None;
        self.first_number = Some(self.display.clone());
        self.operation = Some(op);
        self.waiting_for_second = true;
    }

    /// Press Clear: back to the initial state.
    pub fn press_clear(&mut self) {
        self.display = "0".to_owned();
        self.first_number = None;
        self.operation = None;
        self.waiting_for_second = false;
        self.error = None;
    }

    /// Press Equals.
    ///
    /// No-op without a pending operation. Divide by zero is caught locally
    /// and never issues a request (the pending operation is kept). Otherwise
    /// performs exactly one call: on success the display becomes the
    /// formatted result, on failure the display is kept and the error field
    /// is set; either way the pending operation is cleared.
    pub async fn press_equals(&mut self, api: &dyn CalculatorApi) {
        let Some(op) = self.operation else {
            return;
        };
        let Some(first) = self.first_number.clone() else {
            return;
        };

        let (Ok(a), Ok(b)) = (first.parse::<f64>(), self.display.parse::<f64>()) else {
            // Unreachable through key presses; kept so a hand-built state
            // cannot trigger a bogus request.
            self.error = Some("Calculation failed: operands are not numbers".to_owned());
            self.first_number = None;
            self.operation = None;
            return;
        };

        if op == Operation::Divide && b == 0.0 {
            self.error = Some(DIVIDE_BY_ZERO.to_owned());
            return;
        }

        debug!(op = op.path(), a, b, "issuing calculator request");
        match api.compute(op, a, b).await {
            Ok(result) => {
                self.display = format_result(result);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Calculation failed: {e}"));
            }
        }
        self.first_number = None;
        self.operation = None;
    }
}

/// Render a computed value the way a calculator shows it: integral results
/// without a fractional part, everything else with Rust's shortest-roundtrip
/// `f64` formatting.
fn format_result(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use calculator_sdk::CalculatorError;
    use std::sync::Mutex;

    /// Scripted CalculatorApi recording every call.
    struct MockCalculator {
        response: Result<f64, CalculatorError>,
        calls: Mutex<Vec<(Operation, f64, f64)>>,
    }

    impl MockCalculator {
        fn returning(value: f64) -> Self {
            Self {
                response: Ok(value),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: CalculatorError) -> Self {
            Self {
                response: Err(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(Operation, f64, f64)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CalculatorApi for MockCalculator {
        async fn compute(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
            self.calls.lock().unwrap().push((op, a, b));
            self.response.clone()
        }
    }

    fn press_sequence(keypad: &mut Keypad, keys: &str) {
        for key in keys.chars() {
            match key {
                '0'..='9' => keypad.press_digit(key),
                '.' => keypad.press_point(),
                '+' => keypad.press_operation(Operation::Add),
                '-' => keypad.press_operation(Operation::Subtract),
                '*' => keypad.press_operation(Operation::Multiply),
                '/' => keypad.press_operation(Operation::Divide),
                'c' => keypad.press_clear(),
                other => panic!("unsupported test key {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn twelve_plus_three_requests_once_and_displays_result() {
        let mock = MockCalculator::returning(15.0);
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "12+3");
        keypad.press_equals(&mock).await;

        assert_eq!(mock.calls(), vec![(Operation::Add, 12.0, 3.0)]);
        assert_eq!(keypad.display(), "15");
        assert_eq!(keypad.error(), None);
        assert_eq!(keypad.pending(), None);
    }

    #[tokio::test]
    async fn divide_by_zero_never_issues_a_request() {
        let mock = MockCalculator::returning(0.0);
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "8/0");
        keypad.press_equals(&mock).await;

        assert!(mock.calls().is_empty());
        assert_eq!(keypad.error(), Some("Cannot divide by zero"));
        assert_eq!(keypad.display(), "0");
    }

    #[tokio::test]
    async fn clear_resets_everything() {
        let mock = MockCalculator::returning(0.0);
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "8/0");
        keypad.press_equals(&mock).await;
        keypad.press_clear();

        assert_eq!(keypad.display(), "0");
        assert_eq!(keypad.error(), None);
        assert_eq!(keypad.pending(), None);
    }

    #[tokio::test]
    async fn identical_sequences_produce_identical_displays() {
        let mock = MockCalculator::returning(15.0);

        let mut first = Keypad::new();
        press_sequence(&mut first, "12+3");
        first.press_equals(&mock).await;

        let mut second = Keypad::new();
        press_sequence(&mut second, "12+3");
        second.press_equals(&mock).await;

        assert_eq!(first.display(), second.display());
    }

    #[tokio::test]
    async fn failure_keeps_display_and_sets_error() {
        let mock = MockCalculator::failing(CalculatorError::transport("connection refused"));
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "12+3");
        keypad.press_equals(&mock).await;

        assert_eq!(keypad.display(), "3");
        assert_eq!(
            keypad.error(),
            Some("Calculation failed: network error: connection refused")
        );
        // The pending operation is consumed even on failure.
        assert_eq!(keypad.pending(), None);
    }

    #[tokio::test]
    async fn server_validation_message_is_shown() {
        let mock =
            MockCalculator::failing(CalculatorError::validation("Both parameters must be numbers."));
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "1+2");
        keypad.press_equals(&mock).await;

        assert_eq!(
            keypad.error(),
            Some("Calculation failed: Both parameters must be numbers.")
        );
    }

    #[tokio::test]
    async fn equals_without_pending_operation_is_a_noop() {
        let mock = MockCalculator::returning(42.0);
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "12");
        keypad.press_equals(&mock).await;

        assert!(mock.calls().is_empty());
        assert_eq!(keypad.display(), "12");
    }

    #[test]
    fn digit_after_operation_starts_second_entry() {
        let mut keypad = Keypad::new();
        press_sequence(&mut keypad, "12+3");

        assert_eq!(keypad.display(), "3");
        assert_eq!(keypad.pending(), Some(("12", Operation::Add)));
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut keypad = Keypad::new();
        press_sequence(&mut keypad, "07");
        assert_eq!(keypad.display(), "7");
    }

    #[test]
    fn an_entry_gets_at_most_one_point() {
        let mut keypad = Keypad::new();
        press_sequence(&mut keypad, "1.5");
        keypad.press_point();
        assert_eq!(keypad.display(), "1.5");
    }

    #[test]
    fn point_starting_an_entry_is_normalized() {
        let mut keypad = Keypad::new();
        keypad.press_point();
        assert_eq!(keypad.display(), "0.");

        let mut keypad = Keypad::new();
        press_sequence(&mut keypad, "1+");
        keypad.press_point();
        assert_eq!(keypad.display(), "0.");
    }

    #[test]
    fn key_press_clears_shown_error() {
        let mut keypad = Keypad::new();
        keypad.error = Some("Cannot divide by zero".to_owned());
        keypad.press_digit('5');
        assert_eq!(keypad.error(), None);
    }

    #[tokio::test]
    async fn fractional_results_keep_full_precision() {
        let mock = MockCalculator::returning(0.3 - 0.1);
        let mut keypad = Keypad::new();

        press_sequence(&mut keypad, "0.3-0.1");
        keypad.press_equals(&mock).await;

        assert_eq!(keypad.display(), "0.19999999999999998");
    }

    #[test]
    fn format_result_drops_integral_fraction() {
        assert_eq!(format_result(15.0), "15");
        assert_eq!(format_result(-2.0), "-2");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(0.5), "0.5");
    }
}
