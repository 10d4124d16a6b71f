//! Raw form input — the value as it arrives from the UI.
//!
//! Browser form fields post strings, programmatic callers pass numbers, and
//! untouched optional fields arrive as nothing at all. [`RawInput`] makes
//! those three shapes explicit instead of leaning on runtime coercion.

/// A single raw form value, before any validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawInput {
    /// A form field's string content, not yet trimmed or parsed.
    Text(String),
    /// An already-numeric value from a programmatic caller.
    Number(f64),
    /// Empty string, null, and absent field all collapse here.
    #[default]
    Empty,
}

impl RawInput {
    /// Whether this input counts as empty: `Empty`, or text that is blank
    /// after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            RawInput::Empty => true,
            RawInput::Text(s) => s.trim().is_empty(),
            RawInput::Number(_) => false,
        }
    }

    /// Parse as a currency amount. Non-finite values (NaN, ±inf) count as a
    /// failed parse so they can never slip past the range checks.
    pub fn parse_currency(&self) -> Option<f64> {
        let n = match self {
            RawInput::Number(n) => *n,
            RawInput::Text(s) => s.trim().parse::<f64>().ok()?,
            RawInput::Empty => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Parse as an integer. A `Number` qualifies only when it is
    /// integer-valued and fits in `i64`; text must parse as a whole number.
    pub fn parse_integer(&self) -> Option<i64> {
        match self {
            RawInput::Number(n) => {
                let in_range = (i64::MIN as f64..=i64::MAX as f64).contains(n);
                (n.is_finite() && n.fract() == 0.0 && in_range).then_some(*n as i64)
            }
            RawInput::Text(s) => s.trim().parse::<i64>().ok(),
            RawInput::Empty => None,
        }
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::Text(s)
    }
}

impl From<f64> for RawInput {
    fn from(n: f64) -> Self {
        RawInput::Number(n)
    }
}

impl From<i64> for RawInput {
    fn from(n: i64) -> Self {
        RawInput::Number(n as f64)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(RawInput::Empty, Into::into)
    }
}
