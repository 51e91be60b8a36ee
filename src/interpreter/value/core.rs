use std::{borrow::Cow, cmp::Ordering, fmt, sync::Arc};

use ordered_float::OrderedFloat;

use crate::util::num::{format_number, parse_number};

/// Represents a value flowing through a compiled expression.
///
/// Every variant can be coerced to every other view (number, boolean, string)
/// so operators and functions never fail on a type mismatch. Variants are
/// immutable: every operation returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value, produced by comparisons and logical operators.
    Boolean(bool),
    /// A string value. Shared so cloning a literal never copies its text.
    String(Arc<str>),
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(Arc::from(v))
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self::String(Arc::from(v))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl Variant {
    /// Converts the value to an `f64`.
    ///
    /// - Numbers are returned as-is.
    /// - Booleans map to `1.0` and `0.0`.
    /// - Strings are parsed after trimming; text that is not a number yields
    ///   `0.0`.
    ///
    /// # Example
    /// ```
    /// use condex::Variant;
    ///
    /// assert_eq!(Variant::Boolean(true).as_number(), 1.0);
    /// assert_eq!(Variant::from(" 2.5 ").as_number(), 2.5);
    /// assert_eq!(Variant::from("rain").as_number(), 0.0);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            },
            Self::String(s) => parse_number(s).unwrap_or(0.0),
        }
    }

    /// Converts the value to `bool`.
    ///
    /// - Numbers are true when non-zero.
    /// - Strings are false only when they read `false`, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use condex::Variant;
    ///
    /// assert!(!Variant::Number(0.0).as_boolean());
    /// assert!(!Variant::from("FALSE").as_boolean());
    /// assert!(Variant::from("no").as_boolean());
    /// ```
    #[must_use]
    pub fn as_boolean(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Boolean(b) => *b,
            Self::String(s) => !s.eq_ignore_ascii_case("false"),
        }
    }

    /// Converts the value to text.
    ///
    /// Strings are borrowed; numbers print integral values without a
    /// fractional part.
    #[must_use]
    pub fn as_string(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::String(s) => Cow::Borrowed(s),
        }
    }

    /// Returns a `Boolean` variant holding [`Variant::as_boolean`].
    ///
    /// # Example
    /// ```
    /// use condex::Variant;
    ///
    /// assert_eq!(Variant::Number(-3.0).coerce_boolean(), Variant::Boolean(true));
    /// ```
    #[must_use]
    pub fn coerce_boolean(&self) -> Self {
        Self::Boolean(self.as_boolean())
    }

    /// Compares two values using the left operand's type.
    ///
    /// The right operand is coerced to the left operand's type before
    /// comparing: numerically for numbers (a total order where NaN sorts
    /// above every other number), `false < true` for booleans, and
    /// lexicographically for strings.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use condex::Variant;
    ///
    /// let ten = Variant::Number(10.0);
    /// assert_eq!(ten.compare_to(&Variant::from("9")), Ordering::Greater);
    ///
    /// // The same operands compare as text when the string is on the left.
    /// assert_eq!(Variant::from("9").compare_to(&ten), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        match self {
            Self::Number(n) => OrderedFloat(*n).cmp(&OrderedFloat(other.as_number())),
            Self::Boolean(b) => b.cmp(&other.as_boolean()),
            Self::String(s) => (**s).cmp(&*other.as_string()),
        }
    }

    /// Combines two values according to the left operand's type.
    ///
    /// Numbers add, booleans are OR-ed and strings concatenate. The argument
    /// is coerced, so this never fails.
    ///
    /// # Example
    /// ```
    /// use condex::Variant;
    ///
    /// assert_eq!(Variant::Number(1.0).add(&Variant::Number(2.0)), Variant::Number(3.0));
    /// assert_eq!(Variant::from("a").add(&Variant::from("b")), Variant::from("ab"));
    /// assert_eq!(Variant::Boolean(false).add(&Variant::Boolean(true)),
    ///            Variant::Boolean(true));
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        match self {
            Self::Number(n) => Self::Number(n + other.as_number()),
            Self::Boolean(b) => Self::Boolean(*b || other.as_boolean()),
            Self::String(s) => {
                let suffix = other.as_string();
                let mut joined = String::with_capacity(s.len() + suffix.len());
                joined.push_str(s);
                joined.push_str(&suffix);
                Self::String(joined.into())
            },
        }
    }
}
