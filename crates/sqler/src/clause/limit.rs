//! DISTINCT / TOP / LIMIT.
//!
//! The builder does not check dialect compatibility: `TOP` and `LIMIT a, b`
//! are emitted whenever they are requested.

/// Row limit of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    /// Verbatim clause body, trimmed.
    Verbatim(String),
    /// `LIMIT n`, only when `n >= 1`.
    Count(i64),
    /// `[count]` or `[offset, count]`, rendered `LIMIT a[, b]`.
    Seq(Vec<i64>),
    /// `LIMIT count[ OFFSET offset]`.
    Paged { count: i64, offset: i64 },
}

impl Limit {
    /// `LIMIT count OFFSET offset`.
    pub fn paged(count: i64, offset: i64) -> Self {
        Limit::Paged { count, offset }
    }
}

impl From<&str> for Limit {
    fn from(s: &str) -> Self {
        Limit::Verbatim(s.to_string())
    }
}

impl From<String> for Limit {
    fn from(s: String) -> Self {
        Limit::Verbatim(s)
    }
}

impl From<i64> for Limit {
    fn from(n: i64) -> Self {
        Limit::Count(n)
    }
}

impl From<i32> for Limit {
    fn from(n: i32) -> Self {
        Limit::Count(i64::from(n))
    }
}

impl From<u32> for Limit {
    fn from(n: u32) -> Self {
        Limit::Count(i64::from(n))
    }
}

impl From<f64> for Limit {
    fn from(n: f64) -> Self {
        // NaN saturates to 0, which renders nothing.
        Limit::Count(n.floor() as i64)
    }
}

impl From<Vec<i64>> for Limit {
    fn from(seq: Vec<i64>) -> Self {
        Limit::Seq(seq)
    }
}

impl<const N: usize> From<[i64; N]> for Limit {
    fn from(seq: [i64; N]) -> Self {
        Limit::Seq(seq.to_vec())
    }
}

/// Render `LIMIT ...`, or nothing for a non-positive count.
pub fn sql_limit(limit: Option<&Limit>) -> String {
    match limit {
        Some(Limit::Verbatim(s)) if !s.trim().is_empty() => format!("LIMIT {}", s.trim()),
        Some(Limit::Count(n)) if *n >= 1 => format!("LIMIT {n}"),
        Some(Limit::Seq(seq)) => match seq.as_slice() {
            [first, rest @ ..] if *first > 0 => match rest.first() {
                Some(second) if *second > 0 => format!("LIMIT {first}, {second}"),
                _ => format!("LIMIT {first}"),
            },
            _ => String::new(),
        },
        Some(Limit::Paged { count, offset }) if *count > 0 => {
            if *offset > 0 {
                format!("LIMIT {count} OFFSET {offset}")
            } else {
                format!("LIMIT {count}")
            }
        }
        _ => String::new(),
    }
}

/// `TOP n` request; text is parsed by its leading integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Top {
    Count(i64),
    Text(String),
}

impl From<i64> for Top {
    fn from(n: i64) -> Self {
        Top::Count(n)
    }
}

impl From<i32> for Top {
    fn from(n: i32) -> Self {
        Top::Count(i64::from(n))
    }
}

impl From<f64> for Top {
    fn from(n: f64) -> Self {
        Top::Count(n.trunc() as i64)
    }
}

impl From<&str> for Top {
    fn from(s: &str) -> Self {
        Top::Text(s.to_string())
    }
}

impl From<String> for Top {
    fn from(s: String) -> Self {
        Top::Text(s)
    }
}

/// Parse an optional sign and the leading run of digits, ignoring leading whitespace.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Render `TOP n` for a positive count, or nothing.
pub fn sql_top(top: Option<&Top>) -> String {
    let n = match top {
        Some(Top::Count(n)) => Some(*n),
        Some(Top::Text(s)) => leading_int(s),
        None => None,
    };
    match n {
        Some(n) if n > 0 => format!("TOP {n}"),
        _ => String::new(),
    }
}

/// Render `DISTINCT` when requested.
pub fn sql_distinct(distinct: bool) -> String {
    if distinct {
        "DISTINCT".to_string()
    } else {
        String::new()
    }
}
