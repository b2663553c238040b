// Positional snapshot deltas and their display formatting.
// Rows are matched by index, not key: a removed or reordered row shifts every
// later row onto a stale baseline and produces spurious deltas. Known flaw of
// the source behavior; kept on purpose (see DESIGN.md).

use std::time::Duration;

/// Game ticks per second; energy deltas are shown as a per-tick rate.
pub const TICKS_PER_SECOND: f64 = 20.0;

/// Visual class of a delta cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaClass {
    Add,
    Sub,
    Zero,
}

impl DeltaClass {
    pub fn of(amount: i64) -> Self {
        match amount {
            a if a > 0 => DeltaClass::Add,
            a if a < 0 => DeltaClass::Sub,
            _ => DeltaClass::Zero,
        }
    }

    /// CSS class written on the diff-value span.
    pub fn css_class(self) -> &'static str {
        match self {
            DeltaClass::Add => "add",
            DeltaClass::Sub => "sub",
            DeltaClass::Zero => "zero",
        }
    }
}

/// Signed difference between a row's current and previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub amount: i64,
    pub class: DeltaClass,
}

impl Delta {
    /// Delta against the previous snapshot's row at the same index. A missing
    /// previous row (snapshot grew) counts as 0, so new rows show their full
    /// value as an increase.
    pub fn between(current: i64, previous: Option<i64>) -> Self {
        let amount = current - previous.unwrap_or(0);
        Delta {
            amount,
            class: DeltaClass::of(amount),
        }
    }
}

/// Per-tick energy rate from a raw delta and the wall-clock gap between the
/// two polls, truncated toward zero. Approximation only: polling jitter goes
/// straight into the number.
pub fn energy_rate(delta: i64, elapsed: Duration) -> i64 {
    (delta as f64 * elapsed.as_secs_f64() / TICKS_PER_SECOND).trunc() as i64
}

/// Decimal rendering with thousands grouping ("1,234,567").
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Delta text with an explicit sign: "+1,234", "-56", and "±0" for no change.
pub fn format_delta(amount: i64) -> String {
    match amount {
        a if a > 0 => format!("+{}", group_thousands(a)),
        a if a < 0 => group_thousands(a),
        _ => "±0".into(),
    }
}
