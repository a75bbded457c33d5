use crate::command::{Command, Operation};
use crate::util::clamp;

/// Which end of the range a target was pulled back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    Write { value: i64, capped: Option<Cap> },
    /// Percentage outside of -100..=100
    RangeError,
}

/// Work out the brightness `cmd` asks for, given the device's current and
/// maximum value. `current <= max` is taken for granted.
pub fn compute(cmd: &Command, current: i64, max: i64) -> Outcome {
    let target = match cmd.operation {
        Operation::Query | Operation::Abort => return Outcome::NoChange,
        Operation::SetAbsolute => cmd.amount,
        Operation::SetPercentage => {
            if cmd.amount < -100 || cmd.amount > 100 {
                return Outcome::RangeError;
            }
            percent_of(max, cmd.amount)
        }
    };
    let target = if cmd.relative {
        current.saturating_add(target)
    } else {
        target
    };

    let value = clamp(target, 0, max);
    let capped = if target > max {
        Some(Cap::Max)
    } else if target < 0 {
        Some(Cap::Min)
    } else {
        None
    };
    Outcome::Write { value, capped }
}

// Single precision, truncated toward zero: -2.7 becomes -2, not -3.
fn percent_of(max: i64, percent: i64) -> i64 {
    ((max as f32 / 100.0) * percent as f32) as i64
}
