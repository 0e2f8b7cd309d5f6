//! Control flow: signals, conditions and loop ranges.
//!
//! `break`, `continue` and `return` travel up the statement walk as a
//! [`Signal`]. Loops catch `Break` and `Continue`; nothing catches
//! `Return`, which ends the run.

use std::ops::RangeInclusive;

use crate::errors::EvalErrorKind;
use crate::Value;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    Normal,
    Break,
    Continue,
    Return(Value),
}

/// What a loop does after one run of its body.
#[derive(Debug, PartialEq)]
pub enum LoopAction {
    /// Go on with the next iteration.
    Next,
    /// Leave the loop; the statement finishes with this signal.
    Exit(Signal),
}

impl LoopAction {
    /// Loops absorb `Break` and `Continue` and pass `Return` through.
    pub fn after_body(signal: Signal) -> LoopAction {
        match signal {
            Signal::Normal | Signal::Continue => LoopAction::Next,
            Signal::Break => LoopAction::Exit(Signal::Normal),
            ret @ Signal::Return(_) => LoopAction::Exit(ret),
        }
    }
}

/// Non-zero numbers and non-empty strings are true.
pub fn is_truthy(value: &Value) -> Result<bool, EvalErrorKind> {
    match value {
        Value::Int(n) => Ok(*n != 0),
        Value::Float(x) => Ok(*x != 0.0),
        Value::Str(s) => Ok(!s.is_empty()),
        Value::Array(_) | Value::Null => Err(EvalErrorKind::InvalidCondition {
            type_name: value.type_name(),
        }),
    }
}

fn range_bound(value: &Value) -> Result<i64, EvalErrorKind> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(x) => Ok(x.trunc() as i64),
        _ => Err(EvalErrorKind::InvalidRangeBound {
            type_name: value.type_name(),
        }),
    }
}

/// `start:end` as a closed integer range. Float bounds are truncated.
pub fn loop_range(start: &Value, end: &Value) -> Result<RangeInclusive<i64>, EvalErrorKind> {
    Ok(range_bound(start)?..=range_bound(end)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loops_absorb_break_and_continue() {
        assert_eq!(LoopAction::after_body(Signal::Normal), LoopAction::Next);
        assert_eq!(LoopAction::after_body(Signal::Continue), LoopAction::Next);
        assert_eq!(
            LoopAction::after_body(Signal::Break),
            LoopAction::Exit(Signal::Normal)
        );
        assert_eq!(
            LoopAction::after_body(Signal::Return(Value::Int(1))),
            LoopAction::Exit(Signal::Return(Value::Int(1)))
        );
    }

    #[test]
    fn truthiness() {
        assert_eq!(is_truthy(&Value::Int(0)), Ok(false));
        assert_eq!(is_truthy(&Value::Float(0.5)), Ok(true));
        assert_eq!(is_truthy(&Value::string("")), Ok(false));
        assert!(is_truthy(&Value::Null).is_err());
    }

    #[test]
    fn ranges_are_inclusive() {
        let range = loop_range(&Value::Int(1), &Value::Float(3.7));
        assert_eq!(range.map(|r| r.collect::<Vec<_>>()), Ok(vec![1, 2, 3]));
        assert_eq!(
            loop_range(&Value::Int(3), &Value::Int(1)).map(|r| r.count()),
            Ok(0)
        );
        assert_eq!(
            loop_range(&Value::string("a"), &Value::Int(1)),
            Err(EvalErrorKind::InvalidRangeBound { type_name: "string" })
        );
    }
}
