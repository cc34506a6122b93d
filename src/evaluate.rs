//! Resolving deferred values.

use anyhow::Result;

use crate::{def_boxed_thiserror, value::Value};

/// Length of a chain of deferred values (a computation returning a
/// computation returning ...) after which evaluation gives up. A
/// computation returning itself would otherwise recurse forever.
pub const MAX_EVALUATION_DEPTH: usize = 256;

def_boxed_thiserror!(EvalError, pub enum EvalErrorKind {
    #[error("deferred value nesting exceeds the evaluation depth limit of {limit}")]
    DepthExceeded { limit: usize },
});

/// Run all deferred computations in `value`, including those inside
/// containers (recursively, keys preserved), until none are left.
/// Errors returned by a computation are passed on as they are.
pub fn evaluate(value: &Value) -> Result<Value> {
    evaluate_with_limit(value, MAX_EVALUATION_DEPTH)
}

pub fn evaluate_with_limit(value: &Value, limit: usize) -> Result<Value> {
    evaluate_at(value, 0, limit)
}

fn evaluate_at(value: &Value, depth: usize, limit: usize) -> Result<Value> {
    match value {
        Value::Deferred(d) => {
            if depth >= limit {
                Err(EvalError::from(EvalErrorKind::DepthExceeded { limit }))?
            }
            let v = d.call()?;
            evaluate_at(&v, depth + 1, limit)
        }
        Value::Container(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (k, v) in entries {
                out.push((k.clone(), evaluate_at(v, depth, limit)?));
            }
            Ok(Value::Container(out))
        }
        _ => Ok(value.clone()),
    }
}
