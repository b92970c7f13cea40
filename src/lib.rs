//! ROC curve and AUC computation for binary classifier evaluation.
//!
//! Takes the label/score pairs a trained classifier produces on held-out
//! data and summarizes how well the scores rank positives above negatives:
//!
//! - **ROC curve** — [`roc_curve`] sweeps every distinct score as a decision
//!   threshold and emits (fpr, tpr, threshold) points from (0, 0) to (1, 1)
//! - **AUC** — trapezoidal area under the curve, via [`roc_auc`] or the
//!   standalone integrator [`auc`]
//! - **Label coercion** — [`binary_labels`] turns a raw two-valued target
//!   column into the `bool` labels the curve functions consume
//! - **Errors** — [`EvalError`] and [`Result`] for structured failure on
//!   malformed or single-class input
//!
//! Everything is a pure function over borrowed slices: no I/O, no shared
//! state, safe to call concurrently.

pub mod error;
pub mod roc;

pub use error::{EvalError, Result};
pub use roc::{auc, binary_labels, roc_auc, roc_curve, RocCurve, RocPoint};
