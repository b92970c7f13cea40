//! ROC curve and AUC computation.
//!
//! Given parallel slices of classifier scores and boolean ground-truth
//! labels, [`roc_curve`] sweeps every distinct score as a decision threshold
//! and emits one (fpr, tpr, threshold) point per threshold, together with
//! the trapezoidal area under the curve. [`auc`] integrates caller-supplied
//! points, and [`binary_labels`] coerces a raw two-valued numeric target
//! column into `bool` labels.
//!
//! # Example
//!
//! ```
//! use roceval::roc_curve;
//!
//! let scores = [0.9, 0.7, 0.5, 0.3];
//! let labels = [true, false, true, false];
//! let curve = roc_curve(&scores, &labels).unwrap();
//! assert!((curve.auc - 0.75).abs() < 1e-12);
//! ```

use crate::error::{EvalError, Result};

// ── Result types ────────────────────────────────────────────────────────────

/// A single point on the ROC curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RocPoint {
    /// Decision threshold at which this point is computed; `f64::INFINITY`
    /// for the initial "classify nothing as positive" anchor.
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN).
    pub fpr: f64,
    /// True positive rate (recall): TP / (TP + FN).
    pub tpr: f64,
}

/// ROC curve with its area.
#[derive(Debug, Clone)]
pub struct RocCurve {
    /// Points ordered by strictly decreasing threshold, from (0, 0) to (1, 1).
    pub points: Vec<RocPoint>,
    /// Area under the curve (trapezoidal rule), in [0, 1].
    pub auc: f64,
}

// ── Curve construction ──────────────────────────────────────────────────────

/// Compute the ROC curve from classifier scores and binary labels.
///
/// Sorts by descending score and walks thresholds from +∞ down to the
/// minimum score, emitting one point per distinct score value. Observations
/// tied at the same score are batched into a single point. The first point
/// is always (fpr 0, tpr 0) and the last is always (1, 1).
///
/// # Errors
///
/// Returns [`EvalError::InvalidInput`] if the slices are empty, have
/// different lengths, or contain a NaN score, and
/// [`EvalError::UndefinedRate`] if the labels are all positive or all
/// negative (one of the rates would divide by zero).
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> Result<RocCurve> {
    validate_inputs(scores, labels)?;

    let total_pos = labels.iter().filter(|&&l| l).count();
    let total_neg = labels.len() - total_pos;
    if total_pos == 0 {
        return Err(EvalError::UndefinedRate(
            "no positive labels; true positive rate is undefined".into(),
        ));
    }
    if total_neg == 0 {
        return Err(EvalError::UndefinedRate(
            "no negative labels; false positive rate is undefined".into(),
        ));
    }

    // Descending score; ties sort negatives first. The tie-break never shows
    // up in the output because tied scores collapse into one point, but it
    // keeps the sweep deterministic.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .total_cmp(&scores[a])
            .then_with(|| labels[a].cmp(&labels[b]))
    });

    let p = total_pos as f64;
    let n = total_neg as f64;

    let mut points = Vec::with_capacity(scores.len() + 1);
    // Threshold above every score: nothing classified positive.
    points.push(RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    });

    let mut tp = 0usize;
    let mut fp = 0usize;

    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }

        points.push(RocPoint {
            threshold,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    let area = auc(&points)?;
    Ok(RocCurve { points, auc: area })
}

/// Compute only the AUC of the ROC curve.
///
/// Shorthand for `roc_curve(scores, labels)?.auc`.
pub fn roc_auc(scores: &[f64], labels: &[bool]) -> Result<f64> {
    Ok(roc_curve(scores, labels)?.auc)
}

// ── Integration ─────────────────────────────────────────────────────────────

/// Trapezoidal area under a sequence of ROC points.
///
/// The points must satisfy the ordering produced by [`roc_curve`]: traversed
/// in one direction along the fpr axis with fpr and tpr each monotonically
/// non-decreasing toward (1, 1). Either traversal direction is accepted;
/// each trapezoid contributes its absolute width.
///
/// # Errors
///
/// Returns [`EvalError::InvalidInput`] if fewer than two points are supplied
/// (a single point cannot be integrated).
pub fn auc(points: &[RocPoint]) -> Result<f64> {
    if points.len() < 2 {
        return Err(EvalError::InvalidInput(format!(
            "need at least 2 ROC points to integrate, got {}",
            points.len()
        )));
    }

    let mut area = 0.0;
    for pair in points.windows(2) {
        area += (pair[1].fpr - pair[0].fpr).abs() * (pair[1].tpr + pair[0].tpr) / 2.0;
    }
    Ok(area)
}

// ── Label coercion ──────────────────────────────────────────────────────────

/// Coerce a raw numeric target column to binary labels.
///
/// The column must contain exactly two distinct values; the larger one is
/// mapped to `true` (positive class). This is the bridge from a model
/// pipeline's 0/1 target column to the `bool` labels [`roc_curve`] consumes.
///
/// # Errors
///
/// Returns [`EvalError::InvalidInput`] if the column is empty, contains NaN,
/// or has any number of distinct values other than two.
pub fn binary_labels(raw: &[f64]) -> Result<Vec<bool>> {
    if raw.is_empty() {
        return Err(EvalError::InvalidInput("empty label column".into()));
    }

    let mut distinct: Vec<f64> = Vec::with_capacity(2);
    for &v in raw {
        if v.is_nan() {
            return Err(EvalError::InvalidInput(
                "label column contains NaN".into(),
            ));
        }
        if !distinct.iter().any(|&d| d == v) {
            if distinct.len() == 2 {
                return Err(EvalError::InvalidInput(format!(
                    "label column has more than two distinct values ({}, {}, {}, ...)",
                    distinct[0], distinct[1], v
                )));
            }
            distinct.push(v);
        }
    }

    if distinct.len() < 2 {
        return Err(EvalError::InvalidInput(format!(
            "label column has a single distinct value ({})",
            distinct[0]
        )));
    }

    let positive = if distinct[0] > distinct[1] {
        distinct[0]
    } else {
        distinct[1]
    };
    Ok(raw.iter().map(|&v| v == positive).collect())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn validate_inputs(scores: &[f64], labels: &[bool]) -> Result<()> {
    if scores.is_empty() {
        return Err(EvalError::InvalidInput("empty input".into()));
    }
    if scores.len() != labels.len() {
        return Err(EvalError::InvalidInput(format!(
            "scores length {} != labels length {}",
            scores.len(),
            labels.len()
        )));
    }
    if scores.iter().any(|s| s.is_nan()) {
        return Err(EvalError::InvalidInput("scores contain NaN".into()));
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
