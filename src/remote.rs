//! Normalization of third-party face analysis responses.
//!
//! Remote services disagree on field names and nesting, so each field is
//! resolved through an ordered list of candidate locations. The first
//! candidate whose value passes the field's parser wins.

use serde_json::Value;

use crate::report::{LabeledScore, ShapeReport};
use crate::tips::GENERIC_TIPS;

/// Keys that may wrap the actual result object.
const NESTED_KEYS: &[&str] = &["result", "data", "output"];
const SHAPE_KEYS: &[&str] = &["face_shape", "faceShape", "shape"];
const CONFIDENCE_KEYS: &[&str] = &["confidence", "score"];
const SCORES_KEYS: &[&str] = &["scores", "distribution"];
const TIPS_KEYS: &[&str] = &["tips"];

const ENTRY_LABEL_KEYS: &[&str] = &["shape", "label"];
const ENTRY_SCORE_KEYS: &[&str] = &["score", "confidence"];

/// Normalize a remote payload into a report.
///
/// Returns `None` when no shape label or no confidence can be found. Missing
/// scores fall back to the demo distribution and missing tips to the generic
/// tips.
pub fn normalize_remote(payload: &Value) -> Option<ShapeReport> {
    let root = payload.as_object()?;
    let nested = NESTED_KEYS
        .iter()
        .find_map(|key| root.get(*key).filter(|v| !v.is_null()));

    let scopes: Vec<&Value> = std::iter::once(payload).chain(nested).collect();

    let shape = first_valid(&scopes, SHAPE_KEYS, pick_label)?;
    let confidence = first_valid(&scopes, CONFIDENCE_KEYS, pick_confidence)?;
    let scores = first_valid(&scopes, SCORES_KEYS, pick_scores)
        .unwrap_or_else(|| ShapeReport::demo().scores);
    let tips = first_valid(&scopes, TIPS_KEYS, pick_tips)
        .unwrap_or_else(|| GENERIC_TIPS.iter().map(|tip| tip.to_string()).collect());

    Some(ShapeReport {
        shape,
        confidence,
        scores,
        tips,
        demo: false,
    })
}

/// Try every key in every scope, in order, returning the first parsed value.
fn first_valid<T>(scopes: &[&Value], keys: &[&str], pick: fn(&Value) -> Option<T>) -> Option<T> {
    scopes
        .iter()
        .flat_map(|&scope| keys.iter().filter_map(move |key| scope.get(*key)))
        .find_map(pick)
}

fn pick_label(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// A finite number or numeric string. Values above 1 are taken as
/// percentages.
fn pick_confidence(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())?;

    Some(if n > 1.0 { n / 100.0 } else { n })
}

/// A non-empty list of labeled scores. Unusable entries are skipped.
fn pick_scores(value: &Value) -> Option<Vec<LabeledScore>> {
    let entries = value.as_array()?;
    let scores: Vec<_> = entries
        .iter()
        .filter_map(|entry| {
            let entry = [entry];
            Some(LabeledScore {
                shape: first_valid(&entry, ENTRY_LABEL_KEYS, pick_label)?,
                score: first_valid(&entry, ENTRY_SCORE_KEYS, pick_confidence)?,
            })
        })
        .collect();

    (!scores.is_empty()).then_some(scores)
}

/// An array made only of strings.
fn pick_tips(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|tip| tip.as_str().map(str::to_string))
        .collect()
}
