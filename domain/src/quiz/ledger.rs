//! Category ledger operations.
//!
//! Pure functions over a category list. Nothing here mutates its input:
//! updates return a new list, so a rejected update leaves the caller's
//! categories exactly as they were.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`apply_update`] | Replace probabilities named in a model update |
//! | [`find_winner`] | First category at or above the threshold |
//! | [`leading_category`] | Highest probability, first on ties |
//! | [`renormalize`] | Opt-in rescale so probabilities sum to 1 |

use super::entities::Category;
use super::value_objects::ConfidenceThreshold;
use crate::core::error::ValidationError;
use std::collections::HashMap;

fn in_unit_range(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Apply a name → probability update to `categories`.
///
/// Categories named in `updates` take the supplied value; the rest keep
/// theirs. Keys that match no category are ignored, but their values are
/// still range-checked. Any value outside `[0, 1]` rejects the whole update.
pub fn apply_update(
    categories: &[Category],
    updates: &HashMap<String, f64>,
) -> Result<Vec<Category>, ValidationError> {
    // Sorted so the reported offender does not depend on hash order
    let mut offenders: Vec<(&String, &f64)> = updates
        .iter()
        .filter(|(_, value)| !in_unit_range(**value))
        .collect();
    offenders.sort_by(|a, b| a.0.cmp(b.0));

    if let Some((name, value)) = offenders.first() {
        return Err(ValidationError::ProbabilityOutOfRange {
            category: (*name).clone(),
            value: **value,
        });
    }

    Ok(categories
        .iter()
        .map(|category| match updates.get(&category.name) {
            Some(&probability) => Category::new(category.name.clone(), probability),
            None => category.clone(),
        })
        .collect())
}

/// First category, in list order, whose probability reaches `threshold`.
pub fn find_winner(categories: &[Category], threshold: ConfidenceThreshold) -> Option<&Category> {
    categories
        .iter()
        .find(|c| threshold.is_reached_by(c.probability))
}

/// Category with the highest probability; the earliest one wins ties.
pub fn leading_category(categories: &[Category]) -> Option<&Category> {
    categories.iter().fold(None, |best: Option<&Category>, c| match best {
        Some(b) if b.probability >= c.probability => Some(b),
        _ => Some(c),
    })
}

/// Rescale probabilities so they sum to 1.
///
/// Returns the list unchanged when the total is zero.
pub fn renormalize(categories: &[Category]) -> Vec<Category> {
    let total: f64 = categories.iter().map(|c| c.probability).sum();
    if total <= 0.0 {
        return categories.to_vec();
    }
    categories
        .iter()
        .map(|c| Category::new(c.name.clone(), (c.probability / total).clamp(0.0, 1.0)))
        .collect()
}
