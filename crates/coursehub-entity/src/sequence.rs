//! Ordered-sequence helpers shared by subjects and modules.
//!
//! Sequences never contain gaps: the element at index `n` is unit or
//! lesson `n + 1`. All helpers return a fresh `Vec` and leave the input
//! slice untouched.

use serde::{Deserialize, Serialize};

use coursehub_core::error::AppError;
use coursehub_core::result::AppResult;

/// Where a new element goes in an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum Placement {
    /// Before every existing element.
    Start,
    /// After every existing element.
    #[default]
    End,
    /// At the given index, clamped to the sequence length.
    At(usize),
}

impl Placement {
    /// Resolve the placement to a concrete insertion index for a sequence of `len`.
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Self::Start => 0,
            Self::End => len,
            Self::At(index) => index.min(len),
        }
    }
}

/// Copy `items` with `item` inserted at `placement`.
pub(crate) fn inserted<T: Clone>(items: &[T], item: T, placement: Placement) -> Vec<T> {
    let at = placement.resolve(items.len());
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(&items[..at]);
    out.push(item);
    out.extend_from_slice(&items[at..]);
    out
}

/// Copy `items` without the first element matching `pred`.
///
/// Returns `None` when nothing matches.
pub(crate) fn without<T: Clone>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<Vec<T>> {
    let index = items.iter().position(pred)?;
    let mut out = items.to_vec();
    out.remove(index);
    Some(out)
}

/// Copy `items` with the element at `from` relocated to `to`.
///
/// `to` is clamped into `[0, len - 1]`; the other elements keep their
/// relative order. Fails with `NotFound` on an empty sequence or when
/// `from` is out of range.
pub(crate) fn relocated<T: Clone>(
    items: &[T],
    from: usize,
    to: usize,
    what: &str,
) -> AppResult<Vec<T>> {
    if items.is_empty() {
        return Err(AppError::not_found(format!(
            "cannot move a {what}: the list is empty"
        )));
    }
    if from >= items.len() {
        return Err(AppError::not_found(format!(
            "no {what} at position {from} (have {})",
            items.len()
        )));
    }

    let to = to.min(items.len() - 1);
    let mut out = items.to_vec();
    if from != to {
        let item = out.remove(from);
        out.insert(to, item);
    }
    Ok(out)
}
