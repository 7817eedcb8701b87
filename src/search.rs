//! Exact/between binary search over ordered x-coordinates.
//!
//! [`locate`] reports either an exact index or the pair of indices
//! bracketing the sought value, so the spline can return stored control
//! values verbatim on exact hits instead of round-tripping them through
//! the Hermite evaluation.

use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search value {got} out of bounds in [{min}, {max}]")]
    OutOfBounds { got: f64, min: f64, max: f64 },

    #[error("search value must be finite. got {got}")]
    NonFinite { got: f64 },

    #[error("cannot search an empty slice")]
    EmptyInput,
}

/// Outcome of [`locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinarySearchResult {
    /// `xs[index]` equals the sought value.
    Exact(usize),
    /// The sought value falls strictly between `xs[low]` and `xs[high]`,
    /// where `high == low + 1`.
    Between { low: usize, high: usize },
}

/// Locates `v` within `xs`, which must be sorted in strictly increasing
/// order.
///
/// # Errors
/// ┌ [`SearchError::EmptyInput`]   - `xs` is empty.
/// ├ [`SearchError::NonFinite`]    - `v` is NaN or infinite.
/// └ [`SearchError::OutOfBounds`]  - `v` lies outside `[xs[0], xs[n-1]]`.
pub fn locate(xs: &[f64], v: f64) -> Result<BinarySearchResult, SearchError> {
    let (min, max) = match (xs.first(), xs.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(SearchError::EmptyInput),
    };
    if !v.is_finite() {
        return Err(SearchError::NonFinite { got: v });
    }
    if v < min || v > max {
        return Err(SearchError::OutOfBounds { got: v, min, max });
    }

    match xs.binary_search_by(|xi| {
        if xi < &v      { Ordering::Less    }
        else if xi > &v { Ordering::Greater }
        else            { Ordering::Equal   }
    }) {
        Ok(index) => Ok(BinarySearchResult::Exact(index)),
        Err(insertion) => {
            // v > xs[0], so the insertion point is at least 1
            Ok(BinarySearchResult::Between {
                low: insertion - 1,
                high: insertion,
            })
        }
    }
}
