//! Time index and slice specifier
//!
//! This module provides the [`TimeIndex`] type backing every
//! [`TimeSeries`](crate::series::TimeSeries), and the [`Slice`] specifier
//! used to select contiguous sub-ranges of a series.

use std::fmt::Debug;

use num_traits::NumCast;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered sequence of time points
///
/// Owned by a series and immutable once built: the container only ever
/// replaces values, never times. Two indexes compare equal iff they have the
/// same length and equal time points at every position, which is the
/// alignment precondition for all binary series operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeIndex<T: Debug + Clone> {
    /// Time points, assumed non-decreasing by interpolation
    values: Vec<T>,
}

impl<T: Debug + Clone> TimeIndex<T> {
    /// Create an index from explicit time points
    pub fn new(values: Vec<T>) -> Self {
        TimeIndex { values }
    }

    /// Create the default 1-based integer index for `len` observations
    ///
    /// # Errors
    /// Returns `Error::Cast` if a position in `[1, len]` is not
    /// representable in `T`.
    pub fn default_range(len: usize) -> Result<Self>
    where
        T: NumCast,
    {
        let mut values = Vec::with_capacity(len);
        for pos in 1..=len {
            match num_traits::cast(pos) {
                Some(v) => values.push(v),
                None => {
                    return Err(Error::Cast(format!(
                        "Cannot represent index position {} in the time type",
                        pos
                    )))
                }
            }
        }
        Ok(TimeIndex { values })
    }

    /// Number of time points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the time point at a position
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// Get all time points
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate over time points in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Build a sub-index from already resolved positions
    pub(crate) fn select(&self, positions: &[usize]) -> Self {
        TimeIndex {
            values: positions.iter().map(|&p| self.values[p].clone()).collect(),
        }
    }
}

/// Contiguous-range specifier with start/stop/step semantics
///
/// Bounds may be negative (counted from the end) or left open. The step may
/// be negative to walk backwards, but never zero. Open bounds default to the
/// whole sequence in the direction of the step.
///
/// # Example
/// ```
/// use tempors::Slice;
///
/// assert_eq!(Slice::range(1, 3).indices(5).unwrap(), vec![1, 2]);
/// assert_eq!(Slice::full().with_step(-1).indices(3).unwrap(), vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// First position; defaults to the start of the walk
    pub start: Option<isize>,
    /// Exclusive stop position; defaults to the end of the walk
    pub stop: Option<isize>,
    /// Stride between positions; defaults to 1
    pub step: Option<isize>,
}

impl Slice {
    /// Create a specifier from explicit bounds
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Slice { start, stop, step }
    }

    /// Specifier for `[start, stop)` with unit step
    pub fn range(start: isize, stop: isize) -> Self {
        Slice {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// Specifier covering the whole sequence
    pub fn full() -> Self {
        Slice::default()
    }

    /// Replace the stride
    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolve the specifier against a sequence of `len` elements
    ///
    /// Negative bounds are offset by `len` and then clamped, so
    /// out-of-range slices yield an empty selection rather than an error.
    ///
    /// # Errors
    /// Returns `Error::InvalidSlice` if the step is zero.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::InvalidSlice("slice step cannot be zero".to_string()));
        }
        let len = len as isize;
        let mut out = Vec::new();
        if step > 0 {
            let mut start = self.start.unwrap_or(0);
            if start < 0 {
                start += len;
            }
            start = start.clamp(0, len);
            let mut stop = self.stop.unwrap_or(len);
            if stop < 0 {
                stop += len;
            }
            stop = stop.clamp(0, len);
            let mut pos = start;
            while pos < stop {
                out.push(pos as usize);
                pos += step;
            }
        } else {
            let mut start = self.start.unwrap_or(len - 1);
            if start < 0 {
                start += len;
            }
            start = start.clamp(-1, len - 1);
            // open stop walks down to position 0 inclusive
            let mut stop = match self.stop {
                Some(s) if s < 0 => s + len,
                Some(s) => s,
                None => -1,
            };
            stop = stop.clamp(-1, len - 1);
            let mut pos = start;
            while pos > stop {
                out.push(pos as usize);
                pos += step;
            }
        }
        Ok(out)
    }
}
