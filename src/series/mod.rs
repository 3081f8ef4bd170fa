//! Series module - the ordered time series container
//!
//! This module provides the TimeSeries type: two positionally aligned
//! sequences of times and values with element access, single-value
//! mutation, elementwise arithmetic between time-aligned series, and
//! piecewise-linear interpolation to new time points.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use ndarray::Array1;
use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};

use crate::compute::lazy::Deferred;
use crate::error::{Error, Result};
use crate::index::{Slice, TimeIndex};

/// Pairs rendered by `Display` before eliding the rest
const DISPLAY_LIMIT: usize = 8;

/// Ordered time series container
///
/// A TimeSeries owns a sequence of time points and a sequence of values of
/// the same length; index `i` of one corresponds to index `i` of the other.
/// Binary operations are defined only between series sharing an identical
/// time domain. Every operation that produces a series returns a new,
/// independently owned instance; the only in-place mutation is
/// single-position value assignment via [`set`](TimeSeries::set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries<T: Debug + Clone> {
    /// Time points, immutable after construction
    times: TimeIndex<T>,
    /// Observed values, aligned with `times`
    values: Vec<T>,
}

impl<T: Debug + Clone> TimeSeries<T> {
    /// Create a new time series
    ///
    /// # Arguments
    /// * `values` - Observed values
    /// * `times` - Time points aligned with `values`. `None` and an empty
    ///   vector both spell "no explicit times" and select the default
    ///   1-based integer index.
    ///
    /// # Returns
    /// * `Result<Self>` - New TimeSeries instance
    ///
    /// # Example
    /// ```
    /// use tempors::TimeSeries;
    ///
    /// let series = TimeSeries::new(vec![1.0, 2.0, 3.0], Some(vec![0.0, 5.0, 10.0])).unwrap();
    /// assert_eq!(series.len(), 3);
    ///
    /// let defaulted = TimeSeries::new(vec![10, 20], None).unwrap();
    /// assert_eq!(defaulted.get(0).unwrap(), (1, 10));
    /// ```
    pub fn new(values: Vec<T>, times: Option<Vec<T>>) -> Result<Self>
    where
        T: NumCast,
    {
        let times = match times.filter(|t| !t.is_empty()) {
            Some(t) => {
                if t.len() != values.len() {
                    return Err(Error::LengthMismatch {
                        expected: values.len(),
                        found: t.len(),
                    });
                }
                TimeIndex::new(t)
            }
            None => TimeIndex::default_range(values.len())?,
        };
        Ok(TimeSeries { times, values })
    }

    /// Number of (time, value) pairs
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve a possibly negative position against the current length
    fn resolve(&self, index: isize) -> Result<usize> {
        let len = self.values.len();
        let shifted = if index < 0 { index + len as isize } else { index };
        if shifted < 0 || shifted >= len as isize {
            return Err(Error::IndexOutOfBounds { index, size: len });
        }
        Ok(shifted as usize)
    }

    /// Get the (time, value) pair at a position
    ///
    /// Negative positions count from the end, so `get(-1)` is the last
    /// pair.
    pub fn get(&self, index: isize) -> Result<(T, T)> {
        let pos = self.resolve(index)?;
        Ok((self.times.values()[pos].clone(), self.values[pos].clone()))
    }

    /// Build a new series from the sub-ranges selected by `spec`
    ///
    /// Values and times are sliced together; the result owns fresh storage
    /// and is unaffected by later mutation of the source.
    pub fn slice(&self, spec: &Slice) -> Result<TimeSeries<T>> {
        let positions = spec.indices(self.len())?;
        let values = positions.iter().map(|&p| self.values[p].clone()).collect();
        let times = self.times.select(&positions);
        Ok(TimeSeries { times, values })
    }

    /// Replace the value at a position, leaving its time untouched
    ///
    /// Only single positions can be assigned; the length never changes.
    pub fn set(&mut self, index: isize, value: T) -> Result<()> {
        let pos = self.resolve(index)?;
        self.values[pos] = value;
        Ok(())
    }

    /// Membership test against the value sequence only
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.contains(value)
    }

    /// Iterate over values in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterate over time points in index order
    pub fn iter_times(&self) -> std::slice::Iter<'_, T> {
        self.times.iter()
    }

    /// Iterate over values in index order
    pub fn iter_values(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterate over (time, value) pairs in index order
    ///
    /// The pair view is derived from the authoritative sequences on every
    /// call, so it always reflects prior [`set`](TimeSeries::set) calls.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.times.iter().cloned().zip(self.values.iter().cloned())
    }

    /// Borrow the time index
    pub fn index(&self) -> &TimeIndex<T> {
        &self.times
    }

    /// Time points as a dense array
    pub fn times(&self) -> Array1<T> {
        Array1::from_vec(self.times.values().to_vec())
    }

    /// Values as a dense array
    pub fn values(&self) -> Array1<T> {
        Array1::from_vec(self.values.clone())
    }

    /// All (time, value) pairs in index order
    pub fn items(&self) -> Vec<(T, T)> {
        self.iter_pairs().collect()
    }

    /// Identity copy: equal content, fresh storage
    pub fn positive(&self) -> Self {
        self.clone()
    }

    /// Wrap an independent copy of this series as a deferred computation
    ///
    /// Evaluating the result yields a series equal to this one at the time
    /// of the call.
    pub fn deferred(&self) -> Deferred<TimeSeries<T>>
    where
        T: 'static,
    {
        let snapshot = self.clone();
        Deferred::new(move || snapshot)
    }
}

impl<T> TimeSeries<T>
where
    T: Debug + Clone + Copy + PartialEq,
{
    /// Check that `other` shares this series' time domain
    fn check_aligned(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() || self.times != other.times {
            return Err(Error::DomainMismatch(format!(
                "{} and {} must share the same time points",
                self, other
            )));
        }
        Ok(())
    }

    fn combine(&self, other: &Self, op: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_aligned(other)?;
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(TimeSeries {
            times: self.times.clone(),
            values,
        })
    }

    /// Elementwise sum with a time-aligned series
    ///
    /// # Errors
    /// Returns `Error::DomainMismatch` if the operands differ in length or
    /// time points.
    pub fn checked_add(&self, other: &Self) -> Result<Self>
    where
        T: Add<Output = T>,
    {
        self.combine(other, |a, b| a + b)
    }

    /// Elementwise difference with a time-aligned series
    pub fn checked_sub(&self, other: &Self) -> Result<Self>
    where
        T: Sub<Output = T>,
    {
        self.combine(other, |a, b| a - b)
    }

    /// Elementwise product with a time-aligned series
    pub fn checked_mul(&self, other: &Self) -> Result<Self>
    where
        T: Mul<Output = T>,
    {
        self.combine(other, |a, b| a * b)
    }

    /// Exact equality over a shared time domain
    ///
    /// Comparing series with different time points is an error rather than
    /// `false`: equality is only defined between time-aligned series, which
    /// is why the container does not implement `PartialEq`.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        self.check_aligned(other)?;
        Ok(self.values == other.values)
    }
}

impl<T> TimeSeries<T>
where
    T: Debug + Clone + Float,
{
    /// Euclidean norm of the value sequence
    pub fn magnitude(&self) -> T {
        self.values
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }

    /// Whether the series carries any signal: magnitude strictly above zero
    pub fn is_nonzero(&self) -> bool {
        self.magnitude() > T::zero()
    }

    /// Piecewise-linear interpolation at `new_times`
    ///
    /// Query times below the first time point take the first value; query
    /// times above the last take the last value. A query inside the range
    /// is placed in a bracket of consecutive time points by a forward
    /// cursor shared across queries, and its value is computed as
    /// `t + t * ((value[k] - value[k-1]) / (time[k] - time[k-1]))`. Note
    /// the base term is the query time itself, not the textbook
    /// `value[k-1] + (t - time[k-1]) * slope`; the historical formula is
    /// kept as-is for compatibility with existing consumers.
    ///
    /// Preconditions: the series' times are non-decreasing and `new_times`
    /// is non-decreasing. The cursor never resets within a call, so a
    /// query before an already passed bracket cannot be placed and
    /// contributes no value; the resulting shortfall surfaces as
    /// `Error::LengthMismatch`. A series with fewer than two points has no
    /// bracket to scan and fails the same way for any non-empty query.
    /// Duplicate time points give unspecified results.
    pub fn interpolate(&self, new_times: &[T]) -> Result<TimeSeries<T>> {
        let time = self.times.values();
        let value = &self.values;
        let n = time.len();
        let mut cursor = 1usize;
        let mut new_values = Vec::with_capacity(new_times.len());
        for &t in new_times {
            while cursor < n {
                if t < time[0] {
                    new_values.push(value[0]);
                    break;
                } else if t > time[n - 1] {
                    new_values.push(value[n - 1]);
                    break;
                } else if time[cursor - 1] <= t && t <= time[cursor] {
                    let slope =
                        (value[cursor] - value[cursor - 1]) / (time[cursor] - time[cursor - 1]);
                    new_values.push(t + t * slope);
                    break;
                } else {
                    cursor += 1;
                }
            }
        }
        TimeSeries::new(new_values, Some(new_times.to_vec()))
    }
}

impl<T: Debug + Clone> Display for TimeSeries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeSeries[")?;
        for (i, (t, v)) in self.iter_pairs().take(DISPLAY_LIMIT).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:?}, {:?})", t, v)?;
        }
        if self.len() > DISPLAY_LIMIT {
            write!(f, ", ... {} pairs", self.len())?;
        }
        write!(f, "]")
    }
}

impl<'a, T: Debug + Clone> IntoIterator for &'a TimeSeries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    /// Iterating a series yields its values in index order
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T> Neg for &TimeSeries<T>
where
    T: Debug + Clone + Copy + Neg<Output = T>,
{
    type Output = TimeSeries<T>;

    /// Elementwise negation with identical times
    fn neg(self) -> TimeSeries<T> {
        TimeSeries {
            times: self.times.clone(),
            values: self.values.iter().map(|&v| -v).collect(),
        }
    }
}

impl<T> Neg for TimeSeries<T>
where
    T: Debug + Clone + Copy + Neg<Output = T>,
{
    type Output = TimeSeries<T>;

    fn neg(self) -> TimeSeries<T> {
        -&self
    }
}
