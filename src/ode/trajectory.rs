use alloc::vec::Vec;

use crate::plot::Figure;
use crate::report::Report;
use crate::traits::FloatScalar;

/// Discretized solution curve produced by [`solve`](super::solve).
///
/// `xs` and `ys` always have the same length, at least 1, and are indexed in
/// lock-step: `(xs[i], ys[i])` is the `i`-th point, with `(xs[0], ys[0])` the
/// initial condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory<T> {
    /// Independent variable at each point.
    pub xs: Vec<T>,
    /// Approximate solution at each point.
    pub ys: Vec<T>,
}

impl<T: FloatScalar> Trajectory<T> {
    /// Start a trajectory at `(x0, y0)` with room for `steps` more points.
    pub(crate) fn with_capacity(x0: T, y0: T, steps: usize) -> Self {
        let cap = steps.saturating_add(1);
        let mut xs = Vec::with_capacity(cap);
        let mut ys = Vec::with_capacity(cap);
        xs.push(x0);
        ys.push(y0);
        Self { xs, ys }
    }

    pub(crate) fn push(&mut self, x: T, y: T) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Number of points (steps taken + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`: a trajectory holds at least its initial point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Number of RK4 steps that produced this trajectory.
    #[inline]
    pub fn steps(&self) -> usize {
        self.len() - 1
    }

    /// The initial condition `(x0, y0)`.
    pub fn first(&self) -> (T, T) {
        (self.xs[0], self.ys[0])
    }

    /// The final point reached.
    pub fn last(&self) -> (T, T) {
        let i = self.len() - 1;
        (self.xs[i], self.ys[i])
    }

    /// Iterate over `(x, y)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Hand the two sequences over to the caller.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.xs, self.ys)
    }

    /// Textual step-by-step listing of this trajectory.
    pub fn report(&self) -> Report<'_, T> {
        Report::new(self)
    }

    /// Line-plot description of `ys` against `xs` with default labels.
    pub fn figure(&self) -> Figure<'_, T> {
        Figure::new(&self.xs, &self.ys)
    }
}
