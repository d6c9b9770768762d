//! Line-plot description for rendering a trajectory elsewhere.
//!
//! The crate has no drawing backend. A [`Figure`] carries the data and the
//! labels a renderer needs; with the `serde` feature it serializes to
//! `{"title":..,"x_label":..,"y_label":..,"grid":..,"x":[..],"y":[..]}`
//! for an external plotting script.

/// Default plot title.
pub const DEFAULT_TITLE: &str = "Solution of the Differential Equation using Runge-Kutta Method";

/// 2D line plot of `y` against `x`.
///
/// ```
/// use rungekutta::ode::solve;
///
/// let traj = solve(|x: f64, y: f64| x * x + y, 0.0, 1.0, 0.1, 10);
/// let fig = traj.figure().title("x^2 + y");
/// assert_eq!(fig.x.len(), fig.y.len());
/// assert_eq!(fig.x_label, "x");
/// assert_eq!(fig.y_label, "y");
/// assert!(fig.grid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Figure<'a, T> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Draw grid lines (default: true).
    pub grid: bool,
    pub x: &'a [T],
    pub y: &'a [T],
}

impl<'a, T> Figure<'a, T> {
    /// Figure over lock-step slices with the default title and `x`/`y` labels.
    ///
    /// Slices of different lengths are truncated to the shorter one.
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        let n = x.len().min(y.len());
        Self {
            title: DEFAULT_TITLE,
            x_label: "x",
            y_label: "y",
            grid: true,
            x: &x[..n],
            y: &y[..n],
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn labels(mut self, x_label: &'a str, y_label: &'a str) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }
}
