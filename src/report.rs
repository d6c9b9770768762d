//! Plain-text listing of a trajectory.
//!
//! [`Report`] implements [`Display`](core::fmt::Display), so it can be
//! printed, written to any `fmt::Write`, or collected into a `String`:
//!
//! ```
//! use rungekutta::ode::solve;
//!
//! let traj = solve(|_x: f64, _y: f64| 0.0, 0.0, 1.0, 0.5, 2);
//! let text = traj.report().to_string();
//! assert_eq!(
//!     text,
//!     "Results of the Runge-Kutta method:\n\
//!      Step 1: x = 0, y = 1\n\
//!      Step 2: x = 0.5, y = 1\n\
//!      Step 3: x = 1, y = 1\n"
//! );
//! ```

use core::fmt;

use crate::ode::Trajectory;

/// Header line printed before the step listing.
pub const REPORT_HEADER: &str = "Results of the Runge-Kutta method:";

/// Step-by-step listing of a [`Trajectory`], one `Step k: x = .., y = ..`
/// line per point. Steps are numbered from 1, so the initial condition is
/// `Step 1`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, T> {
    traj: &'a Trajectory<T>,
    header: bool,
}

impl<'a, T> Report<'a, T> {
    pub fn new(traj: &'a Trajectory<T>) -> Self {
        Self { traj, header: true }
    }

    /// Include or omit the header line (default: included).
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl<T: fmt::Display> fmt::Display for Report<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.header {
            writeln!(f, "{REPORT_HEADER}")?;
        }
        for (i, (x, y)) in self.traj.xs.iter().zip(&self.traj.ys).enumerate() {
            writeln!(f, "Step {}: x = {}, y = {}", i + 1, x, y)?;
        }
        Ok(())
    }
}
