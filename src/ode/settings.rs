use crate::traits::FloatScalar;
use super::{solve, Trajectory};

/// Initial condition and stepping parameters for a fixed-step run.
///
/// ```
/// use rungekutta::ode::Rk4Settings;
///
/// let settings = Rk4Settings::<f64> { steps: 10, ..Default::default() };
/// let traj = settings.solve(|x, y| x * x + y);
/// assert_eq!(traj.len(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rk4Settings<T> {
    /// Initial value of the independent variable (default: 0).
    pub x0: T,
    /// Initial value of the solution (default: 1).
    pub y0: T,
    /// Step size, negative to integrate backward (default: 0.1).
    pub h: T,
    /// Number of steps to take (default: 100).
    pub steps: usize,
}

impl Default for Rk4Settings<f64> {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 1.0,
            h: 0.1,
            steps: 100,
        }
    }
}

impl Default for Rk4Settings<f32> {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 1.0,
            h: 0.1,
            steps: 100,
        }
    }
}

impl<T: FloatScalar> Rk4Settings<T> {
    /// Run [`solve`] with these settings.
    pub fn solve(&self, f: impl FnMut(T, T) -> T) -> Trajectory<T> {
        solve(f, self.x0, self.y0, self.h, self.steps)
    }

    /// Value of `x` after the final step, ignoring rounding.
    pub fn x_end(&self) -> Option<T> {
        T::from(self.steps).map(|n| self.x0 + n * self.h)
    }
}
