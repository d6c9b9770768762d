//! Fixed-step ODE integration for scalar problems `dy/dx = f(x, y)`.
//!
//! # Fixed-step RK4
//!
//! [`rk4_step`] advances one step; [`solve`] repeats it `n` times and keeps
//! every point as a [`Trajectory`]. Each step uses the classic stage sequence
//!
//! ```text
//! k1 = h f(x, y)
//! k2 = h f(x + h/2, y + k1/2)
//! k3 = h f(x + h/2, y + k2/2)
//! k4 = h f(x + h, y + k3)
//! y' = y + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! and depends only on the most recent point. The step size never changes,
//! so `xs[i] = x0 + i h` up to rounding.
//!
//! # Step counts
//!
//! [`solve`] takes `n: usize`. When the count arrives as a real number
//! (parsed input, configuration), [`try_solve`] or [`step_count`] reject
//! negative and non-integral values with [`OdeError::InvalidArgument`]
//! before anything is evaluated.
//!
//! # Example
//!
//! ```
//! use rungekutta::ode::solve;
//!
//! // dy/dx = y, y(0) = 1  →  y = e^x
//! let traj = solve(|_x: f64, y: f64| y, 0.0, 1.0, 0.01, 100);
//! let (x, y) = traj.last();
//! assert!((x - 1.0).abs() < 1e-12);
//! assert!((y - core::f64::consts::E).abs() < 1e-9);
//! ```

mod rk4;
mod settings;
mod trajectory;


pub use rk4::{rk4_step, solve, step_count, try_solve};
pub use settings::Rk4Settings;
pub use trajectory::Trajectory;

/// Errors from ODE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OdeError {
    /// An argument has no well-defined trajectory (e.g. negative step count).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
