//! # rungekutta
//!
//! Classic fixed-step fourth-order Runge-Kutta (RK4) integration of a scalar
//! first-order ODE `dy/dx = f(x, y)`. Pure Rust, no-std compatible (needs
//! `alloc` for the output vectors), generic over `f32` / `f64`.
//!
//! ## Quick start
//!
//! ```
//! use rungekutta::ode::solve;
//!
//! // dy/dx = x² + y, y(0) = 1, 100 steps of 0.1
//! let traj = solve(|x: f64, y: f64| x * x + y, 0.0, 1.0, 0.1, 100);
//! assert_eq!(traj.xs.len(), 101);
//! assert_eq!(traj.ys.len(), 101);
//! assert!((traj.xs[1] - 0.1).abs() < 1e-15);
//! ```
//!
//! ## Modules
//!
//! - [`ode`] — The stepper: [`ode::rk4_step`], [`ode::solve`], and the
//!   validating [`ode::try_solve`] / [`ode::step_count`]. Results come back as
//!   an [`ode::Trajectory`] of lock-step `xs` / `ys` vectors.
//!   [`ode::Rk4Settings`] bundles an initial condition with a step size and
//!   count.
//!
//! - [`report`] — [`report::Report`], a `Display` listing of each
//!   `(step, x, y)` point.
//!
//! - [`plot`] — [`plot::Figure`], a line-plot description (data, title, axis
//!   labels) for an external renderer.
//!
//! - [`traits`] — [`FloatScalar`], the element trait for real numbers.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: one
//! `debug` record per [`ode::solve`] call and one `trace` record per step.
//! Install any logger (e.g. `env_logger`) to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `serde`   | no       | `Serialize` for trajectories, settings and figures |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ode;
pub mod plot;
pub mod report;
pub mod traits;

pub use ode::{solve, OdeError, Rk4Settings, Trajectory};
pub use traits::FloatScalar;
