use log::{debug, trace};
use num_traits::{Float, ToPrimitive};

use crate::traits::FloatScalar;
use super::{OdeError, Trajectory};

/// Single step of the classic 4th-order Runge-Kutta method.
///
/// Advances `y` from `x` to `x + h` using `f(x, y) -> dy/dx`. The four
/// stages are evaluated in order, each exactly once.
///
/// ```
/// use rungekutta::ode::rk4_step;
///
/// // dy/dx = -y (exponential decay)
/// let y1 = rk4_step(0.0_f64, 1.0, 0.01, |_x, y| -y);
/// assert!((y1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn rk4_step<T: FloatScalar>(x: T, y: T, h: T, mut f: impl FnMut(T, T) -> T) -> T {
    let two = T::one() + T::one();
    let six = two + two + two;

    let k1 = h * f(x, y);
    let k2 = h * f(x + h / two, y + k1 / two);
    let k3 = h * f(x + h / two, y + k2 / two);
    let k4 = h * f(x + h, y + k3);

    y + (k1 + two * k2 + two * k3 + k4) / six
}

/// Integrate `dy/dx = f(x, y)` with `n` fixed RK4 steps of size `h`.
///
/// Returns the full trajectory: `n + 1` points starting at `(x0, y0)`.
/// `h` may be negative to integrate backward. `h = 0` is accepted and gives
/// a constant trajectory. Non-finite values returned by `f` are carried
/// through unchanged; the loop always runs exactly `n` steps and calls `f`
/// exactly `4 * n` times.
///
/// ```
/// use rungekutta::ode::solve;
///
/// let traj = solve(|x: f64, y: f64| x * x + y, 0.0, 1.0, 0.1, 100);
/// assert_eq!(traj.len(), 101);
/// assert!((traj.ys[1] - 1.1055127).abs() < 1e-7);
/// ```
///
/// # Panics
///
/// Panics if `n + 1` points cannot be allocated.
pub fn solve<T: FloatScalar>(mut f: impl FnMut(T, T) -> T, x0: T, y0: T, h: T, n: usize) -> Trajectory<T> {
    debug!("rk4: x0={x0:?} y0={y0:?} h={h:?} n={n}");

    let mut traj = Trajectory::with_capacity(x0, y0, n);
    let (mut x, mut y) = (x0, y0);

    for i in 1..=n {
        y = rk4_step(x, y, h, &mut f);
        x = x + h;
        trace!("rk4 step {i}: x={x:?} y={y:?}");
        traj.push(x, y);
    }

    traj
}

/// Validate a step count supplied as a real number.
///
/// Returns [`OdeError::InvalidArgument`] when `n` is negative, not an
/// integer, not finite, or does not fit in a `usize`.
///
/// ```
/// use rungekutta::ode::{step_count, OdeError};
///
/// assert_eq!(step_count(100.0), Ok(100));
/// assert!(matches!(step_count(-1.0), Err(OdeError::InvalidArgument(_))));
/// assert!(matches!(step_count(2.5), Err(OdeError::InvalidArgument(_))));
/// ```
pub fn step_count(n: f64) -> Result<usize, OdeError> {
    if !n.is_finite() {
        return Err(OdeError::InvalidArgument("step count must be finite"));
    }
    if n < 0.0 {
        return Err(OdeError::InvalidArgument("step count must be non-negative"));
    }
    if Float::fract(n) != 0.0 {
        return Err(OdeError::InvalidArgument("step count must be an integer"));
    }
    n.to_usize()
        .ok_or(OdeError::InvalidArgument("step count is too large"))
}

/// Like [`solve`], but takes the step count as a real number and validates
/// it first. On error nothing is evaluated and no trajectory is built.
///
/// ```
/// use rungekutta::ode::try_solve;
///
/// let traj = try_solve(|_x: f64, y: f64| y, 0.0, 1.0, 0.1, 10.0).unwrap();
/// assert_eq!(traj.len(), 11);
/// assert!(try_solve(|_x: f64, y: f64| y, 0.0, 1.0, 0.1, -3.0).is_err());
/// ```
pub fn try_solve<T: FloatScalar>(
    f: impl FnMut(T, T) -> T,
    x0: T,
    y0: T,
    h: T,
    n: f64,
) -> Result<Trajectory<T>, OdeError> {
    let n = step_count(n)?;
    Ok(solve(f, x0, y0, h, n))
}
