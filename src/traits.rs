use core::fmt::Debug;
use num_traits::Float;

/// Trait for the real numbers the integrator works in.
///
/// Blanket-implemented for all `Float + Debug` types, in practice `f32` and
/// `f64`. With the `std` feature the hardware FPU is used through the
/// system libm; without it `num-traits` falls back to the pure-Rust `libm`.
pub trait FloatScalar: Float + Debug {}

impl<T: Float + Debug> FloatScalar for T {}
