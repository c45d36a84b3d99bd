//! Integer arithmetic for AMM calculations.
//!
//! Quantities are `u128`; products of two quantities are held as
//! [`U256`] (from `ethnum`) until a division narrows them again. Nothing
//! here panics: overflow, underflow and division by zero surface as
//! [`AmmError`](crate::error::AmmError) values or `None`.

mod checked;
mod rounding;
mod sqrt;
mod wide;

pub use checked::{mul_div, CheckedArithmetic};
pub use rounding::{div_round, Rounding};
pub use sqrt::isqrt;
pub use wide::{narrow, widening_mul, U256};
