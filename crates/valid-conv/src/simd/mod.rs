//! SIMD convolution strategies and runtime dispatch.
//!
//! The detected [`SimdLevel`] decides which strategies [`convolve_variant`]
//! agrees to run, and on x86-64 which `#[target_feature]` build of the main
//! loop they execute.

mod detect;
pub mod dispatch;
pub mod kernels;

pub use detect::{simd_level, SimdLevel};
pub use dispatch::{convolve_variant, Variant};
pub use kernels::*;
