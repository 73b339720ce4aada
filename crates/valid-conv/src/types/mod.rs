//! Value types shared by every convolution strategy.
//!
//! # Valid-mode convolution
//!
//! For a signal of length `N` and a kernel of length `K` (`1 <= K <= N`),
//! the valid-mode output has `N - K + 1` samples:
//!
//! ```text
//! out[i] = Σ_{k=0}^{K-1} signal[i + k] * kernel[K - 1 - k]
//! ```
//!
//! Only windows fully covered by the signal produce output, which matches
//! `numpy.convolve(signal, kernel, mode="valid")`.
//!
//! # Contents
//!
//! - [`Lanes`]: the vector abstraction over `wide::f32x4` / `wide::f32x8`
//! - [`ConvShape`]: validated `(N, K)` pair and the output-length law
//! - [`Requirements`]: per-strategy kernel length constraints
//! - [`BlockedKernel`]: a kernel view that only exists when `K % M == 0`
//! - [`Capability`], [`Strategy`]: capability tag and composable parameters
//!
//! # Example
//!
//! ```rust
//! use valid_conv::types::ConvShape;
//!
//! let shape = ConvShape::new(5, 3).unwrap();
//! assert_eq!(shape.output_len(), 3);
//! ```

mod lanes;
mod shape;
mod strategy;

pub use lanes::Lanes;
pub use shape::{BlockedKernel, ConvShape, Requirements};
pub use strategy::{Capability, LoadMode, OutputMode, Strategy};
