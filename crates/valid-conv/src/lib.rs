//! Valid-mode 1-D convolution of `f32` signals, in many SIMD flavors.
//!
//! For a signal of `N` samples and a kernel of `K` taps (`1 <= K <= N`),
//! every routine in this crate computes the `N - K + 1` samples
//!
//! ```text
//! out[i] = Σ_{k=0}^{K-1} signal[i + k] * kernel[K - 1 - k]
//! ```
//!
//! The crate ships a family of functionally identical strategies that
//! differ in how they map that loop nest onto vector hardware. They are
//! meant to be benchmarked against each other; none is picked
//! automatically.
//!
//! # Strategies
//!
//! | Variant | Lanes | Loads | Kernel |
//! |---------|-------|-------|--------|
//! | [`Naive`] | 1 | scalar | any |
//! | [`Reordered`] | 1 | scalar, taps outside | any |
//! | [`NarrowPlain`] | 4 | unaligned | any |
//! | [`NarrowUnrolled`] | 4 | unaligned, taps ×4 | `K % 4 == 0` |
//! | [`NarrowAligned`] | 4 | 4 replicas, aligned | `K % 4 == 0` |
//! | [`NarrowAlignedX2`] / [`NarrowAlignedX4`] | 4 × 2 / 4 × 4 | 4 replicas, aligned | `K % 4 == 0` |
//! | [`NarrowFixed`] | 4 | 4 replicas, aligned | `K == 16` |
//! | [`WideUnaligned`] | 8 × 2 | unaligned | `K % 8 == 0` |
//! | [`WideReplica`] | 8 × 2 | 4 replicas, unaligned | `K % 8 == 0` |
//! | [`WideFma`] | 8 × 2 | unaligned, fused | `K % 8 == 0` |
//! | [`WideComposed`] | 8 × 2 | 4 replicas, two aligned halves | `K % 8 == 0` |
//! | [`WideAligned`] | 8 × 2 | 8 replicas, aligned | `K % 8 == 0` |
//! | [`WidePartial`] | 8 × 2 | 4 replicas, aligned when possible | `K % 8 == 0` |
//! | [`WideLocalOutput`] | 8 × 2 | unaligned, buffered output | `K % 8 == 0` |
//!
//! Output samples a vector main loop cannot reach with a full step are
//! computed by the scalar reference, so every strategy accepts any `N`.
//!
//! # Quick Start
//!
//! ## Function-based API
//!
//! ```
//! use valid_conv::convolve_valid;
//!
//! let out = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0]).unwrap();
//! assert_eq!(out, vec![2.0, 2.0, 2.0]);
//! ```
//!
//! ## Strategy API
//!
//! Every strategy implements [`Convolve`] and writes into a caller-owned
//! buffer:
//!
//! ```
//! use valid_conv::{Convolve, NarrowPlain};
//!
//! let mut out = [0.0f32; 3];
//! NarrowPlain
//!     .convolve(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0], &mut out)
//!     .unwrap();
//! assert_eq!(out, [2.0, 2.0, 2.0]);
//! ```
//!
//! ## Runtime dispatch
//!
//! [`Variant`] names every strategy; [`convolve_variant`] refuses variants
//! the running CPU cannot execute:
//!
//! ```
//! use valid_conv::{convolve_variant, ConvError, Variant};
//!
//! let signal = vec![1.0f32; 64];
//! let kernel = vec![0.5f32; 16];
//! let mut out = vec![0.0f32; 49];
//!
//! match convolve_variant(Variant::WideAligned, &signal, &kernel, &mut out) {
//!     Ok(()) => assert_eq!(out[0], 8.0),
//!     Err(ConvError::Unsupported { .. }) => {}
//!     Err(err) => panic!("{err}"),
//! }
//! ```
//!
//! # Performance
//!
//! ```
//! use valid_conv::Backend;
//!
//! println!("Using: {}", Backend::description());
//! ```

// Internal modules
pub mod core;
pub mod error;
pub mod simd;
pub mod types;

mod api;
mod backend;

// Public API
pub use api::{convolve_valid, Convolver};
pub use backend::{version_info, Backend};

// Re-export commonly used types at crate root
pub use crate::core::{Convolve, Tolerance};
pub use error::{ConvError, Result};
pub use simd::{
    convolve_variant, simd_level, Naive, NarrowAligned, NarrowAlignedX2, NarrowAlignedX4,
    NarrowFixed, NarrowPlain, NarrowUnrolled, Reordered, SimdLevel, Variant, WideAligned,
    WideComposed, WideFma, WideLocalOutput, WidePartial, WideReplica, WideUnaligned,
};
pub use types::{Capability, ConvShape, Requirements, Strategy};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        convolve_valid, convolve_variant, Backend, ConvError, Convolve, Convolver, Variant,
    };
}
