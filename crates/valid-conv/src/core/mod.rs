//! Portable building blocks shared by every convolution strategy.
//!
//! The scalar reference lives here alongside the pieces the vector
//! strategies are assembled from: reversed broadcast taps, aligned signal
//! replicas, tap sources, and the blocked main loop.

mod engine;
mod kernel;
mod replicas;
mod scalar;
mod source;
mod taps;

pub use engine::{convolve_blocked, Accumulate, Fused, Separate};
pub use kernel::Convolve;
pub use replicas::{AlignedBuffer, Replicas};
pub use scalar::{convolve_naive, convolve_reordered, dot_reversed, finish_tail, Tolerance};
pub use source::{
    ReplicaAligned, ReplicaComposed, ReplicaMixed, ReplicaUnaligned, TapSource, Unaligned,
};
pub use taps::{FixedTaps, ReversedTaps};
