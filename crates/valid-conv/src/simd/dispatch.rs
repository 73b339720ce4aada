use std::fmt;
use std::str::FromStr;

use super::detect::simd_level;
use super::kernels::*;
use crate::core::{Convolve, Tolerance};
use crate::error::{ConvError, Result};
use crate::types::{Capability, Requirements};

/// Every convolution strategy the crate ships, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// [`Naive`].
    Naive,
    /// [`Reordered`].
    Reordered,
    /// [`NarrowPlain`].
    NarrowPlain,
    /// [`NarrowUnrolled`].
    NarrowUnrolled,
    /// [`NarrowAligned`].
    NarrowAligned,
    /// [`NarrowAlignedX2`].
    NarrowAlignedX2,
    /// [`NarrowAlignedX4`].
    NarrowAlignedX4,
    /// [`NarrowFixed`] with 16 taps.
    NarrowFixed16,
    /// [`WideUnaligned`].
    WideUnaligned,
    /// [`WideReplica`].
    WideReplica,
    /// [`WideFma`].
    WideFma,
    /// [`WideComposed`].
    WideComposed,
    /// [`WideAligned`].
    WideAligned,
    /// [`WidePartial`].
    WidePartial,
    /// [`WideLocalOutput`].
    WideLocalOutput,
}

impl Variant {
    /// All variants, scalar first.
    pub const ALL: [Variant; 15] = [
        Variant::Naive,
        Variant::Reordered,
        Variant::NarrowPlain,
        Variant::NarrowUnrolled,
        Variant::NarrowAligned,
        Variant::NarrowAlignedX2,
        Variant::NarrowAlignedX4,
        Variant::NarrowFixed16,
        Variant::WideUnaligned,
        Variant::WideReplica,
        Variant::WideFma,
        Variant::WideComposed,
        Variant::WideAligned,
        Variant::WidePartial,
        Variant::WideLocalOutput,
    ];

    /// The strategy behind this variant.
    pub fn strategy(&self) -> &'static dyn Convolve {
        match self {
            Variant::Naive => &Naive,
            Variant::Reordered => &Reordered,
            Variant::NarrowPlain => &NarrowPlain,
            Variant::NarrowUnrolled => &NarrowUnrolled,
            Variant::NarrowAligned => &NarrowAligned,
            Variant::NarrowAlignedX2 => &NarrowAlignedX2,
            Variant::NarrowAlignedX4 => &NarrowAlignedX4,
            Variant::NarrowFixed16 => &NarrowFixed,
            Variant::WideUnaligned => &WideUnaligned,
            Variant::WideReplica => &WideReplica,
            Variant::WideFma => &WideFma,
            Variant::WideComposed => &WideComposed,
            Variant::WideAligned => &WideAligned,
            Variant::WidePartial => &WidePartial,
            Variant::WideLocalOutput => &WideLocalOutput,
        }
    }

    /// Stable name, also accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        self.strategy().name()
    }

    /// Instruction tier the variant needs.
    pub fn capability(&self) -> Capability {
        self.strategy().capability()
    }

    /// Kernel length constraints.
    pub fn requirements(&self) -> Requirements {
        self.strategy().requirements()
    }

    /// Whether the running CPU can execute this variant.
    pub fn is_available(&self) -> bool {
        simd_level().supports(self.capability())
    }

    /// Deviation from [`Variant::Naive`] this variant is allowed.
    pub fn tolerance(&self) -> Tolerance {
        match self {
            Variant::Naive => Tolerance::Exact,
            _ if self.strategy().strategy().fused => Tolerance::Fused,
            _ => Tolerance::Reassociated,
        }
    }

    /// Variants the running CPU can execute.
    pub fn available() -> impl Iterator<Item = Variant> {
        Self::ALL.into_iter().filter(Variant::is_available)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConvError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConvError::UnknownVariant(s.to_string()))
    }
}

/// Run `variant` after checking that the CPU supports it.
///
/// # Example
///
/// ```rust
/// use valid_conv::{convolve_variant, Variant};
///
/// let mut out = [0.0f32; 3];
/// convolve_variant(Variant::Naive, &[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0], &mut out)
///     .unwrap();
/// assert_eq!(out, [2.0, 2.0, 2.0]);
/// ```
pub fn convolve_variant(
    variant: Variant,
    signal: &[f32],
    kernel: &[f32],
    output: &mut [f32],
) -> Result<()> {
    let strategy = variant.strategy();
    if !variant.is_available() {
        tracing::debug!(%variant, level = ?simd_level(), "variant unsupported on this CPU");
        return Err(ConvError::Unsupported {
            variant: strategy.name(),
            required: strategy.capability(),
        });
    }

    tracing::trace!(
        %variant,
        signal_len = signal.len(),
        kernel_len = kernel.len(),
        "dispatching convolution"
    );
    strategy.convolve(signal, kernel, output).map_err(|err| {
        tracing::debug!(%variant, %err, "convolution rejected");
        err
    })
}
