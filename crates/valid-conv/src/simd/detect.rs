//! CPU feature detection for runtime dispatch.

use crate::types::Capability;

/// Available SIMD instruction sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SimdLevel {
    /// No SIMD, use scalar code.
    Scalar,
    /// SSE3 (128-bit float).
    Sse3,
    /// AVX (256-bit float).
    Avx,
    /// AVX with FMA3.
    AvxFma,
    /// ARM NEON (128-bit).
    Neon,
}

impl SimdLevel {
    /// Detect the best available SIMD level at runtime.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx") && is_x86_feature_detected!("fma") {
                return SimdLevel::AvxFma;
            }
            if is_x86_feature_detected!("avx") {
                return SimdLevel::Avx;
            }
            if is_x86_feature_detected!("sse3") {
                return SimdLevel::Sse3;
            }
            SimdLevel::Scalar
        }

        #[cfg(target_arch = "aarch64")]
        {
            // NEON is always available on AArch64
            SimdLevel::Neon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            SimdLevel::Scalar
        }
    }

    /// Whether strategies tagged `capability` may run on this level.
    ///
    /// NEON has no 256-bit registers, but `wide` lowers `f32x8` to a pair
    /// of 128-bit operations and has a native fused multiply-add, so every
    /// tier is accepted there.
    pub fn supports(&self, capability: Capability) -> bool {
        match self {
            SimdLevel::Neon => true,
            _ => self.capability() >= capability,
        }
    }

    /// Highest capability tier this level provides natively.
    pub fn capability(&self) -> Capability {
        match self {
            SimdLevel::Scalar => Capability::Scalar,
            SimdLevel::Sse3 | SimdLevel::Neon => Capability::Narrow,
            SimdLevel::Avx => Capability::Wide,
            SimdLevel::AvxFma => Capability::WideFma,
        }
    }

    /// Get the SIMD width in bytes.
    pub fn width_bytes(&self) -> usize {
        match self {
            SimdLevel::Scalar => 4,
            SimdLevel::Sse3 | SimdLevel::Neon => 16,
            SimdLevel::Avx | SimdLevel::AvxFma => 32,
        }
    }

    /// Get the number of f32 elements that fit in one SIMD register.
    pub fn f32_width(&self) -> usize {
        self.width_bytes() / 4
    }
}

/// Global cached SIMD level.
static SIMD_LEVEL: std::sync::OnceLock<SimdLevel> = std::sync::OnceLock::new();

/// Get the detected SIMD level (cached).
pub fn simd_level() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(|| {
        let level = SimdLevel::detect();
        tracing::debug!(?level, "detected SIMD level");
        level
    })
}
