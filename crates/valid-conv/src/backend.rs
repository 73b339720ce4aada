use crate::simd::{SimdLevel, Variant};

/// Available backends for valid-mode convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Scalar strategies only.
    Portable,
    /// SIMD strategies available (SSE3, AVX, NEON, etc.).
    Simd,
}

impl Backend {
    /// Get the currently active backend based on CPU features.
    pub fn current() -> Self {
        match crate::simd::simd_level() {
            SimdLevel::Scalar => Backend::Portable,
            _ => Backend::Simd,
        }
    }

    /// Get a description of the current SIMD capabilities.
    pub fn description() -> String {
        let level = crate::simd::simd_level();
        match level {
            SimdLevel::Scalar => "Portable (no SIMD)".to_string(),
            SimdLevel::Sse3 => "x86-64 SSE3 (128-bit)".to_string(),
            SimdLevel::Avx => "x86-64 AVX (256-bit float)".to_string(),
            SimdLevel::AvxFma => "x86-64 AVX + FMA (256-bit)".to_string(),
            SimdLevel::Neon => "ARM NEON (128-bit)".to_string(),
        }
    }

    /// Names of the variants this CPU can run.
    pub fn variants() -> Vec<&'static str> {
        Variant::available().map(|v| v.name()).collect()
    }
}

/// Get information about the library configuration.
pub fn version_info() -> String {
    format!(
        "valid-conv v{}\nBackend: {}\nSIMD Level: {:?}\nVariants: {}",
        env!("CARGO_PKG_VERSION"),
        Backend::description(),
        crate::simd::simd_level(),
        Backend::variants().join(", ")
    )
}
