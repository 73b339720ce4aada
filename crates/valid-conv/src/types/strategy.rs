use std::fmt;

/// Instruction tier a strategy needs to run natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Plain scalar code.
    Scalar,
    /// 128-bit vectors (SSE3 on x86-64, NEON on AArch64).
    Narrow,
    /// 256-bit float vectors (AVX).
    Wide,
    /// 256-bit vectors with fused multiply-add (AVX + FMA).
    WideFma,
}

/// How a strategy fetches the signal window for one tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadMode {
    /// Scalar element reads.
    Scalar,
    /// Unaligned vector loads straight from the caller's signal.
    Unaligned,
    /// Unaligned vector loads from `replicas` shifted copies.
    ReplicaUnaligned {
        /// Number of shifted copies.
        replicas: usize,
    },
    /// Aligned vector loads from `replicas` shifted copies.
    ReplicaAligned {
        /// Number of shifted copies.
        replicas: usize,
    },
    /// Each wide vector concatenated from two aligned narrow loads.
    ReplicaComposed {
        /// Number of shifted copies.
        replicas: usize,
    },
    /// Aligned wide loads where the offset allows, unaligned otherwise.
    ReplicaMixed {
        /// Number of shifted copies.
        replicas: usize,
    },
}

impl LoadMode {
    /// Number of shifted signal copies built per call.
    pub fn replicas(&self) -> usize {
        match *self {
            LoadMode::Scalar | LoadMode::Unaligned => 0,
            LoadMode::ReplicaUnaligned { replicas }
            | LoadMode::ReplicaAligned { replicas }
            | LoadMode::ReplicaComposed { replicas }
            | LoadMode::ReplicaMixed { replicas } => replicas,
        }
    }
}

/// Where accumulator results are stored during the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Straight into the caller's buffer.
    Direct,
    /// Into a call-local buffer, then one bulk copy.
    Local,
}

/// The composable parameters that distinguish one strategy from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    /// Lanes per vector (1 for scalar strategies).
    pub lanes: usize,
    /// Independent accumulators per main-loop step.
    pub accumulators: usize,
    /// Taps per unrolled group (1 when taps are not blocked).
    pub tap_block: usize,
    /// Load technique.
    pub load: LoadMode,
    /// Fused multiply-add accumulation.
    pub fused: bool,
    /// Output buffering.
    pub output: OutputMode,
    /// Compile-time kernel length, if any.
    pub fixed_kernel: Option<usize>,
}

impl Strategy {
    /// Scalar strategy descriptor.
    pub const SCALAR: Self = Self {
        lanes: 1,
        accumulators: 1,
        tap_block: 1,
        load: LoadMode::Scalar,
        fused: false,
        output: OutputMode::Direct,
        fixed_kernel: None,
    };

    /// Output samples produced per main-loop step; the scalar tail covers
    /// at most `step() - 1` samples.
    #[inline]
    pub fn step(&self) -> usize {
        self.lanes * self.accumulators
    }

    /// Output samples left to the scalar tail for `output_len` outputs.
    #[inline]
    pub fn tail_len(&self, output_len: usize) -> usize {
        if self.lanes == 1 {
            return 0;
        }
        output_len % self.step()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.lanes, self.accumulators)?;
        if self.tap_block > 1 {
            write!(f, " block{}", self.tap_block)?;
        }
        match self.load {
            LoadMode::Scalar => write!(f, " scalar")?,
            LoadMode::Unaligned => write!(f, " unaligned")?,
            LoadMode::ReplicaUnaligned { replicas } => write!(f, " replicas{}/unaligned", replicas)?,
            LoadMode::ReplicaAligned { replicas } => write!(f, " replicas{}/aligned", replicas)?,
            LoadMode::ReplicaComposed { replicas } => write!(f, " replicas{}/composed", replicas)?,
            LoadMode::ReplicaMixed { replicas } => write!(f, " replicas{}/mixed", replicas)?,
        }
        if self.fused {
            write!(f, " fma")?;
        }
        if self.output == OutputMode::Local {
            write!(f, " local-out")?;
        }
        if let Some(k) = self.fixed_kernel {
            write!(f, " k={}", k)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_order() {
        assert!(Capability::Scalar < Capability::Narrow);
        assert!(Capability::Narrow < Capability::Wide);
        assert!(Capability::Wide < Capability::WideFma);
    }

    #[test]
    fn test_step_and_tail() {
        let s = Strategy {
            lanes: 8,
            accumulators: 2,
            tap_block: 8,
            load: LoadMode::ReplicaMixed { replicas: 4 },
            fused: false,
            output: OutputMode::Direct,
            fixed_kernel: None,
        };
        assert_eq!(s.step(), 16);
        assert_eq!(s.tail_len(37), 5);
        assert_eq!(s.tail_len(32), 0);
        assert_eq!(Strategy::SCALAR.tail_len(37), 0);
        assert_eq!(s.load.replicas(), 4);
    }

    #[test]
    fn test_display() {
        let s = Strategy {
            lanes: 4,
            accumulators: 1,
            tap_block: 4,
            load: LoadMode::ReplicaAligned { replicas: 4 },
            fused: false,
            output: OutputMode::Direct,
            fixed_kernel: Some(16),
        };
        assert_eq!(s.to_string(), "4x1 block4 replicas4/aligned k=16");
        assert_eq!(Strategy::SCALAR.to_string(), "1x1 scalar");
    }
}
