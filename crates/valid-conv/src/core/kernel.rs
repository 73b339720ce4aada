use crate::error::Result;
use crate::types::{Capability, Requirements, Strategy};

/// A valid-mode convolution routine.
///
/// Every strategy in the crate implements this trait. Strategy values are
/// zero-sized, stateless and shareable across threads; all scratch memory
/// (taps, replicas, local output) is allocated per call.
pub trait Convolve: Send + Sync {
    /// Stable identifier, matching the [`crate::Variant`] name.
    fn name(&self) -> &'static str;

    /// Instruction tier needed to run natively.
    fn capability(&self) -> Capability;

    /// Kernel length constraints.
    fn requirements(&self) -> Requirements {
        Requirements::NONE
    }

    /// The composable parameters of this strategy.
    fn strategy(&self) -> Strategy;

    /// Run the hot path, assuming every precondition holds.
    ///
    /// # Panics
    /// If `signal`, `kernel` and `output` violate the length contract or
    /// [`Convolve::requirements`]. A violation is never undefined behavior.
    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]);

    /// Validate the call, then run [`Convolve::execute`].
    ///
    /// `output` must hold exactly `signal.len() - kernel.len() + 1` samples;
    /// every one of them is overwritten. Nothing is written on error.
    fn convolve(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) -> Result<()> {
        self.requirements()
            .check(signal.len(), kernel.len(), output.len())?;
        self.execute(signal, kernel, output);
        Ok(())
    }
}
