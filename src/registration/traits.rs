use crate::error::AlgorithmError;
use crate::registration::types::RegistrationResult;

/// Capability trait for pluggable registration algorithms.
///
/// `I` is the caller's image type; the engine never inspects it. An
/// implementation aligns `source` to `reference` and reports quality metrics
/// plus an opaque transform.
///
/// Contract: ordinary failure to find a valid alignment is `Ok(None)`, not an
/// error. Implementations should translate internal faults into `Ok(None)`
/// where they can; an `Err` is tolerated but treated by the engine as an
/// empty outcome with a logged warning, never as a fatal failure of the
/// overall registration.
pub trait RegistrationAlgorithm<I>: Send + Sync {
    /// Align the source image to the reference image.
    fn align(
        &self,
        source: &I,
        reference: &I,
    ) -> Result<Option<RegistrationResult>, AlgorithmError>;
}
