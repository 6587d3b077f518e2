//! Bernoulli draws for the eleven binary risk flags.

use rand::Rng;
use synth_core::RiskFactorProbabilities;

/// Sampled risk flags of one patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactors {
    pub neuropathy: bool,
    pub deformity: bool,
    pub prior_ulcer: bool,
    pub prior_amputation: bool,
    pub pad: bool,
    pub retinopathy: bool,
    pub nephropathy: bool,
    pub hypertension: bool,
    pub smoking: bool,
    pub alcohol: bool,
    pub physically_active: bool,
}

/// Draw the risk-flag block.
///
/// All flags are independent Bernoulli trials except prior ulceration: an
/// amputee always has a prior ulcer, and the ulcer draw is only consumed
/// when amputation came up false.
pub fn sample_risk_factors<R: Rng>(rng: &mut R, p: &RiskFactorProbabilities) -> RiskFactors {
    let neuropathy = rng.gen_bool(p.neuropathy);
    let deformity = rng.gen_bool(p.deformity);
    let pad = rng.gen_bool(p.pad);
    let retinopathy = rng.gen_bool(p.retinopathy);
    let nephropathy = rng.gen_bool(p.nephropathy);

    let prior_amputation = rng.gen_bool(p.prior_amputation);
    let prior_ulcer = prior_amputation || rng.gen_bool(p.prior_ulcer);

    let hypertension = rng.gen_bool(p.hypertension);
    let smoking = rng.gen_bool(p.smoking);
    let alcohol = rng.gen_bool(p.alcohol);
    let physically_active = rng.gen_bool(p.physically_active);

    RiskFactors {
        neuropathy,
        deformity,
        prior_ulcer,
        prior_amputation,
        pad,
        retinopathy,
        nephropathy,
        hypertension,
        smoking,
        alcohol,
        physically_active,
    }
}
