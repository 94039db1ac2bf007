// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SGP4 error taxonomy (spec.md §4.11, §7), one kind per failure mode the
//! NORAD propagator distinguishes between init and predict.

/// Errors returned by [`super::sgp4::init`] and [`super::sgp4::propagate`].
///
/// Named and numbered after the `error` field Spacetrack Report #3's
/// reference implementation sets on its `elsetrec`, rather than a generic
/// "it failed".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgp4Error {
    #[error("mean elements, eccentricity or semi-major axis out of range")]
    MeanElementsRange,

    #[error("mean motion less than zero")]
    MeanMotionRange,

    #[error("perturbed eccentricity out of range [0, 1)")]
    PerturbedElementsRange,

    #[error("semi-latus rectum is negative")]
    SemiLatusRectumRange,

    #[error("epoch elements describe a sub-orbital trajectory")]
    SuborbitalEpoch,

    #[error("satellite has decayed")]
    SatelliteDecayed,

    #[error("SGP4 failed for an unclassified reason")]
    Generic,
}
