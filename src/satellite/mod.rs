// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SGP4 propagation and pass prediction (spec.md §4.11, §4.12).

mod error;
mod orbital_state;
mod pass;
pub(crate) mod sgp4;
mod tle;

pub use error::Sgp4Error;
pub use orbital_state::OrbitalState;
pub use pass::{predict_current_or_next_pass, predict_next_pass, PredictPassOptions, SatellitePass};
pub use tle::{Classification, Tle};
