// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! High-precision astrodynamics: double-double arithmetic, time-scale
//! conversions, celestial-to-terrestrial frame transforms, SGP4
//! propagation, pass prediction, and Sun/Moon ephemerides.

pub mod body;
pub mod constants;
pub mod coordinate;
pub mod double_double;
pub mod earth;
pub(crate) mod ellipsoid;
pub mod error;
pub mod fundamental_argument;
pub mod misc;
pub mod numeric;
pub mod satellite;
pub mod table;
pub mod time;

pub use double_double::DoubleDouble;
pub use ellipsoid::Ellipsoid;
pub use error::CoreError;
