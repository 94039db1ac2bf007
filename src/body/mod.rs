// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sun and Moon ephemerides (spec.md §4.13).

pub mod moon;
pub mod sun;

pub use moon::{get_meeus_moon_coordinate, get_moon_coordinate, illuminated_fraction, phase_angle, MeeusMoonCoordinate};
pub use sun::get_approximate_sun_coordinate;
