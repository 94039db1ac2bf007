// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Earth rotation, orientation and precession-nutation primitives.

pub mod cip;
pub mod leap_second;
pub mod leap_second_table;
pub mod orientation;
pub mod precession_nutation;
pub mod rotation;

pub use leap_second::{get_tai_minus_utc_seconds_in_tai_scale, get_tai_minus_utc_seconds_in_utc_scale};
pub use leap_second_table::LeapSecondTable;
pub use orientation::{get_earth_polar_motion_in_utc_scale, get_ut1_minus_utc_seconds_in_utc_scale, OrientationTable};
pub use rotation::{era2000, gmst06, gmst82, gst06, gst06a, s_prime};
