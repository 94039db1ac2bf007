// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Concrete time formats, each convertible to and from a canonical Julian
//! Date via [`TimeFormat`] (spec.md §3 "JD formats", §4.6).

mod date_time;
mod julian_date;
mod modified_julian_date;
mod system_clock;
mod unix_time;

pub use date_time::DateTime;
pub use julian_date::JulianDate;
pub use modified_julian_date::ModifiedJulianDate;
pub use system_clock::SystemClock;
pub use unix_time::UnixTime;

use crate::double_double::DoubleDouble;

/// A format that can be losslessly (up to its own resolution) converted to
/// and from a canonical Julian Date.
///
/// Every [`crate::time::Time`] is built from one of these via
/// [`crate::time::Time::from_format`]; round-tripping a format through a
/// `Time` and back reproduces the original value (spec.md §8, invariant 2).
pub trait TimeFormat {
    fn to_jd(&self) -> DoubleDouble;
    fn from_jd(jd: DoubleDouble) -> Self;
}
