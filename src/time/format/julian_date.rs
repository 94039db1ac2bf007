// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A Julian Date given as two parts, in the usual ERFA-style manner that
//! preserves resolution regardless of how the caller splits the two halves
//! (spec.md §3 "JD formats").

use crate::double_double::DoubleDouble;
use crate::time::format::TimeFormat;

/// `JD = jd1 + jd2`. The split is the caller's choice: `(2451545.0, 0.0)`
/// and `(2400000.5, 51544.5)` denote the same instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }
}

impl TimeFormat for JulianDate {
    fn to_jd(&self) -> DoubleDouble {
        DoubleDouble::new(self.jd1, self.jd2)
    }

    fn from_jd(jd: DoubleDouble) -> Self {
        Self { jd1: jd.hi(), jd2: jd.lo() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn split_is_arbitrary_but_equivalent() {
        let a = JulianDate::new(2451545.0, 0.5);
        let b = JulianDate::new(2400000.5, 51545.5);
        assert_relative_eq!(a.to_jd().to_f64(), b.to_jd().to_f64(), epsilon = 1e-9);
    }
}
