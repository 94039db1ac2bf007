// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `JD = MJD + 2400000.5` (spec.md §3).

use crate::constants::ERFA_DJM0;
use crate::double_double::DoubleDouble;
use crate::time::format::TimeFormat;

/// A Modified Julian Date given as two parts, `MJD = mjd1 + mjd2`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifiedJulianDate {
    pub mjd1: f64,
    pub mjd2: f64,
}

impl ModifiedJulianDate {
    pub fn new(mjd1: f64, mjd2: f64) -> Self {
        Self { mjd1, mjd2 }
    }
}

impl TimeFormat for ModifiedJulianDate {
    fn to_jd(&self) -> DoubleDouble {
        DoubleDouble::from(ERFA_DJM0) + DoubleDouble::new(self.mjd1, self.mjd2)
    }

    fn from_jd(jd: DoubleDouble) -> Self {
        let mjd = jd - DoubleDouble::from(ERFA_DJM0);
        Self { mjd1: mjd.hi(), mjd2: mjd.lo() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mjd_zero_is_november_17_1858() {
        let mjd = ModifiedJulianDate::new(0.0, 0.0);
        assert_relative_eq!(mjd.to_jd().to_f64(), ERFA_DJM0, epsilon = 1e-9);
    }

    #[test]
    fn round_trips_through_jd() {
        let mjd = ModifiedJulianDate::new(59000.0, 0.75);
        let jd = mjd.to_jd();
        let back = ModifiedJulianDate::from_jd(jd);
        assert_relative_eq!(back.mjd1 + back.mjd2, 59000.75, epsilon = 1e-9);
    }
}
