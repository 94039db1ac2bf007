// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seconds since the Unix epoch, 1970-01-01T00:00:00 (spec.md §3, §6).

use crate::constants::{ERFA_DAYSEC, UNIX_EPOCH_JD};
use crate::double_double::DoubleDouble;
use crate::time::format::TimeFormat;

/// Seconds elapsed since 1970-01-01T00:00:00, the format the host's
/// monotonic/wall clock ([`super::SystemClock`]) is bridged through.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnixTime {
    pub seconds: f64,
}

impl UnixTime {
    pub fn new(seconds: f64) -> Self {
        Self { seconds }
    }
}

impl TimeFormat for UnixTime {
    fn to_jd(&self) -> DoubleDouble {
        DoubleDouble::from(UNIX_EPOCH_JD) + DoubleDouble::from(self.seconds) / DoubleDouble::from(ERFA_DAYSEC)
    }

    fn from_jd(jd: DoubleDouble) -> Self {
        let days_since_epoch = jd - DoubleDouble::from(UNIX_EPOCH_JD);
        Self { seconds: (days_since_epoch * ERFA_DAYSEC).to_f64() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn epoch_matches_unix_epoch_jd() {
        let t = UnixTime::new(0.0);
        assert_relative_eq!(t.to_jd().to_f64(), UNIX_EPOCH_JD, epsilon = 1e-9);
    }

    #[test]
    fn round_trips() {
        let t = UnixTime::new(1_700_000_000.25);
        let back = UnixTime::from_jd(t.to_jd());
        assert_relative_eq!(back.seconds, t.seconds, epsilon = 1e-6);
    }
}
