// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The four time scales this crate converts between (spec.md §3 "Time
//! scales"). Relativistic scales (TDB/TCB) are a stated non-goal (spec.md
//! §1).

/// A time scale. Every [`crate::time::Time`] carries exactly one of these,
/// and the same Julian Date value in two different scales denotes two
/// different physical instants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeScale {
    /// International Atomic Time: continuous, no leap seconds.
    Tai,
    /// Coordinated Universal Time: TAI minus an integer leap-second count,
    /// smeared linearly across the day before each new leap second.
    Utc,
    /// Universal Time from Earth rotation, related to UTC via the
    /// registered Earth-orientation table.
    Ut1,
    /// Terrestrial Time: `TT = TAI + 32.184 s` exactly.
    Tt,
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeScale::Tai => "TAI",
            TimeScale::Utc => "UTC",
            TimeScale::Ut1 => "UT1",
            TimeScale::Tt => "TT",
        };
        f.write_str(s)
    }
}
