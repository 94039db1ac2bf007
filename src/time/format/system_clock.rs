// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bridges the host's wall clock into the time-format hierarchy via
//! [`UnixTime`] (spec.md §4.6, §6 "External Interfaces").

use std::time::SystemTime;

use crate::double_double::DoubleDouble;
use crate::time::format::{TimeFormat, UnixTime};

/// The current instant, as read from [`SystemTime::now`]. `to_jd` always
/// succeeds; a clock set before the Unix epoch yields a negative offset
/// rather than an error, since `UnixTime` places no bound on its sign.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock;

impl SystemClock {
    pub fn now() -> UnixTime {
        let duration = match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        };
        UnixTime::new(duration)
    }
}

impl TimeFormat for SystemClock {
    fn to_jd(&self) -> DoubleDouble {
        Self::now().to_jd()
    }

    fn from_jd(_jd: DoubleDouble) -> Self {
        SystemClock
    }
}
