// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The process-wide default leap-second and Earth-orientation tables.
//!
//! Grounded on `original_source/earth/leap_second.h`/`orientation.h`'s
//! `GetLeapSecondData()`/`GetEarthOrientationData()` singletons. This is the
//! one module in the crate allowed a hidden global (spec.md §9): every
//! other Earth-orientation function takes its table as an explicit
//! argument or reads through here, never reaching for a singleton of its
//! own.

use std::sync::{Arc, OnceLock};

use crate::earth::leap_second_table::{self, LeapSecondTable};
use crate::earth::orientation::OrientationTable;
use crate::table::SharedTable;

fn leap_second_slot() -> &'static SharedTable<LeapSecondTable> {
    static SLOT: OnceLock<SharedTable<LeapSecondTable>> = OnceLock::new();
    SLOT.get_or_init(SharedTable::new)
}

fn orientation_slot() -> &'static SharedTable<OrientationTable> {
    static SLOT: OnceLock<SharedTable<OrientationTable>> = OnceLock::new();
    SLOT.get_or_init(SharedTable::new)
}

/// Replace the process-wide leap-second table.
pub fn set_leap_second_table(table: LeapSecondTable) {
    leap_second_slot().set(table);
}

/// Replace the process-wide Earth-orientation (UT1-UTC, polar motion) table.
pub fn set_orientation_table(table: OrientationTable) {
    orientation_slot().set(table);
}

/// The current leap-second table, falling back to the built-in IERS table
/// ([`leap_second_table::default_table`]) if none has been explicitly set.
pub fn leap_second_table() -> Arc<LeapSecondTable> {
    leap_second_slot().load().unwrap_or_else(|| Arc::new(leap_second_table::default_table()))
}

/// The current Earth-orientation table, or an empty table (all lookups
/// return zero) if none has been set.
pub fn orientation_table() -> Arc<OrientationTable> {
    orientation_slot().load().unwrap_or_else(|| Arc::new(OrientationTable::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_second_table_falls_back_to_the_builtin_table() {
        let table = leap_second_table();
        assert_eq!(table.lookup_tai_minus_utc_in_utc_scale(99999.0), 37.0);
    }

    #[test]
    fn orientation_table_falls_back_to_empty() {
        let table = orientation_table();
        assert_eq!(table.lookup_ut1_minus_utc_in_utc_scale(55000.0), 0.0);
    }
}
