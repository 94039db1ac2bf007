// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A table of IERS-announced whole leap seconds (post-1972), with clamping
//! extrapolation outside its covered range.
//!
//! Grounded on `original_source/earth/leap_second_table.h`'s
//! `LeapSecondTable` (`AddRow`/`Preprocess`/`LookupTAIMinusUTCSecondsIn*`):
//! rows are kept sorted by MJD so lookup is a binary search, and a lookup
//! past either end of the table clamps to the nearest row rather than
//! erroring — the table is inherently incomplete (future leap seconds are
//! unannounced) and the caller is expected to tolerate that.

#[derive(Clone, Copy, Debug)]
struct Row {
    mjd_utc: f64,
    mjd_tai: f64,
    tai_minus_utc: f64,
}

/// A sorted table of (MJD, TAI-UTC) leap second announcements.
#[derive(Clone, Debug, Default)]
pub struct LeapSecondTable {
    rows: Vec<Row>,
}

impl LeapSecondTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row: the TAI-UTC offset (seconds) effective from `mjd_utc`
    /// onward. Rows may be added in any order; call [`Self::preprocess`]
    /// once all rows are added.
    pub fn add_row(&mut self, mjd_utc: f64, tai_minus_utc: f64) {
        let mjd_tai = mjd_utc + tai_minus_utc / 86_400.0;
        self.rows.push(Row { mjd_utc, mjd_tai, tai_minus_utc });
    }

    /// Sort rows by date. Must be called after the last `add_row` and before
    /// any lookup.
    pub fn preprocess(&mut self) {
        self.rows.sort_by(|a, b| a.mjd_utc.total_cmp(&b.mjd_utc));
    }

    /// TAI-UTC, in seconds, for `mjd_utc` (UTC scale). Returns 0 if the table
    /// is empty.
    ///
    /// Smears the leap second linearly across the UTC day before a new
    /// leap second takes effect, matching Astropy and SOFA (and avoiding
    /// the TAI/UTC ambiguity at the leap second itself).
    pub fn lookup_tai_minus_utc_in_utc_scale(&self, mjd_utc: f64) -> f64 {
        let Some(i) = lookup_floor_index(&self.rows, mjd_utc, |r| r.mjd_utc) else {
            return 0.0;
        };
        let row = &self.rows[i];
        let Some(next_row) = self.rows.get(i + 1) else {
            return row.tai_minus_utc;
        };

        let mjd_utc_begin_of_last_day = next_row.mjd_utc - 1.0;
        if mjd_utc <= mjd_utc_begin_of_last_day {
            return row.tai_minus_utc;
        }

        let weight = mjd_utc - mjd_utc_begin_of_last_day;
        lerp_f64(row.tai_minus_utc, next_row.tai_minus_utc, weight)
    }

    /// TAI-UTC, in seconds, for `mjd_tai` (TAI scale). Returns 0 if the table
    /// is empty. Same last-day smear as the UTC-scale lookup, re-expressed
    /// on the TAI axis.
    pub fn lookup_tai_minus_utc_in_tai_scale(&self, mjd_tai: f64) -> f64 {
        let Some(i) = lookup_floor_index(&self.rows, mjd_tai, |r| r.mjd_tai) else {
            return 0.0;
        };
        let row = &self.rows[i];
        let Some(next_row) = self.rows.get(i + 1) else {
            return row.tai_minus_utc;
        };

        let mjd_tai_begin_of_last_day = next_row.mjd_utc - 1.0 + row.tai_minus_utc / 86_400.0;
        if mjd_tai <= mjd_tai_begin_of_last_day {
            return row.tai_minus_utc;
        }

        let weight = (mjd_tai - mjd_tai_begin_of_last_day) / (next_row.mjd_tai - mjd_tai_begin_of_last_day);
        lerp_f64(row.tai_minus_utc, next_row.tai_minus_utc, weight)
    }
}

fn lerp_f64(a: f64, b: f64, weight: f64) -> f64 {
    a + (b - a) * weight
}

/// The index of the row in effect at `key`: the last row whose key is `<=
/// key`, clamped to the first row if `key` precedes the table.
fn lookup_floor_index(rows: &[Row], key: f64, field: impl Fn(&Row) -> f64) -> Option<usize> {
    if rows.is_empty() {
        return None;
    }
    match rows.binary_search_by(|row| field(row).total_cmp(&key)) {
        Ok(i) => Some(i),
        Err(0) => Some(0),
        Err(i) => Some(i - 1),
    }
}

/// The whole-second leap seconds announced by the IERS since UTC's 1972
/// redefinition, `(mjd_utc, tai_minus_utc_seconds)`.
pub const IERS_LEAP_SECONDS: &[(f64, f64)] = &[
    (41317.0, 10.0),
    (41499.0, 11.0),
    (41683.0, 12.0),
    (42048.0, 13.0),
    (42413.0, 14.0),
    (42778.0, 15.0),
    (43144.0, 16.0),
    (43509.0, 17.0),
    (43874.0, 18.0),
    (44239.0, 19.0),
    (44786.0, 20.0),
    (45151.0, 21.0),
    (45516.0, 22.0),
    (46247.0, 23.0),
    (47161.0, 24.0),
    (47892.0, 25.0),
    (48257.0, 26.0),
    (48804.0, 27.0),
    (49169.0, 28.0),
    (49534.0, 29.0),
    (50083.0, 30.0),
    (50630.0, 31.0),
    (51179.0, 32.0),
    (53736.0, 33.0),
    (54832.0, 34.0),
    (56109.0, 35.0),
    (57204.0, 36.0),
    (57754.0, 37.0),
];

/// Build the default table from [`IERS_LEAP_SECONDS`].
pub fn default_table() -> LeapSecondTable {
    let mut table = LeapSecondTable::new();
    for &(mjd, offset) in IERS_LEAP_SECONDS {
        table.add_row(mjd, offset);
    }
    table.preprocess();
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_below_the_first_row() {
        let table = default_table();
        assert_eq!(table.lookup_tai_minus_utc_in_utc_scale(0.0), 10.0);
    }

    #[test]
    fn clamps_above_the_last_row() {
        let table = default_table();
        assert_eq!(table.lookup_tai_minus_utc_in_utc_scale(99999.0), 37.0);
    }

    #[test]
    fn returns_zero_for_an_empty_table() {
        let table = LeapSecondTable::new();
        assert_eq!(table.lookup_tai_minus_utc_in_utc_scale(55000.0), 0.0);
    }

    #[test]
    fn picks_the_row_effective_at_the_given_date() {
        let table = default_table();
        // 1999-01-01 is after the 1999-01-01 leap second (MJD 51179) takes effect.
        assert_eq!(table.lookup_tai_minus_utc_in_utc_scale(51179.0), 32.0);
        assert_eq!(table.lookup_tai_minus_utc_in_utc_scale(51178.0), 31.0);
    }
}
