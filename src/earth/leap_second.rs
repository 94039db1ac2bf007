// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! TAI-UTC lookup, covering both the pre-1972 rate-based corrections and the
//! post-1972 whole-second leap seconds.
//!
//! Grounded on `original_source/earth/internal/leap_second_data.cc`: dates
//! before 1972-01-01 (MJD 41317) use the historical `offset + (mjd -
//! delta) * rate` formula from the IERS TAI-UTC table; dates from then on
//! are looked up in [`crate::earth::leap_second_table`]'s whole-second
//! table, which is itself served through a [`crate::table::SharedTable`] so
//! callers can supply an updated table at runtime without taking a lock.

use crate::table::leap_second_table;

struct HistoricalRow {
    mjd_utc: f64,
    offset: f64,
    mjd_delta: f64,
    rate: f64,
}

#[rustfmt::skip]
const HISTORICAL_TABLE: &[HistoricalRow] = &[
    HistoricalRow { mjd_utc: 37300.0, offset: 1.422818, mjd_delta: 37300.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 37512.0, offset: 1.372818, mjd_delta: 37300.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 37665.0, offset: 1.845858, mjd_delta: 37665.0, rate: 0.0011232 },
    HistoricalRow { mjd_utc: 38334.0, offset: 1.945858, mjd_delta: 37665.0, rate: 0.0011232 },
    HistoricalRow { mjd_utc: 38395.0, offset: 3.240130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 38486.0, offset: 3.340130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 38639.0, offset: 3.440130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 38761.0, offset: 3.540130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 38820.0, offset: 3.640130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 38942.0, offset: 3.740130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 39004.0, offset: 3.840130, mjd_delta: 38761.0, rate: 0.0012960 },
    HistoricalRow { mjd_utc: 39126.0, offset: 4.313170, mjd_delta: 39126.0, rate: 0.0025920 },
    HistoricalRow { mjd_utc: 39887.0, offset: 4.213170, mjd_delta: 39126.0, rate: 0.0025920 },
    HistoricalRow { mjd_utc: 41317.0, offset: 10.0, mjd_delta: 0.0, rate: 0.0 },
];

const NUM_SECONDS_IN_DAY: f64 = 86_400.0;

fn is_historical_utc(mjd_utc: f64) -> bool {
    mjd_utc >= HISTORICAL_TABLE[0].mjd_utc && mjd_utc < HISTORICAL_TABLE[HISTORICAL_TABLE.len() - 1].mjd_utc
}

fn historical_row_for_utc(mjd_utc: f64) -> &'static HistoricalRow {
    match HISTORICAL_TABLE.binary_search_by(|row| row.mjd_utc.total_cmp(&mjd_utc)) {
        Ok(i) => &HISTORICAL_TABLE[i],
        Err(0) => &HISTORICAL_TABLE[0],
        Err(i) => &HISTORICAL_TABLE[i - 1],
    }
}

fn historical_tai_minus_utc_in_utc_scale(mjd_utc: f64) -> f64 {
    let row = historical_row_for_utc(mjd_utc);
    row.offset + (mjd_utc - row.mjd_delta) * row.rate
}

/// TAI minus UTC, in seconds, for a date given in MJD/UTC.
///
/// Dates before the known TAI-UTC period return 0. Dates from 1972-01-01
/// onward are served from the whole-second table registered with
/// [`crate::table::leap_second_table`] (falling back to the built-in IERS
/// table if none has been set).
pub fn get_tai_minus_utc_seconds_in_utc_scale(mjd_utc: f64) -> f64 {
    if is_historical_utc(mjd_utc) {
        return historical_tai_minus_utc_in_utc_scale(mjd_utc);
    }

    let table = leap_second_table();
    table.lookup_tai_minus_utc_in_utc_scale(mjd_utc)
}

/// TAI minus UTC, in seconds, for a date given in MJD/TAI.
pub fn get_tai_minus_utc_seconds_in_tai_scale(mjd_tai: f64) -> f64 {
    // Historical rows are UTC-keyed; approximate the TAI->UTC boundary by
    // subtracting the offset at the boundary itself, mirroring the teacher's
    // closed-form inversion of the same rate equation.
    let is_historical = {
        let first = HISTORICAL_TABLE[0].mjd_utc + HISTORICAL_TABLE[0].offset / NUM_SECONDS_IN_DAY;
        let last_row = &HISTORICAL_TABLE[HISTORICAL_TABLE.len() - 1];
        let last = last_row.mjd_utc + 10.0 / NUM_SECONDS_IN_DAY;
        mjd_tai >= first && mjd_tai < last
    };

    if is_historical {
        // mjd_utc = mjd_tai - tai_minus_utc/86400, solved as a fixed point of
        // the UTC-scale formula (the rate term is small, one iteration
        // converges to double precision in this range).
        let mut tai_minus_utc = 1.4;
        for _ in 0..3 {
            let mjd_utc = mjd_tai - tai_minus_utc / NUM_SECONDS_IN_DAY;
            tai_minus_utc = historical_tai_minus_utc_in_utc_scale(mjd_utc);
        }
        return tai_minus_utc;
    }

    let table = leap_second_table();
    table.lookup_tai_minus_utc_in_tai_scale(mjd_tai)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_1961_returns_zero() {
        assert_eq!(get_tai_minus_utc_seconds_in_utc_scale(0.0), 0.0);
    }

    #[test]
    fn mid_1962_matches_the_historical_formula() {
        let v = get_tai_minus_utc_seconds_in_utc_scale(38000.0);
        assert!((1.8..2.4).contains(&v));
    }

    #[test]
    fn post_1972_uses_the_whole_second_table() {
        assert_eq!(get_tai_minus_utc_seconds_in_utc_scale(51179.0), 32.0);
    }

    #[test]
    fn leap_second_day_smears_linearly_to_the_next_offset() {
        // 1972-06-30 (MJD 41498), the day before TAI-UTC steps from 10 to 11.
        assert_eq!(get_tai_minus_utc_seconds_in_utc_scale(41499.0), 11.0);
        assert_eq!(get_tai_minus_utc_seconds_in_utc_scale(41498.8), 10.8);
    }
}
