// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The public propagator handle: `Tle -> OrbitalState -> predict(t) -> TEME`
//! (spec.md §2 data-flow, §4.11).
//!
//! Grounded on `original_source/satellite/orbital_state.h`'s shape
//! (`OrbitalState`, `Error`, `PredictResult`, `InitializeFromTLE`,
//! `Predict`), implemented against this crate's own near-earth
//! [`crate::satellite::sgp4`].

use crate::coordinate::Teme;
use crate::double_double::DoubleDouble;
use crate::ellipsoid::Ellipsoid;
use crate::satellite::error::Sgp4Error;
use crate::satellite::sgp4::{self, Elements};
use crate::satellite::tle::Tle;
use crate::time::{Time, TimeScale};

const MINUTES_PER_DAY: f64 = 1440.0;
const REVOLUTIONS_PER_DAY_TO_RADIANS_PER_MINUTE: f64 = std::f64::consts::TAU / MINUTES_PER_DAY;

/// A satellite's SGP4 state, initialized once from a [`Tle`].
///
/// `predict` never mutates `self` — it runs the propagator against a local
/// copy of the derived elements, so the same `OrbitalState` can be shared
/// across threads and queried concurrently (spec.md §5 "thread-safe because
/// it works on a local copy").
#[derive(Clone, Copy, Debug)]
pub struct OrbitalState {
    elements: Elements,
}

impl OrbitalState {
    /// Initialize SGP4 state from a TLE's mean elements (spec.md §4.11
    /// "Initialization"). `ellipsoid` selects the gravity-constant set the
    /// propagator's internals use (WGS72 matches the element set's own
    /// fit; WGS84 trades that fidelity for consistency with a WGS84 ITRF).
    pub fn init_from_tle(tle: &Tle, ellipsoid: Ellipsoid) -> Result<OrbitalState, Sgp4Error> {
        let epoch_utc = tle.epoch.to_scale(TimeScale::Utc);
        let epoch_jd = epoch_utc.jd();

        let elements = sgp4::init(
            ellipsoid,
            epoch_jd,
            tle.b_star,
            tle.eccentricity,
            tle.argument_of_perigee_deg.to_radians(),
            tle.inclination_deg.to_radians(),
            tle.mean_anomaly_deg.to_radians(),
            tle.mean_motion_rev_per_day * REVOLUTIONS_PER_DAY_TO_RADIANS_PER_MINUTE,
            tle.raan_deg.to_radians(),
        )?;

        Ok(OrbitalState { elements })
    }

    /// Predict this satellite's TEME position/velocity at `time` (spec.md
    /// §4.11 "predict(time)"). Internally converts `time` to UTC and takes
    /// the elapsed minutes since epoch in [`DoubleDouble`], since that
    /// difference can span years while still needing sub-millisecond
    /// resolution for short-period periodics.
    pub fn predict(&self, time: Time) -> Result<Teme, Sgp4Error> {
        let utc = time.to_scale(TimeScale::Utc);
        let minutes_since_epoch =
            ((utc.jd() - self.elements.epoch_jd()) * DoubleDouble::from(MINUTES_PER_DAY)).to_f64();

        let (position, velocity) = sgp4::propagate(&self.elements, minutes_since_epoch)?;
        Ok(Teme { time, position, velocity: Some(velocity) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::satellite::tle::Classification;
    use crate::time::format::JulianDate;

    fn noaa15_like_tle() -> Tle {
        Tle {
            catalog_number: 25338,
            classification: Classification::Unclassified,
            international_designator: "98030A".to_string(),
            epoch: Time::from_format(TimeScale::Utc, &JulianDate::new(2458826.0, 0.5)),
            mean_motion_dot: 0.00000012,
            mean_motion_dot_dot: 0.0,
            b_star: 0.00011,
            ephemeris_type: 0,
            element_set_number: 999,
            inclination_deg: 98.7,
            raan_deg: 30.0,
            eccentricity: 0.0011,
            argument_of_perigee_deg: 60.0,
            mean_anomaly_deg: 300.0,
            mean_motion_rev_per_day: 14.25,
            revolution_number_at_epoch: 12345,
        }
    }

    #[test]
    fn predict_at_epoch_is_near_leo_altitude() {
        let tle = noaa15_like_tle();
        let orbital_state = OrbitalState::init_from_tle(&tle, Ellipsoid::WGS72).unwrap();
        let teme = orbital_state.predict(tle.epoch).unwrap();
        let altitude = teme.position.norm() - 6_378_137.0;
        assert!(altitude > 600_000.0 && altitude < 1_000_000.0, "altitude was {altitude}");
    }

    #[test]
    fn predict_does_not_mutate_orbital_state() {
        let tle = noaa15_like_tle();
        let orbital_state = OrbitalState::init_from_tle(&tle, Ellipsoid::WGS72).unwrap();
        let copy_before = orbital_state;
        let _ = orbital_state.predict(tle.epoch + crate::time::TimeDifference::from_days(1.0));
        assert_eq!(orbital_state.elements.epoch_jd(), copy_before.elements.epoch_jd());
    }
}
