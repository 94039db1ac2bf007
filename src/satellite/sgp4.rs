// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The near-earth NORAD SGP4 propagator (Hoots & Roehrich, Spacetrack
//! Report #3; secular/periodic forms per Vallado's 2006 revisit).
//!
//! No teacher source is available for this module (see DESIGN.md):
//! `dtaralla-tardis`'s SGP4 is a `bindgen` wrapper around Vallado's public
//! domain C++, not a Rust port to adapt line-by-line. This is instead a
//! direct translation of the published near-earth formulation, in the shape
//! `original_source/satellite/orbital_state.h`'s `elsetrec`/`Predict`
//! pattern calls for: a private per-satellite [`Elements`] struct built
//! once by [`init`], propagated by a pure [`propagate`] that never mutates
//! its input (spec.md §4.11, §9 "thread-safe per call").
//!
//! Deep-space resonance terms (for periods >= 225 minutes — geosynchronous
//! and higher orbits) are not implemented; [`init`] rejects such elements
//! with [`Sgp4Error::MeanMotionRange`] rather than silently returning a
//! wrong answer. This is a deliberate scope reduction, not an oversight:
//! every test scenario this crate targets is near-earth (LEO).

use crate::double_double::DoubleDouble;
use crate::ellipsoid::Ellipsoid;
use crate::numeric::Vec3;
use crate::satellite::error::Sgp4Error;

const TWO_THIRDS: f64 = 2.0 / 3.0;
const TWO_PI: f64 = std::f64::consts::TAU;

/// The deep-space boundary: orbital periods at or above this many minutes
/// require lunar-solar resonance terms this propagator does not implement.
const DEEP_SPACE_PERIOD_MINUTES: f64 = 225.0;

/// Earth gravity-model constants a gravitational parameter, radius and
/// zonal-harmonic set (spec.md §3 "Ellipsoid ... selectable for SGP4
/// internals").
#[derive(Clone, Copy, Debug)]
struct GravityConstants {
    mu: f64,
    radius_earth_km: f64,
    xke: f64,
    j2: f64,
    j3: f64,
    j4: f64,
    j3oj2: f64,
}

fn gravity_constants(ellipsoid: Ellipsoid) -> GravityConstants {
    // WGS72 is what the NORAD element sets themselves were fit against;
    // WGS84/GRS80 are offered because some downstream consumers want
    // internal consistency with a WGS84 ITRF rather than fidelity to the
    // original NORAD fit (spec.md §3).
    let (mu, radius_earth_km, j2, j3, j4) = match ellipsoid {
        Ellipsoid::WGS84 | Ellipsoid::GRS80 => {
            (398600.5, 6378.137, 0.00108262998905, -0.00000253215306, -0.00000161098761)
        }
        Ellipsoid::WGS72 | Ellipsoid::WGS80 => {
            (398600.8, 6378.135, 0.001082616, -0.00000253881, -0.00000165597)
        }
    };
    let xke = 60.0 / (radius_earth_km.powi(3) / mu).sqrt();
    GravityConstants { mu, radius_earth_km, xke, j2, j3, j4, j3oj2: j3 / j2 }
}

/// Mean and perturbation elements derived once from a TLE (spec.md §3
/// "SGP4 state ... opaque per-satellite struct initialized once from TLE").
#[derive(Clone, Copy, Debug)]
pub(crate) struct Elements {
    grav: GravityConstants,

    epoch_jd: DoubleDouble,
    bstar: f64,
    ecco: f64,
    inclo: f64,
    nodeo: f64,
    argpo: f64,
    mo: f64,
    no_unkozai: f64,

    a: f64,
    cosio: f64,
    sinio: f64,
    con41: f64,
    x1mth2: f64,
    x7thm1: f64,

    eta: f64,
    aycof: f64,
    xlcof: f64,

    cc1: f64,
    cc4: f64,
    cc5: f64,

    mdot: f64,
    argpdot: f64,
    nodedot: f64,
    nodecf: f64,
    omgcof: f64,
    xmcof: f64,
    t2cof: f64,

    delmo: f64,
    sinmao: f64,

    isimp: bool,
    d2: f64,
    d3: f64,
    d4: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
}

/// Initialize near-earth SGP4 state from TLE-derived mean elements
/// (spec.md §4.11 "Initialization"). Angles are radians, `no_kozai` is
/// radians/minute, `epoch_jd` is the TLE epoch as a two-part Julian Date in
/// UTC.
#[allow(clippy::too_many_arguments)]
pub(crate) fn init(
    ellipsoid: Ellipsoid,
    epoch_jd: DoubleDouble,
    bstar: f64,
    ecco: f64,
    argpo: f64,
    inclo: f64,
    mo: f64,
    no_kozai: f64,
    nodeo: f64,
) -> Result<Elements, Sgp4Error> {
    let grav = gravity_constants(ellipsoid);
    let GravityConstants { xke, j2, j3oj2, radius_earth_km, .. } = grav;

    if !(0.0..1.0).contains(&ecco) {
        return Err(Sgp4Error::MeanElementsRange);
    }
    if no_kozai <= 0.0 {
        return Err(Sgp4Error::MeanMotionRange);
    }

    let eccsq = ecco * ecco;
    let omeosq = 1.0 - eccsq;
    let rteosq = omeosq.max(0.0).sqrt();
    let cosio = inclo.cos();
    let cosio2 = cosio * cosio;

    // "Un-kozai" the mean motion: the TLE's mean motion already has the
    // Brouwer-to-Kozai secular J2 correction folded in, so recover the
    // Brouwer mean motion/semi-major axis this propagator actually needs.
    let ak = (xke / no_kozai).powf(TWO_THIRDS);
    let d1 = 0.75 * j2 * (3.0 * cosio2 - 1.0) / (rteosq * omeosq);
    let mut del_ = d1 / (ak * ak);
    let adel = ak * (1.0 - del_ * del_ - del_ * (1.0 / 3.0 + 134.0 * del_ * del_ / 81.0));
    del_ = d1 / (adel * adel);
    let no_unkozai = no_kozai / (1.0 + del_);

    let a = (xke / no_unkozai).powf(TWO_THIRDS);
    let sinio = inclo.sin();
    let po = a * omeosq;
    let con42 = 1.0 - 5.0 * cosio2;
    let con41 = -con42 - cosio2 - cosio2;
    let posq = po * po;
    let rp = a * (1.0 - ecco);

    if a < 0.95 {
        return Err(Sgp4Error::MeanElementsRange);
    }
    if rp < 1.0 {
        return Err(Sgp4Error::SuborbitalEpoch);
    }

    let period_minutes = TWO_PI / no_unkozai;
    if period_minutes >= DEEP_SPACE_PERIOD_MINUTES {
        return Err(Sgp4Error::MeanMotionRange);
    }

    let perigee_altitude_km = (rp - 1.0) * radius_earth_km;
    let (s4, qzms24) = if perigee_altitude_km < 156.0 {
        let s4_km = if perigee_altitude_km < 98.0 { 20.0 } else { perigee_altitude_km - 78.0 };
        let s4 = s4_km / radius_earth_km + 1.0;
        (s4, ((120.0 - s4_km) / radius_earth_km).powi(4))
    } else {
        (78.0 / radius_earth_km + 1.0, ((120.0 - 78.0) / radius_earth_km).powi(4))
    };

    let pinvsq = 1.0 / posq;
    let tsi = 1.0 / (a - s4);
    let eta = a * ecco * tsi;
    let etasq = eta * eta;
    let eeta = ecco * eta;
    let psisq = (1.0 - etasq).abs();
    let coef = qzms24 * tsi.powi(4);
    let coef1 = coef / psisq.powf(3.5);

    let cc2 = coef1
        * no_unkozai
        * (a * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
            + 0.375 * j2 * tsi / psisq * con41 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
    let cc1 = bstar * cc2;

    let cc3 = if ecco > 1.0e-4 { -2.0 * coef * tsi * j3oj2 * no_unkozai * sinio / ecco } else { 0.0 };

    let x1mth2 = 1.0 - cosio2;
    let cc4 = 2.0
        * no_unkozai
        * coef1
        * a
        * omeosq
        * (eta * (2.0 + 0.5 * etasq) + ecco * (0.5 + 2.0 * etasq)
            - j2 * tsi / (a * psisq)
                * (-3.0 * con41 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                    + 0.75 * x1mth2 * (2.0 * etasq - eeta * (1.0 + etasq)) * (2.0 * argpo).cos()));
    let cc5 = 2.0 * coef1 * a * omeosq * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

    let cosio4 = cosio2 * cosio2;
    let temp1 = 1.5 * j2 * pinvsq * no_unkozai;
    let temp2 = 0.5 * temp1 * j2 * pinvsq;
    let temp3 = -0.46875 * grav.j4 * pinvsq * pinvsq * no_unkozai;

    let mdot =
        no_unkozai + 0.5 * temp1 * rteosq * con41 + 0.0625 * temp2 * rteosq * (13.0 - 78.0 * cosio2 + 137.0 * cosio4);
    let argpdot = -0.5 * temp1 * con42
        + 0.0625 * temp2 * (7.0 - 114.0 * cosio2 + 395.0 * cosio4)
        + temp3 * (3.0 - 36.0 * cosio2 + 49.0 * cosio4);
    let xhdot1 = -temp1 * cosio;
    let nodedot = xhdot1 + (0.5 * temp2 * (4.0 - 19.0 * cosio2) + 2.0 * temp3 * (3.0 - 7.0 * cosio2)) * cosio;

    let omgcof = bstar * cc3 * argpo.cos();
    let xmcof = if ecco > 1.0e-4 { -TWO_THIRDS * coef * bstar / eeta } else { 0.0 };
    let nodecf = 3.5 * omeosq * xhdot1 * cc1;
    let t2cof = 1.5 * cc1;

    let xlcof = if (cosio + 1.0).abs() > 1.5e-12 {
        -0.25 * j3oj2 * sinio * (3.0 + 5.0 * cosio) / (1.0 + cosio)
    } else {
        -0.25 * j3oj2 * sinio * (3.0 + 5.0 * cosio) / 1.5e-12
    };
    let aycof = -0.5 * j3oj2 * sinio;

    let delmo = (1.0 + eta * mo.cos()).powi(3);
    let sinmao = mo.sin();
    let x7thm1 = 7.0 * cosio2 - 1.0;

    let isimp = perigee_altitude_km < 220.0;

    let (d2, d3, d4, t3cof, t4cof, t5cof) = if isimp {
        (0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    } else {
        let c1sq = cc1 * cc1;
        let d2 = 4.0 * a * tsi * c1sq;
        let temp = d2 * tsi * cc1 / 3.0;
        let d3 = (17.0 * a + s4) * temp;
        let d4 = 0.5 * temp * a * tsi * (221.0 * a + 31.0 * s4) * cc1;
        let t3cof = d2 + 2.0 * c1sq;
        let t4cof = 0.25 * (3.0 * d3 + cc1 * (12.0 * d2 + 10.0 * c1sq));
        let t5cof = 0.2 * (3.0 * d4 + 12.0 * cc1 * d3 + 6.0 * d2 * d2 + 15.0 * c1sq * (2.0 * d2 + c1sq));
        (d2, d3, d4, t3cof, t4cof, t5cof)
    };

    Ok(Elements {
        grav,
        epoch_jd,
        bstar,
        ecco,
        inclo,
        nodeo,
        argpo,
        mo,
        no_unkozai,
        a,
        cosio,
        sinio,
        con41,
        x1mth2,
        x7thm1,
        eta,
        aycof,
        xlcof,
        cc1,
        cc4,
        cc5,
        mdot,
        argpdot,
        nodedot,
        nodecf,
        omgcof,
        xmcof,
        t2cof,
        delmo,
        sinmao,
        isimp,
        d2,
        d3,
        d4,
        t3cof,
        t4cof,
        t5cof,
    })
}

/// Advance `elements` (never mutated — a fresh local copy every call, so
/// concurrent `propagate` calls against the same `Elements` are safe, spec.md
/// §5 "`Propagator::predict` is thread-safe because it works on a local
/// copy") by `tsince_min` minutes since epoch, returning TEME position
/// (meters) and velocity (m/s).
pub(crate) fn propagate(elements: &Elements, tsince_min: f64) -> Result<(Vec3, Vec3), Sgp4Error> {
    let e = *elements;

    let xmdf = e.mo + e.mdot * tsince_min;
    let argpdf = e.argpo + e.argpdot * tsince_min;
    let nodedf = e.nodeo + e.nodedot * tsince_min;
    let t2 = tsince_min * tsince_min;
    let mut nodem = nodedf + e.nodecf * t2;
    let mut tempa = 1.0 - e.cc1 * tsince_min;
    let mut tempe = e.bstar * e.cc4 * tsince_min;
    let mut templ = e.t2cof * t2;

    let (mut mm, mut argpm) = (xmdf, argpdf);

    if !e.isimp {
        let delomg = e.omgcof * tsince_min;
        let delmtemp = 1.0 + e.eta * xmdf.cos();
        let delm = e.xmcof * (delmtemp.powi(3) - e.delmo);
        let temp = delomg + delm;
        mm = xmdf + temp;
        argpm = argpdf - temp;
        let t3 = t2 * tsince_min;
        let t4 = t3 * tsince_min;
        tempa -= e.d2 * t2 + e.d3 * t3 + e.d4 * t4;
        tempe += e.bstar * e.cc5 * (mm.sin() - e.sinmao);
        templ += e.t3cof * t3 + t4 * (e.t4cof + tsince_min * e.t5cof);
    }

    let nm = e.no_unkozai;
    let am = (e.grav.xke / nm).powf(TWO_THIRDS) * tempa * tempa;
    let nm = e.grav.xke / am.powf(1.5);
    let em = e.ecco - tempe;

    if !(0.0..1.0).contains(&em) {
        return Err(Sgp4Error::PerturbedElementsRange);
    }

    let mm = mm + e.no_unkozai * templ;
    let xlm = mm + argpm + nodem;
    nodem = norm_radians(nodem);
    let xlm = norm_radians(xlm);
    let mm = norm_radians(xlm - argpm - nodem);

    // Long-period periodics.
    let axnl = em * argpm.cos();
    let temp = 1.0 / (am * (1.0 - em * em));
    let aynl = em * argpm.sin() + temp * e.aycof;
    let xl = mm + argpm + nodem + temp * e.xlcof * axnl;

    // Solve Kepler's equation by Newton's method on the eccentric longitude.
    let u = norm_radians(xl - nodem);
    let mut eo1 = u;
    let mut sineo1 = 0.0;
    let mut coseo1 = 0.0;
    for _ in 0..10 {
        sineo1 = eo1.sin();
        coseo1 = eo1.cos();
        let denom = 1.0 - coseo1 * axnl - sineo1 * aynl;
        let delta = (u - aynl * coseo1 + axnl * sineo1 - eo1) / denom;
        let delta = delta.clamp(-0.95, 0.95);
        eo1 += delta;
        if delta.abs() < 1.0e-12 {
            break;
        }
    }

    let ecose = axnl * coseo1 + aynl * sineo1;
    let esine = axnl * sineo1 - aynl * coseo1;
    let el2 = axnl * axnl + aynl * aynl;
    let pl = am * (1.0 - el2);

    if pl < 0.0 {
        return Err(Sgp4Error::SemiLatusRectumRange);
    }

    let rl = am * (1.0 - ecose);
    let rdotl = am.sqrt() * esine / rl;
    let rvdotl = pl.sqrt() / rl;
    let betal = (1.0 - el2).sqrt();
    let temp_ = esine / (1.0 + betal);
    let sinu = am / rl * (sineo1 - aynl - axnl * temp_);
    let cosu = am / rl * (coseo1 - axnl + aynl * temp_);
    let su = sinu.atan2(cosu);
    let sin2u = (cosu + cosu) * sinu;
    let cos2u = 1.0 - 2.0 * sinu * sinu;
    let temp = 1.0 / pl;
    let temp1 = 0.5 * e.grav.j2 * temp;
    let temp2 = temp1 * temp;

    // Short-period periodics.
    let mrt = rl * (1.0 - 1.5 * temp2 * betal * e.con41) + 0.5 * temp1 * e.x1mth2 * cos2u;
    let su = su - 0.25 * temp2 * e.x7thm1 * sin2u;
    let xnode = nodem + 1.5 * temp2 * e.cosio * sin2u;
    let xinc = e.inclo + 1.5 * temp2 * e.cosio * e.sinio * cos2u;
    let mvt = rdotl - nm * temp1 * e.x1mth2 * sin2u / e.grav.xke;
    let rvdot = rvdotl + nm * temp1 * (e.x1mth2 * cos2u + 1.5 * e.con41) / e.grav.xke;

    if mrt < 1.0 {
        return Err(Sgp4Error::SatelliteDecayed);
    }

    let (sinsu, cossu) = su.sin_cos();
    let (snod, cnod) = xnode.sin_cos();
    let (sini, cosi) = xinc.sin_cos();
    let xmx = -snod * cosi;
    let xmy = cnod * cosi;
    let ux = xmx * sinsu + cnod * cossu;
    let uy = xmy * sinsu + snod * cossu;
    let uz = sini * sinsu;
    let vx = xmx * cossu - cnod * sinsu;
    let vy = xmy * cossu - snod * sinsu;
    let vz = sini * cossu;

    let radius_earth_km = e.grav.radius_earth_km;
    let r_km = Vec3::new(mrt * ux, mrt * uy, mrt * uz) * radius_earth_km;

    let v_km_per_sec = radius_earth_km * e.grav.xke / 60.0;
    let v_km = Vec3::new(mvt * ux + rvdot * vx, mvt * uy + rvdot * vy, mvt * uz + rvdot * vz) * v_km_per_sec;

    // TEME output is in meters/m-per-second (spec.md §6 boundary convention);
    // the propagator's internal units are Earth radii/minutes.
    Ok((r_km * 1000.0, v_km * 1000.0))
}

impl Elements {
    pub(crate) fn epoch_jd(&self) -> DoubleDouble {
        self.epoch_jd
    }
}

fn norm_radians(a: f64) -> f64 {
    let r = a % TWO_PI;
    if r < 0.0 {
        r + TWO_PI
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leo_elements() -> Elements {
        init(
            Ellipsoid::WGS72,
            DoubleDouble::new(2458826.0, 0.5),
            0.0001,
            0.0012,
            1.0,
            97.0_f64.to_radians(),
            0.5,
            15.2 * TWO_PI / 1440.0,
            2.0,
        )
        .unwrap()
    }

    #[test]
    fn init_rejects_negative_mean_motion() {
        let err = init(Ellipsoid::WGS72, DoubleDouble::new(2458826.0, 0.5), 0.0, 0.001, 0.0, 0.9, 0.0, -1.0, 0.0);
        assert_eq!(err.unwrap_err(), Sgp4Error::MeanMotionRange);
    }

    #[test]
    fn init_rejects_geosynchronous_period_as_deep_space() {
        // ~1436 minute period, geostationary.
        let err = init(
            Ellipsoid::WGS72,
            DoubleDouble::new(2458826.0, 0.5),
            0.0,
            0.001,
            0.0,
            0.01,
            0.0,
            TWO_PI / 1436.0,
            0.0,
        );
        assert_eq!(err.unwrap_err(), Sgp4Error::MeanMotionRange);
    }

    #[test]
    fn propagate_at_epoch_yields_finite_nonzero_state() {
        let elements = leo_elements();
        let (r, v) = propagate(&elements, 0.0).unwrap();
        assert!(r.norm() > 6_000_000.0 && r.norm() < 8_000_000.0);
        assert!(v.norm() > 5_000.0 && v.norm() < 9_000.0);
    }

    #[test]
    fn propagate_is_pure_with_respect_to_its_input() {
        let elements = leo_elements();
        let before = elements;
        let _ = propagate(&elements, 90.0);
        assert_eq!(elements.no_unkozai, before.no_unkozai);
    }
}
