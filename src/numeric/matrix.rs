// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! 3x3 rotation/attitude matrices.
//!
//! Generalizes the teacher crate's raw `[[f64; 3]; 3]` r-matrices and its
//! `rotate_x`/`rotate_z` free functions (`vectors_and_matrices.rs`) into a
//! `Mat3` type plus named `ROT1`/`ROT2`/`ROT3` passive-axis rotations. A
//! `rotate_y` sibling is added (the teacher never needed one; the Y-axis leg
//! is exercised by the Fukushima-Williams precession chain here).

use super::vector::Vec3;
use std::ops::Mul;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const ZERO: Self = Self { rows: [[0.0; 3]; 3] };

    pub fn identity() -> Self {
        Self {
            rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    pub fn from_cols(cols: [[f64; 3]; 3]) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, col) in cols.iter().enumerate() {
                row[c] = col[r];
            }
        }
        Self { rows }
    }

    pub fn row(self, i: usize) -> Vec3 {
        Vec3::from_array(self.rows[i])
    }

    pub fn element(self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn transpose(self) -> Self {
        Self::from_cols(self.rows)
    }

    /// ROT1(θ): passive (axis) rotation about x by θ — i.e. the rotation of
    /// the *coordinate axes* by θ, which rotates vectors expressed in the
    /// new frame by −θ relative to the old. (`eraRx` direction convention.)
    pub fn rot1(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// ROT2(θ): passive rotation about y.
    pub fn rot2(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// ROT3(θ): passive rotation about z. (`eraRz` direction convention.)
    pub fn rot3(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_rows([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }
}

/// Active rotation of vectors about x by θ (the inverse sense of [`Mat3::rot1`]).
pub fn vector_rotation_around_x(theta: f64) -> Mat3 {
    Mat3::rot1(-theta)
}

/// Active rotation of vectors about y by θ.
pub fn vector_rotation_around_y(theta: f64) -> Mat3 {
    Mat3::rot2(-theta)
}

/// Active rotation of vectors about z by θ.
pub fn vector_rotation_around_z(theta: f64) -> Mat3 {
    Mat3::rot3(-theta)
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(rhs), self.row(1).dot(rhs), self.row(2).dot(rhs))
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut rows = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut w = 0.0;
                for k in 0..3 {
                    w += self.rows[i][k] * rhs.rows[k][j];
                }
                rows[i][j] = w;
            }
        }
        Mat3 { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rot3_of_x_axis_rotates_into_minus_y_for_positive_angle() {
        let r = Mat3::rot3(std::f64::consts::FRAC_PI_2);
        let v = r * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn composed_rotation_matches_manual_multiply() {
        let a = Mat3::rot1(0.3);
        let b = Mat3::rot3(0.7);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!((a * b * v).x, (a * (b * v)).x, epsilon = 1e-12);
    }

    #[test]
    fn transpose_is_inverse_of_rotation() {
        let r = Mat3::rot2(1.234);
        let identity = r * r.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(identity.element(i, j), expect, epsilon = 1e-12);
            }
        }
    }
}
