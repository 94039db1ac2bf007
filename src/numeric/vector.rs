// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fixed-size vector types.
//!
//! Generalizes the teacher crate's raw `[f64; 3]` p-vectors
//! (`vectors_and_matrices.rs`) into named types so call sites read as
//! `Vec3::dot`/`Vec3::cross` rather than free functions over bare arrays.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

macro_rules! define_vector {
    ($name:ident, $n:expr, [$($field:ident : $idx:expr),+]) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(pub $field: f64,)+
        }

        impl $name {
            pub const ZERO: Self = Self { $($field: 0.0,)+ };

            pub fn new($($field: f64),+) -> Self {
                Self { $($field,)+ }
            }

            pub fn from_array(a: [f64; $n]) -> Self {
                Self { $($field: a[$idx],)+ }
            }

            pub fn to_array(self) -> [f64; $n] {
                [$(self.$field,)+]
            }

            pub fn dot(self, rhs: Self) -> f64 {
                let a = self.to_array();
                let b = rhs.to_array();
                a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
            }

            pub fn norm_squared(self) -> f64 {
                self.dot(self)
            }

            pub fn norm(self) -> f64 {
                self.norm_squared().sqrt()
            }

            /// Modulus and unit vector; returns the zero vector for a null input
            /// (mirrors `eraPn`'s degenerate-input handling).
            pub fn normalized(self) -> (f64, Self) {
                let r = self.norm();
                if r == 0.0 {
                    (0.0, Self::ZERO)
                } else {
                    (r, self * (1.0 / r))
                }
            }

            pub fn abs(self) -> Self {
                Self::from_array(self.to_array().map(f64::abs))
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::from_array(std::array::from_fn(|i| self.to_array()[i] + rhs.to_array()[i]))
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::from_array(std::array::from_fn(|i| self.to_array()[i] - rhs.to_array()[i]))
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self::from_array(self.to_array().map(|x| -x))
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self::from_array(self.to_array().map(|x| x * rhs))
            }
        }

        impl Div<f64> for $name {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                self * (1.0 / rhs)
            }
        }

        impl Index<usize> for $name {
            type Output = f64;
            fn index(&self, i: usize) -> &f64 {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("index {i} out of range for {}", stringify!($name)),
                }
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, i: usize) -> &mut f64 {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {i} out of range for {}", stringify!($name)),
                }
            }
        }
    };
}

define_vector!(Vec2, 2, [x: 0, y: 1]);
define_vector!(Vec3, 3, [x: 0, y: 1, z: 2]);
define_vector!(Vec4, 4, [x: 0, y: 1, z: 2, w: 3]);

impl Vec2 {
    /// 2D cross product (the z-component of the corresponding 3D cross).
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl Vec3 {
    /// p-vector outer (cross) product. (`eraPvxpv`)
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_product_is_orthogonal_to_inputs() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert_relative_eq!(c.dot(a), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.dot(b), 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalized_handles_null_vector() {
        let (r, u) = Vec3::ZERO.normalized();
        assert_eq!(r, 0.0);
        assert_eq!(u, Vec3::ZERO);
    }
}
