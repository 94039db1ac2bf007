// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fixed-size linear algebra: `Vec2`/`Vec3`/`Vec4` and `Mat3`.

mod matrix;
mod vector;

pub use matrix::{vector_rotation_around_x, vector_rotation_around_y, vector_rotation_around_z, Mat3};
pub use vector::{Vec2, Vec3, Vec4};
