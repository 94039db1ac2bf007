// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Crate-wide error types.

/// Errors from the non-propagator parts of the crate: coordinate
/// construction, ellipsoid lookups, and other total-but-checked conversions.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("function {function} indicated that value '{value}' is invalid")]
    InvalidValue {
        function: &'static str,
        value: &'static str,
    },

    #[error("function {function} indicated that it received unrealistic inputs")]
    Unrealistic { function: &'static str },
}
