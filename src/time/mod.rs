// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Time scales, instants, durations, and the concrete formats they convert
//! through (spec.md §3, §4.5, §4.6).

mod core;
mod difference;
pub mod format;
mod scale;

pub use self::core::Time;
pub use difference::TimeDifference;
pub use format::TimeFormat;
pub use scale::TimeScale;
