// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lock-free shared lookup tables for runtime-supplied Earth-orientation
//! and leap-second data (spec.md §5 "Concurrency").

mod registry;
mod shared_table;

pub use registry::{leap_second_table, orientation_table};
pub use shared_table::SharedTable;
