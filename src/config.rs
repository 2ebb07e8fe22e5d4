// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// The table capacity used when none is requested.
/// Always rounded up to a prime before use.
pub(crate) const DEFAULT_CAPACITY: usize = 11;

/// Load factor ceiling for the probed table.
// Must stay below 0.5 so a quadratic probe sequence over a prime-sized
// table always reaches an empty slot.
pub(crate) const PROBED_MAX_LOAD: f64 = 0.5;

/// Load factor ceiling for the chained table.
pub(crate) const CHAINED_MAX_LOAD: f64 = 1.0;
