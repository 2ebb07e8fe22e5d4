// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::hash::{BuildHasherDefault, Hasher};

/// A deliberately terrible hasher which maps every key onto a handful of
/// distinct hash values, so that tests can force long probe chains and
/// crowded buckets with a few inserts.
#[derive(Default)]
pub(crate) struct ClusterHasher {
    state: u64,
}

impl Hasher for ClusterHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_add(u64::from(*byte));
        }
    }

    fn finish(&self) -> u64 {
        self.state % 4
    }
}

pub(crate) type ClusterState = BuildHasherDefault<ClusterHasher>;
