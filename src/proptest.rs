// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Proptest strategies for both map types.
//!
//! These are only available when using the `proptest` feature flag.

use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Range;

use ::proptest::collection::vec;
use ::proptest::strategy::{BoxedStrategy, Strategy, ValueTree};

use crate::chained::map::ChainedHashMap;
use crate::probed::map::ProbedHashMap;

/// A strategy for a probed hash map of a given size.
pub fn probed_hash_map<K: Strategy + 'static, V: Strategy + 'static>(
    key: K,
    value: V,
    size: Range<usize>,
) -> BoxedStrategy<ProbedHashMap<<K::Tree as ValueTree>::Value, <V::Tree as ValueTree>::Value>>
where
    <K::Tree as ValueTree>::Value: Hash + Eq,
{
    let min_size = size.start;
    vec((key, value), size)
        .prop_map(ProbedHashMap::from_iter)
        .prop_filter("ProbedHashMap minimum size".to_owned(), move |m| {
            m.len() >= min_size
        })
        .boxed()
}

/// A strategy for a chained hash map of a given size.
pub fn chained_hash_map<K: Strategy + 'static, V: Strategy + 'static>(
    key: K,
    value: V,
    size: Range<usize>,
) -> BoxedStrategy<ChainedHashMap<<K::Tree as ValueTree>::Value, <V::Tree as ValueTree>::Value>>
where
    <K::Tree as ValueTree>::Value: Hash + Eq,
{
    let min_size = size.start;
    vec((key, value), size)
        .prop_map(ChainedHashMap::from_iter)
        .prop_filter("ChainedHashMap minimum size".to_owned(), move |m| {
            m.len() >= min_size
        })
        .boxed()
}

// Tests

#[cfg(test)]
mod test {
    use super::*;
    use ::proptest::num::i16;
    use ::proptest::proptest;

    proptest! {
        #[test]
        fn probed_respects_size_bounds(ref m in probed_hash_map(i16::ANY, i16::ANY, 10..100)) {
            assert!(m.len() < 100);
            assert!(m.len() >= 10);
        }

        #[test]
        fn chained_respects_size_bounds(ref m in chained_hash_map(i16::ANY, i16::ANY, 10..100)) {
            assert!(m.len() < 100);
            assert!(m.len() >= 10);
        }
    }
}
