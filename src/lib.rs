// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Prime-capacity hash tables.
//!
//! This library provides two mutable hash maps built over a fixed-size
//! backing array whose length is always a prime number, one for each of
//! the classic collision resolution strategies:
//!
//! * [`ProbedHashMap`][probed::map::ProbedHashMap] — open addressing:
//!   entries live directly in the slot array, collisions walk the
//!   quadratic probe sequence `(hash + j²) mod capacity`, and removals
//!   leave tombstones behind so later probes stay on track. The table
//!   doubles whenever the load factor reaches 0.5.
//! * [`ChainedHashMap`][chained::map::ChainedHashMap] — separate
//!   chaining: every slot holds a bucket of entries, and collisions
//!   simply share a bucket. The table doubles whenever the load factor
//!   reaches 1.0.
//!
//! The two maps share a contract but not code: insert/update, lookup,
//! existence check, removal, bulk export, explicit resizing, and
//! single-pass forward iteration, all expected O(1) per entry thanks to
//! load-factor-triggered growth. Absence is always an [`Option`], never
//! an error, and an invalid resize target is silently ignored rather
//! than reported.
//!
//! Capacity sizing lives in the [`prime`] module, and a small
//! statistics helper, [`find_mode`][mode::find_mode], is layered on the
//! chained map.
//!
//! Keys need [`Hash`][std::hash::Hash] and [`Eq`][std::cmp::Eq]; the
//! hasher is pluggable through
//! [`BuildHasher`][std::hash::BuildHasher] and defaults to the standard
//! [`RandomState`][std::collections::hash_map::RandomState]. Hash
//! quality affects probe lengths and chain depths, never correctness.
//!
//! ## Feature flags
//!
//! * `serde`: [serde][serde] serialization for both map types.
//! * `proptest`: [proptest][proptest] strategies generating either map
//!   type.
//! * `quickcheck`: [quickcheck][quickcheck] `Arbitrary` instances.
//! * `arbitrary`: [arbitrary][arbitrary] `Arbitrary` instances.
//!
//! [serde]: https://crates.io/crates/serde
//! [proptest]: https://crates.io/crates/proptest
//! [quickcheck]: https://crates.io/crates/quickcheck
//! [arbitrary]: https://crates.io/crates/arbitrary
//! [std::cmp::Eq]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
//! [std::hash::Hash]: https://doc.rust-lang.org/std/hash/trait.Hash.html
//! [std::hash::BuildHasher]: https://doc.rust-lang.org/std/hash/trait.BuildHasher.html
//! [std::collections::hash_map::RandomState]: https://doc.rust-lang.org/std/collections/hash_map/struct.RandomState.html

#![forbid(rust_2018_idioms)]
#![deny(unsafe_code, nonstandard_style)]
#![warn(unreachable_pub, missing_docs)]

#[macro_use]
mod util;

mod config;

pub mod chained;
pub mod mode;
pub mod prime;
pub mod probed;

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest;
#[cfg(feature = "quickcheck")]
mod quickcheck;
#[cfg(feature = "serde")]
mod ser;

#[cfg(test)]
mod test;

pub use crate::chained::map::ChainedHashMap;
pub use crate::mode::find_mode;
pub use crate::probed::map::ProbedHashMap;
