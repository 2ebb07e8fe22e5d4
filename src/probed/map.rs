// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An open addressing hash map.
//!
//! A mutable hash map storing entries directly in a prime-sized slot
//! array, resolving collisions by quadratic probing and recording
//! removals as tombstones.
//!
//! Operations are expected O(1): the table doubles itself whenever the
//! load factor reaches 0.5, so probe sequences stay short. Lookups will
//! need keys to implement [`Hash`][std::hash::Hash] and
//! [`Eq`][std::cmp::Eq].
//!
//! Entry order follows slot order, which is predictable for a given
//! hasher but not otherwise meaningful. Unless otherwise specified, the
//! hasher is the standard
//! [`RandomState`][std::collections::hash_map::RandomState].
//!
//! [std::cmp::Eq]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
//! [std::hash::Hash]: https://doc.rust-lang.org/std/hash/trait.Hash.html
//! [std::collections::hash_map::RandomState]: https://doc.rust-lang.org/std/collections/hash_map/struct.RandomState.html

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Error, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};
use std::mem;
use std::ops::{Index, IndexMut};

use crate::config::{DEFAULT_CAPACITY, PROBED_MAX_LOAD};
use crate::prime::{is_prime, next_prime};
use crate::util::hash_key;

/// Construct a probed hash map from a sequence of key/value pairs.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate primetable;
/// # use primetable::ProbedHashMap;
/// # fn main() {
/// assert_eq!(
///   probedmap!{
///     1 => 11,
///     2 => 22,
///     3 => 33
///   },
///   ProbedHashMap::<i32, i32, std::collections::hash_map::RandomState>::from(vec![(1, 11), (2, 22), (3, 33)])
/// );
/// # }
/// ```
#[macro_export]
macro_rules! probedmap {
    () => { $crate::probed::map::ProbedHashMap::new() };

    ( $( $key:expr => $value:expr ),* ) => {{
        let mut map = $crate::probed::map::ProbedHashMap::new();
        $({
            map.insert($key, $value);
        })*;
        map
    }};

    ( $( $key:expr => $value:expr ,)* ) => {{
        let mut map = $crate::probed::map::ProbedHashMap::new();
        $({
            map.insert($key, $value);
        })*;
        map
    }};
}

/// One slot of the backing array.
///
/// A tombstone keeps its key so that probe sequences for other keys can
/// pass over it, and so a re-insert of the same key can take the slot
/// back over.
enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Tombstone(K),
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V> Slot<K, V> {
    fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// An open addressing hash map.
///
/// A mutable hash map storing entries directly in a prime-sized slot
/// array, resolving collisions by quadratic probing and recording
/// removals as tombstones.
///
/// The capacity is always prime, and insertion doubles it whenever the
/// load factor reaches 0.5, keeping probe sequences short and
/// guaranteeing they terminate.
pub struct ProbedHashMap<K, V, S = RandomState> {
    buckets: Vec<Slot<K, V>>,
    size: usize,
    hasher: S,
}

impl<K, V> ProbedHashMap<K, V, RandomState> {
    /// Construct an empty map with the default capacity of 11.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty map sized for at least `capacity` slots.
    ///
    /// The requested capacity is rounded up to the next prime by the
    /// odd-stepping search in [`next_prime`][crate::prime::next_prime],
    /// so a capacity of 2 becomes 3.
    ///
    /// # Examples
    ///
    /// ```
    /// # use primetable::ProbedHashMap;
    /// let map = ProbedHashMap::<i32, i32>::with_capacity(30);
    /// assert_eq!(31, map.capacity());
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S> ProbedHashMap<K, V, S> {
    /// Construct an empty map using the provided hasher.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Construct an empty map sized for at least `capacity` slots,
    /// using the provided hasher.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = next_prime(capacity);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Slot::default);
        ProbedHashMap {
            buckets,
            size: 0,
            hasher,
        }
    }

    /// Test whether a map is empty.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// # use primetable::ProbedHashMap;
    /// assert!(
    ///   !probedmap!{1 => 2}.is_empty()
    /// );
    /// assert!(
    ///   ProbedHashMap::<i32, i32>::new().is_empty()
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of live entries in a map.
    ///
    /// Tombstones are not counted: they take up table space but are
    /// logically absent.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// assert_eq!(3, probedmap!{
    ///   1 => 11,
    ///   2 => 22,
    ///   3 => 33
    /// }.len());
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Get the current capacity of the backing array. Always prime.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Get the current load factor, `len / capacity`.
    ///
    /// Insertion grows the table before probing whenever this reaches
    /// 0.5.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Count the slots which are neither occupied nor tombstoned.
    ///
    /// Time: O(capacity)
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|slot| slot.is_empty()).count()
    }

    /// Get a reference to the map's [`BuildHasher`][BuildHasher].
    ///
    /// [BuildHasher]: https://doc.rust-lang.org/std/hash/trait.BuildHasher.html
    #[must_use]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Discard all entries, keeping the current capacity.
    ///
    /// Tombstones are discarded along with the live entries.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// let mut map = probedmap!{1 => 1, 2 => 2};
    /// let capacity = map.capacity();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(capacity, map.capacity());
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }

    /// Get an iterator over the live entries of a map, in slot order.
    ///
    /// The iterator walks the backing array from index 0 upwards,
    /// skipping empty and tombstoned slots. Slot order is predictable
    /// for a given hasher but not otherwise meaningful.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.buckets.iter(),
            remaining: self.size,
        }
    }

    /// Get a mutable iterator over the values of a map, in slot order.
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            slots: self.buckets.iter_mut(),
            remaining: self.size,
        }
    }

    /// Get an iterator over a map's keys, in slot order.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { it: self.iter() }
    }

    /// Get an iterator over a map's values, in slot order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { it: self.iter() }
    }

    /// Copy every live entry out into a vector of key/value pairs, in
    /// slot order.
    ///
    /// The snapshot is independent of the map: later mutation leaves it
    /// untouched, and it leaves the map untouched.
    ///
    /// Time: O(capacity)
    #[must_use]
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, S> ProbedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Walk the probe sequence for `key` and return the index of its
    /// live slot, if any.
    ///
    /// The sequence is `(hash + j²) mod capacity` for j = 0, 1, 2, …,
    /// always anchored at the original hash; the home slot is j = 0.
    /// Only an empty slot ends the walk early: tombstones are passed
    /// over whether or not they carry the searched key. The walk gives
    /// up after `capacity` steps, the full period of `j² mod capacity`.
    fn locate<BK>(&self, key: &BK) -> Option<usize>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        let capacity = self.buckets.len() as u64;
        let hash = hash_key(&self.hasher, key);
        for j in 0..capacity {
            let index = (hash.wrapping_add(j.wrapping_mul(j)) % capacity) as usize;
            match &self.buckets[index] {
                Slot::Empty => return None,
                Slot::Occupied(k, _) if k.borrow() == key => return Some(index),
                _ => {}
            }
        }
        None
    }

    /// Get the value for a key from a map.
    ///
    /// Time: expected O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// let map = probedmap!{123 => "lol"};
    /// assert_eq!(
    ///   map.get(&123),
    ///   Some(&"lol")
    /// );
    /// ```
    #[must_use]
    pub fn get<BK>(&self, key: &BK) -> Option<&V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        match self.locate(key) {
            Some(index) => match &self.buckets[index] {
                Slot::Occupied(_, value) => Some(value),
                _ => None,
            },
            None => None,
        }
    }

    /// Get the key/value pair for a key from a map.
    ///
    /// Time: expected O(1)
    #[must_use]
    pub fn get_key_value<BK>(&self, key: &BK) -> Option<(&K, &V)>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        match self.locate(key) {
            Some(index) => match &self.buckets[index] {
                Slot::Occupied(k, value) => Some((k, value)),
                _ => None,
            },
            None => None,
        }
    }

    /// Get a mutable reference to the value for a key from a map.
    ///
    /// Time: expected O(1)
    #[must_use]
    pub fn get_mut<BK>(&mut self, key: &BK) -> Option<&mut V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        match self.locate(key) {
            Some(index) => match &mut self.buckets[index] {
                Slot::Occupied(_, value) => Some(value),
                _ => None,
            },
            None => None,
        }
    }

    /// Test for the presence of a key in a map.
    ///
    /// An empty map contains no keys.
    ///
    /// Time: expected O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// let map = probedmap!{123 => "lol"};
    /// assert!(
    ///   map.contains_key(&123)
    /// );
    /// assert!(
    ///   !map.contains_key(&321)
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_key<BK>(&self, key: &BK) -> bool
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        self.size != 0 && self.locate(key).is_some()
    }

    /// Insert a key/value mapping into a map, returning the value the
    /// key previously mapped to, if any.
    ///
    /// If the load factor has reached 0.5, the table doubles its
    /// capacity before probing. A tombstoned slot carrying the same key
    /// is taken back over, which counts as a fresh insertion and
    /// returns `None`.
    ///
    /// Time: expected O(1), O(capacity) when the table grows
    ///
    /// # Examples
    ///
    /// ```
    /// # use primetable::ProbedHashMap;
    /// let mut map = ProbedHashMap::new();
    /// assert_eq!(None, map.insert(123, "123"));
    /// assert_eq!(Some("123"), map.insert(123, "456"));
    /// assert_eq!(Some(&"456"), map.get(&123));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() >= PROBED_MAX_LOAD {
            self.resize(self.buckets.len() * 2);
        }
        let capacity = self.buckets.len() as u64;
        let hash = hash_key(&self.hasher, &key);
        for j in 0..capacity {
            let index = (hash.wrapping_add(j.wrapping_mul(j)) % capacity) as usize;
            match &mut self.buckets[index] {
                Slot::Occupied(k, v) if *k == key => return Some(mem::replace(v, value)),
                Slot::Occupied(..) => {}
                Slot::Tombstone(k) if *k != key => {}
                slot => {
                    // Empty, or this key's own tombstone.
                    *slot = Slot::Occupied(key, value);
                    self.size += 1;
                    return None;
                }
            }
        }
        // The probe sequence only reaches about half the table, and
        // tombstone buildup can fill all of it even under the load cap.
        self.resize(self.buckets.len() * 2);
        self.insert(key, value)
    }

    /// Remove a key from a map, returning the value it mapped to.
    ///
    /// The slot is tombstoned rather than emptied, so probe sequences
    /// running through it stay intact. Removing an absent key does
    /// nothing.
    ///
    /// Time: expected O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// let mut map = probedmap!{123 => "123", 456 => "456"};
    /// assert_eq!(Some("123"), map.remove(&123));
    /// assert_eq!(None, map.remove(&123));
    /// assert_eq!(1, map.len());
    /// ```
    pub fn remove<BK>(&mut self, key: &BK) -> Option<V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        if self.size == 0 {
            return None;
        }
        let index = self.locate(key)?;
        match mem::replace(&mut self.buckets[index], Slot::Empty) {
            Slot::Occupied(k, value) => {
                self.buckets[index] = Slot::Tombstone(k);
                self.size -= 1;
                Some(value)
            }
            _ => unreachable!(),
        }
    }

    /// Rebuild the table at a new capacity, rehashing every live entry
    /// and discarding tombstones.
    ///
    /// A target below the current number of entries, or below 1, is
    /// silently ignored. A non-prime target is rounded up to the next
    /// prime first. Entries are re-inserted through the normal insert
    /// path, so a target that would land the load factor at or above
    /// 0.5 cascades into further doubling.
    ///
    /// # Examples
    ///
    /// ```
    /// # use primetable::ProbedHashMap;
    /// let mut map = ProbedHashMap::with_capacity(23);
    /// map.insert("key1", 10);
    /// map.resize(30);
    /// assert_eq!(31, map.capacity());
    /// assert_eq!(Some(&10), map.get("key1"));
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < self.size || new_capacity < 1 {
            return;
        }
        let new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };
        let mut buckets = Vec::with_capacity(new_capacity);
        buckets.resize_with(new_capacity, Slot::default);
        let old = mem::replace(&mut self.buckets, buckets);
        self.size = 0;
        for slot in old {
            if let Slot::Occupied(key, value) = slot {
                self.insert(key, value);
            }
        }
    }
}

// Core traits

impl<K, V, S> Clone for ProbedHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Clone a map.
    ///
    /// Time: O(capacity)
    fn clone(&self) -> Self {
        ProbedHashMap {
            buckets: self
                .buckets
                .iter()
                .map(|slot| match slot {
                    Slot::Empty => Slot::Empty,
                    Slot::Occupied(k, v) => Slot::Occupied(k.clone(), v.clone()),
                    Slot::Tombstone(k) => Slot::Tombstone(k.clone()),
                })
                .collect(),
            size: self.size,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, S1, S2> PartialEq<ProbedHashMap<K, V, S2>> for ProbedHashMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    /// Two maps are equal when they hold the same entries, regardless
    /// of capacity or hasher.
    fn eq(&self, other: &ProbedHashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for ProbedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Default for ProbedHashMap<K, V, S>
where
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for ProbedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<BK, K, V, S> Index<&BK> for ProbedHashMap<K, V, S>
where
    BK: Hash + Eq + ?Sized,
    K: Hash + Eq + Borrow<BK>,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &BK) -> &Self::Output {
        match self.get(key) {
            None => panic!("ProbedHashMap::index: invalid key"),
            Some(value) => value,
        }
    }
}

impl<BK, K, V, S> IndexMut<&BK> for ProbedHashMap<K, V, S>
where
    BK: Hash + Eq + ?Sized,
    K: Hash + Eq + Borrow<BK>,
    S: BuildHasher,
{
    fn index_mut(&mut self, key: &BK) -> &mut Self::Output {
        match self.get_mut(key) {
            None => panic!("ProbedHashMap::index_mut: invalid key"),
            Some(value) => value,
        }
    }
}

impl<K, V, S> Debug for ProbedHashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut d = f.debug_map();
        for (k, v) in self.iter() {
            d.entry(k, v);
        }
        d.finish()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ProbedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T>(i: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::default();
        map.extend(i);
        map
    }
}

impl<K, V, S> From<Vec<(K, V)>> for ProbedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::from_iter(pairs)
    }
}

// Iterators

/// An iterator over the entries of a map.
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

// We impl Clone instead of deriving it, because we want Clone even if K
// and V aren't.
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in &mut self.slots {
            if let Slot::Occupied(key, value) = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// A mutable iterator over the entries of a map.
pub struct IterMut<'a, K, V> {
    slots: std::slice::IterMut<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in &mut self.slots {
            if let Slot::Occupied(key, value) = slot {
                self.remaining -= 1;
                return Some((&*key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// A consuming iterator over the entries of a map.
pub struct IntoIter<K, V> {
    slots: std::vec::IntoIter<Slot<K, V>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in &mut self.slots {
            if let Slot::Occupied(key, value) = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a map.
pub struct Keys<'a, K, V> {
    it: Iter<'a, K, V>,
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys {
            it: self.it.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// An iterator over the values of a map.
pub struct Values<'a, K, V> {
    it: Iter<'a, K, V>,
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self {
        Values {
            it: self.it.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ProbedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ProbedHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for ProbedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.size,
            slots: self.buckets.into_iter(),
        }
    }
}

// Tests
