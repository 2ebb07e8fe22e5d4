// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A separate chaining hash map.
//!
//! A mutable hash map keeping one bucket per slot of a prime-sized
//! array, with every entry hashing to a slot stored in that slot's
//! bucket. Order within a bucket carries no meaning.
//!
//! Operations are expected O(1): the table doubles itself whenever the
//! load factor reaches 1.0, keeping buckets shallow. Lookups will need
//! keys to implement [`Hash`][std::hash::Hash] and
//! [`Eq`][std::cmp::Eq].
//!
//! Unless otherwise specified, the hasher is the standard
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

use crate::config::{CHAINED_MAX_LOAD, DEFAULT_CAPACITY};
use crate::prime::{is_prime, next_prime};
use crate::util::hash_key;

/// Construct a chained hash map from a sequence of key/value pairs.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate primetable;
/// # use primetable::ChainedHashMap;
/// # fn main() {
/// assert_eq!(
///   chainedmap!{
///     1 => 11,
///     2 => 22,
///     3 => 33
///   },
///   ChainedHashMap::<i32, i32, std::collections::hash_map::RandomState>::from(vec![(1, 11), (2, 22), (3, 33)])
/// );
/// # }
/// ```
#[macro_export]
macro_rules! chainedmap {
    () => { $crate::chained::map::ChainedHashMap::new() };

    ( $( $key:expr => $value:expr ),* ) => {{
        let mut map = $crate::chained::map::ChainedHashMap::new();
        $({
            map.insert($key, $value);
        })*;
        map
    }};

    ( $( $key:expr => $value:expr ,)* ) => {{
        let mut map = $crate::chained::map::ChainedHashMap::new();
        $({
            map.insert($key, $value);
        })*;
        map
    }};
}

// Chain order is not semantic, so a plain vector does everything a
// linked chain would.
type Bucket<K, V> = Vec<(K, V)>;

/// A separate chaining hash map.
///
/// A mutable hash map keeping one bucket per slot of a prime-sized
/// array, with every entry hashing to a slot stored in that slot's
/// bucket.
///
/// The capacity is always prime, and insertion doubles it whenever the
/// load factor reaches 1.0. Shrinking below the point of overload is
/// refused by doubling back out, never by dropping entries.
pub struct ChainedHashMap<K, V, S = RandomState> {
    buckets: Vec<Bucket<K, V>>,
    size: usize,
    hasher: S,
}

impl<K, V> ChainedHashMap<K, V, RandomState> {
    /// Construct an empty map with the default capacity of 11.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty map sized for at least `capacity` buckets.
    ///
    /// The requested capacity is rounded up to the next prime by the
    /// odd-stepping search in [`next_prime`][crate::prime::next_prime],
    /// so a capacity of 2 becomes 3.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Construct an empty map using the provided hasher.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Construct an empty map sized for at least `capacity` buckets,
    /// using the provided hasher.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = next_prime(capacity);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);
        ChainedHashMap {
            buckets,
            size: 0,
            hasher,
        }
    }

    /// Test whether a map is empty.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of entries in a map.
    ///
    /// Time: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// assert_eq!(3, chainedmap!{
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

    /// Get the current number of buckets. Always prime.
    ///
    /// Time: O(1)
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Get the current load factor, `len / capacity`.
    ///
    /// Unlike the probed table, entries pile into buckets rather than
    /// competing for slots, so the load may legitimately sit anywhere
    /// up to 1.0. Insertion grows the table before adding whenever it
    /// reaches 1.0.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Count the buckets holding no entries.
    ///
    /// Time: O(capacity)
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Get a reference to the map's [`BuildHasher`][BuildHasher].
    ///
    /// [BuildHasher]: https://doc.rust-lang.org/std/hash/trait.BuildHasher.html
    #[must_use]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Discard all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Get an iterator over the entries of a map, bucket by bucket.
    ///
    /// Bucket order is predictable for a given hasher but not
    /// otherwise meaningful.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            outer: self.buckets.iter(),
            inner: [].iter(),
            remaining: self.size,
        }
    }

    /// Get a mutable iterator over the values of a map, bucket by
    /// bucket.
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            outer: self.buckets.iter_mut(),
            inner: [].iter_mut(),
            remaining: self.size,
        }
    }

    /// Get an iterator over a map's keys.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { it: self.iter() }
    }

    /// Get an iterator over a map's values.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { it: self.iter() }
    }

    /// Copy every entry out into a vector of key/value pairs, bucket
    /// by bucket.
    ///
    /// The snapshot is independent of the map: later mutation leaves
    /// it untouched, and it leaves the map untouched.
    ///
    /// Time: O(capacity + len)
    #[must_use]
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn bucket_index<BK>(&self, key: &BK) -> usize
    where
        BK: Hash + ?Sized,
    {
        (hash_key(&self.hasher, key) % self.buckets.len() as u64) as usize
    }

    /// Get the value for a key from a map.
    ///
    /// Time: expected O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// let map = chainedmap!{123 => "lol"};
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
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, value)| value)
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
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(k, value)| (k, value))
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
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, value)| value)
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
    /// let map = chainedmap!{123 => "lol"};
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
        self.size != 0 && self.get(key).is_some()
    }

    /// Insert a key/value mapping into a map, returning the value the
    /// key previously mapped to, if any.
    ///
    /// If the load factor has reached 1.0, the table doubles its
    /// capacity before adding. An existing entry for the key is
    /// overwritten in place, wherever it sits in its bucket.
    ///
    /// Time: expected O(1), O(capacity + len) when the table grows
    ///
    /// # Examples
    ///
    /// ```
    /// # use primetable::ChainedHashMap;
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(None, map.insert(123, "123"));
    /// assert_eq!(Some("123"), map.insert(123, "456"));
    /// assert_eq!(Some(&"456"), map.get(&123));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() >= CHAINED_MAX_LOAD {
            self.resize(self.buckets.len() * 2);
        }
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        for (k, v) in bucket.iter_mut() {
            if *k == key {
                return Some(mem::replace(v, value));
            }
        }
        bucket.push((key, value));
        self.size += 1;
        None
    }

    /// Remove a key from a map, returning the value it mapped to.
    ///
    /// Removing an absent key does nothing.
    ///
    /// Time: expected O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate primetable;
    /// let mut map = chainedmap!{123 => "123", 456 => "456"};
    /// assert_eq!(Some("123"), map.remove(&123));
    /// assert_eq!(None, map.remove(&123));
    /// assert_eq!(1, map.len());
    /// ```
    pub fn remove<BK>(&mut self, key: &BK) -> Option<V>
    where
        BK: Hash + Eq + ?Sized,
        K: Borrow<BK>,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        // Chain order carries no meaning, so the cheap unlink is fine.
        let (_, value) = bucket.swap_remove(position);
        self.size -= 1;
        Some(value)
    }

    /// Rebuild the table at a new capacity, rehashing every entry.
    ///
    /// A target below 1 is silently ignored. A non-prime target is
    /// rounded up to the next prime; then, while the prospective load
    /// factor would exceed 1.0, the target doubles and re-rounds, so
    /// shrinking can never overload the table. The rebuild drains the
    /// old buckets and recounts the entries from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// # use primetable::ChainedHashMap;
    /// let mut map = ChainedHashMap::with_capacity(23);
    /// map.insert("key1", 10);
    /// map.resize(30);
    /// assert_eq!(31, map.capacity());
    /// assert_eq!(Some(&10), map.get("key1"));
    /// ```
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            return;
        }
        let mut new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };
        while self.size as f64 / new_capacity as f64 > CHAINED_MAX_LOAD {
            new_capacity = next_prime(new_capacity * 2);
        }
        let mut buckets = Vec::with_capacity(new_capacity);
        buckets.resize_with(new_capacity, Bucket::new);
        let old = mem::replace(&mut self.buckets, buckets);
        self.size = 0;
        for bucket in old {
            for (key, value) in bucket {
                let index = self.bucket_index(&key);
                self.buckets[index].push((key, value));
                self.size += 1;
            }
        }
    }
}

// Core traits

impl<K, V, S> Clone for ChainedHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Clone a map.
    ///
    /// Time: O(capacity + len)
    fn clone(&self) -> Self {
        ChainedHashMap {
            buckets: self.buckets.clone(),
            size: self.size,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, S1, S2> PartialEq<ChainedHashMap<K, V, S2>> for ChainedHashMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    /// Two maps are equal when they hold the same entries, regardless
    /// of capacity or hasher.
    fn eq(&self, other: &ChainedHashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Default for ChainedHashMap<K, V, S>
where
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
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

impl<BK, K, V, S> Index<&BK> for ChainedHashMap<K, V, S>
where
    BK: Hash + Eq + ?Sized,
    K: Hash + Eq + Borrow<BK>,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &BK) -> &Self::Output {
        match self.get(key) {
            None => panic!("ChainedHashMap::index: invalid key"),
            Some(value) => value,
        }
    }
}

impl<BK, K, V, S> IndexMut<&BK> for ChainedHashMap<K, V, S>
where
    BK: Hash + Eq + ?Sized,
    K: Hash + Eq + Borrow<BK>,
    S: BuildHasher,
{
    fn index_mut(&mut self, key: &BK) -> &mut Self::Output {
        match self.get_mut(key) {
            None => panic!("ChainedHashMap::index_mut: invalid key"),
            Some(value) => value,
        }
    }
}

impl<K, V, S> Debug for ChainedHashMap<K, V, S>
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

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
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

impl<K, V, S> From<Vec<(K, V)>> for ChainedHashMap<K, V, S>
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
    outer: std::slice::Iter<'a, Bucket<K, V>>,
    inner: std::slice::Iter<'a, (K, V)>,
    remaining: usize,
}

// We impl Clone instead of deriving it, because we want Clone even if K
// and V aren't.
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.inner.next() {
                self.remaining -= 1;
                return Some((key, value));
            }
            match self.outer.next() {
                Some(bucket) => self.inner = bucket.iter(),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// A mutable iterator over the entries of a map.
pub struct IterMut<'a, K, V> {
    outer: std::slice::IterMut<'a, Bucket<K, V>>,
    inner: std::slice::IterMut<'a, (K, V)>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.inner.next() {
                self.remaining -= 1;
                return Some((&pair.0, &mut pair.1));
            }
            match self.outer.next() {
                Some(bucket) => self.inner = bucket.iter_mut(),
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// A consuming iterator over the entries of a map.
pub struct IntoIter<K, V> {
    outer: std::vec::IntoIter<Bucket<K, V>>,
    inner: std::vec::IntoIter<(K, V)>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.inner.next() {
                self.remaining -= 1;
                return Some(pair);
            }
            match self.outer.next() {
                Some(bucket) => self.inner = bucket.into_iter(),
                None => return None,
            }
        }
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

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for ChainedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.size,
            outer: self.buckets.into_iter(),
            inner: Vec::new().into_iter(),
        }
    }
}

// Tests

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::ClusterState;
    use pretty_assertions::assert_eq;
    #[rustfmt::skip]
    use ::proptest::{collection, num::{i16, u8}, proptest};
    use std::collections::HashMap as StdHashMap;

    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(ChainedHashMap<i32, i32>: Send, Sync);
    assert_not_impl_any!(ChainedHashMap<i32, *const i32>: Send, Sync);
    assert_not_impl_any!(ChainedHashMap<*const i32, i32>: Send, Sync);
    assert_covariant!(ChainedHashMap<T, i32> in T);
    assert_covariant!(ChainedHashMap<i32, T> in T);

    #[test]
    fn insert_lookup_update() {
        let mut map = ChainedHashMap::new();
        assert_eq!(None, map.insert("a", 1));
        assert_eq!(None, map.insert("b", 2));
        assert_eq!(2, map.len());
        assert_eq!(Some(&1), map.get("a"));
        assert_eq!(Some(&2), map.get("b"));
        assert_eq!(None, map.get("c"));

        assert_eq!(Some(1), map.insert("a", 10));
        assert_eq!(2, map.len());
        assert_eq!(Some(&10), map.get("a"));
    }

    #[test]
    fn capacity_is_prime_from_the_start() {
        assert_eq!(11, ChainedHashMap::<i32, i32>::new().capacity());
        assert_eq!(53, ChainedHashMap::<i32, i32>::with_capacity(53).capacity());
        assert_eq!(31, ChainedHashMap::<i32, i32>::with_capacity(30).capacity());
        assert_eq!(3, ChainedHashMap::<i32, i32>::with_capacity(2).capacity());
    }

    #[test]
    fn load_may_reach_but_never_pass_one() {
        let mut map = ChainedHashMap::<String, usize>::with_capacity(53);
        for n in 0..150 {
            map.insert(format!("key{}", n), n * 100);
            assert!(map.load_factor() <= 1.0, "load {}", map.load_factor());
            assert!(is_prime(map.capacity()));
        }
        // Growth fires at 53 and 107 entries; the trajectory depends
        // only on the entry count, not on the hasher.
        assert_eq!(150, map.len());
        assert_eq!(223, map.capacity());
    }

    #[test]
    fn colliding_keys_share_a_bucket() {
        let mut map: ChainedHashMap<u32, u32, ClusterState> =
            ChainedHashMap::with_hasher(ClusterState::default());
        for n in 0..8 {
            map.insert(n, n * 10);
        }
        // Four hash values over eleven buckets leaves at least seven
        // buckets empty no matter how the entries pile up.
        assert_eq!(8, map.len());
        assert!(map.empty_buckets() >= 7);
        for n in 0..8 {
            assert_eq!(Some(&(n * 10)), map.get(&n));
        }
    }

    #[test]
    fn remove_unlinks_from_the_chain() {
        let mut map: ChainedHashMap<u32, u32, ClusterState> =
            ChainedHashMap::with_hasher(ClusterState::default());
        for n in 0..8 {
            map.insert(n, n);
        }
        // Remove from the middle of a shared chain; neighbours stay.
        assert_eq!(Some(4), map.remove(&4));
        assert_eq!(None, map.remove(&4));
        assert_eq!(7, map.len());
        assert_eq!(Some(&0), map.get(&0));
        assert_eq!(Some(&7), map.get(&7));
        assert!(!map.contains_key(&4));
    }

    #[test]
    fn remove_is_a_noop_for_absent_keys() {
        let mut map: ChainedHashMap<&str, i32> = ChainedHashMap::new();
        assert_eq!(None, map.remove("nothing"));
        map.insert("a", 1);
        assert_eq!(None, map.remove("b"));
        assert_eq!(1, map.len());
    }

    #[test]
    fn resize_rounds_to_prime_and_keeps_entries() {
        let mut map = ChainedHashMap::with_capacity(23);
        map.insert("key1", 10);
        assert_eq!(1, map.len());
        assert_eq!(23, map.capacity());
        map.resize(30);
        assert_eq!(31, map.capacity());
        assert_eq!(1, map.len());
        assert_eq!(Some(&10), map.get("key1"));
    }

    #[test]
    fn shrinking_doubles_out_of_overload() {
        // Twelve entries cannot live in eleven buckets; the target
        // doubles from 11 to 23 before the rebuild.
        let mut map: ChainedHashMap<String, String> = (0..12)
            .map(|n| (format!("key{}", n), format!("key{}", n)))
            .collect();
        map.resize(9);
        assert_eq!(12, map.len());
        assert_eq!(23, map.capacity());

        // Five entries in five buckets is exactly load 1.0, which the
        // guard permits.
        let mut map: ChainedHashMap<String, String> = (0..5)
            .map(|n| (format!("key{}", n), format!("key{}", n)))
            .collect();
        map.resize(4);
        assert_eq!(5, map.len());
        assert_eq!(5, map.capacity());
        for n in 0..5 {
            assert!(map.contains_key(format!("key{}", n).as_str()));
        }
    }

    #[test]
    fn resize_refuses_nonpositive_targets() {
        let mut map: ChainedHashMap<i32, i32> = (0..10).map(|n| (n, n)).collect();
        let capacity = map.capacity();
        map.resize(0);
        assert_eq!(capacity, map.capacity());
        assert_eq!(10, map.len());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut map: ChainedHashMap<i32, i32> = (0..20).map(|n| (n, n)).collect();
        let capacity = map.capacity();
        map.clear();
        assert_eq!(0, map.len());
        assert_eq!(capacity, map.capacity());
        assert_eq!(capacity, map.empty_buckets());
        for n in 0..20 {
            assert!(!map.contains_key(&n));
        }
    }

    #[test]
    fn snapshot_matches_iteration() {
        let mut map: ChainedHashMap<i32, i32> = (0..50).map(|n| (n, n * 2)).collect();
        map.remove(&7);
        map.remove(&31);
        let snapshot = map.to_vec();
        assert_eq!(48, snapshot.len());
        let from_iter: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(from_iter, snapshot);
        for (k, v) in snapshot {
            assert_eq!(Some(&v), map.get(&k));
        }
    }

    #[test]
    fn index_operator() {
        let mut map: ChainedHashMap<usize, usize> = chainedmap![1 => 2, 3 => 4, 5 => 6];
        assert_eq!(4, map[&3]);
        map[&3] = 8;
        let target: ChainedHashMap<usize, usize> = chainedmap![1 => 2, 3 => 8, 5 => 6];
        assert_eq!(target, map);
    }

    #[test]
    fn proper_formatting() {
        let map: ChainedHashMap<usize, usize> = chainedmap![1 => 2];
        assert_eq!("{1: 2}", format!("{:?}", map));

        assert_eq!("{}", format!("{:?}", ChainedHashMap::<(), ()>::new()));
    }

    #[test]
    fn macro_allows_trailing_comma() {
        let map1: ChainedHashMap<&str, i32> = chainedmap! {"x" => 1, "y" => 2};
        let map2: ChainedHashMap<&str, i32> = chainedmap! {
            "x" => 1,
            "y" => 2,
        };
        assert_eq!(map1, map2);
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut small: ChainedHashMap<i32, i32> = (0..5).map(|n| (n, n)).collect();
        let mut large = small.clone();
        large.resize(101);
        assert_ne!(small.capacity(), large.capacity());
        assert_eq!(small, large);
        small.insert(99, 99);
        assert_ne!(small, large);
    }

    #[test]
    fn match_string_keys_with_string_slices() {
        let mut map: ChainedHashMap<String, i32> = ChainedHashMap::new();
        map.insert("foo".to_string(), 1);
        map.insert("bar".to_string(), 2);
        assert_eq!(Some(&1), map.get("foo"));
        assert_eq!(Some(2), map.remove("bar"));
        map["foo"] = 8;
        assert_eq!(8, map["foo"]);
    }

    #[test]
    fn into_iter_yields_every_entry() {
        let map: ChainedHashMap<i32, i32> = (0..30).map(|n| (n, n)).collect();
        let mut pairs: Vec<(i32, i32)> = map.into_iter().collect();
        pairs.sort_unstable();
        assert_eq!((0..30).map(|n| (n, n)).collect::<Vec<_>>(), pairs);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut map: ChainedHashMap<i32, i32> = (0..10).map(|n| (n, n)).collect();
        for (_, value) in map.iter_mut() {
            *value *= 3;
        }
        for n in 0..10 {
            assert_eq!(Some(&(n * 3)), map.get(&n));
        }
    }

    proptest! {
        #[test]
        fn insert_matches_std(ref pairs in collection::vec((u8::ANY, i16::ANY), 0..200)) {
            let mut model: StdHashMap<u8, i16> = StdHashMap::new();
            let mut map: ChainedHashMap<u8, i16, ClusterState> = ChainedHashMap::with_hasher(ClusterState::default());
            for (k, v) in pairs {
                assert_eq!(model.insert(*k, *v), map.insert(*k, *v));
                assert_eq!(model.len(), map.len());
            }
            for (k, v) in &model {
                assert_eq!(Some(v), map.get(k));
            }
        }

        #[test]
        fn churn_matches_std(ref ops in collection::vec((u8::ANY, i16::ANY, ::proptest::bool::ANY), 0..300)) {
            let mut model: StdHashMap<u8, i16> = StdHashMap::new();
            let mut map: ChainedHashMap<u8, i16, ClusterState> = ChainedHashMap::with_hasher(ClusterState::default());
            for (k, v, removal) in ops {
                if *removal {
                    assert_eq!(model.remove(k), map.remove(k));
                } else {
                    assert_eq!(model.insert(*k, *v), map.insert(*k, *v));
                }
                assert_eq!(model.len(), map.len());
            }
            for (k, v) in &model {
                assert_eq!(Some(v), map.get(k));
                assert!(map.contains_key(k));
            }
        }

        #[test]
        fn resize_never_loses_entries(
            ref pairs in collection::vec((i16::ANY, i16::ANY), 0..100),
            target in 0usize..500
        ) {
            let mut map: ChainedHashMap<i16, i16> = ChainedHashMap::from_iter(pairs.iter().cloned());
            let before = map.len();
            map.resize(target);
            assert_eq!(before, map.len());
            assert!(is_prime(map.capacity()));
            assert!(map.load_factor() <= 1.0);
            for (k, _) in pairs {
                let expected = pairs.iter().rev().find(|(pk, _)| pk == k).map(|(_, pv)| pv);
                assert_eq!(expected, map.get(k));
            }
        }

        #[test]
        fn exact_size_iterator(ref pairs in collection::vec((i16::ANY, i16::ANY), 0..100)) {
            let map: ChainedHashMap<i16, i16> = ChainedHashMap::from_iter(pairs.iter().cloned());
            let mut should_be = map.len();
            let mut it = map.iter();
            loop {
                assert_eq!(should_be, it.len());
                match it.next() {
                    None => break,
                    Some(_) => should_be -= 1,
                }
            }
            assert_eq!(0, it.len());
        }
    }
}
