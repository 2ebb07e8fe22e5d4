use crate::{ChainedHashMap, ProbedHashMap};
use ::quickcheck::{Arbitrary, Gen};
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

impl<K, V, S> Arbitrary for ProbedHashMap<K, V, S>
where
    K: Hash + Eq + Arbitrary + Sync,
    V: Arbitrary + Sync,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        ProbedHashMap::from_iter(Vec::<(K, V)>::arbitrary(g))
    }
}

impl<K, V, S> Arbitrary for ChainedHashMap<K, V, S>
where
    K: Hash + Eq + Arbitrary + Sync,
    V: Arbitrary + Sync,
    S: BuildHasher + Default + Clone + Send + Sync + 'static,
{
    fn arbitrary(g: &mut Gen) -> Self {
        ChainedHashMap::from_iter(Vec::<(K, V)>::arbitrary(g))
    }
}
