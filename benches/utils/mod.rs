#![allow(dead_code)]
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

// Trait for generating test data
pub trait TestData: Clone + Debug + Ord + Eq + Hash {
    fn generate(size: usize) -> Vec<Self>;
}

impl TestData for i64 {
    fn generate(size: usize) -> Vec<Self> {
        let mut gen = SmallRng::seed_from_u64(1);
        let mut set = BTreeSet::new();
        while set.len() < size {
            let next = gen.random::<i64>();
            set.insert(next);
        }
        set.into_iter().collect()
    }
}

impl TestData for String {
    fn generate(size: usize) -> Vec<Self> {
        let mut gen = SmallRng::seed_from_u64(1);
        let mut set = BTreeSet::new();
        while set.len() < size {
            let len = gen.random_range(5..20);
            let s: String = (0..len)
                .map(|_| gen.random_range(b'a'..=b'z') as char)
                .collect();
            set.insert(s);
        }
        set.into_iter().collect()
    }
}

// A fixed shuffle, so every run touches the keys in the same order.
pub fn reorder<T: Clone>(items: &[T]) -> Vec<T> {
    let mut order = items.to_vec();
    let mut gen = SmallRng::seed_from_u64(2);
    order.shuffle(&mut gen);
    order
}
