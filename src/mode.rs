// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mode finding.
//!
//! A small statistics helper layered on [`ChainedHashMap`]: count how
//! often each value occurs in a sequence, then report the values tied
//! for the highest count.

use std::hash::Hash;

use crate::chained::map::ChainedHashMap;

/// Find the mode of a sequence: the values occurring most often,
/// together with how often they occur.
///
/// Every value tied for the highest count is included; their order is
/// unspecified. An empty sequence has no mode, so the result is
/// `None`.
///
/// Time: expected O(n)
///
/// # Examples
///
/// ```
/// # use primetable::find_mode;
/// let fruit = vec!["apple", "apple", "grape", "melon", "peach"];
/// let (modes, frequency) = find_mode(fruit).unwrap();
/// assert_eq!(vec!["apple"], modes);
/// assert_eq!(2, frequency);
/// ```
#[must_use]
pub fn find_mode<T, I>(values: I) -> Option<(Vec<T>, usize)>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: ChainedHashMap<T, usize> = ChainedHashMap::new();
    for value in values {
        match counts.get_mut(&value) {
            Some(count) => *count += 1,
            None => {
                counts.insert(value, 1);
            }
        }
    }
    let highest = counts.values().copied().max()?;
    let modes = counts
        .iter()
        .filter(|(_, count)| **count == highest)
        .map(|(value, _)| value.clone())
        .collect();
    Some((modes, highest))
}

// Tests

#[cfg(test)]
mod test {
    use super::*;

    fn sorted(mut modes: Vec<&str>) -> Vec<&str> {
        modes.sort_unstable();
        modes
    }

    #[test]
    fn single_mode() {
        let input = vec!["apple", "apple", "grape", "melon", "peach"];
        let (modes, frequency) = find_mode(input).unwrap();
        assert_eq!(vec!["apple"], modes);
        assert_eq!(2, frequency);
    }

    #[test]
    fn tied_modes_are_all_reported() {
        let input = vec![
            "Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu", "Ubuntu", "Ubuntu",
        ];
        let (modes, frequency) = find_mode(input).unwrap();
        assert_eq!(vec!["Mint", "Ubuntu"], sorted(modes));
        assert_eq!(3, frequency);
    }

    #[test]
    fn everything_unique_ties_at_one() {
        let input = vec!["one", "two", "three", "four", "five"];
        let (modes, frequency) = find_mode(input.clone()).unwrap();
        assert_eq!(5, modes.len());
        assert_eq!(1, frequency);
        for value in input {
            assert!(modes.contains(&value));
        }
    }

    #[test]
    fn repeated_numbers() {
        let input = vec![
            "2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2",
        ];
        let (modes, frequency) = find_mode(input).unwrap();
        assert_eq!(vec!["2", "3", "4"], sorted(modes));
        assert_eq!(3, frequency);
    }

    #[test]
    fn empty_input_has_no_mode() {
        assert_eq!(None, find_mode(Vec::<String>::new()));
    }

    #[test]
    fn works_over_owned_values() {
        let input: Vec<u64> = vec![9, 9, 9, 1, 2, 3];
        let (modes, frequency) = find_mode(input).unwrap();
        assert_eq!(vec![9], modes);
        assert_eq!(3, frequency);
    }
}
