use std::collections::BTreeMap;

/// A counted multiset of drawn numbers.
///
/// Selections carry duplicates ("two large, two small" draws routinely
/// repeat a value), and each drawn instance may be consumed at most
/// once, so plain sets are not enough. Instances of the same value are
/// interchangeable: only the per-value count matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multiset {
    counts: BTreeMap<i64, u32>,
}

impl Multiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of instances, duplicates included.
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// How many instances of `value` are present.
    pub fn count(&self, value: i64) -> u32 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, value: i64) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Removes one instance of `value`, if any is present.
    pub fn remove_one(&mut self, value: i64) {
        if let Some(n) = self.counts.get_mut(&value) {
            *n -= 1;
            if *n == 0 {
                self.counts.remove(&value);
            }
        }
    }

    /// Whether every instance here also fits in `other`, counting
    /// multiplicity.
    pub fn is_subset_of(&self, other: &Multiset) -> bool {
        self.counts
            .iter()
            .all(|(&value, &n)| n <= other.count(value))
    }

    /// Instance-wise union: per-value counts add up.
    pub fn union(&self, other: &Multiset) -> Multiset {
        let mut counts = self.counts.clone();
        for (&value, &n) in &other.counts {
            *counts.entry(value).or_insert(0) += n;
        }
        Multiset { counts }
    }

    /// Removes `other`'s instances from this multiset, saturating at
    /// zero per value.
    pub fn difference(&self, other: &Multiset) -> Multiset {
        let mut counts = BTreeMap::new();
        for (&value, &n) in &self.counts {
            let remaining = n.saturating_sub(other.count(value));
            if remaining > 0 {
                counts.insert(value, remaining);
            }
        }
        Multiset { counts }
    }

    /// Every instance in ascending value order, duplicates repeated.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.counts
            .iter()
            .flat_map(|(&value, &n)| std::iter::repeat(value).take(n as usize))
    }

    /// Each present value once, ascending.
    pub fn distinct(&self) -> impl Iterator<Item = i64> + '_ {
        self.counts.keys().copied()
    }
}

impl FromIterator<i64> for Multiset {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Multiset::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a> FromIterator<&'a i64> for Multiset {
    fn from_iter<I: IntoIterator<Item = &'a i64>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
