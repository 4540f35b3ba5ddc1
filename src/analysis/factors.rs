use serde::Serialize;
use std::collections::BTreeMap;

/// Every factor `f` of `distance` with `2 <= f <= distance`, ascending.
/// The distance counts as a factor of itself; 0 and 1 have none.
pub fn factorize(distance: usize) -> Vec<usize> {
    if distance < 2 {
        return Vec::new();
    }
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut f = 1;
    while f * f <= distance {
        if distance % f == 0 {
            low.push(f);
            let pair = distance / f;
            if pair != f {
                high.push(pair);
            }
        }
        f += 1;
    }
    low.into_iter()
        .chain(high.into_iter().rev())
        .filter(|&f| f >= 2)
        .collect()
}

/// Multiset union of the factors of every distance, duplicates included.
pub fn factorize_distances(distances: &[usize]) -> Vec<usize> {
    distances.iter().flat_map(|&d| factorize(d)).collect()
}

/// Occurrence count per factor value, ordered by factor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactorCounts(BTreeMap<usize, usize>);

impl FactorCounts {
    /// Counts an already expanded factor multiset.
    pub fn from_factors(factors: &[usize]) -> Self {
        let mut counts = BTreeMap::new();
        for &f in factors {
            *counts.entry(f).or_default() += 1;
        }
        Self(counts)
    }

    /// Same result as `from_factors(&factorize_distances(distances))`, but each distinct
    /// distance is factorized only once and weighted by how often it occurred.
    pub fn from_distances(distances: &[usize]) -> Self {
        let mut per_distance: BTreeMap<usize, usize> = BTreeMap::new();
        for &d in distances {
            *per_distance.entry(d).or_default() += 1;
        }

        let mut counts = BTreeMap::new();
        for (d, occurrences) in per_distance {
            for f in factorize(d) {
                *counts.entry(f).or_default() += occurrences;
            }
        }
        Self(counts)
    }

    pub fn get(&self, factor: usize) -> usize {
        self.0.get(&factor).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct factor values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Size of the underlying multiset.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.0.values().copied().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&f, &c)| (f, c))
    }

    /// The `n` most frequent factors, by count then by larger factor first.
    pub fn most_common(&self, n: usize) -> Vec<(usize, usize)> {
        let mut entries: Vec<(usize, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        entries.truncate(n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorize_includes_self() {
        assert_eq!(factorize(12), vec![2, 3, 4, 6, 12]);
        assert_eq!(factorize(7), vec![7]);
        assert_eq!(factorize(16), vec![2, 4, 8, 16]);
        assert!(factorize(1).is_empty());
        assert!(factorize(0).is_empty());
    }

    #[test]
    fn test_counting_paths_agree() {
        let distances = [12, 12, 7, 30, 1, 49];
        let direct = FactorCounts::from_factors(&factorize_distances(&distances));
        assert_eq!(direct, FactorCounts::from_distances(&distances));
        assert_eq!(direct.get(2), 3);
        assert_eq!(direct.get(7), 2);
    }
}
