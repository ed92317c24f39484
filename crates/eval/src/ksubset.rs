// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Iteration over k-subsets.

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Calls the `f` closure with the indices of each k-subset of `0..n`.
///
/// Each subset is visited exactly once with indices in increasing order, the
/// subsets are generated in colexicographic order with Algorithm L from TAOCP
/// 4a. Nothing is visited when `k == 0` or `k > n`.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    // c[1..=k] holds the current subset, c[k + 1] and c[k + 2] are sentinels.
    let mut c = vec![0usize; k + 3];
    for (j, v) in c.iter_mut().enumerate().take(k + 1).skip(1) {
        *v = j - 1;
    }

    c[k + 1] = n;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(5, 0), 1);
        assert_eq!(nck(5, 5), 1);
        assert_eq!(nck(7, 5), 21);
        assert_eq!(nck(9, 5), 126);
        assert_eq!(nck(52, 5), 2_598_960);
        assert_eq!(nck(52, 7), 133_784_560);
    }

    #[test]
    fn seven_choose_five() {
        let mut subsets = HashSet::default();
        for_each_ksubset(7, 5, |s| {
            assert_eq!(s.len(), 5);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            assert!(s.iter().all(|&i| i < 7));
            subsets.insert(s.to_vec());
        });

        assert_eq!(subsets.len(), 21);
    }

    #[test]
    fn subsets_are_unique_and_complete() {
        for n in 1..=12 {
            for k in 1..=n {
                let mut count = 0;
                let mut subsets = HashSet::default();
                for_each_ksubset(n, k, |s| {
                    count += 1;
                    subsets.insert(s.to_vec());
                });

                assert_eq!(count, nck(n, k), "n={n} k={k}");
                assert_eq!(subsets.len(), count, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn empty_subsets() {
        let mut count = 0;
        for_each_ksubset(4, 5, |_| count += 1);
        for_each_ksubset(4, 0, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn single_subset() {
        let mut visited = Vec::new();
        for_each_ksubset(5, 5, |s| visited.push(s.to_vec()));
        assert_eq!(visited, vec![vec![0, 1, 2, 3, 4]]);
    }
}
