/// Number of ways to choose `k` items out of `n`, saturating at `u64::MAX`.
pub(crate) fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) / (i + 1);
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Calls `f` with every `k`-subset of `0..n`, as ascending indices, in
/// lexicographic order.
pub(crate) fn for_each_combination(n: usize, k: usize, mut f: impl FnMut(&[usize])) {
    if k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        f(&idx);
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_binomial() {
        for (n, k) in [(7, 5), (5, 5), (6, 0), (45, 2), (10, 3)] {
            let mut count = 0u64;
            for_each_combination(n, k, |_| count += 1);
            assert_eq!(count, binomial(n, k), "C({n},{k})");
        }
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(48, 5), 1_712_304);
        assert_eq!(binomial(3, 4), 0);
    }

    #[test]
    fn lexicographic_and_ascending() {
        let mut all = Vec::new();
        for_each_combination(4, 2, |c| all.push(c.to_vec()));
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn too_large_k_yields_nothing() {
        let mut called = false;
        for_each_combination(2, 3, |_| called = true);
        assert!(!called);
    }
}
