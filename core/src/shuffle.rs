use rand::Rng;

/// Uniform in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeMap;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(7);
        let original: Vec<u32> = (0..50).collect();
        let mut shuffled = original.clone();

        shuffle(&mut shuffled, &mut rng);

        assert_ne!(shuffled, original);
        shuffled.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        let mut single = [9];

        shuffle(&mut empty, &mut rng);
        shuffle(&mut single, &mut rng);

        assert_eq!(single, [9]);
    }

    #[test]
    fn shuffle_orderings_are_roughly_uniform() {
        const TRIALS: u32 = 60_000;
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut seen: BTreeMap<[u8; 3], u32> = BTreeMap::new();

        for _ in 0..TRIALS {
            let mut items = [0, 1, 2];
            shuffle(&mut items, &mut rng);
            *seen.entry(items).or_default() += 1;
        }

        assert_eq!(seen.len(), 6);
        let expected = TRIALS / 6;
        for (ordering, count) in seen {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "{:?} came up {} times, expected about {}",
                ordering,
                count,
                expected
            );
        }
    }
}
