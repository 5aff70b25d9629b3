use rand::Rng;

/// Fisher-Yates: devuelve una permutación nueva sin tocar `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = vec![1, 2, 2, 3, 5, 8, 13, 21];
        for _ in 0..50 {
            let mut out = shuffled(&input, &mut rng);
            assert_eq!(out.len(), input.len());
            out.sort_unstable();
            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn short_inputs_are_returned_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = vec![];
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(42);
        let input = vec!['a', 'b', 'c', 'd', 'e'];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, vec!['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = [0usize, 1, 2, 3];
        let mut seen_first = [false; 4];
        for _ in 0..200 {
            seen_first[shuffled(&input, &mut rng)[0]] = true;
        }
        assert!(seen_first.iter().all(|s| *s));
    }
}
