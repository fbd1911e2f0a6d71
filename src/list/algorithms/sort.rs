use crate::list::{List, END, START};

/// Stable bottom-up merge sort over the linked chain.
///
/// For `run = 1, 2, 4, ...` the chain is partitioned into consecutive pairs
/// of adjacent runs of up to `run` nodes each, and every pair is merged in
/// place by relinking. Each pass halves the number of runs; once `run`
/// reaches the list length a single run covers the whole chain and the list
/// is sorted. No auxiliary array is allocated: the merge only rewires
/// `prev`/`next` links, so values stay in their slots.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut keep_left_first: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = list.len();
    let mut run = 1;
    while run < len {
        let mut left = list.next_of(START);
        while left != END {
            let right = skip(list, left, run);
            if right == END {
                // A lone left run with no partner is already sorted.
                break;
            }
            left = merge_adjacent_runs(list, left, right, run, &mut keep_left_first);
        }
        run *= 2;
    }
}

/// Walk up to `steps` nodes forward, stopping early at the `end` sentinel.
fn skip<T>(list: &List<T>, mut index: usize, steps: usize) -> usize {
    let mut remaining = steps;
    while remaining > 0 && index != END {
        index = list.next_of(index);
        remaining -= 1;
    }
    index
}

/// Merge the run of `run` nodes headed by `left` with the run of up to
/// `run` nodes headed by `right`, which immediately follows it on the
/// chain. Returns the head of the next run pair.
///
/// While both runs have nodes remaining: if the predicate keeps the left
/// element first (which includes the equal case), the left node stays in
/// place and the left position advances; otherwise the right node is
/// spliced out of its run and relinked immediately before the current left
/// node. Ties therefore resolve in favor of the left run, which is what
/// preserves the original relative order of equal keys.
fn merge_adjacent_runs<T, F>(
    list: &mut List<T>,
    mut left: usize,
    mut right: usize,
    run: usize,
    keep_left_first: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut left_len = run;
    let mut right_len = run;
    while left_len > 0 && right_len > 0 && right != END {
        if keep_left_first(list.value_of(left), list.value_of(right)) {
            left = list.next_of(left);
            left_len -= 1;
        } else {
            let after = list.next_of(right);
            list.move_node(right, left);
            right = after;
            right_len -= 1;
        }
    }
    // Whatever remains of the right run is already in place and not smaller
    // than anything merged so far; the next pair starts just past it.
    while right_len > 0 && right != END {
        right = list.next_of(right);
        right_len -= 1;
    }
    right
}

#[cfg(test)]
mod tests {
    use crate::List;
    use rand::seq::SliceRandom;
    use rand::Rng;
    use std::iter::FromIterator;

    fn sorted<I: IntoIterator<Item = i32>>(input: I) -> Vec<i32> {
        let mut list = List::from_iter(input);
        list.sort();
        list.check_invariants();
        Vec::from_iter(list)
    }

    #[test]
    fn sort_basics() {
        assert_eq!(sorted(None), vec![]);
        assert_eq!(sorted(Some(1)), vec![1]);
        assert_eq!(sorted(vec![2, 1]), vec![1, 2]);
        assert_eq!(sorted(vec![5, 3, 4]), vec![3, 4, 5]);
        assert_eq!(sorted(vec![1, 2, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(sorted(vec![4, 3, 2, 1]), vec![1, 2, 3, 4]);
        assert_eq!(sorted(vec![2, 2, 2, 2]), vec![2, 2, 2, 2]);
    }

    #[test]
    fn sort_all_permutations_up_to_seven() {
        fn heap_permutations(k: usize, arr: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
            if k <= 1 {
                out.push(arr.clone());
                return;
            }
            for i in 0..k {
                heap_permutations(k - 1, arr, out);
                if k % 2 == 0 {
                    arr.swap(i, k - 1);
                } else {
                    arr.swap(0, k - 1);
                }
            }
        }

        for n in 0..=7 {
            let mut arr = Vec::from_iter(0..n);
            let mut permutations = Vec::new();
            heap_permutations(arr.len(), &mut arr, &mut permutations);
            for permutation in permutations {
                assert_eq!(sorted(permutation.clone()), Vec::from_iter(0..n));
            }
        }
    }

    #[test]
    fn sort_is_idempotent() {
        let mut list = List::from_iter([3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
        list.sort();
        let once = Vec::from_iter(list.iter().copied());
        list.sort();
        assert_eq!(Vec::from_iter(list), once);
    }

    #[test]
    fn sort_is_stable() {
        // Equal keys keep their insertion order: the two 3-keyed elements
        // stay "a" before "b".
        let mut list = List::from_iter([(5, "x"), (3, "a"), (3, "b"), (9, "y")]);
        list.sort_by(|l, r| l.0 <= r.0);
        assert_eq!(
            Vec::from_iter(list),
            vec![(3, "a"), (3, "b"), (5, "x"), (9, "y")],
        );
    }

    #[test]
    fn sort_is_stable_on_long_runs_of_equal_keys() {
        let mut rng = rand::thread_rng();
        // Few distinct keys force lots of ties; the sequence number makes
        // each element distinguishable.
        let values: Vec<(i32, usize)> = (0..200)
            .map(|seq| (rng.gen_range(0..5), seq))
            .collect();

        let mut expected = values.clone();
        expected.sort_by_key(|&(key, _)| key);

        let mut list = List::from_iter(values);
        list.sort_by(|l, r| l.0 <= r.0);
        assert_eq!(Vec::from_iter(list), expected);
    }

    #[test]
    fn sort_randomized_permutations() {
        let mut rng = rand::thread_rng();
        for &n in &[2, 3, 10, 63, 64, 65, 100, 1000] {
            let mut values = Vec::from_iter(0..n);
            values.shuffle(&mut rng);

            let mut list = List::from_iter(values);
            list.sort();
            list.check_invariants();
            assert_eq!(Vec::from_iter(list), Vec::from_iter(0..n));
        }
    }

    #[test]
    fn sort_randomized_with_duplicates() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let values: Vec<i32> = (0..500).map(|_| rng.gen_range(0..50)).collect();
            let mut expected = values.clone();
            expected.sort();

            let mut list = List::from_iter(values);
            list.sort();
            assert_eq!(Vec::from_iter(list), expected);
        }
    }

    #[test]
    fn sort_with_reversing_predicate() {
        let mut list = List::from_iter([1, 5, 2, 4, 3]);
        list.sort_by(|l, r| l >= r);
        assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn sort_keeps_handles_valid() {
        let mut list = List::new();
        list.push_back(5);
        let three = list.push_back(3);
        list.push_back(4);

        list.sort();
        // Sorting relinks nodes without freeing slots, so saved positions
        // survive and still name the same element.
        let cursor = list.cursor_at(three).unwrap();
        assert_eq!(cursor.value(), Ok(&3));
        assert_eq!(list.remove_at(three), Ok(3));
        assert_eq!(Vec::from_iter(list), vec![4, 5]);
    }
}
