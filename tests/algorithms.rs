//! Properties every algorithm must satisfy, checked through the public API.

use proptest::prelude::*;
use sortvisor::{AlgorithmId, Bogo, Recorder, Sorter, Step};

fn run(sorter: &dyn Sorter, input: &[i32]) -> (Vec<i32>, Vec<Step>) {
    let rec = Recorder::new();
    let mut buf = input.to_vec();
    sorter.sort(&mut buf, &rec).expect("recorder never interrupts");
    (buf, rec.steps())
}

fn sorted(input: &[i32]) -> Vec<i32> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

/// Bogo with a small cap and fixed seed so property runs stay fast.
fn sorter(id: AlgorithmId) -> Box<dyn Sorter> {
    match id {
        AlgorithmId::Bogo => Box::new(Bogo::new(50).with_seed(7)),
        other => other.sorter(),
    }
}

proptest! {
    #[test]
    fn every_algorithm_sorts_a_permutation(input in prop::collection::vec(-1000i32..1000, 0..80)) {
        let expected = sorted(&input);
        for id in AlgorithmId::ALL {
            let (out, steps) = run(sorter(id).as_ref(), &input);
            prop_assert_eq!(&out, &expected, "{}", id);
            prop_assert!(steps.contains(&Step::AllSorted), "{}", id);
            let len = input.len();
            prop_assert!(steps.iter().all(|s| s.max_index().is_none_or(|i| i < len)), "{}", id);
        }
    }

    #[test]
    fn deterministic_algorithms_repeat_their_steps(input in prop::collection::vec(0i32..50, 0..40)) {
        for id in AlgorithmId::ALL.into_iter().filter(AlgorithmId::is_deterministic) {
            let (_, first) = run(id.sorter().as_ref(), &input);
            let (_, second) = run(id.sorter().as_ref(), &input);
            prop_assert_eq!(first, second, "{}", id);
        }
    }

    #[test]
    fn replaying_mutations_reproduces_the_output(input in prop::collection::vec(-50i32..50, 0..60)) {
        for id in AlgorithmId::ALL {
            let (out, steps) = run(sorter(id).as_ref(), &input);
            let mut mirror = input.clone();
            for step in &steps {
                match *step {
                    Step::Write { index, value } => mirror[index] = value,
                    Step::Swap(i, j) => mirror.swap(i, j),
                    _ => {}
                }
            }
            prop_assert_eq!(mirror, out, "{}", id);
        }
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    let input = [9, -4, 7, 7, 0, 3, 12, -8, 5];
    for id in AlgorithmId::ALL {
        let (once, _) = run(sorter(id).as_ref(), &input);
        let (twice, _) = run(sorter(id).as_ref(), &once);
        assert_eq!(once, twice, "{id}");
    }
}

#[test]
fn empty_and_single_inputs_are_marked_sorted() {
    for id in AlgorithmId::ALL {
        for input in [&[][..], &[42][..]] {
            let (out, steps) = run(sorter(id).as_ref(), input);
            assert_eq!(out, input, "{id}");
            assert!(steps.contains(&Step::AllSorted), "{id}");
        }
    }
}

#[test]
fn bucket_handles_all_equal_values() {
    let (out, _) = run(&sortvisor::Bucket, &[5, 5, 5]);
    assert_eq!(out, [5, 5, 5]);
}

#[test]
fn bogo_falls_back_after_its_cap() {
    let (out, steps) = run(&Bogo::new(1).with_seed(3), &[3, 1, 2]);
    assert_eq!(out, [1, 2, 3]);
    assert!(steps.contains(&Step::AllSorted));
}

#[test]
fn bubble_stops_after_a_clean_pass() {
    let input: Vec<i32> = (0..20).collect();
    let (_, steps) = run(&sortvisor::Bubble, &input);
    let compares = steps.iter().filter(|s| matches!(s, Step::Compare(..))).count();
    assert_eq!(compares, input.len() - 1);
}

#[test]
fn names_parse_back_to_ids() {
    for id in AlgorithmId::ALL {
        assert_eq!(id.info().name.parse::<AlgorithmId>(), Ok(id));
        assert_eq!(id.key().parse::<AlgorithmId>(), Ok(id));
    }
    assert!("shell".parse::<AlgorithmId>().is_err());
}
