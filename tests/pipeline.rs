//! Serial simulation of the distributed pipeline.
//!
//! Runs the scatter / local sort / tree reduction sequence over in-memory
//! participants, exercising the same role computation and merge code paths
//! the MPI driver uses, without needing a launcher.

use itertools::Itertools;

use treesort::types::Role;
use treesort::{distribute, helpers, io, reduction, sort};

/// One full reduction over `procs` in-memory participants.
fn simulate(input: &[f64], procs: i32) -> Vec<f64> {
    distribute::validate(input.len() as u64, procs).unwrap();
    let per_rank = input.len() / procs as usize;

    // Scatter: each participant gets a full-length buffer with its partition
    // in the prefix.
    let mut buffers: Vec<Vec<f64>> = input
        .chunks(per_rank)
        .map(|chunk| {
            let mut local = vec![0.0; input.len()];
            local[..per_rank].copy_from_slice(chunk);
            local
        })
        .collect();

    for local in buffers.iter_mut() {
        sort::mergesort(&mut local[..per_rank]);
    }

    let mut run_len = per_rank;
    let mut power = 1;
    while power < procs {
        for rank in 0..procs {
            if let Role::Receiver { partner } = reduction::role(rank, power, procs) {
                let incoming = buffers[partner as usize][..run_len].to_vec();
                let local = &mut buffers[rank as usize];
                local[run_len..2 * run_len].copy_from_slice(&incoming);
                sort::merge(&mut local[..2 * run_len], run_len);
            }
        }
        run_len *= 2;
        power *= 2;
    }

    assert_eq!(run_len, input.len());
    buffers[0][..run_len].to_vec()
}

#[test]
fn test_two_participants() {
    // Partitions {4, 2} and {3, 1} sort locally to {2, 4} and {1, 3}, and a
    // single merge round combines them on participant 0.
    let sorted = simulate(&[4.0, 2.0, 3.0, 1.0], 2);
    assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(io::render(&sorted), "{ 1.00 2.00 3.00 4.00 }");
}

#[test]
fn test_random_input_across_group_sizes() {
    let input = helpers::values_fixture(1 << 10, Some(-100.0), Some(100.0));
    let mut expected = input.clone();
    expected.sort_by(f64::total_cmp);

    for procs in [1, 2, 4, 8, 16] {
        assert_eq!(simulate(&input, procs), expected);
    }
}

#[test]
fn test_one_element_per_participant() {
    // N == P: every local sort hits its base case and all the work happens
    // in the merge rounds.
    let sorted = simulate(&[7.0, -1.0, 3.0, 0.0, 2.0, 9.0, -4.0, 5.0], 8);
    assert!(sorted.iter().tuple_windows().all(|(a, b)| a <= b));
    assert_eq!(sorted, vec![-4.0, -1.0, 0.0, 2.0, 3.0, 5.0, 7.0, 9.0]);
}

#[test]
fn test_uneven_split_is_rejected() {
    assert!(distribute::validate(10, 4).is_err());
    assert!(distribute::validate(6, 4).is_err());
}
