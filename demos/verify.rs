//! Distributed correctness check, launched under MPI:
//! `mpirun -n {{NPROCESSES}} cargo run --example verify --features mpi`.
//!
//! Rank 0 draws a random input, the group runs the full scatter, local sort
//! and tree reduction, and rank 0 compares the result against a serial sort
//! of the same input.

use mpi::traits::Communicator;

use treesort::{distribute, helpers, reduction, sort};

fn main() {
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let comm = world.duplicate();
    let rank = comm.rank();
    let size = comm.size();

    let nsamples = 1000;
    let total = nsamples * size as usize;
    distribute::validate(total as u64, size).unwrap();

    let input = if rank == 0 {
        Some(helpers::values_fixture(total, Some(-500.0), Some(500.0)))
    } else {
        None
    };

    let (mut local, run_len) = distribute::scatter_input(&comm, input.as_deref());
    assert_eq!(run_len, nsamples);

    sort::mergesort(&mut local[..run_len]);
    let sorted_len = reduction::reduce(&comm, &mut local, run_len);

    // Test that rank 0 holds the sorted permutation of the whole input
    if rank == 0 {
        assert_eq!(sorted_len, total);

        let sorted = &local[..sorted_len];
        for pair in sorted.windows(2) {
            assert!(pair[0] <= pair[1]);
        }

        let mut expected = input.unwrap();
        expected.sort_by(f64::total_cmp);
        assert_eq!(sorted, &expected[..]);

        println!("sorted {total} elements over {size} ranks");
    }
}
