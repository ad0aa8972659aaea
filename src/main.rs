//! MPI driver for the distributed merge sort.
//!
//! Launch with one rank per participant, e.g.
//! `mpirun -n 4 treesort values.bin`. Rank 0 reads and validates the input,
//! every rank receives a partition, sorts it, and joins the tree reduction;
//! rank 0 prints the sorted array. On a usage or validation error all ranks
//! exit together with a non-zero status.

use std::env;
use std::process::ExitCode;

use mpi::traits::Communicator;

use treesort::{distribute, io, reduction, sort};

fn main() -> ExitCode {
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let comm = world.duplicate();
    let rank = comm.rank();
    let size = comm.size();

    let args: Vec<String> = env::args().collect();

    // Only rank 0 touches the file system; everyone learns whether it
    // succeeded before blocking on the scatter.
    let input = if rank == 0 {
        match distribute::get_input(&args, size) {
            Ok(values) => Some(values),
            Err(err) => {
                eprintln!("{err}");
                None
            }
        }
    } else {
        None
    };

    let ok = rank != 0 || input.is_some();
    if distribute::broadcast_status(&comm, ok).is_err() {
        return ExitCode::FAILURE;
    }

    let (mut local, run_len) = distribute::scatter_input(&comm, input.as_deref());
    sort::mergesort(&mut local[..run_len]);
    let sorted_len = reduction::reduce(&comm, &mut local, run_len);

    if rank == 0 {
        println!("{}", io::render(&local[..sorted_len]));
    }

    ExitCode::SUCCESS
}
