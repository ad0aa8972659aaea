//! Input validation and partition distribution.
//!
//! Rank 0 owns the full input before the sort starts. The distributor checks
//! that the input splits evenly over the group, shares the outcome of that
//! check with every rank, and scatters one contiguous partition into each
//! rank's local buffer. Both collectives are full-group synchronization
//! points; no rank proceeds until they complete.

use crate::io;
use crate::types::{Error, Rank, Result};

#[cfg(feature = "mpi")]
use log::debug;
#[cfg(feature = "mpi")]
use mpi::topology::UserCommunicator;
#[cfg(feature = "mpi")]
use mpi::traits::{Communicator, Root};

/// Check that `len` elements can be distributed over `procs` ranks.
///
/// The group size must be a power of two (the tree reduction pairs ranks in
/// power-of-two blocks; any other size would leave partitions unmerged) and
/// must divide the element count exactly, since partial partitions are not
/// supported.
pub fn validate(len: u64, procs: Rank) -> Result<()> {
    if procs < 1 || procs.count_ones() != 1 {
        return Err(Error::GroupSizeNotPowerOfTwo(procs));
    }
    if len % procs as u64 != 0 {
        return Err(Error::UnevenPartition { len, procs });
    }
    Ok(())
}

/// Read and validate the full input on rank 0.
///
/// `args` is the raw command line including the program name; exactly one
/// input file path is expected, and the argument count is checked before any
/// file access. The element count comes from the file's byte length, and
/// divisibility over the group is checked once the values are read.
pub fn get_input(args: &[String], procs: Rank) -> Result<Vec<f64>> {
    if args.len() != 2 {
        return Err(Error::Usage);
    }

    let count = io::size_of(&args[1])? / io::ELEMENT_WIDTH as u64;
    let values = io::read_all(&args[1], count as usize)?;
    validate(count, procs)?;

    Ok(values)
}

/// Share rank 0's validation outcome with the whole group.
///
/// `ok` is rank 0's verdict; other ranks pass `true` and learn the real value
/// from the broadcast. An error flag raised on rank 0 surfaces as
/// [`Error::Aborted`] on every rank, so the group exits together instead of
/// deadlocking in the next collective.
#[cfg(feature = "mpi")]
pub fn broadcast_status(world: &UserCommunicator, ok: bool) -> Result<()> {
    let root = world.process_at_rank(0);

    let mut flag: u8 = u8::from(world.rank() == 0 && !ok);
    root.broadcast_into(&mut flag);

    if flag != 0 {
        return Err(Error::Aborted);
    }
    Ok(())
}

/// Broadcast the array length and scatter equal partitions to all ranks.
///
/// `input` is the full array on rank 0 and `None` elsewhere. Every rank
/// allocates its local buffer at the full array length up front so that no
/// merge round ever reallocates, and receives its `len / size` partition in
/// the buffer's prefix. Returns the buffer together with the partition
/// length.
///
/// The caller must have validated the input with [`validate`] first.
#[cfg(feature = "mpi")]
pub fn scatter_input(world: &UserCommunicator, input: Option<&[f64]>) -> (Vec<f64>, usize) {
    let size = world.size();
    let root = world.process_at_rank(0);

    let mut len = input.map_or(0u64, |values| values.len() as u64);
    root.broadcast_into(&mut len);

    let len = len as usize;
    let per_rank = len / size as usize;

    // Sized for the final merge round, not the first partition.
    let mut local = vec![0.0; len];

    if let Some(values) = input {
        root.scatter_into_root(values, &mut local[..per_rank]);
    } else {
        root.scatter_into(&mut local[..per_rank]);
    }
    debug!(
        "rank {} received a {per_rank}-element partition of {len}",
        world.rank()
    );

    (local, per_rank)
}
