//! Shared type definitions.

/// Number of processes in the group, and a process index within it.
///
/// Mirrors `mpi::Rank` so the pure parts of the crate compile without an MPI
/// installation.
pub type Rank = i32;

/// The part a participant plays in one reduction round.
///
/// Every rank derives its own role from `(rank, power, size)` alone, so all
/// members of the group agree on the pairing without any central coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Receives the partner's partition and merges it with its own.
    Receiver {
        /// Rank of the sending partner.
        partner: Rank,
    },
    /// Sends its entire partition to the partner and holds no live data
    /// afterwards.
    Sender {
        /// Rank of the receiving partner.
        partner: Rank,
    },
    /// Takes no part in this round's exchange, but still joins the barrier.
    Idle,
}

/// Errors raised while validating and distributing the input.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Wrong command line: exactly one input file path is expected.
    #[error("expected <array file name>")]
    Usage,

    /// The element count does not split evenly across the group.
    #[error("array size {len} must be divisible by {procs} total processes")]
    UnevenPartition {
        /// Number of elements in the input.
        len: u64,
        /// Number of processes in the group.
        procs: Rank,
    },

    /// The tree reduction pairs ranks in power-of-two blocks; other group
    /// sizes would leave partitions unmerged.
    #[error("total processes {0} must be a power of two")]
    GroupSizeNotPowerOfTwo(Rank),

    /// The input file holds fewer whole elements than requested.
    #[error("expected {expected} elements but the file holds only {available}")]
    Truncated {
        /// Number of elements requested.
        expected: usize,
        /// Number of whole elements the file holds.
        available: usize,
    },

    /// A non-root rank's view of a failure detected on rank 0.
    #[error("aborted by the root process")]
    Aborted,

    /// Underlying file system failure while reading the input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
