//! # Distributed merge sort in Rust
//!
//! A parallel merge sort over MPI. The input array is scattered in equal
//! contiguous partitions across a fixed group of processes, each process
//! sorts its partition independently, and the sorted partitions are then
//! combined with a binary-tree reduction: in each round half of the live
//! processes send their partition to a partner which merges it with its own,
//! doubling the partition length, until rank 0 holds the fully sorted array.
//!
//! All communication goes through blocking MPI collectives (broadcast,
//! scatter, barrier) and blocking point-to-point exchanges. The group size
//! must be a power of two and must evenly divide the element count.
//!
//! The serial building blocks ([`sort`], the role computation in
//! [`reduction`]) have no MPI dependency and are always compiled; the
//! communication layers are gated behind the `mpi` feature.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod distribute;
pub mod helpers;
pub mod io;
pub mod reduction;
pub mod sort;
pub mod types;
