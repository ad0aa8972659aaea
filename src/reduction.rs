//! Binary-tree merge reduction across the process group.
//!
//! The reduction runs in `log2(P)` rounds. In the round with offset `power`,
//! ranks are grouped into blocks of `2 * power`: the rank at the block base
//! receives its partner's partition and merges it with its own, the rank at
//! `base + power` sends its partition away and holds no live data afterwards,
//! and every other rank idles. A full-group barrier closes each round so that
//! all ranks agree on the partition length entering the next one.

use crate::types::{Rank, Role};

#[cfg(feature = "mpi")]
use log::debug;
#[cfg(feature = "mpi")]
use mpi::topology::UserCommunicator;
#[cfg(feature = "mpi")]
use mpi::traits::{Communicator, Destination, Source};

#[cfg(feature = "mpi")]
use crate::sort::merge;

/// Compute the part `rank` plays in the round with offset `power`.
///
/// This is a pure function of the global parameters: every member of the
/// group evaluates it independently and arrives at the same pairing. A rank
/// that sent its partition away in an earlier round falls in the interior of
/// all later blocks and comes out `Idle`.
pub fn role(rank: Rank, power: Rank, size: Rank) -> Role {
    let block = 2 * power;
    if rank % block == 0 && rank + power < size {
        Role::Receiver {
            partner: rank + power,
        }
    } else if rank % block == power {
        Role::Sender {
            partner: rank - power,
        }
    } else {
        Role::Idle
    }
}

/// Run the tree reduction until one rank holds the full array.
///
/// `local` is the rank's local buffer, sized for the full array, with the
/// first `run_len` elements forming its sorted partition. Returns the
/// partition length after the final round, which is the full array length;
/// only rank 0's buffer holds live data at that point, every other rank's
/// prefix is a stale, superseded run.
///
/// Blocks on the point-to-point exchange and on the per-round barrier; a
/// transport failure is fatal to the whole group.
#[cfg(feature = "mpi")]
pub fn reduce(world: &UserCommunicator, local: &mut [f64], mut run_len: usize) -> usize {
    let rank = world.rank();
    let size = world.size();

    let mut power: Rank = 1;
    while power < size {
        match role(rank, power, size) {
            Role::Receiver { partner } => {
                world
                    .process_at_rank(partner)
                    .receive_into(&mut local[run_len..2 * run_len]);
                merge(&mut local[..2 * run_len], run_len);
                debug!("rank {rank} merged {run_len} elements received from rank {partner}");
            }
            Role::Sender { partner } => {
                world.process_at_rank(partner).send(&local[..run_len]);
                debug!("rank {rank} sent {run_len} elements to rank {partner}");
            }
            Role::Idle => {}
        }

        // Bounds message reordering across rounds; every rank doubles its
        // notion of the partition length together.
        world.barrier();
        run_len *= 2;
        power *= 2;
    }

    run_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_single_round() {
        // P = 2 has one round: rank 0 receives from rank 1.
        assert_eq!(role(0, 1, 2), Role::Receiver { partner: 1 });
        assert_eq!(role(1, 1, 2), Role::Sender { partner: 0 });
    }

    #[test]
    fn test_role_four_ranks() {
        // Round 1: (0 <- 1), (2 <- 3).
        assert_eq!(role(0, 1, 4), Role::Receiver { partner: 1 });
        assert_eq!(role(1, 1, 4), Role::Sender { partner: 0 });
        assert_eq!(role(2, 1, 4), Role::Receiver { partner: 3 });
        assert_eq!(role(3, 1, 4), Role::Sender { partner: 2 });

        // Round 2: (0 <- 2), ranks 1 and 3 are spent.
        assert_eq!(role(0, 2, 4), Role::Receiver { partner: 2 });
        assert_eq!(role(2, 2, 4), Role::Sender { partner: 0 });
        assert_eq!(role(1, 2, 4), Role::Idle);
        assert_eq!(role(3, 2, 4), Role::Idle);
    }

    #[test]
    fn test_role_partners_agree() {
        let size = 8;
        let mut power = 1;
        while power < size {
            for rank in 0..size {
                match role(rank, power, size) {
                    Role::Receiver { partner } => {
                        assert_eq!(role(partner, power, size), Role::Sender { partner: rank });
                    }
                    Role::Sender { partner } => {
                        assert_eq!(
                            role(partner, power, size),
                            Role::Receiver { partner: rank }
                        );
                    }
                    Role::Idle => {}
                }
            }
            power *= 2;
        }
    }

    #[test]
    fn test_role_sender_stays_idle() {
        // Once a rank has sent, it idles in every later round.
        let size = 8;
        for rank in 0..size {
            let mut sent = false;
            let mut power = 1;
            while power < size {
                let r = role(rank, power, size);
                if sent {
                    assert_eq!(r, Role::Idle);
                }
                if matches!(r, Role::Sender { .. }) {
                    sent = true;
                }
                power *= 2;
            }
        }
    }

    #[test]
    fn test_role_rank_zero_always_receives() {
        let size = 16;
        let mut power = 1;
        while power < size {
            assert_eq!(role(0, power, size), Role::Receiver { partner: power });
            power *= 2;
        }
    }
}
