//! Serial merge sort over a mutable slice.
//!
//! These are the local building blocks of the distributed sort: each rank
//! runs [`mergesort`] over its own partition, and the reduction rounds reuse
//! [`merge`] to combine a received partition with the local one. Neither
//! function touches anything outside the slice it is given.

/// Merge the two adjacent sorted runs `run[..mid]` and `run[mid..]` into a
/// single sorted run.
///
/// Ties go to the left run: an element of the left run is emitted whenever it
/// is not greater than the right run's current element, so the merge is
/// stable. If either run is unsorted the result is unsorted too, but the
/// multiset of elements is always preserved.
///
/// NaN ordering is unspecified; inputs are assumed NaN-free.
pub fn merge(run: &mut [f64], mid: usize) {
    let mut scratch = Vec::with_capacity(run.len());
    let mut left = 0;
    let mut right = mid;

    while left < mid && right < run.len() {
        if run[left] <= run[right] {
            scratch.push(run[left]);
            left += 1;
        } else {
            scratch.push(run[right]);
            right += 1;
        }
    }

    // At most one of these has elements left.
    scratch.extend_from_slice(&run[left..mid]);
    scratch.extend_from_slice(&run[right..]);

    run.copy_from_slice(&scratch);
}

/// Sort a slice in place with a recursive two-way merge sort.
///
/// Splits at the midpoint, sorts both halves, then merges them with
/// [`merge`]. Slices of length 0 or 1 are already sorted.
pub fn mergesort(data: &mut [f64]) {
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    mergesort(&mut data[..mid]);
    mergesort(&mut data[mid..]);
    merge(data, mid);
}
