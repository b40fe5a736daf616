// Merge sort (top-down)

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    match t.len() {
        0 => Ok(()),
        n => merge_sort(t, 0, n - 1),
    }
}

// Bounds are inclusive; the split point leans low for odd lengths.
fn merge_sort<T: Element>(t: &mut Tracer<'_, T>, low: usize, high: usize) -> Traced {
    if low >= high {
        return Ok(());
    }
    let mid = low + (high - low) / 2;
    merge_sort(t, low, mid)?;
    merge_sort(t, mid + 1, high)?;
    merge(t, low, mid, high)
}

/// Merge `[low..=mid]` and `[mid+1..=high]` back into place.
///
/// Ties take from the left half, which keeps equal elements in their original
/// order. Every write back is an `Overwrite`.
fn merge<T: Element>(t: &mut Tracer<'_, T>, low: usize, mid: usize, high: usize) -> Traced {
    let left = t.values()[low..=mid].to_vec();
    let right = t.values()[mid + 1..=high].to_vec();

    let (mut i, mut j, mut k) = (0, 0, low);
    while i < left.len() && j < right.len() {
        t.compare(low + i, mid + 1 + j)?;
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        t.overwrite(k, value)?;
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        t.overwrite(k, value)?;
        k += 1;
    }
    Ok(())
}
