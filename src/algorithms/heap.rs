// Heap sort

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    let n = t.len();
    if n == 0 {
        return Ok(());
    }

    for root in (0..n / 2).rev() {
        sift_down(t, n, root)?;
    }

    for end in (1..n).rev() {
        t.swap(0, end)?;
        t.mark_sorted(end)?;
        sift_down(t, end, 0)?;
    }
    t.mark_sorted(0)
}

/// Restore the max-heap property for the subtree at `root` within `heap_len`.
/// A child only takes over when strictly greater, so equal values stay put.
fn sift_down<T: Element>(t: &mut Tracer<'_, T>, heap_len: usize, mut root: usize) -> Traced {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap_len {
            t.compare(left, largest)?;
            if t.get(left) > t.get(largest) {
                largest = left;
            }
        }
        if right < heap_len {
            t.compare(right, largest)?;
            if t.get(right) > t.get(largest) {
                largest = right;
            }
        }

        if largest == root {
            return Ok(());
        }
        t.swap(root, largest)?;
        root = largest;
    }
}
