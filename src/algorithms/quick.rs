// Quick sort (Lomuto partition)

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    match t.len() {
        0 => Ok(()),
        n => quick_sort(t, 0, n - 1),
    }
}

// Bounds are inclusive.
fn quick_sort<T: Element>(t: &mut Tracer<'_, T>, low: usize, high: usize) -> Traced {
    if low < high {
        let pivot = partition(t, low, high)?;
        t.mark_sorted(pivot)?;
        if pivot > low {
            quick_sort(t, low, pivot - 1)?;
        }
        if pivot < high {
            quick_sort(t, pivot + 1, high)?;
        }
        Ok(())
    } else if low == high {
        t.mark_sorted(low)
    } else {
        Ok(())
    }
}

/// Partition around the last element and return the pivot's final index.
///
/// Every element strictly less than the pivot is swapped into the growing
/// "less" region, including when it is already in place.
fn partition<T: Element>(t: &mut Tracer<'_, T>, low: usize, high: usize) -> Traced<usize> {
    let pivot = t.get(high);
    let mut store = low;

    for j in low..high {
        t.compare(j, high)?;
        if t.get(j) < pivot {
            t.swap(store, j)?;
            store += 1;
        }
    }
    t.swap(store, high)?;
    Ok(store)
}
