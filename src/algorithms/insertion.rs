// Insertion sort

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

/// Shift-based insertion.
///
/// Each greater neighbour moves right by one `Overwrite`, and the key is
/// written back only if something moved, so an already sorted buffer costs
/// `n - 1` comparisons and no writes. Marking index `i` after each outer
/// iteration keeps the marked set equal to the prefix `[0..=i]`.
pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    let n = t.len();
    if n == 0 {
        return Ok(());
    }
    t.mark_sorted(0)?;

    for i in 1..n {
        let key = t.get(i);
        let mut hole = i;
        while hole > 0 {
            t.compare(hole - 1, hole)?;
            if t.get(hole - 1) > key {
                t.overwrite(hole, t.get(hole - 1))?;
                hole -= 1;
            } else {
                break;
            }
        }
        if hole != i {
            t.overwrite(hole, key)?;
        }
        t.mark_sorted(i)?;
    }
    Ok(())
}
