// Bubble sort

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

/// Adjacent-pair sweeps with a window shrinking by one per pass. The largest
/// unsorted value settles at the end of each pass and is marked there.
pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    let n = t.len();
    if n == 0 {
        return Ok(());
    }

    for pass in 0..n - 1 {
        for j in 0..n - pass - 1 {
            t.compare(j, j + 1)?;
            if t.get(j) > t.get(j + 1) {
                t.swap(j, j + 1)?;
            }
        }
        t.mark_sorted(n - 1 - pass)?;
    }
    t.mark_sorted(0)
}
