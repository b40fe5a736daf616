// Shell sort

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

/// Gap-insertion passes over `n/2, n/4, ..., 1`.
///
/// No position is final before the last pass, so nothing is marked here.
pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    let n = t.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let key = t.get(i);
            let mut hole = i;
            while hole >= gap {
                t.compare(hole - gap, hole)?;
                if t.get(hole - gap) > key {
                    t.overwrite(hole, t.get(hole - gap))?;
                    hole -= gap;
                } else {
                    break;
                }
            }
            if hole != i {
                t.overwrite(hole, key)?;
            }
        }
        gap /= 2;
    }
    Ok(())
}
