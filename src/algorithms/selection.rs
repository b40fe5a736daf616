// Selection sort

use crate::engine::step::Element;
use crate::engine::tracer::{Traced, Tracer};

pub fn sort<T: Element>(t: &mut Tracer<'_, T>) -> Traced {
    let n = t.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            t.compare(min, j)?;
            if t.get(j) < t.get(min) {
                min = j;
            }
        }
        if min != i {
            t.swap(i, min)?;
        }
        t.mark_sorted(i)?;
    }
    Ok(())
}
