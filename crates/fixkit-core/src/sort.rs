use crate::Numeric;

/// Sorts `buf` into ascending order in place.
///
/// Bubble sort: at most `len - 1` passes of adjacent compare-and-swap, each
/// pass one element shorter than the last. Stops early once a pass makes no
/// swap. Intended for buffers of a few dozen elements where code size matters
/// more than the quadratic cost.
///
/// Buffers of length 0 or 1 are left untouched. Float NaN compares neither
/// greater nor smaller, so it is never swapped past a neighbour.
///
/// # Examples
///
/// ```
/// # use fixkit_core::sort::sort_ascending;
/// let mut buf = [3_u32, 1, 2];
/// sort_ascending(&mut buf);
/// assert_eq!(buf, [1, 2, 3]);
/// ```
pub fn sort_ascending<T>(buf: &mut [T])
where
    T: Numeric,
{
    for pass in 1..buf.len() {
        let mut swapped = false;
        for i in 0..buf.len() - pass {
            if buf[i] > buf[i + 1] {
                buf.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
