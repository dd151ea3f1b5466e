//! Index and range utilities for template iteration.

/// True when `index` addresses the final element of a sequence of `len`
/// items.
pub fn is_last(index: usize, len: usize) -> bool {
    index + 1 == len
}

/// True when `index` addresses anything but the final element. Used to
/// decide whether a trailing comma should be rendered in a range.
pub fn not_last_item(length: usize, index: usize) -> bool {
    index + 1 < length
}

/// The integers `[n, m)` in order; empty when `m <= n`.
pub fn loop_range(n: i64, m: i64) -> Vec<i64> {
    (n..m).collect()
}

/// Integer subtraction, exposed to templates which have no arithmetic.
pub fn subtract(x: i64, y: i64) -> i64 {
    x - y
}
