use crate::types::Tick;

/// Returns whether tick `a` comes after tick `b`, treating the counter as
/// wrapping around at `u16::MAX`
/// tick_greater_than(2,1) will return true
/// tick_greater_than(1,2) will return false
/// tick_greater_than(1,1) will return false
/// tick_greater_than(0,65535) will return true
pub fn tick_greater_than(a: Tick, b: Tick) -> bool {
    ((a > b) && (a - b <= 32768)) || ((a < b) && (b - a > 32768))
}

/// Returns whether tick `a` comes before tick `b`
/// tick_less_than(1,2) will return true
/// tick_less_than(2,1) will return false
/// tick_less_than(1,1) will return false
pub fn tick_less_than(a: Tick, b: Tick) -> bool {
    tick_greater_than(b, a)
}

/// Signed number of ticks from `a` to `b`.
///
/// # Examples
/// ```
/// # use vabridge_shared::tick_diff;
/// assert_eq!(tick_diff(1, 2), 1);
/// assert_eq!(tick_diff(2, 1), -1);
/// assert_eq!(tick_diff(65535, 0), 1);
/// assert_eq!(tick_diff(0, 65535), -1);
/// ```
pub fn tick_diff(a: Tick, b: Tick) -> i16 {
    b.wrapping_sub(a) as i16
}
