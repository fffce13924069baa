//! Wait strategy for sequence exhaustion
//!
//! Busy-polls the clock until it reaches the next timestamp unit. The caller
//! holds the generator lock for the whole wait, so every other caller stalls
//! with it; the wait is bounded by one timestamp unit.

use std::thread;

/// Poll `get_time` until it returns a value strictly greater than `last`
///
/// `yield_every` yields the thread every N polls; 0 spins without yielding.
#[inline]
pub fn wait_for_next<F>(last: u64, yield_every: u32, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    let mut polls: u32 = 0;
    loop {
        let current = get_time();
        if current > last {
            return current;
        }

        std::hint::spin_loop();

        polls = polls.wrapping_add(1);
        if yield_every != 0 && polls % yield_every == 0 {
            thread::yield_now();
        }
    }
}
