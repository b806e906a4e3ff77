use std::cell::UnsafeCell;
use std::rc::Rc;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

thread_local! {
    static THREAD_PRNG: Rc<UnsafeCell<Xoshiro256PlusPlus>> = {
        Rc::new(UnsafeCell::new(Xoshiro256PlusPlus::from_entropy()))
    }
}

/// A reference to a thread-local pseudorandom number generator.
///
/// Every thread owns an independent stream, seeded from entropy the first time it is used. Call
/// [`ThreadPrng::seed`] at start-up to make a run reproducible.
///
/// Unlike `rand::thread_rng()` this generator is not cryptographically secure.
pub struct ThreadPrng {
    rng: Rc<UnsafeCell<Xoshiro256PlusPlus>>,
}

impl ThreadPrng {
    pub fn get() -> Self {
        Self { rng: THREAD_PRNG.with(|r| r.clone()) }
    }

    /// Replaces the current thread's generator state with one derived from `seed`.
    ///
    /// Handles obtained earlier on this thread share the reseeded stream.
    pub fn seed(seed: u64) {
        log::debug!("reseeding the thread PRNG with {}", seed);
        // SAFETY: see the `RngCore` impl below, no reference into the cell outlives this statement.
        THREAD_PRNG.with(|r| unsafe { *r.get() = Xoshiro256PlusPlus::seed_from_u64(seed) });
    }
}

// SAFETY: `self.rng` is only accessed from a single thread and the implementation of `RngCore` for
//  the underlying generator cannot use `ThreadPrng`. Also `rand` is doing the same thing.
impl RngCore for ThreadPrng {
    fn next_u32(&mut self) -> u32 {
        unsafe { &mut *self.rng.get() }.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        unsafe { &mut *self.rng.get() }.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        unsafe { &mut *self.rng.get() }.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        unsafe { &mut *self.rng.get() }.try_fill_bytes(dest)
    }
}
