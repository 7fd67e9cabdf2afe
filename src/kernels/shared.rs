//! Shared handle to the distance buffer.
//!
//! The parallel engine has several threads write into one buffer at once,
//! each into its own tiles. A `&mut [Weight]` can't be handed to more than
//! one thread, so the kernels work through this raw-pointer handle
//! instead. It borrows the buffer exclusively for `'a`, so nothing outside
//! the run can touch the matrix while it exists.

use std::marker::PhantomData;

use crate::matrix::dist::Weight;

pub struct SharedDist<'a> {
    ptr: *mut Weight,
    n: usize,
    _borrow: PhantomData<&'a mut [Weight]>,
}

// Cross-thread access is only through the unsafe accessors; callers
// guarantee that no cell is written by one thread while another touches it.
unsafe impl Send for SharedDist<'_> {}
unsafe impl Sync for SharedDist<'_> {}

impl<'a> SharedDist<'a> {
    /// # Panics
    ///
    /// Panics if `dist.len() != n * n`.
    pub fn new(dist: &'a mut [Weight], n: usize) -> Self {
        assert_eq!(dist.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
        SharedDist {
            ptr: dist.as_mut_ptr(),
            n,
            _borrow: PhantomData,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// # Safety
    ///
    /// `i, j < n`, and no other thread may be writing cell `(i, j)`.
    #[inline(always)]
    pub unsafe fn get(&self, i: usize, j: usize) -> Weight {
        debug_assert!(i < self.n && j < self.n);
        unsafe { self.ptr.add(i * self.n + j).read() }
    }

    /// # Safety
    ///
    /// `i, j < n`, and no other thread may be reading or writing cell
    /// `(i, j)`.
    #[inline(always)]
    pub unsafe fn set(&self, i: usize, j: usize, weight: Weight) {
        debug_assert!(i < self.n && j < self.n);
        unsafe { self.ptr.add(i * self.n + j).write(weight) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_and_writes_row_major() {
        let mut buf = vec![0, 1, 2, 3, 4, 5, 6, 7, 8];
        {
            let shared = SharedDist::new(&mut buf, 3);
            unsafe {
                assert_eq!(shared.get(1, 2), 5);
                shared.set(2, 0, 42);
            }
        }
        assert_eq!(buf[6], 42);
    }

    #[test]
    #[should_panic]
    fn test_rejects_undersized_buffer() {
        let mut buf = vec![0; 8];
        let _ = SharedDist::new(&mut buf, 3);
    }
}
