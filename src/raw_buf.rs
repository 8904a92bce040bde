use {
    crate::{Error, Result},
    allocator_api2::alloc::{Allocator, Global},
    std::{
        alloc::Layout,
        fmt::{self, Formatter},
        marker::PhantomData,
        mem,
        ptr::NonNull,
    },
};

/// Owned allocation behind a sequence: pointer, capacity and the
/// allocator that produced it. Knows nothing about which slots hold
/// live elements; dropping them is the owner's job.
pub(crate) struct RawBuf<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    pub const fn new_in(alloc: A) -> Self {
        // a ZST never allocates, its capacity is unbounded from the start
        let cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
        Self { ptr: NonNull::dangling(), cap, alloc, _marker: PhantomData }
    }

    pub const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            None
        } else {
            // SAFETY: the block was allocated with `Layout::array`,
            // so this size and align are already known to be valid
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<T>().unchecked_mul(self.cap),
                    mem::align_of::<T>(),
                );
                Some((self.ptr.cast(), layout))
            }
        }
    }

    /// Makes room for `len + additional` slots, reallocating to
    /// `max(2 * cap, len + additional)` when the spare capacity is not
    /// enough.
    pub fn grow_amortized(&mut self, len: usize, additional: usize) -> Result<()> {
        let required = len.checked_add(additional).ok_or(Error::CapacityOverflow)?;
        if required <= self.cap {
            return Ok(());
        }

        // `cap` is bounded by `isize::MAX` bytes, doubling cannot wrap
        let new_cap = usize::max(self.cap * 2, required);
        let new_layout = Layout::array::<T>(new_cap).map_err(|_| Error::CapacityOverflow)?;

        let ptr = if let Some((ptr, old_layout)) = self.current_memory() {
            // SAFETY: `ptr` denotes the live block, `old_layout` fits it
            // and `new_layout` is strictly larger
            unsafe { self.alloc.grow(ptr, old_layout, new_layout) }
        } else {
            self.alloc.allocate(new_layout)
        }
        .map_err(|_| Error::AllocError { layout: new_layout, non_exhaustive: () })?;

        self.ptr = ptr.cast();
        self.cap = new_cap;
        Ok(())
    }

    /// Shrinks the block to exactly `cap` slots; `cap == 0` releases
    /// the allocation entirely.
    pub fn shrink_to(&mut self, cap: usize) -> Result<()> {
        debug_assert!(cap <= self.cap, "tried to shrink to a larger capacity");

        let Some((ptr, old_layout)) = self.current_memory() else {
            return Ok(());
        };

        if cap == 0 {
            // SAFETY: `ptr` denotes the live block with `old_layout`
            unsafe { self.alloc.deallocate(ptr, old_layout) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
        } else {
            let new_layout = Layout::array::<T>(cap).map_err(|_| Error::CapacityOverflow)?;
            // SAFETY: as above, and `new_layout` is no larger than the block
            let new_ptr = unsafe { self.alloc.shrink(ptr, old_layout, new_layout) }
                .map_err(|_| Error::AllocError { layout: new_layout, non_exhaustive: () })?;
            self.ptr = new_ptr.cast();
            self.cap = cap;
        }
        Ok(())
    }
}

impl<T, A: Allocator> fmt::Debug for RawBuf<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}..{})", self.ptr, self.cap)
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: the owner already dropped the elements,
            // only the block itself remains
            unsafe { self.alloc.deallocate(ptr, layout) };
        }
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}
