use core::ptr::NonNull;

/// Page size in bytes that every region returned by a [`PagePool`] must match.
pub const PAGE_SIZE: usize = 4096;

/// The page-granular primitive the heap sits on top of.
///
/// An implementation backs this with whatever the host environment's real
/// page primitive is (`mmap`/`munmap`, a bump arena over a static buffer, a
/// kernel's physical frame allocator, ...). The heap itself never assumes
/// anything about where pages come from beyond this contract.
///
/// # Safety
///
/// Implementors must return regions that are `PAGE_SIZE`-aligned and exactly
/// `PAGE_SIZE` bytes long, freshly zero-filled on every `allocate`. Once a
/// page has been passed to `deallocate`, the implementation must not hand
/// out the same address again until a later `allocate` legitimately returns
/// it.
pub unsafe trait PagePool {
    /// Acquire one fresh, zero-filled, page-aligned page. Returns `None` if
    /// the underlying system has no more pages to give out.
    fn allocate(&mut self) -> Option<NonNull<[u8; PAGE_SIZE]>>;

    /// Release a page previously returned by `allocate`.
    ///
    /// # Safety
    ///
    /// `ptr` must be a page this implementation returned from `allocate`
    /// which has not already been passed to `deallocate`.
    unsafe fn deallocate(&mut self, ptr: NonNull<[u8; PAGE_SIZE]>);
}
