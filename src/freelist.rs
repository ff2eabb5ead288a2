use core::ptr::null_mut;

use crate::slot::{SlotHead, links_of};

/// Doubly-linked, null-terminated list of Free slots (spec §3, "Free list").
///
/// Unlike a circular sentinel-anchored list, no node — including the list
/// itself — ever stores a pointer to its own address: the head of the list
/// lives in `head` and is read fresh through `&self`/`&mut self` on every
/// access, and a node's `prev`/`next` is null exactly at the ends of the
/// list rather than looping back to an anchor. That makes the list safe to
/// move (e.g. as part of moving the `Heap` that owns it) at any point, the
/// same null-terminated shape as the teacher's `PageHeader` list
/// (`page_list_is_tail`, `page_list_pop_next` in `slab_alloc/src/lib.rs`),
/// adapted from page-granularity to slot-granularity.
pub(crate) struct FreeList {
    head: *mut SlotHead,
}

impl FreeList {
    pub(crate) fn new() -> Self {
        Self { head: null_mut() }
    }

    /// The first Free slot, or a null pointer if the list is empty.
    pub(crate) fn first(&self) -> *mut SlotHead {
        self.head
    }

    /// Splice `node` in as the new first element of the list.
    ///
    /// # Safety
    /// `node` must point at a slot head not currently linked into any free
    /// list, with a valid [`crate::slot::FreeLinks`] region immediately
    /// following it.
    pub(crate) unsafe fn push_front(&mut self, node: *mut SlotHead) {
        unsafe {
            let node_links = links_of(node);
            (*node_links).prev = null_mut();
            (*node_links).next = self.head;
            if !self.head.is_null() {
                (*links_of(self.head)).prev = node;
            }
            self.head = node;
        }
    }

    /// Unlink `node` from this list.
    ///
    /// # Safety
    /// `node` must currently be linked into this list.
    pub(crate) unsafe fn remove(&mut self, node: *mut SlotHead) {
        unsafe {
            let links = links_of(node);
            let prev = (*links).prev;
            let next = (*links).next;

            if !prev.is_null() {
                (*links_of(prev)).next = next;
            } else {
                self.head = next;
            }

            if !next.is_null() {
                (*links_of(next)).prev = prev;
            }
        }
    }
}
