use core::mem::size_of;

use crate::pool::PAGE_SIZE;

/// Metadata prefix of every slot.
///
/// `freed` distinguishes an Object slot (0) from a Free slot (nonzero).
/// Together, `freed` and `size` form the slot's "first machine word": when
/// both are zero the slot is Dead (see [`first_word_is_zero`]) — no live
/// head ever has both fields zero, since a Free slot's `freed` is nonzero
/// and an Object slot's `size` is always at least [`crate::heap::MIN_ALLOC_SIZE`].
#[repr(C)]
pub(crate) struct SlotHead {
    pub(crate) freed: u32,
    pub(crate) size: u32,
}

/// Metadata suffix of every slot: a back-reference to its own head, letting
/// the right-neighbour locate the left-neighbour's head in O(1) during
/// coalescing.
#[repr(C)]
pub(crate) struct SlotTail {
    pub(crate) head: *mut SlotHead,
}

/// Doubly-linked free-list pointers. Physically these occupy the first
/// bytes of a Free slot's payload region, immediately after its head; they
/// have no meaning once the slot becomes Object or Dead.
#[repr(C)]
pub(crate) struct FreeLinks {
    pub(crate) prev: *mut SlotHead,
    pub(crate) next: *mut SlotHead,
}

pub(crate) const HEAD_SIZE: usize = size_of::<SlotHead>();
pub(crate) const TAIL_SIZE: usize = size_of::<SlotTail>();
pub(crate) const LINKS_SIZE: usize = size_of::<FreeLinks>();

// The Dead-slot test reads one native-width word at a slot's head (or at a
// neighbour's tail) and compares it to zero. That only works if head and
// tail occupy the same number of bytes, which holds on 64-bit targets (two
// u32s vs. one pointer) and is the only width this crate supports.
const _: () = assert!(HEAD_SIZE == TAIL_SIZE, "this allocator targets 64-bit pointer widths only");

/// Payload start for a slot whose head is at `head`.
pub(crate) fn payload_of(head: *mut SlotHead) -> *mut u8 {
    unsafe { (head as *mut u8).add(HEAD_SIZE) }
}

/// Recover a slot's head from a payload pointer previously handed to a caller.
pub(crate) fn head_of_payload(ptr: *mut u8) -> *mut SlotHead {
    unsafe { ptr.sub(HEAD_SIZE) as *mut SlotHead }
}

/// Head address of the slot immediately to the right of `head`. Only valid
/// to dereference when [`is_page_boundary`] is false for the result
/// (invariant 4, spec §3).
pub(crate) fn right_neighbour(head: *mut SlotHead) -> *mut SlotHead {
    let size = unsafe { (*head).size as usize };
    unsafe { (head as *mut u8).add(HEAD_SIZE + size) as *mut SlotHead }
}

/// Address of this slot's own tail, given its head and current size.
pub(crate) fn tail_of(head: *mut SlotHead) -> *mut SlotTail {
    unsafe { (right_neighbour(head) as *mut u8).sub(TAIL_SIZE) as *mut SlotTail }
}

/// Free-list links embedded in the payload of a Free slot.
pub(crate) fn links_of(head: *mut SlotHead) -> *mut FreeLinks {
    payload_of(head) as *mut FreeLinks
}

/// Tail of the slot immediately to the left of `head`. Only valid to
/// dereference when `head` is not at a page boundary.
pub(crate) fn left_tail(head: *mut SlotHead) -> *mut SlotTail {
    unsafe { (head as *mut u8).sub(TAIL_SIZE) as *mut SlotTail }
}

/// Whether `addr` sits on a `PAGE_SIZE` boundary — the only way the
/// allocator tells "same page" from "different page" apart.
pub(crate) fn is_page_boundary(addr: *mut SlotHead) -> bool {
    (addr as usize) % PAGE_SIZE == 0
}

/// Reads the first native-width word at `addr` and reports whether it is
/// all-zero — the operational definition of a Dead slot (spec §3).
///
/// # Safety
/// `addr` must point at readable memory at least `HEAD_SIZE` bytes long.
pub(crate) unsafe fn first_word_is_zero(addr: *const u8) -> bool {
    unsafe { *(addr as *const u64) == 0 }
}
