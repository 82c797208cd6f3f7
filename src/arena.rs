use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

use log::{debug, warn};

use crate::block::{Block, BlockPtr, HEADER_SIZE};
use crate::error::AllocError;

/// Total capacity of the arena in bytes, headers included.
pub const ARENA_CAPACITY: usize = 5000;

/// A fixed-capacity first-fit allocator over a single byte arena.
///
/// Block headers live inside the arena itself and tile it completely: the
/// header of block `i + 1` starts exactly `HEADER_SIZE + size(i)` bytes
/// after the header of block `i`, and the last block ends at the arena's
/// end address.
///
/// The allocator is single-threaded by design. It holds raw pointers into
/// its own backing memory and is therefore neither `Send` nor `Sync`;
/// sharing one across threads requires external serialization.
pub struct ArenaAllocator {
  base: NonNull<u8>,
  layout: Layout,
}

impl ArenaAllocator {
  /// Acquires the zeroed backing buffer. No headers are written yet: the
  /// head block reads as zero-sized, which `allocate` treats as the cue to
  /// initialize lazily.
  pub fn new() -> Self {
    let layout = Layout::array::<u8>(ARENA_CAPACITY).unwrap();
    let base = match NonNull::new(unsafe { alloc::alloc_zeroed(layout) }) {
      Some(base) => base,
      None => alloc::handle_alloc_error(layout),
    };

    Self { base, layout }
  }

  /// Resets the arena to a single free block spanning the whole capacity
  /// minus one header.
  ///
  /// Call exactly once before use (or let the first `allocate` do it).
  /// Re-initializing an arena with live allocations silently abandons
  /// them; nothing guards against that.
  pub fn initialize(&mut self) {
    let head = Block::new(ARENA_CAPACITY - HEADER_SIZE, true, ptr::null_mut());

    unsafe { self.head().store(head) };
  }

  /// Whether `ptr` lies within the arena.
  ///
  /// The end address is deliberately inclusive: one past the last arena
  /// byte still reports in bounds. This matches the original design and is
  /// kept as a compatibility choice; callers use it to screen slots before
  /// releasing them.
  pub fn in_bounds(
    &self,
    ptr: *const u8,
  ) -> bool {
    let base = self.base.as_ptr() as usize;
    let addr = ptr as usize;

    base <= addr && addr <= base + ARENA_CAPACITY
  }

  /// Hands out a payload of exactly `size` bytes from the first free block
  /// large enough to hold it.
  ///
  /// The scan starts at the head block on every call. An oversized block is
  /// split when the remainder can host another header plus at least one
  /// payload byte; a block that fits but cannot host the remainder is
  /// rejected as out of space rather than handed out oversized.
  ///
  /// Returned pointers are byte-addressable only: no alignment guarantee.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> Result<NonNull<u8>, AllocError> {
    if size == 0 {
      warn!("allocate: {}", AllocError::ZeroSizeRequest);
      return Err(AllocError::ZeroSizeRequest);
    }

    unsafe {
      if self.head().load().size == 0 {
        self.initialize();
      }

      let mut current = self.head();
      let block = loop {
        let block = current.load();
        if block.is_free() && block.size >= size {
          break block;
        }
        if !self.in_bounds(block.next) {
          warn!("allocate({size}): {}", AllocError::OutOfSpace);
          return Err(AllocError::OutOfSpace);
        }
        current = BlockPtr::new(block.next);
      };

      if block.size == size {
        current.store(Block::new(block.size, false, block.next));
        debug!("allocate({size}): exact fit at {:?}", current.payload());
      } else if block.size > size + HEADER_SIZE {
        self.split(current, size);
        debug!("allocate({size}): split at {:?}", current.payload());
      } else {
        warn!("allocate({size}): {}", AllocError::OutOfSpace);
        return Err(AllocError::OutOfSpace);
      }

      Ok(NonNull::new_unchecked(current.payload()))
    }
  }

  /// Carves `at` (free, with payload strictly larger than
  /// `size + HEADER_SIZE`) into an occupied front block of payload `size`
  /// and a free remainder.
  ///
  /// The remainder's header consumes `HEADER_SIZE` bytes that were payload;
  /// a later merge reclaims them by erasing the boundary again.
  unsafe fn split(
    &mut self,
    at: BlockPtr,
    size: usize,
  ) {
    unsafe {
      let old = at.load();
      let carved = BlockPtr::new(at.payload().wrapping_add(size));

      carved.store(Block::new(old.size - size - HEADER_SIZE, true, old.next));
      at.store(Block::new(size, false, carved.addr()));
    }
  }

  /// Returns a payload to the arena and coalesces adjacent free blocks.
  ///
  /// A null or out-of-arena pointer is rejected with a diagnostic and no
  /// state change. Releasing an already-free block is reported as a double
  /// release; the coalescing pass still runs, so the call is harmless.
  ///
  /// # Safety
  ///
  /// `ptr` must be null, outside the arena, or a payload pointer obtained
  /// from [`allocate`](Self::allocate) on this allocator.
  pub unsafe fn release(
    &mut self,
    ptr: *mut u8,
  ) {
    if ptr.is_null() {
      warn!("release: {}", AllocError::InvalidPointer);
      return;
    }
    if !self.in_bounds(ptr) {
      warn!("release({ptr:?}): {}", AllocError::InvalidPointer);
      return;
    }

    unsafe {
      let header = BlockPtr::from_payload(ptr);
      let block = header.load();

      if block.is_free() {
        warn!("release({ptr:?}): {}", AllocError::DoubleRelease);
        self.merge();
        return;
      }

      header.store(Block::new(block.size, true, block.next));
      self.merge();
      debug!("release({ptr:?}): block freed");
    }
  }

  /// Full forward coalescing pass from the head.
  ///
  /// At each position, absorbs the successor while both blocks are free,
  /// then advances. Afterwards no two address-adjacent blocks are both
  /// free.
  unsafe fn merge(&mut self) {
    unsafe {
      if self.head().load().size == 0 {
        warn!("merge: {}", AllocError::UninitializedAccess);
        return;
      }

      let mut cursor = self.base.as_ptr();
      while self.in_bounds(cursor) {
        let current = BlockPtr::new(cursor);
        let block = current.load();

        if block.is_free() && self.in_bounds(block.next) {
          let successor = BlockPtr::new(block.next).load();
          if successor.is_free() {
            let merged = block.size + successor.size + HEADER_SIZE;
            current.store(Block::new(merged, true, successor.next));
            continue;
          }
        }

        cursor = block.next;
      }
    }
  }

  fn head(&self) -> BlockPtr {
    BlockPtr::new(self.base.as_ptr())
  }

  /// Snapshot of the chain as (payload size, free) pairs, in address order.
  #[cfg(test)]
  fn blocks(&self) -> Vec<(usize, bool)> {
    let mut chain = Vec::new();
    let mut cursor = self.base.as_ptr();

    while self.in_bounds(cursor) {
      let block = unsafe { BlockPtr::new(cursor).load() };
      chain.push((block.size, block.is_free()));
      cursor = block.next;
    }

    chain
  }
}

impl Drop for ArenaAllocator {
  fn drop(&mut self) {
    unsafe { alloc::dealloc(self.base.as_ptr(), self.layout) }
  }
}
