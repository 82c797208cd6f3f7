use std::mem;

/// Size in bytes of the metadata header that precedes every payload.
pub const HEADER_SIZE: usize = mem::size_of::<Block>();

/// Per-block metadata, embedded in the arena right before the payload it
/// describes.
///
/// `next` holds the raw byte address of the next header in address order,
/// or null on the last block. All offsets are byte offsets: a block's
/// payload starts exactly `HEADER_SIZE` bytes after its header.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub(crate) struct Block {
  pub size: usize,
  // A release on a stale pointer reads whatever byte sits here, so the
  // flag is stored as a raw byte: every bit pattern must stay valid.
  free: u8,
  pub next: *mut u8,
}

impl Block {
  pub fn new(
    size: usize,
    is_free: bool,
    next: *mut u8,
  ) -> Self {
    Self {
      size,
      free: is_free as u8,
      next,
    }
  }

  pub fn is_free(&self) -> bool {
    self.free != 0
  }
}

/// Byte-typed pointer to a header inside the arena.
///
/// Splitting places headers at arbitrary byte offsets, so a header is not
/// guaranteed to be aligned for `Block`; every access reads or writes the
/// whole header unaligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockPtr(*mut u8);

impl BlockPtr {
  pub fn new(addr: *mut u8) -> Self {
    Self(addr)
  }

  /// Header of the block whose payload starts at `payload`.
  pub fn from_payload(payload: *mut u8) -> Self {
    Self(payload.wrapping_sub(HEADER_SIZE))
  }

  pub fn addr(self) -> *mut u8 {
    self.0
  }

  /// First payload byte of this block.
  pub fn payload(self) -> *mut u8 {
    self.0.wrapping_add(HEADER_SIZE)
  }

  /// # Safety
  ///
  /// `self` must point at `HEADER_SIZE` readable bytes.
  pub unsafe fn load(self) -> Block {
    unsafe { self.0.cast::<Block>().read_unaligned() }
  }

  /// # Safety
  ///
  /// `self` must point at `HEADER_SIZE` writable bytes.
  pub unsafe fn store(
    self,
    block: Block,
  ) {
    unsafe { self.0.cast::<Block>().write_unaligned(block) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_payload_offset_round_trip() {
    let addr = 0x1000 as *mut u8;
    let header = BlockPtr::new(addr);

    assert_eq!(header.payload() as usize, 0x1000 + HEADER_SIZE);
    assert_eq!(BlockPtr::from_payload(header.payload()), header);
  }

  #[test]
  fn test_free_flag() {
    let free = Block::new(16, true, std::ptr::null_mut());
    let used = Block::new(16, false, std::ptr::null_mut());

    assert!(free.is_free());
    assert!(!used.is_free());
  }
}
