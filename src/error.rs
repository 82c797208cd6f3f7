use thiserror::Error;

/// An error that can occur when operating on the arena.
///
/// Every condition is recovered locally: `allocate` reports its failures
/// through `Result`, while `release` and the coalescing pass only emit a
/// diagnostic and leave the arena untouched (beyond a defensive merge on
/// a double release).
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum AllocError {
  #[error("zero-size allocation request")]
  ZeroSizeRequest,
  #[error("not enough free space in the arena")]
  OutOfSpace,
  #[error("pointer is null or outside the arena")]
  InvalidPointer,
  #[error("block is already free")]
  DoubleRelease,
  #[error("arena has no blocks")]
  UninitializedAccess,
}
