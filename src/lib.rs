//! # fitalloc - A Fixed-Capacity First-Fit Memory Allocator
//!
//! This crate provides a simple **first-fit allocator** over a single
//! fixed-size byte arena, with manual allocation and deallocation, in-place
//! splitting of oversized free blocks and forward coalescing of adjacent
//! free blocks.
//!
//! ## Overview
//!
//! ```text
//!   First-Fit Arena Concept:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      ARENA (5000 bytes, fixed)                       │
//!   │                                                                      │
//!   │   ┌───┬──────┬───┬──────┬───┬──────────────────────────────────────┐ │
//!   │   │ H │ used │ H │ free │ H │                free                  │ │
//!   │   └───┴──────┴───┴──────┴───┴──────────────────────────────────────┘ │
//!   │     │          │           │                                         │
//!   │     └──────────┴───────────┴── headers chained in address order      │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   Allocation scans from the head and takes the first free block that is
//!   large enough. Deallocation marks the block free and merges runs of
//!   adjacent free blocks going forward.
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   fitalloc
//!   ├── arena      - ArenaAllocator implementation
//!   ├── block      - Block metadata structure (internal)
//!   └── error      - AllocError taxonomy
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fitalloc::ArenaAllocator;
//!
//! let mut allocator = ArenaAllocator::new();
//! allocator.initialize();
//!
//! let ptr = allocator.allocate(64).expect("arena is empty, this fits");
//!
//! unsafe {
//!     // Use the memory...
//!     ptr.as_ptr().write(42);
//!
//!     // ...and hand it back.
//!     allocator.release(ptr.as_ptr());
//! }
//! ```
//!
//! ## How It Works
//!
//! Every block is a fixed-size header followed by its payload:
//!
//! ```text
//!   Single Block:
//!   ┌───────────────────────┬────────────────────────────────┐
//!   │    Block Header       │         Payload                │
//!   │  ┌─────────────────┐  │                                │
//!   │  │ size: N         │  │  ┌──────────────────────────┐  │
//!   │  │ free flag       │  │  │                          │  │
//!   │  │ next: addr/null │  │  │     N bytes usable       │  │
//!   │  └─────────────────┘  │  │                          │  │
//!   │     HEADER_SIZE       │  └──────────────────────────┘  │
//!   └───────────────────────┴────────────────────────────────┘
//!                           ▲
//!                           └── Pointer returned to the caller,
//!                               exactly HEADER_SIZE bytes after
//!                               the header address
//! ```
//!
//! Splitting a free block that is larger than a request carves it into an
//! occupied front block and a free remainder, spending one header of
//! payload on the new boundary. Merging erases such a boundary again when
//! both sides are free, so a split followed by a release restores the
//! original block exactly.
//!
//! ## Diagnostics
//!
//! Misuse (zero-size requests, invalid or double releases) and exhaustion
//! are reported through the [`log`] facade; install any logger to see
//! them. `allocate` additionally reports its failures through
//! [`AllocError`].
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no synchronization; the allocator is
//!   neither `Send` nor `Sync`
//! - **Fixed capacity**: the arena never grows past its 5000 bytes
//! - **No alignment guarantees**: returned pointers are byte-addressable
//!   only
//! - **No resize**: there is no realloc-style operation
//! - **Forward-only coalescing**: a release never merges into the block
//!   before it until that block is released too
//!
//! ## Safety
//!
//! Allocation is safe; using the returned memory and releasing it are not.
//! [`release`](ArenaAllocator::release) trusts that its argument came from
//! [`allocate`](ArenaAllocator::allocate) and only screens out null and
//! out-of-arena pointers.

mod arena;
mod block;
mod error;

pub use arena::{ARENA_CAPACITY, ArenaAllocator};
pub use block::HEADER_SIZE;
pub use error::AllocError;
