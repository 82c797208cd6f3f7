use std::ptr;

use fitalloc::{ARENA_CAPACITY, ArenaAllocator, HEADER_SIZE};

/// Forwards the allocator's diagnostics to stderr so the rejection paths
/// below are visible.
struct StderrLogger;

impl log::Log for StderrLogger {
  fn enabled(&self, _metadata: &log::Metadata) -> bool {
    true
  }

  fn log(&self, record: &log::Record) {
    eprintln!("[{}] {}", record.level(), record.args());
  }

  fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
  log::set_logger(&LOGGER).expect("no other logger is installed");
  log::set_max_level(log::LevelFilter::Debug);

  // One arena for the whole process, constructed explicitly.
  let mut allocator = ArenaAllocator::new();
  allocator.initialize();
  println!(
    "Arena ready: {} bytes capacity, {} bytes per header, {} bytes usable up front",
    ARENA_CAPACITY,
    HEADER_SIZE,
    ARENA_CAPACITY - HEADER_SIZE
  );

  unsafe {
    // --------------------------------------------------------------------
    // 1) Allocate 4 bytes and use them.
    // --------------------------------------------------------------------
    let first = allocator.allocate(4).unwrap();
    println!("\n[1] allocate(4) -> {:?}", first);

    first.as_ptr().cast::<u32>().write_unaligned(0xDEADBEEF);
    println!(
      "[1] wrote 0x{:X} through the payload pointer",
      first.as_ptr().cast::<u32>().read_unaligned()
    );

    // --------------------------------------------------------------------
    // 2) A second allocation lands right behind the first block.
    // --------------------------------------------------------------------
    let second = allocator.allocate(12).unwrap();
    println!("\n[2] allocate(12) -> {:?}", second);
    println!(
      "[2] distance from first payload = {} bytes (4 payload + {} header)",
      second.as_ptr() as usize - first.as_ptr() as usize,
      HEADER_SIZE
    );

    // --------------------------------------------------------------------
    // 3) Release the first block and allocate again: first-fit hands the
    //    same address back.
    // --------------------------------------------------------------------
    allocator.release(first.as_ptr());
    println!("\n[3] released the first block");

    let reused = allocator.allocate(4).unwrap();
    println!(
      "[3] allocate(4) -> {:?} ({})",
      reused,
      if reused == first {
        "reused the freed block"
      } else {
        "allocated somewhere else"
      }
    );

    // --------------------------------------------------------------------
    // 4) Exhaust the arena: a request larger than the remaining free
    //    space is rejected and the arena is left unchanged.
    // --------------------------------------------------------------------
    println!("\n[4] allocate({ARENA_CAPACITY}) in a nearly full arena:");
    let too_big = allocator.allocate(ARENA_CAPACITY);
    println!("[4] -> {:?}", too_big);

    // --------------------------------------------------------------------
    // 5) The rejection paths, each reported as a diagnostic only.
    // --------------------------------------------------------------------
    println!("\n[5] allocate(0):");
    let zero = allocator.allocate(0);
    println!("[5] -> {:?}", zero);

    println!("\n[5] release(null):");
    allocator.release(ptr::null_mut());

    println!("\n[5] release of an address outside the arena:");
    allocator.release((&mut 0u8) as *mut u8);

    println!("\n[5] releasing the same block twice:");
    allocator.release(reused.as_ptr());
    allocator.release(reused.as_ptr());

    // --------------------------------------------------------------------
    // 6) Final cleanup: after every block is released, the arena is one
    //    free block again, as if freshly initialized.
    // --------------------------------------------------------------------
    allocator.release(second.as_ptr());
    let full = allocator.allocate(ARENA_CAPACITY - HEADER_SIZE).unwrap();
    println!("\n[6] the whole arena is one free block again: {:?}", full);
    allocator.release(full.as_ptr());
  }

  println!("\nDone. The arena is dropped with the allocator.");
}
