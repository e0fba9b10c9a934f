//! Carton walkthrough: every array operation, the error paths, and the
//! rational type, printed step by step.
//!
//! Demonstrates:
//!   1. Construction from a raw source, a fill value, a copy, a move and a list
//!   2. erase, reserve, assign, push_back, insert and indexed write
//!   3. The three error paths: null source, out-of-range read, refused allocation
//!   4. Rational arithmetic and comparisons
//!
//! Run with:
//!   cargo run --example walkthrough [-- --verbose]
//!
//! `--verbose` enables trace output, which logs every reallocation.

use std::alloc::Layout;
use std::error::Error;
use std::fmt::Display;
use std::ptr::{self, NonNull};

use carton::alloc::AllocResult;
use carton::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// ─── Allocation strategy with a budget ──────────────────────────

/// Refuses any single request above `limit` bytes, otherwise forwards to
/// the global allocator. Stands in for a machine without 10 GiB to spare.
#[derive(Clone, Copy)]
struct Budgeted {
    limit: usize,
}

impl Allocator for Budgeted {
    fn allocate(&self, layout: Layout) -> AllocResult<NonNull<u8>> {
        if layout.size() > self.limit {
            tracing::warn!(bytes = layout.size(), limit = self.limit, "request over budget");
            return Err(AllocError::OutOfMemory {
                requested: layout.size(),
            });
        }
        SystemAllocator.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: every region handed out came from SystemAllocator.
        unsafe { SystemAllocator.deallocate(ptr, layout) }
    }
}

const ONE_GIB: usize = 1 << 30;
// 10 GiB worth of i32.
const TEN_GIB_OF_I32: usize = 2_684_354_560;

// ─── Output helpers ─────────────────────────────────────────────

fn show<T: Display, A: Allocator>(name: &str, array: &DynamicArray<T, A>) {
    println!("\t{array}");
    println!("\t{name}, size = {}, capacity = {}", array.len(), array.capacity());
}

fn rule() {
    println!("{}", "=".repeat(80));
}

// ─── Array ──────────────────────────────────────────────────────

fn array_walkthrough() -> Result<(), Box<dyn Error>> {
    let a = [9, 8, 7, 6, 5, 4, 3, 2, 1];
    println!("v0 constructed from a pointer:");
    // SAFETY: `a` holds a.len() initialised values.
    let v0 = unsafe { DynamicArray::from_raw_parts(a.as_ptr(), a.len())? };
    show("v0", &v0);

    println!("v1 constructed with 10 elements equal to 10:");
    let v1 = DynamicArray::from_elem(10, 10)?;
    show("v1", &v1);

    println!("v2 copied from v1:");
    let mut v2 = v1.try_clone()?;
    show("v2", &v2);

    println!("v3 moved from v2:");
    let v3 = v2.take()?;
    show("v2", &v2);
    show("v3", &v3);

    println!("v4 constructed from a list:");
    let mut v4 = DynamicArray::try_from([11, 20, 40, 100, 135, 341, 900, 1000, 9000, -1, -432])?;
    show("v4", &v4);

    println!("v5 copied from v4:");
    let mut v5 = v4.try_clone()?;
    show("v5", &v5);

    println!("v4: erase(3, 3):");
    v4.erase(3, 3);
    show("v4", &v4);

    println!("reserve 5 elements in v4:");
    v4.reserve(5)?;
    show("v4", &v4);

    println!("assign v1 to v4:");
    v4.assign(&v1)?;
    show("v4", &v4);

    println!("push_back(1337) to v5:");
    v5.push_back(1337)?;
    show("v5", &v5);

    println!("v4.insert_slice(3, v5.data()):");
    v4.insert_slice(3, v5.data())?;
    show("v4", &v4);

    println!("v4.insert(0, 0):");
    v4.insert(0, 0)?;
    show("v4", &v4);

    println!("v4[1] = 432:");
    v4[1] = 432;
    show("v4", &v4);

    println!("push_back() 1000 times to v5:");
    for i in 0..1000 {
        v5.push_back(i)?;
    }
    show("v5", &v5);

    rule();
    println!("errors:");

    print!("try to create an array from a null pointer: ");
    // SAFETY: a null source is rejected before it is read.
    match unsafe { DynamicArray::<i32>::from_raw_parts(ptr::null(), 1) } {
        Ok(_) => println!("unexpectedly succeeded"),
        Err(e) => println!("{e}"),
    }

    print!("try to access an invalid element of v4: ");
    match v4.get(100) {
        Ok(value) => println!("{value}"),
        Err(e) => println!("{e}"),
    }

    print!("try to allocate 10GiB: ");
    let budget = Budgeted { limit: ONE_GIB };
    match DynamicArray::<i32, _>::with_len_in(TEN_GIB_OF_I32, budget) {
        Ok(v6) => println!("allocated {} elements", v6.len()),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

// ─── Rational ───────────────────────────────────────────────────

fn rational_walkthrough() -> Result<(), Box<dyn Error>> {
    type Q = Rational<i8>;

    println!("operations:");
    let mut n = Q::new(94, -64)?;
    println!("{n}");
    n = n.pred()?;
    println!("{n}");
    println!("{}", -n);
    println!("{}", Q::new(3, 1)? + Q::new(1, 1)?);
    println!("{}", Q::new(3, 2)? - Q::new(8, 4)?);
    println!("{}", Q::new(1, 2)? * Q::new(6, 1)?);
    println!("{}", Q::new(1, 2)? / Q::new(6, 1)?);

    println!("\n\ncomparisons:");
    println!("{}", Q::new(1, 2)? == Q::new(6, 1)?);
    println!("{}", Q::new(1, 2)? == Q::new(2, 4)?);
    println!("{}", Q::new(1, 2)? > Q::new(1, 4)?);
    println!("{}", Q::new(-1, -2)? < Q::new(1, 98)?);
    println!("{}", Q::new(1, 3)? >= Q::new(1, 98)?);
    println!("{}", Q::new(1, 3)? <= Q::new(1, 3)?);

    println!("\n\ninvalid rational:");
    if let Err(e) = Q::new(1, 0) {
        println!("error: {e}");
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let verbose = std::env::args().skip(1).any(|arg| arg == "--verbose" || arg == "-v");
    let log_level = if verbose { Level::TRACE } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    array_walkthrough()?;
    rule();
    rational_walkthrough()?;
    Ok(())
}
