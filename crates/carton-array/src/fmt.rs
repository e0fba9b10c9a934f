//! Diagnostic rendering of array contents.

use std::fmt;
use std::io::{self, Write};

use carton_alloc::Allocator;

use crate::array::DynamicArray;

/// Renders every live element followed by `"; "`, e.g. `"1; 2; 3; "`.
impl<T: fmt::Display, A: Allocator> fmt::Display for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.data() {
            write!(f, "{value}; ")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for DynamicArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data()).finish()
    }
}

impl<T: fmt::Display, A: Allocator> DynamicArray<T, A> {
    /// Write the [`Display`](fmt::Display) rendering and a newline to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Write the contents and a newline to standard output.
    ///
    /// Write errors are ignored; this is a diagnostic aid.
    pub fn print(&self) {
        let stdout = io::stdout();
        let _ = self.write_to(&mut stdout.lock());
    }
}
