//! Item processor: normalize, order, emit

use std::io::{self, Write};

use tracing::debug;

/// Label written before every emitted item
pub const LINE_LABEL: &str = "Processed item: ";

/// Render a single output line, without the trailing newline
pub fn format_line(item: &str) -> String {
    format!("{}{}", LINE_LABEL, item)
}

/// Owns a list of items and runs them through lowercase, sort and print
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Processor {
    items: Vec<String>,
}

impl Processor {
    /// Create a processor holding an owned copy of `items`, in input order
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Current items
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Lowercase every item in place.
    ///
    /// Only ASCII letters are folded; every other character is left as is.
    pub fn normalize(&mut self) {
        for item in &mut self.items {
            item.make_ascii_lowercase();
        }
        debug!(count = self.items.len(), "normalized items");
    }

    /// Sort items ascending by byte-wise string comparison
    pub fn order(&mut self) {
        self.items.sort_unstable();
        debug!(count = self.items.len(), "ordered items");
    }

    /// Write one labelled line per item, in current order
    pub fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{}", format_line(item))?;
        }
        out.flush()?;
        debug!(count = self.items.len(), "emitted items");
        Ok(())
    }

    /// Normalize, order, then emit to `out`
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.normalize();
        self.order();
        self.emit_to(out)
    }

    /// Normalize, order, then emit to standard output
    pub fn run(&mut self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }
}
