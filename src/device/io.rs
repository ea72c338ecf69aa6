use crate::foundation::error::{BlitError, BlitResult};
use std::collections::BTreeMap;

/// 32-bit register access to one accelerator instance.
///
/// Offsets are byte offsets from the register base and must be word aligned.
pub trait RegisterIo {
    /// Read the register at `offset`.
    fn read_register(&mut self, offset: u32) -> BlitResult<u32>;
    /// Write `value` to the register at `offset`.
    fn write_register(&mut self, offset: u32, value: u32) -> BlitResult<()>;
}

impl<R: RegisterIo + ?Sized> RegisterIo for &mut R {
    fn read_register(&mut self, offset: u32) -> BlitResult<u32> {
        (**self).read_register(offset)
    }

    fn write_register(&mut self, offset: u32, value: u32) -> BlitResult<()> {
        (**self).write_register(offset, value)
    }
}

/// In-memory register file for tests and dry runs.
///
/// Unwritten registers read as zero. Every access is logged in order.
#[derive(Debug, Default, Clone)]
pub struct MemRegisters {
    values: BTreeMap<u32, u32>,
    writes: Vec<(u32, u32)>,
    reads: Vec<u32>,
}

impl MemRegisters {
    /// Create an all-zero register file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a register without logging a write, e.g. to model hardware status bits.
    pub fn preset(&mut self, offset: u32, value: u32) {
        self.values.insert(offset, value);
    }

    /// Current value of a register.
    pub fn value(&self, offset: u32) -> u32 {
        self.values.get(&offset).copied().unwrap_or(0)
    }

    /// Writes in issue order.
    pub fn writes(&self) -> &[(u32, u32)] {
        &self.writes
    }

    /// Offsets read, in issue order.
    pub fn reads(&self) -> &[u32] {
        &self.reads
    }

    /// Values written to `offset`, in issue order.
    pub fn writes_to(&self, offset: u32) -> impl Iterator<Item = u32> + '_ {
        self.writes
            .iter()
            .filter(move |(o, _)| *o == offset)
            .map(|(_, v)| *v)
    }

    /// Forget logged accesses, keeping register values.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.reads.clear();
    }

    fn check_aligned(offset: u32) -> BlitResult<()> {
        if offset % 4 != 0 {
            return Err(BlitError::device(format!(
                "unaligned register offset 0x{offset:04x}"
            )));
        }
        Ok(())
    }
}

impl RegisterIo for MemRegisters {
    fn read_register(&mut self, offset: u32) -> BlitResult<u32> {
        Self::check_aligned(offset)?;
        self.reads.push(offset);
        Ok(self.value(offset))
    }

    fn write_register(&mut self, offset: u32, value: u32) -> BlitResult<()> {
        Self::check_aligned(offset)?;
        self.values.insert(offset, value);
        self.writes.push((offset, value));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/device/io.rs"]
mod tests;
