use crate::compile::plan::BlitConfig;
use crate::device::encode::{self, RegisterWrites};
use crate::device::io::RegisterIo;
use crate::device::regs;
use crate::foundation::error::BlitResult;

/// AXI burst length limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum MaxBurstLength {
    /// 2 beats.
    Burst2 = 0,
    /// 4 beats.
    Burst4 = 1,
    /// 8 beats.
    Burst8 = 2,
    /// 16 beats.
    #[default]
    Burst16 = 3,
}

/// One line of a register dump: four consecutive words starting at `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterRow {
    /// Offset of the first word.
    pub offset: u32,
    /// Register values.
    pub words: [u32; 4],
}

/// Driver for one accelerator register space.
///
/// Every access takes `&mut self`; sharing one device between threads needs outside locking.
#[derive(Debug)]
pub struct Accelerator<R: RegisterIo> {
    io: R,
}

impl<R: RegisterIo> Accelerator<R> {
    /// Wrap a register space.
    pub fn new(io: R) -> Self {
        Self { io }
    }

    /// Borrow the register space.
    pub fn io(&self) -> &R {
        &self.io
    }

    /// Mutably borrow the register space.
    pub fn io_mut(&mut self) -> &mut R {
        &mut self.io
    }

    /// Release the register space.
    pub fn into_inner(self) -> R {
        self.io
    }

    fn read(&mut self, offset: u32) -> BlitResult<u32> {
        self.io.read_register(offset)
    }

    fn write(&mut self, offset: u32, value: u32) -> BlitResult<()> {
        self.io.write_register(offset, value)
    }

    fn set_bits(&mut self, offset: u32, bits: u32) -> BlitResult<()> {
        let value = self.read(offset)?;
        self.write(offset, value | bits)
    }

    fn flush(&mut self, writes: RegisterWrites) -> BlitResult<()> {
        for w in writes {
            self.write(w.offset, w.value)?;
        }
        Ok(())
    }

    /// Clear the special function registers and the blend function.
    pub fn reset(&mut self) -> BlitResult<()> {
        tracing::debug!("accelerator reset");
        self.write(regs::SOFT_RESET, regs::SFR_CLEAR)?;
        self.write(regs::BLEND_FUNCTION, 0)
    }

    /// Enable the blit-done interrupt.
    pub fn enable_irq(&mut self) -> BlitResult<()> {
        self.write(regs::INTEN, regs::BLIT_INT_ENABLE)
    }

    /// Disable all interrupts.
    pub fn disable_irq(&mut self) -> BlitResult<()> {
        self.write(regs::INTEN, 0)
    }

    /// Acknowledge a pending blit-done interrupt.
    pub fn clear_irq(&mut self) -> BlitResult<()> {
        self.write(regs::INTC_PEND, regs::BLIT_INT_FLAG)
    }

    /// Return `true` when the blit-done interrupt is pending.
    pub fn is_blit_done(&mut self) -> BlitResult<bool> {
        Ok(self.read(regs::INTC_PEND)? & regs::BLIT_INT_FLAG != 0)
    }

    /// Return `true` when the FIFO reports the blit finished.
    ///
    /// The status register is read twice; only the second read is trusted.
    pub fn blit_done_status(&mut self) -> BlitResult<bool> {
        let _ = self.read(regs::FIFO_STAT)?;
        let status = self.read(regs::FIFO_STAT)?;
        Ok(status & regs::BLIT_FINISHED != 0)
    }

    /// Kick off the programmed blit.
    pub fn start_blit(&mut self) -> BlitResult<()> {
        tracing::debug!("start blit");
        self.write(regs::BITBLT_START, regs::START_BITBLT)
    }

    /// Set the AXI burst length, preserving the other AXI mode bits.
    pub fn set_max_burst_length(&mut self, len: MaxBurstLength) -> BlitResult<()> {
        let mut value = self.read(regs::AXI_MODE)?;
        value &= !regs::MAX_BURST_LEN_MASK;
        value |= (len as u32) << regs::MAX_BURST_LEN_SHIFT;
        self.write(regs::AXI_MODE, value)
    }

    /// Program every register a compiled blit needs. Does not start the blit.
    ///
    /// Command, rotate and direction bits are OR-ed into their registers, so the register space
    /// is expected to be freshly [`reset`](Self::reset).
    ///
    /// Only the main pass is programmed; when [`BlitConfig::requires_two_pass`] is set the caller
    /// has already run the global-alpha pre-pass into the source.
    #[tracing::instrument(skip_all, fields(op = ?cfg.op))]
    pub fn program(&mut self, cfg: &BlitConfig) -> BlitResult<()> {
        if let Some(color) = cfg.fill_color {
            self.write(regs::BITBLT_COMMAND, regs::SOLID_FILL)?;
            self.write(regs::SF_COLOR, color)?;
            self.flush(encode::destination_writes(&cfg.dst, cfg.a8_rgb_color))?;
            if let Some(clip) = cfg.clip {
                self.set_bits(regs::BITBLT_COMMAND, regs::ENABLE_CW)?;
                self.flush(encode::clip_writes(clip))?;
            }
            tracing::debug!("programmed solid fill 0x{color:08x}");
            return Ok(());
        }

        if let Some(src) = &cfg.src {
            self.flush(encode::source_writes(src, cfg.a8_rgb_color))?;
        }
        self.flush(encode::destination_writes(&cfg.dst, cfg.a8_rgb_color))?;
        if let Some(msk) = &cfg.msk {
            self.flush(encode::mask_writes(msk, cfg.mask_operation))?;
        }

        self.set_bits(regs::BITBLT_COMMAND, encode::command_bits(cfg))?;
        self.flush(encode::auxiliary_writes(cfg))?;

        if let Some(word) = encode::blend_function_word(&cfg.blend, cfg.alpha_operation) {
            self.write(regs::BLEND_FUNCTION, word)?;
            let round = self.read(regs::ROUND_MODE)?;
            self.write(regs::ROUND_MODE, encode::merge_round_mode(round, cfg.round))?;
        }

        let direction = encode::direction_bits(cfg.addressing);
        if direction != 0 {
            self.set_bits(regs::DST_PAT_DIRECT, direction)?;
        }
        let rotate = encode::rotate_bits(cfg.addressing);
        if rotate != 0 {
            self.set_bits(regs::ROTATE, rotate)?;
        }

        tracing::debug!(
            two_pass = cfg.requires_two_pass(),
            blending = cfg.blend.is_blending(),
            "programmed blit"
        );
        Ok(())
    }

    /// Read every register in the dump windows, log them, and return them as rows.
    pub fn dump_regs(&mut self) -> BlitResult<Vec<RegisterRow>> {
        let mut rows = Vec::new();
        for (start, end) in regs::DUMP_WINDOWS {
            let mut offset = start;
            while offset < end {
                let mut words = [0u32; 4];
                for (i, word) in (0u32..).zip(words.iter_mut()) {
                    *word = self.read(offset + i * 4)?;
                }
                tracing::info!(
                    "[0x{offset:04x}] 0x{:08x} 0x{:08x} 0x{:08x} 0x{:08x}",
                    words[0],
                    words[1],
                    words[2],
                    words[3]
                );
                rows.push(RegisterRow { offset, words });
                offset += 0x10;
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/device/accel.rs"]
mod tests;
