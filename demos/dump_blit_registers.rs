//! Compile a blit request from JSON, program it into an in-memory register file and dump it.
//!
//! Usage: `cargo run --example dump_blit_registers -- [request.json]`

use anyhow::Context;
use blitcfg::{Accelerator, BlitRequest, MemRegisters, compile_default};

const DEFAULT_REQUEST: &str = include_str!("../tests/data/src_over_scaled.json");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let req = match std::env::args().nth(1) {
        Some(path) => BlitRequest::from_path(&path).with_context(|| format!("load {path}"))?,
        None => BlitRequest::from_json_str(DEFAULT_REQUEST)?,
    };
    req.validate()?;

    let cfg = compile_default(&req)?;
    if cfg.requires_two_pass() {
        tracing::warn!(op = ?cfg.op, "operator needs a global-alpha pre-pass; dumping the main pass");
    }

    let mut dev = Accelerator::new(MemRegisters::new());
    dev.reset()?;
    dev.program(&cfg)?;
    let rows = dev.dump_regs()?;

    let touched = rows.iter().filter(|r| r.words.iter().any(|&w| w != 0)).count();
    println!(
        "{} register writes, {touched} of {} dump rows non-zero",
        dev.io().writes().len(),
        rows.len()
    );
    Ok(())
}
