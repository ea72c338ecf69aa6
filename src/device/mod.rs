pub(crate) mod accel;
pub mod encode;
pub(crate) mod io;
pub mod regs;
