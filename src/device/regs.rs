//! Register offsets and bit fields of the 2D accelerator.
#![allow(missing_docs)]

// general
pub const SOFT_RESET: u32 = 0x0000;
pub const INTEN: u32 = 0x0004;
pub const INTC_PEND: u32 = 0x000c;
pub const FIFO_STAT: u32 = 0x0010;
pub const AXI_MODE: u32 = 0x001c;

// commands
pub const BITBLT_START: u32 = 0x0100;
pub const BITBLT_COMMAND: u32 = 0x0104;
pub const BLEND_FUNCTION: u32 = 0x0108;
pub const ROUND_MODE: u32 = 0x010c;

// rotation and direction
pub const ROTATE: u32 = 0x0200;
pub const SRC_MSK_DIRECT: u32 = 0x0204;
pub const DST_PAT_DIRECT: u32 = 0x0208;

// source
pub const SRC_SELECT: u32 = 0x0300;
pub const SRC_BASE_ADDR: u32 = 0x0304;
pub const SRC_STRIDE: u32 = 0x0308;
pub const SRC_COLOR_MODE: u32 = 0x030c;
pub const SRC_LEFT_TOP: u32 = 0x0310;
pub const SRC_RIGHT_BOTTOM: u32 = 0x0314;
pub const SRC_PLANE2_BASE_ADDR: u32 = 0x0318;
pub const SRC_REPEAT_MODE: u32 = 0x031c;
pub const SRC_PAD_VALUE: u32 = 0x0320;
pub const SRC_A8_RGB_EXT: u32 = 0x0324;
pub const SRC_SCALE_CTRL: u32 = 0x0328;
pub const SRC_XSCALE: u32 = 0x032c;
pub const SRC_YSCALE: u32 = 0x0330;

// destination
pub const DST_SELECT: u32 = 0x0400;
pub const DST_BASE_ADDR: u32 = 0x0404;
pub const DST_STRIDE: u32 = 0x0408;
pub const DST_COLOR_MODE: u32 = 0x040c;
pub const DST_LEFT_TOP: u32 = 0x0410;
pub const DST_RIGHT_BOTTOM: u32 = 0x0414;
pub const DST_PLANE2_BASE_ADDR: u32 = 0x0418;
pub const DST_A8_RGB_EXT: u32 = 0x041c;

// mask
pub const MSK_BASE_ADDR: u32 = 0x0520;
pub const MSK_STRIDE: u32 = 0x0524;
pub const MSK_LEFT_TOP: u32 = 0x0528;
pub const MSK_RIGHT_BOTTOM: u32 = 0x052c;
pub const MSK_MODE: u32 = 0x0530;
pub const MSK_REPEAT_MODE: u32 = 0x0534;
pub const MSK_PAD_VALUE: u32 = 0x0538;
pub const MSK_SCALE_CTRL: u32 = 0x053c;
pub const MSK_XSCALE: u32 = 0x0540;
pub const MSK_YSCALE: u32 = 0x0544;

// clip, alpha and color
pub const CW_LEFT_TOP: u32 = 0x0600;
pub const CW_RIGHT_BOTTOM: u32 = 0x0604;
pub const ALPHA: u32 = 0x0618;
pub const FG_COLOR: u32 = 0x0700;
pub const BG_COLOR: u32 = 0x0704;
pub const BS_COLOR: u32 = 0x0708;
pub const SF_COLOR: u32 = 0x070c;

/// `[start, end)` windows covered by a register dump.
pub const DUMP_WINDOWS: [(u32, u32); 8] = [
    (0x0000, 0x0030), // general
    (0x0080, 0x00a0), // host dma
    (0x0100, 0x0110), // commands
    (0x0200, 0x0210), // rotation and direction
    (0x0300, 0x0340), // source
    (0x0400, 0x0420), // destination
    (0x0500, 0x0550), // pattern and mask
    (0x0600, 0x0710), // clip, rop, alpha and color
];

// SOFT_RESET
pub const SFR_CLEAR: u32 = 1 << 1;

// INTEN / INTC_PEND / FIFO_STAT
pub const BLIT_INT_ENABLE: u32 = 1 << 0;
pub const BLIT_INT_FLAG: u32 = 1 << 0;
pub const BLIT_FINISHED: u32 = 1 << 0;

// AXI_MODE
pub const MAX_BURST_LEN_SHIFT: u32 = 24;
pub const MAX_BURST_LEN_MASK: u32 = 0x3 << MAX_BURST_LEN_SHIFT;

// BITBLT_START
pub const START_BITBLT: u32 = 1 << 0;

// BITBLT_COMMAND
pub const SOLID_FILL: u32 = 1 << 28;
pub const DST_WR_DEPREMULT: u32 = 1 << 27;
pub const DST_RD_PREMULT: u32 = 1 << 26;
pub const SRC_PREMULT: u32 = 1 << 24;
pub const PREMULT_ALL: u32 = 0xf << 24;
pub const ALPHA_BLEND_MODE: u32 = 1 << 20;
pub const TRANSP_MODE: u32 = 1 << 12;
pub const BLUSCR_MODE: u32 = 2 << 12;
pub const ENABLE_CW: u32 = 1 << 8;
pub const ENABLE_DITHER: u32 = 1 << 3;
pub const ENABLE_NORMAL_MSK: u32 = 1 << 0;

// BLEND_FUNCTION
pub const SRC_COEFF_SHIFT: u32 = 0;
pub const SRC_COEFF_SA_SHIFT: u32 = 4;
pub const SRC_COEFF_DA_SHIFT: u32 = 6;
pub const INV_SRC_COEFF: u32 = 1 << 8;
pub const DST_COEFF_SHIFT: u32 = 16;
pub const DST_COEFF_DA_SHIFT: u32 = 20;
pub const DST_COEFF_SA_SHIFT: u32 = 22;
pub const INV_DST_COEFF: u32 = 1 << 24;
pub const LIGHTEN: u32 = 1 << 26;
pub const DARKEN: u32 = 1 << 27;

// ROUND_MODE
pub const BLEND_ROUND_SHIFT: u32 = 0;
pub const BLEND_ROUND_MASK: u32 = 0x3 << BLEND_ROUND_SHIFT;
pub const PREMULT_ROUND_SHIFT: u32 = 4;
pub const PREMULT_ROUND_MASK: u32 = 0x3 << PREMULT_ROUND_SHIFT;

// ROTATE
pub const SRC_ROTATE_90: u32 = 1 << 0;
pub const PAT_ROTATE_90: u32 = 1 << 4;
pub const MSK_ROTATE_90: u32 = 1 << 8;

// DST_PAT_DIRECT
pub const DST_X_DIR_NEGATIVE: u32 = 1 << 0;
pub const DST_Y_DIR_NEGATIVE: u32 = 1 << 1;

// SRC_SELECT / DST_SELECT
pub const IMAGE_TYPE_MEMORY: u32 = 0;
pub const IMAGE_TYPE_FGCOLOR: u32 = 1;
pub const IMAGE_TYPE_BGCOLOR: u32 = 2;

// *_COLOR_MODE
pub const COLOR_FORMAT_SHIFT: u32 = 0;
pub const RGB_ORDER_SHIFT: u32 = 4;
pub const YCBCR_2PLANE: u32 = 1 << 8;
pub const YCBCR_ORDER_SHIFT: u32 = 12;

// MSK_MODE
pub const MSK_FORMAT_SHIFT: u32 = 0;
pub const MSK_ORDER_SHIFT: u32 = 4;
pub const MSK_TYPE_ALPHA: u32 = 0;
pub const MSK_TYPE_ARGB: u32 = 1 << 8;
pub const MSK_TYPE_MIXED: u32 = 2 << 8;

// *_REPEAT_MODE
pub const REPEAT_NORMAL: u32 = 0;
pub const REPEAT_PAD: u32 = 1;
pub const REPEAT_REFLECT: u32 = 2;
pub const REPEAT_CLAMP: u32 = 3;
pub const REPEAT_NONE: u32 = 4;

// *_SCALE_CTRL
pub const SCALE_MODE_NEAREST: u32 = 0;
pub const SCALE_MODE_BILINEAR: u32 = 1;

/// Stride registers hold 16 bits.
pub const fn stride(bytes: u32) -> u32 {
    bytes & 0xffff
}
