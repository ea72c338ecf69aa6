use crate::blend::op::BlitOperator;
use crate::blend::resolve::OPAQUE_ALPHA;
use crate::foundation::core::Rect;
use crate::transform::rotation::Rotation;
use crate::transform::scale::ScaleRequest;
use serde::{Deserialize, Serialize};

/// Where a plane's pixels come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Pixels are read from memory.
    #[default]
    Memory,
    /// Constant foreground color.
    FgColor,
    /// Constant background color.
    BgColor,
}

/// Pixel storage format; discriminants are the color-mode field codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum ColorFormat {
    /// 32-bit, alpha ignored.
    Xrgb8888 = 0,
    /// 32-bit with alpha.
    #[default]
    Argb8888 = 1,
    /// 16-bit 5-6-5.
    Rgb565 = 2,
    /// 16-bit 1-5-5-5, alpha ignored.
    Xrgb1555 = 3,
    /// 16-bit 1-5-5-5.
    Argb1555 = 4,
    /// 16-bit 4-4-4-4, alpha ignored.
    Xrgb4444 = 5,
    /// 16-bit 4-4-4-4.
    Argb4444 = 6,
    /// 24-bit packed.
    Packed888 = 7,
    /// YCbCr 4:4:4.
    #[serde(rename = "ycbcr444")]
    YCbCr444 = 8,
    /// YCbCr 4:2:2.
    #[serde(rename = "ycbcr422")]
    YCbCr422 = 9,
    /// YCbCr 4:2:0.
    #[serde(rename = "ycbcr420")]
    YCbCr420 = 10,
    /// 8-bit alpha only; color comes from the A8 extension register.
    A8 = 11,
    /// 8-bit luminance.
    L8 = 12,
}

/// Channel order of RGB formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum RgbOrder {
    /// A-X-R-G-B from the most significant bits.
    #[default]
    Axrgb = 0,
    /// R-G-B-A-X.
    Rgbax = 1,
    /// A-X-B-G-R.
    Axbgr = 2,
    /// B-G-R-A-X.
    Bgrax = 3,
}

/// Sample order of packed single-plane YCbCr 4:2:2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum PackedYCbCrOrder {
    /// Cr-Y1-Cb-Y0.
    CrY1CbY0 = 0,
    /// Cb-Y1-Cr-Y0.
    CbY1CrY0 = 1,
    /// Y1-Cr-Y0-Cb.
    Y1CrY0Cb = 2,
    /// Y1-Cb-Y0-Cr.
    Y1CbY0Cr = 3,
}

/// Chroma order of the second plane of two-plane YCbCr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum ChromaOrder {
    /// Cr before Cb.
    CrCb = 0,
    /// Cb before Cr.
    CbCr = 1,
}

/// Channel layout of an image plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ChannelOrder {
    /// Interleaved RGB(A).
    Rgb {
        /// Channel order.
        order: RgbOrder,
    },
    /// Packed single-plane YCbCr.
    #[serde(rename = "ycbcr_1plane")]
    YCbCr1Plane {
        /// Sample order.
        order: PackedYCbCrOrder,
    },
    /// Luma plane plus a separate interleaved chroma plane.
    #[serde(rename = "ycbcr_2plane")]
    YCbCr2Plane {
        /// Chroma order.
        order: ChromaOrder,
        /// Base address of the chroma plane.
        plane2_addr: u32,
    },
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::Rgb {
            order: RgbOrder::default(),
        }
    }
}

/// A source or destination image plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDesc {
    /// Pixel origin.
    #[serde(default)]
    pub source: ImageSource,
    /// Base bus address.
    #[serde(default)]
    pub addr: u32,
    /// Bytes per row.
    #[serde(default)]
    pub stride: u32,
    /// Storage format.
    #[serde(default)]
    pub format: ColorFormat,
    /// Channel layout.
    #[serde(default)]
    pub order: ChannelOrder,
    /// Region taking part in the blit.
    pub rect: Rect,
}

/// Texel repeat behavior outside the source rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Repeat {
    /// No repeat.
    #[default]
    None,
    /// Tile the image.
    Normal,
    /// Pad with a constant color.
    Pad {
        /// Padding color.
        color: u32,
    },
    /// Mirror at every edge.
    Reflect,
    /// Clamp to the edge texel.
    Clamp,
}

/// Source plane of a blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceDesc {
    /// Image.
    pub image: ImageDesc,
    /// Scaling; `None` copies 1:1.
    #[serde(default)]
    pub scale: Option<ScaleRequest>,
    /// Repeat mode.
    #[serde(default)]
    pub repeat: Repeat,
}

/// Mask storage format; discriminants are the mask-mode field codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum MaskFormat {
    /// 1 bit per pixel.
    Bit1 = 0,
    /// 4 bits per pixel.
    Bit4 = 1,
    /// 8 bits per pixel.
    #[default]
    Bit8 = 2,
    /// 16-bit 5-6-5.
    Rgb565 = 3,
    /// 16-bit 1-5-5-5.
    Argb1555 = 4,
    /// 16-bit 4-4-4-4.
    Argb4444 = 5,
    /// 32-bit 8-8-8-8.
    Argb8888 = 6,
}

impl MaskFormat {
    /// 16 and 32 bit masks carry a mask-type field.
    pub fn is_color_mask(self) -> bool {
        self >= Self::Rgb565
    }
}

/// Mask plane of a blit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskDesc {
    /// Base bus address.
    pub addr: u32,
    /// Bytes per row.
    pub stride: u32,
    /// Storage format.
    #[serde(default)]
    pub format: MaskFormat,
    /// Channel order of color masks.
    #[serde(default)]
    pub order: RgbOrder,
    /// Region taking part in the blit.
    pub rect: Rect,
    /// Scaling; `None` copies 1:1.
    #[serde(default)]
    pub scale: Option<ScaleRequest>,
    /// Repeat mode.
    #[serde(default)]
    pub repeat: Repeat,
}

/// Alpha premultiplication toggles. Each is independent and additive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PremultFlags {
    /// Premultiply every read and depremultiply the destination write.
    #[serde(default)]
    pub all: bool,
    /// Premultiply the source on read.
    #[serde(default)]
    pub src: bool,
    /// Premultiply the destination on read.
    #[serde(default)]
    pub dst_read: bool,
    /// Depremultiply the destination on write.
    #[serde(default)]
    pub dst_write: bool,
}

/// Color keying of the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorKey {
    /// No keying.
    #[default]
    Opaque,
    /// Pixels matching `bs_color` are skipped.
    Transparent {
        /// Key color, `0` keeps the register value.
        #[serde(default)]
        bs_color: u32,
    },
    /// Pixels matching `bs_color` are replaced by `bg_color`.
    Bluescreen {
        /// Key color, `0` keeps the register value.
        #[serde(default)]
        bs_color: u32,
        /// Replacement color, `0` keeps the register value.
        #[serde(default)]
        bg_color: u32,
    },
}

fn opaque_alpha() -> u8 {
    OPAQUE_ALPHA
}

/// A declarative blit request.
///
/// This is the JSON-facing description of one blit. Compile it into a
/// [`crate::BlitConfig`] with [`crate::compile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlitRequest {
    /// Compositing operator.
    pub op: BlitOperator,
    /// Constant alpha applied to the source; `255` disables it.
    #[serde(default = "opaque_alpha")]
    pub global_alpha: u8,
    /// Source plane, unused by fill and clear.
    #[serde(default)]
    pub src: Option<SourceDesc>,
    /// Destination plane.
    pub dst: ImageDesc,
    /// Optional mask plane.
    #[serde(default)]
    pub msk: Option<MaskDesc>,
    /// Rotation applied to source and mask.
    #[serde(default)]
    pub rotation: Rotation,
    /// Premultiplication toggles.
    #[serde(default)]
    pub premultiply: PremultFlags,
    /// Destination clip window.
    #[serde(default)]
    pub clip: Option<Rect>,
    /// Enable dithering.
    #[serde(default)]
    pub dither: bool,
    /// Source color keying.
    #[serde(default)]
    pub color_key: ColorKey,
    /// Solid fill color in destination format.
    #[serde(default)]
    pub fill_color: u32,
    /// Foreground color for `fg_color` planes.
    #[serde(default)]
    pub fg_color: Option<u32>,
    /// Background color for `bg_color` planes.
    #[serde(default)]
    pub bg_color: Option<u32>,
}

impl BlitRequest {
    /// Minimal request: `op` into `dst` with everything else defaulted.
    pub fn new(op: BlitOperator, dst: ImageDesc) -> Self {
        Self {
            op,
            global_alpha: OPAQUE_ALPHA,
            src: None,
            dst,
            msk: None,
            rotation: Rotation::Origin,
            premultiply: PremultFlags::default(),
            clip: None,
            dither: false,
            color_key: ColorKey::Opaque,
            fill_color: 0,
            fg_color: None,
            bg_color: None,
        }
    }
}
