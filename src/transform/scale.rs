use crate::foundation::error::ScaleError;

/// Number of fractional bits in the scale registers.
pub const FRACTION_BITS: u32 = 16;

/// Percentage scale factors are expressed against this source size.
const PERCENT_BASE: u32 = 100;

/// Sampling filter used when scaling a plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Nearest-neighbour sampling.
    #[default]
    Nearest,
    /// Bilinear filtering.
    Bilinear,
}

/// How the scale ratio is expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum ScaleFactor {
    /// Destination size as a percentage of the source (`200` doubles the image).
    Percentage {
        /// Horizontal percentage.
        scale_w: u32,
        /// Vertical percentage.
        scale_h: u32,
    },
    /// Explicit source and destination sizes in pixels.
    Pixels {
        /// Source width.
        src_w: u32,
        /// Source height.
        src_h: u32,
        /// Destination width.
        dst_w: u32,
        /// Destination height.
        dst_h: u32,
    },
}

/// Scale request for one image plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ScaleRequest {
    /// Sampling filter.
    #[serde(default)]
    pub mode: ScaleMode,
    /// Scale ratio.
    pub factor: ScaleFactor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Inverse scale factors (source distance per destination pixel) in Q16.16.
pub struct FixedScale {
    /// Horizontal factor.
    pub x: u32,
    /// Vertical factor.
    pub y: u32,
}

impl FixedScale {
    /// Unscaled (`1.0` on both axes).
    pub const IDENTITY: Self = Self {
        x: 1 << FRACTION_BITS,
        y: 1 << FRACTION_BITS,
    };

    /// Horizontal factor as a real number.
    pub fn x_f64(self) -> f64 {
        fixed_to_f64(self.x)
    }

    /// Vertical factor as a real number.
    pub fn y_f64(self) -> f64 {
        fixed_to_f64(self.y)
    }
}

/// Interpret a Q16.16 register value.
pub fn fixed_to_f64(v: u32) -> f64 {
    f64::from(v) / f64::from(1u32 << FRACTION_BITS)
}

/// Encode `n / d` as an unsigned Q16.16 value.
///
/// The fraction is produced by restoring binary division, one bit per step from bit 15 down to
/// bit 0, so the result is truncated, never rounded.
pub fn encode(n: u32, d: u32) -> Result<u32, ScaleError> {
    if d == 0 {
        return Err(ScaleError::DivideByZero);
    }

    let int = n / d;
    if int > 0xffff {
        return Err(ScaleError::Overflow {
            what: "integer part",
        });
    }

    let mut fixed = int << FRACTION_BITS;
    let d = u64::from(d);
    let mut rem = u64::from(n) % d;

    for bit in (0..FRACTION_BITS).rev() {
        rem <<= 1;
        if rem / d >= 1 {
            fixed |= 1 << bit;
        }
        rem %= d;
    }

    Ok(fixed)
}

/// Encode a plane scale request into per-axis inverse factors.
///
/// Percentages compare against a source of `100`; pixel sizes are both multiplied by `100` so
/// the two conventions share one encoding.
pub fn encode_scale(req: &ScaleRequest) -> Result<FixedScale, ScaleError> {
    let (src_w, src_h, dst_w, dst_h) = match req.factor {
        ScaleFactor::Percentage { scale_w, scale_h } => {
            (PERCENT_BASE, PERCENT_BASE, scale_w, scale_h)
        }
        ScaleFactor::Pixels {
            src_w,
            src_h,
            dst_w,
            dst_h,
        } => (
            percent_units(src_w, "source width")?,
            percent_units(src_h, "source height")?,
            percent_units(dst_w, "destination width")?,
            percent_units(dst_h, "destination height")?,
        ),
    };

    Ok(FixedScale {
        x: encode(src_w, dst_w)?,
        y: encode(src_h, dst_h)?,
    })
}

fn percent_units(px: u32, what: &'static str) -> Result<u32, ScaleError> {
    px.checked_mul(PERCENT_BASE)
        .ok_or(ScaleError::Overflow { what })
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;
