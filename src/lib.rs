//! blitcfg compiles declarative 2D blit requests into the register configuration of a
//! fixed-function blit accelerator.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`BlitRequest`] names the operator, global alpha, planes, rotation and
//!    toggles (usually loaded from JSON via [`BlitRequest::from_json_str`]).
//! 2. **Compile**: [`compile`] resolves the blend coefficients, encodes scale factors as Q16.16
//!    and maps the rotation onto the rotate-90 primitive plus axis reversal, producing a
//!    [`BlitConfig`].
//! 3. **Program**: [`Accelerator::program`] lowers the config into register writes through an
//!    injected [`RegisterIo`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure compilation**: resolving, encoding and mapping read only `static` tables and never
//!   touch a device.
//! - **Explicit two-pass**: operators the global-alpha table cannot fold are reported through
//!   [`BlitConfig::requires_two_pass`] instead of being silently mis-blended.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blend;
mod compile;
mod foundation;
mod request;
mod transform;

/// Register map and pure register-word encoders of the accelerator.
pub mod device;

pub use blend::op::{BlendCoefficient, BlitOperator, CoefficientPair};
pub use blend::resolve::{BlendFunction, OPAQUE_ALPHA, ResolvedBlend, resolve};
pub use compile::compiler::{compile, compile_default};
pub use compile::opts::{
    AlphaOperation, BlendRound, CompileOpts, MaskOperation, PremultRound, RoundModes,
};
pub use compile::plan::{BlitConfig, MaskPlane, PlaneScale, SourcePlane};
pub use device::accel::{Accelerator, MaxBurstLength, RegisterRow};
pub use device::io::{MemRegisters, RegisterIo};
pub use foundation::core::Rect;
pub use foundation::error::{BlendError, BlitError, BlitResult, ScaleError};
pub use request::model::{
    BlitRequest, ChannelOrder, ChromaOrder, ColorFormat, ColorKey, ImageDesc, ImageSource,
    MaskDesc, MaskFormat, PackedYCbCrOrder, PremultFlags, Repeat, RgbOrder, SourceDesc,
};
pub use transform::rotation::{Addressing, AddressingPlan, Rotation, map_rotation};
pub use transform::scale::{
    FRACTION_BITS, FixedScale, ScaleFactor, ScaleMode, ScaleRequest, encode, encode_scale,
    fixed_to_f64,
};
