use crate::blend::op::BlitOperator;
use crate::foundation::core::Rect;
use crate::request::model::{BlitRequest, ImageDesc, ImageSource, MaskDesc, SourceDesc};
use crate::transform::scale::{ScaleFactor, ScaleRequest};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestError {
    pub(crate) path: Vec<&'static str>,
    pub(crate) message: String,
}

impl RequestError {
    fn at(path: &[&'static str], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        let mut s = String::from("$");
        for field in &self.path {
            s.push('.');
            s.push_str(field);
        }
        write!(f, "{s}: {}", self.message)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RequestErrors {
    pub(crate) errors: Vec<RequestError>,
}

impl fmt::Display for RequestErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RequestErrors {}

/// Operators that never read the source plane.
fn reads_source(op: BlitOperator) -> bool {
    !matches!(op, BlitOperator::SolidFill | BlitOperator::Clear)
}

pub(crate) fn validate_request(req: &BlitRequest) -> Result<(), RequestErrors> {
    let mut errors = Vec::new();

    check_image(&mut errors, &["dst"], &req.dst);

    match (&req.src, reads_source(req.op)) {
        (Some(src), _) => check_source(&mut errors, src),
        (None, true) => errors.push(RequestError::at(
            &["src"],
            format!("operator {:?} reads a source plane", req.op),
        )),
        (None, false) => {}
    }

    if let Some(msk) = &req.msk {
        check_mask(&mut errors, msk);
    }

    if let Some(clip) = req.clip {
        check_rect(&mut errors, &["clip"], clip);
    }

    let planes = [
        (["src", "image"], req.src.map(|s| s.image.source)),
        (["dst", "source"], Some(req.dst.source)),
    ];
    for (path, plane_source) in planes {
        match plane_source {
            Some(ImageSource::FgColor) if req.fg_color.is_none() => errors.push(
                RequestError::at(&path, "fg_color plane requires a request fg_color"),
            ),
            Some(ImageSource::BgColor) if req.bg_color.is_none() => errors.push(
                RequestError::at(&path, "bg_color plane requires a request bg_color"),
            ),
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RequestErrors { errors })
    }
}

fn check_source(errors: &mut Vec<RequestError>, src: &SourceDesc) {
    check_image(errors, &["src", "image"], &src.image);
    if let Some(scale) = &src.scale {
        check_scale(errors, &["src", "scale"], scale);
    }
}

fn check_mask(errors: &mut Vec<RequestError>, msk: &MaskDesc) {
    check_rect(errors, &["msk", "rect"], msk.rect);
    if msk.stride == 0 {
        errors.push(RequestError::at(&["msk", "stride"], "must be > 0"));
    }
    if let Some(scale) = &msk.scale {
        check_scale(errors, &["msk", "scale"], scale);
    }
}

fn check_image(errors: &mut Vec<RequestError>, path: &[&'static str], img: &ImageDesc) {
    let mut p = path.to_vec();
    p.push("rect");
    check_rect(errors, &p, img.rect);

    if img.source == ImageSource::Memory && img.stride == 0 {
        p.pop();
        p.push("stride");
        errors.push(RequestError::at(&p, "memory planes need stride > 0"));
    }
}

fn check_rect(errors: &mut Vec<RequestError>, path: &[&'static str], rect: Rect) {
    if rect.is_empty() {
        errors.push(RequestError::at(path, "rectangle must cover at least one pixel"));
    }
    if !rect.fits_coordinate_fields() {
        errors.push(RequestError::at(path, "coordinates must be <= 65535"));
    }
}

fn check_scale(errors: &mut Vec<RequestError>, path: &[&'static str], scale: &ScaleRequest) {
    let has_zero = match scale.factor {
        ScaleFactor::Percentage { scale_w, scale_h } => scale_w == 0 || scale_h == 0,
        ScaleFactor::Pixels {
            src_w,
            src_h,
            dst_w,
            dst_h,
        } => [src_w, src_h, dst_w, dst_h].contains(&0),
    };
    if has_zero {
        errors.push(RequestError::at(path, "scale dimensions must be > 0"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/request/validate.rs"]
mod tests;
