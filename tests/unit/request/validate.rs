use super::*;
use crate::request::model::{ColorFormat, MaskFormat, Repeat};
use crate::transform::scale::ScaleMode;

fn image(w: u32, h: u32) -> ImageDesc {
    ImageDesc {
        source: ImageSource::Memory,
        addr: 0x4000_0000,
        stride: w * 4,
        format: ColorFormat::Argb8888,
        order: Default::default(),
        rect: Rect::new(0, 0, w, h),
    }
}

fn copy_request() -> BlitRequest {
    let mut req = BlitRequest::new(BlitOperator::SrcOver, image(64, 64));
    req.src = Some(SourceDesc {
        image: image(32, 32),
        scale: None,
        repeat: Repeat::None,
    });
    req
}

fn paths(req: &BlitRequest) -> Vec<String> {
    match validate_request(req) {
        Ok(()) => Vec::new(),
        Err(e) => e.errors.iter().map(|e| e.path.join(".")).collect(),
    }
}

#[test]
fn well_formed_request_passes() {
    assert!(validate_request(&copy_request()).is_ok());
}

#[test]
fn fill_needs_no_source() {
    let req = BlitRequest::new(BlitOperator::SolidFill, image(8, 8));
    assert!(validate_request(&req).is_ok());

    let req = BlitRequest::new(BlitOperator::Src, image(8, 8));
    assert_eq!(paths(&req), vec!["src".to_string()]);
}

#[test]
fn empty_rects_and_zero_strides_are_reported_with_paths() {
    let mut req = copy_request();
    req.dst.rect = Rect::new(5, 5, 5, 9);
    req.src.as_mut().unwrap().image.stride = 0;
    req.clip = Some(Rect::new(0, 0, 70_000, 10));

    let p = paths(&req);
    assert!(p.contains(&"dst.rect".to_string()), "{p:?}");
    assert!(p.contains(&"src.image.stride".to_string()), "{p:?}");
    assert!(p.contains(&"clip".to_string()), "{p:?}");
}

#[test]
fn constant_color_planes_need_their_color() {
    let mut req = copy_request();
    req.src.as_mut().unwrap().image.source = ImageSource::FgColor;
    req.src.as_mut().unwrap().image.stride = 0;
    assert_eq!(paths(&req), vec!["src.image".to_string()]);

    req.fg_color = Some(0xff00_ff00);
    assert!(validate_request(&req).is_ok());
}

#[test]
fn zero_scale_dimensions_are_rejected() {
    let mut req = copy_request();
    req.src.as_mut().unwrap().scale = Some(ScaleRequest {
        mode: ScaleMode::Bilinear,
        factor: ScaleFactor::Pixels {
            src_w: 0,
            src_h: 32,
            dst_w: 64,
            dst_h: 64,
        },
    });
    req.msk = Some(MaskDesc {
        addr: 0x5000_0000,
        stride: 0,
        format: MaskFormat::Bit8,
        order: Default::default(),
        rect: Rect::new(0, 0, 32, 32),
        scale: Some(ScaleRequest {
            mode: ScaleMode::Nearest,
            factor: ScaleFactor::Percentage {
                scale_w: 100,
                scale_h: 0,
            },
        }),
        repeat: Repeat::None,
    });

    let p = paths(&req);
    assert_eq!(
        p,
        vec![
            "src.scale".to_string(),
            "msk.stride".to_string(),
            "msk.scale".to_string()
        ]
    );
}

#[test]
fn errors_render_as_json_paths() {
    let req = BlitRequest::new(BlitOperator::Src, image(8, 8));
    let msg = validate_request(&req).unwrap_err().to_string();
    assert!(msg.starts_with("$.src: operator Src"), "{msg}");
}
