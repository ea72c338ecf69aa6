use super::*;

#[test]
fn rect_extent_saturates_on_inverted_corners() {
    let r = Rect::new(10, 20, 110, 70);
    assert_eq!(r.width(), 100);
    assert_eq!(r.height(), 50);
    assert!(!r.is_empty());

    let inverted = Rect::new(10, 10, 5, 20);
    assert_eq!(inverted.width(), 0);
    assert!(inverted.is_empty());
}

#[test]
fn rect_coordinate_fields_are_sixteen_bits() {
    assert!(Rect::new(0, 0, 65535, 65535).fits_coordinate_fields());
    assert!(!Rect::new(0, 0, 65536, 1).fits_coordinate_fields());
}

#[test]
fn offset_packs_y_into_high_half() {
    assert_eq!(pack_offset(0x12, 0x34), 0x0034_0012);
    assert_eq!(pack_offset(0x1_0001, 2), 0x0002_0001);
}

#[test]
fn global_alpha_replicates_to_every_lane() {
    assert_eq!(replicate_alpha(0x80), 0x8080_8080);
    assert_eq!(replicate_alpha(0xff), 0xffff_ffff);
    assert_eq!(replicate_alpha(0), 0);
}
