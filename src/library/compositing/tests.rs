use image::{ImageBuffer, Rgb};

use super::{compositor::*, line_layout::*};
use crate::library::{errors::CompositeError, img_ops::RgbImgBuf, CompositeCfg};

const LEFT_RGB: Rgb<u8> = Rgb([10, 20, 30]);
const RIGHT_RGB: Rgb<u8> = Rgb([40, 50, 60]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImgBuf {
    ImageBuffer::from_pixel(width, height, color)
}

fn cfg(line_count: u32, line_width: u32, line_rgb: Rgb<u8>) -> CompositeCfg {
    CompositeCfg {
        line_count,
        line_width,
        line_rgb,
        ..CompositeCfg::default()
    }
}

fn is_solid_row(img: &RgbImgBuf, y: u32, color: Rgb<u8>) -> bool {
    (0..img.width()).all(|x| *img.get_pixel(x, y) == color)
}

#[test]
//100x200 and 100x150 with a 10 pixel gap and three 2 pixel lines.
fn test_stereo_pair_with_interval() {
    let line_rgb = Rgb([200, 0, 0]);
    let images = vec![solid(100, 200, LEFT_RGB), solid(100, 150, RIGHT_RGB)];
    let cfg = CompositeCfg {
        interval: 10,
        interval_rgb: BLACK,
        ..cfg(3, 2, line_rgb)
    };

    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out.dimensions(), (210, 200));

    for &y in &[50, 100, 150] {
        //2 pixel lines centred on y cover y-1 and y.
        assert!(is_solid_row(&out, y - 1, line_rgb));
        assert!(is_solid_row(&out, y, line_rgb));
        assert!(!is_solid_row(&out, y - 2, line_rgb));
        assert!(!is_solid_row(&out, y + 1, line_rgb));
    }

    assert_eq!(*out.get_pixel(0, 0), LEFT_RGB);
    assert_eq!(*out.get_pixel(99, 199), LEFT_RGB);
    assert_eq!(*out.get_pixel(105, 10), BLACK);
    assert_eq!(*out.get_pixel(110, 0), RIGHT_RGB);
    assert_eq!(*out.get_pixel(209, 148), RIGHT_RGB);

    //below the shorter right hand image the canvas stays black
    assert_eq!(*out.get_pixel(110, 160), BLACK);
    assert_eq!(*out.get_pixel(209, 199), BLACK);
}

#[test]
fn test_single_image_ten_lines() {
    let line_rgb = Rgb([255, 255, 255]);
    let images = vec![solid(300, 100, LEFT_RGB)];
    let cfg = cfg(10, 3, line_rgb);

    assert_eq!(line_interval(100, 10), 9);
    let expected: Vec<u32> = (1..=10).map(|k| k * 9).collect();
    assert_eq!(line_offsets(100, &cfg).unwrap(), expected);

    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out.dimensions(), (300, 100));
    for y in expected {
        assert!(is_solid_row(&out, y - 1, line_rgb));
        assert!(is_solid_row(&out, y, line_rgb));
        assert!(is_solid_row(&out, y + 1, line_rgb));
    }
    assert!(is_solid_row(&out, 0, LEFT_RGB));
    assert!(is_solid_row(&out, 99, LEFT_RGB));
}

#[test]
fn test_single_image_too_short_for_lines() {
    let images = vec![solid(300, 20, LEFT_RGB)];
    let cfg = cfg(10, 3, BLACK);

    let err = compose(&images, &cfg).unwrap_err();
    assert!(matches!(
        err,
        CompositeError::LineOverlap {
            line_width: 3,
            line_interval: 1,
            line_count: 10,
            height: 20,
        }
    ));
    assert!(!err.is_input_error());
}

#[test]
//a single image contains exactly line_count lines and keeps its own dimensions.
fn test_single_image_line_count() {
    let line_rgb = Rgb([255, 0, 255]);
    let images = vec![solid(64, 55, LEFT_RGB)];
    let cfg = cfg(4, 2, line_rgb);

    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out.dimensions(), images[0].dimensions());

    let line_rows = (0..out.height())
        .filter(|&y| is_solid_row(&out, y, line_rgb))
        .count();
    assert_eq!(line_rows, 4 * 2);
}

#[test]
//interval padding only goes between images, so it does nothing for a single image.
fn test_single_image_ignores_interval() {
    let images = vec![solid(64, 55, LEFT_RGB)];
    let cfg = CompositeCfg {
        interval: 7,
        interval_rgb: Rgb([0, 255, 0]),
        ..cfg(4, 2, BLACK)
    };

    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out.dimensions(), (64, 55));
    assert!(out.pixels().all(|p| *p != Rgb([0, 255, 0])));
}

#[test]
fn test_two_images_no_interval() {
    let images = vec![solid(40, 30, LEFT_RGB), solid(50, 30, RIGHT_RGB)];
    let cfg = cfg(1, 1, BLACK);

    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out.dimensions(), (90, 30));
    assert_eq!(*out.get_pixel(39, 0), LEFT_RGB);
    assert_eq!(*out.get_pixel(40, 0), RIGHT_RGB);
    assert_eq!(*out.get_pixel(89, 29), RIGHT_RGB);
}

#[test]
fn test_two_images_interval_colour() {
    let interval_rgb = Rgb([0, 255, 0]);
    let line_rgb = Rgb([255, 255, 255]);
    let images = vec![solid(40, 30, LEFT_RGB), solid(50, 20, RIGHT_RGB)];
    let cfg = CompositeCfg {
        interval: 5,
        interval_rgb,
        ..cfg(1, 1, line_rgb)
    };

    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out.dimensions(), (40 + 50 + 5, 30));

    //the single line sits at 30 / 2 and is drawn over the padding.
    assert!(is_solid_row(&out, 15, line_rgb));
    for y in (0..30).filter(|&y| y != 15) {
        for x in 40..45 {
            assert_eq!(*out.get_pixel(x, y), interval_rgb, "at ({}, {})", x, y);
        }
    }
    assert_eq!(*out.get_pixel(39, 0), LEFT_RGB);
    assert_eq!(*out.get_pixel(45, 0), RIGHT_RGB);
}

#[test]
fn test_overlap_boundary() {
    //40 / (3 + 1) = 10
    let at_limit = cfg(3, 10, BLACK);
    let below_limit = cfg(3, 9, BLACK);

    assert!(matches!(
        check_line_geometry(40, &at_limit),
        Err(CompositeError::LineOverlap { line_interval: 10, .. })
    ));
    assert_eq!(check_line_geometry(40, &below_limit).unwrap(), 10);

    let images = vec![solid(10, 40, LEFT_RGB), solid(10, 25, RIGHT_RGB)];
    assert!(compose(&images, &at_limit).is_err());
    assert!(compose(&images, &below_limit).is_ok());
}

#[test]
fn test_no_lines() {
    let images = vec![solid(12, 10, LEFT_RGB)];
    let cfg = cfg(0, 3, Rgb([255, 0, 0]));

    assert!(line_offsets(10, &cfg).unwrap().is_empty());
    let out = compose(&images, &cfg).unwrap();
    assert_eq!(out, images[0]);
}

#[test]
fn test_compose_is_repeatable() {
    let images = vec![solid(33, 70, LEFT_RGB), solid(21, 64, RIGHT_RGB)];
    let cfg = CompositeCfg {
        interval: 3,
        interval_rgb: Rgb([1, 2, 3]),
        ..cfg(5, 2, Rgb([200, 0, 0]))
    };

    let first = compose(&images, &cfg).unwrap();
    let second = compose(&images, &cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bad_image_count() {
    let cfg = CompositeCfg::default();

    let err = compose(&[], &cfg).unwrap_err();
    assert!(matches!(err, CompositeError::ImageCount(0)));
    assert!(err.is_input_error());

    let three = vec![solid(10, 100, LEFT_RGB); 3];
    assert!(matches!(
        compose(&three, &cfg),
        Err(CompositeError::ImageCount(3))
    ));
}

#[test]
fn test_empty_image() {
    let images = vec![solid(10, 100, LEFT_RGB), ImageBuffer::new(0, 100)];
    let err = compose(&images, &CompositeCfg::default()).unwrap_err();

    assert!(matches!(
        err,
        CompositeError::EmptyImage {
            index: 1,
            width: 0,
            height: 100
        }
    ));
    assert!(err.is_input_error());
}

#[test]
fn test_composite_dimensions_of() {
    assert_eq!(composite_dimensions_of(vec![(100, 200)], 10).unwrap(), (100, 200));
    assert_eq!(
        composite_dimensions_of(vec![(100, 200), (100, 150)], 10).unwrap(),
        (210, 200)
    );
    assert_eq!(
        composite_dimensions_of(vec![(100, 150), (100, 200)], 0).unwrap(),
        (200, 200)
    );

    //the interval is never applied to a single image, however large.
    assert_eq!(
        composite_dimensions_of(vec![(100, 200)], u32::MAX).unwrap(),
        (100, 200)
    );
}

#[test]
//an interval near u32::MAX must be rejected rather than wrap around or panic.
fn test_huge_interval() {
    let err = composite_dimensions_of(vec![(10, 40), (10, 40)], u32::MAX - 5).unwrap_err();
    assert!(matches!(
        err,
        CompositeError::CompositeTooLarge {
            interval: 4_294_967_290
        }
    ));
    assert!(err.is_input_error());

    let images = vec![solid(10, 40, LEFT_RGB), solid(10, 40, RIGHT_RGB)];
    let cfg = CompositeCfg {
        interval: u32::MAX - 5,
        ..cfg(1, 1, BLACK)
    };
    assert!(matches!(
        compose(&images, &cfg),
        Err(CompositeError::CompositeTooLarge { .. })
    ));

    //exactly u32::MAX still fits
    assert_eq!(
        composite_dimensions_of(vec![(10, 40), (10, 40)], u32::MAX - 20).unwrap(),
        (u32::MAX, 40)
    );
}
