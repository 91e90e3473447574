use flagword_compositor::{compose, compose_files, compose_to_file, BORDER_COLOR};
use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

#[test]
fn canvas_geometry_and_offsets() {
    let images = [solid(6, 4, RED), solid(10, 3, BLUE), solid(8, 5, RED)];
    let canvas = compose(&images).unwrap();

    assert_eq!(canvas.dimensions(), (10, 12));
    // Interior pixels show which image landed where: offsets 0, 4, 7.
    assert_eq!(*canvas.get_pixel(2, 2), RED);
    assert_eq!(*canvas.get_pixel(2, 5), BLUE);
    assert_eq!(*canvas.get_pixel(2, 9), RED);
}

#[test]
fn each_image_is_outlined() {
    let images = [solid(6, 4, RED), solid(10, 3, BLUE)];
    let canvas = compose(&images).unwrap();

    // First image: top, bottom and left edges, right edge one column past it.
    assert_eq!(*canvas.get_pixel(3, 0), BORDER_COLOR);
    assert_eq!(*canvas.get_pixel(3, 3), BORDER_COLOR);
    assert_eq!(*canvas.get_pixel(0, 2), BORDER_COLOR);
    assert_eq!(*canvas.get_pixel(6, 1), BORDER_COLOR);
    assert_eq!(*canvas.get_pixel(5, 1), RED);

    // Widest image: right edge falls off the canvas.
    assert_eq!(*canvas.get_pixel(9, 5), BLUE);
    assert_eq!(*canvas.get_pixel(9, 4), BORDER_COLOR);
    assert_eq!(*canvas.get_pixel(9, 6), BORDER_COLOR);
}

#[test]
fn space_right_of_narrow_images_stays_transparent() {
    let images = [solid(4, 4, RED), solid(10, 2, BLUE)];
    let canvas = compose(&images).unwrap();

    assert_eq!(*canvas.get_pixel(8, 1), CLEAR);
    assert_eq!(*canvas.get_pixel(5, 2), CLEAR);
}

#[test]
fn single_image_keeps_its_size() {
    let canvas = compose(&[solid(7, 3, BLUE)]).unwrap();
    assert_eq!(canvas.dimensions(), (7, 3));
}

#[test]
fn writes_png_and_overwrites_existing_file() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("puzzle1.png");
    std::fs::write(&output, "stale").unwrap();

    compose_to_file(&output, &[solid(5, 4, RED), solid(3, 2, BLUE)]).unwrap();

    let written = image::open(&output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (5, 6));
    assert_eq!(*written.get_pixel(2, 1), RED);
}

#[test]
fn compose_files_loads_from_disk() {
    let temp = tempdir().unwrap();
    let first = temp.path().join("flag1.png");
    let second = temp.path().join("flag2.png");
    solid(8, 4, RED).save(&first).unwrap();
    solid(6, 6, BLUE).save(&second).unwrap();

    let output = temp.path().join("out.png");
    let canvas = compose_files(&output, &[&first, &second]).unwrap();

    assert_eq!(canvas.dimensions(), (8, 10));
    assert!(output.is_file());
}

#[test]
fn compose_files_reports_unreadable_input() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing.png");
    let result = compose_files(temp.path().join("out.png"), &[missing]);
    assert!(result.is_err());
    assert!(!temp.path().join("out.png").exists());
}
