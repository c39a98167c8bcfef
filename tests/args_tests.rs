//! Integration tests for the argument rules bindings apply before calling the array

mod common;
use common::*;

use pixel_fade::args::{pixel_count_from, rgb_from_slice};
use pixel_fade::{ArgumentError, PixelArray, PixelError};

#[test]
fn binding_flow_builds_array_and_fades() {
    let count = pixel_count_from(3).unwrap();
    let array = PixelArray::<8>::new(count).unwrap();

    let color = rgb_from_slice(&[1, 258, -1]).unwrap();
    array.fade_to_rgb(2, color).unwrap();
    assert_eq!(array.target(2).unwrap(), rgb(1, 2, 255));
}

#[test]
fn malformed_color_is_rejected_before_any_mutation() {
    let array = PixelArray::<2>::new(2).unwrap();
    array.trigger();

    let result = rgb_from_slice(&[1, 2]).map(|color| array.fill_rgb(color));
    assert_eq!(result, Err(ArgumentError::WrongLength { len: 2 }));

    assert!(array.fade_complete());
    assert_eq!(array.trigger().as_slice(), &[BLACK; 2]);
}

#[test]
fn negative_count_is_rejected() {
    assert_eq!(
        pixel_count_from(-5),
        Err(ArgumentError::NotUnsigned { value: -5 })
    );
}

#[test]
fn index_error_message_names_index_and_count() {
    let array = PixelArray::<2>::new(2).unwrap();
    let error = array.set_rgb(7, BLACK).unwrap_err();
    assert_eq!(error, PixelError::IndexOutOfRange { index: 7, count: 2 });
    assert_eq!(error.to_string(), "pixel index 7 out of range for 2 pixels");
}

#[test]
fn argument_error_messages() {
    assert_eq!(
        ArgumentError::WrongLength { len: 4 }.to_string(),
        "rgb argument must have 3 elements, got 4"
    );
    assert_eq!(
        PixelError::CapacityExceeded {
            requested: 9,
            capacity: 8
        }
        .to_string(),
        "cannot create 9 pixels, array capacity is 8"
    );
}
