use std::{error::Error as _, io};

use error_derive::Error;

#[derive(Debug, Error)]
enum ExampleError {
    #[msg = "something went wrong"]
    Unit,

    #[msg = "io error"]
    Io(io::Error),

    #[msg = "expected at least {expected} points, got {got}"]
    Named { expected: usize, got: usize },

    #[msg = "width {width:.2} is not positive"]
    Formatted { width: f32, ignored: bool },

    #[msg = "no placeholders here"]
    NamedWithoutPlaceholders { value: i32 },
}

#[test]
fn unit_variant() {
    assert_eq!(ExampleError::Unit.to_string(), "something went wrong");
    assert!(ExampleError::Unit.source().is_none());
}

#[test]
fn tuple_variant_converts_and_reports_source() {
    let error: ExampleError = io::Error::other("disk on fire").into();

    assert_eq!(error.to_string(), "io error");
    assert!(error.source().is_some());
}

#[test]
fn named_fields_are_interpolated() {
    let error = ExampleError::Named {
        expected: 2,
        got: 1,
    };
    assert_eq!(error.to_string(), "expected at least 2 points, got 1");

    let error = ExampleError::Formatted {
        width: -1.5,
        ignored: true,
    };
    assert_eq!(error.to_string(), "width -1.50 is not positive");
    assert!(matches!(error, ExampleError::Formatted { ignored: true, .. }));

    let error = ExampleError::NamedWithoutPlaceholders { value: 3 };
    assert_eq!(error.to_string(), "no placeholders here");
    assert!(matches!(error, ExampleError::NamedWithoutPlaceholders { value: 3 }));
    assert!(error.source().is_none());
}
