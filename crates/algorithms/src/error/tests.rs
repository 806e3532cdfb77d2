use super::*;

#[test]
fn test_error_conversion() {
    // Parameter error
    let err = Error::param("test", "invalid value");
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::InvalidArgument { context, message } => {
            assert_eq!(context, "test");
            assert_eq!(message, "invalid value");
        }
        _ => panic!("Expected InvalidArgument error"),
    }

    // Buffer error keeps its sizes
    let err = Error::BufferTooSmall {
        context: "SHA-256 digest",
        required: 32,
        actual: 16,
    };
    let core_err = CoreError::from(err);

    match core_err {
        CoreError::BufferTooSmall {
            context,
            required,
            actual,
        } => {
            assert_eq!(context, "SHA-256 digest");
            assert_eq!(required, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected BufferTooSmall error"),
    }

    // Range and unknown algorithm both surface as invalid arguments
    let err = Error::Range {
        context: "update_range",
        offset: 4,
        len: 8,
        buf_len: 10,
    };
    assert!(matches!(
        CoreError::from(err),
        CoreError::InvalidArgument { context: "update_range", .. }
    ));
    assert!(matches!(
        CoreError::from(Error::UnknownAlgorithm("MD5".into())),
        CoreError::InvalidArgument { .. }
    ));
}

#[test]
fn test_validation_functions() {
    // Length validation
    assert!(validate::length("buffer", 32, 32).is_ok());
    let err = validate::length("buffer", 16, 32).unwrap_err();

    match err {
        Error::Length {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected Length error"),
    }

    // Range validation catches overflow as well as overrun
    assert!(validate::range("r", 10, 2, 8).is_ok());
    assert!(validate::range("r", 10, 3, 8).is_err());
    assert!(validate::range("r", 10, usize::MAX, 1).is_err());

    assert!(validate::min_length("out", 20, 20).is_ok());
    assert!(matches!(
        validate::min_length("out", 19, 20),
        Err(Error::BufferTooSmall { required: 20, actual: 19, .. })
    ));
}

#[test]
fn test_display_messages() {
    let err = Error::UnknownAlgorithm("MD5".into());
    assert_eq!(err.to_string(), "Unsupported digest algorithm: MD5");
}
