use openpaygo_token::{TokenError, TokenFormat};

#[test]
fn error_display_too_many_days() {
    let err = TokenError::TooManyDaysToActivate(996);
    let msg = format!("{err}");
    assert!(msg.contains("too many days"));
    assert!(msg.contains("996"));
}

#[test]
fn error_display_device_info_missing() {
    let err = TokenError::DeviceInfoMissing("device key is empty".into());
    let msg = format!("{err}");
    assert!(msg.contains("device info missing"));
    assert!(msg.contains("device key is empty"));
}

#[test]
fn error_display_no_mode_found() {
    let err = TokenError::NoModeFound("subtract_time".into());
    let msg = format!("{err}");
    assert!(msg.contains("no mode found"));
    assert!(msg.contains("subtract_time"));
}

#[test]
fn error_display_invalid_value() {
    let err = TokenError::InvalidValue(1000);
    assert!(format!("{err}").contains("1000"));
}

#[test]
fn error_display_invalid_key_hex() {
    let err = TokenError::InvalidKeyHex("Odd number of digits".into());
    assert!(format!("{err}").contains("invalid key hex"));
}

#[test]
fn error_display_key_length() {
    let err = TokenError::InvalidKeyLength {
        expected: 16,
        actual: 8,
    };
    let msg = format!("{err}");
    assert!(msg.contains("expected 16"));
    assert!(msg.contains("got 8"));
}

#[test]
fn error_display_unsupported_format() {
    let err = TokenError::UnsupportedFormat(TokenFormat::RestrictedDigitSet);
    assert!(format!("{err}").contains("restricted_digit_set"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&TokenError::NoModeFound(String::new()));
}
