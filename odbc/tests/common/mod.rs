use wire_odbc::SQLGetDiagRecW;
use cstr::WideChar;
use definitions::{Handle, HandleType, Integer, SmallInt, SqlReturn};

/// Calls `SQLGetDiagRecW` for `rec_number` and asserts the SQLSTATE and
/// message text match. `expected_native_error` is compared only when
/// non-zero, since most API-layer diagnostics carry no native error code.
#[allow(dead_code)]
pub fn verify_sql_diagnostics(
    handle_type: HandleType,
    handle: Handle,
    rec_number: SmallInt,
    expected_sql_state: &str,
    expected_error_message: &str,
    expected_native_error: Integer,
) {
    let mut state: [WideChar; 6] = [0; 6];
    let mut native_error: Integer = 0;
    let mut message_text: [WideChar; 1024] = [0; 1024];
    let mut text_length: SmallInt = 0;

    let outcome = unsafe {
        SQLGetDiagRecW(
            handle_type,
            handle,
            rec_number,
            state.as_mut_ptr(),
            &mut native_error,
            message_text.as_mut_ptr(),
            message_text.len().try_into().unwrap(),
            &mut text_length,
        )
    };
    assert_eq!(SqlReturn::SUCCESS, outcome);

    let actual_state = cstr::from_widechar_ref_lossy(&state);
    assert_eq!(expected_sql_state, actual_state.trim_end_matches('\0'));

    let actual_message =
        cstr::from_widechar_ref_lossy(&message_text[..text_length as usize]);
    assert_eq!(expected_error_message, actual_message);

    if expected_native_error != 0 {
        assert_eq!(expected_native_error, native_error);
    }
}
