mod common;

macro_rules! test_connection_diagnostics {
    ($func_name:ident,
    in_connection_string = $in_connection_string:expr,
        driver_completion = $driver_completion:expr,
        expected_sql_state = $expected_sql_state:expr,
        expected_sql_return = $expected_sql_return:expr,
        expected_error_message = $expected_error_message:expr) => {
        #[test]
        fn $func_name() {
            use cstr::WideChar;
            use definitions::SmallInt;
            let in_connection_string = $in_connection_string;
            let driver_completion = $driver_completion;
            let expected_sql_state = $expected_sql_state;
            let expected_sql_return = $expected_sql_return;
            let expected_error_message = $expected_error_message;

            let mut out_connection_string: [WideChar; 64] = [0; 64];
            let out_connection_string = &mut out_connection_string as *mut WideChar;
            let string_length_2 = &mut 0;
            let buffer_length: SmallInt = 65;
            let mut env_handl: Handle = null_mut();
            let mut conn_handl: Handle = null_mut();

            let mut in_connection_string_encoded = cstr::to_widechar_vec(in_connection_string);
            in_connection_string_encoded.push(0);

            unsafe {
                let _ = SQLAllocHandle(
                    HandleType::Env,
                    std::ptr::null_mut(),
                    &mut env_handl as *mut Handle,
                );
                let _ = SQLAllocHandle(
                    HandleType::Dbc,
                    env_handl,
                    &mut conn_handl as *mut Handle,
                );
                let actual_return_val = SQLDriverConnectW(
                    conn_handl as *mut _,
                    std::ptr::null_mut(),
                    in_connection_string_encoded.as_ptr(),
                    in_connection_string.len().try_into().unwrap(),
                    out_connection_string,
                    buffer_length,
                    string_length_2,
                    driver_completion,
                );
                assert_eq!(expected_sql_return, actual_return_val);

                verify_sql_diagnostics(
                    HandleType::Dbc,
                    conn_handl as *mut _,
                    1,
                    expected_sql_state,
                    expected_error_message,
                    0,
                );
                let _ = SQLFreeHandle(HandleType::Dbc, conn_handl);
                let _ = SQLFreeHandle(HandleType::Env, env_handl);
            };
        }
    };
}

mod integration {
    use crate::common::verify_sql_diagnostics;
    use wire_odbc::{SQLAllocHandle, SQLDriverConnectW, SQLFreeHandle};
    use constants::NO_DSN_OR_DRIVER;
    use definitions::{DriverConnectOption, Handle, HandleType, SqlReturn};
    use std::ptr::null_mut;

    test_connection_diagnostics! (
            missing_user_in_connection_string,
            in_connection_string = "Driver=Wire ODBC Driver;SERVER=N_A;PWD=N_A",
            driver_completion = DriverConnectOption::NoPrompt,
            expected_sql_state = "HY000",
            expected_sql_return = SqlReturn::ERROR,
            expected_error_message = "[WireODBC][API] invalid connection string: UID is required for a valid connection string"
        );
    test_connection_diagnostics! (
            missing_pwd_in_connection_string,
            in_connection_string = "Driver=Wire ODBC Driver;SERVER=N_A;USER=N_A",
            driver_completion = DriverConnectOption::NoPrompt,
            expected_sql_state = "HY000",
            expected_sql_return = SqlReturn::ERROR,
            expected_error_message = "[WireODBC][API] invalid connection string: PWD is required for a valid connection string"
        );
    test_connection_diagnostics!(
        missing_driver_in_connection_string,
        in_connection_string = "USER=N_A;SERVER=N_A;PWD=N_A",
        driver_completion = DriverConnectOption::NoPrompt,
        expected_sql_state = NO_DSN_OR_DRIVER,
        expected_sql_return = SqlReturn::ERROR,
        expected_error_message =
            "[WireODBC][API] Missing property \"Driver\" or \"DSN\" in connection string"
    );
    test_connection_diagnostics!(
        unsupported_driver_connect_option_prompt,
        in_connection_string = "USER=N_A;SERVER=N_A;PWD=N_A",
        driver_completion = DriverConnectOption::Prompt,
        expected_sql_state = "HYC00",
        expected_sql_return = SqlReturn::ERROR,
        expected_error_message =
            "[WireODBC][API] The driver connect option Prompt is not supported"
    );
    test_connection_diagnostics!(
        unsupported_driver_connect_option_complete,
        in_connection_string = "USER=N_A;SERVER=N_A;PWD=N_A",
        driver_completion = DriverConnectOption::Complete,
        expected_sql_state = "HYC00",
        expected_sql_return = SqlReturn::ERROR,
        expected_error_message =
            "[WireODBC][API] The driver connect option Complete is not supported"
    );
    test_connection_diagnostics!(
        unsupported_driver_connect_option_complete_required,
        in_connection_string = "USER=N_A;SERVER=N_A;PWD=N_A",
        driver_completion = DriverConnectOption::CompleteRequired,
        expected_sql_state = "HYC00",
        expected_sql_return = SqlReturn::ERROR,
        expected_error_message =
            "[WireODBC][API] The driver connect option CompleteRequired is not supported"
    );
}
