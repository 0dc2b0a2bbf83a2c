use crate::{
    add_diag_with_function,
    errors::ODBCError,
    handles::definitions::{CachedData, OdbcHandle, Statement},
};
use chrono::{Datelike, Timelike};
use cstr::{
    write_binary_slice_to_buffer, write_fixed_data, write_string_slice_to_buffer,
    write_wstring_slice_to_buffer, WideChar,
};
use definitions::{
    CDataType, Char, Date, Integer, Len, Pointer, SmallInt, SqlReturn, Time, Timestamp, USmallInt,
};
use odbc_driver_core::SqlValue;
use std::mem::size_of;

type Result<T> = std::result::Result<T, ODBCError>;

/// Writes `data` to `target_value_ptr` as `SQL_C_BINARY`/`SQL_C_GUID`, caching
/// any unconsumed remainder under `col_num` for a follow-up `SQLGetData` call.
#[allow(clippy::too_many_arguments)]
pub unsafe fn format_binary(
    odbc_handle: &mut OdbcHandle,
    col_num: USmallInt,
    index: usize,
    target_value_ptr: Pointer,
    buffer_len: Len,
    str_len_or_ind_ptr: *mut Len,
    data: Vec<u8>,
    function_name: &str,
) -> SqlReturn {
    let sql_return = {
        let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
        isize_len::set_output_binary(
            &stmt,
            data,
            col_num,
            index,
            target_value_ptr as *mut Char,
            buffer_len as usize,
            str_len_or_ind_ptr,
        )
    };
    if sql_return == SqlReturn::SUCCESS_WITH_INFO {
        add_diag_with_function!(
            odbc_handle,
            ODBCError::OutStringTruncated(buffer_len as usize),
            function_name
        );
    }
    sql_return
}

/// Writes `data` through one of `isize_len`'s character-data setters, raising
/// an `OutStringTruncated` diagnostic when the buffer was too small.
macro_rules! char_data {
    ($odbc_handle:expr, $col_num:expr, $index:expr, $target_value_ptr:expr, $buffer_len:expr, $str_len_or_ind_ptr:expr, $data:expr, $setter:path, $function_name:expr) => {{
        let (odbc_handle, buffer_len) = ($odbc_handle, $buffer_len);
        let sql_return = {
            let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
            $setter(
                &stmt,
                $data,
                $col_num,
                $index,
                $target_value_ptr as *mut _,
                buffer_len as usize,
                $str_len_or_ind_ptr,
            )
        };
        if sql_return == SqlReturn::SUCCESS_WITH_INFO {
            add_diag_with_function!(
                odbc_handle,
                ODBCError::OutStringTruncated(buffer_len as usize),
                $function_name
            );
        }
        sql_return
    }};
}

/// Runs one of `SqlValue`'s `(value, Option<warning>)` numeric conversions,
/// surfacing a hard conversion error as `ERROR` and a non-fatal truncation as
/// `SUCCESS_WITH_INFO`.
macro_rules! fixed_data_with_warnings {
    ($odbc_handle:expr, $col_num:expr, $data:expr, $target_value_ptr:expr, $str_len_or_ind_ptr:expr) => {{
        let stmt = (*$odbc_handle).as_statement().unwrap().read().unwrap();
        stmt.insert_var_data_cache($col_num, CachedData::Fixed);
        match $data {
            Ok((value, warning)) => {
                let sql_return = isize_len::set_output_fixed_data(
                    &value,
                    $target_value_ptr,
                    $str_len_or_ind_ptr,
                );
                if let Some(warning) = warning {
                    stmt.errors.write().unwrap().push(ODBCError::from(warning));
                    return SqlReturn::SUCCESS_WITH_INFO;
                }
                sql_return
            }
            Err(e) => {
                stmt.errors.write().unwrap().push(ODBCError::from(e));
                SqlReturn::ERROR
            }
        }
    }};
}

pub unsafe fn format_timestamp(
    odbc_handle: &OdbcHandle,
    col_num: USmallInt,
    target_value_ptr: Pointer,
    str_len_or_ind_ptr: *mut Len,
    data: &SqlValue,
) -> SqlReturn {
    let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
    stmt.insert_var_data_cache(col_num, CachedData::Fixed);
    match data.to_timestamp() {
        Ok(dt) => {
            let out = Timestamp {
                year: dt.year() as i16,
                month: dt.month() as u16,
                day: dt.day() as u16,
                hour: dt.hour() as u16,
                minute: dt.minute() as u16,
                second: dt.second() as u16,
                fraction: dt.nanosecond(),
            };
            isize_len::set_output_fixed_data(&out, target_value_ptr, str_len_or_ind_ptr)
        }
        Err(e) => {
            stmt.errors.write().unwrap().push(ODBCError::from(e));
            SqlReturn::ERROR
        }
    }
}

pub unsafe fn format_time(
    odbc_handle: &OdbcHandle,
    col_num: USmallInt,
    target_value_ptr: Pointer,
    str_len_or_ind_ptr: *mut Len,
    data: &SqlValue,
) -> SqlReturn {
    let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
    stmt.insert_var_data_cache(col_num, CachedData::Fixed);
    match data.to_time() {
        Ok(time) => {
            let out = Time {
                hour: time.hour() as u16,
                minute: time.minute() as u16,
                second: time.second() as u16,
            };
            isize_len::set_output_fixed_data(&out, target_value_ptr, str_len_or_ind_ptr)
        }
        Err(e) => {
            stmt.errors.write().unwrap().push(ODBCError::from(e));
            SqlReturn::ERROR
        }
    }
}

pub unsafe fn format_date(
    odbc_handle: &OdbcHandle,
    col_num: USmallInt,
    target_value_ptr: Pointer,
    str_len_or_ind_ptr: *mut Len,
    data: &SqlValue,
) -> SqlReturn {
    let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
    stmt.insert_var_data_cache(col_num, CachedData::Fixed);
    match data.to_date() {
        Ok(d) => {
            let out = Date {
                year: d.year() as i16,
                month: d.month() as u16,
                day: d.day() as u16,
            };
            isize_len::set_output_fixed_data(&out, target_value_ptr, str_len_or_ind_ptr)
        }
        Err(e) => {
            stmt.errors.write().unwrap().push(ODBCError::from(e));
            SqlReturn::ERROR
        }
    }
}

/// Re-streams a variable-length value left over from a previous `SQLGetData`
/// call on the same column. `NO_DATA` if the caller switched target types
/// mid-stream, mirroring what re-inserting the cache unread would do anyway.
#[allow(clippy::too_many_arguments)]
pub unsafe fn format_cached_data(
    odbc_handle: &mut OdbcHandle,
    cached_data: CachedData,
    col_num: USmallInt,
    target_type: CDataType,
    target_value_ptr: Pointer,
    buffer_len: Len,
    str_len_or_ind_ptr: *mut Len,
    function_name: &str,
) -> SqlReturn {
    match cached_data {
        fixed @ CachedData::Fixed => {
            let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
            stmt.insert_var_data_cache(col_num, fixed);
            SqlReturn::NO_DATA
        }
        CachedData::Char(index, data) => {
            if target_type != CDataType::SQL_C_CHAR {
                let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
                stmt.insert_var_data_cache(col_num, CachedData::Char(index, data));
                return SqlReturn::NO_DATA;
            }
            char_data!(
                odbc_handle,
                col_num,
                index,
                target_value_ptr,
                buffer_len,
                str_len_or_ind_ptr,
                data,
                isize_len::set_output_string,
                function_name
            )
        }
        CachedData::WChar(index, data) => {
            if target_type != CDataType::SQL_C_WCHAR {
                let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
                stmt.insert_var_data_cache(col_num, CachedData::WChar(index, data));
                return SqlReturn::NO_DATA;
            }
            char_data!(
                odbc_handle,
                col_num,
                index,
                target_value_ptr,
                buffer_len,
                str_len_or_ind_ptr,
                data,
                isize_len::set_output_wstring_as_bytes,
                function_name
            )
        }
        CachedData::Bin(index, data) => {
            if target_type != CDataType::SQL_C_BINARY {
                let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
                stmt.insert_var_data_cache(col_num, CachedData::Bin(index, data));
                return SqlReturn::NO_DATA;
            }
            format_binary(
                odbc_handle,
                col_num,
                index,
                target_value_ptr,
                buffer_len,
                str_len_or_ind_ptr,
                data,
                function_name,
            )
        }
    }
}

/// The `SQLGetData` workhorse: converts one column's `SqlValue` to whatever
/// `target_type` asks for and writes it to `target_value_ptr`. `data` is
/// `None` for a SQL NULL -- there is no dedicated null variant on `SqlValue`
/// since nullness already lives in the `Option` the statement layer returns.
#[allow(clippy::too_many_arguments)]
pub unsafe fn format_sql_value_data(
    odbc_handle: &mut OdbcHandle,
    col_num: USmallInt,
    target_type: CDataType,
    target_value_ptr: Pointer,
    buffer_len: Len,
    str_len_or_ind_ptr: *mut Len,
    data: Option<&SqlValue>,
    function_name: &str,
) -> SqlReturn {
    let data = match data {
        Some(data) => data,
        None => {
            let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
            if str_len_or_ind_ptr.is_null() {
                stmt.errors
                    .write()
                    .unwrap()
                    .push(ODBCError::IndicatorVariableRequiredButNotSupplied);
                return SqlReturn::SUCCESS_WITH_INFO;
            }
            *str_len_or_ind_ptr = definitions::SQL_NULL_DATA;
            stmt.insert_var_data_cache(col_num, CachedData::Fixed);
            return SqlReturn::SUCCESS;
        }
    };

    match target_type {
        CDataType::SQL_C_BINARY | CDataType::SQL_C_GUID => {
            let converted = if target_type == CDataType::SQL_C_GUID {
                data.to_guid()
            } else {
                data.to_binary()
            };
            match converted {
                Ok(bytes) => format_binary(
                    odbc_handle,
                    col_num,
                    0usize,
                    target_value_ptr,
                    buffer_len,
                    str_len_or_ind_ptr,
                    bytes,
                    function_name,
                ),
                Err(e) => {
                    let stmt = (*odbc_handle).as_statement().unwrap().read().unwrap();
                    stmt.errors.write().unwrap().push(ODBCError::from(e));
                    SqlReturn::ERROR
                }
            }
        }
        CDataType::SQL_C_CHAR => {
            let bytes = data.to_json().into_bytes();
            char_data!(
                odbc_handle,
                col_num,
                0usize,
                target_value_ptr,
                buffer_len,
                str_len_or_ind_ptr,
                bytes,
                isize_len::set_output_string,
                function_name
            )
        }
        CDataType::SQL_C_WCHAR => {
            let wide = cstr::to_widechar_vec(&data.to_json());
            char_data!(
                odbc_handle,
                col_num,
                0usize,
                target_value_ptr,
                buffer_len,
                str_len_or_ind_ptr,
                wide,
                isize_len::set_output_wstring_as_bytes,
                function_name
            )
        }
        CDataType::SQL_C_BIT => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_bit(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_DOUBLE => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_f64(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_FLOAT => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_f32(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_SBIGINT => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_i64(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_UBIGINT => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_u64(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_SLONG => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_i32(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_ULONG => {
            fixed_data_with_warnings!(
                odbc_handle,
                col_num,
                data.to_u32(),
                target_value_ptr,
                str_len_or_ind_ptr
            )
        }
        CDataType::SQL_C_TIMESTAMP | CDataType::SQL_C_TYPE_TIMESTAMP => format_timestamp(
            odbc_handle,
            col_num,
            target_value_ptr,
            str_len_or_ind_ptr,
            data,
        ),
        CDataType::SQL_C_TIME | CDataType::SQL_C_TYPE_TIME => format_time(
            odbc_handle,
            col_num,
            target_value_ptr,
            str_len_or_ind_ptr,
            data,
        ),
        CDataType::SQL_C_DATE | CDataType::SQL_C_TYPE_DATE => format_date(
            odbc_handle,
            col_num,
            target_value_ptr,
            str_len_or_ind_ptr,
            data,
        ),
        other => {
            add_diag_with_function!(
                odbc_handle,
                ODBCError::UnimplementedDataType(format!("{other:?}")),
                function_name
            );
            SqlReturn::ERROR
        }
    }
}

///
/// set_output_wstring_helper writes [`message`] to the *WideChar [`output_ptr`]. [`buffer_len`] is the
/// length of the [`output_ptr`] buffer in characters; the message should be truncated
/// if it is longer than the buffer length.
///
/// # Safety
/// This writes to multiple raw C-pointers
///
unsafe fn set_output_wstring_helper(
    message: &[WideChar],
    output_ptr: *mut WideChar,
    buffer_len: usize,
) -> (usize, SqlReturn) {
    // If the output_ptr is null or no buffer space has been allocated, we need
    // to return SUCCESS_WITH_INFO.
    if output_ptr.is_null() || buffer_len == 0 {
        return (0usize, SqlReturn::SUCCESS_WITH_INFO);
    }
    // TODO SQL-1084: This will currently not work when we need to truncate data that takes more than
    // two bytes, such as emojis because it's assuming every character is 2 bytes.
    // Actually, this is not clear now. The spec suggests it may be up to the user to correctly
    // reassemble parts.
    let num_chars_written =
        write_wstring_slice_to_buffer(message, buffer_len as isize, output_ptr) as usize;
    // return the number of characters in the message string, excluding the
    // null terminator
    if num_chars_written <= message.len() {
        (num_chars_written - 1, SqlReturn::SUCCESS_WITH_INFO)
    } else {
        (message.len(), SqlReturn::SUCCESS)
    }
}

///
/// set_output_string_helper writes [`message`] to the *Char [`output_ptr`]. [`buffer_len`] is the
/// length of the [`output_ptr`] buffer in characters; the message should be truncated
/// if it is longer than the buffer length.
///
/// # Safety
/// This writes to multiple raw C-pointers
///
unsafe fn set_output_string_helper(
    message: &[u8],
    output_ptr: *mut Char,
    buffer_len: usize,
) -> (usize, SqlReturn) {
    // If the output_ptr is null or no buffer space has been allocated, we need
    // to return SUCCESS_WITH_INFO.
    if output_ptr.is_null() || buffer_len == 0 {
        return (0usize, SqlReturn::SUCCESS_WITH_INFO);
    }

    let num_chars_written =
        write_string_slice_to_buffer(message, buffer_len as isize, output_ptr) as usize;

    // return the number of characters in the message string, excluding the
    // null terminator
    if num_chars_written <= message.len() {
        (num_chars_written - 1, SqlReturn::SUCCESS_WITH_INFO)
    } else {
        (message.len(), SqlReturn::SUCCESS)
    }
}

///
/// set_output_binary_helper writes [`message`] to the *Char [`output_ptr`]. [`buffer_len`] is the
/// length of the [`output_ptr`] buffer in characters; the message should be truncated
/// if it is longer than the buffer length.
///
/// # Safety
/// This writes to multiple raw C-pointers
///
unsafe fn set_output_binary_helper(
    data: &[u8],
    output_ptr: *mut Char,
    buffer_len: usize,
) -> (usize, SqlReturn) {
    // If the output_ptr is null or no buffer space has been allocated, we need
    // to return SUCCESS_WITH_INFO.
    if output_ptr.is_null() || buffer_len == 0 {
        return (0usize, SqlReturn::SUCCESS_WITH_INFO);
    }

    let num_bytes_written = write_binary_slice_to_buffer(data, buffer_len, output_ptr) as usize;

    // return the number of characters in the binary
    if num_bytes_written < data.len() {
        (num_bytes_written, SqlReturn::SUCCESS_WITH_INFO)
    } else {
        (num_bytes_written, SqlReturn::SUCCESS)
    }
}

pub mod i16_len {
    use super::*;
    ///
    /// set_output_wstring_as_bytes writes [`message`] to the Pointer [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in characters; the message should be truncated
    /// if it is longer than the buffer length. The number of *BYTES* written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_wstring_as_bytes(
        message: &str,
        output_ptr: Pointer,
        buffer_len: usize,
        text_length_ptr: *mut SmallInt,
    ) -> SqlReturn {
        let message = cstr::to_widechar_vec(message);
        let (len, ret) = set_output_wstring_helper(
            &message,
            output_ptr as *mut WideChar,
            buffer_len / size_of::<WideChar>(),
        );
        // Only copy the length if the pointer is not null
        ptr_safe_write(text_length_ptr, (size_of::<WideChar>() * len) as SmallInt);
        ret
    }

    ///
    /// set_output_wstring writes [`message`] to the *WideChar [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in characters; the message should be truncated
    /// if it is longer than the buffer length. The number of characters written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_wstring(
        message: &str,
        output_ptr: *mut WideChar,
        buffer_len: usize,
        text_length_ptr: *mut SmallInt,
    ) -> SqlReturn {
        let message = cstr::to_widechar_vec(message);
        let (len, ret) = set_output_wstring_helper(&message, output_ptr, buffer_len);
        // Only copy the length if the pointer is not null
        ptr_safe_write(text_length_ptr, len as SmallInt);
        ret
    }

    ///
    /// set_output_fixed_data writes [`data`], which must be a fixed sized type, to the Pointer [`output_ptr`].
    /// ODBC drivers assume the output buffer is large enough for fixed types, and are allowed to
    /// overwrite the buffer if too small a buffer is passed.
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_fixed_data<T: core::fmt::Debug>(
        data: &T,
        output_ptr: Pointer,
        data_len_ptr: *mut SmallInt,
    ) -> SqlReturn {
        // If the output_ptr is NULL, we should still return the length of the message.
        ptr_safe_write(data_len_ptr, size_of::<T>() as i16);

        if output_ptr.is_null() {
            return SqlReturn::SUCCESS_WITH_INFO;
        }
        write_fixed_data(data, output_ptr);
        SqlReturn::SUCCESS
    }
}

pub mod i32_len {
    use super::*;
    ///
    /// set_output_wstring_as_bytes writes [`message`] to the Pointer [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in *BYTES*; the message should be truncated
    /// if it is longer than the buffer length. The number of *BYTES* written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_wstring_as_bytes(
        message: &str,
        output_ptr: Pointer,
        buffer_len: usize,
        text_length_ptr: *mut Integer,
    ) -> SqlReturn {
        let (len, ret) = set_output_wstring_helper(
            &cstr::to_widechar_vec(message),
            output_ptr as *mut WideChar,
            buffer_len / size_of::<WideChar>(),
        );

        ptr_safe_write(text_length_ptr, (size_of::<WideChar>() * len) as Integer);
        ret
    }

    ///
    /// set_output_fixed_data writes [`data`], which must be a fixed sized type, to the Pointer [`output_ptr`].
    /// ODBC drivers assume the output buffer is large enough for fixed types, and are allowed to
    /// overwrite the buffer if too small a buffer is passed.
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_fixed_data<T: core::fmt::Debug>(
        data: &T,
        output_ptr: Pointer,
        data_len_ptr: *mut Integer,
    ) -> SqlReturn {
        // If the output_ptr is NULL, we should still return the length of the message.
        ptr_safe_write(data_len_ptr, size_of::<T>() as i32);

        if output_ptr.is_null() {
            return SqlReturn::SUCCESS_WITH_INFO;
        }
        write_fixed_data(data, output_ptr);
        SqlReturn::SUCCESS
    }
}

pub mod isize_len {
    use super::*;
    ///
    /// set_output_wstring writes [`message`] to the Pointer [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in characters; the message should be truncated
    /// if it is longer than the buffer length. The number of *BYTES* written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_wstring_as_bytes(
        stmt: &Statement,
        message: Vec<WideChar>,
        col_num: USmallInt,
        index: usize,
        output_ptr: *mut WideChar,
        buffer_len: usize,
        text_length_ptr: *mut Len,
    ) -> SqlReturn {
        // This should be impossible per the DM.
        if output_ptr.is_null() {
            return SqlReturn::ERROR;
        }
        // TODO Power BI: This will return NO_DATA if the string is size 0 to begin with, not just
        // when the data runs out. Check to see if this is correct behavior.
        if index >= message.len() {
            ptr_safe_write(text_length_ptr, 0);
            return SqlReturn::NO_DATA;
        }
        let (len, ret) = set_output_wstring_helper(
            message.get(index..).unwrap(),
            output_ptr,
            buffer_len / size_of::<WideChar>(),
        );
        // the returned length should always be the total length of the data.
        ptr_safe_write(
            text_length_ptr,
            (size_of::<WideChar>() * (message.len() - index)) as Len,
        );
        stmt.insert_var_data_cache(col_num, CachedData::WChar(index + len, message));
        ret
    }

    ///
    /// set_output_string writes [`message`] to the *Char [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in characters; the message should be truncated
    /// if it is longer than the buffer length. The number of characters written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_string(
        stmt: &Statement,
        message: Vec<u8>,
        col_num: USmallInt,
        index: usize,
        output_ptr: *mut Char,
        buffer_len: usize,
        text_length_ptr: *mut Len,
    ) -> SqlReturn {
        // This should be impossible per the DM.
        if output_ptr.is_null() {
            return SqlReturn::ERROR;
        }
        // TODO Power BI: This will return NO_DATA if the string is size 0 to begin with, not just
        // when the data runs out. Check to see if this is correct behavior.
        if index >= message.len() {
            ptr_safe_write(text_length_ptr, 0);
            return SqlReturn::NO_DATA;
        }
        let (len, ret) =
            set_output_string_helper(message.get(index..).unwrap(), output_ptr, buffer_len);
        // the returned length should always be the total length of the data.
        ptr_safe_write(text_length_ptr, (message.len() - index) as Len);
        // The length parameter does not matter because character data uses 8bit words and
        // we can obtain it from message.chars().count() above.
        stmt.insert_var_data_cache(col_num, CachedData::Char(len + index, message));
        ret
    }

    ///
    /// set_output_binary writes [`message`] to the *Char [`output_ptr`]. [`buffer_len`] is the
    /// length of the [`output_ptr`] buffer in characters; the message should be truncated
    /// if it is longer than the buffer length. The number of characters written to [`output_ptr`]
    /// should be stored in [`text_length_ptr`].
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_binary(
        stmt: &Statement,
        data: Vec<u8>,
        col_num: USmallInt,
        index: usize,
        output_ptr: *mut Char,
        buffer_len: usize,
        text_length_ptr: *mut Len,
    ) -> SqlReturn {
        // This should be impossible per the DM.
        if output_ptr.is_null() {
            return SqlReturn::ERROR;
        }
        // TODO Power BI: This will return NO_DATA if the data is size 0 to begin with, not just
        // when the data runs out. Check to see if this is correct behavior.
        if index >= data.len() {
            ptr_safe_write(text_length_ptr, 0);
            return SqlReturn::NO_DATA;
        }
        let (len, ret) =
            set_output_binary_helper(data.get(index..).unwrap(), output_ptr, buffer_len);
        ptr_safe_write(text_length_ptr, (data.len() - index) as Len);
        stmt.insert_var_data_cache(col_num, CachedData::Bin(len + index, data));
        ret
    }

    ///
    /// set_output_fixed_data writes [`data`], which must be a fixed sized type, to the Pointer [`output_ptr`].
    /// ODBC drivers assume the output buffer is large enough for fixed types, and are allowed to
    /// overwrite the buffer if too small a buffer is passed.
    ///
    /// # Safety
    /// This writes to multiple raw C-pointers
    ///
    pub unsafe fn set_output_fixed_data<T: core::fmt::Debug>(
        data: &T,
        output_ptr: Pointer,
        data_len_ptr: *mut Len,
    ) -> SqlReturn {
        // This should be impossible per the DM.
        if output_ptr.is_null() {
            return SqlReturn::ERROR;
        }

        // If the output_ptr is NULL, we should still return the length of the message.
        ptr_safe_write(data_len_ptr, size_of::<T>() as isize);

        write_fixed_data(data, output_ptr);
        SqlReturn::SUCCESS
    }
}

///
/// ptr_safe_write writes the given data to [`ptr`].
///
/// # Safety
/// This writes to a raw C-pointers
///
pub unsafe fn ptr_safe_write<T>(ptr: *mut T, data: T) {
    if !ptr.is_null() {
        *ptr = data;
    }
}

#[cfg(test)]
mod unit {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use odbc_driver_core::Error;

    #[test]
    fn integer_to_json_round_trips_through_string() {
        assert_eq!("42", SqlValue::Integer(42).to_json());
    }

    #[test]
    fn timestamp_converts_through_chrono() {
        let dt: NaiveDateTime = "2001-10-19T09:23:24.123"
            .parse::<NaiveDateTime>()
            .unwrap();
        let value = SqlValue::Timestamp(dt);
        assert_eq!(value.to_timestamp().unwrap(), dt);
        assert_eq!(value.to_date().unwrap(), dt.date());
        assert_eq!(value.to_time().unwrap(), dt.time());
    }

    #[test]
    fn date_and_time_variants_reject_unrelated_conversions() {
        let date = SqlValue::Date(NaiveDate::from_ymd_opt(2001, 10, 19).unwrap());
        assert!(matches!(
            date.to_time().unwrap_err(),
            Error::RestrictedDataType(..)
        ));

        let time = SqlValue::Time(NaiveTime::from_hms_opt(9, 23, 24).unwrap());
        assert!(matches!(
            time.to_date().unwrap_err(),
            Error::RestrictedDataType(..)
        ));
    }

    #[test]
    fn double_to_i64_reports_fractional_truncation() {
        let (value, warning) = SqlValue::Double(3.5).to_i64().unwrap();
        assert_eq!(value, 3);
        assert!(matches!(warning, Some(Error::FractionalTruncation(_))));
    }

    #[test]
    fn guid_requires_sixteen_byte_binary() {
        assert!(SqlValue::Binary(vec![0u8; 16]).to_guid().is_ok());
        assert!(SqlValue::Binary(vec![0u8; 4]).to_guid().is_err());
        assert!(matches!(
            SqlValue::Integer(1).to_guid().unwrap_err(),
            Error::RestrictedDataType(..)
        ));
    }
}
