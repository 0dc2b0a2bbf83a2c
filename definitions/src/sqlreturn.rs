/// Return codes produced by every `SQL*` entry point.
#[allow(non_camel_case_types)]
#[repr(i16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SqlReturn {
    SUCCESS = 0,
    SUCCESS_WITH_INFO = 1,
    STILL_EXECUTING = 2,
    NEED_DATA = 99,
    NO_DATA = 100,
    ERROR = -1,
    INVALID_HANDLE = -2,
}
