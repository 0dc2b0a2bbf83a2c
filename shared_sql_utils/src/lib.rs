pub mod dsn;
pub mod odbcinst;

pub use dsn::{DSNError, DSNIterator, DSNOpts};
pub use odbcinst::{DriverSettings, SettingError};
