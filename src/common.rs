pub mod date_utils;
pub mod deserializers;
pub mod error;
pub mod format_utils;
pub mod i18n;
