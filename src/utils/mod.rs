pub mod config_utils;
pub mod error_utils;
pub mod log_utils;
pub mod lookup_utils;
pub mod map_utils;
pub mod result_utils;

#[cfg(test)]
pub(crate) mod test_utils;
