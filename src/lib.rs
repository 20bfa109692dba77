//! Map lookups that fail loudly.
//!
//! [`must_get`] returns the value stored under a key, or panics with a
//! diagnostic naming the key and the map when the key is missing:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut map = HashMap::new();
//! map.insert("key".to_string(), "some value");
//!
//! assert_eq!(mustget::must_get(&map, "key"), Some(&"some value"));
//! ```
//!
//! Missing keys can be made non-fatal with [`set_disable_panic`] (or a
//! [`Config`] bound to a [`MustGet`]), and the diagnostic can carry the whole
//! map with [`set_panic_with_values`]. Diagnostics go to the `log` facade and to
//! a replaceable sink, see [`set_output`].

mod utils;

pub use crate::utils::config_utils::{
    disable_panic, panic_with_values, set_disable_panic, set_panic_with_values, Config,
};
pub use crate::utils::error_utils::LookupError;
pub use crate::utils::log_utils::{discard, redirect_output, set_output, OutputGuard};
pub use crate::utils::lookup_utils::{must_get, must_get_any, try_get, MustGet, MustGetExt};
pub use crate::utils::map_utils::{identity_token, Mapping};
pub use crate::utils::result_utils::FatalValueMapper;
