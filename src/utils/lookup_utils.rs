use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde_json::Value;

use crate::utils::config_utils::Config;
use crate::utils::error_utils::LookupError;
use crate::utils::log_utils::fatal;
use crate::utils::map_utils::Mapping;
use crate::utils::result_utils::FatalValueMapper;

/// Looks `key` up in `map`, returning the value itself.
///
/// A missing key panics with a diagnostic naming the key and the map, unless
/// panicking is disabled, in which case `None` is returned. Behaviour follows
/// the process-wide flags; use [`MustGet`] to pin a [`Config`] instead.
pub fn must_get<'a, M, Q>(map: &'a M, key: &Q) -> Option<&'a M::Value>
where
    M: Mapping<Q> + Debug + ?Sized,
    Q: Debug + ?Sized,
{
    MustGet::global().get(map, key)
}

/// Like [`must_get`] for a map only known as `dyn Any`.
///
/// The map must be a `HashMap<K, serde_json::Value>`; anything else aborts
/// even when panicking is disabled.
pub fn must_get_any<'a, K>(map: &'a dyn Any, key: &K) -> Option<&'a Value>
where
    K: Eq + Hash + Debug + 'static,
{
    MustGet::global().get_any(map, key)
}

/// Never panics and never writes to the sink.
pub fn try_get<'a, M, Q>(map: &'a M, key: &Q) -> Result<&'a M::Value, LookupError>
where
    M: Mapping<Q> + Debug + ?Sized,
    Q: Debug + ?Sized,
{
    lookup_or_error(map, key, false)
}

fn lookup_or_error<'a, M, Q>(
    map: &'a M,
    key: &Q,
    with_values: bool,
) -> Result<&'a M::Value, LookupError>
where
    M: Mapping<Q> + Debug + ?Sized,
    Q: Debug + ?Sized,
{
    map.lookup(key)
        .ok_or_else(|| LookupError::key_not_found(map, key, with_values))
}

/// Lookup helper bound to one [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MustGet {
    config: Config,
}

impl MustGet {
    pub fn new(config: Config) -> Self {
        MustGet { config }
    }

    pub fn global() -> Self {
        MustGet::new(Config::global())
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn get<'a, M, Q>(&self, map: &'a M, key: &Q) -> Option<&'a M::Value>
    where
        M: Mapping<Q> + Debug + ?Sized,
        Q: Debug + ?Sized,
    {
        // Contents are only rendered when a diagnostic will be emitted.
        let with_values = self.config.panic_with_values && !self.config.disable_panic;
        lookup_or_error(map, key, with_values).map_value_or_panic(self.config.disable_panic)
    }

    pub fn get_any<'a, K>(&self, map: &'a dyn Any, key: &K) -> Option<&'a Value>
    where
        K: Eq + Hash + Debug + 'static,
    {
        match map.downcast_ref::<HashMap<K, Value>>() {
            Some(map) => self.get(map, key),
            None => {
                let expected = type_name::<HashMap<K, Value>>();
                fatal(LookupError::type_mismatch(expected).diagnostic())
            }
        }
    }
}

/// Method-call form of [`must_get`] and [`try_get`].
pub trait MustGetExt<Q: ?Sized>: Mapping<Q> {
    fn must_get(&self, key: &Q) -> Option<&Self::Value>;

    fn try_get(&self, key: &Q) -> Result<&Self::Value, LookupError>;
}

impl<M, Q> MustGetExt<Q> for M
where
    M: Mapping<Q> + Debug + ?Sized,
    Q: Debug + ?Sized,
{
    fn must_get(&self, key: &Q) -> Option<&M::Value> {
        must_get(self, key)
    }

    fn try_get(&self, key: &Q) -> Result<&M::Value, LookupError> {
        try_get(self, key)
    }
}
