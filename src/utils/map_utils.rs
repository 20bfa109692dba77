use std::any::type_name;
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash, Hasher};

use serde_json::{Map, Value};

/// Read-only view of an associative container keyed by `Q`.
pub trait Mapping<Q: ?Sized> {
    type Value;

    fn lookup(&self, key: &Q) -> Option<&Self::Value>;

    /// Fully qualified type of the container, used in diagnostics.
    fn type_tag(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<K, V, S, Q> Mapping<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Mapping<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<Q> Mapping<Q> for Map<String, Value>
where
    String: Borrow<Q>,
    Q: Ord + Eq + Hash + ?Sized,
{
    type Value = Value;

    fn lookup(&self, key: &Q) -> Option<&Value> {
        self.get(key)
    }
}

// Only objects have keys; any other JSON value never matches.
impl Mapping<str> for Value {
    type Value = Value;

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }
}

/// Opaque handle for the container at `value`, stable for the container's lifetime.
pub fn identity_token<T: ?Sized>(value: &T) -> String {
    let address = value as *const T as *const () as usize;
    let mut hasher = DefaultHasher::new();
    address.hash(&mut hasher);
    format!("0x{:016x}", hasher.finish())
}

/// Renders a key for diagnostics.
///
/// String keys lose the quotes `Debug` puts around them, since the diagnostic
/// adds its own.
pub fn render_key<Q: Debug + ?Sized>(key: &Q) -> String {
    let rendered = format!("{:?}", key);
    if rendered.len() >= 2 && rendered.starts_with('"') && rendered.ends_with('"') {
        rendered[1..rendered.len() - 1].to_string()
    } else {
        rendered
    }
}
