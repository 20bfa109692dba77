use std::fmt::Debug;

use crate::utils::map_utils::{identity_token, render_key, Mapping};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The container is not keyed by the requested key type.
    TypeMismatch { expected: &'static str },
    KeyNotFound {
        key: String,
        container: &'static str,
        identity: String,
        contents: Option<String>,
    },
}

impl LookupError {
    pub fn type_mismatch(expected: &'static str) -> Self {
        LookupError::TypeMismatch { expected }
    }

    pub fn key_not_found<M, Q>(map: &M, key: &Q, with_values: bool) -> Self
    where
        M: Mapping<Q> + Debug + ?Sized,
        Q: Debug + ?Sized,
    {
        LookupError::KeyNotFound {
            key: render_key(key),
            container: map.type_tag(),
            identity: identity_token(map),
            contents: if with_values {
                Some(format!("{:?}", map))
            } else {
                None
            },
        }
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, LookupError::KeyNotFound { .. })
    }

    /// The message carried by a fatal abort.
    pub fn diagnostic(&self) -> String {
        format!("{}\n", self)
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            LookupError::TypeMismatch { expected } => {
                write!(fmt, "map is not a {}", expected)
            }
            LookupError::KeyNotFound {
                key,
                container,
                identity,
                contents: None,
            } => write!(fmt, "key \"{}\" not found in {} ({})", key, container, identity),
            LookupError::KeyNotFound {
                key,
                container,
                identity,
                contents: Some(contents),
            } => write!(
                fmt,
                "key \"{}\" not found in {} ({}) {}",
                key, container, identity, contents
            ),
        }
    }
}

impl std::error::Error for LookupError {}
