//! Job payloads sent to crypto workers.
//!
//! A payload is a finite tree owned by value, so every walk over it
//! terminates. Byte-sequence leaves are [`ByteView`]s; maps keep insertion
//! order so the walk order matches the order fields were added.

use crate::transfer::buffer::ByteView;

/// Non-binary leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Job description tree
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// Absent value
    #[default]
    Null,
    Bytes(ByteView),
    List(Vec<Payload>),
    /// Keyed container in insertion order
    Map(Vec<(String, Payload)>),
    Scalar(Scalar),
}

impl Payload {
    /// Empty keyed container
    pub fn map() -> Self {
        Payload::Map(Vec::new())
    }

    /// Append a field to a map payload, builder style.
    ///
    /// A key that is already present is overwritten in place, keeping its
    /// original position. Calling this on a non-map payload replaces it with
    /// a single-field map.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Payload>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field of a map payload
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Payload>) {
        let key = key.into();
        let value = value.into();
        if !matches!(self, Payload::Map(_)) {
            *self = Payload::map();
        }
        if let Payload::Map(entries) = self {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = value,
                None => entries.push((key, value)),
            }
        }
    }

    /// Look up a field of a map payload
    pub fn get(&self, key: &str) -> Option<&Payload> {
        match self {
            Payload::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&ByteView> {
        match self {
            Payload::Bytes(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Payload::Null)
    }
}

impl From<ByteView> for Payload {
    fn from(view: ByteView) -> Self {
        Payload::Bytes(view)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Payload::Bytes(ByteView::new(data))
    }
}

impl From<Vec<Payload>> for Payload {
    fn from(items: Vec<Payload>) -> Self {
        Payload::List(items)
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map_or(Payload::Null, Into::into)
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Scalar(Scalar::Text(value.to_owned()))
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Scalar(Scalar::Text(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let payload = Payload::map()
            .with("b", 1i64)
            .with("a", "x")
            .with("b", 2i64);
        match &payload {
            Payload::Map(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["b", "a"]);
            }
            other => panic!("expected map, got {other:?}"),
        }
        assert_eq!(payload.get("b"), Some(&Payload::Scalar(Scalar::Int(2))));
        assert_eq!(payload.get("missing"), None);
    }

    #[test]
    fn test_insert_on_scalar_becomes_map() {
        let mut payload = Payload::from(true);
        payload.insert("k", Payload::Null);
        assert!(payload.get("k").is_some_and(Payload::is_null));
    }

    #[test]
    fn test_option_conversion() {
        assert!(Payload::from(None::<Vec<u8>>).is_null());
        assert!(Payload::from(Some(vec![1u8])).as_bytes().is_some());
    }
}
