use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use std::collections::HashMap;

/// The store's native item shape: attribute name to attribute value.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// Builder for keys, items and expression values.
///
/// Every request descriptor accepts `impl Into<AttributeMap>`, so an `Item`
/// can be passed wherever a key or an item is expected:
///
/// ```
/// use dynamodb_table_client::{GetRequest, Item};
///
/// let request = GetRequest::new(Item::new().set_string("PK", "123").set_string("SK", "123"));
/// assert_eq!(request.key.len(), 2);
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: AttributeMap,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marshals a serializable record into an `Item`.
    ///
    /// Fails if `record` does not serialize to a map.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, serde_dynamo::Error> {
        Ok(Self {
            attributes: serde_dynamo::to_item(record)?,
        })
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    /// Sets a number attribute.
    ///
    /// Numbers travel as their decimal string representation.
    pub fn set_number(mut self, key: impl Into<String>, value: impl Into<f64>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::N(value.into().to_string()));
        self
    }

    pub fn set_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.attributes.insert(key.into(), AttributeValue::Bool(value));
        self
    }

    /// Sets an attribute to an arbitrary value.
    pub fn set(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    /// Gets the value of an attribute as a number (f64).
    ///
    /// Returns `None` if the attribute doesn't exist, is not a number, or can't be parsed as f64.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.attributes
            .get(key)
            .and_then(|av| av.as_n().ok())
            .and_then(|n| n.parse().ok())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }
}

impl From<Item> for AttributeMap {
    fn from(item: Item) -> Self {
        item.attributes
    }
}

impl From<AttributeMap> for Item {
    fn from(attributes: AttributeMap) -> Self {
        Self { attributes }
    }
}
