//! Structural conversion of parsed documents into object graphs.
//!
//! Crawlino definitions arrive as JSON-shaped trees; downstream code prefers
//! reading them field by field instead of indexing into raw maps. The
//! converter walks any mapping/sequence/scalar value bottom-up and produces an
//! [`ObjectGraph`]: mappings become attribute-addressable [`ObjectNode`]s,
//! sequences keep their order, scalars pass through untouched.
//!
//! The walk recurses on the input's depth, so it must only be fed finite,
//! acyclic data. `serde_json::Value` satisfies that by construction.

use serde_json::Value;
use thiserror::Error;

/// Result alias for document conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors surfaced by the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("malformed input document: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// One node of a converted document.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectGraph {
    Object(ObjectNode),
    Array(Vec<ObjectGraph>),
    Scalar(Value),
}

impl ObjectGraph {
    /// Field access on an object node; `None` for arrays and scalars or when
    /// the field does not exist.
    pub fn field(&self, name: &str) -> Option<&ObjectGraph> {
        match self {
            ObjectGraph::Object(node) => node.get(name),
            _ => None,
        }
    }

    /// Positional access on an array node.
    pub fn index(&self, index: usize) -> Option<&ObjectGraph> {
        match self {
            ObjectGraph::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            ObjectGraph::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    /// Number of direct children (fields or elements); 0 for scalars.
    pub fn len(&self) -> usize {
        match self {
            ObjectGraph::Object(node) => node.len(),
            ObjectGraph::Array(items) => items.len(),
            ObjectGraph::Scalar(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Attribute-addressable mapping node.
///
/// Fields keep the source document's order. Lookup is a linear scan, which is
/// fine for configuration-sized documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectNode {
    fields: Vec<(String, ObjectGraph)>,
}

impl ObjectNode {
    pub fn get(&self, name: &str) -> Option<&ObjectGraph> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &ObjectGraph)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parses a JSON document and converts it into an [`ObjectGraph`].
pub fn json_to_object(text: &str) -> ConvertResult<ObjectGraph> {
    let value: Value = serde_json::from_str(text)?;
    Ok(convert_value(&value))
}

/// Converts an in-memory value into an [`ObjectGraph`].
pub fn convert_value(value: &Value) -> ObjectGraph {
    convert_value_visited(value, &mut |_| {})
}

/// Same as [`convert_value`] but invokes `visit` on every node before it is
/// converted, for side-effect instrumentation. The hook cannot alter the
/// output.
pub fn convert_value_visited(value: &Value, visit: &mut dyn FnMut(&Value)) -> ObjectGraph {
    visit(value);
    match value {
        Value::Object(map) => ObjectGraph::Object(ObjectNode {
            fields: map
                .iter()
                .map(|(name, child)| (name.clone(), convert_value_visited(child, visit)))
                .collect(),
        }),
        Value::Array(items) => ObjectGraph::Array(
            items
                .iter()
                .map(|child| convert_value_visited(child, visit))
                .collect(),
        ),
        scalar => ObjectGraph::Scalar(scalar.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_nested_mappings() {
        let value = json!({"name": "John", "city": {"id": 1, "name": "NY"}});
        let object = convert_value(&value);

        assert_eq!(object.field("name").unwrap().as_str(), Some("John"));
        let city = object.field("city").unwrap();
        assert_eq!(city.field("id").unwrap().as_i64(), Some(1));
        assert_eq!(city.field("name").unwrap().as_str(), Some("NY"));
    }

    #[test]
    fn converts_sequences_in_order() {
        let value = json!([1, {"x": 2}, "s"]);
        let object = convert_value(&value);

        assert_eq!(object.len(), 3);
        assert_eq!(object.index(0).unwrap().as_i64(), Some(1));
        assert_eq!(object.index(1).unwrap().field("x").unwrap().as_i64(), Some(2));
        assert_eq!(object.index(2).unwrap().as_str(), Some("s"));
    }

    #[test]
    fn scalars_pass_through_unchanged() {
        assert_eq!(convert_value(&json!(true)).as_bool(), Some(true));
        assert_eq!(convert_value(&json!(42)).as_i64(), Some(42));
        assert_eq!(
            convert_value(&Value::Null),
            ObjectGraph::Scalar(Value::Null)
        );
    }

    #[test]
    fn parses_documents() {
        let object = json_to_object(
            r#"{"name": "John Smith", "hometown": {"name": "New York", "id": 123}}"#,
        )
        .unwrap();
        let hometown = object.field("hometown").unwrap();
        assert_eq!(hometown.field("id").unwrap().as_i64(), Some(123));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            json_to_object("{not json"),
            Err(ConvertError::MalformedInput(_))
        ));
    }

    #[test]
    fn visitor_sees_every_node() {
        let value = json!({"a": [1, 2], "b": {"c": 3}});
        let mut visited = 0usize;
        convert_value_visited(&value, &mut |_| visited += 1);
        // root + "a" array + 2 elements + "b" object + "c" scalar
        assert_eq!(visited, 6);
    }

    #[test]
    fn deep_nesting_preserves_shape() {
        let mut value = json!(0);
        for _ in 0..64 {
            value = json!({ "inner": [value] });
        }

        let mut object = convert_value(&value);
        for _ in 0..64 {
            object = object.field("inner").unwrap().index(0).unwrap().clone();
        }
        assert_eq!(object.as_i64(), Some(0));
    }
}
