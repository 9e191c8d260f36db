//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use serde_json::Value;

/// Wrapper type for displaying the server's response to a create request.
///
/// The events endpoint answers with an opaque JSON document. The wrapper
/// reports its `id` when there is one and prints the full document as a
/// fenced JSON block.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use soiree_core::display::CreateResult;
///
/// let result = CreateResult::new(json!({"id": "evt_1", "name": "Launch"}));
/// assert!(result.to_string().starts_with("Created event with ID: evt_1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource.get("id") {
            Some(Value::String(id)) => writeln!(f, "Created event with ID: {id}")?,
            Some(id) if !id.is_null() => writeln!(f, "Created event with ID: {id}")?,
            _ => writeln!(f, "Created event")?,
        }

        if self.resource.is_null() {
            return Ok(());
        }

        let body = serde_json::to_string_pretty(&self.resource).map_err(|_| fmt::Error)?;
        writeln!(f)?;
        writeln!(f, "```json")?;
        writeln!(f, "{body}")?;
        writeln!(f, "```")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_result_with_numeric_id() {
        let output = CreateResult::new(json!({"id": 42})).to_string();
        assert!(output.starts_with("Created event with ID: 42\n"));
        assert!(output.contains("```json"));
        assert!(output.contains("\"id\": 42"));
    }

    #[test]
    fn test_create_result_without_body() {
        let output = CreateResult::new(Value::Null).to_string();
        assert_eq!(output, "Created event\n");
    }
}
