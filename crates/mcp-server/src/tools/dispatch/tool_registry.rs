use rmcp::handler::server::tool::{ToolCallContext, ToolRouter};
use rmcp::model::{CallToolResult, ErrorCode, JsonObject, Tool};
use rmcp::ErrorData;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::borrow::Cow;

use super::NotesService;

/// Tool name → (input schema, handler) table.
///
/// Wraps the macro-built [`ToolRouter`] so that unknown tools and malformed arguments are
/// rejected with distinct, field-level protocol errors before any handler runs.
#[derive(Clone)]
pub(super) struct ToolRegistry<S> {
    inner: ToolRouter<S>,
}

/// One argument that failed validation against a tool's input schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct FieldIssue {
    pub(super) field: String,
    pub(super) problem: String,
}

impl<S> ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    pub(super) fn new(inner: ToolRouter<S>) -> Self {
        Self { inner }
    }

    pub(super) fn list_all(&self) -> Vec<Tool> {
        self.inner.list_all()
    }

    pub(super) fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.map.keys().map(|k| k.to_string()).collect();
        names.sort();
        names
    }

    pub(super) fn input_schema(&self, tool_name: &str) -> Option<&JsonObject> {
        self.inner
            .map
            .get(tool_name)
            .map(|route| route.attr.input_schema.as_ref())
    }
}

impl ToolRegistry<NotesService> {
    pub(super) async fn call(
        &self,
        context: ToolCallContext<'_, NotesService>,
    ) -> Result<CallToolResult, ErrorData> {
        let tool_name = context.name.to_string();
        let args = context.arguments.clone();

        let Some(schema) = self.input_schema(&tool_name) else {
            log::debug!("Rejecting call to unknown tool '{tool_name}'");
            return Err(tool_not_found(&tool_name, &self.tool_names()));
        };

        let issues = validate_arguments(schema, args.as_ref());
        if !issues.is_empty() {
            log::debug!("Rejecting call to '{tool_name}': {issues:?}");
            return Err(invalid_arguments(&tool_name, schema, issues));
        }

        log::debug!("Dispatching tool '{tool_name}'");
        match self.inner.call(context).await {
            Ok(result) => Ok(result),
            Err(err) => Err(enrich_invalid_params(schema, &tool_name, err)),
        }
    }
}

pub(super) fn tool_not_found(tool_name: &str, available: &[String]) -> ErrorData {
    ErrorData::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!(
            "Unknown tool '{tool_name}'. Available tools: {}",
            available.join(", ")
        ),
        Some(json!({
            "tool": tool_name,
            "available": available,
        })),
    )
}

pub(super) fn invalid_arguments(
    tool_name: &str,
    schema: &JsonObject,
    issues: Vec<FieldIssue>,
) -> ErrorData {
    let summary = issues
        .iter()
        .map(|issue| format!("`{}` {}", issue.field, issue.problem))
        .collect::<Vec<_>>()
        .join("; ");
    let mut message = format!("Invalid parameters for tool '{tool_name}': {summary}.");
    if let Some(example) = build_required_example(schema) {
        message.push_str(&format!(" Example: {example}"));
    }

    ErrorData::invalid_params(
        message,
        Some(json!({
            "tool": tool_name,
            "required": required_fields(schema),
            "issues": issues,
        })),
    )
}

/// Check `args` against the required fields and primitive property types of `schema`.
///
/// Unknown fields are not reported; handlers ignore them.
pub(super) fn validate_arguments(schema: &JsonObject, args: Option<&JsonObject>) -> Vec<FieldIssue> {
    let empty = Map::new();
    let args = args.unwrap_or(&empty);
    let props = schema.get("properties").and_then(Value::as_object);

    let mut issues = Vec::new();
    for field in required_fields(schema) {
        if !args.contains_key(&field) {
            issues.push(FieldIssue {
                field,
                problem: "is a missing required field".to_string(),
            });
        }
    }

    let Some(props) = props else {
        return issues;
    };
    let mut keys: Vec<&String> = args.keys().collect();
    keys.sort();
    for key in keys {
        let Some(expected) = props.get(key.as_str()).and_then(allowed_types) else {
            continue;
        };
        let actual = json_type_name(&args[key.as_str()]);
        if !expected.iter().any(|ty| type_matches(ty, actual)) {
            issues.push(FieldIssue {
                field: key.clone(),
                problem: format!("expected {}, got {actual}", expected.join(" or ")),
            });
        }
    }
    issues
}

fn required_fields(schema: &JsonObject) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn allowed_types(prop_schema: &Value) -> Option<Vec<String>> {
    match prop_schema.get("type")? {
        Value::String(ty) => Some(vec![ty.clone()]),
        Value::Array(types) => Some(
            types
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect(),
        ),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_matches(expected: &str, actual: &str) -> bool {
    expected == actual || (expected == "number" && actual == "integer")
}

// Serde errors that slip past `validate_arguments` still get the tool name and required
// fields attached.
fn enrich_invalid_params(schema: &JsonObject, tool_name: &str, mut err: ErrorData) -> ErrorData {
    if err.code != ErrorCode::INVALID_PARAMS {
        return err;
    }

    let required = required_fields(schema);
    let mut message = format!("Invalid parameters for tool '{tool_name}': {}", err.message);
    if !required.is_empty() {
        message.push_str(&format!(" Required: {}.", required.join(", ")));
    }
    if err.data.is_none() {
        err.data = Some(json!({
            "tool": tool_name,
            "required": required,
        }));
    }
    err.message = Cow::Owned(message);
    err
}

fn build_required_example(schema: &JsonObject) -> Option<String> {
    let required = required_fields(schema);
    if required.is_empty() {
        return None;
    }
    let props = schema.get("properties").and_then(Value::as_object);

    let mut out = Map::new();
    for field in required {
        let prop_schema = props.and_then(|m| m.get(&field));
        out.insert(field, placeholder_value(prop_schema));
    }
    serde_json::to_string(&Value::Object(out)).ok()
}

fn placeholder_value(schema: Option<&Value>) -> Value {
    let ty = schema
        .and_then(allowed_types)
        .and_then(|types| types.into_iter().find(|ty| ty != "null"));
    match ty.as_deref() {
        Some("integer") | Some("number") => Value::Number(0.into()),
        Some("boolean") => Value::Bool(false),
        Some("array") => Value::Array(Vec::new()),
        Some("object") => Value::Object(Map::new()),
        _ => Value::String("...".to_string()),
    }
}
