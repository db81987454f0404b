use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A weighted yes/no question within a template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub weight: f64,
}

/// A checklist template tied to a compliance standard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChecklistTemplate {
    pub name: String,
    pub standard: String,
    pub version: String,
    pub items: Vec<ChecklistItem>,
}
