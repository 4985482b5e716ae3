//! Schema Contract — the declarative shape a portfolio record must satisfy.
//!
//! The contract is data, not code: one `SchemaNode` tree drives both the
//! response-shape constraint handed to the extraction service and the
//! validation of whatever comes back. Keeping a single source for both
//! sides is what makes drift between "what we asked for" and "what we
//! accept" impossible.

use serde_json::{json, Map, Value};

use crate::models::portfolio::PortfolioRecord;

/// A node in the declarative schema tree.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Object {
        properties: Vec<(&'static str, SchemaNode)>,
        required: Vec<&'static str>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    Str {
        description: &'static str,
    },
}

impl SchemaNode {
    /// Serializes the contract into the structured-generation service's
    /// response-schema dialect (`OBJECT` / `ARRAY` / `STRING` type tags).
    pub fn to_json(&self) -> Value {
        match self {
            SchemaNode::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, node) in properties {
                    props.insert((*name).to_string(), node.to_json());
                }
                json!({
                    "type": "OBJECT",
                    "properties": Value::Object(props),
                    "required": required,
                })
            }
            SchemaNode::Array { items } => json!({
                "type": "ARRAY",
                "items": items.to_json(),
            }),
            SchemaNode::Str { description } => {
                if description.is_empty() {
                    json!({ "type": "STRING" })
                } else {
                    json!({ "type": "STRING", "description": description })
                }
            }
        }
    }
}

fn str_node(description: &'static str) -> SchemaNode {
    SchemaNode::Str { description }
}

fn str_array(description: &'static str) -> SchemaNode {
    SchemaNode::Array {
        items: Box::new(str_node(description)),
    }
}

/// The full portfolio contract. Field set and required lists mirror the
/// working model; `features` and project `imageUrl` are deliberately not
/// requested from the extraction service and default to empty on
/// absorption.
pub fn portfolio_schema() -> SchemaNode {
    let link = SchemaNode::Object {
        properties: vec![
            ("name", str_node("Name of the social link, e.g. 'LinkedIn' or 'GitHub'.")),
            ("url", str_node("The full URL.")),
        ],
        required: vec!["name", "url"],
    };

    let profile = SchemaNode::Object {
        properties: vec![
            ("name", str_node("Full name of the person.")),
            ("title", str_node("Professional title, e.g. 'MSc Data Science Student'.")),
            ("location", str_node("City and country, e.g. 'London, UK'.")),
            ("email", str_node("Contact email address.")),
            ("phone", str_node("Contact phone number.")),
            ("summary", str_node("A brief professional summary, 2-4 sentences.")),
            (
                "imageUrl",
                str_node("URL for the profile picture. May be empty; the user uploads it manually."),
            ),
            ("links", SchemaNode::Array { items: Box::new(link) }),
        ],
        required: vec![
            "name", "title", "location", "email", "phone", "summary", "links", "imageUrl",
        ],
    };

    let experience = SchemaNode::Object {
        properties: vec![
            ("role", str_node("Job title or role.")),
            ("company", str_node("Name of the company.")),
            ("period", str_node("Employment period, e.g. 'Jan 2022 - Present'.")),
            ("location", str_node("Location of the company.")),
            (
                "description",
                str_array("Key responsibilities and achievements, one entry per bullet."),
            ),
        ],
        required: vec!["role", "company", "period", "location", "description"],
    };

    let education = SchemaNode::Object {
        properties: vec![
            ("degree", str_node("Degree obtained, e.g. 'MSc in Data Science'.")),
            ("institution", str_node("Name of the university or institution.")),
            ("period", str_node("Period of study, e.g. 'Sep 2023 - Sep 2024'.")),
            ("details", str_node("Optional details like GPA or key modules.")),
        ],
        required: vec!["degree", "institution", "period"],
    };

    let project = SchemaNode::Object {
        properties: vec![
            ("name", str_node("The name of the project.")),
            ("description", str_node("A brief description of the project.")),
            ("technologies", str_array("Technologies used.")),
            ("link", str_node("Optional URL to the project repository or live demo.")),
        ],
        required: vec!["name", "description", "technologies"],
    };

    SchemaNode::Object {
        properties: vec![
            ("profile", profile),
            ("experience", SchemaNode::Array { items: Box::new(experience) }),
            ("education", SchemaNode::Array { items: Box::new(education) }),
            ("skills", str_array("Technical skills, e.g. 'Python', 'React', 'SQL'.")),
            ("projects", SchemaNode::Array { items: Box::new(project) }),
        ],
        required: vec!["profile", "experience", "education", "skills", "projects"],
    }
}

/// Walks `value` against the portfolio contract, collecting dotted paths of
/// missing or mistyped required fields. Optional fields are not checked
/// here; absorption normalizes them.
pub fn validate(value: &Value) -> Result<(), Vec<String>> {
    let mut missing = Vec::new();
    check_node(&portfolio_schema(), value, "", &mut missing);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

fn check_node(node: &SchemaNode, value: &Value, path: &str, missing: &mut Vec<String>) {
    match node {
        SchemaNode::Str { .. } => {
            if !value.is_string() {
                missing.push(label(path));
            }
        }
        SchemaNode::Array { items } => match value.as_array() {
            Some(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    check_node(items, entry, &format!("{path}[{i}]"), missing);
                }
            }
            None => missing.push(label(path)),
        },
        SchemaNode::Object {
            properties,
            required,
        } => match value.as_object() {
            Some(map) => {
                for name in required {
                    let child = child_path(path, name);
                    match map.get(*name) {
                        Some(v) => {
                            if let Some((_, prop)) = properties.iter().find(|(n, _)| n == name) {
                                check_node(prop, v, &child, missing);
                            }
                        }
                        None => missing.push(child),
                    }
                }
            }
            None => missing.push(label(path)),
        },
    }
}

fn child_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn label(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

/// Turns a contract-validated value into the working model, with optional
/// fields normalized to empty string/list.
pub fn absorb(value: Value) -> Result<PortfolioRecord, serde_json::Error> {
    serde_json::from_value(value)
}
