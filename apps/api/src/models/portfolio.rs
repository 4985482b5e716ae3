//! The portfolio aggregate — the single record this service manages.
//!
//! Wire format is camelCase so that persisted payloads and extraction
//! responses share one shape. Contract-optional fields carry serde
//! defaults: a record absorbed from extraction is indistinguishable from
//! one built up by hand in the editor.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl PortfolioRecord {
    /// The all-empty but fully-formed record: every field present, every
    /// list empty. Shape-identical to a populated record.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Extraction services occasionally emit `null` where the contract allows a
/// field to be absent. Treat an explicit null like absence.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trips_preserving_order() {
        let record = PortfolioRecord {
            skills: vec!["Python".into(), "SQL".into(), "Python".into()],
            experience: vec![
                Experience {
                    role: "B".into(),
                    ..Default::default()
                },
                Experience {
                    role: "A".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PortfolioRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.experience[0].role, "B");
        assert_eq!(back.skills, vec!["Python", "SQL", "Python"]);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = serde_json::to_value(PortfolioRecord::empty()).unwrap();
        assert!(value["profile"].get("imageUrl").is_some());
        assert!(value["profile"].get("image_url").is_none());
    }

    #[test]
    fn test_missing_optionals_default_to_empty() {
        let json = r#"{
            "name": "Thing",
            "description": "A thing",
            "technologies": ["Rust"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.features.is_empty());
        assert!(project.link.is_empty());
        assert!(project.image_url.is_empty());
    }

    #[test]
    fn test_explicit_null_treated_as_absent() {
        let json = r#"{
            "name": "Thing",
            "description": "A thing",
            "technologies": null,
            "link": null
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.technologies.is_empty());
        assert!(project.link.is_empty());
    }
}
