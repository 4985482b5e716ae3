//! Per-shape adapters for the generic editor.
//!
//! Each `Form` is the flat representation edited over the wire: sequence
//! fields become a multi-line (`description`, `features`) or
//! comma-separated (`technologies`) text field, and optional fields become
//! plain strings with empty meaning absent.

use serde::{Deserialize, Serialize};

use crate::editor::text::{join_comma, join_lines, split_comma_trim, split_lines};
use crate::editor::EditableShape;
use crate::models::portfolio::{Education, Experience, Link, Project};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceForm {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    /// One bullet per line.
    pub description: String,
}

impl EditableShape for Experience {
    type Form = ExperienceForm;

    fn blank() -> Self {
        Self::default()
    }

    fn from_form(form: ExperienceForm) -> Self {
        Experience {
            role: form.role,
            company: form.company,
            period: form.period,
            location: form.location,
            description: split_lines(&form.description),
        }
    }

    fn to_form(&self) -> ExperienceForm {
        ExperienceForm {
            role: self.role.clone(),
            company: self.company.clone(),
            period: self.period.clone(),
            location: self.location.clone(),
            description: join_lines(&self.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationForm {
    pub degree: String,
    pub institution: String,
    pub period: String,
    /// Empty means no details.
    pub details: String,
}

impl EditableShape for Education {
    type Form = EducationForm;

    fn blank() -> Self {
        Self::default()
    }

    fn from_form(form: EducationForm) -> Self {
        Education {
            degree: form.degree,
            institution: form.institution,
            period: form.period,
            details: if form.details.is_empty() {
                None
            } else {
                Some(form.details)
            },
        }
    }

    fn to_form(&self) -> EducationForm {
        EducationForm {
            degree: self.degree.clone(),
            institution: self.institution.clone(),
            period: self.period.clone(),
            details: self.details.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub name: String,
    pub image_url: String,
    pub description: String,
    /// One feature per line.
    pub features: String,
    /// Comma-separated.
    pub technologies: String,
    pub link: String,
}

impl EditableShape for Project {
    type Form = ProjectForm;

    fn blank() -> Self {
        Self::default()
    }

    fn from_form(form: ProjectForm) -> Self {
        Project {
            name: form.name,
            description: form.description,
            technologies: split_comma_trim(&form.technologies),
            features: split_lines(&form.features),
            image_url: form.image_url,
            link: form.link,
        }
    }

    fn to_form(&self) -> ProjectForm {
        ProjectForm {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            description: self.description.clone(),
            features: join_lines(&self.features),
            technologies: join_comma(&self.technologies),
            link: self.link.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkForm {
    pub name: String,
    pub url: String,
}

impl EditableShape for Link {
    type Form = LinkForm;

    fn blank() -> Self {
        Self::default()
    }

    fn from_form(form: LinkForm) -> Self {
        Link {
            name: form.name,
            url: form.url,
        }
    }

    fn to_form(&self) -> LinkForm {
        LinkForm {
            name: self.name.clone(),
            url: self.url.clone(),
        }
    }
}
