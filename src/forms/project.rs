use super::fields;
use crate::models;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectForm {
    #[serde(deserialize_with = "fields::scalar")]
    pub title: String,
    #[serde(deserialize_with = "fields::scalar")]
    pub summary: String,
    #[serde(deserialize_with = "fields::string_list")]
    pub tags: Vec<String>,
}

impl ProjectForm {
    pub const REQUIRED: &'static [&'static str] = &["title", "summary", "tags"];
}

impl From<ProjectForm> for models::Project {
    fn from(form: ProjectForm) -> Self {
        models::Project::new(
            form.title.trim().to_string(),
            form.summary.trim().to_string(),
            form.tags,
        )
    }
}
