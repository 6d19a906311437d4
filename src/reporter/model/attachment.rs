use serde_derive::{Deserialize, Serialize};

/// Artifact (screenshot, trace, video) attached to a test by the runner.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::configuration::deserialize::optional_string::deserialize"
    )]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    pub fn new<N: Into<String>, P: Into<String>>(name: N, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content_type: None,
        }
    }

    /// Attachments reported inline by the runner carry no file on disk.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}
