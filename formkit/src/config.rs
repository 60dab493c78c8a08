//! Typed widget configuration.
//!
//! Every section and field has a default, so an empty JSON object (or no
//! file at all) yields the stock behavior. Selectors are expressed as the
//! class names, data keys and element ids the widgets look for.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub date_picker: DatePickerConfig,
    pub lookup: LookupConfig,
    pub chat: ChatConfig,
    pub uploader: UploaderConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerConfig {
    /// Id of the shared popup element.
    pub popup_id: String,
    /// Class of the element grouping a date input with its icon trigger.
    pub wrapper_class: String,
    /// Class of the icon trigger inside the wrapper.
    pub trigger_class: String,
    /// `data-*` key that forces the mode (`single` or `range`).
    pub mode_key: String,
    pub range_separator: char,
    /// Gap between the field and the popup, also the viewport edge margin.
    pub margin: i32,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            popup_id: "common-datepicker".to_string(),
            wrapper_class: "date-field".to_string(),
            trigger_class: "date-field-icon".to_string(),
            mode_key: "mode".to_string(),
            range_separator: '~',
            margin: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub input_id: String,
    pub button_id: String,
    pub list_id: String,
    /// `data-*` key marking the combo root.
    pub combo_key: String,
    pub name_output_id: String,
    pub org_output_id: String,
    pub dept_output_id: String,
    pub users: Vec<LookupUser>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            input_id: "lookup-key".to_string(),
            button_id: "btn-lookup".to_string(),
            list_id: "lookup-list".to_string(),
            combo_key: "combo".to_string(),
            name_output_id: "user-name".to_string(),
            org_output_id: "user-org".to_string(),
            dept_output_id: "user-dept".to_string(),
            users: default_users(),
        }
    }
}

/// One row of the lookup mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupUser {
    pub birth: String,
    pub name: String,
    pub user_id: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub dept: String,
}

fn default_users() -> Vec<LookupUser> {
    [
        ("700123", "Kim Gyeonggi", "1234asedwqt"),
        ("700123", "Hong Gildong", "gfdgfh456"),
        ("700123", "Lee Suwon", "nbbddd11"),
    ]
    .into_iter()
    .map(|(birth, name, user_id)| LookupUser {
        birth: birth.to_string(),
        name: name.to_string(),
        user_id: user_id.to_string(),
        org: "AI Bureau".to_string(),
        dept: "AI Data Administration".to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub textarea_id: String,
    /// Class of the optional container that receives `is-multi`.
    pub container_class: String,
    pub max_height_fallback: f32,
    pub line_height_fallback: f32,
    /// Needed height above `line_height * multi_line_factor` counts as multi-line.
    pub multi_line_factor: f32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            textarea_id: "chat-input".to_string(),
            container_class: "chat-m".to_string(),
            max_height_fallback: 280.0,
            line_height_fallback: 22.0,
            multi_line_factor: 1.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    /// `data-*` key marking each uploader root.
    pub root_key: String,
    pub target_service_id: String,
    pub doc_type_id: String,
    pub submit_event: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            root_key: "file-uploader-multi".to_string(),
            target_service_id: "upload-target-service".to_string(),
            doc_type_id: "upload-doc-type".to_string(),
            submit_event: "fileuploader:submit".to_string(),
        }
    }
}
