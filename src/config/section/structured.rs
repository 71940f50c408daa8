//! `[structured_data]` configuration.
//!
//! Controls the optional schema.org JSON-LD script. Off unless `enable = true`.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredDataConfig {
    /// Emit the JSON-LD script.
    pub enable: bool,

    /// schema.org type (e.g., "Person", "Organization").
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    /// Contact address, emitted as `mailto:` link.
    pub email: String,

    pub job_title: String,

    /// Profile URLs (`sameAs`).
    pub same_as: Vec<String>,
}

impl Default for StructuredDataConfig {
    fn default() -> Self {
        Self {
            enable: false,
            kind: "Person".into(),
            name: String::new(),
            email: String::new(),
            job_title: String::new(),
            same_as: Vec::new(),
        }
    }
}

pub struct StructuredDataConfigFields {
    pub enable: FieldPath,
    pub kind: FieldPath,
    pub name: FieldPath,
    pub email: FieldPath,
    pub job_title: FieldPath,
    pub same_as: FieldPath,
}

impl StructuredDataConfig {
    pub const FIELDS: StructuredDataConfigFields = StructuredDataConfigFields {
        enable: FieldPath::new("structured_data.enable"),
        kind: FieldPath::new("structured_data.type"),
        name: FieldPath::new("structured_data.name"),
        email: FieldPath::new("structured_data.email"),
        job_title: FieldPath::new("structured_data.job_title"),
        same_as: FieldPath::new("structured_data.same_as"),
    };

    pub const TEMPLATE: &'static str = r#"[structured_data]
# Emit a schema.org JSON-LD script in <head>
enable = false
type = "Person"
# name = "Their name"
# email = "email@website.com"
# job_title = "What they do"
# same_as = ["https://twitter.com/example"]
"#;

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.kind.trim().is_empty() {
            diag.error(Self::FIELDS.kind, "schema.org type is empty");
        }
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "name is required when structured data is enabled",
                format!("set {} or disable {}", Self::FIELDS.name, Self::FIELDS.enable),
            );
        }
        if self.email.starts_with("mailto:") {
            diag.warn(Self::FIELDS.email, "'mailto:' is added automatically");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_skips_validation() {
        let mut diag = ConfigDiagnostics::new();
        StructuredDataConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_enabled_requires_name() {
        let config = StructuredDataConfig {
            enable: true,
            email: "mailto:a@b.c".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, StructuredDataConfig::FIELDS.name);
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_type_key_rename() {
        let config: StructuredDataConfig =
            toml::from_str("enable = true\ntype = \"Organization\"\nname = \"Acme\"").unwrap();
        assert_eq!(config.kind, "Organization");
        assert!(config.enable);
    }
}
