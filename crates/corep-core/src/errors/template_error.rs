/// Template schema errors — codes unknown to the configured schema version.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown row code {code} for template {template}")]
    UnknownRowCode { code: String, template: String },

    #[error("unknown column code {code} for template {template}")]
    UnknownColumnCode { code: String, template: String },

    #[error("unsupported template version: {version}")]
    UnknownVersion { version: String },

    #[error("schema definition invalid: {reason}")]
    InvalidDefinition { reason: String },
}
