//! Request and reply bodies exchanged with the command interpreter.
//!
//! Field names follow the interpreter's JSON contract, which is why several
//! of them are renamed from their Rust names.

use serde::{Deserialize, Serialize};

/// Command interpretation endpoint
pub const ANALYZE_PATH: &str = "/analizar";
/// Directory remediation endpoint
pub const CREATE_DIRECTORY_PATH: &str = "/crear-directorio";
/// File-with-parent-directories remediation endpoint
pub const CREATE_FILE_DIRECTORIES_PATH: &str = "/ext2-crear-directorios";

/// `tipoConfirmacion` value the interpreter uses when a file already exists
pub const OVERWRITE_CONFIRMATION: &str = "sobreescribir";

/// Reply from `/analizar`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzeReply {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "requiereConfirmacion")]
    pub requires_confirmation: bool,
    #[serde(rename = "dirPath", skip_serializing_if = "Option::is_none")]
    pub dir_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "comando", skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(rename = "tipoConfirmacion", skip_serializing_if = "Option::is_none")]
    pub confirmation_type: Option<String>,
    #[serde(rename = "exito", skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Body of a `/crear-directorio` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateDirectoryRequest {
    pub path: String,
    #[serde(rename = "comando")]
    pub command: String,
}

/// Body of an `/ext2-crear-directorios` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateFileDirectoriesRequest {
    pub path: String,
    pub command: String,
    pub confirm: bool,
    pub overwrite: bool,
}

/// Reply from either remediation endpoint.
///
/// A rejected request body comes back as `{"error": ...}` with no `exito`
/// field, which decodes as an unsuccessful reply.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RemediationReply {
    #[serde(rename = "exito")]
    pub success: bool,
    #[serde(rename = "mensaje", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "comando", skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl RemediationReply {
    /// The human readable outcome, whichever field carried it.
    #[must_use]
    pub fn text(&self) -> String {
        match (&self.message, &self.error) {
            (Some(message), _) => message.clone(),
            (None, Some(error)) => error.clone(),
            (None, None) if self.success => "Done".to_string(),
            (None, None) => "The remediation request failed without a message".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_decodes() {
        let reply: AnalyzeReply =
            serde_json::from_str(r#"{"mensaje":"Disco creado exitosamente","exito":true}"#)
                .unwrap();
        assert_eq!(reply.message, "Disco creado exitosamente");
        assert!(!reply.requires_confirmation);
        assert_eq!(reply.success, Some(true));
    }

    #[test]
    fn test_directory_confirmation_decodes() {
        let reply: AnalyzeReply = serde_json::from_str(
            r#"{
                "mensaje": "El directorio no existe: /home/discos\n¿Desea crearlo?",
                "requiereConfirmacion": true,
                "dirPath": "/home/discos",
                "comando": "mkdisk -size=10 -path=/home/discos/d1.mia"
            }"#,
        )
        .unwrap();

        assert!(reply.requires_confirmation);
        assert_eq!(reply.dir_path.as_deref(), Some("/home/discos"));
        assert!(reply.confirmation_type.is_none());
    }

    #[test]
    fn test_overwrite_confirmation_decodes() {
        let reply: AnalyzeReply = serde_json::from_str(
            r#"{
                "mensaje": "El archivo '/a/b.txt' ya existe. ¿Desea sobreescribirlo?",
                "exito": true,
                "requiereConfirmacion": true,
                "tipoConfirmacion": "sobreescribir",
                "comando": "mkfile -path=/a/b.txt",
                "path": "/a/b.txt"
            }"#,
        )
        .unwrap();

        assert_eq!(reply.confirmation_type.as_deref(), Some(OVERWRITE_CONFIRMATION));
        assert_eq!(reply.path.as_deref(), Some("/a/b.txt"));
    }

    #[test]
    fn test_file_request_uses_contract_names() {
        let request = CreateFileDirectoriesRequest {
            path: "/a/b.txt".to_string(),
            command: "mkfile -path=/a/b.txt".to_string(),
            confirm: true,
            overwrite: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "path": "/a/b.txt",
                "command": "mkfile -path=/a/b.txt",
                "confirm": true,
                "overwrite": false
            })
        );
    }

    #[test]
    fn test_directory_request_uses_contract_names() {
        let request = CreateDirectoryRequest {
            path: "/a".to_string(),
            command: "mkdisk -path=/a/d.mia".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "path": "/a", "comando": "mkdisk -path=/a/d.mia" })
        );
    }

    #[test]
    fn test_rejected_remediation_reply_text() {
        let reply: RemediationReply =
            serde_json::from_str(r#"{"error":"Datos inválidos"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.text(), "Datos inválidos");
    }
}
