use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Member Types
// ============================================================================

/// A registry entry, stored in the record store under its RFID key.
///
/// The RFID itself is the storage key and is not repeated inside the
/// document. Timestamps are optional because the store may hold partial
/// documents created by a field merge against an absent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full member list as returned by `GET /api/getMembers`: rfid -> member.
pub type MemberMap = BTreeMap<String, Member>;

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /api/addMember` and `POST /api/updateMember`.
///
/// Every field defaults so a sparse client body deserializes; the handlers
/// reject empty `rfid`/`name` with a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveMemberRequest {
    #[serde(default)]
    pub rfid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub points: i64,
}

/// Body of `POST /api/deleteMember`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteMemberRequest {
    #[serde(default)]
    pub rfid: String,
}

/// Query string of `GET /api/getMember`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberQuery {
    #[serde(default)]
    pub rfid: String,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiStatus {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
}

impl ApiFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: None,
            error: error.into(),
        }
    }

    /// Failure body that also carries `success: false`, as the add endpoint
    /// reports validation errors.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            error: error.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
