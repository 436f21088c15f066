use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::store::{RecordStore, StoreError};
use shared::{Member, MemberMap, SaveMemberRequest};

#[derive(Debug, Error)]
pub enum MemberError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed member document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Write the full document for a member, stamping both timestamps.
///
/// No existence check is made first: adding over an existing RFID replaces
/// the record. The handlers validate `rfid`/`name` before calling this.
pub async fn add_member(
    store: &dyn RecordStore,
    request: &SaveMemberRequest,
) -> Result<(), MemberError> {
    let now = Utc::now();
    let member = Member {
        name: request.name.clone(),
        phone: request.phone.clone(),
        email: request.email.clone(),
        points: request.points,
        created_at: Some(now),
        updated_at: Some(now),
    };

    store
        .set(&request.rfid, serde_json::to_value(&member)?)
        .await?;
    Ok(())
}

/// Merge the mutable fields into the document at the member's RFID,
/// refreshing `updatedAt` and leaving `createdAt` (and the key) untouched.
pub async fn update_member(
    store: &dyn RecordStore,
    request: &SaveMemberRequest,
) -> Result<(), MemberError> {
    let patch = json!({
        "name": request.name,
        "phone": request.phone,
        "email": request.email,
        "points": request.points,
        "updatedAt": Utc::now(),
    });

    store.merge(&request.rfid, patch).await?;
    Ok(())
}

pub async fn get_member(
    store: &dyn RecordStore,
    rfid: &str,
) -> Result<Option<Member>, MemberError> {
    match store.get(rfid).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub async fn list_members(store: &dyn RecordStore) -> Result<MemberMap, MemberError> {
    let mut members = MemberMap::new();
    for (rfid, value) in store.get_all().await? {
        members.insert(rfid, serde_json::from_value(value)?);
    }
    Ok(members)
}

/// Unconditional key removal; deleting an absent RFID is still a success.
pub async fn delete_member(store: &dyn RecordStore, rfid: &str) -> Result<(), MemberError> {
    store.remove(rfid).await?;
    Ok(())
}
