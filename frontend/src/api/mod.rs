use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use shared::{ApiFailure, DeleteMemberRequest, Member, MemberMap, SaveMemberRequest};

const API_BASE: &str = "/api";

pub struct ApiClient;

impl ApiClient {
    /// Normalize every failure shape (transport error, non-2xx status,
    /// unparsable body) into a single user-facing message.
    async fn request<T: DeserializeOwned>(
        method: &str,
        path: &str,
        body: Option<impl Serialize>,
    ) -> Result<T, String> {
        let url = format!("{}{}", API_BASE, path);

        let request = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            _ => return Err("Invalid method".to_string()),
        };

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?
        } else {
            request.send().await.map_err(|e| e.to_string())?
        };

        if response.ok() {
            response.json().await.map_err(|e| e.to_string())
        } else {
            let failure: ApiFailure = response
                .json()
                .await
                .unwrap_or_else(|_| ApiFailure::new("An unknown error occurred"));
            Err(failure.error)
        }
    }

    /// POST returning a `{success, ...}` body; an explicit `success: false`
    /// counts as a failure even on a 2xx status.
    async fn request_status(path: &str, body: &impl Serialize) -> Result<(), String> {
        let result: serde_json::Value = Self::request("POST", path, Some(body)).await?;

        if result["success"].as_bool().unwrap_or(false) {
            Ok(())
        } else {
            Err(result["error"]
                .as_str()
                .unwrap_or("Request failed")
                .to_string())
        }
    }

    pub async fn add_member(request: &SaveMemberRequest) -> Result<(), String> {
        Self::request_status("/addMember", request).await
    }

    pub async fn update_member(request: &SaveMemberRequest) -> Result<(), String> {
        Self::request_status("/updateMember", request).await
    }

    pub async fn delete_member(rfid: &str) -> Result<(), String> {
        let request = DeleteMemberRequest {
            rfid: rfid.to_string(),
        };
        Self::request_status("/deleteMember", &request).await
    }

    /// Look up one member by RFID; an absent tag is `Ok(None)`, not an error.
    pub async fn get_member(rfid: &str) -> Result<Option<Member>, String> {
        let response = Request::get(&format!("{}/getMember", API_BASE))
            .query([("rfid", rfid)])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.ok() {
            let member: Member = response.json().await.map_err(|e| e.to_string())?;
            Ok(Some(member))
        } else if response.status() == 404 {
            Ok(None)
        } else {
            let failure: ApiFailure = response
                .json()
                .await
                .unwrap_or_else(|_| ApiFailure::new("An unknown error occurred"));
            Err(failure.error)
        }
    }

    pub async fn get_members() -> Result<MemberMap, String> {
        Self::request("GET", "/getMembers", None::<()>).await
    }
}
