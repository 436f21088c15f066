use actix_web::{web, HttpResponse, Result};
use shared::{ApiFailure, ApiStatus, DeleteMemberRequest, MemberQuery, SaveMemberRequest};

use crate::models::AppState;
use crate::services::members as members_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/addMember", web::post().to(add_member))
        .route("/addMember", web::route().to(method_not_allowed))
        .route("/updateMember", web::post().to(update_member))
        .route("/updateMember", web::route().to(method_not_allowed))
        .route("/deleteMember", web::post().to(delete_member))
        .route("/deleteMember", web::route().to(method_not_allowed))
        .route("/getMember", web::get().to(get_member))
        .route("/getMember", web::route().to(method_not_allowed))
        .route("/getMembers", web::get().to(get_members))
        .route("/getMembers", web::route().to(method_not_allowed));
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ApiFailure::new("Method not allowed"))
}

/// No existence check before the write: adding to an RFID that is already
/// registered overwrites the record.
async fn add_member(
    state: web::Data<AppState>,
    body: web::Json<SaveMemberRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    if request.rfid.trim().is_empty() || request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiFailure::rejected("RFID and Name are required")));
    }

    match members_service::add_member(state.store.as_ref(), &request).await {
        Ok(()) => {
            Ok(HttpResponse::Ok().json(ApiStatus::with_message("Member added successfully")))
        }
        Err(e) => {
            log::error!("Error adding member: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiFailure::rejected(e.to_string())))
        }
    }
}

async fn update_member(
    state: web::Data<AppState>,
    body: web::Json<SaveMemberRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    if request.rfid.trim().is_empty() || request.name.trim().is_empty() {
        return Ok(
            HttpResponse::BadRequest().json(ApiFailure::new("RFID and Name are required"))
        );
    }

    match members_service::update_member(state.store.as_ref(), &request).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiStatus::ok())),
        Err(e) => {
            log::error!("Error updating member: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiFailure::new(e.to_string())))
        }
    }
}

async fn delete_member(
    state: web::Data<AppState>,
    body: web::Json<DeleteMemberRequest>,
) -> Result<HttpResponse> {
    let request = body.into_inner();

    if request.rfid.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiFailure::new("RFID is required")));
    }

    match members_service::delete_member(state.store.as_ref(), &request.rfid).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiStatus::ok())),
        Err(e) => {
            log::error!("Error deleting member: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiFailure::new(e.to_string())))
        }
    }
}

async fn get_member(
    state: web::Data<AppState>,
    query: web::Query<MemberQuery>,
) -> Result<HttpResponse> {
    if query.rfid.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiFailure::new("RFID is required")));
    }

    match members_service::get_member(state.store.as_ref(), &query.rfid).await {
        Ok(Some(member)) => Ok(HttpResponse::Ok().json(member)),
        Ok(None) => Ok(HttpResponse::NotFound().json(serde_json::Value::Null)),
        Err(e) => {
            log::error!("Error getting member: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiFailure::new(e.to_string())))
        }
    }
}

async fn get_members(state: web::Data<AppState>) -> Result<HttpResponse> {
    match members_service::list_members(state.store.as_ref()).await {
        Ok(members) => Ok(HttpResponse::Ok().json(members)),
        Err(e) => {
            log::error!("Error getting members: {:?}", e);
            Ok(HttpResponse::InternalServerError().json(ApiFailure::new(e.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::models::AppState;
    use crate::store::{MemoryStore, RecordStore};
    use shared::{Member, MemberMap};

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            store_url: "http://localhost:9000".to_string(),
            store_namespace: "members".to_string(),
            store_auth_token: None,
            cors_origins: vec![],
            static_files_path: None,
        }
    }

    macro_rules! test_app {
        ($store:expr) => {{
            let store: Arc<dyn RecordStore> = $store.clone();
            let state = actix_web::web::Data::new(AppState {
                store,
                config: test_config(),
            });
            test::init_service(
                App::new()
                    .app_data(state)
                    .configure(crate::handlers::configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_add_then_get_member() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let add = test::TestRequest::post()
            .uri("/api/addMember")
            .set_json(json!({"rfid": "AB12", "name": "Alice"}))
            .to_request();
        let resp = test::call_service(&app, add).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Member added successfully");

        let get = test::TestRequest::get()
            .uri("/api/getMember?rfid=AB12")
            .to_request();
        let resp = test::call_service(&app, get).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let member: Member = test::read_body_json(resp).await;
        assert_eq!(member.name, "Alice");
        assert_eq!(member.phone, "");
        assert_eq!(member.email, "");
        assert_eq!(member.points, 0);
        assert!(member.created_at.is_some());
        assert_eq!(member.created_at, member.updated_at);
    }

    #[actix_web::test]
    async fn test_add_missing_name_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let add = test::TestRequest::post()
            .uri("/api/addMember")
            .set_json(json!({"rfid": "AB12"}))
            .to_request();
        let resp = test::call_service(&app, add).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "RFID and Name are required");

        // Store untouched
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_add_blank_rfid_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let add = test::TestRequest::post()
            .uri("/api/addMember")
            .set_json(json!({"rfid": "   ", "name": "Alice"}))
            .to_request();
        let resp = test::call_service(&app, add).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_wrong_verb_is_method_not_allowed() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let get_on_add = test::TestRequest::get().uri("/api/addMember").to_request();
        let resp = test::call_service(&app, get_on_add).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let post_on_list = test::TestRequest::post()
            .uri("/api/getMembers")
            .to_request();
        let resp = test::call_service(&app, post_on_list).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Method not allowed");
    }

    #[actix_web::test]
    async fn test_update_refreshes_updated_at_only() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let add = test::TestRequest::post()
            .uri("/api/addMember")
            .set_json(json!({"rfid": "AB12", "name": "Alice"}))
            .to_request();
        test::call_service(&app, add).await;

        let get = test::TestRequest::get()
            .uri("/api/getMember?rfid=AB12")
            .to_request();
        let before: Member = test::read_body_json(test::call_service(&app, get).await).await;

        let update = test::TestRequest::post()
            .uri("/api/updateMember")
            .set_json(json!({"rfid": "AB12", "name": "Alice", "points": 50}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let get = test::TestRequest::get()
            .uri("/api/getMember?rfid=AB12")
            .to_request();
        let after: Member = test::read_body_json(test::call_service(&app, get).await).await;

        assert_eq!(after.points, 50);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[actix_web::test]
    async fn test_update_missing_fields_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let update = test::TestRequest::post()
            .uri("/api/updateMember")
            .set_json(json!({"name": "Alice"}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "RFID and Name are required");
    }

    #[actix_web::test]
    async fn test_get_absent_member_is_null_404() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let get = test::TestRequest::get()
            .uri("/api/getMember?rfid=NOPE")
            .to_request();
        let resp = test::call_service(&app, get).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, Value::Null);
    }

    #[actix_web::test]
    async fn test_get_member_without_rfid_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let get = test::TestRequest::get().uri("/api/getMember").to_request();
        let resp = test::call_service(&app, get).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "RFID is required");
    }

    #[actix_web::test]
    async fn test_get_members_empty_store() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let get = test::TestRequest::get().uri("/api/getMembers").to_request();
        let resp = test::call_service(&app, get).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let members: MemberMap = test::read_body_json(resp).await;
        assert!(members.is_empty());
    }

    #[actix_web::test]
    async fn test_get_members_maps_rfid_to_member() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        for (rfid, name) in [("AB12", "Alice"), ("CD34", "Bob")] {
            let add = test::TestRequest::post()
                .uri("/api/addMember")
                .set_json(json!({"rfid": rfid, "name": name}))
                .to_request();
            test::call_service(&app, add).await;
        }

        let get = test::TestRequest::get().uri("/api/getMembers").to_request();
        let members: MemberMap = test::read_body_json(test::call_service(&app, get).await).await;

        assert_eq!(members.len(), 2);
        assert_eq!(members["AB12"].name, "Alice");
        assert_eq!(members["CD34"].name, "Bob");
    }

    #[actix_web::test]
    async fn test_delete_member() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let add = test::TestRequest::post()
            .uri("/api/addMember")
            .set_json(json!({"rfid": "AB12", "name": "Alice"}))
            .to_request();
        test::call_service(&app, add).await;

        let delete = test::TestRequest::post()
            .uri("/api/deleteMember")
            .set_json(json!({"rfid": "AB12"}))
            .to_request();
        let resp = test::call_service(&app, delete).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let get = test::TestRequest::get()
            .uri("/api/getMember?rfid=AB12")
            .to_request();
        let resp = test::call_service(&app, get).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_absent_member_still_succeeds() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let delete = test::TestRequest::post()
            .uri("/api/deleteMember")
            .set_json(json!({"rfid": "NOPE"}))
            .to_request();
        let resp = test::call_service(&app, delete).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }

    #[actix_web::test]
    async fn test_delete_without_rfid_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let app = test_app!(store);

        let delete = test::TestRequest::post()
            .uri("/api/deleteMember")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, delete).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "RFID is required");
    }
}
