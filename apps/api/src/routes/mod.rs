pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{activities, auth, portfolio, results, resume, review, search, stats};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        // Search
        .route("/api/v1/search", get(search::handlers::handle_search))
        .route("/api/v1/search/facets", get(search::handlers::handle_facets))
        .route(
            "/api/v1/search/sessions/:session_id",
            put(search::handlers::handle_session_input)
                .get(search::handlers::handle_session_results)
                .delete(search::handlers::handle_close_session),
        )
        // Student
        .route(
            "/api/v1/students/:id/activities",
            get(activities::handlers::handle_list_activities)
                .post(activities::handlers::handle_submit_activity),
        )
        .route(
            "/api/v1/students/:id/certificates",
            get(activities::handlers::handle_list_certificates)
                .post(activities::handlers::handle_submit_certificate),
        )
        .route(
            "/api/v1/students/:id/dashboard",
            get(stats::handlers::handle_student_dashboard),
        )
        .route(
            "/api/v1/students/:id/results",
            get(results::handlers::handle_semester_results),
        )
        .route(
            "/api/v1/students/:id/portfolio",
            post(portfolio::handlers::handle_generate_portfolio),
        )
        // Faculty
        .route("/api/v1/faculty/queue", get(review::handlers::handle_review_queue))
        .route(
            "/api/v1/faculty/activities/:id/suggested-points",
            get(review::handlers::handle_suggested_points),
        )
        .route(
            "/api/v1/faculty/activities/:id/review",
            post(review::handlers::handle_review_activity),
        )
        .route(
            "/api/v1/faculty/points-range/:category",
            get(review::handlers::handle_points_range),
        )
        // Admin
        .route(
            "/api/v1/admin/certificates/:id/review",
            post(review::handlers::handle_review_certificate),
        )
        .route(
            "/api/v1/admin/analytics",
            get(stats::handlers::handle_admin_analytics),
        )
        // Resumes
        .route(
            "/api/v1/resumes/templates",
            get(resume::handlers::handle_list_templates),
        )
        .route(
            "/api/v1/resumes/generate",
            post(resume::handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/resumes/builder",
            post(resume::handlers::handle_resume_builder),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn app() -> Router {
        build_router(AppState::for_tests())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "student-hub-api");
    }

    #[tokio::test]
    async fn test_login_returns_user_for_role() {
        let app = app();
        let (status, body) =
            send(&app, Method::POST, "/api/v1/auth/login", Some(json!({"role": "faculty"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "faculty");

        let (status, body) =
            send(&app, Method::POST, "/api/v1/auth/login", Some(json!({"role": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_blank_and_matching() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/search?q=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);

        let (_, body) = send(&app, Method::GET, "/api/v1/search?q=priya&type=students", None).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["activities"].as_array().unwrap().len(), 0);
        assert_eq!(body["students"][0]["name"], "Priya Patel");

        let (status, body) = send(&app, Method::GET, "/api/v1/search?q=x&sort=random", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_search_session_lifecycle() {
        let app = app();
        let uri = "/api/v1/search/sessions/tab-1";

        let (status, body) = send(&app, Method::PUT, uri, Some(json!({"q": "hackathon"}))).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["isSearching"], true);

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isSearching"], false);
        assert_eq!(body["results"]["activities"][0]["id"], "1");

        let (status, _) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_search_session_is_dropped() {
        let app = app();
        let uri = "/api/v1/search/sessions/tab-idle";

        let (status, _) = send(&app, Method::PUT, uri, Some(json!({"q": "arjun"}))).await;
        assert_eq!(status, StatusCode::ACCEPTED);

        tokio::time::advance(std::time::Duration::from_secs(601)).await;
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_submit_then_list_activity() {
        let app = app();
        let uri = "/api/v1/students/CS2021001/activities";
        let (status, body) = send(
            &app,
            Method::POST,
            uri,
            Some(json!({
                "title": "Inter-college Chess",
                "description": "Runner-up",
                "category": "sports",
                "date": "2024-04-02"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "pending");
        assert_eq!(body["points"], 0);

        let (_, body) = send(&app, Method::GET, &format!("{uri}?status=pending"), None).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|a| a["title"].as_str())
            .collect();
        assert_eq!(titles[0], "Inter-college Chess");

        let (status, _) = send(&app, Method::POST, uri, Some(json!({"title": " "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_student_is_not_found() {
        let (status, body) =
            send(&app(), Method::GET, "/api/v1/students/XX0000/dashboard", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_review_flow_and_terminal_states() {
        let app = app();

        let (_, body) = send(&app, Method::GET, "/api/v1/faculty/activities/2/suggested-points", None).await;
        assert_eq!(body["range"]["min"], 10);
        assert_eq!(body["range"]["max"], 40);
        assert_eq!(body["suggested"], 25);

        let review = "/api/v1/faculty/activities/2/review";
        let (status, body) = send(
            &app,
            Method::POST,
            review,
            Some(json!({"decision": "approved", "points": "35", "remarks": "ok"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "approved");
        assert_eq!(body["points"], 35);
        assert_eq!(body["approvedBy"], "Dr. Priya Patel");

        let (status, body) = send(
            &app,
            Method::POST,
            review,
            Some(json!({"decision": "pending"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "INVALID_TRANSITION");

        let (status, body) = send(
            &app,
            Method::POST,
            review,
            Some(json!({"decision": "rejected", "remarks": "duplicate"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 0);

        let (_, body) = send(&app, Method::GET, "/api/v1/faculty/queue", None).await;
        assert_eq!(body["activities"].as_array().unwrap().len(), 0);
        assert_eq!(body["counts"]["rejected"], 1);
    }

    #[tokio::test]
    async fn test_review_points_accept_floats_and_out_of_range_numbers() {
        let app = app();
        let review = "/api/v1/faculty/activities/2/review";

        let (status, body) = send(
            &app,
            Method::POST,
            review,
            Some(json!({"decision": "approved", "points": 50.5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 50);

        let (status, body) =
            send_raw(&app, Method::POST, review, r#"{"decision": "approved", "points": 1e20}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 0);

        let (status, body) = send(
            &app,
            Method::POST,
            review,
            Some(json!({"decision": "approved", "points": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 0);
    }

    #[tokio::test]
    async fn test_malformed_requests_use_error_envelope() {
        let app = app();

        let (status, body) =
            send_raw(&app, Method::POST, "/api/v1/faculty/activities/2/review", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) =
            send_raw(&app, Method::POST, "/api/v1/auth/login", r#"{"role": 7}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, Method::GET, "/api/v1/search?q=a&q=b", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_semester_results() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/students/CS2021001/results", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["semester"], "Semester 6");
        assert_eq!(body["sgpa"], 9.04);
        assert_eq!(body["percentage"], 86.0);
        assert_eq!(body["totalCredits"], 28);
        assert_eq!(body["subjects"].as_array().unwrap().len(), 10);
        assert_eq!(body["gradeDistribution"][0], json!({"grade": "A+", "count": 3}));

        let (status, _) = send(&app, Method::GET, "/api/v1/students/XX0000/results", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_certificate_review_updates_analytics_queue() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/admin/certificates/cert1/review",
            Some(json!({"decision": "approved", "points": 60})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/v1/admin/analytics", None).await;
        assert_eq!(body["pendingCertificates"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_portfolio_generation() {
        let app = app();
        let uri = "/api/v1/students/CS2021001/portfolio";
        let (status, body) = send(&app, Method::POST, uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fileName"], "Arjun_Sharma_Portfolio.pdf");
        assert_eq!(body["totalPoints"], 130);

        let (status, _) = send(&app, Method::POST, uri, Some(json!({"selected": []}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // "2" is still pending, so nothing eligible is selected
        let (status, body) = send(&app, Method::POST, uri, Some(json!({"selected": ["2", "nope"]}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, Method::POST, uri, Some(json!({"selected": ["2", "3"]}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalPoints"], 80);
    }

    #[tokio::test]
    async fn test_resume_templates_and_fallback_generation() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/v1/resumes/templates", None).await;
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/resumes/generate",
            Some(json!({"templateId": "technical", "studentId": "EC2021045"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "template");
        assert_eq!(body["templateId"], "technical");
        assert!(body["html"].as_str().unwrap().contains("Priya Patel"));

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/resumes/generate",
            Some(json!({"templateId": "minimal", "studentId": "EC2021045"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resume_builder_applies_actions() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/resumes/builder",
            Some(json!({
                "studentId": "CS2021001",
                "step": 3,
                "actions": [
                    {"action": "next"},
                    {"action": "addSkill", "kind": "technical", "value": "Rust"},
                    {"action": "selectTemplate", "templateId": "technical"}
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], 4);
        assert_eq!(body["stage"], "skills");
        assert_eq!(body["progress"], json!(4.0 / 6.0 * 100.0));
        assert_eq!(body["templateId"], "technical");
        let technical = body["profile"]["skills"]["technical"].as_array().unwrap();
        assert_eq!(technical.last().unwrap(), "Rust");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/resumes/builder",
            Some(json!({
                "studentId": "CS2021001",
                "actions": [{"action": "selectTemplate", "templateId": "minimal"}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
