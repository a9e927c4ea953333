//! Endpoint handler tests against a spying in-memory transport.
//!
//! These verify the handler contract: argument validation happens
//! before any transport invocation, every call carries a fresh
//! correlation id, bearer tokens are attached exactly where required,
//! and successful envelopes come back verbatim.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use edulink_core::endpoints::{auth, clubs, school, timetable};
use edulink_core::{
    PortalClient, PortalError, Transport, TransportRequest, TransportResponse,
};

/// Records every request and replays queued responses; falls back to a
/// generic success envelope when the queue is empty.
#[derive(Default)]
struct MockTransport {
    requests: Mutex<Vec<TransportRequest>>,
    responses: Mutex<VecDeque<TransportResponse>>,
}

impl MockTransport {
    fn queue(&self, resp: TransportResponse) {
        self.responses.lock().unwrap().push_back(resp);
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn recorded(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, req: TransportRequest) -> Result<TransportResponse, PortalError> {
        self.requests.lock().unwrap().push(req.clone());
        if let Some(resp) = self.responses.lock().unwrap().pop_front() {
            return Ok(resp);
        }
        Ok(TransportResponse {
            status: 200,
            body: serde_json::json!({
                "jsonrpc": "2.0",
                "result": { "success": true, "method": req.method },
                "id": "1"
            }),
            from_fixture: false,
        })
    }
}

fn client_over(mock: &Arc<MockTransport>) -> PortalClient {
    PortalClient::new(mock.clone()).unwrap()
}

fn ok_response(result: serde_json::Value) -> TransportResponse {
    TransportResponse {
        status: 200,
        body: serde_json::json!({ "jsonrpc": "2.0", "result": result, "id": "1" }),
        from_fixture: false,
    }
}

#[tokio::test]
async fn test_missing_school_id_rejects_before_any_io() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    let err = client
        .school_details(school::SchoolDetailsParams {
            url: "https://api.example.test".into(),
            establishment_id: 0,
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "School ID is required");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_empty_credentials_reject_before_any_io() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    let err = client
        .login(auth::LoginParams {
            url: "https://api.example.test".into(),
            establishment_id: 1234,
            username: "   ".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Username"));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_missing_learner_id_rejects_before_any_io() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    let err = client
        .timetable(timetable::TimetableParams {
            url: "https://api.example.test".into(),
            authtoken: "tok".into(),
            learner_id: "".into(),
            date: None,
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Learner ID"));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_each_call_gets_a_fresh_correlation_id() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    for _ in 0..2 {
        client
            .clubs(clubs::ClubsParams {
                url: "https://api.example.test".into(),
                authtoken: "tok".into(),
                learner_id: "777".into(),
            })
            .await
            .unwrap();
    }

    let recorded = mock.recorded();
    assert_eq!(recorded.len(), 2);
    let first = recorded[0].body["uuid"].as_str().unwrap();
    let second = recorded[1].body["uuid"].as_str().unwrap();
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_school_details_wire_shape_and_verbatim_result() {
    let mock = Arc::new(MockTransport::default());
    let result = serde_json::json!({
        "success": true,
        "establishment": { "id": "1234", "name": "Test School" }
    });
    mock.queue(ok_response(result.clone()));
    let client = client_over(&mock);

    let env = client
        .school_details(school::SchoolDetailsParams {
            url: "https://api.example.test".into(),
            establishment_id: 1234,
        })
        .await
        .unwrap();

    let recorded = mock.recorded();
    let req = &recorded[0];
    assert_eq!(req.url, "https://api.example.test");
    assert_eq!(req.method, "EduLink.SchoolDetails");
    assert_eq!(req.bearer, None);
    assert_eq!(req.body["method"], "EduLink.SchoolDetails");
    assert_eq!(req.body["params"]["establishment_id"], "1234");
    assert_eq!(req.body["params"]["from_app"], false);

    // Nothing renamed or dropped on the way back.
    assert_eq!(serde_json::to_value(&env.result).unwrap(), result);
}

#[tokio::test]
async fn test_authenticated_call_attaches_bearer_token() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    client
        .status(auth::StatusParams {
            url: "https://api.example.test".into(),
            authtoken: "secret-token".into(),
        })
        .await
        .unwrap();

    let recorded = mock.recorded();
    assert_eq!(recorded[0].bearer.as_deref(), Some("secret-token"));
}

#[tokio::test]
async fn test_http_500_surfaces_in_the_error() {
    let mock = Arc::new(MockTransport::default());
    mock.queue(TransportResponse {
        status: 500,
        body: serde_json::Value::Null,
        from_fixture: false,
    });
    let client = client_over(&mock);

    let err = client
        .clubs(clubs::ClubsParams {
            url: "https://api.example.test".into(),
            authtoken: "tok".into(),
            learner_id: "777".into(),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_application_failure_is_returned_not_thrown() {
    let mock = Arc::new(MockTransport::default());
    mock.queue(ok_response(serde_json::json!({
        "success": false,
        "error": "Session expired",
        "metrics": { "uniqid": "corr-42" }
    })));
    let client = client_over(&mock);

    let env = client
        .status(auth::StatusParams {
            url: "https://api.example.test".into(),
            authtoken: "tok".into(),
        })
        .await
        .unwrap();

    assert!(!env.result.success);
    assert_eq!(env.result.error.as_deref(), Some("Session expired"));
}

#[tokio::test]
async fn test_dynamic_call_routes_through_the_registry() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    let env = client
        .call(
            "EduLink.ClubAttendance",
            serde_json::json!({
                "url": "https://api.example.test",
                "authtoken": "tok",
                "club_id": "9",
                "learner_id": "777"
            }),
        )
        .await
        .unwrap();
    assert!(env.result.success);

    // `attending` omitted means signing up.
    let recorded = mock.recorded();
    assert_eq!(recorded[0].body["params"]["attending"], true);
}

#[tokio::test]
async fn test_dynamic_call_rejects_bad_params_before_any_io() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    let err = client
        .call("EduLink.Timetable", serde_json::json!({ "url": "x" }))
        .await
        .unwrap_err();

    assert!(matches!(err, PortalError::MissingArgument(_)));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_unknown_method_is_a_config_error() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    let err = client
        .call("EduLink.DoesNotExist", serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("EduLink.DoesNotExist"));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_timetable_defaults_the_date_to_today() {
    let mock = Arc::new(MockTransport::default());
    let client = client_over(&mock);

    client
        .timetable(timetable::TimetableParams {
            url: "https://api.example.test".into(),
            authtoken: "tok".into(),
            learner_id: "777".into(),
            date: None,
        })
        .await
        .unwrap();

    let recorded = mock.recorded();
    let date = recorded[0].body["params"]["date"].as_str().unwrap();
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(date, today);
}
