//! Mock manager tests for the HTTP client.
//!
//! These tests use wiremock to simulate the manager service and verify the
//! client's behavior without a real backend: header attachment, pagination,
//! and failure recovery.

use std::sync::{Arc, Mutex};

use chrono::Duration;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gavel_core::messages::{
    AuthenticationRequest, ChangeRoleRequest, GetProfilesRequest, GetQuestionsRequest, Id,
};
use gavel_core::{
    CredentialStore, Credentials, Filter, Navigator, Notices, Outcome, Paged, PagedList, Recovery,
    Role, Route, ServerUrl, classify, page_filters,
};
use gavel_http::Client;

/// Helper to create a server URL from a mock server.
fn mock_server_url(server: &MockServer) -> ServerUrl {
    ServerUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn client(server: &MockServer) -> (Client, Arc<CredentialStore>) {
    let store = Arc::new(CredentialStore::new());
    let client = Client::new(mock_server_url(server), store.clone());
    (client, store)
}

struct RecordingNavigator {
    current: Mutex<Route>,
    visits: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            current: Mutex::new(Route::Questions),
            visits: Mutex::new(Vec::new()),
        })
    }

    fn visits(&self) -> Vec<Route> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        *self.current.lock().unwrap() = route.clone();
        self.visits.lock().unwrap().push(route);
    }

    fn current(&self) -> Route {
        self.current.lock().unwrap().clone()
    }
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn login_then_profile_attaches_the_stored_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/login"))
        .and(body_json(json!({
            "username": "alice",
            "password": "x"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": "session-token",
            "role": "Member"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/manager/getProfile"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "alice",
            "role": "Member"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client(&server);

    let request = AuthenticationRequest {
        username: "alice".into(),
        password: "x".into(),
    };
    let response = client.login(&request).await.unwrap();
    assert!(!response.value.is_empty());
    assert_eq!(response.role, Role::Member);

    // The login success path is the one place that writes the store.
    store.set(
        Credentials::new(response.value, response.role),
        Duration::hours(1),
    );
    assert!(store.token().is_some());

    // An empty id fetches the caller's own profile.
    let profile = client.get_profile(&Id::new("")).await.unwrap();
    assert_eq!(profile.username, "alice");
}

#[tokio::test]
async fn authenticated_calls_read_the_token_at_call_time() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/getProfile"))
        .and(header("authorization", "Bearer first-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "alice",
            "role": "Member"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/manager/getProfile"))
        .and(header("authorization", "Bearer second-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "alice",
            "role": "Admin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client(&server);

    store.set(
        Credentials::new("first-token", Role::Member),
        Duration::hours(1),
    );
    client.get_profile(&Id::new("")).await.unwrap();

    // Replacing the credential between calls must be observed by the next
    // call, not a snapshot from client construction time.
    store.set(
        Credentials::new("second-token", Role::Admin),
        Duration::hours(1),
    );
    client.get_profile(&Id::new("")).await.unwrap();
}

#[tokio::test]
async fn register_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": "fresh-token",
            "role": "Member"
        })))
        .mount(&server)
        .await;

    let (client, _) = client(&server);
    let request = AuthenticationRequest {
        username: "newbie".into(),
        password: "longenough".into(),
    };
    let response = client.register(&request).await.unwrap();
    assert_eq!(response.role, Role::Member);
}

// ============================================================================
// Pagination protocol
// ============================================================================

#[tokio::test]
async fn profiles_page_updates_items_and_count_together() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/getProfiles"))
        .and(body_json(json!({
            "filters": [{"field": "page", "value": "2"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usernames": ["bob", "carol"],
            "totalPages": 5
        })))
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("tok", Role::Member), Duration::hours(1));

    let request = GetProfilesRequest {
        filters: page_filters(2, []),
    };
    let response = client.get_profiles(&request).await.unwrap();

    let mut profiles: PagedList<String> = PagedList::new();
    profiles.apply(2, Paged::from(response));

    assert_eq!(profiles.items(), ["bob", "carol"]);
    assert_eq!(profiles.total_pages(), 5);
    assert_eq!(profiles.page(), 2);
}

#[tokio::test]
async fn fetching_the_same_page_twice_is_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/getQuestions"))
        .and(body_json(json!({
            "filters": [
                {"field": "page", "value": "1"},
                {"field": "owner", "value": "true"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [{
                "title": "Two Sum",
                "statement": "Add them up.",
                "limitations": {"durationMs": 1000, "memoryMb": 256},
                "state": "Published",
                "owner": "alice"
            }],
            "totalPages": 3
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("tok", Role::Member), Duration::hours(1));

    let request = GetQuestionsRequest {
        filters: page_filters(1, [Filter::owner(true)]),
    };
    let first = client.get_questions(&request).await.unwrap();
    let second = client.get_questions(&request).await.unwrap();

    assert_eq!(first.questions, second.questions);
    assert_eq!(first.total_pages, second.total_pages);
}

// ============================================================================
// Failure recovery
// ============================================================================

fn recovery(store: Arc<CredentialStore>) -> (Recovery, Arc<RecordingNavigator>) {
    let navigator = RecordingNavigator::new();
    let recovery = Recovery::new(store, navigator.clone(), Arc::new(Notices::new()));
    (recovery, navigator)
}

#[tokio::test]
async fn rejected_token_clears_credentials_and_redirects_to_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/getQuestions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "Unauthenticated",
            "message": "invalid token"
        })))
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("stale", Role::Member), Duration::hours(1));
    let (recovery, navigator) = recovery(store.clone());

    let err = client
        .get_questions(&GetQuestionsRequest::default())
        .await
        .unwrap_err();
    let outcome = recovery.handle(err).await;

    assert_eq!(outcome, Outcome::AuthRequired);
    assert!(store.token().is_none());
    assert_eq!(navigator.visits(), vec![Route::Login]);
}

#[tokio::test]
async fn change_role_forbidden_redirects_to_403() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/changeRole"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "PermissionDenied",
            "message": "change role request is aborted"
        })))
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("tok", Role::Member), Duration::hours(1));
    let (recovery, navigator) = recovery(store.clone());

    let request = ChangeRoleRequest {
        username: "bob".into(),
        role: Role::Admin,
    };
    let err = client.change_role(&request).await.unwrap_err();
    let outcome = recovery.handle(err).await;

    assert_eq!(outcome, Outcome::Forbidden);
    assert_eq!(navigator.visits(), vec![Route::Error403]);
    // The caller's own role was never touched.
    assert_eq!(store.role(), Some(Role::Member));
}

#[tokio::test]
async fn missing_question_redirects_to_404() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/getQuestion"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NotFound",
            "message": "question not found"
        })))
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("tok", Role::Member), Duration::hours(1));
    let (recovery, navigator) = recovery(store);

    let err = client.get_question(&Id::new("999")).await.unwrap_err();
    let outcome = recovery.handle(err).await;

    assert_eq!(outcome, Outcome::NotFound);
    assert_eq!(navigator.visits(), vec![Route::Error404]);
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/getProfile"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gateway text"))
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("tok", Role::Member), Duration::hours(1));

    let err = client.get_profile(&Id::new("ghost")).await.unwrap_err();
    assert_eq!(classify(&err), Outcome::NotFound);
}

#[tokio::test]
async fn server_reported_failures_classify_as_transient() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "AlreadyExists",
            "message": "Username already exists"
        })))
        .mount(&server)
        .await;

    let (client, _) = client(&server);
    let request = AuthenticationRequest {
        username: "alice".into(),
        password: "x".into(),
    };
    let err = client.register(&request).await.unwrap_err();

    match classify(&err) {
        Outcome::Transient(message) => assert!(message.contains("Username already exists")),
        other => panic!("expected Transient, got {:?}", other),
    }
}

// ============================================================================
// Mutation and reload
// ============================================================================

#[tokio::test]
async fn create_question_then_reload_refetches_the_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/manager/createQuestion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": "12"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The question list is fetched once on entry and once by the reload
    // after the mutation; the created question is never patched in locally.
    Mock::given(method("POST"))
        .and(path("/manager/getQuestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "questions": [],
            "totalPages": 1
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    store.set(Credentials::new("tok", Role::Member), Duration::hours(1));

    let fetch = || async {
        let request = GetQuestionsRequest {
            filters: page_filters(1, []),
        };
        client.get_questions(&request).await
    };

    let mut list = PagedList::new();
    list.apply(1, Paged::from(fetch().await.unwrap()));

    let question = gavel_core::Question::builder()
        .title("Two Sum")
        .statement("Add them up.")
        .build();
    let id = client.create_question(&question).await.unwrap();
    assert_eq!(id.value, "12");

    // Reload: re-run the same fetch rather than patching local state.
    list.apply(1, Paged::from(fetch().await.unwrap()));
    assert_eq!(list.total_pages(), 1);
}
