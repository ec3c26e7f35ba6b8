// libs/doctor-cell/tests/profile_test.rs

use assert_matches::assert_matches;
use chrono::NaiveTime;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::models::{ProfileError, UpdateProfileRequest, WorkingHours};
use doctor_cell::ProfileService;
use shared_config::AppConfig;

struct TestSetup {
    service: ProfileService,
    mock_server: MockServer,
    auth_token: String,
}

impl TestSetup {
    async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let config = AppConfig::with_base_url(mock_server.uri());
        let service = ProfileService::new(&config);

        Self {
            service,
            mock_server,
            auth_token: "test_token".to_string(),
        }
    }
}

fn profile_json(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "userId": Uuid::new_v4(),
        "firstName": "Ana",
        "lastName": "Ionescu",
        "specialty": "Cardiology",
        "workingHours": { "openTime": "09:00:00", "closeTime": "17:00:00" }
    })
}

#[tokio::test]
async fn fetches_and_parses_a_profile() {
    let setup = TestSetup::new().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/profile/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(id)))
        .mount(&setup.mock_server)
        .await;

    let profile = setup
        .service
        .get_profile(id, &setup.auth_token)
        .await
        .unwrap();
    assert_eq!(profile.full_name(), "Ana Ionescu");
    assert_eq!(
        profile.working_hours.open_time,
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn updates_working_hours() {
    let setup = TestSetup::new().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/profile/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(id)))
        .expect(1)
        .mount(&setup.mock_server)
        .await;

    let hours = WorkingHours {
        open_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        close_time: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
    };
    let result = setup
        .service
        .update_working_hours(id, hours, &setup.auth_token)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn invalid_working_hours_never_reach_the_network() {
    let setup = TestSetup::new().await;
    let id = Uuid::new_v4();

    let inverted = WorkingHours {
        open_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        close_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    };
    let result = setup
        .service
        .update_working_hours(id, inverted, &setup.auth_token)
        .await;

    assert_matches!(result, Err(ProfileError::InvalidWorkingHours(_)));
    let requests = setup.mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn missing_profile_maps_to_not_found() {
    let setup = TestSetup::new().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/profile/{}", id)))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such profile"))
        .mount(&setup.mock_server)
        .await;

    let result = setup.service.get_profile(id, &setup.auth_token).await;
    assert_matches!(result, Err(ProfileError::NotFound));
}

#[tokio::test]
async fn partial_update_sends_only_set_fields() {
    let setup = TestSetup::new().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path(format!("/profile/{}", id)))
        .and(wiremock::matchers::body_json(json!({ "bio": "Pediatric cardiologist" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(id)))
        .expect(1)
        .mount(&setup.mock_server)
        .await;

    let update = UpdateProfileRequest {
        bio: Some("Pediatric cardiologist".to_string()),
        ..Default::default()
    };
    let result = setup
        .service
        .update_profile(id, update, &setup.auth_token)
        .await;
    assert!(result.is_ok());
}
