#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::TestServer;
use uuid::Uuid;

use attendance_service::{
    config::Config,
    models::{Client, Employee, GeoPoint, Role},
    router,
    services::AttendanceService,
    state::AppState,
};

pub const MANAGER_TOKEN: &str = "manager-token";
pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";

pub struct TestContext {
    pub server: TestServer,
    pub attendance: Arc<AttendanceService>,
    pub manager_id: Uuid,
    pub alice_id: Uuid,
    pub bob_id: Uuid,
    pub client_hq: Client,
    pub client_depot: Client,
}

/// Spin up an in-process server with a small seeded roster: one manager,
/// two direct reports, two client sites.
pub async fn setup() -> TestContext {
    let attendance = Arc::new(AttendanceService::new());

    let manager_id = Uuid::new_v4();
    let alice_id = Uuid::new_v4();
    let bob_id = Uuid::new_v4();

    attendance
        .register_employee(Employee {
            id: manager_id,
            name: "Marta".to_string(),
            role: Role::Manager,
            manager_id: None,
            api_token: MANAGER_TOKEN.to_string(),
        })
        .await;
    attendance
        .register_employee(Employee {
            id: alice_id,
            name: "Alice".to_string(),
            role: Role::Employee,
            manager_id: Some(manager_id),
            api_token: ALICE_TOKEN.to_string(),
        })
        .await;
    attendance
        .register_employee(Employee {
            id: bob_id,
            name: "Bob".to_string(),
            role: Role::Employee,
            manager_id: Some(manager_id),
            api_token: BOB_TOKEN.to_string(),
        })
        .await;

    let client_hq = Client {
        id: Uuid::new_v4(),
        name: "HQ".to_string(),
        site: GeoPoint::new(37.7749, -122.4194),
    };
    let client_depot = Client {
        id: Uuid::new_v4(),
        name: "Depot".to_string(),
        site: GeoPoint::new(37.8044, -122.2712),
    };
    attendance.register_client(client_hq.clone()).await;
    attendance.register_client(client_depot.clone()).await;

    let state = AppState {
        config: Config::default(),
        attendance: attendance.clone(),
    };
    let server = TestServer::new(router(state)).expect("failed to start test server");

    TestContext {
        server,
        attendance,
        manager_id,
        alice_id,
        bob_id,
        client_hq,
        client_depot,
    }
}

pub fn bearer(token: &str) -> (axum::http::HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value"),
    )
}
