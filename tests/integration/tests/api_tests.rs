//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_admin, TestServer,
};
use reqwest::StatusCode;

/// Log in a fresh student and return their auth response
async fn login(server: &TestServer) -> AuthResponse {
    let request = GoogleLoginRequest::unique();
    let response = server.post("/api/v1/auth/google", &request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

/// Log in a fresh user and promote them to admin via the database seed
async fn login_admin(server: &TestServer) -> AuthResponse {
    let request = GoogleLoginRequest::unique();
    let suffix = request.token.strip_prefix("itoken-").unwrap().to_string();

    let response = server.post("/api/v1/auth/google", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Role checks read the database on every request, so the existing
    // access token picks up the promotion immediately
    seed_admin(&format!("google-{suffix}")).await.unwrap();

    auth
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_google_login_creates_student() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server).await;

    assert_eq!(auth.user.role, "student");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_google_login_upserts_by_subject() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = GoogleLoginRequest::unique();

    let response = server.post("/api/v1/auth/google", &request).await.unwrap();
    let first: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Logging in again with the same identity returns the same user
    let response = server.post("/api/v1/auth/google", &request).await.unwrap();
    let second: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.user.id, second.user.id);
}

#[tokio::test]
async fn test_google_login_rejects_unknown_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = GoogleLoginRequest {
        token: "not-a-registered-token".to_string(),
    };

    let response = server.post("/api/v1/auth/google", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server).await;

    let response = server
        .get_auth("/api/v1/auth/me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, auth.user.email);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = login(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server.post("/api/v1/auth/refresh", &refresh_req).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(refreshed.user.id, auth.user.id);
    assert!(!refreshed.access_token.is_empty());
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_event_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let student = login(&server).await;

    let response = server
        .post_auth("/api/v1/events", &student.access_token, &CreateEventRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_and_get_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let request = CreateEventRequest::unique();
    let response = server
        .post_auth("/api/v1/events", &admin.access_token, &request)
        .await
        .unwrap();
    let created: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.title, request.title);
    assert_eq!(created.status, "upcoming");
    assert_eq!(created.registration_count, 0);

    let response = server
        .get(&format!("/api/v1/events/{}", created.id))
        .await
        .unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, created.id);
    // Anonymous requests carry no registration flag
    assert_eq!(fetched.is_registered, None);
}

#[tokio::test]
async fn test_event_status_transitions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let response = server
        .post_auth("/api/v1/events", &admin.access_token, &CreateEventRequest::unique())
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // upcoming -> completed skips ongoing and is rejected
    let response = server
        .put_auth(
            &format!("/api/v1/events/{}", event.id),
            &admin.access_token,
            &serde_json::json!({ "status": "completed" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // upcoming -> ongoing -> completed is the legal path
    let response = server
        .put_auth(
            &format!("/api/v1/events/{}", event.id),
            &admin.access_token,
            &serde_json::json!({ "status": "ongoing" }),
        )
        .await
        .unwrap();
    let updated: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "ongoing");

    let response = server
        .put_auth(
            &format!("/api/v1/events/{}", event.id),
            &admin.access_token,
            &serde_json::json!({ "status": "completed" }),
        )
        .await
        .unwrap();
    let updated: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "completed");
}

#[tokio::test]
async fn test_update_event_rejects_empty_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let response = server
        .post_auth("/api/v1/events", &admin.access_token, &CreateEventRequest::unique())
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/events/{}", event.id),
            &admin.access_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_event() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;

    let response = server
        .post_auth("/api/v1/events", &admin.access_token, &CreateEventRequest::unique())
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/events/{}", event.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/events/{}", event.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_registration_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let student = login(&server).await;

    let response = server
        .post_auth("/api/v1/events", &admin.access_token, &CreateEventRequest::unique())
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Register
    let response = server
        .post_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();
    let status: RegistrationStatusResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(status.is_registered);
    assert_eq!(status.registration_count, 1);

    // The event now reports the registration for this viewer
    let response = server
        .get_auth(&format!("/api/v1/events/{}", event.id), &student.access_token)
        .await
        .unwrap();
    let fetched: EventResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.registration_count, 1);
    assert_eq!(fetched.is_registered, Some(true));

    // Registering again is a conflict, count untouched
    let response = server
        .post_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_REGISTERED");

    // Listed under the student's registrations
    let response = server
        .get_auth("/api/v1/registrations/events/@me", &student.access_token)
        .await
        .unwrap();
    let registrations: Vec<RegistrationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(registrations.iter().any(|r| r.event.id == event.id));

    // Unregister
    let response = server
        .delete_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &student.access_token,
        )
        .await
        .unwrap();
    let status: RegistrationStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.is_registered);
    assert_eq!(status.registration_count, 0);

    // A second unregister reports the absent registration
    let response = server
        .delete_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &student.access_token,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_REGISTRATION");
}

#[tokio::test]
async fn test_capacity_boundary() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let first = login(&server).await;
    let second = login(&server).await;

    let response = server
        .post_auth(
            "/api/v1/events",
            &admin.access_token,
            &CreateEventRequest::with_capacity(1),
        )
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // First registration takes the only slot
    let response = server
        .post_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &first.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Second registration is rejected with the capacity error
    let response = server
        .post_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &second.access_token,
            &(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EVENT_FULL");

    // Freeing the slot lets the second user in
    server
        .delete_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &first.access_token,
        )
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &second.access_token,
            &(),
        )
        .await
        .unwrap();
    let status: RegistrationStatusResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(status.registration_count, 1);
}

#[tokio::test]
async fn test_event_attendees_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let student = login(&server).await;

    let response = server
        .post_auth("/api/v1/events", &admin.access_token, &CreateEventRequest::unique())
        .await
        .unwrap();
    let event: EventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/registrations/events/{}", event.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();

    // Students cannot read the attendee list
    let response = server
        .get_auth(
            &format!("/api/v1/registrations/events/{}/users", event.id),
            &student.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admins can
    let response = server
        .get_auth(
            &format!("/api/v1/registrations/events/{}/users", event.id),
            &admin.access_token,
        )
        .await
        .unwrap();
    let attendees: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(attendees.len(), 1);
}

// ============================================================================
// Club Tests
// ============================================================================

#[tokio::test]
async fn test_club_membership_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let student = login(&server).await;

    let response = server
        .post_auth("/api/v1/clubs", &admin.access_token, &CreateClubRequest::unique())
        .await
        .unwrap();
    let club: ClubResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(club.member_count, 0);

    // Join
    let response = server
        .post_auth(
            &format!("/api/v1/registrations/clubs/{}", club.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();
    let status: MembershipStatusResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(status.is_member);
    assert_eq!(status.member_count, 1);

    // Joining again is a conflict
    let response = server
        .post_auth(
            &format!("/api/v1/registrations/clubs/{}", club.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "ALREADY_MEMBER");

    // Member list shows the student
    let response = server
        .get(&format!("/api/v1/clubs/{}/members", club.id))
        .await
        .unwrap();
    let members: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 1);

    // Membership listing embeds club details
    let response = server
        .get_auth("/api/v1/registrations/clubs/@me", &student.access_token)
        .await
        .unwrap();
    let memberships: Vec<MembershipResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(memberships.iter().any(|m| m.club.id == club.id));

    // Leave
    let response = server
        .delete_auth(
            &format!("/api/v1/registrations/clubs/{}", club.id),
            &student.access_token,
        )
        .await
        .unwrap();
    let status: MembershipStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.is_member);
    assert_eq!(status.member_count, 0);

    // Leaving again reports the absent membership
    let response = server
        .delete_auth(
            &format!("/api/v1/registrations/clubs/{}", club.id),
            &student.access_token,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_MEMBERSHIP");
}

#[tokio::test]
async fn test_club_announcements() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let student = login(&server).await;

    let response = server
        .post_auth("/api/v1/clubs", &admin.access_token, &CreateClubRequest::unique())
        .await
        .unwrap();
    let club: ClubResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Students cannot post announcements
    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/announcements", club.id),
            &student.access_token,
            &CreateAnnouncementRequest::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admins can
    let request = CreateAnnouncementRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/v1/clubs/{}/announcements", club.id),
            &admin.access_token,
            &request,
        )
        .await
        .unwrap();
    let announcement: AnnouncementResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(announcement.title, request.title);

    // Anyone can read them
    let response = server
        .get(&format!("/api/v1/clubs/{}/announcements", club.id))
        .await
        .unwrap();
    let announcements: Vec<AnnouncementResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(announcements.len(), 1);
}

#[tokio::test]
async fn test_delete_club_cascades_memberships() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let student = login(&server).await;

    let response = server
        .post_auth("/api/v1/clubs", &admin.access_token, &CreateClubRequest::unique())
        .await
        .unwrap();
    let club: ClubResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/registrations/clubs/{}", club.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();

    // Delete the club; the membership goes with it
    let response = server
        .delete_auth(&format!("/api/v1/clubs/{}", club.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/registrations/clubs/@me", &student.access_token)
        .await
        .unwrap();
    let memberships: Vec<MembershipResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!memberships.iter().any(|m| m.club.id == club.id));
}

// ============================================================================
// User Management Tests
// ============================================================================

#[tokio::test]
async fn test_list_users_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let student = login(&server).await;

    let response = server
        .get_auth("/api/v1/users", &student.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_make_admin_promotion() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = login_admin(&server).await;
    let student = login(&server).await;

    // Students cannot promote
    let response = server
        .put_auth(
            &format!("/api/v1/users/{}/make-admin", admin.user.id),
            &student.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admins can; the promoted user can immediately use admin endpoints
    let response = server
        .put_auth(
            &format!("/api/v1/users/{}/make-admin", student.user.id),
            &admin.access_token,
            &(),
        )
        .await
        .unwrap();
    let promoted: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(promoted.role, "admin");

    let response = server
        .get_auth("/api/v1/users", &student.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
