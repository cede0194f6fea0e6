//! HTTP-level tests driving the full router with `tower::ServiceExt`.
//!
//! Everything reachable without a live store runs unconditionally (the
//! pool is lazy, and the session, auth and fallback paths never touch
//! it). Store-backed flows are `#[ignore]`d and need DATABASE_URL:
//! cargo test --test http -- --ignored

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use minipress::{app, AppState, Config};

fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        database_url: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/minipress_test".to_string()),
        session_secret: "integration-test-secret".to_string(),
        admin_user: "admin".to_string(),
        admin_pass: "hunter2".to_string(),
    }
}

fn test_app() -> Router {
    let config = test_config();
    let pool = minipress::db::create_pool(&config.database_url).expect("lazy pool");
    app(AppState::new(pool, config)).expect("router")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form_with_cookie(uri: &str, body: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
}

fn session_cookie(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("set-cookie header")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in with the test credential and return the session cookie.
async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_form("/admin/login", "username=admin&password=hunter2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/new");
    session_cookie(&response)
}

#[tokio::test]
async fn health_check_responds() {
    let app = test_app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("ok"));
}

#[tokio::test]
async fn admin_page_shows_login_form_to_anonymous() {
    let app = test_app();
    let response = app.oneshot(get("/admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("/admin/login"));
    assert!(!body.contains("/admin/create"));
}

#[tokio::test]
async fn guarded_routes_redirect_anonymous_to_login() {
    let app = test_app();

    let response = app.clone().oneshot(get("/admin/new")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    // The guard short-circuits before the handler, so nothing touches
    // the store (which isn't even reachable in this test).
    let response = app
        .oneshot(post_form("/admin/create", "title=Sneaky&content=x"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn login_with_correct_credentials_grants_admin() {
    let app = test_app();
    let cookie = login(&app).await;

    let response = app
        .oneshot(get_with_cookie("/admin/new", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/admin/create"));
}

#[tokio::test]
async fn login_mismatch_redirects_without_granting_admin() {
    let app = test_app();

    for body in [
        "username=admin&password=wrong",
        "username=wrong&password=hunter2",
        "username=&password=",
    ] {
        let response = app
            .clone()
            .oneshot(post_form("/admin/login", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/admin");

        // Even if a session cookie was minted, it must not carry the
        // admin flag.
        if let Some(cookie) = response.headers().get(header::SET_COOKIE) {
            let cookie = cookie.to_str().unwrap().split(';').next().unwrap();
            let check = app
                .clone()
                .oneshot(get_with_cookie("/admin/new", cookie))
                .await
                .unwrap();
            assert_eq!(check.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&check), "/admin");
        }
    }
}

#[tokio::test]
async fn logout_clears_admin_session() {
    let app = test_app();
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(get_with_cookie("/admin/logout", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = app
        .oneshot(get_with_cookie("/admin/new", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

#[tokio::test]
async fn multi_segment_paths_fall_through_to_404() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/unknown/multi/segment/path"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));

    // Unmatched method on a known path also falls through.
    let response = app
        .oneshot(post_form("/some-slug/extra", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Store-backed flows -------------------------------------------------
// Run with: DATABASE_URL=postgres://... cargo test --test http -- --ignored

async fn reset_posts(database_url: &str) -> sqlx::PgPool {
    let pool = minipress::db::create_pool(database_url).unwrap();
    minipress::db::migrations::run(&pool).await.unwrap();
    sqlx::query("DELETE FROM posts").execute(&pool).await.unwrap();
    pool
}

#[tokio::test]
#[ignore = "requires database"]
async fn full_posting_flow() {
    let config = test_config();
    let pool = reset_posts(&config.database_url).await;
    let app = app(AppState::new(pool.clone(), config)).unwrap();
    let cookie = login(&app).await;

    // Create two posts; each redirects home.
    for (title, content) in [
        ("First+Post", "<p>one</p>"),
        ("Second+Post", "<p>two</p>"),
    ] {
        let body = format!("title={title}&content={content}&category=notes");
        let response = app
            .clone()
            .oneshot(post_form_with_cookie("/admin/create", &body, &cookie))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    // Duplicate title -> same slug -> uniform creation error, one post kept.
    let response = app
        .clone()
        .oneshot(post_form_with_cookie(
            "/admin/create",
            "title=First+Post&content=dup",
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("Error creating post"));

    // Missing title -> same uniform error.
    let response = app
        .clone()
        .oneshot(post_form_with_cookie("/admin/create", "title=&content=x", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Home lists both, newest first.
    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let first = body.find("First Post").unwrap();
    let second = body.find("Second Post").unwrap();
    assert!(second < first, "newest post should render first");

    // Single post page injects stored HTML verbatim.
    let response = app.clone().oneshot(get("/first-post")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<p>one</p>"));

    // Unknown slug is a 404 page.
    let response = app.clone().oneshot(get("/no-such-post")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Unpublishing hides a post from the listing but not direct lookup.
    sqlx::query("UPDATE posts SET published = FALSE WHERE slug = 'first-post'")
        .execute(&pool)
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert!(!body_text(response).await.contains("First Post"));

    let response = app.oneshot(get("/first-post")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
