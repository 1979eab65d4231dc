// tests/consent_tests.rs

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_get_consent_settings() {
    // Arrange
    let app = common::setup_consent_app();

    // Act
    let req = common::create_request("GET", "/cookies", None, None);
    let res = app.oneshot(req).await.unwrap();

    // Assert
    assert_eq!(res.status(), StatusCode::OK);

    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(response["message"], "Cookies");

    let categories = response["settings"]["data"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["id"], "functional");
    assert_eq!(categories[0]["required"], true);
    assert_eq!(categories[1]["id"], "marketing");
    assert_eq!(categories[1]["required"], false);
    for category in categories {
        assert!(category["label"].is_string());
        assert!(category["description"].is_string());
    }

    let translations = response["settings"]["translations"].as_array().unwrap();
    assert_eq!(translations.len(), 1);
    let block = &translations[0];
    assert!(block["title"].is_string());
    assert!(block["button"].is_string());
    // 説明文にはプライバシーポリシーとCookieポリシー文書へのリンクが入る
    let description = block["description"].as_str().unwrap();
    assert!(description.contains("<a href=\"privacy-policy\">"));
    assert!(description.contains("Cookies_Policy_English.pdf"));
}

#[tokio::test]
async fn test_update_consent_marketing_accepted() {
    // Arrange
    let app = common::setup_consent_app();
    let body = json!({"_json": [{"id": "marketing", "accepted": true}]});

    // Act
    let req = common::create_request(
        "POST",
        "/cookies",
        Some("lang=en; tracker_x=1"),
        Some(body.to_string()),
    );
    let res = app.oneshot(req).await.unwrap();

    // Assert
    assert_eq!(res.status(), StatusCode::OK);

    let cookies = common::set_cookie_headers(&res);
    let flag = cookies
        .iter()
        .find(|c| c.starts_with("unnec_ac="))
        .unwrap();
    assert!(flag.starts_with("unnec_ac=on"));
    assert!(flag.contains("Max-Age=15552000"));
    assert!(flag.contains("Path=/"));

    let accepted = cookies
        .iter()
        .find(|c| c.starts_with("cl_accepted="))
        .unwrap();
    assert!(accepted.starts_with("cl_accepted=true"));
    assert!(accepted.contains("Max-Age=15552000"));

    // 同意時は削除クッキーを出さない
    assert!(!cookies.iter().any(|c| c.contains("Max-Age=0")));
    assert!(!cookies.iter().any(|c| c.starts_with("tracker_x=")));

    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["message"], "Cookie Policy Set");
}

#[tokio::test]
async fn test_update_consent_marketing_rejected_clears_non_functional() {
    // Arrange: 許可リスト内外のクッキーが混在するリクエスト
    let app = common::setup_consent_app();
    let body = json!({"_json": [{"id": "marketing", "accepted": false}]});

    // Act
    let req = common::create_request(
        "POST",
        "/cookies",
        Some("lang=en; tracker_x=1; unnec_ac=off"),
        Some(body.to_string()),
    );
    let res = app.oneshot(req).await.unwrap();

    // Assert
    assert_eq!(res.status(), StatusCode::OK);

    let cookies = common::set_cookie_headers(&res);

    // tracker_x は削除される
    let removal = cookies
        .iter()
        .find(|c| c.starts_with("tracker_x="))
        .unwrap();
    assert!(removal.starts_with("tracker_x=;"));
    assert!(removal.contains("Max-Age=0"));
    assert!(removal.contains("Path=/"));

    // 許可リストのクッキーは削除されない
    assert!(!cookies.iter().any(|c| c.starts_with("lang=")));

    // フラグは off / true に更新される
    let flag = cookies
        .iter()
        .find(|c| c.starts_with("unnec_ac="))
        .unwrap();
    assert!(flag.starts_with("unnec_ac=off"));
    assert!(flag.contains("Max-Age=15552000"));

    let accepted = cookies
        .iter()
        .find(|c| c.starts_with("cl_accepted="))
        .unwrap();
    assert!(accepted.starts_with("cl_accepted=true"));
}

#[tokio::test]
async fn test_update_consent_session_cookie_survives_rejection() {
    // Arrange
    let app = common::setup_consent_app();
    let body = json!({"_json": [{"id": "marketing", "accepted": false}]});

    // Act
    let req = common::create_request(
        "POST",
        "/cookies",
        Some("_session_id=abc123; __cfduid=xyz; ad_tracker=9"),
        Some(body.to_string()),
    );
    let res = app.oneshot(req).await.unwrap();

    // Assert
    assert_eq!(res.status(), StatusCode::OK);

    let cookies = common::set_cookie_headers(&res);
    assert!(!cookies.iter().any(|c| c.starts_with("_session_id=")));
    assert!(!cookies.iter().any(|c| c.starts_with("__cfduid=")));
    assert!(cookies
        .iter()
        .any(|c| c.starts_with("ad_tracker=;") && c.contains("Max-Age=0")));
}

#[tokio::test]
async fn test_update_consent_is_idempotent() {
    // Arrange
    let app = common::setup_consent_app();
    let body = json!({"_json": [{"id": "marketing", "accepted": false}]});

    // Act: 同じリクエストを2回適用
    let mut results = Vec::new();
    for _ in 0..2 {
        let req = common::create_request(
            "POST",
            "/cookies",
            Some("lang=en; tracker_x=1"),
            Some(body.to_string()),
        );
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let mut cookies = common::set_cookie_headers(&res);
        cookies.sort();
        results.push(cookies);
    }

    // Assert: 最終的なクッキー状態は同一
    assert_eq!(results[0], results[1]);
}

#[tokio::test]
async fn test_update_consent_missing_marketing_entry() {
    // Arrange
    let app = common::setup_consent_app();
    let body = json!({"_json": [{"id": "functional", "accepted": true}]});

    // Act
    let req = common::create_request("POST", "/cookies", None, Some(body.to_string()));
    let res = app.oneshot(req).await.unwrap();

    // Assert: クラッシュではなく 400 を返す
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let cookies = common::set_cookie_headers(&res);
    assert!(cookies.is_empty());

    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["success"], false);
    assert_eq!(response["error_type"], "missing_consent_category");
}

#[tokio::test]
async fn test_update_consent_empty_choices() {
    // Arrange
    let app = common::setup_consent_app();
    let body = json!({"_json": []});

    // Act
    let req = common::create_request("POST", "/cookies", None, Some(body.to_string()));
    let res = app.oneshot(req).await.unwrap();

    // Assert
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let response: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(response["success"], false);
    assert_eq!(response["error_type"], "validation_errors");
}
