use crate::helpers::{get_json_response_body, TestApp, ADMIN_CODE, USER_CODE};
use serde_json::json;
use shift_planner::{domain::ConfigStore, ErrorResponse};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_default_config(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "admin_code": { "type": "string" },
        "user_code": { "type": "string" },
        "background_color": { "type": "string", "pattern": "^#[0-9A-Fa-f]{6}$" },
        "text_color": { "type": "string", "pattern": "^#[0-9A-Fa-f]{6}$" },
        "created_at": { "type": "string" }
      },
      "required": [
        "id", "admin_code", "user_code", "background_color", "text_color",
        "created_at"
      ]
    });

    let response = app.get("/config").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema: {body}"
    );
    assert_eq!(body["admin_code"], ADMIN_CODE);
    assert_eq!(body["user_code"], USER_CODE);
    assert_eq!(body["background_color"], "#8B0000");
    assert_eq!(body["text_color"], "#FFFFFF");

    let again = get_json_response_body(app.get("/config").await).await;
    assert_eq!(body["id"], again["id"], "Config should be created once");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_change_login_outcome_after_code_update(app: &mut TestApp) {
    let response = app
        .put("/config", &json!({ "admin_code": "4321", "text_color": "#000000" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await["message"],
        "Configurazione aggiornata"
    );

    let old_code = get_json_response_body(
        app.post("/login", &json!({ "code": ADMIN_CODE })).await,
    )
    .await;
    assert_eq!(old_code["success"], false);

    let new_code = get_json_response_body(
        app.post("/login", &json!({ "code": "4321" })).await,
    )
    .await;
    assert_eq!(new_code["user_type"], "admin");

    let config = get_json_response_body(app.get("/config").await).await;
    assert_eq!(config["text_color"], "#000000");
    assert_eq!(config["user_code"], USER_CODE, "Untouched fields persist");

    let stored = app
        .config_store
        .write()
        .await
        .get_config()
        .await
        .expect("Config should be stored");
    assert_eq!(stored.text_color.as_ref(), "#000000");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_values(app: &mut TestApp) {
    let test_cases = [
        json!({ "background_color": "rosso" }),
        json!({ "text_color": "#12345" }),
        json!({ "user_code": "   " }),
        json!({ "admin_code": "1111", "background_color": "#GGGGGG" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.put("/config", test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            test_case
        );
        assert!(
            !response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error
                .is_empty()
        );
    }

    let unchanged = get_json_response_body(
        app.post("/login", &json!({ "code": ADMIN_CODE })).await,
    )
    .await;
    assert_eq!(
        unchanged["user_type"], "admin",
        "A rejected update must not apply any of its fields"
    );
}
