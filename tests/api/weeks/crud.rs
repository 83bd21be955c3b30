use crate::helpers::{add_week, get_json_response_body, TestApp};
use serde_json::json;
use shift_planner::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_for_valid_requests(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "nome": { "type": "string", "minLength": 1, "maxLength": 255 },
        "inizio": { "type": "string", "pattern": "^\\d{4}-\\d{2}-\\d{2}$" },
        "fine": { "type": "string", "pattern": "^\\d{4}-\\d{2}-\\d{2}$" },
        "orari": { "type": "object" },
        "created_at": { "type": "string" }
      },
      "required": ["id", "nome", "inizio", "fine", "orari", "created_at"]
    });

    let test_cases = [
        ("Settimana 32", "2024-08-05", "2024-08-11"),
        ("Ferragosto", "2024-08-12", "2024-08-18"),
        ("Un giorno solo", "2024-08-19", "2024-08-19"),
    ];

    for (label, start, end) in test_cases {
        let response = app
            .post(
                "/settimane",
                &json!({ "nome": label, "inizio": start, "fine": end }),
            )
            .await;
        assert_eq!(
            response.status().as_u16(),
            201,
            "Failed to create week: {label}"
        );

        let body = get_json_response_body(response).await;
        assert!(
            jsonschema::is_valid(&schema, &body),
            "response does not match schema: {body}"
        );
        assert_eq!(body["inizio"], start);
        assert_eq!(body["fine"], end);
        assert_eq!(body["orari"], json!({}));
    }

    let list = get_json_response_body(app.get("/settimane").await).await;
    assert_eq!(list.as_array().map(Vec::len), Some(3));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_input(app: &mut TestApp) {
    let test_cases = [
        json!({ "nome": "", "inizio": "2024-08-05", "fine": "2024-08-11" }),
        json!({ "nome": "Al contrario", "inizio": "2024-08-11", "fine": "2024-08-05" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post("/settimane", test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            test_case
        );
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse");
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({ "nome": "Settimana", "inizio": "05/08/2024", "fine": "2024-08-11" }),
        json!({ "nome": "Settimana", "inizio": "2024-08-05" }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post("/settimane", test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_get_and_delete_week(app: &mut TestApp) {
    let id = add_week(app, "Settimana 33").await;

    let response = app.get(&format!("/settimane/{id}")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await["nome"], "Settimana 33");

    let response = app.delete(&format!("/settimane/{id}")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await["message"],
        "Settimana eliminata"
    );

    let response = app.get(&format!("/settimane/{id}")).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Settimana non trovata"
    );

    let response = app.delete(&format!("/settimane/{id}")).await;
    assert_eq!(response.status().as_u16(), 404);
}
