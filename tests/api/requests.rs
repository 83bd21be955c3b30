use crate::helpers::{get_json_response_body, TestApp};
use serde_json::json;
use shift_planner::domain::DayRequestStore;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_create_list_and_delete_requests(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "dipendente_nome": { "type": "string", "minLength": 1 },
        "giorno": { "type": "string" },
        "fascia": { "type": "string", "enum": ["mattino", "pomeriggio", "giorno"] },
        "created_at": { "type": "string" }
      },
      "required": ["id", "dipendente_nome", "giorno", "fascia", "created_at"]
    });

    let requests = [
        ("Giulia", "2024-08-14", "mattino"),
        ("Luca", "2024-08-15", "giorno"),
    ];

    let mut ids = Vec::new();
    for (name, day, period) in requests {
        let response = app
            .post(
                "/richieste",
                &json!({ "dipendente_nome": name, "giorno": day, "fascia": period }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201, "Failed for: {name}");

        let body = get_json_response_body(response).await;
        assert!(
            jsonschema::is_valid(&schema, &body),
            "response does not match schema: {body}"
        );
        assert_eq!(body["giorno"], day);
        ids.push(body["id"].as_str().unwrap().to_owned());
    }

    let list = get_json_response_body(app.get("/richieste").await).await;
    assert_eq!(list.as_array().map(Vec::len), Some(2));
    assert_eq!(list[0]["dipendente_nome"], "Giulia");

    let response = app.delete(&format!("/richieste/{}", ids[0])).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await["message"],
        "Richiesta eliminata"
    );

    let response = app.delete(&format!("/richieste/{}", ids[0])).await;
    assert_eq!(response.status().as_u16(), 404);

    let list = get_json_response_body(app.get("/richieste").await).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let stored = app
        .day_request_store
        .read()
        .await
        .list_requests()
        .await
        .expect("Requests should be listed");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].employee_name.as_ref(), "Luca");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_invalid_requests(app: &mut TestApp) {
    let response = app
        .post(
            "/richieste",
            &json!({ "dipendente_nome": " ", "giorno": "2024-08-14", "fascia": "mattino" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let test_cases = [
        json!({ "dipendente_nome": "Luca", "giorno": "2024-08-14", "fascia": "sera" }),
        json!({ "dipendente_nome": "Luca", "giorno": "ieri", "fascia": "giorno" }),
        json!({ "dipendente_nome": "Luca" }),
    ];
    for test_case in test_cases.iter() {
        let response = app.post("/richieste", test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}
