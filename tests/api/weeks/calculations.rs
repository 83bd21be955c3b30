use crate::helpers::{add_employee, add_week, day, get_json_response_body, TestApp};
use serde_json::json;
use shift_planner::ErrorResponse;
use test_context::test_context;

const REST_AFTERNOON: (&str, &str, &str) = ("14:00", "14:00", "riposo_pomeriggio");

async fn schedule_full_week(app: &TestApp, week_id: &str, employee_id: &str) {
    let response = app
        .put(
            &format!("/settimane/{week_id}/orari"),
            &json!({ employee_id: {
                "lunedi": day(("06:00", "14:00", "ordinarie"), REST_AFTERNOON),
                "martedi": day(
                    ("06:00", "10:30", "ordinarie"),
                    ("15:00", "19:15", "ordinarie"),
                ),
                "mercoledi": day(("06:00", "14:00", "mutua"), REST_AFTERNOON),
                "giovedi": day(("06:00", "14:00", "ferie"), REST_AFTERNOON),
                "venerdi": day(("22:00", "02:00", "ordinarie"), REST_AFTERNOON),
                "sabato": day(
                    ("06:00", "06:00", "riposo_mattino"),
                    ("14:00", "22:00", "ordinarie"),
                ),
            } }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200, "Failed to store schedule");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_daily_totals_for_all_seven_days(app: &mut TestApp) {
    let week_id = add_week(app, "Settimana 32").await;
    let employee_id = add_employee(app, "Giulia", 38).await;
    schedule_full_week(app, &week_id, &employee_id).await;

    let response = app
        .get(&format!(
            "/settimane/{week_id}/calcoli-giornalieri/{employee_id}"
        ))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(
        body,
        json!({
            "lunedi": 8.0,
            "martedi": 8.75,
            "mercoledi": 8.0,
            "giovedi": 8.0,
            "venerdi": 4.0,
            "sabato": 8.0,
            "domenica": 0.0
        })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_weekly_summary(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "ore_ordinarie": { "type": "number", "minimum": 0 },
        "ore_mutua": { "type": "number", "minimum": 0 },
        "ore_ferie": { "type": "number", "minimum": 0 },
        "ore_straordinario": { "type": "number", "minimum": 0 },
        "ore_contratto": { "type": "number", "minimum": 0 },
        "ore_totali_lavorate": { "type": "number", "minimum": 0 }
      },
      "required": [
        "ore_ordinarie", "ore_mutua", "ore_ferie", "ore_straordinario",
        "ore_contratto", "ore_totali_lavorate"
      ]
    });

    let week_id = add_week(app, "Settimana 32").await;
    let employee_id = add_employee(app, "Giulia", 38).await;
    schedule_full_week(app, &week_id, &employee_id).await;

    let response = app
        .get(&format!("/settimane/{week_id}/calcoli/{employee_id}"))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema: {body}"
    );
    assert_eq!(
        body,
        json!({
            "ore_ordinarie": 28.75,
            "ore_mutua": 8.0,
            "ore_ferie": 8.0,
            "ore_straordinario": 6.75,
            "ore_contratto": 38.0,
            "ore_totali_lavorate": 44.75
        })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_count_identical_times_as_a_full_day(app: &mut TestApp) {
    let week_id = add_week(app, "Settimana 36").await;
    let employee_id = add_employee(app, "Marco", 40).await;

    // Both slots left at their placeholder times and no rest marker.
    app.put(
        &format!("/settimane/{week_id}/orari"),
        &json!({ &employee_id: { "lunedi": {} } }),
    )
    .await;

    let daily = get_json_response_body(
        app.get(&format!(
            "/settimane/{week_id}/calcoli-giornalieri/{employee_id}"
        ))
        .await,
    )
    .await;
    assert_eq!(daily["lunedi"], 48.0);

    let summary = get_json_response_body(
        app.get(&format!("/settimane/{week_id}/calcoli/{employee_id}"))
            .await,
    )
    .await;
    assert_eq!(summary["ore_ordinarie"], 48.0);
    assert_eq!(summary["ore_straordinario"], 8.0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_daily_and_weekly_views_apart(app: &mut TestApp) {
    let week_id = add_week(app, "Settimana 37").await;
    let employee_id = add_employee(app, "Sara", 10).await;

    app.put(
        &format!("/settimane/{week_id}/orari"),
        &json!({ &employee_id: {
            // Rest marker on the wrong half of the day.
            "lunedi": day(("06:00", "12:00", "riposo_pomeriggio"), REST_AFTERNOON),
            // Not one of the seven canonical keys.
            "Martedì": day(("08:00", "12:00", "ordinarie"), REST_AFTERNOON),
        } }),
    )
    .await;

    let daily = get_json_response_body(
        app.get(&format!(
            "/settimane/{week_id}/calcoli-giornalieri/{employee_id}"
        ))
        .await,
    )
    .await;
    assert_eq!(daily["lunedi"], 6.0);
    assert_eq!(daily["martedi"], 0.0);
    assert!(daily.get("Martedì").is_none());

    let summary = get_json_response_body(
        app.get(&format!("/settimane/{week_id}/calcoli/{employee_id}"))
            .await,
    )
    .await;
    assert_eq!(summary["ore_ordinarie"], 4.0);
    assert_eq!(summary["ore_totali_lavorate"], 4.0);
    assert_eq!(summary["ore_straordinario"], 0.0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_zeros_for_employee_without_assignments(
    app: &mut TestApp,
) {
    let week_id = add_week(app, "Settimana 38").await;
    let stranger = uuid::Uuid::new_v4();

    let response = app
        .get(&format!("/settimane/{week_id}/calcoli-giornalieri/{stranger}"))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    let days = body.as_object().expect("Totals should be an object");
    assert_eq!(days.len(), 7);
    assert!(days.values().all(|hours| hours == 0.0));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_missing_records(app: &mut TestApp) {
    let week_id = add_week(app, "Settimana 39").await;
    let employee_id = add_employee(app, "Paolo", 40).await;
    let missing = uuid::Uuid::new_v4();

    let test_cases = [
        (
            format!("/settimane/{missing}/calcoli-giornalieri/{employee_id}"),
            "Settimana non trovata",
        ),
        (
            format!("/settimane/{missing}/calcoli/{employee_id}"),
            "Settimana non trovata",
        ),
        (
            format!("/settimane/{week_id}/calcoli/{missing}"),
            "Dipendente non trovato",
        ),
    ];

    for (path, message) in test_cases.iter() {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 404, "Path: {path}");
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            *message
        );
    }
}
