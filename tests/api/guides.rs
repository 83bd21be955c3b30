use crate::helpers::{add_guide, get_json_response_body, TestApp};
use serde_json::json;
use shift_planner::{
    domain::{GuideCategory, GuideStore},
    ErrorResponse,
};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_for_valid_requests(app: &mut TestApp) {
    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "id": { "type": "string", "minLength": 36, "maxLength": 36 },
        "titolo": { "type": "string", "minLength": 1 },
        "contenuto": { "type": "string", "minLength": 1 },
        "categoria": { "type": "string" },
        "created_at": { "type": "string" }
      },
      "required": ["id", "titolo", "contenuto", "categoria", "created_at"]
    });

    let response = app
        .post(
            "/guide",
            &json!({
                "titolo": "Chiusura cassa",
                "contenuto": "Contare il fondo cassa prima di chiudere",
                "categoria": "reparto_cassa"
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema: {body}"
    );
    assert_eq!(body["categoria"], "reparto_cassa");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_invalid_requests(app: &mut TestApp) {
    let bad_values = [
        json!({ "titolo": "", "contenuto": "Testo", "categoria": "reparto_sala" }),
        json!({ "titolo": "Titolo", "contenuto": "", "categoria": "reparto_sala" }),
    ];
    for test_case in bad_values.iter() {
        let response = app.post("/guide", test_case).await;
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

    let response = app
        .post(
            "/guide",
            &json!({ "titolo": "Titolo", "contenuto": "Testo", "categoria": "reparto_giocattoli" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_all_nine_categories(app: &mut TestApp) {
    let response = app.get("/guide/categorie").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(
        body,
        json!({
            "condotta_generale": "Condotta Generale",
            "reparto_cassa": "Reparto Cassa",
            "reparto_freschi": "Reparto Freschi",
            "reparto_gastronomia": "Reparto Gastronomia",
            "reparto_macelleria": "Reparto Macelleria",
            "reparto_ortofrutta": "Reparto Ortofrutta",
            "reparto_sala": "Reparto Sala",
            "reparto_surgelati": "Reparto Surgelati",
            "reparto_magazzino": "Reparto Magazzino"
        })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_filter_guides_by_category(app: &mut TestApp) {
    add_guide(app, "Apertura cassa", "reparto_cassa").await;
    add_guide(app, "Temperature banco", "reparto_surgelati").await;
    add_guide(app, "Resi", "reparto_cassa").await;

    let body = get_json_response_body(
        app.get("/guide/per-categoria/reparto_cassa").await,
    )
    .await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("Guides should be an array")
        .iter()
        .map(|g| g["titolo"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Apertura cassa", "Resi"]);

    let empty = get_json_response_body(
        app.get("/guide/per-categoria/reparto_sala").await,
    )
    .await;
    assert_eq!(empty, json!([]));

    let response = app.get("/guide/per-categoria/reparto_giocattoli").await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, json!([]));

    let all = get_json_response_body(app.get("/guide").await).await;
    assert_eq!(all.as_array().map(Vec::len), Some(3));

    let frozen = app
        .guide_store
        .read()
        .await
        .list_guides_by_category(GuideCategory::RepartoSurgelati)
        .await
        .expect("Guides should be listed");
    assert_eq!(frozen.len(), 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_delete_guide_once(app: &mut TestApp) {
    let id = add_guide(app, "Divisa", "condotta_generale").await;

    let response = app.delete(&format!("/guide/{id}")).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await["message"],
        "Guida eliminata"
    );

    let response = app.delete(&format!("/guide/{id}")).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Guida non trovata"
    );
}
