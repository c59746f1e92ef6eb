use movie_rent_api::routes::health::health_check;

#[tokio::test]
async fn health_check_greets() {
    let response = health_check().await;
    assert_eq!(response.0.greetings, "Hello world");

    let body = serde_json::to_value(&response.0).unwrap();
    assert_eq!(body, serde_json::json!({ "Greetings": "Hello world" }));
}
