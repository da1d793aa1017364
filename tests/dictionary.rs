use actix_web::middleware::Logger;
use actix_web::{http::StatusCode, rt, test, web, App, HttpServer};
use inetelearn::config::{Config, MEMORY_DATABASE_URL};
use inetelearn::models::DictionaryEntry;
use inetelearn::routes;
use inetelearn::AppState;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::net::TcpListener;

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some(MEMORY_DATABASE_URL.to_string()),
        "JWT_SECRET" => Some("integration-secret".to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("test config")
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(&test_config())))
                .wrap(Logger::default())
                .service(routes::health::index)
                .service(web::scope("/api").configure(routes::config)),
        )
        .await
    };
}

fn word(inete: &str, hiligaynon: &str, english: &str) -> Value {
    json!({ "inete": inete, "hiligaynon": hiligaynon, "english": english })
}

#[actix_rt::test]
async fn test_contribute_defaults_and_duplicates() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/dictionary/contribute")
        .set_json(word("  Balay ", "balay", "house"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["message"], "Word contributed successfully");
    let created = &body["word"];
    assert_eq!(created["inete"], "Balay");
    assert_eq!(created["pronunciation"], "");
    assert_eq!(created["partOfSpeech"], "");
    assert_eq!(created["definitionEnglish"], "");
    assert_eq!(created["exampleInete"], "");
    assert_eq!(created["category"], "");
    assert_eq!(created["contributorName"], "Anonymous");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/dictionary/contribute")
        .set_json(word("balay", "balay", "home"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "This word already exists in the dictionary");

    let req = test::TestRequest::post()
        .uri("/api/dictionary/contribute")
        .set_json(json!({ "inete": "tubig", "english": "water" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Inete, Hiligaynon, and English words are required");
}

#[actix_rt::test]
async fn test_contribution_appears_in_listing() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/dictionary/contribute")
        .set_json(json!({
            "inete": "adlaw",
            "hiligaynon": "adlaw",
            "english": "sun",
            "partOfSpeech": "noun",
            "definitionEnglish": "The star at the centre of the solar system",
            "contributorName": "Lola Pilar",
            "contributorEmail": "pilar@x.com",
            "category": "nature"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let created: DictionaryEntry = serde_json::from_value(body["word"].clone()).unwrap();

    let req = test::TestRequest::get().uri("/api/dictionary").to_request();
    let listed: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![created]);
}

#[actix_rt::test]
async fn test_listing_is_ordered_by_headword() {
    let app = init_app!();

    for inete in ["kaon", "Inom", "balay"] {
        let req = test::TestRequest::post()
            .uri("/api/dictionary")
            .set_json(word(inete, inete, inete))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/dictionary").to_request();
    let listed: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    let headwords: Vec<&str> = listed.iter().map(|e| e.inete.as_str()).collect();
    assert_eq!(headwords, vec!["Inom", "balay", "kaon"]);
}

#[actix_rt::test]
async fn test_search() {
    let app = init_app!();

    for (inete, hiligaynon, english) in [
        ("balay", "balay", "house"),
        ("tubig", "tubig", "water"),
        ("kalayo", "kalayo", "fire"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/dictionary/contribute")
            .set_json(word(inete, hiligaynon, english))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/dictionary/search?query=").to_request();
    let hits: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    assert!(hits.is_empty());

    let req = test::TestRequest::get().uri("/api/dictionary/search").to_request();
    let hits: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    assert!(hits.is_empty());

    let req = test::TestRequest::get().uri("/api/dictionary/search?query=AT").to_request();
    let hits: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    let headwords: Vec<&str> = hits.iter().map(|e| e.inete.as_str()).collect();
    assert_eq!(headwords, vec!["tubig"]);

    let req = test::TestRequest::get().uri("/api/dictionary/search?query=a").to_request();
    let hits: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(hits.len(), 3);
}

#[actix_rt::test]
async fn test_recent_words() {
    let app = init_app!();

    for i in 0..12 {
        let inete = format!("pulong{:02}", i);
        let req = test::TestRequest::post()
            .uri("/api/dictionary/contribute")
            .set_json(word(&inete, "x", "y"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/dictionary/recent").to_request();
    let recent: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].inete, "pulong11");
    assert_eq!(recent[9].inete, "pulong02");
    assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let req = test::TestRequest::get().uri("/api/dictionary/recent?limit=3").to_request();
    let recent: Vec<DictionaryEntry> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recent.len(), 3);

    let req = test::TestRequest::get().uri("/api/dictionary/recent?limit=lots").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_add_word_stores_payload_verbatim() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/dictionary")
        .set_json(json!({
            "inete": " Kaon ",
            "hiligaynon": "kaon",
            "english": "eat",
            "audioUrl": "https://cdn.example.com/kaon.mp3"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["inete"], " Kaon ");
    assert_eq!(body["audioUrl"], "https://cdn.example.com/kaon.mp3");
    assert_eq!(body["contributorName"], Value::Null);

    let req = test::TestRequest::post()
        .uri("/api/dictionary")
        .set_json(json!({ "inete": "x", "hiligaynon": "y", "english": "z", "rating": 5 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/dictionary")
        .set_json(json!({ "inete": "x", "english": "z" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_root_and_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let root: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(root["message"], "IneteLearn API");
    assert_eq!(root["endpoints"]["signin"], "POST /api/auth/signin");

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "OK");
    assert_eq!(health["database"], "connected");
}

#[actix_rt::test]
async fn test_health_over_a_live_server() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let data = web::Data::new(AppState::in_memory(&test_config()));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .service(web::scope("/api").configure(routes::config))
    })
    .listen(listener)
    .expect("Failed to listen")
    .run();
    let handle = server.handle();
    rt::spawn(server);

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("http://127.0.0.1:{}/api/health", port))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.expect("health body");
    assert_eq!(body["database"], "connected");

    let resp = client
        .get(format!("http://127.0.0.1:{}/api/dictionary/search?query=", port))
        .send()
        .await
        .expect("Failed to send request");
    let hits: Vec<Value> = resp.json().await.expect("search body");
    assert!(hits.is_empty());

    handle.stop(true).await;
}
