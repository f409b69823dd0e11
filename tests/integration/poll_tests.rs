use homework_bot::config::{Config, Credentials};
use homework_bot::{Bot, BotState, CycleOutcome};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";
const SEND_PATH: &str = "/botbot-token/sendMessage";

/// Creates a test configuration pointing both adapters at the mock server
fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.endpoint = format!("{}{}", server.uri(), STATUSES_PATH);
    config.telegram.api_url = server.uri();
    config.poll.retry_time = 1;
    config
}

fn create_test_credentials() -> Credentials {
    Credentials {
        practicum_token: "practicum-token".to_string(),
        telegram_token: "bot-token".to_string(),
        chat_id: "100500".to_string(),
    }
}

async fn mount_statuses(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", "OAuth practicum-token"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_telegram_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .mount(server)
        .await;
}

/// Texts of every message posted to the Telegram mock so far
async fn sent_texts(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == SEND_PATH)
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).expect("telegram body is JSON");
            assert_eq!(body["chat_id"], "100500");
            body["text"].as_str().unwrap_or_default().to_string()
        })
        .collect()
}

#[tokio::test]
async fn test_status_change_is_forwarded_once() {
    let server = MockServer::start().await;
    let payload = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1000
    });

    mount_statuses(&server, ResponseTemplate::new(200).set_body_json(payload)).await;
    mount_telegram_ok(&server).await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot")
        .with_cursor(10);

    assert_eq!(bot.run_cycle().await, CycleOutcome::Sent);
    assert_eq!(bot.cursor(), 1000);
    assert_eq!(bot.run_cycle().await, CycleOutcome::Unchanged);
    assert_eq!(bot.state(), BotState::Sleeping);

    assert_eq!(
        sent_texts(&server).await,
        vec![
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_cursor_advances_between_polls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(query_param("from_date", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
            "current_date": 2000
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(query_param("from_date", "2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw1", "status": "rejected"}],
            "current_date": 3000
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_telegram_ok(&server).await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot")
        .with_cursor(10);

    assert_eq!(bot.run_cycle().await, CycleOutcome::Sent);
    assert_eq!(bot.run_cycle().await, CycleOutcome::Sent);
    assert_eq!(bot.cursor(), 3000);

    let texts = sent_texts(&server).await;
    assert_eq!(texts.len(), 2);
    assert!(texts[0].ends_with("Работа взята на проверку ревьюером."));
    assert!(texts[1].ends_with("Работа проверена: у ревьюера есть замечания."));
}

#[tokio::test]
async fn test_empty_homework_list_sends_nothing() {
    let server = MockServer::start().await;

    mount_statuses(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"homeworks": []})),
    )
    .await;
    mount_telegram_ok(&server).await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot")
        .with_cursor(10);

    assert_eq!(bot.run_cycle().await, CycleOutcome::NoHomeworks);
    assert_eq!(bot.cursor(), 10);
    assert!(sent_texts(&server).await.is_empty());
}

#[tokio::test]
async fn test_server_error_is_reported_and_loop_recovers() {
    let server = MockServer::start().await;

    mount_statuses(&server, ResponseTemplate::new(503)).await;
    mount_telegram_ok(&server).await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot")
        .with_cursor(10);

    assert_eq!(bot.run_cycle().await, CycleOutcome::FailureReported);
    assert_eq!(bot.run_cycle().await, CycleOutcome::FailureSuppressed);
    assert_eq!(bot.cursor(), 10);

    // The API comes back
    server.reset().await;
    mount_statuses(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        })),
    )
    .await;
    mount_telegram_ok(&server).await;

    assert_eq!(bot.run_cycle().await, CycleOutcome::Sent);
    assert_eq!(bot.cursor(), 1000);
    assert_eq!(sent_texts(&server).await.len(), 1);
    assert!(bot.last_sent().starts_with("Изменился статус"));
}

#[tokio::test]
async fn test_failure_message_carries_status_code() {
    let server = MockServer::start().await;

    mount_statuses(&server, ResponseTemplate::new(503)).await;
    mount_telegram_ok(&server).await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot");

    bot.run_cycle().await;

    let texts = sent_texts(&server).await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("Сбой в работе программы: "));
    assert!(texts[0].contains("503"));
    assert!(!texts[0].contains("practicum-token"));
}

#[tokio::test]
async fn test_telegram_outage_does_not_stop_the_loop() {
    let server = MockServer::start().await;

    mount_statuses(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        })),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "ok": false,
            "description": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot")
        .with_cursor(10);

    assert_eq!(bot.run_cycle().await, CycleOutcome::DeliveryFailed);
    assert_eq!(bot.cursor(), 1000);
    assert_eq!(bot.last_sent(), "");
    assert_eq!(bot.state(), BotState::Sleeping);
}

#[tokio::test]
async fn test_unknown_status_is_never_rendered() {
    let server = MockServer::start().await;

    mount_statuses(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [{"homework_name": "hw2", "status": "frozen"}]
        })),
    )
    .await;
    mount_telegram_ok(&server).await;

    let mut bot = Bot::from_config(&create_test_config(&server), &create_test_credentials())
        .expect("Failed to create bot")
        .with_cursor(10);

    assert_eq!(bot.run_cycle().await, CycleOutcome::FailureReported);

    let texts = sent_texts(&server).await;
    assert_eq!(texts.len(), 1);
    assert!(!texts[0].contains("Изменился статус"));
    assert!(texts[0].contains("frozen"));
}
