use std::time::Duration;

use cepfinder::config::Config;
use cepfinder::run;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(viacep: &MockServer, apicep: &MockServer, timeout: Duration) -> Config {
    Config {
        timeout,
        viacep_url: viacep.uri(),
        apicep_url: apicep.uri(),
        ..Config::default()
    }
}

async fn run_to_strings(config: &Config, args: &[&str]) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(config, args, &mut out, &mut err).await.unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[tokio::test]
async fn prints_fastest_provider_payload() {
    let viacep = MockServer::start().await;
    let apicep = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ws/01310100/json/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "cep": "01310-100",
                    "localidade": "São Paulo",
                    "uf": "SP"
                }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&viacep)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/apicep/01310-100.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "01310-100",
            "state": "SP",
            "city": "São Paulo",
            "status": 200,
            "ok": true,
            "statusText": "ok"
        })))
        .mount(&apicep)
        .await;

    let config = config_for(&viacep, &apicep, Duration::from_secs(2));
    let (out, err) = run_to_strings(&config, &["01310-100"]).await;

    assert!(out.starts_with("ApiCEP returned:\n"), "stdout: {}", out);
    assert!(out.contains("  city: São Paulo\n"));
    assert!(err.is_empty(), "stderr: {}", err);
}

#[tokio::test]
async fn reports_timeout_when_both_providers_miss() {
    let viacep = MockServer::start().await;
    let apicep = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
        .mount(&viacep)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 404,
            "ok": false,
            "message": "CEP não encontrado"
        })))
        .mount(&apicep)
        .await;

    let config = config_for(&viacep, &apicep, Duration::from_millis(300));
    let start = std::time::Instant::now();
    let (out, err) = run_to_strings(&config, &["00000-000"]).await;

    assert!(out.is_empty());
    assert_eq!(err, "Timeout: no provider answered within 300ms\n");
    assert!(start.elapsed() >= Duration::from_millis(290));
}

#[tokio::test]
async fn rejects_input_without_network_calls() {
    let viacep = MockServer::start().await;
    let apicep = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&viacep)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&apicep)
        .await;

    let config = config_for(&viacep, &apicep, Duration::from_secs(1));

    let (out, err) = run_to_strings(&config, &["abc"]).await;
    assert!(out.is_empty());
    assert_eq!(err, "You must enter a CEP in the format XXXXX-XXX\n");

    let (_, err) = run_to_strings(&config, &[]).await;
    assert_eq!(err, "You must provide at least one CEP\n");

    let (_, err) = run_to_strings(&config, &["01310-100", "04538-133"]).await;
    assert_eq!(err, "You must pass only a single CEP (got 2)\n");

    viacep.verify().await;
    apicep.verify().await;
}
