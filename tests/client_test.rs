//! HTTPクライアント結合テスト
//!
//! ローカルのTCPリスナーで固定応答を返し、reqwest実装の挙動を検証

use portfolio_ai::client::HttpBackend;
use portfolio_ai_common::{
    AnalyzePage, ApiResponse, BackendConfig, Error, EvaluationRequest, EvaluatorBackend,
    PagePhase, Settings,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 1回だけ応答するサーバー。受け取ったリクエスト全文を返す。
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buffer);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buffer.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

fn backend(base_url: &str) -> HttpBackend {
    HttpBackend::new(BackendConfig::new(base_url).unwrap()).unwrap()
}

fn request() -> EvaluationRequest {
    EvaluationRequest {
        portfolio_url: "https://example.dev".to_string(),
        job_description: "Rust engineer".to_string(),
        model: "gemini-1.5-flash".to_string(),
        api_key: "K".to_string(),
    }
}

/// モデル一覧の取得
#[tokio::test]
async fn test_fetch_models_success() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"models":["gemini-1.5-flash","gemini-1.5-pro"]}"#).await;

    let response = backend(&base_url).fetch_models("K").await.unwrap();
    assert_eq!(
        response,
        ApiResponse::Ok(vec![
            "gemini-1.5-flash".to_string(),
            "gemini-1.5-pro".to_string()
        ])
    );

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /models "));
    assert!(raw.contains(r#"{"api_key":"K"}"#));
}

/// 非2xxでもJSONボディのerrorを返す
#[tokio::test]
async fn test_error_body_on_non_success_status() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"error":"Invalid API key"}"#).await;

    let response = backend(&base_url).fetch_models("bad").await.unwrap();
    assert_eq!(response, ApiResponse::Error("Invalid API key".to_string()));
    server.await.unwrap();
}

/// 解析リクエストのボディとパス
#[tokio::test]
async fn test_analyze_request_body() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"job_title":"Rust Engineer","hiring_decision":"Hire","jd_fit_score":82}"#,
    )
    .await;

    let response = backend(&base_url).analyze(&request()).await.unwrap();
    match response {
        ApiResponse::Ok(result) => {
            assert_eq!(result.job_title, "Rust Engineer");
            assert_eq!(result.jd_fit_score, 82.0);
        }
        ApiResponse::Error(message) => panic!("unexpected error: {}", message),
    }

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /analyze "));
    assert!(raw.contains(r#""portfolio_url":"https://example.dev""#));
    assert!(raw.contains(r#""job_description":"Rust engineer""#));
    assert!(raw.contains(r#""model":"gemini-1.5-flash""#));
    assert!(raw.contains(r#""api_key":"K""#));
}

/// JSONでない応答は汎用エラー文言になる
#[tokio::test]
async fn test_non_json_body_shows_generic_failure() {
    let (base_url, server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
    let backend = backend(&base_url);

    let mut page = AnalyzePage::with_settings(Settings {
        api_key: "K".to_string(),
        model: "gemini-1.5-flash".to_string(),
    });
    page.set_portfolio_url("https://example.dev");
    page.set_job_description("Rust engineer");

    let phase = page.analyze_with(&backend).await.unwrap();
    assert_eq!(phase, PagePhase::Failure);
    assert_eq!(
        page.error(),
        Some("Failed to analyze portfolio. Please check your inputs and try again.")
    );
    assert!(page.result().is_none());
    server.await.unwrap();
}

/// 接続できない場合は通信エラー
#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = backend(&base_url).fetch_models("K").await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
