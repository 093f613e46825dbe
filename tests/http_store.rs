use std::time::Duration;

use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use expense_manager::api::{ExpenseStore, HttpExpenseStore};
use expense_manager::models::{AmountType, ExpenseDraft, Money};
use expense_manager::services::aggregate;

/// Answer exactly one request with `status` and `body`, returning the raw request
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
        socket.shutdown().await.ok();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
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
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn store(base_url: &str) -> HttpExpenseStore {
    HttpExpenseStore::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn list_decodes_mixed_records() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[
            {"id": 1, "amount": 200, "amountType": "credit", "desc": "Salary", "date": "2024-01-01"},
            {"id": 2, "amount": "50", "amountType": "debit"}
        ]"#,
    )
    .await;

    let records = store(&base_url).list_expenses().await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /api/expenses "));
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description.as_deref(), Some("Salary"));
    assert_eq!(records[1].date, None);

    let totals = aggregate(&records);
    assert_eq!(totals.total_credit, Money::from_units(200));
    assert_eq!(totals.total_debit, Money::from_units(50));
    assert_eq!(totals.balance(), Money::from_units(150));
}

#[tokio::test]
async fn list_skips_off_contract_records() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[
            {"id": 1, "amount": null, "amountType": "credit"},
            {"id": 2, "amount": 30, "amountType": "Debit"},
            {"id": 3, "amount": 100, "amountType": "credit"},
            {"id": 4, "amount": "25", "amountType": "debit"}
        ]"#,
    )
    .await;

    let records = store(&base_url).list_expenses().await.unwrap();
    server.await.unwrap();

    let ids: Vec<i64> = records.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![3, 4]);

    let totals = aggregate(&records);
    assert_eq!(totals.total_credit, Money::from_units(100));
    assert_eq!(totals.total_debit, Money::from_units(25));
}

#[tokio::test]
async fn create_posts_draft_and_returns_record() {
    let (base_url, server) = serve_once(
        "201 Created",
        r#"{"id": 7, "amount": 75, "amountType": "debit", "desc": "", "date": "2024-01-01"}"#,
    )
    .await;

    let draft = ExpenseDraft {
        amount: Money::parse("75").unwrap(),
        amount_type: AmountType::Debit,
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    };
    let record = store(&base_url).create_expense(&draft).await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /api/expenses "));
    assert!(request.contains(r#""amountType":"debit""#));
    assert!(request.contains(r#""date":"2024-01-01""#));
    assert_eq!(record.id.get(), 7);
    assert_eq!(record.amount, Money::from_units(75));
    assert!(record.is_debit());
}

#[tokio::test]
async fn error_status_is_transport_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let err = store(&base_url).list_expenses().await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_transport());
    assert!(err.message().contains("500"));
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"not": "a list"}"#).await;

    let err = store(&base_url).list_expenses().await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_transport());
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = store(&base_url).list_expenses().await.unwrap_err();
    assert!(err.is_transport());
}
