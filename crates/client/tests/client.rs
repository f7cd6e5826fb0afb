//! Round trips against a local stand-in for the form endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use dcore::{ContactForm, Error, NewsletterForm, Outcome, SiteContext, Submitter};
use dynasty_client::ApiClient;
use serde_json::Value;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

type Received = Arc<Mutex<Vec<(&'static str, Value)>>>;

/// Serve `/api/contact` with 201 and `/api/newsletter` with `newsletter`.
async fn spawn_api(newsletter: StatusCode) -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route(
            "/api/contact",
            post(|State(rx): State<Received>, Json(body): Json<Value>| async move {
                rx.lock().unwrap().push(("contact", body));
                StatusCode::CREATED
            }),
        )
        .route(
            "/api/newsletter",
            post(
                move |State(rx): State<Received>, Json(body): Json<Value>| async move {
                    rx.lock().unwrap().push(("newsletter", body));
                    newsletter
                },
            ),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), received)
}

fn contact() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        service: "consultation".into(),
        message: "Hello".into(),
    }
}

#[test]
fn endpoint_urls() {
    let client = ApiClient::new(reqwest::Client::new(), "https://designdynasty.example/");
    assert_eq!(client.base_url(), "https://designdynasty.example");
    assert_eq!(
        client.endpoint(dynasty_client::CONTACT_PATH),
        "https://designdynasty.example/api/contact"
    );
}

#[tokio::test]
async fn contact_posts_json_body() {
    let (base, received) = spawn_api(StatusCode::OK).await;
    let client = ApiClient::new(reqwest::Client::new(), &base);

    client.contact(&contact()).await.unwrap();

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (endpoint, body) = &received[0];
    assert_eq!(*endpoint, "contact");
    assert_eq!(
        *body,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "service": "consultation",
            "message": "Hello",
        })
    );
}

#[tokio::test]
async fn non_2xx_is_rejected() {
    let (base, received) = spawn_api(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = ApiClient::new(reqwest::Client::new(), &base);

    let err = client
        .newsletter(&NewsletterForm::new("reader@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Rejected { status: 500 }));

    let received = received.lock().unwrap();
    assert_eq!(received[0].1, serde_json::json!({ "email": "reader@example.com" }));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(reqwest::Client::new(), &format!("http://{addr}"));
    let err = client.contact(&contact()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn failed_newsletter_keeps_email() {
    let (base, _) = spawn_api(StatusCode::BAD_GATEWAY).await;
    let ctx = SiteContext::new(ApiClient::new(reqwest::Client::new(), &base));
    let mut form = NewsletterForm::new("reader@example.com");

    let outcome = ctx.subscribe(&mut form).await;
    assert!(matches!(outcome, Outcome::Failed));
    assert_eq!(form.email, "reader@example.com");
    assert_eq!(ctx.notifier.latest().unwrap().title, "Error");
}

#[tokio::test]
async fn sent_contact_resets_fields() {
    let (base, _) = spawn_api(StatusCode::OK).await;
    let ctx = SiteContext::new(ApiClient::new(reqwest::Client::new(), &base));
    let mut form = contact();

    assert!(ctx.submit_contact(&mut form).await.is_sent());
    assert_eq!(form, ContactForm::default());
    assert_eq!(ctx.notifier.latest().unwrap().title, "Success!");
}

#[tokio::test]
async fn silent_endpoint_times_out_into_failure_toast() {
    let app = Router::new().route(
        "/api/contact",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            StatusCode::OK
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client =
        ApiClient::with_timeout(&format!("http://{addr}"), Duration::from_millis(200)).unwrap();
    let err = client.contact(&contact()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));

    let ctx = SiteContext::new(client);
    let mut form = contact();
    let outcome = tokio::time::timeout(Duration::from_secs(5), ctx.submit_contact(&mut form))
        .await
        .unwrap();
    assert!(matches!(outcome, Outcome::Failed));
    assert_eq!(form, contact());
    assert_eq!(ctx.notifier.latest().unwrap().title, "Error");
}
