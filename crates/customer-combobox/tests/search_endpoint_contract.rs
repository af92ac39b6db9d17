//! Drives the widget against the real search endpoint over HTTP.
//!
//! The backend app is served on an ephemeral port inside the test's actix
//! system; the widget only sees it through `HttpCustomerSearchClient`.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::HttpServer;
use actix_web::dev::ServerHandle;
use customer_combobox::{
    Combobox, ComboboxState, CustomerSearchClient, FetchError, Fetcher, HttpCustomerSearchClient,
    Resolution, render_html,
};
use customer_search::domain::ports::FixtureLoginService;
use customer_search::domain::{Customer, CustomerId, CustomerSearchService, DEFAULT_RESULT_LIMIT};
use customer_search::inbound::http::state::HttpState;
use customer_search::outbound::directory::InMemoryCustomerDirectory;
use customer_search::test_support::test_app_with;
use reqwest::header::SET_COOKIE;

fn directory() -> InMemoryCustomerDirectory {
    let customer = |id: &str, name: &str, email: &str| {
        Customer::new(CustomerId::new(id).expect("fixture id"), name, email)
    };
    InMemoryCustomerDirectory::new(vec![
        customer("1", "John Doe", "john@x.com"),
        customer("2", "Jane Roe", "jane@x.com"),
        customer("3", "Joanna Lee", "joanna@x.com"),
    ])
    .expect("unique ids")
}

fn spawn_server() -> (String, ServerHandle) {
    let state = HttpState::new(
        Arc::new(FixtureLoginService),
        CustomerSearchService::new(Arc::new(directory()), DEFAULT_RESULT_LIMIT),
    );
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let server = HttpServer::new(move || test_app_with(state.clone()))
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("listen")
        .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{addr}"), handle)
}

async fn sign_in(base_url: &str) -> String {
    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/v1/login"))
        .json(&serde_json::json!({ "username": "admin", "password": "password" }))
        .send()
        .await
        .expect("login request");
    assert!(response.status().is_success(), "login should succeed");
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .expect("session cookie")
        .to_owned()
}

async fn signed_in_client(base_url: &str) -> HttpCustomerSearchClient {
    let cookie = sign_in(base_url).await;
    HttpCustomerSearchClient::new(base_url)
        .expect("client")
        .with_session_cookie(cookie)
}

#[actix_rt::test]
async fn jo_lists_ranked_rows_and_selection_sets_hidden_value() {
    let (base_url, handle) = spawn_server();
    let client = signed_in_client(&base_url).await;
    let mut combobox = Combobox::new();

    let request = combobox.input_changed("jo").expect("request");
    let outcome = client.search(&request).await;
    combobox.resolve(request.ticket(), outcome);

    let labels: Vec<_> = combobox.results().iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        ["John Doe (john@x.com)", "Joanna Lee (joanna@x.com)"]
    );
    assert_eq!(combobox.state(), ComboboxState::OpenWithResults);

    combobox.select(0);
    assert_eq!(combobox.hidden_value(), "1");
    assert_eq!(combobox.state(), ComboboxState::Selected);
    assert!(render_html(&combobox).contains(r#"name="customerId" type="hidden" value="1""#));

    handle.stop(true).await;
}

#[actix_rt::test]
async fn unmatched_query_keeps_menu_hidden() {
    let (base_url, handle) = spawn_server();
    let client = signed_in_client(&base_url).await;
    let mut combobox = Combobox::new();

    let request = combobox.input_changed("zz-no-match").expect("request");
    let outcome = client.search(&request).await;
    assert_eq!(outcome.as_ref().map(|r| r.customers.len()), Ok(0));
    combobox.resolve(request.ticket(), outcome);

    assert!(!combobox.display_menu());
    assert!(!render_html(&combobox).contains("<li"));

    handle.stop(true).await;
}

#[actix_rt::test]
async fn anonymous_search_is_unauthenticated() {
    let (base_url, handle) = spawn_server();
    let client = HttpCustomerSearchClient::new(&base_url).expect("client");
    let mut combobox = Combobox::new();

    let request = combobox.input_changed("jo").expect("request");
    let outcome = client.search(&request).await;
    assert_eq!(outcome, Err(FetchError::Unauthenticated));

    combobox.resolve(request.ticket(), outcome);
    assert!(combobox.results().is_empty());

    handle.stop(true).await;
}

#[actix_rt::test]
async fn fetcher_applies_only_the_latest_search() {
    let (base_url, handle) = spawn_server();
    let mut fetcher = Fetcher::new(signed_in_client(&base_url).await);
    let mut combobox = Combobox::new();

    for text in ["j", "jo", "joa"] {
        let request = combobox.input_changed(text).expect("request");
        fetcher.submit(request);
    }

    let mut applied = 0;
    for _ in 0..3 {
        if let Some(Resolution::Applied { .. }) = fetcher.resolve_next(&mut combobox).await {
            applied += 1;
        }
    }

    assert_eq!(applied, 1);
    let ids: Vec<_> = combobox.results().iter().map(|c| c.id()).collect();
    assert_eq!(ids, ["3"]);

    handle.stop(true).await;
}
