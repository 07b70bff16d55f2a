// Copyright 2025 Hooklog Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![cfg(feature = "webhook")]

use std::time::Duration;

use hooklog::Append;
use hooklog::append::WorkflowWebhook;
use hooklog::append::webhook::OverflowPolicy;
use hooklog::layout::WorkflowTextLayout;
use tokio::runtime::Runtime;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

const WEBHOOK_PATH: &str = "/workflows/T0000/A0000/0000/secret";

// The webhook appender uses a blocking HTTP client, so the mock server runs on
// a manually driven runtime while appends happen on the test thread.
fn serve(rt: &Runtime, status: u16) -> MockServer {
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server),
    );
    server
}

fn append_info(webhook: &dyn Append, message: &str) -> anyhow::Result<()> {
    webhook.append(
        &log::Record::builder()
            .args(format_args!("{message}"))
            .level(log::Level::Info)
            .target("app")
            .build(),
    )
}

#[test]
fn posts_workflow_payload() {
    let rt = Runtime::new().unwrap();
    let server = serve(&rt, 200);

    let webhook = WorkflowWebhook::builder(format!("{}{WEBHOOK_PATH}", server.uri()))
        .layout(WorkflowTextLayout::default().thread(false))
        .build()
        .unwrap();

    append_info(&webhook, "Hello Workflow").unwrap();

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["text"], "app - Hello Workflow");
}

#[test]
fn surfaces_http_rejection() {
    let rt = Runtime::new().unwrap();
    let server = serve(&rt, 429);

    let webhook = WorkflowWebhook::builder(format!("{}{WEBHOOK_PATH}", server.uri()))
        .build()
        .unwrap();

    let err = append_info(&webhook, "too chatty").unwrap_err();
    assert!(err.to_string().contains("429"));
}

#[test]
fn throttle_drops_burst_beyond_rate_ceiling() {
    let rt = Runtime::new().unwrap();
    let server = serve(&rt, 200);

    let webhook = WorkflowWebhook::builder(format!("{}{WEBHOOK_PATH}", server.uri()))
        .min_interval(Duration::from_secs(60))
        .build()
        .unwrap();

    append_info(&webhook, "first").unwrap();
    append_info(&webhook, "second").unwrap();
    append_info(&webhook, "third").unwrap();

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(webhook.dropped_records(), 2);
}

#[test]
fn non_blocking_delivers_before_shutdown() {
    let rt = Runtime::new().unwrap();
    let server = serve(&rt, 200);

    let webhook = WorkflowWebhook::builder(format!("{}{WEBHOOK_PATH}", server.uri()))
        .non_blocking("webhook-test")
        .unthrottled()
        .build()
        .unwrap();

    append_info(&webhook, "queued one").unwrap();
    append_info(&webhook, "queued two").unwrap();

    // dropping the appender drains the queue and joins the worker
    drop(webhook);

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 2);
}

#[test]
fn full_buffer_drops_incoming_without_blocking() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    // a slow endpoint keeps the worker busy so the buffer fills up
    rt.block_on(
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server),
    );

    let webhook = WorkflowWebhook::builder(format!("{}{WEBHOOK_PATH}", server.uri()))
        .non_blocking("webhook-test")
        .buffered_lines_limit(1)
        .overflow_policy(OverflowPolicy::DropIncoming)
        .unthrottled()
        .build()
        .unwrap();

    let start = std::time::Instant::now();
    for n in 0..8 {
        append_info(&webhook, &format!("burst {n}")).unwrap();
    }
    assert!(start.elapsed() < Duration::from_millis(250));

    drop(webhook);

    // the in-flight payload and at most one buffered payload get delivered
    let requests = rt.block_on(server.received_requests()).unwrap();
    assert!(!requests.is_empty());
    assert!(requests.len() <= 2);
}

#[test]
fn drop_count_readable_after_handoff() {
    let rt = Runtime::new().unwrap();
    let server = serve(&rt, 200);

    let webhook = WorkflowWebhook::builder(format!("{}{WEBHOOK_PATH}", server.uri()))
        .min_interval(Duration::from_secs(60))
        .build()
        .unwrap();
    let drops = webhook.drop_count();

    // the logger takes ownership of the appender on install
    let appender: Box<dyn Append> = Box::new(webhook);

    append_info(appender.as_ref(), "first").unwrap();
    append_info(appender.as_ref(), "second").unwrap();
    append_info(appender.as_ref(), "third").unwrap();

    assert_eq!(drops.get(), 2);
    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);
}

#[test]
fn connect_timeout_bounds_blocking_time() {
    // 10.255.255.1 is unroutable, so the connect attempt can only time out.
    let webhook = WorkflowWebhook::builder("http://10.255.255.1/workflows/x")
        .connect_timeout(Duration::from_millis(200))
        .read_timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let start = std::time::Instant::now();
    let result = append_info(&webhook, "never arrives");
    assert!(result.is_err());
    assert!(start.elapsed() < Duration::from_secs(5));
}
