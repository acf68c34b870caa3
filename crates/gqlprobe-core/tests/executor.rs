// SPDX-License-Identifier: Apache-2.0

//! Executor behaviour against a stub GraphQL server.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use gqlprobe_core::{
    ChannelSink, MemorySink, Operation, Outcome, QueryExecutor, QueryResult, Variables, catalog,
    execute_all, parse_batch,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn executor_for(server: &MockServer, sink: Arc<MemorySink>) -> QueryExecutor {
    QueryExecutor::builder()
        .endpoint(format!("{}/graphql", server.uri()))
        .sink(sink)
        .build()
        .expect("executor should build")
}

fn op(text: &str) -> Operation {
    Operation::new(text).expect("non-empty operation")
}

/// Echoes the request's variables back under `data.echo`.
struct EchoVariables;

impl Respond for EchoVariables {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        ResponseTemplate::new(200).set_body_json(json!({ "data": { "echo": body["variables"] } }))
    }
}

/// An address nothing is listening on.
fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/graphql")
}

#[tokio::test]
async fn ping_returns_exact_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ping": "pong"}})))
        .expect(1)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let outcome = executor.execute(op("query { ping }"), Variables::new()).await;

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(
        sink.take(),
        vec![QueryResult::Success(json!({"data": {"ping": "pong"}}))]
    );
}

#[tokio::test]
async fn mutation_body_is_serialized_exactly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string(
            r#"{"query":"mutation M($id:Int!){ op(id:$id){success} }","variables":{"id":5}}"#,
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"op": {"success": true}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let mut variables = Variables::new();
    variables.insert("id".to_string(), json!(5));
    let outcome = executor
        .execute(op("mutation M($id:Int!){ op(id:$id){success} }"), variables)
        .await;

    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn graphql_errors_are_still_success() {
    let server = MockServer::start().await;
    let body = json!({"errors": [{"message": "Cannot query field \"x\" on type \"Query\"."}]});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let outcome = executor.execute(op("query { x }"), Variables::new()).await;

    assert_eq!(outcome, Outcome::Succeeded);
    let results = sink.take();
    assert_eq!(results, vec![QueryResult::Success(body)]);
    assert_eq!(results[0].graphql_errors().map(Vec::len), Some(1));
}

#[tokio::test]
async fn json_body_with_error_status_is_success() {
    let server = MockServer::start().await;
    let body = json!({"errors": [{"message": "Syntax Error"}]});
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    executor.execute(op("query {"), Variables::new()).await;

    assert_eq!(sink.take(), vec![QueryResult::Success(body)]);
}

#[tokio::test]
async fn non_json_body_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let outcome = executor.execute(op("query { ping }"), Variables::new()).await;

    assert_eq!(outcome, Outcome::Failed);
    match sink.take().as_slice() {
        [QueryResult::TransportFailure(message)] => {
            assert!(message.contains("not valid JSON"), "message: {message}");
            assert!(message.contains("502"), "message: {message}");
        }
        other => panic!("expected one transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
    let sink = Arc::new(MemorySink::new());
    let executor = QueryExecutor::builder()
        .endpoint(refused_endpoint())
        .sink(sink.clone())
        .build()
        .unwrap();

    let outcome = executor.execute(op("query { x }"), Variables::new()).await;

    assert_eq!(outcome, Outcome::Failed);
    match sink.take().as_slice() {
        [QueryResult::TransportFailure(message)] => assert!(!message.is_empty()),
        other => panic!("expected one transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn configured_timeout_is_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = QueryExecutor::builder()
        .endpoint(format!("{}/graphql", server.uri()))
        .sink(sink.clone())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let outcome = executor.execute(op("query { slow }"), Variables::new()).await;

    assert_eq!(outcome, Outcome::Failed);
    assert!(!sink.take()[0].is_success());
}

#[tokio::test]
async fn one_result_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(3)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    for _ in 0..3 {
        executor.execute(op("query { a }"), Variables::new()).await;
    }

    assert_eq!(sink.len(), 3);
}

#[tokio::test]
async fn concurrent_calls_keep_their_own_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(EchoVariables)
        .expect(20)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let handles: Vec<_> = (0..20)
        .map(|n| {
            let mut variables = Variables::new();
            variables.insert("n".to_string(), json!(n));
            executor.spawn(op("query Echo($n: Int!) { echo(n: $n) }"), variables)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Outcome::Succeeded);
    }

    let results = sink.take();
    assert_eq!(results.len(), 20);

    let mut seen = BTreeSet::new();
    for result in &results {
        let echo = &result.payload().expect("success")["data"]["echo"];
        let echoed = echo.as_object().expect("variables object");
        assert_eq!(echoed.len(), 1, "unexpected variables: {echo}");
        seen.insert(echoed["n"].as_i64().expect("integer n"));
    }
    assert_eq!(seen, (0..20).collect::<BTreeSet<i64>>());
}

#[tokio::test]
async fn spawned_results_reach_channel_sink() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ping": "pong"}})))
        .mount(&server)
        .await;

    let (sink, mut rx) = ChannelSink::new();
    let executor = QueryExecutor::builder()
        .endpoint(format!("{}/graphql", server.uri()))
        .sink(Arc::new(sink))
        .build()
        .unwrap();

    let handle = executor.spawn(op("query { ping }"), Variables::new());

    let received = rx.recv().await.expect("one result");
    assert_eq!(
        received,
        QueryResult::Success(json!({"data": {"ping": "pong"}}))
    );
    assert_eq!(handle.await.unwrap(), Outcome::Succeeded);
}

#[tokio::test]
async fn batch_reports_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(EchoVariables)
        .expect(4)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let requests = parse_batch(
        r#"[
            {"query": "query { a }"},
            {"query": "query { b }", "variables": {"k": 1}},
            {"query": "query { c }", "variables": {"k": 2}},
            {"query": "query { d }", "variables": {"k": 3}}
        ]"#,
    )
    .unwrap();

    let summary = execute_all(&executor, requests, 2).await;

    assert_eq!(summary.succeeded, 4);
    assert_eq!(summary.failed, 0);
    let mut indices: Vec<_> = summary.outcomes.iter().map(|(idx, _)| *idx).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(sink.len(), 4);
}

#[tokio::test]
async fn batch_counts_failures() {
    let sink = Arc::new(MemorySink::new());
    let executor = QueryExecutor::builder()
        .endpoint(refused_endpoint())
        .sink(sink.clone())
        .build()
        .unwrap();

    let requests = parse_batch(r#"[{"query": "query { a }"}, {"query": "query { b }"}]"#).unwrap();
    let summary = execute_all(&executor, requests, 0).await;

    assert_eq!(summary.failed, 2);
    assert!(!summary.all_succeeded());
    assert_eq!(sink.len(), 2);
}

#[tokio::test]
async fn catalog_request_sends_bound_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(EchoVariables)
        .mount(&server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let executor = executor_for(&server, sink.clone());

    let request = catalog::get("update-order-status")
        .unwrap()
        .prepare(&[
            ("id".to_string(), "12".to_string()),
            ("status".to_string(), "shipped".to_string()),
        ])
        .unwrap();
    executor.dispatch(&request).await;

    let results = sink.take();
    assert_eq!(
        results[0].payload().unwrap()["data"]["echo"],
        json!({"id": 12, "status": "shipped"})
    );
}
