/// Bulk Resolution Flow Test
///
/// Input lines → InputFeed → UDP resolver service → mock upstream →
/// hickory codec → line sink

mod common;
use common::{pipeline, TestAnswer, TestDomains, TestServerBuilder};
use massresolve_domain::RecordType;
use std::net::Ipv4Addr;

// ============================================================================
// Full Resolution Flow Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_single_name_end_to_end() {
    let server = TestServerBuilder::new()
        .with_a(TestDomains::example(), Ipv4Addr::new(93, 184, 216, 34), 300)
        .build()
        .await
        .expect("Failed to start server");

    let run = pipeline("example.com\n", vec![server.addr()], RecordType::A, 640);
    let summary = run.orchestrator.run().await.unwrap();

    assert_eq!(run.output.lines(), vec!["example.com 93.184.216.34 300"]);
    // Seed plus one name
    assert_eq!(summary.submitted, 2);
    assert!(summary.is_balanced());

    server.shutdown();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_window_of_two_resolves_every_name() {
    let mut builder = TestServerBuilder::new();
    for i in 1..=5u8 {
        builder = builder.with_a(&format!("host{}.example.com", i), Ipv4Addr::new(10, 0, 0, i), 60);
    }
    let server = builder.build().await.expect("Failed to start server");

    let input = (1..=5)
        .map(|i| format!("host{}.example.com", i))
        .collect::<Vec<_>>()
        .join("\n");
    let run = pipeline(&input, vec![server.addr()], RecordType::A, 2);
    let summary = run.orchestrator.run().await.unwrap();

    let mut lines = run.output.lines();
    lines.sort();
    assert_eq!(
        lines,
        (1..=5)
            .map(|i| format!("host{}.example.com 10.0.0.{} 60", i, i))
            .collect::<Vec<_>>()
    );
    assert!(summary.peak_in_flight <= 2);
    assert_eq!(summary.submitted, 6);
    assert_eq!(run.orchestrator.window().count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_empty_input_resolves_only_seed() {
    let server = TestServerBuilder::new()
        .build()
        .await
        .expect("Failed to start server");

    let run = pipeline("", vec![server.addr()], RecordType::A, 640);
    let summary = run.orchestrator.run().await.unwrap();

    assert!(run.output.lines().is_empty());
    assert_eq!(summary.submitted, 1);
    assert_eq!(server.queries(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_duplicate_run_collapses() {
    let server = TestServerBuilder::new()
        .with_a(TestDomains::example(), Ipv4Addr::new(93, 184, 216, 34), 300)
        .build()
        .await
        .expect("Failed to start server");

    let run = pipeline(
        "example.com\nEXAMPLE.com\nexample.com extra-field\n",
        vec![server.addr()],
        RecordType::A,
        8,
    );
    let summary = run.orchestrator.run().await.unwrap();

    assert_eq!(run.output.lines().len(), 1);
    assert_eq!(summary.duplicates_skipped, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_malformed_answer_does_not_stall() {
    let server = TestServerBuilder::new()
        .with_answer("broken.example.com", TestAnswer::Malformed)
        .with_a(TestDomains::example(), Ipv4Addr::new(93, 184, 216, 34), 300)
        .build()
        .await
        .expect("Failed to start server");

    let run = pipeline(
        "broken.example.com\nexample.com\n",
        vec![server.addr()],
        RecordType::A,
        1,
    );
    let summary = run.orchestrator.run().await.unwrap();

    assert_eq!(run.output.lines(), vec!["example.com 93.184.216.34 300"]);
    assert_eq!(summary.decode_failures, 1);
    assert!(summary.is_balanced());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_txt_lookup_prints_quoted_text() {
    let server = TestServerBuilder::new()
        .with_answer(
            TestDomains::example(),
            TestAnswer::Txt("v=spf1 -all".into(), 3600),
        )
        .build()
        .await
        .expect("Failed to start server");

    let run = pipeline("example.com\n", vec![server.addr()], RecordType::TXT, 4);
    run.orchestrator.run().await.unwrap();

    assert_eq!(run.output.lines(), vec!["example.com \"v=spf1 -all\" 3600"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_type_mismatch_prints_nothing() {
    let server = TestServerBuilder::new()
        .with_a(TestDomains::example(), Ipv4Addr::new(93, 184, 216, 34), 300)
        .build()
        .await
        .expect("Failed to start server");

    // Server answers with an A record whatever the question type
    let run = pipeline("example.com\n", vec![server.addr()], RecordType::AAAA, 4);
    let summary = run.orchestrator.run().await.unwrap();

    assert!(run.output.lines().is_empty());
    assert_eq!(summary.decode_failures, 0);
}
