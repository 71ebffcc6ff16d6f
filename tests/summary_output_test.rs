use anyhow::Result;
use httpmock::prelude::*;
use mcp_probe::core::Reporter;
use mcp_probe::{CliConfig, ConnectivityProbe, Credentials, DiagnosticRunner};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct MemoryReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryReporter {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for MemoryReporter {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

async fn run_full_probe(mcp_url: String) -> Vec<String> {
    let reporter = MemoryReporter::default();
    let config = CliConfig {
        mcp_url,
        project_ref: "test_project".to_string(),
        timeout_seconds: 5,
        verbose: false,
        monitor: false,
    };
    let probe = ConnectivityProbe::new(
        reporter.clone(),
        config,
        Credentials::from_values(None, None),
    );
    let runner = DiagnosticRunner::new(probe, reporter.clone());
    runner.run().await;
    reporter.lines()
}

fn count_summary_banners(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|line| line.as_str() == "=== Test Complete ===")
        .count()
}

#[tokio::test]
async fn test_summary_printed_once_on_success() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/mcp");
        then.status(200).body("ok");
    });

    let lines = run_full_probe(server.url("/mcp")).await;

    assert_eq!(count_summary_banners(&lines), 1);
    assert!(lines.iter().any(|line| line == "📋 Summary:"));
    assert!(lines.iter().any(|line| line == "📁 Configuration:"));
    assert!(lines
        .iter()
        .any(|line| line.contains("Config file: ~/.cursor/mcp.json")));
    assert!(lines
        .iter()
        .any(|line| line.contains("Required env vars: SUPABASE_URL, SUPABASE_ANON_KEY")));

    Ok(())
}

#[tokio::test]
async fn test_summary_printed_once_on_error_status() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/mcp");
        then.status(500).body("internal error");
    });

    let lines = run_full_probe(server.url("/mcp")).await;

    assert_eq!(count_summary_banners(&lines), 1);

    Ok(())
}

#[tokio::test]
async fn test_summary_printed_once_on_transport_error() -> Result<()> {
    // 無人監聽的埠
    let lines = run_full_probe("http://127.0.0.1:9/mcp".to_string()).await;

    assert_eq!(count_summary_banners(&lines), 1);

    Ok(())
}

/// 開場橫幅在前，兩項檢查依固定順序，總結在最後
#[tokio::test]
async fn test_output_sections_are_in_fixed_order() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/mcp");
        then.status(200).body("ok");
    });

    let lines = run_full_probe(server.url("/mcp")).await;

    let position = |needle: &str| {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("line not found: {}", needle))
    };

    let banner = position("=== MCP Supabase Connection Test ===");
    let first_check = position("1. Checking Supabase MCP server...");
    let second_check = position("2. Testing Supabase project endpoint...");
    let summary = position("=== Test Complete ===");

    assert!(banner < first_check);
    assert!(first_check < second_check);
    assert!(second_check < summary);

    Ok(())
}
