use crate::domain::model::ProbeSummary;
use crate::domain::ports::{Diagnostic, Reporter};
use crate::utils::monitor::SystemMonitor;

pub struct DiagnosticRunner<D: Diagnostic, R: Reporter> {
    diagnostic: D,
    reporter: R,
    monitor: SystemMonitor,
}

impl<D: Diagnostic, R: Reporter> DiagnosticRunner<D, R> {
    pub fn new(diagnostic: D, reporter: R) -> Self {
        Self::new_with_monitoring(diagnostic, reporter, false)
    }

    pub fn new_with_monitoring(diagnostic: D, reporter: R, monitor_enabled: bool) -> Self {
        Self {
            diagnostic,
            reporter,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依固定順序執行兩項檢查
    pub async fn run(&self) -> ProbeSummary {
        self.reporter.line("=== MCP Supabase Connection Test ===");
        self.reporter.line("");

        tracing::info!("Running server reachability check");
        let reachability = self.diagnostic.check_server_reachability().await;
        self.monitor.log_stats("Server reachability check");
        tracing::debug!(
            "Reachability check finished in {:?}",
            reachability.duration
        );

        self.reporter.line("");

        tracing::info!("Running project endpoint check");
        let project = self.diagnostic.check_project_endpoint().await;
        self.monitor.log_stats("Project endpoint check");
        tracing::debug!("Project endpoint check finished in {:?}", project.duration);

        self.monitor.log_final_stats();

        ProbeSummary {
            reachability,
            project,
        }
    }
}
