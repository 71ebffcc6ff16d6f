use crate::domain::model::CheckReport;
use async_trait::async_trait;

/// 逐行輸出診斷文字的介面
pub trait Reporter: Send + Sync {
    fn line(&self, text: &str);
}

pub trait ProbeConfig: Send + Sync {
    fn mcp_url(&self) -> &str;
    fn project_ref(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait Diagnostic: Send + Sync {
    async fn check_server_reachability(&self) -> CheckReport;
    async fn check_project_endpoint(&self) -> CheckReport;
}
