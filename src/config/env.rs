use std::env;

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Supabase 憑證，程序啟動時從環境變數讀取一次
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    supabase_url: Option<String>,
    anon_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(ENV_SUPABASE_URL).ok(),
            env::var(ENV_SUPABASE_ANON_KEY).ok(),
        )
    }

    /// 空字串視同未設定
    pub fn from_values(supabase_url: Option<String>, anon_key: Option<String>) -> Self {
        Self {
            supabase_url: supabase_url.filter(|v| !v.is_empty()),
            anon_key: anon_key.filter(|v| !v.is_empty()),
        }
    }

    // SUPABASE_URL 不參與請求組裝，僅供診斷顯示
    pub fn supabase_url(&self) -> Option<&str> {
        self.supabase_url.as_deref()
    }

    pub fn anon_key(&self) -> Option<&str> {
        self.anon_key.as_deref()
    }
}
