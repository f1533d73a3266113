
use std::env;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every variable a config reads so ambient values cannot leak in
pub(crate) fn clear_env() -> Vec<EnvGuard> {
    [
        crate::ENV_GITHUB_TOKEN,
        crate::ENV_DB_PATH,
        crate::ENV_WEB_ADDR,
        crate::ENV_REPO_OWNER,
        crate::ENV_REPO_NAME,
        crate::ENV_GITHUB_API_URL,
        crate::ENV_PAGE_SIZE,
        crate::ENV_BIND_ADDR,
        crate::ENV_LOGIN_MAX_ATTEMPTS,
        crate::ENV_LOGIN_WINDOW_SECS,
        crate::ENV_SESSION_TTL_SECS,
        crate::ENV_COOKIE_SECURE,
        crate::ENV_BACKUP_DIR,
        crate::ENV_LOG_LEVEL,
        crate::ENV_LOG_COLORED,
        crate::ENV_LOG_FILE,
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
