use std::env;
use std::net::SocketAddr;

#[derive(Clone)]
pub struct Config {
    // Data store
    pub supabase_url: String,
    pub supabase_key: String,

    // Session tokens
    pub jwt_secret: String,
    pub jwt_expiry_secs: u64,

    // Solana reads
    pub solana_rpc_url: String,
    pub token_mint: String,

    // Server
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_secs", &self.jwt_expiry_secs)
            .field("solana_rpc_url", &self.solana_rpc_url)
            .field("token_mint", &self.token_mint)
            .field("bind_addr", &self.bind_addr)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        // (env vars may be set directly in production)
        let _ = dotenvy::dotenv();

        let supabase_url = require_var("SUPABASE_URL")?;
        let supabase_key = require_var("SUPABASE_KEY")?;

        // No fallback: a published default secret would make every issued
        // token forgeable.
        let jwt_secret = require_var("JWT_SECRET")?;

        let jwt_expiry_secs = parse_env_or_default("JWT_EXPIRY_SECS", 86_400)?;

        let solana_rpc_url = env::var("SOLANA_RPC_URL")
            .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string());
        let token_mint = env::var("TOKEN_MINT")
            .unwrap_or_else(|_| "TLGkmTbAUVPyXiCM8e67h9WnDLRiGRo8LAfGvPt6Awz".to_string());

        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        // CORS origins for the browser frontend
        let allowed_origins_str = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());
        let allowed_origins: Vec<String> = allowed_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_key,
            jwt_secret,
            jwt_expiry_secs,
            solana_rpc_url,
            token_mint,
            bind_addr,
            allowed_origins,
        })
    }
}

/// Helper to read a required, non-empty environment variable
fn require_var(key: &str) -> Result<String, ConfigError> {
    let val = env::var(key).map_err(|_| ConfigError::MissingVar(key.to_string()))?;
    if val.is_empty() {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "cannot be empty".to_string(),
        ));
    }
    Ok(val)
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Use a mutex to ensure tests run serially since they modify global env vars.
    // unwrap_or_else handles poison from prior panics.
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn lock_test() -> std::sync::MutexGuard<'static, ()> {
        TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn clear_test_env() {
        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_KEY");
        env::remove_var("JWT_SECRET");
        env::remove_var("JWT_EXPIRY_SECS");
        env::remove_var("SOLANA_RPC_URL");
        env::remove_var("TOKEN_MINT");
        env::remove_var("BIND_ADDR");
        env::remove_var("ALLOWED_ORIGINS");
    }

    fn set_required_env() {
        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_KEY", "service-role-key");
        env::set_var("JWT_SECRET", "unit-test-secret");
    }

    #[test]
    fn test_parse_env_or_default() {
        let _guard = lock_test();

        env::set_var("TEST_U64", "12345");
        let result: Result<u64, ConfigError> = parse_env_or_default("TEST_U64", 100);
        assert_eq!(result.unwrap(), 12345);

        env::remove_var("TEST_U64");
        let result: Result<u64, ConfigError> = parse_env_or_default("TEST_U64", 100);
        assert_eq!(result.unwrap(), 100);
    }

    #[test]
    fn test_missing_jwt_secret() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_KEY", "service-role-key");
        // Set JWT_SECRET to empty to prevent dotenvy from reloading a valid
        // value from .env (dotenvy doesn't override existing vars).
        env::set_var("JWT_SECRET", "");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue(ref s, _) if s == "JWT_SECRET"
        ));

        clear_test_env();
    }

    #[test]
    fn test_empty_supabase_key() {
        let _guard = lock_test();
        clear_test_env();

        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_KEY", "");
        env::set_var("JWT_SECRET", "unit-test-secret");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidValue(ref s, _) if s == "SUPABASE_KEY"
        ));

        clear_test_env();
    }

    #[test]
    fn test_invalid_bind_addr() {
        let _guard = lock_test();
        clear_test_env();

        set_required_env();
        env::set_var("BIND_ADDR", "invalid_address");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_, _)));

        clear_test_env();
    }

    #[test]
    fn test_invalid_expiry() {
        let _guard = lock_test();
        clear_test_env();

        set_required_env();
        env::set_var("JWT_EXPIRY_SECS", "not-a-number");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ParseError(ref s, _) if s == "JWT_EXPIRY_SECS"
        ));

        clear_test_env();
    }

    #[test]
    fn test_allowed_origins_parsing() {
        let _guard = lock_test();
        clear_test_env();

        set_required_env();
        env::set_var(
            "ALLOWED_ORIGINS",
            "http://localhost:3000, https://club.example.org ",
        );

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://club.example.org"]
        );

        clear_test_env();
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let _guard = lock_test();
        clear_test_env();

        set_required_env();
        env::set_var("SUPABASE_URL", "https://example.supabase.co/");

        let config = Config::from_env().unwrap();
        assert_eq!(config.supabase_url, "https://example.supabase.co");

        clear_test_env();
    }

    #[test]
    fn test_config_defaults() {
        let _guard = lock_test();
        clear_test_env();

        set_required_env();
        env::set_var("BIND_ADDR", "0.0.0.0:8000");

        let config = Config::from_env().unwrap();

        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.jwt_expiry_secs, 86_400);
        assert_eq!(
            config.solana_rpc_url,
            "https://api.mainnet-beta.solana.com"
        );
        assert_eq!(config.token_mint, "TLGkmTbAUVPyXiCM8e67h9WnDLRiGRo8LAfGvPt6Awz");
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );

        clear_test_env();
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let _guard = lock_test();
        clear_test_env();

        set_required_env();

        let config = Config::from_env().unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("service-role-key"));
        assert!(!debug.contains("unit-test-secret"));
        assert!(debug.contains("[REDACTED]"));

        clear_test_env();
    }
}
