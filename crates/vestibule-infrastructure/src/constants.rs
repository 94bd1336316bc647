//! Infrastructure layer constants
//!
//! Defaults and limits for the technical implementations. Protocol values
//! shared with other layers are defined in `vestibule_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vestibule.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vestibule";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VESTIBULE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Bare environment variable accepted as the signing secret
pub const JWT_SECRET_ENV_FALLBACK: &str = "JWT_SECRET";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 10;

/// Lowest bcrypt cost the algorithm accepts
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost the algorithm accepts
pub const BCRYPT_MAX_COST: u32 = 31;

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Default credential database location, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "auth/users.db";

/// Special path that opens a private in-memory database
pub const IN_MEMORY_DATABASE_PATH: &str = ":memory:";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Maximum request body size in bytes (1 MiB)
pub const MAX_REQUEST_BODY_SIZE: u64 = 1024 * 1024;

/// Default CORS origins (`*` reflects any requesting origin)
pub const CORS_DEFAULT_ORIGINS: &[&str] = &["*"];

/// Methods advertised in CORS preflight responses
pub const CORS_ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";

/// Request headers advertised in CORS preflight responses
pub const CORS_ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Response headers exposed to browsers
pub const CORS_EXPOSED_HEADERS: &str = "X-Total-Count";

/// Preflight cache lifetime in seconds
pub const CORS_MAX_AGE_SECS: u64 = 600;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "VESTIBULE_LOG";
