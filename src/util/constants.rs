// MailSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MailSift";

/// Application identifier used for config directories.
pub const APP_ID: &str = "MailSift";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Classification service
// =============================================================================

/// Default base URL of the classification service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Path of the classify operation, appended to the base URL.
pub const CLASSIFY_PATH: &str = "/classify";

/// Maximum response body size accepted from the service, in bytes.
/// A classification response is a few hundred bytes; the cap prevents a
/// misbehaving server from exhausting memory.
pub const MAX_RESPONSE_BYTES: usize = 256 * 1024; // 256 KB

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
