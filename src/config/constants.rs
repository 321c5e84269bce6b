//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Routing
// =============================================================================

/// Prefix for all versioned API routes
pub const API_PREFIX: &str = "/api/v1";

// =============================================================================
// Pagination
// =============================================================================

/// Default number of records skipped by list endpoints
pub const DEFAULT_OFFSET: u64 = 0;

/// Default number of records returned by list endpoints
pub const DEFAULT_LIMIT: u64 = 10;

/// Maximum allowed records per page to prevent excessive queries
pub const MAX_LIMIT: u64 = 100;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "mysql";
pub const DEFAULT_DB_PASSWORD: &str = "mysql";
pub const DEFAULT_DB_NAME: &str = "mysql";

/// Upper bound of pooled connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 100;

/// Connections kept open while idle
pub const DEFAULT_DB_MIN_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;
