/// Collabspace — centralized constants.
/// All magic numbers, strings, and limits live here.
/// Never hardcode these values elsewhere.

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    /// AI completion service every editor host binds against.
    pub const COMPLETION_ENDPOINT: &str = "http://localhost:4000/complete";
    /// Collabspace backend (sign-in, OTP, collab spaces).
    pub const BACKEND_BASE_URL: &str = "http://localhost:4000";
}

// ─── Default Settings ─────────────────────────────────────────────────────────

pub mod defaults {
    pub const LANGUAGE: &str = "javascript";
    pub const THEME: &str = "vs-dark";
    pub const FONT_SIZE: f32 = 14.0;
    pub const TAB_SIZE: u32 = 4;
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
}

// ─── Resource Limits ──────────────────────────────────────────────────────────

pub mod limits {
    /// Buffer context shipped per completion request, measured in chars
    /// before/after the cursor.
    pub const MAX_CONTEXT_BEFORE_CHARS: usize = 8000;
    pub const MAX_CONTEXT_AFTER_CHARS: usize = 2000;

    /// Minimum password length accepted by the sign-in form.
    pub const MIN_PASSWORD_CHARS: usize = 8;
    /// One-time passwords are exactly this many digits.
    pub const OTP_DIGITS: usize = 6;
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "collabspace";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const CREDENTIALS_FILE: &str = "credentials.toml";
}
