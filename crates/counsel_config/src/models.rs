
use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via APP_DATABASE__URL or DATABASE_URL
}

// --- Google Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub key_path: Option<String>,    // Path to the service account key JSON
    pub calendar_id: Option<String>, // Calendar receiving the Meet events
    /// IANA time zone name used for event start/end times (e.g. "Europe/Zurich").
    pub time_zone: Option<String>,
    // Secrets loaded directly from env vars:
    // GOOGLE_CALENDAR_SERVICE_ACCOUNT_JSON
}

// --- Email / Notification Config ---
// Holds non-secret email config. Secrets loaded directly from env vars:
// MAILERSEND_API_KEY, SMTP_PASSWORD.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmailConfig {
    pub from_email: String,
    pub from_name: String,
    #[serde(default)]
    pub mailersend: Option<MailerSendConfig>,
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MailerSendConfig {
    /// Override of the API base URL, mainly for tests. Defaults to the
    /// public MailerSend endpoint when absent.
    pub api_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_true")]
    pub tls: bool,
    pub username: Option<String>,
    // Password loaded directly from env var: SMTP_PASSWORD
}

fn default_true() -> bool {
    true
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,
    #[serde(default)]
    pub use_notify: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub email: Option<EmailConfig>,
}
