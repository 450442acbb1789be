//! Application constants
//!
//! Centralized location for user-facing strings and configuration defaults.

/// Path of the contact endpoint, appended to the configured backend URL
pub const CONTACT_PATH: &str = "/api/contact";

/// Environment variable holding the backend base URL
pub const ENV_BACKEND_URL: &str = "FENJI_BACKEND_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_REQUEST_TIMEOUT: &str = "FENJI_REQUEST_TIMEOUT_SECS";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shown when the server gives no usable error message
pub const FALLBACK_ERROR_MESSAGE: &str = "Niečo sa pokazilo. Skúste to prosím znova.";

/// Shown when the server reports success without a message
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Vaša správa bola úspešne odoslaná.";

/// Submit button label
pub const SUBMIT_LABEL: &str = "Odoslať správu";

/// Submit button label while a request is in flight
pub const SUBMITTING_LABEL: &str = "Odosielanie...";

/// How long a toast stays on screen
pub const TOAST_TTL_SECS: u64 = 4;

/// Maximum toasts visible at once
pub const MAX_TOASTS: usize = 3;

/// Application name
pub const APP_NAME: &str = "FENJI Slovakia";

/// Company details shown beside the form
pub const COMPANY_LINES: &[(&str, &str)] = &[
    ("Firma", "FENJI Slovakia s.r.o."),
    ("Adresa", "Ihrište 10, 020 01 Púchov"),
    ("Krajina", "Slovenská republika"),
    ("IČO", "54122929"),
    ("DIČ", "2121587974"),
    ("IČ DPH", "SK2121587974"),
    ("Telefón", "+421 947938696"),
    ("E-mail", "info@fenjislovakia.eu"),
];
