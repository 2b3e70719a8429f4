pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the dashboard, the request workers and the
    //! LLM transport, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for request workers
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Pending requests between the dashboard and the dispatcher
    pub const REQUEST_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // DASHBOARD DEFAULTS
    // =============================================================================

    /// Industry pre-filled in the market intelligence query.
    pub const DEFAULT_INDUSTRY: &str = "Cybersecurity";

    /// Product pitched by the sales copilot.
    pub const PRODUCT_DESCRIPTION: &str = "Market Mind AI Enterprise intelligence platform";

    /// Maximum characters accepted in the industry query field.
    pub const MAX_QUERY_LEN: usize = 64;

    /// Splash screen duration (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1500;

    /// UI poll interval for terminal input (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Simulated response time of the offline demo backend (milliseconds)
    pub const DEMO_LATENCY_MS: u64 = 1200;

    // =============================================================================
    // LLM CONFIGURATION
    // =============================================================================

    pub mod llm {
        use std::time::Duration;

        pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
        pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

        pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
        pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

        /// Upper bound on generated tokens per request
        pub const MAX_OUTPUT_TOKENS: u32 = 4096;

        /// Whole-request timeout (seconds). Grounded searches are slow.
        pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

        /// TCP connect timeout (seconds)
        pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const fn request_timeout(secs: u64) -> Duration {
            Duration::from_secs(secs)
        }
    }
}
