//! Configuration for the calculator and report exporter.
//!
//! Settings live in an optional `.email-roi.toml`, found by walking up from
//! the working directory or passed explicitly with `--config`. Command-line
//! flags override the file, which overrides the built-in defaults.
//!
//! ```toml
//! [defaults]
//! email_list_size = 25000
//! open_rate = 0.22
//!
//! [locale]
//! currency_symbol = "₹"
//! grouping = "indian"
//!
//! [report]
//! footer = "Email ROI Insights | www.emailroiinsights.com"
//! file_name = "Email_Marketing_ROI_Analysis.pdf"
//! ```

mod core;
pub mod loader;

pub use self::core::{InputDefaults, LocaleConfig, ReportConfig, RoiConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

/// Contents written by `email-roi init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Email ROI calculator configuration

[defaults]
email_list_size = 10000
campaign_frequency = 4
open_rate = 0.20
click_through_rate = 0.15
conversion_rate = 0.03
average_order_value = 2500
campaign_cost = 20000

[locale]
currency_symbol = "₹"
# "indian" (1,00,000) or "western" (100,000)
grouping = "indian"

[report]
footer = "Email ROI Insights | www.emailroiinsights.com"
file_name = "Email_Marketing_ROI_Analysis.pdf"
"#;
