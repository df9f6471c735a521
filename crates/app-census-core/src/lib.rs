pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod record;
pub mod report;
pub mod system_apps;

pub use config::{Config, FilterConfig};
pub use error::{AppCensusError, Result};
pub use filter::{InclusionFilter, EXCLUDED_APPS, SYSTEM_PATH_PREFIXES, VENDOR_SOURCE};
pub use inventory::{
    check_inventory_command, fetch_installed_apps, parse_inventory, INVENTORY_ARGS,
    INVENTORY_COMMAND,
};
pub use record::{ApplicationRecord, UNKNOWN};
pub use report::{format_source, CategorizedReport, ReportEntry, REPORT_TITLE};
pub use system_apps::{bundled_app_names, bundled_app_names_in, SYSTEM_APP_DIRS};

// Category system
pub use category::{
    BuiltinCategory, CategoriesConfig, CategoryClassifier, CategoryDef, CategoryStore,
    BUILTIN_CATEGORIES, BUILTIN_OVERRIDES, CATEGORY_OTHER,
};
