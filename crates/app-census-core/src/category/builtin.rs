//! Builtin Category Definitions
//!
//! コード内で定義されるビルトインカテゴリとオーバーライド表。
//! キーワード表の宣言順はfirst-match-winsのタイブレークとして
//! 意味を持つため、変更してはならない。

use serde::{Deserialize, Serialize};

/// どのルールにもマッチしなかった場合のフォールバックカテゴリ
pub const CATEGORY_OTHER: &str = "Other";

/// アプリ名完全一致のカテゴリオーバーライド表
///
/// キーワードルールより先に参照される。誤分類の既知ケースと
/// ベンダー固有ケースをカバーする。
pub const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    ("Google Slides", "Productivity"),
    ("Google Docs", "Productivity"),
    ("Google Sheets", "Productivity"),
    ("Keynote", "Productivity"),
    ("Pages", "Productivity"),
    ("Numbers", "Productivity"),
    ("Obsidian", "Productivity"),
    ("OnyX", "Utilities"),
    ("SteerMouse", "Utilities"),
    ("Tabby", "Development"),
    ("Ubuntu", "Virtualization"),
    ("Yubico Authenticator", "Security & Privacy"),
    ("iStat Menus", "Utilities"),
    ("iStat Menus Helper", "Utilities"),
    ("iStat Menus Menubar", "Utilities"),
    ("Scam Copilot", "Security & Privacy"),
    ("Rectangle Pro", "Utilities"),
    ("AppCleaner", "Utilities"),
    ("Bartender 5", "Utilities"),
    ("ForkLift", "Utilities"),
    ("Swift Quit", "Utilities"),
];

/// ビルトインカテゴリ定義（宣言順 = スキャン順）
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "Development",
        keywords: &[
            "Visual Studio Code",
            "Xcode",
            "Docker",
            "iTerm",
            "Python",
            "Developer",
            "IDE",
            "Terminal",
            "Code",
            "Git",
        ],
    },
    BuiltinCategory {
        name: "Browsers & Internet",
        keywords: &["Chrome", "Firefox", "Safari", "Opera", "Edge", "Arc", "Browser"],
    },
    BuiltinCategory {
        name: "Security & Privacy",
        keywords: &[
            "1Password",
            "Bitwarden",
            "VPN",
            "Antivirus",
            "Bitdefender",
            "Password",
            "Security",
            "Radio Silence",
            "Yubico",
            "Scam",
        ],
    },
    BuiltinCategory {
        name: "Productivity",
        keywords: &[
            "Office",
            "Docs",
            "Sheets",
            "Slides",
            "Notes",
            "Task",
            "Calendar",
            "Mail",
            "Presentation",
            "Document",
        ],
    },
    BuiltinCategory {
        name: "Utilities",
        keywords: &[
            "Rectangle",
            "Bartender",
            "AppCleaner",
            "ForkLift",
            "Utility",
            "Cleaner",
            "Manager",
            "Stats",
            "Monitor",
            "Helper",
            "Menu",
        ],
    },
    BuiltinCategory {
        name: "Media & Creative",
        keywords: &[
            "DaVinci", "Luminar", "Screen", "Spotify", "Music", "Photo", "Video", "Audio",
            "Creative", "Media",
        ],
    },
    BuiltinCategory {
        name: "Cloud Storage",
        keywords: &["Google Drive", "Dropbox", "iCloud", "OneDrive", "Box", "Sync"],
    },
    BuiltinCategory {
        name: "Virtualization",
        keywords: &[
            "Parallels",
            "VMware",
            "VirtualBox",
            "Virtual",
            "VM",
            "Linux",
            "Windows",
            "Ubuntu",
        ],
    },
];

/// ビルトインカテゴリの静的定義
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// カテゴリ名（レポートの見出しに使用）
    pub name: &'static str,
    /// アプリ名に対する部分一致キーワード（大文字小文字無視）
    pub keywords: &'static [&'static str],
}

/// ランタイムカテゴリ定義
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    /// カテゴリ名
    pub name: String,
    /// 部分一致キーワード
    pub keywords: Vec<String>,
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            keywords: builtin.keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}
