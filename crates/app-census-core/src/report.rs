//! Categorized Report
//!
//! フィルタを通過したレコードをカテゴリ別にまとめ、テキスト
//! レポートとして描画する。レンダリングが唯一の外部成果物。

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Write as FmtWrite;

use once_cell::sync::Lazy;

use crate::category::CategoryClassifier;
use crate::filter::InclusionFilter;
use crate::record::{ApplicationRecord, UNKNOWN};

/// レポートヘッダ
pub const REPORT_TITLE: &str = "Third-Party Applications by Category:";

/// ヘッダ下線の幅
const TITLE_RULE_WIDTH: usize = 50;

/// 入手元の表示名置換表（キーは小文字）
static SOURCE_DISPLAY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("mac_app_store", "App Store"),
        ("identified_developer", "Verified Dev"),
        ("unknown", "Unknown"),
        ("apple", "Apple"),
    ]
    .into_iter()
    .collect()
});

/// 入手元文字列を表示名に変換
///
/// 置換表にないものはそのまま通す。
pub fn format_source(source: &str) -> String {
    SOURCE_DISPLAY
        .get(source.to_lowercase().as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| source.to_string())
}

/// レポートの1エントリ（名前、バージョン、整形済み入手元）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub version: String,
    pub source: String,
}

impl ReportEntry {
    fn from_record(record: &ApplicationRecord) -> Self {
        Self {
            name: record.name.clone(),
            version: record.version.clone(),
            source: format_source(&record.obtained_from),
        }
    }

    /// エントリ1行を整形
    ///
    /// バージョンが"Unknown"の場合はバージョン句を省略する。
    pub fn display_line(&self) -> String {
        if self.version == UNKNOWN {
            format!("• {} [{}]", self.name, self.source)
        } else {
            format!("• {} (v{}) [{}]", self.name, self.version, self.source)
        }
    }
}

/// カテゴリ別レポート
///
/// BTreeMapによりカテゴリは常に辞書順。エントリの名前順ソートと
/// "Apple"エントリの再除外はレンダリング時に行う。
#[derive(Debug, Default)]
pub struct CategorizedReport {
    categories: BTreeMap<String, Vec<ReportEntry>>,
}

impl CategorizedReport {
    /// レコード列からレポートを構築
    ///
    /// システムアプリ集合に含まれる名前と、フィルタで除外された
    /// レコードは対象外。残りは必ずちょうど1カテゴリに入る。
    pub fn build(
        records: &[ApplicationRecord],
        system_apps: &HashSet<String>,
        classifier: &CategoryClassifier,
        filter: &InclusionFilter,
    ) -> Self {
        let mut categories: BTreeMap<String, Vec<ReportEntry>> = BTreeMap::new();

        for record in records {
            if system_apps.contains(&record.name) || !filter.should_include(record) {
                continue;
            }

            let category = classifier.classify(&record.name, &record.path);
            categories
                .entry(category.to_string())
                .or_default()
                .push(ReportEntry::from_record(record));
        }

        Self { categories }
    }

    /// エントリが1件もないか
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|entries| entries.is_empty())
    }

    /// 全エントリ数（レンダリング時の再除外前）
    pub fn total_entries(&self) -> usize {
        self.categories.values().map(|entries| entries.len()).sum()
    }

    /// レンダリング対象のビュー（辞書順、名前順、"Apple"再除外済み）
    ///
    /// フィルタ段の判定とは別に、整形済み入手元が"Apple"の
    /// エントリをここでも落とす。空になったカテゴリは省く。
    pub fn visible(&self) -> Vec<(&str, Vec<&ReportEntry>)> {
        let mut result = Vec::new();

        for (category, entries) in &self.categories {
            let mut visible: Vec<&ReportEntry> =
                entries.iter().filter(|e| e.source != "Apple").collect();
            if visible.is_empty() {
                continue;
            }
            visible.sort_by(|a, b| a.name.cmp(&b.name));
            result.push((category.as_str(), visible));
        }

        result
    }

    /// テキストレポートを描画
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", REPORT_TITLE);
        let _ = writeln!(out, "{}", "=".repeat(TITLE_RULE_WIDTH));

        for (category, entries) in self.visible() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", category);
            let _ = writeln!(out, "{}", "-".repeat(category.len()));
            for entry in entries {
                let _ = writeln!(out, "{}", entry.display_line());
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, path: &str, version: &str, obtained_from: &str) -> ApplicationRecord {
        ApplicationRecord {
            name: name.to_string(),
            path: path.to_string(),
            version: version.to_string(),
            obtained_from: obtained_from.to_string(),
            last_modified: UNKNOWN.to_string(),
        }
    }

    fn build(records: &[ApplicationRecord], system_apps: &[&str]) -> CategorizedReport {
        let system_apps: HashSet<String> = system_apps.iter().map(|s| s.to_string()).collect();
        CategorizedReport::build(
            records,
            &system_apps,
            &CategoryClassifier::builtin(),
            &InclusionFilter::with_defaults(),
        )
    }

    #[test]
    fn test_format_source_known() {
        assert_eq!(format_source("mac_app_store"), "App Store");
        assert_eq!(format_source("identified_developer"), "Verified Dev");
        assert_eq!(format_source("unknown"), "Unknown");
        assert_eq!(format_source("apple"), "Apple");
    }

    #[test]
    fn test_format_source_passthrough() {
        assert_eq!(format_source("sideloaded"), "sideloaded");
    }

    #[test]
    fn test_display_line_version_clause() {
        let entry = ReportEntry {
            name: "Obsidian".to_string(),
            version: "1.2.0".to_string(),
            source: "Verified Dev".to_string(),
        };
        assert_eq!(entry.display_line(), "• Obsidian (v1.2.0) [Verified Dev]");

        let entry = ReportEntry {
            name: "vUbuntu 22.04".to_string(),
            version: UNKNOWN.to_string(),
            source: "Unknown".to_string(),
        };
        assert_eq!(entry.display_line(), "• vUbuntu 22.04 [Unknown]");
    }

    #[test]
    fn test_report_obsidian_end_to_end() {
        let records = [record(
            "Obsidian",
            "/Applications/Obsidian.app",
            "1.2.0",
            "identified_developer",
        )];
        let rendered = build(&records, &[]).render();
        assert!(rendered.contains("Productivity:"));
        assert!(rendered.contains("• Obsidian (v1.2.0) [Verified Dev]"));
    }

    #[test]
    fn test_report_vendor_app_excluded() {
        let records = [record("Keynote", "/Applications/Keynote.app", "12.0", "apple")];
        let rendered = build(&records, &[]).render();
        assert!(!rendered.contains("Keynote"));
    }

    #[test]
    fn test_report_ubuntu_without_version() {
        let records = [record(
            "vUbuntu 22.04",
            "/Applications/vUbuntu.app",
            UNKNOWN,
            "unknown",
        )];
        let rendered = build(&records, &[]).render();
        assert!(rendered.contains("Virtualization:"));
        assert!(rendered.contains("• vUbuntu 22.04 [Unknown]"));
    }

    #[test]
    fn test_system_apps_never_reported() {
        let records = [record(
            "Safari",
            "/Applications/Safari.app",
            "17.0",
            "identified_developer",
        )];
        let rendered = build(&records, &["Safari"]).render();
        assert!(!rendered.contains("Safari"));
    }

    #[test]
    fn test_render_drops_apple_source_again() {
        // フィルタを通ってしまった"Apple"入手元のエントリも描画段で落ちる
        let mut report = CategorizedReport::default();
        report.categories.insert(
            "Productivity".to_string(),
            vec![ReportEntry {
                name: "Keynote".to_string(),
                version: "12.0".to_string(),
                source: "Apple".to_string(),
            }],
        );
        let rendered = report.render();
        assert!(!rendered.contains("Keynote"));
        assert!(!rendered.contains("Productivity:"));
    }

    #[test]
    fn test_categories_lexicographic_entries_sorted() {
        let records = [
            record("Spotify", "/Applications/Spotify.app", "1.0", "unknown"),
            record("Google Chrome", "/Applications/Google Chrome.app", "120", "unknown"),
            record("Arc", "/Applications/Arc.app", "1.5", "unknown"),
        ];
        let rendered = build(&records, &[]).render();

        let browsers = rendered.find("Browsers & Internet:").unwrap();
        let media = rendered.find("Media & Creative:").unwrap();
        assert!(browsers < media);

        let arc = rendered.find("• Arc").unwrap();
        let chrome = rendered.find("• Google Chrome").unwrap();
        assert!(arc < chrome);
    }

    #[test]
    fn test_empty_report_renders_header_only() {
        let report = build(&[], &[]);
        assert!(report.is_empty());
        let rendered = report.render();
        assert!(rendered.starts_with(REPORT_TITLE));
        assert_eq!(rendered.lines().count(), 2);
    }
}
