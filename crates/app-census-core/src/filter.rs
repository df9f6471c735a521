//! Inclusion Filter
//!
//! レコードをレポートに含めるかどうかを判定する。
//! 除外条件のいずれかに該当すれば除外、デフォルトは含める。

use std::collections::HashSet;

use crate::record::ApplicationRecord;

/// OSベンダー同梱のため明示的に除外するアプリ名
pub const EXCLUDED_APPS: &[&str] = &["GarageBand", "iMovie", "Keynote", "Numbers", "Pages"];

/// ベンダー入手元の識別文字列（大文字小文字無視で比較）
pub const VENDOR_SOURCE: &str = "apple";

/// システム所有のパスプレフィックス
pub const SYSTEM_PATH_PREFIXES: &[&str] =
    &["/System/Library/", "/System/Applications/", "/Library/Apple/"];

/// レポート包含判定フィルタ
#[derive(Debug, Clone)]
pub struct InclusionFilter {
    excluded_names: HashSet<String>,
}

impl InclusionFilter {
    /// ビルトインの除外リストで初期化
    pub fn with_defaults() -> Self {
        Self {
            excluded_names: EXCLUDED_APPS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// 設定ファイルの追加除外名をマージ
    pub fn with_extra_exclusions(mut self, names: &[String]) -> Self {
        for name in names {
            self.excluded_names.insert(name.clone());
        }
        self
    }

    /// レコードをレポートに含めるか判定
    ///
    /// 除外条件:
    /// - 名前が除外リストに含まれる
    /// - 入手元がベンダー（大文字小文字無視）
    /// - パスがシステムプレフィックスで始まる
    pub fn should_include(&self, record: &ApplicationRecord) -> bool {
        if self.excluded_names.contains(&record.name) {
            return false;
        }

        if record.obtained_from.eq_ignore_ascii_case(VENDOR_SOURCE) {
            return false;
        }

        if SYSTEM_PATH_PREFIXES
            .iter()
            .any(|prefix| record.path.starts_with(prefix))
        {
            return false;
        }

        true
    }
}

impl Default for InclusionFilter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
