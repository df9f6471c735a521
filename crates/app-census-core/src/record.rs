use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// フィールドが取得できなかった場合のプレースホルダ
pub const UNKNOWN: &str = "Unknown";

/// インベントリから取得した1アプリケーションのレコード
///
/// 取得後は不変。欠落フィールドはパース時に`"Unknown"`で埋められる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// 表示名
    pub name: String,
    /// インストールパス
    pub path: String,
    /// バージョン文字列
    pub version: String,
    /// 入手元（mac_app_store / identified_developer / apple / unknown）
    pub obtained_from: String,
    /// 最終更新タイムスタンプ（RFC 3339、不明なら"Unknown"）
    pub last_modified: String,
}

impl ApplicationRecord {
    /// バージョンが判明しているか
    pub fn has_version(&self) -> bool {
        self.version != UNKNOWN
    }

    /// 最終更新タイムスタンプをパース
    ///
    /// `"Unknown"`やパース不能な文字列はNone。
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_modified)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
