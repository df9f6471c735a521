//! Inventory Fetcher
//!
//! `system_profiler`を呼び出してインストール済みアプリケーションの
//! 一覧を取得する。
//!
//! コマンド実行とJSONパースは分離されており、テストでは
//! [`parse_inventory`]にフィクスチャJSONを渡すだけでよい。

use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::{AppCensusError, Result};
use crate::record::{ApplicationRecord, UNKNOWN};

/// インベントリ取得コマンド
pub const INVENTORY_COMMAND: &str = "system_profiler";

/// インベントリ取得コマンドの引数
pub const INVENTORY_ARGS: &[&str] = &["SPApplicationsDataType", "-json"];

/// `system_profiler`の出力（トップレベル）
#[derive(Debug, Deserialize)]
struct ProfilerOutput {
    #[serde(rename = "SPApplicationsDataType", default)]
    applications: Vec<ProfilerEntry>,
}

/// `system_profiler`の出力（アプリケーション1件）
#[derive(Debug, Deserialize)]
struct ProfilerEntry {
    #[serde(rename = "_name")]
    name: Option<String>,
    path: Option<String>,
    version: Option<String>,
    obtained_from: Option<String>,
    #[serde(rename = "lastModified")]
    last_modified: Option<String>,
}

impl ProfilerEntry {
    fn into_record(self) -> ApplicationRecord {
        let or_unknown = |field: Option<String>| field.unwrap_or_else(|| UNKNOWN.to_string());
        ApplicationRecord {
            name: or_unknown(self.name),
            path: or_unknown(self.path),
            version: or_unknown(self.version),
            obtained_from: or_unknown(self.obtained_from),
            last_modified: or_unknown(self.last_modified),
        }
    }
}

/// `system_profiler`が利用可能かチェック
///
/// `system_profiler -listDataTypes` を実行して成功すればtrue
pub fn check_inventory_command() -> bool {
    Command::new(INVENTORY_COMMAND)
        .arg("-listDataTypes")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// インストール済みアプリケーションの一覧を取得
///
/// # Errors
/// * `InventoryCommand` - コマンドの起動失敗・非ゼロ終了
/// * `InventoryParse` - 出力JSONのパース失敗
pub fn fetch_installed_apps() -> Result<Vec<ApplicationRecord>> {
    let output = Command::new(INVENTORY_COMMAND)
        .args(INVENTORY_ARGS)
        .output()
        .map_err(|e| AppCensusError::InventoryCommand {
            message: format!("Failed to spawn {}: {}", INVENTORY_COMMAND, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppCensusError::InventoryCommand {
            message: format!("{} exited with error: {}", INVENTORY_COMMAND, stderr.trim()),
        });
    }

    parse_inventory(&String::from_utf8_lossy(&output.stdout))
}

/// インベントリJSONをレコード列にパース
///
/// 欠落フィールドは`"Unknown"`で埋める。トップレベルキーが
/// 存在しない場合は空列。
pub fn parse_inventory(json: &str) -> Result<Vec<ApplicationRecord>> {
    let parsed: ProfilerOutput = serde_json::from_str(json)?;
    Ok(parsed
        .applications
        .into_iter()
        .map(ProfilerEntry::into_record)
        .collect())
}
