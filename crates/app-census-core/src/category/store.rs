//! Category Store
//!
//! カテゴリ定義のランタイムストア。
//! ビルトインと設定ファイルのオーバーライドをマージして保持。
//! 構築後は不変。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::builtin::{CategoryDef, BUILTIN_CATEGORIES, BUILTIN_OVERRIDES};

/// カテゴリ定義のランタイムストア
///
/// キーワード表は宣言順を保持するVecで持つ。first-match-winsの
/// タイブレークが順序に依存するため、順序を持たないマップ型に
/// 置き換えてはならない。
#[derive(Debug, Clone)]
pub struct CategoryStore {
    categories: Vec<CategoryDef>,
    overrides: HashMap<String, String>,
}

impl CategoryStore {
    /// ビルトイン定義のみで初期化
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES.iter().map(CategoryDef::from).collect();
        let overrides = BUILTIN_OVERRIDES
            .iter()
            .map(|(name, cat)| (name.to_string(), cat.to_string()))
            .collect();
        Self {
            categories,
            overrides,
        }
    }

    /// 設定ファイルのオーバーライドをマージ
    ///
    /// - 同名アプリのオーバーライドは上書き
    /// - 新規アプリは追加
    pub fn with_config(mut self, config: &CategoriesConfig) -> Self {
        for (name, category) in &config.overrides {
            self.overrides.insert(name.clone(), category.clone());
        }
        self
    }

    /// 全カテゴリを宣言順で取得
    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// アプリ名に対するオーバーライドを取得
    pub fn override_for(&self, app_name: &str) -> Option<&str> {
        self.overrides.get(app_name).map(|s| s.as_str())
    }

    /// カテゴリ名一覧（宣言順）
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `config.toml`の`[category]`セクション
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesConfig {
    /// アプリ名 -> カテゴリ名のオーバーライド
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}
