//! Category Classifier
//!
//! アプリケーション名をCategoryStoreの定義に基づいて分類する。
//!
//! 解決順序（先勝ち）:
//! 1. オーバーライド表（アプリ名完全一致）
//! 2. "ubuntu"部分一致ルール → Virtualization
//! 3. キーワード表スキャン（宣言順、大文字小文字無視の部分一致）
//! 4. フォールバック → Other

use super::builtin::CATEGORY_OTHER;
use super::store::CategoryStore;

/// カテゴリ分類器
///
/// 構築時にキーワードを小文字化して保持する。分類は純粋関数で、
/// 同じ入力には常に同じカテゴリを返す。
pub struct CategoryClassifier {
    store: CategoryStore,
    lowered_keywords: Vec<Vec<String>>,
}

impl CategoryClassifier {
    /// 新規分類器を作成
    pub fn new(store: CategoryStore) -> Self {
        let lowered_keywords = store
            .categories()
            .iter()
            .map(|cat| cat.keywords.iter().map(|k| k.to_lowercase()).collect())
            .collect();
        Self {
            store,
            lowered_keywords,
        }
    }

    /// ビルトイン定義のみで分類器を構築
    pub fn builtin() -> Self {
        Self::new(CategoryStore::builtin())
    }

    /// 利用可能なカテゴリ名を取得
    pub fn category_names(&self) -> Vec<&str> {
        self.store.names()
    }

    /// アプリケーションをちょうど1つのカテゴリに分類
    ///
    /// `path`は現状どのルールも参照しないが、インターフェース
    /// 互換のため保持している。
    pub fn classify(&self, name: &str, _path: &str) -> &str {
        if let Some(category) = self.store.override_for(name) {
            return category;
        }

        let name_lower = name.to_lowercase();

        // バージョン付き名（"vUbuntu 22.04"等）もVirtualization扱い
        if name_lower.contains("ubuntu") {
            return "Virtualization";
        }

        for (def, keywords) in self.store.categories().iter().zip(&self.lowered_keywords) {
            if keywords.iter().any(|k| name_lower.contains(k.as_str())) {
                return def.name.as_str();
            }
        }

        CATEGORY_OTHER
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}
