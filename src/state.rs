/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - 認証設定の組み立ては stateless なので今は保持する依存なし
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
