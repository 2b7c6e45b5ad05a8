use async_trait::async_trait;
use std::time::Duration;

/// 從設定池中挑選項目、決定重試等待時間。
///
/// 正式環境使用亂數，測試可以換成固定的選擇。
pub trait Chooser: Send + Sync {
    /// 從 `pool` 中選一個項目；池為空時回傳 `None`
    fn choose<'a>(&self, pool: &'a [String]) -> Option<&'a str>;

    /// 回傳 `[min_secs, max_secs]` 之間（含兩端）的等待時間
    fn delay_between(&self, min_secs: u64, max_secs: u64) -> Duration;
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
