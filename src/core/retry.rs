//! 有上限的重試狀態機：Attempting → (Waiting → Attempting)* → Succeeded | Exhausted。
//!
//! 等待時間由 [`Chooser`] 決定，實際等待交給 [`Sleeper`]，測試時不需要真的睡。

use crate::config::ScraperSettings;
use crate::domain::ports::{Chooser, Sleeper};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay_min_secs: u64,
    pub delay_max_secs: u64,
}

impl From<&ScraperSettings> for RetryPolicy {
    fn from(settings: &ScraperSettings) -> Self {
        Self {
            max_attempts: settings.max_attempts,
            delay_min_secs: settings.retry_delay_min_secs,
            delay_max_secs: settings.retry_delay_max_secs,
        }
    }
}

/// 單次嘗試的結果
#[derive(Debug)]
pub enum AttemptOutcome<T> {
    /// 結束，不論成功或失敗
    Done(T),
    /// 可以重試（例如 403）
    Retry,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RetryState<T> {
    Attempting { attempt: u32 },
    Waiting { next_attempt: u32, delay: Duration },
    Succeeded { attempt: u32, value: T },
    Exhausted { attempts: u32 },
}

impl<T> RetryState<T> {
    pub fn start() -> Self {
        RetryState::Attempting { attempt: 1 }
    }

    /// 根據第 `attempt` 次嘗試的結果決定下一個狀態
    pub fn after_attempt(
        attempt: u32,
        outcome: AttemptOutcome<T>,
        policy: &RetryPolicy,
        chooser: &dyn Chooser,
    ) -> Self {
        match outcome {
            AttemptOutcome::Done(value) => RetryState::Succeeded { attempt, value },
            AttemptOutcome::Retry if attempt >= policy.max_attempts => {
                RetryState::Exhausted { attempts: attempt }
            }
            AttemptOutcome::Retry => RetryState::Waiting {
                next_attempt: attempt + 1,
                delay: chooser.delay_between(policy.delay_min_secs, policy.delay_max_secs),
            },
        }
    }
}

/// 狀態機的終止結果
#[derive(Debug, PartialEq, Eq)]
pub enum Finished<T> {
    Succeeded { attempt: u32, value: T },
    Exhausted { attempts: u32 },
}

/// 執行 `operation` 直到得到結果或次數用完。
pub async fn run<T, F, Fut>(
    policy: &RetryPolicy,
    chooser: &dyn Chooser,
    sleeper: &dyn Sleeper,
    mut operation: F,
) -> Finished<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AttemptOutcome<T>>,
{
    let mut state = RetryState::start();

    loop {
        state = match state {
            RetryState::Attempting { attempt } => {
                let outcome = operation(attempt).await;
                RetryState::after_attempt(attempt, outcome, policy, chooser)
            }
            RetryState::Waiting {
                next_attempt,
                delay,
            } => {
                tracing::debug!("Waiting {:?} before attempt {}", delay, next_attempt);
                sleeper.sleep(delay).await;
                RetryState::Attempting {
                    attempt: next_attempt,
                }
            }
            RetryState::Succeeded { attempt, value } => {
                return Finished::Succeeded { attempt, value }
            }
            RetryState::Exhausted { attempts } => return Finished::Exhausted { attempts },
        };
    }
}
