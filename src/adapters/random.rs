use crate::domain::ports::{Chooser, Sleeper};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// 以 thread-local 亂數產生器挑選
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose<'a>(&self, pool: &'a [String]) -> Option<&'a str> {
        pool.choose(&mut rand::thread_rng()).map(String::as_str)
    }

    fn delay_between(&self, min_secs: u64, max_secs: u64) -> Duration {
        if min_secs >= max_secs {
            return Duration::from_secs(min_secs);
        }
        Duration::from_secs(rand::thread_rng().gen_range(min_secs..=max_secs))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
