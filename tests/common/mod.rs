#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vessel_info::core::{Chooser, Sleeper};
use vessel_info::{ScraperSettings, VesselInfoFetcher};

pub const SHIP_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>EVER GIVEN - IMO 9811000</title></head>
<body>
  <div id="ship-history-info"
       data-name="EVER GIVEN"
       data-imo="9811000"
       data-mmsi="353136000"
       data-flag-code="PA"
       data-country="Panama"
       data-company="Evergreen Marine Corp"></div>
</body>
</html>"#;

pub const PARTIAL_SHIP_PAGE: &str =
    r#"<html><body><div id="ship-history-info" data-name="EVER GIVEN" data-mmsi="353136000"></div></body></html>"#;

pub const EMPTY_PAGE: &str = "<html><body><p>No results</p></body></html>";

/// 依序回傳預先排好的索引，池為空時不消耗。每次挑選的池都會記錄下來。
#[derive(Default)]
pub struct ScriptedChooser {
    picks: Mutex<VecDeque<usize>>,
    pub requested_pools: Mutex<Vec<Vec<String>>>,
    pub requested_delays: Mutex<Vec<(u64, u64)>>,
}

impl ScriptedChooser {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: Mutex::new(picks.iter().copied().collect()),
            ..Self::default()
        }
    }
}

impl Chooser for ScriptedChooser {
    fn choose<'a>(&self, pool: &'a [String]) -> Option<&'a str> {
        self.requested_pools.lock().unwrap().push(pool.to_vec());
        if pool.is_empty() {
            return None;
        }
        let index = self.picks.lock().unwrap().pop_front().unwrap_or(0);
        pool.get(index % pool.len()).map(String::as_str)
    }

    fn delay_between(&self, min_secs: u64, max_secs: u64) -> Duration {
        self.requested_delays
            .lock()
            .unwrap()
            .push((min_secs, max_secs));
        Duration::from_secs(max_secs)
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub slept: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

pub fn settings(search_url: String, user_agents: &[&str]) -> ScraperSettings {
    ScraperSettings {
        search_url,
        user_agents: user_agents.iter().map(|s| s.to_string()).collect(),
        request_timeout: Duration::from_secs(5),
        ..ScraperSettings::default()
    }
}

pub fn fetcher(
    settings: ScraperSettings,
    chooser: Arc<ScriptedChooser>,
    sleeper: Arc<RecordingSleeper>,
) -> VesselInfoFetcher {
    VesselInfoFetcher::with_ports(settings, chooser, sleeper)
}
