//! 船舶資料抓取流程。
//!
//! 1. 查詢頁：以隨機身分 GET 查詢網址，跟隨重新導向取得船舶頁網址。
//! 2. 船舶頁：同一個 session 再 GET 一次並解析 `div#ship-history-info`。
//!    遇到 403 會換身分重試，其他非 200 直接結束。

use crate::adapters::{HttpClient, HttpSession, RandomChooser, TokioSleeper};
use crate::config::ScraperSettings;
use crate::core::extract::extract_vessel_record;
use crate::core::retry::{self, AttemptOutcome, Finished, RetryPolicy};
use crate::core::search::build_search_url;
use crate::domain::model::{ClientIdentity, VesselQuery, VesselRecord};
use crate::domain::ports::{Chooser, Sleeper};
use crate::utils::error::{Result, VesselError};
use std::sync::Arc;

#[derive(Clone)]
pub struct VesselInfoFetcher {
    settings: Arc<ScraperSettings>,
    client: HttpClient,
    chooser: Arc<dyn Chooser>,
    sleeper: Arc<dyn Sleeper>,
}

impl VesselInfoFetcher {
    pub fn new(settings: ScraperSettings) -> Self {
        Self::with_ports(settings, Arc::new(RandomChooser), Arc::new(TokioSleeper))
    }

    /// 指定挑選與等待的實作，測試用固定選擇取代亂數
    pub fn with_ports(
        settings: ScraperSettings,
        chooser: Arc<dyn Chooser>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        let client = HttpClient::new(settings.request_timeout, settings.max_redirects);
        Self {
            settings: Arc::new(settings),
            client,
            chooser,
            sleeper,
        }
    }

    pub fn settings(&self) -> &ScraperSettings {
        &self.settings
    }

    fn pick_identity(&self) -> ClientIdentity {
        ClientIdentity {
            user_agent: self
                .chooser
                .choose(&self.settings.user_agents)
                .map(str::to_string),
            proxy: self
                .chooser
                .choose(&self.settings.proxies)
                .map(str::to_string),
        }
    }

    pub async fn fetch(&self, query: &VesselQuery) -> Result<VesselRecord> {
        let session = self.client.session();
        let search_url = build_search_url(&self.settings.search_url, query.identifier());

        tracing::info!("Looking up vessel {}", query.identifier());
        tracing::debug!("Search URL: {}", search_url);

        let page = session
            .get(&search_url, &self.pick_identity())
            .await
            .map_err(|source| VesselError::SearchTransport { source })?;

        if page.status != 200 {
            return Err(VesselError::UpstreamStatus {
                status: page.status,
            });
        }

        tracing::debug!("Search redirected to {}", page.final_url);
        self.scrape(&session, &page.final_url).await
    }

    async fn scrape(&self, session: &HttpSession, url: &str) -> Result<VesselRecord> {
        let policy = RetryPolicy::from(self.settings.as_ref());

        let finished = retry::run(
            &policy,
            self.chooser.as_ref(),
            self.sleeper.as_ref(),
            |attempt| self.extraction_attempt(session, url, attempt),
        )
        .await;

        match finished {
            Finished::Succeeded { value, .. } => value,
            Finished::Exhausted { attempts } => {
                tracing::warn!("Giving up on {} after {} attempts", url, attempts);
                Err(VesselError::RetriesExhausted { attempts })
            }
        }
    }

    async fn extraction_attempt(
        &self,
        session: &HttpSession,
        url: &str,
        attempt: u32,
    ) -> AttemptOutcome<Result<VesselRecord>> {
        // 每次嘗試都重新挑選 User-Agent 與代理
        let identity = self.pick_identity();

        let page = match session.get(url, &identity).await {
            Ok(page) => page,
            Err(source) => {
                tracing::error!("Request to {} failed: {}", url, source);
                return AttemptOutcome::Done(Err(VesselError::ScrapeTransport { source }));
            }
        };

        match page.status {
            200 => AttemptOutcome::Done(extract_vessel_record(&page.body)),
            403 => {
                tracing::warn!(
                    "403 Forbidden on attempt {}/{} - retrying with a new identity",
                    attempt,
                    self.settings.max_attempts
                );
                AttemptOutcome::Retry
            }
            status => AttemptOutcome::Done(Err(VesselError::ExtractionStatus { status })),
        }
    }
}
