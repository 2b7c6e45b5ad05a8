use crate::domain::model::{ClientIdentity, FetchedPage};
use reqwest::cookie::Jar;
use reqwest::header::USER_AGENT;
use reqwest::redirect::Policy;
use reqwest::{Client, Proxy};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClient {
    timeout: Duration,
    max_redirects: usize,
}

impl HttpClient {
    pub fn new(timeout: Duration, max_redirects: usize) -> Self {
        Self {
            timeout,
            max_redirects,
        }
    }

    /// 開一個新的 session，同一次查詢的所有請求共用 cookie
    pub fn session(&self) -> HttpSession {
        HttpSession {
            jar: Arc::new(Jar::default()),
            timeout: self.timeout,
            max_redirects: self.max_redirects,
        }
    }
}

pub struct HttpSession {
    jar: Arc<Jar>,
    timeout: Duration,
    max_redirects: usize,
}

impl HttpSession {
    // reqwest 的代理設定綁在 Client 上，每次請求依身分重新建立，cookie jar 共用
    fn build_client(&self, proxy: Option<&str>) -> reqwest::Result<Client> {
        let builder = Client::builder()
            .cookie_provider(self.jar.clone())
            .timeout(self.timeout)
            .redirect(Policy::limited(self.max_redirects));

        let builder = match proxy {
            Some(proxy_url) => builder.proxy(Proxy::all(proxy_url)?),
            None => builder.no_proxy(),
        };

        builder.build()
    }

    pub async fn get(&self, url: &str, identity: &ClientIdentity) -> reqwest::Result<FetchedPage> {
        let client = self.build_client(identity.proxy.as_deref())?;

        let mut request = client.get(url);
        if let Some(user_agent) = &identity.user_agent {
            request = request.header(USER_AGENT, user_agent);
        }

        tracing::debug!(
            "GET {} (proxy: {})",
            url,
            identity.proxy.as_deref().unwrap_or("none")
        );
        let response = request.send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        tracing::debug!("Response status {} from {}", status, final_url);

        let body = response.text().await?;

        Ok(FetchedPage {
            status,
            final_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> HttpClient {
        HttpClient::new(Duration::from_secs(5), 10)
    }

    #[tokio::test]
    async fn test_get_follows_redirect_and_reports_final_url() {
        let server = MockServer::start();
        let redirect_mock = server.mock(|when, then| {
            when.method(GET).path("/start");
            then.status(302).header("Location", server.url("/end"));
        });
        let end_mock = server.mock(|when, then| {
            when.method(GET).path("/end");
            then.status(200).body("done");
        });

        let session = client().session();
        let page = session
            .get(&server.url("/start"), &ClientIdentity::default())
            .await
            .unwrap();

        redirect_mock.assert();
        end_mock.assert();
        assert_eq!(page.status, 200);
        assert_eq!(page.final_url, server.url("/end"));
        assert_eq!(page.body, "done");
    }

    #[tokio::test]
    async fn test_user_agent_header_is_sent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/page")
                .header("user-agent", "TestAgent/1.0");
            then.status(200);
        });

        let identity = ClientIdentity {
            user_agent: Some("TestAgent/1.0".to_string()),
            proxy: None,
        };
        let page = client()
            .session()
            .get(&server.url("/page"), &identity)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(page.status, 200);
    }

    #[tokio::test]
    async fn test_cookies_persist_within_session() {
        let server = MockServer::start();
        let login_mock = server.mock(|when, then| {
            when.method(GET).path("/first");
            then.status(200).header("Set-Cookie", "visitor=abc123; Path=/");
        });
        let cookie_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/second")
                .header("cookie", "visitor=abc123");
            then.status(200).body("welcome back");
        });

        let session = client().session();
        session
            .get(&server.url("/first"), &ClientIdentity::default())
            .await
            .unwrap();
        let page = session
            .get(&server.url("/second"), &ClientIdentity::default())
            .await
            .unwrap();

        login_mock.assert();
        cookie_mock.assert();
        assert_eq!(page.body, "welcome back");
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/blocked");
            then.status(403).body("forbidden");
        });

        let page = client()
            .session()
            .get(&server.url("/blocked"), &ClientIdentity::default())
            .await
            .unwrap();
        assert_eq!(page.status, 403);
    }

    #[tokio::test]
    async fn test_connection_failure_is_error() {
        // 保留給測試用的埠，不會有服務在聽
        let result = client()
            .session()
            .get("http://127.0.0.1:9/unreachable", &ClientIdentity::default())
            .await;
        assert!(result.is_err());
    }
}
