use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VesselError {
    #[error("MMSI number is required.")]
    MissingIdentifier,

    #[error("Invalid MMSI format. It must be a 9-digit number.")]
    InvalidFormat { value: String },

    #[error("Error accessing the search URL: {status}")]
    UpstreamStatus { status: u16 },

    #[error("Error: {status}")]
    ExtractionStatus { status: u16 },

    #[error("Ship history info not found on the page.")]
    ElementNotFound,

    #[error("Failed after multiple attempts (403 Forbidden)")]
    RetriesExhausted { attempts: u32 },

    #[error("Failed to fetch the vessel information.")]
    SearchTransport {
        #[source]
        source: reqwest::Error,
    },

    #[error("An error occurred while scraping vessel info.")]
    ScrapeTransport {
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端輸入問題
    Input,
    /// 上游網站回應非 200
    Upstream,
    /// 頁面取得成功但內容不符
    Page,
    /// 網路層失敗
    Transport,
    /// 啟動時的配置問題
    Config,
}

impl VesselError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VesselError::MissingIdentifier | VesselError::InvalidFormat { .. } => {
                ErrorCategory::Input
            }
            VesselError::UpstreamStatus { .. }
            | VesselError::ExtractionStatus { .. }
            | VesselError::RetriesExhausted { .. } => ErrorCategory::Upstream,
            VesselError::ElementNotFound => ErrorCategory::Page,
            VesselError::SearchTransport { .. } | VesselError::ScrapeTransport { .. } => {
                ErrorCategory::Transport
            }
            VesselError::IoError(_)
            | VesselError::ConfigError { .. }
            | VesselError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// 對應到 HTTP 回應狀態碼。
    ///
    /// 第二段抓取（結果頁）的失敗沿用 200 回應，錯誤訊息放在 body 的 `error` 欄位。
    pub fn status_code(&self) -> StatusCode {
        match self {
            VesselError::MissingIdentifier
            | VesselError::InvalidFormat { .. }
            | VesselError::UpstreamStatus { .. } => StatusCode::BAD_REQUEST,
            VesselError::ExtractionStatus { .. }
            | VesselError::ElementNotFound
            | VesselError::RetriesExhausted { .. }
            | VesselError::ScrapeTransport { .. } => StatusCode::OK,
            VesselError::SearchTransport { .. }
            | VesselError::IoError(_)
            | VesselError::ConfigError { .. }
            | VesselError::InvalidConfigValueError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, VesselError>;
