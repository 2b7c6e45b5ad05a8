use serde::Serialize;

pub const NOT_FOUND: &str = "Not found";

/// 已驗證的船舶識別碼（MMSI）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselQuery {
    identifier: String,
}

impl VesselQuery {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VesselRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "IMO")]
    pub imo: String,
    #[serde(rename = "MMSI")]
    pub mmsi: String,
    #[serde(rename = "Flag")]
    pub flag: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Company")]
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 單次對外請求使用的身分：User-Agent 與代理
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIdentity {
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    /// 跟隨重新導向後的最終 URL
    pub final_url: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_record_serializes_with_fixed_keys() {
        let record = VesselRecord {
            name: "EVER GIVEN".to_string(),
            imo: "9811000".to_string(),
            mmsi: "353136000".to_string(),
            flag: "PA".to_string(),
            country: "Panama".to_string(),
            company: NOT_FOUND.to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"EVER GIVEN","IMO":"9811000","MMSI":"353136000","Flag":"PA","Country":"Panama","Company":"Not found"}"#
        );
    }

    #[test]
    fn test_error_result_has_single_key() {
        let value = serde_json::to_value(ErrorResult::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "boom"}));
    }
}
