use crate::domain::model::VesselQuery;
use crate::utils::error::{Result, VesselError};
use crate::utils::validation::is_nine_digit_identifier;
use serde_json::Value;

/// 從請求 body 取出 `mmsi` 欄位。
///
/// 缺少、null、空字串、`0`、`false` 或空陣列/物件一律視為 `MissingIdentifier`；
/// `strict` 時另外要求 9 位數字。
/// 成功時原樣回傳，不做 trim 或其他正規化。
pub fn validate_request(body: &Value, strict: bool) -> Result<VesselQuery> {
    let value = match body.get("mmsi") {
        Some(value) if !is_blank(value) => value,
        _ => return Err(VesselError::MissingIdentifier),
    };

    let identifier = match value {
        Value::String(s) => s.clone(),
        // 數字型的 MMSI 轉成字串
        Value::Number(n) if n.is_u64() => n.to_string(),
        other => {
            return Err(VesselError::InvalidFormat {
                value: other.to_string(),
            })
        }
    };

    if strict && !is_nine_digit_identifier(&identifier) {
        return Err(VesselError::InvalidFormat { value: identifier });
    }

    Ok(VesselQuery::new(identifier))
}

/// 空值：null、空字串、數字 0、false、空陣列與空物件
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
