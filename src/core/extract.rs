//! 從船舶頁面解析 `div#ship-history-info` 上的 data 屬性。

use crate::domain::model::{VesselRecord, NOT_FOUND};
use crate::utils::error::{Result, VesselError};
use scraper::{ElementRef, Html, Selector};

const SHIP_HISTORY_SELECTOR: &str = "div#ship-history-info";

pub fn extract_vessel_record(html: &str) -> Result<VesselRecord> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(SHIP_HISTORY_SELECTOR).map_err(|e| VesselError::ConfigError {
            message: format!("Invalid selector {}: {:?}", SHIP_HISTORY_SELECTOR, e),
        })?;

    let element = document
        .select(&selector)
        .next()
        .ok_or(VesselError::ElementNotFound)?;

    Ok(VesselRecord {
        name: attr_or_default(&element, "data-name"),
        imo: attr_or_default(&element, "data-imo"),
        mmsi: attr_or_default(&element, "data-mmsi"),
        flag: attr_or_default(&element, "data-flag-code"),
        country: attr_or_default(&element, "data-country"),
        company: attr_or_default(&element, "data-company"),
    })
}

fn attr_or_default(element: &ElementRef<'_>, name: &str) -> String {
    element
        .value()
        .attr(name)
        .unwrap_or(NOT_FOUND)
        .to_string()
}
