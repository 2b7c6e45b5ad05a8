use url::form_urlencoded;

/// 組出查詢頁網址：`<base>?imo=<identifier>`。不做任何驗證。
pub fn build_search_url(base: &str, identifier: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(identifier.as_bytes()).collect();
    format!("{}?imo={}", base, encoded)
}
