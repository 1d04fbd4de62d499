/// Join a sanitized base URL and an endpoint path with exactly one slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, trimmed)
}
