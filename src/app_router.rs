use web_sys::UrlSearchParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Camera,
}

/// Resolves the page for the current location. A `#page=` hash wins over a
/// `?page=` query, which wins over the pathname.
pub(crate) fn current_page() -> Page {
    let Some(window) = web_sys::window() else {
        return Page::Home;
    };
    let location = window.location();
    if let Ok(hash) = location.hash() {
        if let Some(page) = parse_page_from_hash(&hash) {
            return page;
        }
    }
    if let Ok(search) = location.search() {
        if let Some(page) = parse_page_from_query(&search) {
            return page;
        }
    }
    let path = location.pathname().unwrap_or_default();
    parse_page_from_path(&path)
}

fn parse_page_from_path(path: &str) -> Page {
    let trimmed = path.trim_end_matches('/');
    if trimmed.eq_ignore_ascii_case("/camera") {
        Page::Camera
    } else {
        Page::Home
    }
}

fn parse_page_from_hash(hash: &str) -> Option<Page> {
    let raw = hash.trim().trim_start_matches('#').trim();
    if raw.is_empty() {
        return None;
    }
    for chunk in raw.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let mut iter = chunk.splitn(2, '=');
        let key = iter.next().unwrap_or("").trim();
        let value = iter.next().unwrap_or("").trim();
        if key.eq_ignore_ascii_case("page") {
            return parse_page_name(value);
        }
    }
    None
}

fn parse_page_from_query(search: &str) -> Option<Page> {
    let search = search.trim();
    if search.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(search).ok()?;
    let value = params.get("page")?;
    parse_page_name(&value)
}

fn parse_page_name(value: &str) -> Option<Page> {
    if value.eq_ignore_ascii_case("camera") {
        Some(Page::Camera)
    } else if value.eq_ignore_ascii_case("home") {
        Some(Page::Home)
    } else {
        None
    }
}

/// Build-time override for the API origin. Empty means same-origin paths.
pub(crate) fn default_api_base() -> String {
    if let Some(raw) =
        option_env!("FOODIES_API_BASE").or(option_env!("TRUNK_PUBLIC_FOODIES_API_BASE"))
    {
        let trimmed = raw.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    String::new()
}

pub(crate) fn api_url(path: &str) -> String {
    build_api_url(&default_api_base(), path)
}

pub(crate) fn build_api_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
