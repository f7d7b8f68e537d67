//! Normalized operating system names.

use super::HostKind;

/// Map a raw OS identifier or user agent to a normalized name.
///
/// Returns one of `android`, `ios`, `linux`, `macos`, `windows`, `unknown`.
/// Order matters: Android user agents also mention Linux, and iOS ones
/// mention Mac OS X.
pub fn classify(raw: &str) -> &'static str {
    let raw = raw.to_lowercase();
    if raw.contains("android") {
        "android"
    } else if raw.contains("ios") || raw.contains("iphone") || raw.contains("ipad") {
        "ios"
    } else if raw.contains("linux") {
        "linux"
    } else if raw.contains("mac") || raw.contains("darwin") {
        "macos"
    } else if raw.contains("windows") {
        "windows"
    } else {
        "unknown"
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn os_name(_kind: HostKind) -> &'static str {
    classify(std::env::consts::OS)
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn os_name(kind: HostKind) -> &'static str {
    let raw = match kind {
        HostKind::Script => deno_build_os(),
        HostKind::Document => web_sys::window().and_then(|w| w.navigator().user_agent().ok()),
    };
    raw.as_deref().map(classify).unwrap_or("unknown")
}

#[cfg(target_arch = "wasm32")]
fn deno_build_os() -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let deno = Reflect::get(&js_sys::global(), &JsValue::from_str("Deno")).ok()?;
    let build = Reflect::get(&deno, &JsValue::from_str("build")).ok()?;
    Reflect::get(&build, &JsValue::from_str("os")).ok()?.as_string()
}
