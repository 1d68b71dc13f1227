//! Action handlers.
//!
//! Each handler maps the fields of one action to the Cypress source it
//! stands for. Handlers never fail: a missing field is written as
//! [`PLACEHOLDER`], so the gap stays visible in the generated test.

use serde_json::{Map, Value};

use crate::frame::{frame_handle, FrameId};

/// Written in place of a missing event field.
pub const PLACEHOLDER: &str = "undefined";

fn or_placeholder(field: Option<&str>) -> &str {
    field.unwrap_or(PLACEHOLDER)
}

fn number_or_placeholder(field: Option<f64>) -> String {
    field.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}

pub fn click(handle: &str, selector: Option<&str>) -> String {
    format!("{}.get('{}').click()", handle, or_placeholder(selector))
}

/// Choose an option of a `<select>`.
pub fn select(handle: &str, selector: Option<&str>, value: Option<&str>) -> String {
    format!(
        "{}.get('{}').select('{}')",
        handle,
        or_placeholder(selector),
        or_placeholder(value)
    )
}

/// Set a checkbox.
pub fn check(handle: &str, selector: Option<&str>, value: Option<&str>) -> String {
    format!(
        "{}.get('{}').check('{}')",
        handle,
        or_placeholder(selector),
        or_placeholder(value)
    )
}

/// Type into a text-like input.
pub fn type_text(handle: &str, selector: Option<&str>, value: Option<&str>) -> String {
    format!(
        "{}.get('{}').type('{}')",
        handle,
        or_placeholder(selector),
        or_placeholder(value)
    )
}

pub fn visit(handle: &str, href: Option<&str>) -> String {
    format!("{}.visit('{}')", handle, or_placeholder(href))
}

pub fn viewport(handle: &str, width: Option<f64>, height: Option<f64>) -> String {
    format!(
        "{}.viewport({}, {})",
        handle,
        number_or_placeholder(width),
        number_or_placeholder(height)
    )
}

pub fn clear_cookies(handle: &str) -> String {
    format!("{}.clearCookies()", handle)
}

/// Set one cookie; every field besides name and value goes into the options
/// object verbatim.
pub fn set_cookie(
    handle: &str,
    name: Option<&str>,
    value: Option<&str>,
    options: &Map<String, Value>,
) -> String {
    format!(
        "{}.setCookie('{}', '{}', {})",
        handle,
        or_placeholder(name),
        or_placeholder(value),
        Value::Object(options.clone())
    )
}

/// Local storage is written on the application window, whatever frame is active.
pub fn set_local_storage(name: Option<&str>, value: Option<&str>) -> String {
    format!(
        "window.localStorage.setItem('{}', '{}')",
        or_placeholder(name),
        or_placeholder(value)
    )
}

/// Fetch the page's frames ahead of a frame lookup.
pub fn frames_declaration() -> String {
    "let frames = await page.frames()".to_string()
}

/// Bind a frame's handle by matching its recorded URL.
pub fn frame_lookup(frame_id: FrameId, url: Option<&str>) -> String {
    format!(
        "const {} = frames.find(f => f.url() === '{}')",
        frame_handle(frame_id),
        or_placeholder(url)
    )
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
