use web_sys::{Navigator, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn navigator() -> Result<Navigator, String> {
    Ok(window()?.navigator())
}

/// Full page navigation; used when the target screen is owned by the host.
pub fn redirect_to(path: &str) -> Result<(), String> {
    window()?
        .location()
        .set_href(path)
        .map_err(|_| format!("Failed to navigate to {}", path))
}
