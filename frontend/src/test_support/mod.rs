#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::reset_password::form_state::ResetLink;

    pub const VALID_PASSWORD: &str = "supersecret";

    pub fn valid_link() -> ResetLink {
        ResetLink::new("abc", "123")
    }
}
