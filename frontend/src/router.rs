use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::layout::AuthLayout, pages::reset_password::ResetPasswordPage,
    state::layout::LayoutMessagesProvider,
};

pub const RESET_PASSWORD_PATH: &str = "/reset-password";

/// Served by the hosting shell; reached through a full page load.
pub const LOGIN_PATH: &str = "/login";

pub const ROUTE_PATHS: &[&str] = &[RESET_PASSWORD_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path=RESET_PASSWORD_PATH view=AuthResetPassword/>
            </Routes>
        </Router>
    }
}

#[component]
fn AuthResetPassword() -> impl IntoView {
    view! {
        <LayoutMessagesProvider>
            <AuthLayout><ResetPasswordPage/></AuthLayout>
        </LayoutMessagesProvider>
    }
}
