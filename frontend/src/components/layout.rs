use crate::state::layout::use_layout_messages;
use leptos::*;

/// Shell for unauthenticated pages. Child pages write the header text and the
/// error banner through [`crate::state::layout::LayoutMessages`].
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    let messages = use_layout_messages();
    let header = move || {
        messages
            .header_text
            .get()
            .unwrap_or_else(|| t!("auth.reset_password_title").to_string())
    };
    let error = messages.error;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{header}</h2>
                {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div
            role="alert"
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
        >
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, render_with_layout};

    #[test]
    fn auth_layout_defaults_header_to_page_title() {
        let rendered = render_with_layout(|_| {}, || view! { <AuthLayout><p>"body"</p></AuthLayout> });
        assert!(rendered.html.contains("Reset your password"));
        assert!(rendered.html.contains("body"));
        assert!(!rendered.html.contains("role=\"alert\""));
    }

    #[test]
    fn auth_layout_renders_written_messages() {
        let rendered = render_with_layout(
            |messages| {
                messages.header_text.set(Some("Password reset success".into()));
                messages.error.set(Some("link expired".into()));
            },
            || view! { <AuthLayout><p>"body"</p></AuthLayout> },
        );
        assert!(rendered.html.contains("Password reset success"));
        assert!(!rendered.html.contains("Reset your password"));
        assert!(rendered.html.contains("link expired"));
        assert!(rendered.html.contains("role=\"alert\""));
    }

    #[test]
    fn error_message_renders_text() {
        let html = render_to_string(|| view! { <ErrorMessage message="error".into() /> });
        assert!(html.contains("error"));
        assert!(html.contains("fa-exclamation-circle"));
    }
}
