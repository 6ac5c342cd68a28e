use crate::components::common::Button;
use leptos::*;

#[component]
pub fn ResetSuccessPanel(on_continue: Callback<()>) -> impl IntoView {
    view! {
        <div role="alert" class="rounded-md bg-status-success-bg p-4 text-status-success-text space-y-4">
            <p class="text-sm">{t!("auth.login_with_new_password").to_string()}</p>
            <Button
                class="w-full"
                aria_label=t!("auth.sign_in").to_string()
                on_click=Callback::new(move |_| on_continue.call(()))
            >
                {t!("auth.continue").to_string()}
            </Button>
        </div>
    }
}
