use super::{
    components::{form::ResetPasswordForm, success::ResetSuccessPanel},
    form_state::RenderState,
    view_model::{use_reset_password_view_model, ResetPasswordViewModel},
};
use crate::{router::LOGIN_PATH, utils::browser::redirect_to};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! { <ResetPasswordView vm=vm /> }
}

#[component]
pub fn ResetPasswordView(vm: ResetPasswordViewModel) -> impl IntoView {
    let render_state = vm.render_state();
    let success = move || render_state.get() == RenderState::Success;

    let password = vm.password();
    let confirm_password = vm.confirm_password();
    let errors = vm.errors();
    let submitting = vm.submitting();
    let submit_disabled = vm.submit_disabled();

    let on_password_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_password(value))
    };
    let on_confirm_password_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_confirm_password(value))
    };
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let on_continue = Callback::new(move |_: ()| {
        if let Err(err) = redirect_to(LOGIN_PATH) {
            log::warn!("Failed to navigate to login: {}", err);
        }
    });

    view! {
        <Title text=t!("auth.reset_password_title").to_string() />
        <Show
            when=success
            fallback=move || {
                view! {
                    <ResetPasswordForm
                        password=password
                        confirm_password=confirm_password
                        errors=errors
                        submitting=submitting
                        submit_disabled=submit_disabled
                        on_password_input=on_password_input
                        on_confirm_password_input=on_confirm_password_input
                        on_submit=on_submit
                    />
                }
            }
        >
            <ResetSuccessPanel on_continue=on_continue />
        </Show>
    }
}
