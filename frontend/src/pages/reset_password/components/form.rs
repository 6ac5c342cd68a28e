use crate::{
    components::common::Button,
    pages::reset_password::{
        components::messages::{error_id, FieldErrorMessage},
        utils::{FieldErrors, ResetField},
    },
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none rounded-md relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm";

#[component]
pub fn ResetPasswordForm(
    #[prop(into)] password: Signal<String>,
    #[prop(into)] confirm_password: Signal<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] submit_disabled: Signal<bool>,
    on_password_input: Callback<String>,
    on_confirm_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let invalid = move |field: ResetField| errors.with(|errors| errors.contains(field)).to_string();
    let password_label = t!("auth.password").to_string();
    let confirm_label = t!("auth.password_confirm").to_string();

    view! {
        <form
            class="mt-8 space-y-6"
            novalidate
            aria-label=t!("auth.reset_password_form").to_string()
            on:submit=move |ev| on_submit.call(ev)
        >
            <FieldErrorMessage field=ResetField::Token errors=errors />
            <FieldErrorMessage field=ResetField::UserId errors=errors />
            <div class="space-y-4">
                <div>
                    <label for=ResetField::Password.as_str() class="sr-only">
                        {password_label.clone()}
                    </label>
                    <input
                        id=ResetField::Password.as_str()
                        name=ResetField::Password.as_str()
                        type="password"
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        placeholder=password_label.clone()
                        aria-label=password_label
                        aria-invalid=move || invalid(ResetField::Password)
                        aria-describedby=error_id(ResetField::Password)
                        prop:value=password
                        on:input=move |ev| on_password_input.call(event_target_value(&ev))
                    />
                    <FieldErrorMessage field=ResetField::Password errors=errors />
                </div>
                <div>
                    <label for=ResetField::ConfirmPassword.as_str() class="sr-only">
                        {confirm_label.clone()}
                    </label>
                    <input
                        id=ResetField::ConfirmPassword.as_str()
                        name=ResetField::ConfirmPassword.as_str()
                        type="password"
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        placeholder=confirm_label.clone()
                        aria-label=confirm_label
                        aria-invalid=move || invalid(ResetField::ConfirmPassword)
                        aria-describedby=error_id(ResetField::ConfirmPassword)
                        prop:value=confirm_password
                        on:input=move |ev| on_confirm_password_input.call(event_target_value(&ev))
                    />
                    <FieldErrorMessage field=ResetField::ConfirmPassword errors=errors />
                </div>
            </div>
            <Button
                class="w-full"
                button_type="submit"
                disabled=submit_disabled
                loading=submitting
            >
                {move || {
                    if submitting.get() {
                        t!("auth.submitting").to_string()
                    } else {
                        t!("auth.submit_reset_password").to_string()
                    }
                }}
            </Button>
        </form>
    }
}
