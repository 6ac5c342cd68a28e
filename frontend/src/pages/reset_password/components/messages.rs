use crate::pages::reset_password::utils::{FieldErrors, ResetField};
use leptos::*;

/// Element id referenced by the field's `aria-describedby`.
pub fn error_id(field: ResetField) -> String {
    format!("{}-error", field.as_str())
}

#[component]
pub fn FieldErrorMessage(field: ResetField, #[prop(into)] errors: Signal<FieldErrors>) -> impl IntoView {
    let message = move || errors.with(|errors| errors.get(field).map(str::to_string));

    view! {
        <Show when=move || errors.with(|errors| errors.contains(field)) fallback=|| ()>
            <p id=error_id(field) role="alert" class="mt-1 text-sm text-status-error-text">
                {message}
            </p>
        </Show>
    }
}
