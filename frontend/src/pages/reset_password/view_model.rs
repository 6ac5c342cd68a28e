use super::form_state::{RenderState, ResetLink, ResetPasswordFormState, StatusSink, SubmitAttempt};
use super::repository::ResetPasswordRepository;
use super::utils::FieldErrors;
use crate::api::{ApiClient, ApiError, ResetPasswordRequest};
use crate::state::layout::{use_layout_messages, LayoutMessages};
use leptos::*;
use leptos_router::use_query_map;
use std::cell::Cell;
use std::rc::Rc;

impl StatusSink for LayoutMessages {
    fn set_header_text(&self, message: String) {
        self.header_text.set(Some(message));
    }

    fn set_error(&self, message: String) {
        self.error.set(Some(message));
    }
}

/// Flips to unmounted when the owning component is cleaned up.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub form: RwSignal<ResetPasswordFormState>,
    pub submit_action: Action<ResetPasswordRequest, Result<(), ApiError>>,
    layout: LayoutMessages,
    mounted: MountGuard,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));
    let query = use_query_map();
    let link = query.with_untracked(ResetLink::from_query);

    ResetPasswordViewModel::new(link, repository, use_layout_messages())
}

impl ResetPasswordViewModel {
    pub fn new(
        link: ResetLink,
        repository: ResetPasswordRepository,
        layout: LayoutMessages,
    ) -> Self {
        let form = create_rw_signal(ResetPasswordFormState::new(link));

        let mounted = MountGuard::new();
        let mounted_for_cleanup = mounted.clone();
        on_cleanup(move || mounted_for_cleanup.release());

        let submit_action = create_action(move |request: &ResetPasswordRequest| {
            let repo = repository.clone();
            let request = request.clone();
            async move { repo.reset_password(request).await }
        });

        let vm = Self {
            form,
            submit_action,
            layout,
            mounted,
        };

        let vm_for_effect = vm.clone();
        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                vm_for_effect.apply_result(result);
            }
        });

        vm
    }

    pub fn password(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.password().to_string()))
    }

    pub fn confirm_password(&self) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.confirm_password().to_string()))
    }

    pub fn errors(&self) -> Signal<FieldErrors> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.errors().clone()))
    }

    pub fn render_state(&self) -> Signal<RenderState> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.render_state()))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let render_state = self.render_state();
        Signal::derive(move || render_state.get() == RenderState::Submitting)
    }

    pub fn submit_disabled(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_submit_disabled()))
    }

    pub fn set_password(&self, value: String) {
        self.form.update(|f| f.set_password(value));
    }

    pub fn set_confirm_password(&self, value: String) {
        self.form.update(|f| f.set_confirm_password(value));
    }

    pub fn submit(&self) {
        match self.form.try_update(|f| f.submit()) {
            Some(SubmitAttempt::Dispatch(request)) => {
                log::info!("Submitting password reset");
                self.submit_action.dispatch(request);
            }
            Some(SubmitAttempt::Blocked(errors)) => {
                log::debug!("Password reset blocked by {} field error(s)", errors.len());
            }
            Some(SubmitAttempt::Ignored) | None => {}
        }
    }

    pub fn apply_result(&self, result: Result<(), ApiError>) {
        if !self.mounted.is_mounted() {
            log::debug!("Discarding password reset result after unmount");
            return;
        }
        if let Err(err) = &result {
            log::warn!("Password reset failed ({}): {}", err.code, err.error);
        }
        let layout = self.layout;
        let applied = self
            .form
            .try_update(|f| f.complete(&result, &layout))
            .unwrap_or(false);
        if !applied {
            log::debug!("Ignoring password reset result with no submission in flight");
        } else if result.is_ok() {
            log::info!("Password reset succeeded");
        }
    }
}
