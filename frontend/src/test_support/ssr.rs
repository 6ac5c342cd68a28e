use crate::state::layout::LayoutMessages;
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Snapshot of the layout banner slots taken after a render.
#[derive(Debug, Default)]
pub struct RenderedLayout {
    pub html: String,
    pub header_text: Option<String>,
    pub error: Option<String>,
}

pub fn render_with_layout<F, N>(setup: impl FnOnce(LayoutMessages), view: F) -> RenderedLayout
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let rendered = with_runtime(|| {
        let messages = LayoutMessages::new();
        provide_context(messages);
        setup(messages);
        let html = view().into_view().render_to_string().to_string();
        RenderedLayout {
            html,
            header_text: messages.header_text.get_untracked(),
            error: messages.error.get_untracked(),
        }
    });
    leptos_reactive::suppress_resource_load(false);
    rendered
}
