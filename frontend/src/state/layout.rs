use leptos::*;

/// Banner slots owned by the auth layout. Child pages write them; only the
/// layout reads them.
#[derive(Clone, Copy, Debug)]
pub struct LayoutMessages {
    pub header_text: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl LayoutMessages {
    pub fn new() -> Self {
        Self {
            header_text: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }
}

impl Default for LayoutMessages {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LayoutMessagesProvider(children: Children) -> impl IntoView {
    provide_context(LayoutMessages::new());
    view! { <>{children()}</> }
}

pub fn use_layout_messages() -> LayoutMessages {
    match use_context::<LayoutMessages>() {
        Some(ctx) => ctx,
        None => {
            let ctx = LayoutMessages::new();
            provide_context(ctx);
            ctx
        }
    }
}
