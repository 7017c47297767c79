use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Header badge showing whether the backend answers its health probe.
#[component]
pub fn BackendStatus() -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.controller().api();
    let backend_label = ctx.backend_label().to_string();

    let resource = use_resource(move || {
        let api = api.clone();
        async move {
            api.health().await.map_err(|err| {
                log::warn!("health probe failed: {err}");
                ViewError::Unreachable
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        p { class: "backend-status",
            span { class: "backend-status__url", "Backend: {backend_label}" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    span { class: "backend-status__badge backend-status__badge--pending", "Checking..." }
                },
                ViewState::Ready(_) => rsx! {
                    span { class: "backend-status__badge backend-status__badge--ok", "Online" }
                },
                ViewState::Error(err) => rsx! {
                    span { class: "backend-status__badge backend-status__badge--down", "{err.message()}" }
                },
            }
        }
    }
}
