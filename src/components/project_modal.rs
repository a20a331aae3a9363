use crate::modal::{BodyScrollLock, ModalController};
use leptos::*;

/// Detail overlay for the currently selected project.
///
/// Rendering is gated on the controller's open flag; the backdrop, the close
/// button, and the Escape key all route through the same idempotent `close`.
#[component]
pub fn ProjectModal(modal: RwSignal<ModalController<BodyScrollLock>>) -> impl IntoView {
    let close = move |_| modal.update(|m| m.close());

    let _esc = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            modal.update(|m| m.close());
        }
    });

    view! {
        <Show when=move || modal.with(|m| m.is_open())>
            {move || {
                modal
                    .with(|m| m.selected().copied())
                    .map(|project| {
                        let tags = project
                            .tech
                            .iter()
                            .map(|tag| view! { <span class="tech-tag">{*tag}</span> })
                            .collect_view();
                        view! {
                            <div class="modal-backdrop" on:click=close>
                                <div
                                    class="modal"
                                    role="dialog"
                                    aria-modal="true"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <button class="modal-close" aria-label="Close" on:click=close>
                                        "\u{2715}"
                                    </button>
                                    <div class="modal-image">
                                        <img src=project.image alt=project.title/>
                                    </div>
                                    <div class="modal-body">
                                        <h3 class="modal-title">{project.title}</h3>
                                        <div class="tech-tags">{tags}</div>
                                        <p class="modal-description">{project.long_description}</p>
                                        <div class="modal-detail">
                                            <h4>"The Problem"</h4>
                                            <p>{project.problem}</p>
                                        </div>
                                        <div class="modal-detail">
                                            <h4>"The Solution"</h4>
                                            <p>{project.solution}</p>
                                        </div>
                                        <div class="modal-links">
                                            {project.github.map(|href| view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="btn btn-outline"
                                                >
                                                    "View Source"
                                                </a>
                                            })}
                                            {project.demo.map(|href| view! {
                                                <a
                                                    href=href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="btn btn-primary"
                                                >
                                                    "Live Demo"
                                                </a>
                                            })}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
