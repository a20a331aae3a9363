use super::ProjectModal;
use crate::analytics::track_event;
use crate::catalog::{projects, Project};
use crate::modal::{BodyScrollLock, ModalController};
use crate::reveal::{reveal_class, stagger_delay_ms, use_reveal};
use leptos::*;
use std::cell::Cell;

/// How many tech tags a card shows before collapsing into "+N".
const CARD_TAG_LIMIT: usize = 3;

thread_local! {
    static MODAL_TRACKED: Cell<bool> = const { Cell::new(false) };
}

fn track_first_modal_open() {
    MODAL_TRACKED.with(|tracked| {
        if !tracked.get() {
            tracked.set(true);
            track_event("project-modal-opened");
        }
    });
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = create_node_ref::<html::Section>();
    let revealed = use_reveal(section_ref);

    // The modal controller owns the body scroll lock; close on teardown so a
    // dismissed page never leaves scrolling suppressed.
    let modal = create_rw_signal(ModalController::new(BodyScrollLock));
    on_cleanup(move || {
        let _ = modal.try_update(|m| m.close());
    });

    let open = move |project: Project| {
        track_first_modal_open();
        modal.update(|m| m.open_with(project));
    };

    let cards = projects()
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let shown_tags = project
                .tech
                .iter()
                .take(CARD_TAG_LIMIT)
                .map(|tag| view! { <span class="tech-tag">{*tag}</span> })
                .collect_view();
            let overflow = project.tech.len().saturating_sub(CARD_TAG_LIMIT);

            view! {
                <div
                    class=move || format!("project-card {}", reveal_class(revealed.get()))
                    style=format!("transition-delay: {}ms", stagger_delay_ms(index))
                    on:click=move |_| open(*project)
                >
                    <div class="card-image">
                        <img src=project.image alt=project.title loading="lazy"/>
                        <div class="card-image-fade"></div>
                    </div>
                    <div class="card-body">
                        <h3 class="card-title">{project.title}</h3>
                        <p class="card-description">{project.description}</p>
                        <div class="tech-tags">
                            {shown_tags}
                            {(overflow > 0)
                                .then(|| view! { <span class="tech-tag">{format!("+{overflow}")}</span> })}
                        </div>
                        <div class="card-links">
                            {project.github.map(|href| view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="card-link"
                                    aria-label="Source code"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <i class="devicon-github-original"></i>
                                </a>
                            })}
                            {project.demo.map(|href| view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="card-link"
                                    aria-label="Live demo"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <svg
                                        class="icon"
                                        viewBox="0 0 24 24"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="2"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    >
                                        <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
                                        <polyline points="15 3 21 3 21 9"/>
                                        <line x1="10" y1="14" x2="21" y2="3"/>
                                    </svg>
                                </a>
                            })}
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="section" node_ref=section_ref>
            <div class="container">
                <h2 class="section-heading">"Projects"</h2>
                <div class="project-grid">{cards}</div>
            </div>
            <ProjectModal modal=modal/>
        </section>
    }
}
