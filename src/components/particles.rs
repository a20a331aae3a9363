use leptos::*;

const PARTICLE_COUNT: usize = 28;

/// Decorative drifting dots behind the page. Positions and timings are
/// derived from the index so the field looks scattered but renders the same
/// on every load.
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let particles = (0..PARTICLE_COUNT)
        .map(|i| {
            let left = (i * 37 + 11) % 100;
            let top = (i * 61 + 23) % 100;
            let size = 2 + (i * 3) % 4;
            let delay = (i * 7) % 20;
            let duration = 14 + (i * 5) % 12;
            view! {
                <span
                    class="particle"
                    style=format!(
                        "left:{left}%;top:{top}%;width:{size}px;height:{size}px;\
                         animation-delay:{delay}s;animation-duration:{duration}s"
                    )
                ></span>
            }
        })
        .collect_view();

    view! { <div class="particle-field" aria-hidden="true">{particles}</div> }
}
