use leptos::*;

const SCROLL_SHADOW_THRESHOLD: f64 = 50.0;

#[component]
pub fn NavBar() -> impl IntoView {
    let (scrolled, set_scrolled) = create_signal(false);
    let (menu_open, set_menu_open) = create_signal(false);

    let _scroll = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > SCROLL_SHADOW_THRESHOLD);
    });

    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="site-nav" class:scrolled=move || scrolled.get()>
            <div class="site-nav-inner">
                <a href="#top" class="nav-brand" on:click=close_menu>"VS"</a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                    <span class="nav-toggle-bar"></span>
                </button>
                <div class="nav-links" class:open=move || menu_open.get()>
                    <a href="#about" class="nav-link" on:click=close_menu>"About"</a>
                    <a href="#projects" class="nav-link" on:click=close_menu>"Projects"</a>
                    <a href="#experience" class="nav-link" on:click=close_menu>"Experience"</a>
                    <a href="#contact" class="nav-link" on:click=close_menu>"Contact"</a>
                </div>
            </div>
        </nav>
    }
}
