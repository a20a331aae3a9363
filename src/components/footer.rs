use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-links">
                <a
                    href="https://github.com/vivekgsindagi"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub"
                >
                    <i class="devicon-github-original"></i>
                </a>
                <a
                    href="https://linkedin.com/in/viveksindagi"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
                <a href="mailto:vivek.sindagi@example.com" aria-label="Email">"@"</a>
            </div>
            <p class="footer-note">
                "Designed & built by Vivek Sindagi · Rust + WebAssembly · © 2026"
            </p>
        </footer>
    }
}
