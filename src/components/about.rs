use crate::reveal::{reveal_class, use_reveal};
use leptos::*;

const SKILLS: &[&str] = &[
    "Rust", "TypeScript", "React", "Python", "WebAssembly", "Node.js", "PostgreSQL", "Docker",
];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = create_node_ref::<html::Section>();
    let revealed = use_reveal(section_ref);

    let skills = SKILLS
        .iter()
        .map(|skill| view! { <li class="skill-item">{*skill}</li> })
        .collect_view();

    view! {
        <section id="about" class="section" node_ref=section_ref>
            <div class="container">
                <h2 class="section-heading">"About"</h2>
                <div class=move || format!("about-grid {}", reveal_class(revealed.get()))>
                    <div class="about-text">
                        <p>
                            "Hello! I'm Vivek, a software engineer with a soft spot for tools "
                            "that feel fast and get out of your way. My path into programming "
                            "started with tinkering on small utilities for my own workflow, "
                            "and it never really stopped."
                        </p>
                        <p>
                            "These days I work across the stack, from data pipelines to "
                            "front-end polish, with a particular interest in developer tooling "
                            "and applied machine learning. I care about shipping things that "
                            "are genuinely useful, not just technically interesting."
                        </p>
                        <p>"A few technologies I've been working with recently:"</p>
                        <ul class="skill-list">{skills}</ul>
                    </div>
                    <div class="about-photo">
                        <img
                            src="https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=1887&auto=format&fit=crop"
                            alt="Portrait of Vivek Sindagi"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
