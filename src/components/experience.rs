use crate::reveal::{reveal_class, stagger_delay_ms, use_reveal};
use leptos::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        title: "Senior Software Engineer",
        company: "Brightlayer Labs",
        period: "2023 — Present",
        highlights: &[
            "Lead developer on an internal analytics platform serving 40+ teams",
            "Cut median dashboard load time from 4s to 600ms by moving aggregation into a Rust service",
            "Mentor two junior engineers and run the front-end guild",
        ],
    },
    Role {
        title: "Software Engineer",
        company: "Fieldstone Systems",
        period: "2020 — 2023",
        highlights: &[
            "Built and maintained React applications for agricultural data capture",
            "Designed the offline-first sync layer used across three products",
            "Introduced contract testing that halved integration regressions",
        ],
    },
    Role {
        title: "Software Engineer Intern",
        company: "Nimbus Works",
        period: "2019 — 2020",
        highlights: &[
            "Prototyped a screen-capture pipeline that later shipped in the flagship app",
            "Automated release note generation from the issue tracker",
        ],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = create_node_ref::<html::Section>();
    let revealed = use_reveal(section_ref);

    let entries = ROLES
        .iter()
        .enumerate()
        .map(|(index, role)| {
            let highlights = role
                .highlights
                .iter()
                .map(|h| view! { <li>{*h}</li> })
                .collect_view();
            view! {
                <div
                    class=move || format!("timeline-entry {}", reveal_class(revealed.get()))
                    style=format!("transition-delay: {}ms", stagger_delay_ms(index))
                >
                    <div class="timeline-marker"></div>
                    <div class="timeline-body">
                        <h3 class="timeline-title">
                            {role.title}
                            <span class="timeline-company">" · " {role.company}</span>
                        </h3>
                        <p class="timeline-period">{role.period}</p>
                        <ul class="timeline-highlights">{highlights}</ul>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="section" node_ref=section_ref>
            <div class="container">
                <h2 class="section-heading">"Experience"</h2>
                <div class="timeline">{entries}</div>
            </div>
        </section>
    }
}
