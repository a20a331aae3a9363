use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <div class="container hero-inner">
                <p class="hero-greeting">"Hi, my name is"</p>
                <h1 class="hero-name">"Vivek Sindagi."</h1>
                <h2 class="hero-tagline">"I build things for the web."</h2>
                <p class="hero-blurb">
                    "I'm a software engineer who enjoys turning ideas into polished, "
                    "performant products. Currently focused on building tools that make "
                    "everyday workflows a little less tedious."
                </p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"View My Work"</a>
                    <a href="#contact" class="btn btn-outline">"Get In Touch"</a>
                </div>
            </div>
        </section>
    }
}
