pub mod analytics;
pub mod catalog;
pub mod components;
pub mod form;
pub mod modal;
pub mod reveal;

use components::{
    About, Contact, Experience, Footer, Hero, NavBar, ParticleBackground, Projects,
};
use leptos::*;
use wasm_bindgen::prelude::*;

/// Single-page composition: each section mounts once and reveals
/// independently as it scrolls into view.
#[component]
fn Root() -> impl IntoView {
    view! {
        <div class="page">
            <ParticleBackground/>
            <NavBar/>
            <main>
                <Hero/>
                <About/>
                <Projects/>
                <Experience/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
