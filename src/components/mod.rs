mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod navbar;
mod particles;
mod project_modal;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::NavBar;
pub use particles::ParticleBackground;
pub use project_modal::ProjectModal;
pub use projects::Projects;
