use crate::analytics::track_event;
use crate::form::{
    ContactSession, FormField, SUBMIT_DELAY_MS, TOAST_DURATION_MS,
};
use crate::reveal::{reveal_class, use_reveal};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = create_node_ref::<html::Section>();
    let revealed = use_reveal(section_ref);

    let session = create_rw_signal(ContactSession::new());
    let (toast, set_toast) = create_signal(None::<(&'static str, &'static str)>);

    // Pending fake round trip; cleared on unmount so the completion never
    // fires into a disposed scope.
    let pending: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));

    let on_submit = {
        let pending = Rc::clone(&pending);
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let started = session.try_update(|s| s.begin_submit()).unwrap_or(false);
            if !started {
                return;
            }
            track_event("contact-submit");

            let finish = {
                let pending = Rc::clone(&pending);
                move || {
                    pending.set(None);
                    if let Some(notice) = session.try_update(|s| s.finish_submit()) {
                        set_toast.try_set(Some(notice));
                        let _ = set_timeout_with_handle(
                            move || {
                                set_toast.try_set(None);
                            },
                            Duration::from_millis(TOAST_DURATION_MS),
                        );
                    }
                }
            };
            if let Ok(handle) =
                set_timeout_with_handle(finish, Duration::from_millis(SUBMIT_DELAY_MS))
            {
                pending.set(Some(handle));
            }
        }
    };

    {
        let pending = Rc::clone(&pending);
        on_cleanup(move || {
            if let Some(handle) = pending.take() {
                handle.clear();
            }
        });
    }

    view! {
        <section id="contact" class="section" node_ref=section_ref>
            <div class="container">
                <h2 class="section-heading">"Contact"</h2>

                <div class=move || format!("contact-intro {}", reveal_class(revealed.get()))>
                    <h3>"Get In Touch"</h3>
                    <p>
                        "I'm currently open to new opportunities and collaborations. "
                        "Whether you have a question or just want to say hi, I'll do my "
                        "best to get back to you!"
                    </p>
                </div>

                <div class="contact-grid">
                    <form
                        class=move || format!("contact-form {}", reveal_class(revealed.get()))
                        style="transition-delay: 200ms"
                        on:submit=on_submit
                    >
                        <div class="form-field">
                            <label for="name">"Name"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                placeholder="Your name"
                                prop:value=move || session.with(|s| s.form().name.clone())
                                on:input=move |ev| {
                                    session.update(|s| {
                                        s.update_field(FormField::Name, event_target_value(&ev))
                                    })
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                placeholder="your.email@example.com"
                                prop:value=move || session.with(|s| s.form().email.clone())
                                on:input=move |ev| {
                                    session.update(|s| {
                                        s.update_field(FormField::Email, event_target_value(&ev))
                                    })
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                name="message"
                                required
                                rows="5"
                                placeholder="Your message..."
                                prop:value=move || session.with(|s| s.form().message.clone())
                                on:input=move |ev| {
                                    session.update(|s| {
                                        s.update_field(FormField::Message, event_target_value(&ev))
                                    })
                                }
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary btn-submit"
                            prop:disabled=move || session.with(|s| s.is_submitting())
                        >
                            {move || {
                                if session.with(|s| s.is_submitting()) {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                    </form>

                    <div
                        class=move || format!("contact-channels {}", reveal_class(revealed.get()))
                        style="transition-delay: 400ms"
                    >
                        <h4>"Let's Connect"</h4>
                        <p>
                            "Prefer connecting through social media or email? "
                            "You can find me on the platforms below."
                        </p>
                        <div class="channel-list">
                            <a href="mailto:vivek.sindagi@example.com" class="channel">
                                <span class="channel-icon">
                                    <svg
                                        class="icon"
                                        viewBox="0 0 24 24"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="2"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    >
                                        <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/>
                                        <polyline points="22,6 12,13 2,6"/>
                                    </svg>
                                </span>
                                <span class="channel-text">
                                    <span class="channel-name">"Email"</span>
                                    <span class="channel-detail">"vivek.sindagi@example.com"</span>
                                </span>
                            </a>
                            <a
                                href="https://linkedin.com/in/viveksindagi"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="channel"
                            >
                                <span class="channel-icon">
                                    <i class="devicon-linkedin-plain"></i>
                                </span>
                                <span class="channel-text">
                                    <span class="channel-name">"LinkedIn"</span>
                                    <span class="channel-detail">"linkedin.com/in/viveksindagi"</span>
                                </span>
                            </a>
                            <a
                                href="https://github.com/vivekgsindagi"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="channel"
                            >
                                <span class="channel-icon">
                                    <i class="devicon-github-original"></i>
                                </span>
                                <span class="channel-text">
                                    <span class="channel-name">"GitHub"</span>
                                    <span class="channel-detail">"github.com/vivekgsindagi"</span>
                                </span>
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <Show when=move || toast.get().is_some()>
                {move || {
                    toast
                        .get()
                        .map(|(title, body)| view! {
                            <div class="toast" role="status">
                                <p class="toast-title">{title}</p>
                                <p class="toast-body">{body}</p>
                            </div>
                        })
                }}
            </Show>
        </section>
    }
}
