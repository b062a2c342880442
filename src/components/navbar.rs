use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: &[(&str, &str)] = &[
    ("/home", "Home"),
    ("/workout", "Workout"),
    ("/progress", "Progress"),
    ("/profile", "Profile"),
];

/// Bottom navigation, hidden on the auth pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    let hidden = move || {
        let path = pathname.get();
        path == "/login" || path == "/signup" || path == "/"
    };

    view! {
        <Show when=move || !hidden()>
            <nav class="navbar">
                {LINKS.iter().map(|&(href, label)| {
                    let active = move || pathname.get() == href;
                    view! {
                        <a href=href class="nav-link" class:nav-active=active>
                            {label}
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </nav>
        </Show>
    }
}
