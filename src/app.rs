use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::progress::ProgressPage;
use crate::pages::signup::SignupPage;
use crate::pages::workout::WorkoutPage;
use crate::session::SessionContext;
use crate::theme::{apply_theme, initial_theme, persist_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(initial_theme());
    provide_context(ThemeContext { theme, set_theme });
    provide_context(SessionContext::load());

    // Keep the DOM attribute and the saved preference in step with the signal
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(&t);
        persist_theme(&t);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/signup") view=SignupPage />
                        <Route path=path!("/home") view=HomePage />
                        <Route path=path!("/workout") view=WorkoutPage />
                        <Route path=path!("/progress") view=ProgressPage />
                        <Route path=path!("/profile") view=ProfilePage />
                    </Routes>
                </main>
                <Navbar />
            </div>
        </Router>
    }
}
