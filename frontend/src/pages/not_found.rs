use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Fallback for paths no route matches.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(
        move |_| {
            config::set_document_title(&format!("Page not found | {}", config::SITE_SHORT_NAME));
            || ()
        },
        (),
    );

    html! {
        <div class="event-page">
            <div class="container event-missing">
                <h1>{"404_NOT_FOUND"}</h1>
                <p>{"We couldn't find that page!"}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </div>
    }
}
