use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod events;
mod hooks {
    pub mod pointer_gradient;
    pub mod rotating_label;
    pub mod scroll_reveal;
}
mod pages {
    pub mod event;
    pub mod landing;
    pub mod not_found;
}

use content::NAV_SECTIONS;
use hooks::pointer_gradient::use_pointer_gradient;
use pages::{event::EventPage, landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/event/:id")]
    Event { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Detail page for the event at `index` in the site's event list.
    pub fn event(index: usize) -> Self {
        Route::Event {
            id: index.to_string(),
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Event { id } => {
            info!("Rendering Event page for {:?}", id);
            html! { <EventPage id={id} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Smooth-scrolls to the landing section with this id. Does nothing when the
/// section isn't on the current page.
pub fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No section #{} on this page", id),
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let scroll_callback = Closure::<dyn FnMut()>::new({
                    let window = window.clone();
                    move || {
                        let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 40.0);
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/logo.png" alt="CCC Logo" />
                    <span>{config::SITE_SHORT_NAME}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|section| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            menu_open.set(false);
                            scroll_to_section(section);
                        });
                        html! {
                            <button key={*section} class="nav-link" {onclick}>
                                {*section}
                            </button>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    pub children: Children,
}

/// Radial gradient that follows the mouse, scoped to this component.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    let pointer = use_pointer_gradient();

    html! {
        <div class="site bg-gradient" style={pointer.style()}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Backdrop>
                <Nav />
                <Switch<Route> render={switch} />
            </Backdrop>
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }
                body {
                    background: #020617;
                    font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
                }
                a {
                    color: inherit;
                    text-decoration: none;
                }
                .site {
                    min-height: 100vh;
                    color: #93c5fd;
                }
                .bg-gradient {
                    background: radial-gradient(
                        circle at calc(var(--mouse-x, 0.5) * 100%) calc(var(--mouse-y, 0.5) * 100%),
                        #1e3a8a 0%,
                        #0f172a 30%,
                        #020617 100%
                    );
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(15, 23, 42, 0.9);
                    border-bottom: 1px solid rgba(59, 130, 246, 0.3);
                    backdrop-filter: blur(4px);
                    transition: background 0.3s;
                }
                .top-nav.scrolled {
                    background: rgba(2, 6, 23, 0.95);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: bold;
                }
                .nav-logo img {
                    width: 2rem;
                    height: 2rem;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    font: inherit;
                    text-transform: capitalize;
                    color: rgba(147, 197, 253, 0.7);
                    cursor: pointer;
                    transition: color 0.3s;
                }
                .nav-link:hover {
                    color: #60a5fa;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #93c5fd;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 1.5rem;
                        background: rgba(2, 6, 23, 0.95);
                    }
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: bold;
                    margin-bottom: 3rem;
                }
                .section-title.centered {
                    text-align: center;
                }
                .lead {
                    color: rgba(96, 165, 250, 0.8);
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .panel {
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    padding: 2rem;
                    border-radius: 8px;
                    background: rgba(30, 41, 59, 0.5);
                    box-shadow: 0 0 15px rgba(59, 130, 246, 0.2);
                    transition: transform 0.3s;
                }
                .panel:hover {
                    transform: scale(1.05);
                }
                .terminal-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .cta-button {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 0.5rem 1.5rem;
                    font: inherit;
                    color: inherit;
                    background: rgba(59, 130, 246, 0.2);
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    border-radius: 8px;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .cta-button:hover {
                    background: rgba(59, 130, 246, 0.3);
                    border-color: rgba(59, 130, 246, 0.6);
                    letter-spacing: 0.05em;
                }
                .pulse {
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                @keyframes pulse {
                    50% { opacity: 0.5; }
                }
                .event-page {
                    padding: 8rem 0 4rem;
                    min-height: 100vh;
                }
                .event-missing {
                    text-align: center;
                    padding-top: 4rem;
                }
                .event-missing p {
                    margin: 1.5rem 0 2rem;
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::event(0).to_path(), "/event/0");
        assert_eq!(Route::event(12).to_path(), "/event/12");
    }

    #[test]
    fn event_route_keeps_raw_parameter() {
        assert_eq!(
            Route::recognize("/event/abc"),
            Some(Route::Event { id: "abc".to_string() })
        );
        assert_eq!(Route::recognize("/event/1"), Some(Route::event(1)));
    }

    #[test]
    fn landing_route() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}
