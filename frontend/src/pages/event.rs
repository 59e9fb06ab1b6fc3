use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::EventRecord;
use crate::events::{detail_title, event_json_ld, resolve_event};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct EventPageProps {
    pub id: String,
}

#[function_component(EventPage)]
pub fn event_page(props: &EventPageProps) -> Html {
    let event = resolve_event(&props.id);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                config::set_document_title(&detail_title(event));
                || ()
            },
            props.id.clone(),
        );
    }

    let body = match event {
        Some(event) => html! { <EventDetail event={*event} /> },
        None => html! {
            <div class="event-missing">
                <h1>{"Event not found"}</h1>
                <p>{"We couldn't find that event. It may have been moved or never existed."}</p>
                <Link<Route> to={Route::Home} classes="cta-button">
                    {"Back to home"}
                </Link<Route>>
            </div>
        },
    };

    html! {
        <div class="event-page">
            <div class="container">
                {body}
            </div>
            <style>
                {r#"
                .event-banner {
                    width: 100%;
                    max-height: 360px;
                    object-fit: cover;
                    border-radius: 8px;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    margin-bottom: 2rem;
                }
                .event-page h1 {
                    font-size: 2.5rem;
                    color: #fff;
                    margin-bottom: 0.75rem;
                }
                .event-page .event-date {
                    color: rgba(96, 165, 250, 0.6);
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EventDetailProps {
    event: EventRecord,
}

#[function_component(EventDetail)]
fn event_detail(props: &EventDetailProps) -> Html {
    let event = &props.event;

    let structured_data = match event_json_ld(event) {
        Ok(doc) => html! { <script type="application/ld+json">{doc.to_string()}</script> },
        Err(err) => {
            warn!("Could not build structured data for {:?}: {}", event.title, err);
            html! {}
        }
    };

    html! {
        <article class="event-detail">
            <img class="event-banner" src={event.banner_url} alt={event.title} />
            <h1>{event.title}</h1>
            <p class="event-date">{event.display_date()}</p>
            <p class="lead">{event.description}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"← All events"}
            </Link<Route>>
            {structured_data}
        </article>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;
    use yew::AppHandle;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct RoutedProps {
        id: String,
    }

    #[function_component(RoutedEventPage)]
    fn routed_event_page(props: &RoutedProps) -> Html {
        html! {
            <BrowserRouter>
                <EventPage id={props.id.clone()} />
            </BrowserRouter>
        }
    }

    async fn render(id: &str) -> (Element, AppHandle<RoutedEventPage>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<RoutedEventPage>::with_root_and_props(
            root.clone(),
            RoutedProps { id: id.to_string() },
        )
        .render();
        TimeoutFuture::new(50).await;
        (root, app)
    }

    #[wasm_bindgen_test]
    async fn out_of_range_id_renders_fallback() {
        let (root, app) = render("2").await;

        let missing = root.query_selector(".event-missing").unwrap().expect("fallback view");
        let heading = missing.query_selector("h1").unwrap().unwrap();
        assert_eq!(heading.text_content().as_deref(), Some("Event not found"));
        assert!(root.query_selector(".event-detail").unwrap().is_none());

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn known_id_renders_the_event() {
        let (root, app) = render("0").await;

        let heading = root.query_selector(".event-detail h1").unwrap().expect("detail view");
        assert_eq!(heading.text_content().as_deref(), Some(crate::content::EVENTS[0].title));
        assert!(root.query_selector(".event-missing").unwrap().is_none());

        app.destroy();
        root.remove();
    }
}
