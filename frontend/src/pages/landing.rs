use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{CONTACTS, EVENTS, FEST_HIGHLIGHTS, FEST_NAME, ROTATING_LABELS, TEAM};
use crate::hooks::rotating_label::use_rotating_label;
use crate::hooks::scroll_reveal::use_scroll_reveal;
use crate::{scroll_to_section, Route};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top and set the title only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                config::set_document_title(&config::landing_title());
                || ()
            },
            (),
        );
    }

    use_scroll_reveal(config::REVEAL_SELECTOR, config::REVEAL_THRESHOLD);

    html! {
        <div class="landing-page">
            <Hero />
            <About />
            <Events />
            <Team />
            <Contact />
            <style>
                {r#"
                .fade-in {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .fade-in.show {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    position: relative;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background-image: url('https://images.unsplash.com/photo-1510511459019-5dda7724fd87?auto=format&fit=crop&q=80');
                    background-size: cover;
                    background-position: center;
                    filter: brightness(0.3) contrast(1.2);
                    opacity: 0.1;
                }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    background-image: linear-gradient(rgba(59, 130, 246, 0.1) 1px, transparent 1px),
                                      linear-gradient(90deg, rgba(59, 130, 246, 0.1) 1px, transparent 1px);
                    background-size: 20px 20px;
                    opacity: 0.5;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .hero-text {
                    flex: 1 1 320px;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 800;
                    color: #fff;
                    letter-spacing: 0.05em;
                    animation: textGlow 3s ease-in-out infinite;
                }
                .typed-text {
                    display: inline-block;
                    color: #fff;
                    font-size: 1.25rem;
                    overflow: hidden;
                    white-space: nowrap;
                    border-right: 2px solid;
                    animation: typing 3s steps(40, end) infinite, blinkCaret .75s step-end infinite;
                }
                .hero-image {
                    flex: 1 1 320px;
                    text-align: center;
                }
                .hero-image img {
                    width: 75%;
                    border-radius: 8px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
                }
                @keyframes textGlow {
                    0%, 100% { text-shadow: 0 0 15px rgba(255, 255, 255, 0.2); }
                    50% { text-shadow: 0 0 30px rgba(255, 255, 255, 0.4); }
                }
                @keyframes typing {
                    from { max-width: 0 }
                    to { max-width: 100% }
                }
                @keyframes blinkCaret {
                    from, to { border-color: transparent }
                    50% { border-color: white }
                }
                .landing-section {
                    padding: 8rem 0;
                }
                .landing-section.dark {
                    background: #0f172a;
                }
                .two-column {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .fest-block {
                    margin-bottom: 4rem;
                    padding: 2rem;
                    border-radius: 8px;
                    background: linear-gradient(90deg, #0f172a, rgba(30, 58, 138, 0.2));
                    border: 1px solid rgba(59, 130, 246, 0.3);
                }
                .fest-block h3 {
                    font-size: 1.9rem;
                    color: #60a5fa;
                    margin-bottom: 1.5rem;
                }
                .fest-item {
                    display: block;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 8px;
                    background: rgba(30, 41, 59, 0.3);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    transition: transform 0.3s;
                }
                a.fest-item:hover {
                    transform: translateX(8px);
                }
                .event-grid, .team-grid, .contact-grid {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                }
                .event-card, .team-card {
                    display: block;
                    padding: 1.5rem;
                    border-radius: 8px;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    background: rgba(30, 41, 59, 0.3);
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .event-card:hover, .team-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 15px rgba(59, 130, 246, 0.2);
                }
                .event-date {
                    color: rgba(96, 165, 250, 0.6);
                    margin: 0.75rem 0;
                }
                .team-card {
                    text-align: center;
                }
                .team-card img {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid rgba(59, 130, 246, 0.3);
                    margin-bottom: 1.5rem;
                }
                .contact-footer {
                    border-top: 1px solid rgba(59, 130, 246, 0.3);
                    padding: 4rem 0;
                    background: #0f172a;
                    text-align: center;
                }
                .contact-card {
                    background: rgba(30, 41, 59, 0.5);
                    padding: 1.5rem;
                    border-radius: 8px;
                }
                .copyright {
                    margin-top: 2rem;
                    color: rgba(59, 130, 246, 0.6);
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let label = use_rotating_label(ROTATING_LABELS, config::LABEL_ROTATION_MS);

    let enter = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <header class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-grid"></div>
            <div class="container hero-content">
                <div class="hero-text">
                    <h1>{"CBIT"}<br />{"Cyber Security"}<br />{"Club"}</h1>
                    <p>
                        // Keyed so the typing animation restarts with each label
                        <span class="typed-text" key={label.unwrap_or_default()}>
                            {label.unwrap_or_default()}
                        </span>
                    </p>
                    <button class="cta-button pulse" onclick={enter}>
                        {"ENTER_SYSTEM"}
                    </button>
                </div>
                <div class="hero-image">
                    <img src="/hacker.png" alt="Hacker" />
                </div>
            </div>
        </header>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class={classes!("landing-section", config::REVEAL_CLASS)}>
            <div class="container two-column">
                <div>
                    <h2 class="section-title">{"About CCC"}</h2>
                    <p class="lead">
                        {"The CBIT Cyber Security Club (CCC) is a student-led organization dedicated to promoting cybersecurity awareness \
                          and skills development. We organize workshops, competitions, and seminars to help students explore the fascinating \
                          world of information security."}
                    </p>
                </div>
                <div class="panel">
                    <div class="terminal-icon pulse">{">_"}</div>
                    <h3>{"Our Mission"}</h3>
                    <p class="lead">
                        {"To create a community of cybersecurity enthusiasts and prepare the next generation of security professionals."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Events)]
fn events() -> Html {
    html! {
        <section id="events" class={classes!("landing-section", "dark", config::REVEAL_CLASS)}>
            <div class="container">
                <h2 class="section-title">{"Events"}</h2>

                <div class="fest-block">
                    <h3>{FEST_NAME}</h3>
                    <div class="two-column">
                        <p class="lead">
                            {"Our annual technical fest featuring cutting-edge cybersecurity challenges, workshops, and competitions. \
                              Join us for an immersive experience in the world of information security."}
                        </p>
                        <div>
                            { for FEST_HIGHLIGHTS.iter().map(|highlight| match highlight.event {
                                Some(index) => html! {
                                    <Link<Route> to={Route::event(index)} classes="fest-item">
                                        {"› "}{highlight.label}
                                    </Link<Route>>
                                },
                                None => html! {
                                    <div class="fest-item">{"› "}{highlight.label}</div>
                                },
                            }) }
                        </div>
                    </div>
                </div>

                <div class="event-grid">
                    { for EVENTS.iter().enumerate().map(|(index, event)| html! {
                        <Link<Route> to={Route::event(index)} classes="event-card">
                            <h3>{event.title}</h3>
                            <p class="event-date">{event.display_date()}</p>
                            <p>{event.description}</p>
                        </Link<Route>>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Team)]
fn team() -> Html {
    html! {
        <section id="team" class={classes!("landing-section", config::REVEAL_CLASS)}>
            <div class="container">
                <h2 class="section-title">{"Our Team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-card">
                            <img src={member.image_url} alt={member.name} loading="lazy" />
                            <h3>{member.name}</h3>
                            <p>{member.role}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <footer id="contact" class="contact-footer">
            <div class="container">
                <h2 class="section-title centered">{"Contact Us"}</h2>
                <div class="contact-grid">
                    { for CONTACTS.iter().map(|card| html! {
                        <div class="contact-card">
                            <h3>{card.heading}</h3>
                            { for card.lines.iter().map(|line| html! { <p>{*line}</p> }) }
                        </div>
                    }) }
                </div>
                <p class="copyright">
                    {format!("© 2024 {}. All rights reserved.", config::SITE_NAME)}
                </p>
            </div>
        </footer>
    }
}
