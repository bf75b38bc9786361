use std::rc::Rc;

use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{FADE_DISTANCE, NAVBAR_HEIGHT};
use crate::content::SiteContent;
use crate::pages::about::About;

/// Opacity of an element whose top edge is `top` pixels below the viewport top.
/// Fully visible until it is `fade_distance` away from the navbar, then fades
/// linearly to zero as it slides under it.
pub fn fade_opacity(top: f64, navbar_height: f64, fade_distance: f64) -> f64 {
    ((top - navbar_height) / fade_distance).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct HeroFade {
    heading: f64,
    tagline: f64,
    hint: f64,
}

impl Default for HeroFade {
    fn default() -> Self {
        Self { heading: 1.0, tagline: 1.0, hint: 1.0 }
    }
}

fn measure(node: &NodeRef) -> f64 {
    node.cast::<Element>()
        .map(|el| fade_opacity(el.get_bounding_client_rect().top(), NAVBAR_HEIGHT, FADE_DISTANCE))
        .unwrap_or(1.0)
}

fn fade_style(opacity: f64) -> String {
    format!("opacity: {}; transition: opacity 0.3s;", opacity)
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: SiteContent,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let heading_ref = use_node_ref();
    let tagline_ref = use_node_ref();
    let hint_ref = use_node_ref();
    let fade = use_state(HeroFade::default);

    let refresh = {
        let heading_ref = heading_ref.clone();
        let tagline_ref = tagline_ref.clone();
        let hint_ref = hint_ref.clone();
        let fade = fade.clone();
        Rc::new(move || {
            let next = HeroFade {
                heading: measure(&heading_ref),
                tagline: measure(&tagline_ref),
                hint: measure(&hint_ref),
            };
            if *fade != next {
                fade.set(next);
            }
        })
    };

    {
        let refresh = refresh.clone();
        use_event_with_window("scroll", move |_: Event| refresh());
    }
    use_mount(move || refresh());

    let hero = &props.content.hero;

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        background: #0a0a0a;
                        color: #fff;
                        overflow-x: hidden;
                    }
                    .home-background {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        background:
                            radial-gradient(ellipse at 20% 30%, rgba(34, 211, 238, 0.12), transparent 60%),
                            radial-gradient(ellipse at 80% 70%, rgba(255, 255, 255, 0.06), transparent 55%),
                            #0a0a0a;
                    }
                    .hero {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        height: 100vh;
                        text-align: center;
                        padding: 9rem 1.5rem 0;
                    }
                    .hero h1 {
                        font-size: clamp(1.9rem, 5vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                        text-shadow: 0 4px 12px rgba(0, 0, 0, 0.6);
                    }
                    .highlight {
                        color: #22d3ee;
                    }
                    .hero p {
                        font-size: clamp(1rem, 2vw, 1.25rem);
                        color: #f3f4f6;
                        max-width: 36rem;
                        margin: 0 auto;
                        text-shadow: 0 2px 10px rgba(0, 0, 0, 0.8);
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        animation: hint-bounce 1s infinite;
                    }
                    .scroll-hint .chevron {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-bottom: 2px solid #fff;
                        border-right: 2px solid #fff;
                        transform: rotate(45deg);
                        margin-bottom: 0.5rem;
                    }
                    .scroll-hint span {
                        color: #d1d5db;
                        font-size: 0.875rem;
                    }
                    @keyframes hint-bounce {
                        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                    }
                    .about-wrapper {
                        position: relative;
                        z-index: 10;
                        padding: 0 1.5rem;
                    }
                "#}
            </style>
            <div class="home-background"></div>

            <section id="home" class="hero">
                <h1 ref={heading_ref} style={fade_style(fade.heading)}>
                    {format!("{} ", hero.lead)}
                    <span class="highlight">{hero.highlight.clone()}</span>
                </h1>
                <p ref={tagline_ref} style={fade_style(fade.tagline)}>
                    {hero.tagline.clone()}
                </p>
                <div ref={hint_ref} class="scroll-hint" style={fade_style(fade.hint)}>
                    <div class="chevron"></div>
                    <span>{hero.scroll_hint.clone()}</span>
                </div>
            </section>

            <section id="about" class="about-wrapper">
                <About content={props.content.about.clone()} />
            </section>
        </div>
    }
}
