use yew::prelude::*;

use crate::components::card_swap::{Card, CardSwap};
use crate::content::AboutContent;

const CARD_STYLE: &str = "background: rgba(10, 10, 10, 0.8); border: 1px solid #fff; will-change: transform, opacity;";

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let active_index = use_state(|| 0usize);

    let set_active = {
        let active_index = active_index.clone();
        Callback::from(move |index: usize| active_index.set(index))
    };

    let cards = &props.content.cards;
    let carousel = &props.content.carousel;
    let active = cards.get(*active_index).or_else(|| cards.first());

    html! {
        <div class="about-section">
            <style>
                {r#"
                    .about-section {
                        position: relative;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem 1.5rem;
                    }
                    .about-section > h1 {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 3rem;
                        text-align: center;
                        color: #22d3ee;
                        text-shadow: 0 2px 10px rgba(0, 0, 0, 0.8);
                    }
                    .about-columns {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 3rem;
                        width: 100%;
                        max-width: 72rem;
                    }
                    .about-panel {
                        flex: 1;
                        background: rgba(10, 10, 10, 0.5);
                        padding: 2rem;
                        border-radius: 1rem;
                        backdrop-filter: blur(4px);
                        transition: all 0.5s;
                    }
                    .about-panel h2 {
                        font-size: 1.875rem;
                        color: #22d3ee;
                        margin-bottom: 1rem;
                    }
                    .about-panel p {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        line-height: 1.6;
                    }
                    .about-stack {
                        flex: 1;
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        height: 400px;
                    }
                    .card-face {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        height: 100%;
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .card-face h3 {
                        font-size: 1.25rem;
                        color: #22d3ee;
                        margin-bottom: 0.5rem;
                    }
                    .card-face p {
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    @media (max-width: 1024px) {
                        .about-columns {
                            flex-direction: column;
                        }
                        .about-panel {
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <h1>{props.content.heading.clone()}</h1>

            <div class="about-columns">
                <div class="about-panel">
                    {
                        if let Some(card) = active {
                            html! {
                                <>
                                    <h2>{card.title.clone()}</h2>
                                    <p>{card.content.clone()}</p>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="about-stack">
                    <CardSwap
                        width={300.0}
                        height={400.0}
                        card_distance={60.0}
                        vertical_distance={70.0}
                        skew_amount={6.0}
                        delay={carousel.delay_ms}
                        pause_on_hover={carousel.pause_on_hover}
                        easing={carousel.easing}
                        on_card_click={set_active.clone()}
                        on_card_swap={set_active}
                    >
                        {
                            for cards.iter().map(|card| html_nested! {
                                <Card style={CARD_STYLE}>
                                    <div class="card-face">
                                        <h3>{card.title.clone()}</h3>
                                        <p>{card.content.clone()}</p>
                                    </div>
                                </Card>
                            })
                        }
                    </CardSwap>
                </div>
            </div>
        </div>
    }
}
