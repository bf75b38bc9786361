//! Stacked card carousel.
//!
//! Cards sit in a skewed 3D stack. Every `delay` milliseconds the front card
//! drops out, the rest move one slot forward, and the dropped card returns at
//! the back. The parent hears about the new front card as soon as a rotation
//! starts, and about clicks on any card.

use log::{error, info};
use web_sys::MouseEvent;
use yew::prelude::*;

pub mod controller;
pub mod dom;
pub mod driver;
pub mod ease;
pub mod rotation;
pub mod slot;
pub mod timeline;

#[cfg(test)]
mod testing;

use controller::{CardSwapController, Notifier};
use dom::{place_cards, DomScheduler, IntervalTicker};
use driver::Driver;
use rotation::{Layout, RotationEngine};

pub use rotation::EasingProfile;

const CARD_SWAP_CSS: &str = r#"
    .card-swap-container {
        position: absolute;
        bottom: 0;
        right: 0;
        transform: translate(5%, 20%);
        transform-origin: bottom right;
        perspective: 900px;
        overflow: visible;
    }
    .card-swap-container .card {
        position: absolute;
        top: 50%;
        left: 50%;
        border-radius: 12px;
        border: 1px solid #fff;
        background: #000;
        transform-style: preserve-3d;
        will-change: transform;
        backface-visibility: hidden;
        -webkit-backface-visibility: hidden;
        cursor: pointer;
    }
    @media (max-width: 768px) {
        .card-swap-container {
            transform: scale(0.75) translate(25%, 25%);
        }
    }
    @media (max-width: 480px) {
        .card-swap-container {
            transform: scale(0.55) translate(25%, 25%);
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub custom_class: Classes,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// A single card. Inside a [`CardSwap`] its props are taken over by the carousel.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div
            class={classes!("card", props.custom_class.clone(), props.class.clone())}
            style={props.style.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardSwapProps {
    #[prop_or(300.0)]
    pub width: f64,
    #[prop_or(400.0)]
    pub height: f64,
    #[prop_or(60.0)]
    pub card_distance: f64,
    #[prop_or(70.0)]
    pub vertical_distance: f64,
    #[prop_or(6.0)]
    pub skew_amount: f64,
    /// Milliseconds between rotations.
    #[prop_or(4000)]
    pub delay: u32,
    #[prop_or(false)]
    pub pause_on_hover: bool,
    #[prop_or_default]
    pub easing: EasingProfile,
    #[prop_or_default]
    pub on_card_click: Option<Callback<usize>>,
    /// Called with the card about to come to the front, and with clicked cards.
    #[prop_or_default]
    pub on_card_swap: Option<Callback<usize>>,
    #[prop_or_default]
    pub children: ChildrenWithProps<Card>,
}

#[function_component(CardSwap)]
pub fn card_swap(props: &CardSwapProps) -> Html {
    let count = props.children.len();
    let cards = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        count,
    );
    let driver = use_mut_ref(|| None::<Driver<IntervalTicker>>);

    // Refreshed every render so the running rotation always reports to the
    // parent's current callbacks without being restarted.
    let notifier = use_mut_ref(Notifier::default);
    *notifier.borrow_mut() = Notifier {
        on_card_click: props.on_card_click.clone(),
        on_card_swap: props.on_card_swap.clone(),
    };

    {
        let cards = cards.clone();
        let notifier = notifier.clone();
        let driver = driver.clone();
        let layout = Layout {
            spacing_x: props.card_distance,
            spacing_y: props.vertical_distance,
            skew: props.skew_amount,
        };
        use_effect_with_deps(
            move |(delay, pause_on_hover, easing, layout, _)| {
                let engine = RotationEngine::new(cards.len(), *layout, *easing);
                match place_cards(&cards, &engine) {
                    Ok(()) => {
                        info!("card swap mounted with {} cards", engine.len());
                        let scheduler = DomScheduler::new(cards.to_vec(), layout.skew);
                        let controller = CardSwapController::new(engine, scheduler, notifier);
                        let mut next = Driver::new(IntervalTicker, *delay, *pause_on_hover);
                        next.start(move || controller.rotate());
                        *driver.borrow_mut() = Some(next);
                    }
                    Err(err) => error!("card swap disabled: {}", err),
                }

                move || {
                    let running = driver.borrow_mut().take();
                    if let Some(mut running) = running {
                        running.stop();
                    }
                }
            },
            (props.delay, props.pause_on_hover, props.easing, layout, count),
        );
    }

    let onmouseenter = props.pause_on_hover.then(|| {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(driver) = driver.borrow().as_ref() {
                driver.pointer_enter();
            }
        })
    });
    let onmouseleave = props.pause_on_hover.then(|| {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(driver) = driver.borrow().as_ref() {
                driver.pointer_leave();
            }
        })
    });

    let rendered = props
        .children
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let own = card.props.onclick.clone();
            let notifier = notifier.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                if let Some(own) = &own {
                    own.emit(e);
                }
                let notifier = notifier.borrow().clone();
                notifier.card_clicked(index);
            });
            let style = format!(
                "width: {}px; height: {}px; {}",
                props.width,
                props.height,
                &*card.props.style
            );
            html! {
                <div
                    key={index}
                    ref={cards.get(index).cloned().unwrap_or_default()}
                    class={classes!("card", card.props.custom_class.clone(), card.props.class.clone())}
                    style={style}
                    onclick={onclick}
                >
                    { for card.props.children.iter() }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <style>{ CARD_SWAP_CSS }</style>
            <div
                class="card-swap-container"
                style={format!("width: {}px; height: {}px;", props.width, props.height)}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
            >
                { rendered }
            </div>
        </>
    }
}
