use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use web_sys::{Event, MouseEvent};

mod config;
mod content;
mod components {
    pub mod card_swap;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
}

use content::SiteContent;
use pages::{home::Home, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(route: Route, content: &SiteContent) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home content={content.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


/// Whether the nav bar should drop its translucent look at this scroll offset.
fn nav_is_solid(scroll_top: f64) -> bool {
    scroll_top > config::NAV_SOLID_AFTER
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub items: Vec<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, items } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_top = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(nav_is_solid(scroll_top));
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 90%;
                        max-width: 72rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.15);
                        backdrop-filter: blur(24px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        z-index: 50;
                        color: #fff;
                        transition: background 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(17, 17, 17, 0.9);
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 600;
                        letter-spacing: 0.025em;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-items {
                        display: flex;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-items li, .nav-dropdown li {
                        color: #d1d5db;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .nav-items li:hover, .nav-dropdown li:hover {
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .nav-dropdown {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        margin-top: 0.75rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        list-style: none;
                        padding: 1rem;
                        background: rgba(17, 17, 17, 0.9);
                        backdrop-filter: blur(24px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .top-nav {
                            top: 3rem;
                            width: 95%;
                            padding: 0.75rem 1rem;
                        }
                        .nav-items {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {brand.clone()}
            </Link<Route>>

            <ul class="nav-items">
                { for items.iter().map(|item| html! {
                    <li key={item.clone()}>{item.clone()}</li>
                }) }
            </ul>

            <button class="burger-menu" onclick={toggle_menu}>
                { if *menu_open { "✕" } else { "☰" } }
            </button>

            {
                if *menu_open {
                    html! {
                        <ul class="nav-dropdown">
                            { for items.iter().map(|item| html! {
                                <li key={item.clone()} onclick={close_menu.clone()}>{item.clone()}</li>
                            }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: SiteContent,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let content = props.content.clone();
        Callback::from(move |route: Route| switch(route, &content))
    };

    html! {
        <BrowserRouter>
            <Nav brand={props.content.brand.clone()} items={props.content.nav_items.clone()} />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

#[function_component]
fn ContentUnavailable() -> Html {
    html! {
        <div class="content-unavailable">
            <h1>{"Something went wrong"}</h1>
            <p>{"The page content could not be loaded."}</p>
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps { content }).render();
        }
        Err(err) => {
            error!("{}", err);
            yew::Renderer::<ContentUnavailable>::new().render();
        }
    }
}
