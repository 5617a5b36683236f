use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};
use yew::prelude::*;
use yew_hooks::{use_click_away, use_window_scroll};

use crate::config;
use crate::disclosure::{Disclosure, DisclosureEvent};
use crate::hooks::use_navigation;
use crate::navigation::{NavLink, NAV_LINKS};

/// Scroll offset after which the bar gets its solid background.
const SCROLLED_OFFSET: f64 = 50.0;

fn nav_anchor(link: &NavLink, class: &'static str, onclick: Callback<MouseEvent>) -> Html {
    let external = link.is_external();
    html! {
        <a
            href={link.href()}
            class={class}
            target={external.then_some("_blank")}
            rel={external.then_some("noopener noreferrer")}
            {onclick}
        >
            {link.label}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavEntryProps {
    link: NavLink,
}

#[function_component(DesktopEntry)]
fn desktop_entry(props: &NavEntryProps) -> Html {
    let nav = use_navigation();
    let disclosure = use_reducer(Disclosure::default);
    let container = use_node_ref();
    let trigger = use_node_ref();

    {
        let disclosure = disclosure.clone();
        use_click_away(container.clone(), move |_: Event| {
            disclosure.dispatch(DisclosureEvent::ClickedOutside)
        });
    }

    let link = props.link;
    if link.children.is_empty() {
        return html! {
            <div class="nav-entry">
                { nav_anchor(&link, "nav-link", nav.link(link.destination)) }
            </div>
        };
    }

    let send = |event: DisclosureEvent| {
        let disclosure = disclosure.clone();
        Callback::from(move |_| disclosure.dispatch(event))
    };

    let on_trigger_key = {
        let disclosure = disclosure.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(event) = DisclosureEvent::from_trigger_key(&e.key()) {
                e.prevent_default();
                disclosure.dispatch(event);
            }
        })
    };

    // Keydowns from the child links bubble up here.
    let on_menu_key = {
        let disclosure = disclosure.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(event) = DisclosureEvent::from_menu_key(&e.key()) else {
                return;
            };
            e.prevent_default();
            disclosure.dispatch(event);
            if let Some(trigger) = trigger.cast::<HtmlElement>() {
                if let Err(err) = trigger.focus() {
                    debug!("could not refocus dropdown trigger: {:?}", err);
                }
            }
        })
    };

    let onfocusout = {
        let disclosure = disclosure.clone();
        let container = container.clone();
        Callback::from(move |e: FocusEvent| {
            let next_focus = e.related_target().and_then(|target| target.dyn_into::<Node>().ok());
            let stays_inside = match (container.get(), next_focus) {
                (Some(container), Some(next)) => container.contains(Some(&next)),
                _ => false,
            };
            if !stays_inside {
                disclosure.dispatch(DisclosureEvent::FocusLeft);
            }
        })
    };

    let open = disclosure.is_open();

    html! {
        <div
            ref={container}
            class={classes!("nav-entry", "has-children", open.then_some("open"))}
            onmouseenter={send(DisclosureEvent::PointerEnter)}
            onmouseleave={send(DisclosureEvent::PointerLeave)}
            onkeydown={on_menu_key}
            {onfocusout}
        >
            <a
                ref={trigger}
                href={link.href()}
                class="nav-link"
                aria-haspopup="true"
                aria-expanded={open.to_string()}
                onclick={nav.link(link.destination)}
                onkeydown={on_trigger_key}
            >
                {link.label}
                <span class="chevron" aria-hidden="true">{"▾"}</span>
            </a>
            <div class="dropdown">
                <div class="dropdown-panel" role="menu">
                    { for link.children.iter().map(|child| {
                        let go = nav.link(child.destination);
                        let disclosure = disclosure.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            disclosure.dispatch(DisclosureEvent::Close);
                            go.emit(e);
                        });
                        nav_anchor(child, "dropdown-link", onclick)
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_navigation();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > SCROLLED_OFFSET;
    let menu_open = nav.menu_open();

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={nav.link("#")}>
                    <span class="logo-word">{"VERIN"}</span>
                    <span class="logo-sub">{"Media"}</span>
                </a>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! { <DesktopEntry link={*link} /> }) }
                    <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="nav-book">
                        {"Book Now"}
                    </a>
                </div>

                <button
                    class={classes!("burger-menu", menu_open.then_some("active"))}
                    aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={nav.toggle_menu()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("mobile-overlay", menu_open.then_some("open"))}>
                    <div class="mobile-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <div class="mobile-entry">
                                { nav_anchor(link, "mobile-link", nav.link(link.destination)) }
                                if !link.children.is_empty() {
                                    <div class="mobile-submenu">
                                        { for link.children.iter().map(|child| {
                                            nav_anchor(child, "mobile-sublink", nav.link(child.destination))
                                        }) }
                                    </div>
                                }
                            </div>
                        }) }
                        <a
                            href={config::WHATSAPP_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="mobile-book"
                            onclick={nav.close_menu()}
                        >
                            {"Book Now"}
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 2rem 0;
        background: transparent;
        transition: all 0.5s ease;
    }
    .top-nav.scrolled {
        padding: 0.75rem 0;
        background: rgba(244, 239, 234, 0.95);
        backdrop-filter: blur(12px);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        border-bottom: 1px solid rgba(106, 78, 66, 0.1);
    }
    .nav-content {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 3rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        display: flex;
        flex-direction: column;
        align-items: center;
        z-index: 50;
        cursor: pointer;
    }
    .logo-word {
        font-family: 'Cormorant Garamond', serif;
        font-size: 2.25rem;
        letter-spacing: 0.15em;
        line-height: 1;
        color: #0A0A0A;
        transition: color 0.3s ease;
    }
    .logo-sub {
        font-size: 0.7rem;
        text-transform: uppercase;
        letter-spacing: 0.35em;
        margin-top: 0.25rem;
        color: rgba(10, 10, 10, 0.8);
    }
    .nav-logo:hover .logo-word,
    .nav-logo:hover .logo-sub {
        color: #6A4E42;
    }
    .nav-desktop {
        display: flex;
        align-items: center;
        gap: 2.5rem;
    }
    .nav-entry {
        position: relative;
    }
    .nav-link {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        font-size: 0.875rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(10, 10, 10, 0.8);
        padding-bottom: 0.25rem;
        transition: color 0.3s ease;
    }
    .nav-link:hover {
        color: #6A4E42;
    }
    .chevron {
        display: inline-block;
        transition: transform 0.3s ease;
    }
    .nav-entry.open .chevron {
        transform: rotate(180deg);
    }
    .dropdown {
        position: absolute;
        top: 100%;
        left: 50%;
        transform: translateX(-50%);
        padding-top: 1rem;
        min-width: 200px;
        opacity: 0;
        visibility: hidden;
        transition: all 0.3s cubic-bezier(0.16, 1, 0.3, 1);
    }
    .nav-entry.open .dropdown {
        opacity: 1;
        visibility: visible;
    }
    .dropdown-panel {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        padding: 0.5rem;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(106, 78, 66, 0.1);
        border-radius: 0.75rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .dropdown-link {
        display: block;
        padding: 0.75rem 1rem;
        font-size: 0.875rem;
        text-align: center;
        white-space: nowrap;
        border-radius: 0.5rem;
        color: #0A0A0A;
        transition: background 0.2s ease, color 0.2s ease;
    }
    .dropdown-link:hover,
    .dropdown-link:focus {
        background: #F4EFEA;
        color: #6A4E42;
    }
    .nav-book {
        background: #0A0A0A;
        color: #FFFFFF;
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: all 0.3s ease;
    }
    .nav-book:hover {
        background: #6A4E42;
        transform: scale(1.05);
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 6px;
        z-index: 50;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .burger-menu span {
        display: block;
        width: 26px;
        height: 2px;
        background: #0A0A0A;
        transition: all 0.3s ease;
    }
    .burger-menu.active span:nth-child(1) {
        transform: translateY(8px) rotate(45deg);
    }
    .burger-menu.active span:nth-child(2) {
        opacity: 0;
    }
    .burger-menu.active span:nth-child(3) {
        transform: translateY(-8px) rotate(-45deg);
    }
    .mobile-overlay {
        position: fixed;
        inset: 0;
        z-index: 40;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow-y: auto;
        padding: 5rem 0;
        background: #F4EFEA;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.5s ease;
    }
    .mobile-overlay.open {
        opacity: 1;
        pointer-events: auto;
    }
    .mobile-links {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 2rem;
        width: 100%;
    }
    .mobile-entry {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        width: 100%;
    }
    .mobile-link {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.875rem;
        color: #0A0A0A;
    }
    .mobile-link:hover {
        color: #E98C79;
    }
    .mobile-submenu {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        width: 100%;
        padding: 1.5rem 0;
        background: rgba(255, 255, 255, 0.5);
    }
    .mobile-sublink {
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: rgba(106, 78, 66, 0.8);
    }
    .mobile-book {
        margin-top: 2rem;
        background: #E98C79;
        color: #FFFFFF;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    }
    @media (min-width: 769px) {
        .mobile-overlay {
            display: none;
        }
    }
    @media (max-width: 768px) {
        .nav-content {
            justify-content: flex-end;
            padding: 0 1.5rem;
        }
        .nav-logo {
            position: absolute;
            left: 50%;
            transform: translateX(-50%);
        }
        .logo-word {
            font-size: 1.875rem;
        }
        .nav-desktop {
            display: none;
        }
        .burger-menu {
            display: flex;
        }
    }
"#;
