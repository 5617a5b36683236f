use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_navigation;

/// (label, destination)
const EXPLORE_LINKS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("Individuals", "#individuals"),
    ("Companies", "#companies"),
    ("Services", "#services"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let nav = use_navigation();
    let year = Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="logo-word">{"VERIN"}</span>
                        <span class="logo-sub">{"Media"}</span>
                    </div>
                    <div class="footer-location">{"📍 Dubai | Madrid"}</div>
                    <p class="footer-tagline">
                        {"Crafting premium digital narratives for the world's most ambitious individuals and brands."}
                    </p>
                </div>

                <div class="footer-column">
                    <h4>{"Explore"}</h4>
                    <ul>
                        { for EXPLORE_LINKS.iter().map(|(label, destination)| html! {
                            <li><a href={*destination} onclick={nav.link(*destination)}>{*label}</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Connect"}</h4>
                    <ul>
                        <li><a href={config::CONTACT_MAILTO}>{"✉ Contact Us"}</a></li>
                        <li>
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                {"@verin.media"}
                            </a>
                        </li>
                        <li>
                            <a href={config::YOUTUBE_URL} target="_blank" rel="noopener noreferrer">
                                {"@VerinMedia"}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Verin Media. All rights reserved.", year)}</p>
                <div class="footer-legal">
                    <a href="#" onclick={nav.link("#")}>{"Privacy Policy"}</a>
                    <a href="#" onclick={nav.link("#")}>{"Terms of Service"}</a>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: #FFFFFF;
        padding: 5rem 1.5rem 2.5rem;
        border-top: 1px solid rgba(106, 78, 66, 0.1);
    }
    .footer-grid {
        max-width: 80rem;
        margin: 0 auto 4rem;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 3rem;
    }
    .footer-logo {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
    }
    .footer-logo .logo-word {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.875rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        line-height: 1;
    }
    .footer-logo .logo-sub {
        font-size: 0.6rem;
        text-transform: uppercase;
        letter-spacing: 0.35em;
        margin-top: 0.25rem;
        padding-left: 0.25rem;
    }
    .footer-location {
        color: #6A4E42;
        padding-top: 1.5rem;
    }
    .footer-tagline {
        color: rgba(10, 10, 10, 0.6);
        max-width: 24rem;
    }
    .footer-column h4 {
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        margin-bottom: 1rem;
    }
    .footer-column ul {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        color: rgba(10, 10, 10, 0.7);
    }
    .footer-column a {
        display: inline-block;
        transition: color 0.2s ease, transform 0.2s ease;
    }
    .footer-column a:hover {
        color: #E98C79;
        transform: translateX(4px);
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 0 auto;
        padding-top: 2rem;
        border-top: 1px solid rgba(10, 10, 10, 0.05);
        display: flex;
        justify-content: space-between;
        align-items: center;
        font-size: 0.875rem;
        color: rgba(10, 10, 10, 0.4);
    }
    .footer-legal {
        display: flex;
        gap: 1.5rem;
    }
    .footer-legal a:hover {
        color: #0A0A0A;
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
        .footer-bottom {
            flex-direction: column;
            gap: 1rem;
        }
    }
"#;
