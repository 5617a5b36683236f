use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::reveal_on_scroll::RevealOnScroll;
use crate::config;
use crate::content::ServicePackage;
use crate::hooks::use_navigation;
use crate::navigation::Page;

const PARALLAX_FACTOR: f64 = 0.1;

#[derive(Clone, Copy, PartialEq)]
pub enum GlowSide {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct PackagesHeaderProps {
    pub title: AttrValue,
    pub intro: AttrValue,
    pub glow: GlowSide,
}

#[function_component(PackagesHeader)]
pub fn packages_header(props: &PackagesHeaderProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let side = match props.glow {
        GlowSide::Left => "glow-left",
        GlowSide::Right => "glow-right",
    };

    html! {
        <section class="packages-header">
            <div
                class={classes!("packages-glow", side)}
                style={format!("transform: translateY({}px);", scroll_y * PARALLAX_FACTOR)}
            ></div>
            <RevealOnScroll delay={200}>
                <h1>{props.title.clone()}</h1>
            </RevealOnScroll>
            <RevealOnScroll delay={300}>
                <p>{props.intro.clone()}</p>
            </RevealOnScroll>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackageGridProps {
    pub packages: &'static [ServicePackage],
    #[prop_or(3)]
    pub columns: u8,
}

#[function_component(PackageGrid)]
pub fn package_grid(props: &PackageGridProps) -> Html {
    html! {
        <section class="packages">
            <style>{PACKAGES_CSS}</style>
            <div class={classes!("package-grid", format!("cols-{}", props.columns))}>
                { for props.packages.iter().enumerate().map(|(index, package)| html! {
                    <RevealOnScroll delay={index as u32 * 100} class="package-slot">
                        <PackageCard package={*package} />
                    </RevealOnScroll>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackageCardProps {
    pub package: ServicePackage,
}

#[function_component(PackageCard)]
pub fn package_card(props: &PackageCardProps) -> Html {
    let package = &props.package;
    html! {
        <div class={classes!("package-card", package.highlight.then_some("highlight"))}>
            <span class="package-number">{package.label()}</span>
            <h3>{package.title}</h3>
            <p class="package-description">{package.description}</p>
            <ul class="package-features">
                { for package.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span><span>{*feature}</span></li>
                }) }
            </ul>
            if let Some(note) = package.note {
                <p class="package-note">{format!("👉 {}", note)}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PackagesCtaProps {
    pub blurb: AttrValue,
}

/// Closing call to action shared by the service pages.
#[function_component(PackagesCta)]
pub fn packages_cta(props: &PackagesCtaProps) -> Html {
    let nav = use_navigation();
    html! {
        <section class="packages-cta">
            <RevealOnScroll>
                <h2>{"Ready to lead your industry?"}</h2>
                <p>{props.blurb.clone()}</p>
                <div class="cta-actions">
                    <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="cta-primary">
                        {"Schedule a Meeting"}
                    </a>
                    <button class="cta-secondary" onclick={nav.go(Page::Home)}>
                        {"Back to Home"}
                    </button>
                </div>
            </RevealOnScroll>
        </section>
    }
}

const PACKAGES_CSS: &str = r#"
    .packages-header {
        position: relative;
        padding: 12rem 1.5rem 5rem;
        max-width: 64rem;
        margin: 0 auto;
        text-align: center;
    }
    .packages-glow {
        position: absolute;
        top: 0;
        width: 600px;
        height: 600px;
        border-radius: 9999px;
        background: linear-gradient(to bottom, #E6D2B5, transparent);
        opacity: 0.6;
        filter: blur(64px);
        z-index: -1;
    }
    .packages-glow.glow-left {
        left: 0;
    }
    .packages-glow.glow-right {
        right: 0;
    }
    .packages-header h1 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 4.5rem;
        font-weight: 400;
        margin: 0 0 1.5rem;
    }
    .packages-header p {
        font-size: 1.25rem;
        line-height: 1.7;
        color: rgba(18, 18, 18, 0.6);
        max-width: 42rem;
        margin: 0 auto;
    }
    .packages {
        padding: 0 1.5rem 8rem;
    }
    .package-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        gap: 2rem;
    }
    .package-grid.cols-3 {
        grid-template-columns: repeat(3, 1fr);
    }
    .package-grid.cols-2 {
        grid-template-columns: repeat(2, 1fr);
    }
    .package-slot {
        height: 100%;
    }
    .package-card {
        height: 100%;
        box-sizing: border-box;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        background: #FFFFFF;
        border: 1px solid transparent;
        border-radius: 2rem;
        transition: all 0.5s ease;
    }
    .package-card:hover {
        border-color: rgba(106, 78, 66, 0.1);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
    }
    .package-card.highlight {
        border-color: rgba(233, 140, 121, 0.5);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .package-number {
        font-family: 'Cormorant Garamond', serif;
        font-size: 3rem;
        font-weight: 700;
        line-height: 1;
        color: rgba(106, 78, 66, 0.1);
        margin-bottom: 1.5rem;
    }
    .package-card h3 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.875rem;
        font-weight: 400;
        margin: 0 0 1rem;
        transition: color 0.3s ease;
    }
    .package-card:hover h3 {
        color: #6A4E42;
    }
    .package-description {
        font-size: 0.875rem;
        font-style: italic;
        font-weight: 300;
        color: rgba(18, 18, 18, 0.6);
        margin-bottom: 1.5rem;
    }
    .package-features {
        list-style: none;
        margin: auto 0 0;
        padding: 1.5rem 0 0;
        border-top: 1px solid rgba(106, 78, 66, 0.05);
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .package-features li {
        display: flex;
        gap: 0.75rem;
        font-size: 0.875rem;
        font-weight: 300;
        color: rgba(18, 18, 18, 0.8);
    }
    .package-features .check {
        color: #E98C79;
        flex-shrink: 0;
    }
    .package-note {
        margin-top: 1rem;
        padding-top: 1rem;
        font-size: 0.75rem;
        font-weight: 500;
        color: rgba(106, 78, 66, 0.7);
    }
    .packages-cta {
        padding: 6rem 1.5rem;
        background: #0A0A0A;
        text-align: center;
    }
    .packages-cta h2 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 3.75rem;
        font-weight: 400;
        color: #FFFFFF;
        margin: 0 0 2rem;
    }
    .packages-cta p {
        color: rgba(255, 255, 255, 0.6);
        font-size: 1.125rem;
        max-width: 36rem;
        margin: 0 auto 3rem;
    }
    .cta-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
    }
    .cta-primary {
        background: #E98C79;
        color: #FFFFFF;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        font-weight: 500;
        transition: all 0.3s ease;
    }
    .cta-primary:hover {
        background: #FFFFFF;
        color: #0A0A0A;
    }
    .cta-secondary {
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        font: inherit;
        font-weight: 500;
        color: #FFFFFF;
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.2);
        cursor: pointer;
        transition: border-color 0.3s ease;
    }
    .cta-secondary:hover {
        border-color: #FFFFFF;
    }
    @media (max-width: 768px) {
        .packages-header {
            padding: 8rem 1.5rem 5rem;
        }
        .packages-header h1 {
            font-size: 3rem;
        }
        .package-grid.cols-3,
        .package-grid.cols-2 {
            grid-template-columns: 1fr;
        }
        .packages-cta h2 {
            font-size: 2.25rem;
        }
        .cta-actions {
            flex-direction: column;
        }
    }
"#;
