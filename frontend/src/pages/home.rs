use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::form_embed::FormEmbed;
use crate::components::reveal_on_scroll::RevealOnScroll;
use crate::components::video_embed::VideoEmbed;
use crate::config;
use crate::content::{
    self, CAROUSEL_PERIOD_MS, COLLABORATIONS, COMING_SOON, COMPANIES_PHOTO, FEATURES, HERO_PHOTO,
    INDIVIDUAL_PHOTOS, TESTIMONIALS,
};
use crate::hooks::{use_carousel, use_navigation, use_scroll_reset};
use crate::navigation::Page;
use crate::reveal::Direction;

const PARALLAX_FACTOR: f64 = 0.2;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_reset();
    let nav = use_navigation();
    let (_, scroll_y) = use_window_scroll();
    let photo_index = use_carousel(INDIVIDUAL_PHOTOS.len(), CAROUSEL_PERIOD_MS);

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <section id="home" class="hero">
                <div
                    class="hero-glow"
                    style={format!("transform: translateY({}px);", scroll_y * PARALLAX_FACTOR)}
                ></div>
                <div class="hero-grid">
                    <div class="hero-copy">
                        <RevealOnScroll delay={100}>
                            <span class="hero-kicker">{"Your story deserves to be seen"}</span>
                        </RevealOnScroll>
                        <RevealOnScroll delay={300}>
                            <h1>
                                {"Be discovered."}<br />
                                <span class="hero-accent">{"Get featured."}</span><br />
                                {"Stand out."}
                            </h1>
                        </RevealOnScroll>
                        <RevealOnScroll delay={500}>
                            <p class="hero-intro">
                                {"Verin Media turns ideas into impact through powerful digital storytelling helping brands and leaders communicate clearly, build credibility, and stand out across platforms."}
                            </p>
                        </RevealOnScroll>
                    </div>
                    <div class="hero-media">
                        <RevealOnScroll direction={Direction::Right} delay={400} class="fill">
                            <img src={HERO_PHOTO} class="hero-photo" alt="Verin Media production" />
                        </RevealOnScroll>
                    </div>
                </div>
            </section>

            <section class="be-seen">
                <RevealOnScroll>
                    <h2>{"Be Seen"}</h2>
                </RevealOnScroll>
                <RevealOnScroll delay={200}>
                    <p class="be-seen-quote">
                        {"\"Your moment won't wait. Start your journey with Verin Media today.\""}
                    </p>
                </RevealOnScroll>
                <RevealOnScroll delay={400}>
                    <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer" class="register-button">
                        {"Register Now"}
                    </a>
                </RevealOnScroll>
            </section>

            <section id="individuals" class="audience individuals">
                <div class="audience-grid">
                    <RevealOnScroll direction={Direction::Left} class="carousel-slot">
                        <div class="carousel">
                            { for INDIVIDUAL_PHOTOS.iter().enumerate().map(|(index, src)| html! {
                                <img
                                    src={*src}
                                    alt={format!("Verin Media for Individuals - {}", index + 1)}
                                    class={classes!("carousel-photo", (index == photo_index).then_some("active"))}
                                />
                            }) }
                            <div class="carousel-dots">
                                { for (0..INDIVIDUAL_PHOTOS.len()).map(|index| html! {
                                    <div class={classes!("carousel-dot", (index == photo_index).then_some("active"))}></div>
                                }) }
                            </div>
                        </div>
                    </RevealOnScroll>
                    <div class="audience-copy">
                        <RevealOnScroll delay={200}>
                            <h2>{"Verin Media for "}<span class="accent-coral">{"Individuals"}</span></h2>
                        </RevealOnScroll>
                        <RevealOnScroll delay={300}>
                            <blockquote>
                                {"“Your talent, elevated. We help you get seen, featured, and noticed in the moments that matter.”"}
                            </blockquote>
                        </RevealOnScroll>
                        <p class="audience-text">
                            {"Whether you are an artist, entrepreneur, or thought leader, we build a cinematic personal brand that commands attention."}
                        </p>
                        <button class="more-link" onclick={nav.go(Page::IndividualServices)}>
                            {"More details →"}
                        </button>
                    </div>
                </div>
            </section>

            <section id="companies" class="audience companies">
                <div class="audience-grid">
                    <div class="audience-copy">
                        <RevealOnScroll>
                            <h2>{"Verin Media for "}<span class="accent-mocha">{"Companies"}</span></h2>
                        </RevealOnScroll>
                        <RevealOnScroll delay={200}>
                            <blockquote>
                                {"“Your brand, amplified. We turn expertise into powerful visibility that builds trust and growth.”"}
                            </blockquote>
                        </RevealOnScroll>
                        <RevealOnScroll delay={300}>
                            <p class="audience-text">
                                {"From founder stories to corporate documentaries, we produce high-end content that resonates with your stakeholders."}
                            </p>
                        </RevealOnScroll>
                        <button class="more-link" onclick={nav.go(Page::Companies)}>
                            {"Explore More →"}
                        </button>
                    </div>
                    <RevealOnScroll direction={Direction::Right} class="companies-photo">
                        <img src={COMPANIES_PHOTO} alt="Companies" />
                    </RevealOnScroll>
                </div>
            </section>

            <section id="services" class="coming-soon">
                <RevealOnScroll>
                    <span class="eyebrow">{"Exclusive For"}</span>
                    <h2>{"Verin Media"}</h2>
                </RevealOnScroll>
                <RevealOnScroll delay={200}>
                    <h3 class="glow-text">
                        { for content::glow_letters(COMING_SOON).into_iter().map(|(letter, delay)| html! {
                            <span style={format!("animation-delay: {}s;", delay)}>{letter.to_string()}</span>
                        }) }
                    </h3>
                    <div class="pulse-line"></div>
                </RevealOnScroll>
            </section>

            <section class="why">
                <RevealOnScroll>
                    <h2>{"Why Verin Media?"}</h2>
                    <div class="divider"></div>
                </RevealOnScroll>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, (glyph, text))| html! {
                        <RevealOnScroll delay={index as u32 * 100} class="feature">
                            <div class="feature-glyph">{*glyph}</div>
                            <p>{*text}</p>
                        </RevealOnScroll>
                    }) }
                </div>
            </section>

            <section class="collaborations">
                <RevealOnScroll>
                    <h2>{"Our Collaborations"}</h2>
                </RevealOnScroll>
                <div class="marquee">
                    <div class="marquee-track">
                        { for COLLABORATIONS.iter().chain(COLLABORATIONS.iter()).map(|(alt, src)| html! {
                            <img src={*src} alt={*alt} class="collab-logo" />
                        }) }
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <RevealOnScroll>
                    <h2>{"Testimonials"}</h2>
                    <p class="eyebrow-muted">{"Voices of Impact"}</p>
                </RevealOnScroll>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <RevealOnScroll key={testimonial.id} delay={index as u32 * 100}>
                            <VideoEmbed testimonial={*testimonial} />
                        </RevealOnScroll>
                    }) }
                </div>
            </section>

            <section class="lead-form">
                <FormEmbed />
            </section>
        </div>
    }
}

const HOME_CSS: &str = r#"
    .home-page {
        overflow: hidden;
    }
    .hero {
        position: relative;
        padding: 12rem 1.5rem 8rem;
    }
    .hero-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 500px;
        height: 500px;
        border-radius: 9999px;
        background: linear-gradient(to bottom, #E6D2B5, transparent);
        opacity: 0.6;
        filter: blur(64px);
        z-index: -1;
    }
    .hero-grid,
    .audience-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-copy {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .hero-kicker {
        display: inline-block;
        padding: 0.25rem 0.75rem;
        border: 1px solid rgba(106, 78, 66, 0.3);
        border-radius: 9999px;
        font-size: 0.75rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: #6A4E42;
    }
    .hero h1 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 6rem;
        font-weight: 400;
        line-height: 1.05;
        letter-spacing: -0.02em;
        margin: 0;
    }
    .hero-accent {
        color: #6A4E42;
        font-style: italic;
        text-decoration: underline wavy rgba(233, 140, 121, 0.4);
        text-underline-offset: 0.3em;
    }
    .hero-intro {
        font-size: 1.125rem;
        line-height: 1.7;
        color: rgba(10, 10, 10, 0.7);
        max-width: 36rem;
    }
    .hero-media {
        height: 600px;
    }
    .fill {
        width: 100%;
        height: 100%;
    }
    .hero-photo {
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: 3rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .be-seen {
        padding: 8rem 1.5rem;
        background: #F4EFEA;
        text-align: center;
    }
    .be-seen h2 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 8rem;
        font-weight: 400;
        margin: 0 0 2rem;
    }
    .be-seen-quote {
        font-size: 1.5rem;
        font-style: italic;
        color: rgba(106, 78, 66, 0.8);
        max-width: 56rem;
        margin: 0 auto 2rem;
    }
    .register-button {
        display: inline-block;
        background: #0A0A0A;
        color: #FFFFFF;
        padding: 1.25rem 3.5rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        transition: all 0.3s ease;
    }
    .register-button:hover {
        background: #E98C79;
        transform: scale(1.05);
    }
    .audience {
        padding: 8rem 1.5rem;
    }
    .individuals {
        position: relative;
        z-index: 10;
        background: #FFFFFF;
        border-radius: 4rem 4rem 0 0;
    }
    .audience-copy {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .audience h2 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 3.75rem;
        font-weight: 400;
        margin: 0;
    }
    .accent-coral {
        color: #E98C79;
        font-style: italic;
    }
    .accent-mocha {
        color: #6A4E42;
        font-style: italic;
    }
    .audience blockquote {
        margin: 0;
        padding-left: 1.5rem;
        border-left: 2px solid rgba(233, 140, 121, 0.3);
        font-size: 1.25rem;
        font-style: italic;
        font-weight: 300;
        color: rgba(106, 78, 66, 0.8);
    }
    .audience-text {
        font-size: 1.125rem;
        color: rgba(10, 10, 10, 0.6);
    }
    .more-link {
        align-self: flex-start;
        background: none;
        border: none;
        border-bottom: 1px solid #0A0A0A;
        padding: 0 0 0.25rem;
        font: inherit;
        cursor: pointer;
        transition: color 0.3s ease, border-color 0.3s ease;
    }
    .more-link:hover {
        color: #E98C79;
        border-color: #E98C79;
    }
    .carousel-slot {
        width: 100%;
        max-width: 600px;
        justify-self: center;
    }
    .carousel {
        position: relative;
        aspect-ratio: 1044 / 855;
        width: 100%;
        border-radius: 2.5rem;
        overflow: hidden;
        background: #F4EFEA;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .carousel-photo {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: top;
        opacity: 0;
        transition: opacity 1s ease-in-out;
    }
    .carousel-photo.active {
        opacity: 1;
    }
    .carousel-dots {
        position: absolute;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.5rem;
        z-index: 20;
    }
    .carousel-dot {
        height: 6px;
        width: 8px;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.4);
        transition: all 0.5s ease;
    }
    .carousel-dot.active {
        width: 32px;
        background: #FFFFFF;
    }
    .companies-photo {
        height: 500px;
    }
    .companies-photo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: 2.5rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .coming-soon {
        margin: 0 2.5rem;
        padding: 6rem 1.5rem;
        background: #000000;
        color: #F4EFEA;
        border-radius: 2rem;
        text-align: center;
    }
    .eyebrow {
        color: #E98C79;
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .coming-soon h2 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 3rem;
        font-weight: 400;
        color: #FFFFFF;
        margin: 0.5rem 0 4rem;
    }
    .glow-text {
        font-family: 'Cormorant Garamond', serif;
        font-size: 8rem;
        font-style: italic;
        font-weight: 400;
        letter-spacing: -0.05em;
        margin: 6rem 0 0;
        user-select: none;
    }
    .glow-text span {
        display: inline-block;
        color: rgba(244, 239, 234, 0.25);
        animation: glowRipple 3s ease-in-out infinite;
    }
    @keyframes glowRipple {
        0%, 100% { color: rgba(244, 239, 234, 0.25); text-shadow: none; }
        50% { color: #FFFFFF; text-shadow: 0 0 24px rgba(233, 140, 121, 0.8); }
    }
    .pulse-line {
        width: 6rem;
        height: 1px;
        margin: 4rem auto 0;
        background: rgba(233, 140, 121, 0.3);
        animation: pulse 2s ease-in-out infinite;
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }
    .why,
    .collaborations {
        padding: 6rem 1.5rem;
        background: #FFFFFF;
        text-align: center;
    }
    .why h2,
    .collaborations h2,
    .testimonials h2 {
        font-family: 'Cormorant Garamond', serif;
        font-size: 3.75rem;
        font-weight: 400;
        margin: 0 0 1.5rem;
    }
    .divider {
        width: 6rem;
        height: 1px;
        margin: 0 auto 5rem;
        background: rgba(10, 10, 10, 0.2);
    }
    .feature-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .feature {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
    }
    .feature-glyph {
        font-size: 2.5rem;
        color: rgba(106, 78, 66, 0.8);
    }
    .feature p {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.25rem;
        max-width: 240px;
        color: rgba(10, 10, 10, 0.8);
    }
    .marquee {
        overflow: hidden;
    }
    .marquee-track {
        display: flex;
        width: 200%;
        justify-content: space-around;
        align-items: center;
        gap: 2rem;
        animation: marquee 30s linear infinite;
    }
    @keyframes marquee {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    .collab-logo {
        height: 5rem;
        transition: transform 0.3s ease;
    }
    .collab-logo:hover {
        transform: scale(1.1);
    }
    .testimonials {
        padding: 6rem 1.5rem;
        background: #F4EFEA;
        border-top: 1px solid rgba(106, 78, 66, 0.05);
        text-align: center;
    }
    .eyebrow-muted {
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: rgba(106, 78, 66, 0.6);
        margin-bottom: 4rem;
    }
    .testimonial-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .video-card {
        position: relative;
        aspect-ratio: 9 / 16;
        background: #000000;
        border: 10px solid #FFFFFF;
        border-radius: 2.5rem;
        overflow: hidden;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        cursor: pointer;
        transition: transform 0.5s ease;
    }
    .video-card:hover {
        transform: scale(1.02);
    }
    .video-cover,
    .video-frame {
        width: 100%;
        height: 100%;
    }
    .video-cover {
        position: relative;
    }
    .video-cover img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .play-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .play-button {
        width: 5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        padding-left: 0.4rem;
        box-sizing: border-box;
        border: 4px solid #FFFFFF;
        border-radius: 9999px;
        background: #FF0000;
        color: #FFFFFF;
        font-size: 2rem;
        transition: transform 0.3s ease;
    }
    .play-button:hover {
        transform: scale(1.1);
    }
    .lead-form {
        padding: 3rem 1.5rem;
        background: #FFFFFF;
    }
    @media (max-width: 1024px) {
        .feature-grid,
        .testimonial-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .hero {
            padding: 8rem 1.5rem 5rem;
        }
        .hero-grid,
        .audience-grid {
            grid-template-columns: 1fr;
        }
        .hero-media {
            order: -1;
            height: 400px;
        }
        .hero h1 {
            font-size: 3rem;
        }
        .be-seen h2,
        .glow-text {
            font-size: 4rem;
        }
        .audience h2,
        .why h2,
        .collaborations h2,
        .testimonials h2 {
            font-size: 2.25rem;
        }
        .coming-soon {
            margin: 0 1rem;
        }
        .feature-grid,
        .testimonial-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
