use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Brand palette and base typography shared by every page.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            body {
                margin: 0;
                background: #F4EFEA;
                color: #0A0A0A;
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            a {
                color: inherit;
                text-decoration: none;
            }
            ::selection {
                background: #E98C79;
                color: #FFFFFF;
            }
            .services-page {
                display: block;
                background: #F9F8F6;
                color: #121212;
            }
            .reveal {
                will-change: opacity, transform;
            }
        "#)} />
    }
}
