use yew::prelude::*;

use crate::config;
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub testimonial: Testimonial,
}

/// Thumbnail that turns into the Vimeo player once clicked.
#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    let playing = use_state(|| false);
    let testimonial = props.testimonial;

    let onclick = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("loading testimonial video {}", testimonial.id);
            playing.set(true);
        })
    };

    html! {
        <div class="video-card">
            if *playing {
                <iframe
                    src={config::vimeo_player_url(testimonial.vimeo_id)}
                    width="100%"
                    height="100%"
                    frameborder="0"
                    allow="autoplay; fullscreen; picture-in-picture"
                    allowfullscreen=true
                    class="video-frame"
                ></iframe>
            } else {
                <div class="video-cover" {onclick}>
                    <img src={testimonial.thumbnail} alt="Testimonial Cover" loading="lazy" />
                    <div class="play-overlay">
                        <div class="play-button">{"▶"}</div>
                    </div>
                </div>
            }
        </div>
    }
}
