use log::Level;

pub const WHATSAPP_URL: &str = "https://wa.me/971558943382";
pub const CONTACT_MAILTO: &str = "mailto:Verinmedia@gmail.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/verin.media/";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@VerinMedia";

pub const FILLOUT_SCRIPT_URL: &str = "https://server.fillout.com/embed/v1/";
pub const FILLOUT_FORM_ID: &str = "rUhR5GkDNQus";

const VIMEO_PLAYER_URL: &str = "https://player.vimeo.com/video";

pub fn vimeo_player_url(video_id: &str) -> String {
    format!("{}/{}?autoplay=1&muted=0", VIMEO_PLAYER_URL, video_id)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vimeo_url_autoplays_with_sound() {
        assert_eq!(
            vimeo_player_url("1148258886"),
            "https://player.vimeo.com/video/1148258886?autoplay=1&muted=0"
        );
    }

    #[test]
    fn contact_links_are_external() {
        for link in [WHATSAPP_URL, CONTACT_MAILTO, INSTAGRAM_URL, YOUTUBE_URL] {
            assert!(crate::navigation::is_external(link), "{link}");
        }
    }
}
