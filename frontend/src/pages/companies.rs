use yew::prelude::*;

use crate::components::packages::{GlowSide, PackageGrid, PackagesCta, PackagesHeader};
use crate::content::COMPANY_PACKAGES;
use crate::hooks::use_scroll_reset;

#[function_component(Companies)]
pub fn companies() -> Html {
    use_scroll_reset();

    html! {
        <div class="services-page">
            <PackagesHeader
                title="Services for Companies"
                intro="Build authority, attract talent, and define your market position with our premium corporate storytelling packages."
                glow={GlowSide::Left}
            />
            <PackageGrid packages={COMPANY_PACKAGES} columns={3} />
            <PackagesCta blurb="Partner with Verin Media to craft a corporate narrative that drives growth and impact." />
        </div>
    }
}
