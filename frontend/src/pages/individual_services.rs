use yew::prelude::*;

use crate::components::packages::{GlowSide, PackageGrid, PackagesCta, PackagesHeader};
use crate::content::INDIVIDUAL_PACKAGES;
use crate::hooks::use_scroll_reset;

#[function_component(IndividualServices)]
pub fn individual_services() -> Html {
    use_scroll_reset();

    html! {
        <div class="services-page">
            <PackagesHeader
                title="Services for Individuals"
                intro="Elevate your personal brand with our suite of premium services designed to craft your narrative and amplify your presence."
                glow={GlowSide::Right}
            />
            <PackageGrid packages={INDIVIDUAL_PACKAGES} columns={2} />
            <PackagesCta blurb="Select the services that match your goals and let's start building your legacy." />
        </div>
    }
}
