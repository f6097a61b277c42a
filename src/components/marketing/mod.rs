pub mod app_bar;
pub mod coverage_map;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod highlights;
pub mod logo_collection;

use yew::prelude::*;

use app_bar::AppBar;
use coverage_map::CoverageMap;
use faq::Faq;
use features::Features;
use footer::Footer;
use hero::Hero;
use highlights::Highlights;
use logo_collection::LogoCollection;

#[function_component(MarketingPage)]
pub fn marketing_page() -> Html {
    html! {
        <>
            <AppBar />
            <Hero />
            <LogoCollection />
            <Features />
            <div class="divider"></div>
            <Highlights />
            <div class="divider"></div>
            <CoverageMap />
            <div class="divider"></div>
            <Faq />
            <Footer />
        </>
    }
}
