use yew::prelude::*;

use super::breadcrumb::Breadcrumb;
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::pages::PageKey;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub page: PageKey,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id="dashboard-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <Navbar page={props.page} />
                <Breadcrumb page={props.page} />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
            <Sidebar page={props.page} />
        </div>
    }
}
