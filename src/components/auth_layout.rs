use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Centers whichever nested auth route is active.
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-screen bg-black">
            <Outlet />
        </div>
    }
}
