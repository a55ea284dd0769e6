mod game_center;
mod login;
mod not_found;
mod tombala;

pub(crate) use game_center::GameCenterPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use tombala::TombalaPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=GameCenterPage />
            <Route path=path!("/giris") view=LoginPage />
            <Route path=path!("/tombala") view=TombalaPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
