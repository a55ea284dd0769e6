//! Side navigation for the portal. The header toggles the link list open and
//! closed; the icon tracks the state.

use crate::features::auth::{client, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let (open, set_open) = signal(true);
    let auth = use_auth();
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <aside class="w-64 flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            // Header: title plus the open/closed toggle.
            <div class="flex items-center justify-between px-4 py-4 border-b border-gray-100 dark:border-gray-800">
                <span class="font-semibold text-gray-900 dark:text-white">"Oyun Merkezi"</span>
                <button
                    type="button"
                    class="inline-flex items-center justify-center w-8 h-8 text-gray-500 rounded-lg hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-700"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| set_open.update(|open| *open = !*open)
                >
                    <span class="material-symbols-outlined text-xl">
                        {move || if open.get() { "menu_open" } else { "menu" }}
                    </span>
                </button>
            </div>

            <nav class="flex-1 px-4 py-6 space-y-1" class:hidden=move || !open.get()>
                <SidebarLink
                    target="/"
                    icon="casino"
                    label="Salonlar"
                    active=move || pathname() == "/"
                />
                <SidebarLink
                    target="/tombala"
                    icon="grid_on"
                    label="Tombala"
                    active=move || pathname().starts_with("/tombala")
                />
                <Show when=move || !auth.is_authenticated.get()>
                    <SidebarLink
                        target="/giris"
                        icon="login"
                        label="Giriş"
                        active=move || pathname() == "/giris"
                    />
                </Show>
                <Show when=move || auth.is_authenticated.get()>
                    <button
                        type="button"
                        class="group flex w-full items-center px-2 py-2 text-sm font-medium rounded-md text-gray-600 hover:bg-gray-50 dark:text-gray-300 dark:hover:bg-gray-800"
                        on:click=move |_| {
                            spawn_local(async move {
                                let _ = client::logout().await;
                                auth.clear_session();
                            });
                        }
                    >
                        <span class="material-symbols-outlined mr-3 text-xl">"logout"</span>
                        "Çıkış"
                    </button>
                </Show>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink<F>(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: F,
) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let active_text = active.clone();

    view! {
        <A
            href=move || target.to_string()
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors text-gray-600 hover:bg-gray-50 dark:text-gray-300 dark:hover:bg-gray-800"
            class:text-blue-600=move || active_text()
            class:bg-blue-50=move || active()
        >
            <span class="material-symbols-outlined mr-3 text-xl">{icon}</span>
            {label}
        </A>
    }
}
