//! Shared layout wrapper: sidebar plus content container. The sidebar is only
//! rendered on wide viewports; the media-query hook keeps that decision
//! reactive to window changes rather than a one-time check.

use crate::components::layout::Sidebar;
use crate::hooks::use_media_query;
use leptos::prelude::*;

/// Wraps routes with the sidebar and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let is_wide = use_media_query("(min-width: 768px)");

    view! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-950">
            <Show when=move || is_wide.get()>
                <Sidebar />
            </Show>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
