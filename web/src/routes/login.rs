//! Sign-in screen. On success the session cookie is already set by the
//! response; only the public profile is kept in memory.

use crate::components::{Alert, AlertKind, AppShell};
use crate::features::auth::{client, state::use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match client::login(&username.get_untracked(), &password.get_untracked()).await {
                Ok(session) => {
                    auth.set_session(session);
                    navigate("/", Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-sm">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Giriş Yap"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="mt-4">
                        <Alert kind=AlertKind::Error message=error.get().unwrap_or_default() />
                    </div>
                </Show>

                <form class="mt-6 space-y-4" on:submit=submit>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                            "Kullanıcı adı"
                        </label>
                        <input
                            type="text"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900 dark:text-white">
                            "Parola"
                        </label>
                        <input
                            type="password"
                            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700"
                        class:opacity-70=move || busy.get()
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Giriş yapılıyor..." } else { "Giriş Yap" }}
                    </button>
                </form>
            </div>
        </AppShell>
    }
}
