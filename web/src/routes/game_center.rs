//! The lobby: a tab bar over the static room grid and the live game list.
//! Rooms and tabs come from the compile-time catalog; the game list is paged
//! in from the backend.

use crate::app_lib::errors::AppError;
use crate::catalog::{DEFAULT_TAB, ROOM_CATALOG, RoomDescriptor, RoomKind, TAB_CATALOG};
use crate::components::{Alert, AlertKind, AppShell, Counter, Spinner};
use crate::features::games::{client, types::GameSummary};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn GameCenterPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(DEFAULT_TAB);

    let tabs = TAB_CATALOG
        .iter()
        .map(|tab| {
            let id = tab.id;
            view! {
                <button
                    type="button"
                    class="px-4 py-2 text-sm font-medium rounded-t-lg border-b-2 border-transparent text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200"
                    class:border-blue-600=move || active_tab.get() == id
                    class:text-blue-600=move || active_tab.get() == id
                    on:click=move |_| set_active_tab.set(id)
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Oyun Merkezi"</h1>

            <div class="mt-4 flex gap-2 border-b border-gray-200 dark:border-gray-800">{tabs}</div>

            <div class="mt-6">
                <Show when=move || active_tab.get() == "salonlar">
                    <RoomGrid />
                </Show>
                <Show when=move || active_tab.get() == "oyunlar">
                    <GameList />
                </Show>
            </div>

            <div class="mt-10 flex items-center gap-3">
                <Counter label="Hazırım" />
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    "Masaya oturmadan önce hazır olduğunu bildir."
                </span>
            </div>
        </AppShell>
    }
}

/// The static room grid. Tombala rooms open the tombala screen; the rest are
/// listed as occupied lobbies.
#[component]
fn RoomGrid() -> impl IntoView {
    let rooms = ROOM_CATALOG.iter().map(room_card).collect_view();

    view! { <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">{rooms}</div> }
}

fn room_card(room: &'static RoomDescriptor) -> impl IntoView {
    let icon = match room.kind {
        RoomKind::Tombala => "grid_on",
        RoomKind::Cards => "playing_cards",
        RoomKind::Tiles => "apps",
        RoomKind::Board => "casino",
    };
    let capacity = format!("{} kişilik", room.capacity);
    let playable = room.kind == RoomKind::Tombala;

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-800 dark:bg-gray-900">
            <div class="flex items-center gap-3">
                <span class="material-symbols-outlined text-3xl text-blue-600">{icon}</span>
                <div>
                    <p class="font-semibold text-gray-900 dark:text-white">{room.label}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{capacity}</p>
                </div>
            </div>
            <div class="mt-4">
                {if playable {
                    view! {
                        <A
                            href="/tombala"
                            {..}
                            class="inline-flex items-center text-sm font-medium text-blue-600 hover:underline"
                        >
                            "Masaya Otur"
                        </A>
                    }
                        .into_any()
                } else {
                    view! {
                        <span class="text-sm text-gray-400 dark:text-gray-500">"Yakında"</span>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// The game list, fetched once on mount. A 401 renders the sign-in prompt
/// instead of a raw error: the listing sits behind the session gate.
#[component]
fn GameList() -> impl IntoView {
    let (games, set_games) = signal(None::<Result<Vec<GameSummary>, AppError>>);

    spawn_local(async move {
        set_games.set(Some(client::fetch_games(None, None).await));
    });

    view! {
        {move || match games.get() {
            None => view! { <Spinner /> }.into_any(),
            Some(Err(err)) if err.status() == Some(401) => {
                view! {
                    <div class="space-y-3">
                        <Alert
                            kind=AlertKind::Info
                            message="Oyun listesini görmek için giriş yapmalısın.".to_string()
                        />
                        <A
                            href="/giris"
                            {..}
                            class="inline-flex items-center text-sm font-medium text-blue-600 hover:underline"
                        >
                            "Giriş Yap"
                        </A>
                    </div>
                }
                    .into_any()
            }
            Some(Err(err)) => {
                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
            }
            Some(Ok(games)) if games.is_empty() => {
                view! {
                    <Alert
                        kind=AlertKind::Info
                        message="Şu anda listelenecek oyun yok.".to_string()
                    />
                }
                    .into_any()
            }
            Some(Ok(games)) => {
                let items = games
                    .into_iter()
                    .map(|game| {
                        view! {
                            <li class="rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-800 dark:bg-gray-900">
                                <div class="flex items-baseline justify-between">
                                    <p class="font-semibold text-gray-900 dark:text-white">
                                        {game.name}
                                    </p>
                                    <span class="text-xs uppercase tracking-wide text-gray-400">
                                        {game.category}
                                    </span>
                                </div>
                                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                                    {game.description}
                                </p>
                                <p class="mt-2 text-xs text-gray-400">{game.players} " oyuncu"</p>
                            </li>
                        }
                    })
                    .collect_view();
                view! { <ul class="space-y-3">{items}</ul> }.into_any()
            }
        }}
    }
}
