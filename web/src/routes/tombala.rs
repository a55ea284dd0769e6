//! The tombala screen: renders a generated card and lets the player mark
//! numbers as they are called. Marking is purely local state; the card itself
//! is deterministic per seed, so "Yeni Kart" just advances the seed.

use crate::components::AppShell;
use crate::tombala::{Card, NUMBERS_PER_CARD};
use leptos::prelude::*;
use std::collections::HashSet;

fn initial_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn TombalaPage() -> impl IntoView {
    let (seed, set_seed) = signal(initial_seed());
    let marked = RwSignal::new(HashSet::<u8>::new());
    let card = Memo::new(move |_| Card::generate(seed.get()));

    let new_card = move |_| {
        set_seed.update(|seed| *seed = seed.wrapping_add(1));
        marked.set(HashSet::new());
    };

    view! {
        <AppShell>
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Tombala"</h1>
                <button
                    type="button"
                    class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-blue-600 dark:hover:bg-blue-700"
                    on:click=new_card
                >
                    "Yeni Kart"
                </button>
            </div>

            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">
                "Okunan sayılara dokunarak işaretle. Bir satırı tamamlayınca çinko!"
            </p>

            <div class="mt-6 space-y-1">
                {move || {
                    let card = card.get();
                    card.rows()
                        .iter()
                        .map(|row| {
                            let cells = row
                                .iter()
                                .map(|cell| match *cell {
                                    Some(number) => {
                                        view! {
                                            <button
                                                type="button"
                                                class="h-12 rounded-md border border-gray-300 text-sm font-semibold text-gray-900 dark:border-gray-700 dark:text-white"
                                                class:bg-amber-300=move || {
                                                    marked.get().contains(&number)
                                                }
                                                class:line-through=move || {
                                                    marked.get().contains(&number)
                                                }
                                                on:click=move |_| {
                                                    marked
                                                        .update(|set| {
                                                            if !set.remove(&number) {
                                                                set.insert(number);
                                                            }
                                                        });
                                                }
                                            >
                                                {number}
                                            </button>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <div class="h-12 rounded-md bg-gray-100 dark:bg-gray-800"></div>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect_view();
                            view! { <div class="grid grid-cols-9 gap-1">{cells}</div> }
                        })
                        .collect_view()
                }}
            </div>

            <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                {move || format!("İşaretli: {} / {}", marked.get().len(), NUMBERS_PER_CARD)}
            </p>
        </AppShell>
    }
}
