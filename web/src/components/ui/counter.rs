use leptos::prelude::*;

/// Local-state counter button. Lives on in the lobby as the "ready check"
/// demo widget; each click bumps the count, nothing leaves the component.
#[component]
pub fn Counter(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Sayaç");
    let (count, set_count) = signal(0u32);

    view! {
        <button
            type="button"
            class="text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            on:click=move |_| set_count.update(|count| *count += 1)
        >
            {label} ": " {move || count.get()}
        </button>
    }
}
