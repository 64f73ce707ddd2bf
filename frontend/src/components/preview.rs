//! Local previews of the two selected images.

use leptos::*;

use crate::config::PREVIEW_IDS;

#[component]
pub fn PreviewSection(previews: [ReadSignal<Option<String>>; 2]) -> impl IntoView {
    let [first, second] = previews;
    let [first_id, second_id] = PREVIEW_IDS;

    view! {
        <div class="preview-section">
            <img
                id=first_id
                class="image-preview"
                class:hidden=move || first.with(Option::is_none)
                src=move || first.get()
                alt="First image preview"
            />
            <img
                id=second_id
                class="image-preview"
                class:hidden=move || second.with(Option::is_none)
                src=move || second.get()
                alt="Second image preview"
            />
        </div>
    }
}
