//! Combined image and its download link.

use leptos::*;

use crate::config::{COMBINED_IMAGE_ID, DOWNLOAD_LINK_ID};
use crate::types::ResultView;

#[component]
pub fn ResultSection(result: ReadSignal<ResultView>) -> impl IntoView {
    view! {
        <div class="result-section">
            <img
                id=COMBINED_IMAGE_ID
                class="combined-image"
                src=move || result.with(|view| view.image_src().map(str::to_string))
                alt="Combined image"
            />
            <a
                id=DOWNLOAD_LINK_ID
                class="btn btn-primary"
                href=move || result.with(|view| view.download_href().map(str::to_string))
                download=move || result.with(|view| view.download_name())
                style:display=move || {
                    if result.with(ResultView::is_download_visible) { "block" } else { "none" }
                }
            >
                "Download combined image"
            </a>
        </div>
    }
}
