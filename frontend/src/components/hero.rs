//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Image Combiner"</h1>
            <p class="subtitle">
                "Pick two images (2 MB max each). "
                "They are placed side by side and returned as a single JPEG."
            </p>
        </div>
    }
}
