//! Image Combiner - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that sends two images to a remote
//! image-combiner function and shows the combined JPEG.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (form → UploadWorkflow)                  │
//! │  ├── PreviewSection (local previews)                        │
//! │  └── ResultSection (combined image + download link)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, ResultView, UploadError, etc.)
//! - [`validation`] - Presence and size checks
//! - [`workflow`] - The submit workflow and its transport/surface seams
//! - [`components`] - UI components
//! - [`services`] - Browser implementations of the seams

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod workflow;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    SelectedFile, PreviewSlot, Submission, SubmissionPayload, CombineRequest,
    // Result
    ResultArtifact, RemoteReply, ResultView,
    // Workflow
    WorkflowState, Outcome,
    // Errors
    UploadError, TransportError,
};

// Workflow
pub use validation::validate_selection;
pub use workflow::{CombineTransport, UploadSurface, UploadWorkflow};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and console logging, then mount the app.
pub fn start() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Image Combiner - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Image Combiner"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Display bindings shared by every submission; the last completion wins.
    let (preview1, set_preview1) = create_signal(None::<String>);
    let (preview2, set_preview2) = create_signal(None::<String>);
    let (result, set_result) = create_signal(ResultView::default());

    view! {
        <div class="container">
            <Hero/>

            <UploadSection
                set_previews=[set_preview1, set_preview2]
                set_result=set_result
            />

            <PreviewSection previews=[preview1, preview2]/>

            <ResultSection result=result/>
        </div>

        <Footer/>
    }
}
