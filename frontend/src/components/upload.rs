//! Upload form: two file inputs and the submit handler.
//!
//! Validation and previews run synchronously inside the submit event;
//! only the request itself is spawned.

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::*;
use web_sys::File;

use crate::config::{CombinerConfig, FORM_ID, IMAGE_FIELDS};
use crate::services::{HttpCombineClient, SignalSurface};
use crate::types::{ResultView, WorkflowState};
use crate::workflow::UploadWorkflow;

#[component]
pub fn UploadSection(
    set_previews: [WriteSignal<Option<String>>; 2],
    set_result: WriteSignal<ResultView>,
) -> impl IntoView {
    let (state, set_state) = create_signal(WorkflowState::Idle);
    let image1_ref = create_node_ref::<Input>();
    let image2_ref = create_node_ref::<Input>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let surface = SignalSurface::new(set_previews, set_result, set_state);
        let workflow = UploadWorkflow::new(CombinerConfig::default(), HttpCombineClient::new(), surface);

        // Rejections have already been reported by the workflow.
        let Ok(submission) = workflow.prepare(selected_file(image1_ref), selected_file(image2_ref)) else {
            return;
        };

        // Overlapping submissions are not guarded; the last reply to land wins.
        spawn_local(async move {
            workflow.send(submission).await;
        });
    };

    let [first_field, second_field] = IMAGE_FIELDS;

    view! {
        <form id=FORM_ID class="upload-section" on:submit=on_submit>
            <div class="upload-field">
                <label for=first_field>"First image"</label>
                <input
                    type="file"
                    id=first_field
                    name=first_field
                    accept="image/*"
                    node_ref=image1_ref
                />
            </div>
            <div class="upload-field">
                <label for=second_field>"Second image"</label>
                <input
                    type="file"
                    id=second_field
                    name=second_field
                    accept="image/*"
                    node_ref=image2_ref
                />
            </div>

            <button type="submit" class="upload-button">"Combine Images"</button>

            <div class="upload-hint">{move || status_text(state.get())}</div>
        </form>
    }
}

/// First file of an input, if the user picked one.
fn selected_file(input: NodeRef<Input>) -> Option<File> {
    input.get()?.files()?.get(0)
}

fn status_text(state: WorkflowState) -> &'static str {
    match state {
        WorkflowState::Submitting => "⏳ Combining images...",
        WorkflowState::Succeeded => "✅ Images combined",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_while_busy_or_done() {
        assert_eq!(status_text(WorkflowState::Idle), "");
        assert_eq!(status_text(WorkflowState::Rejected), "");
        assert_eq!(status_text(WorkflowState::Submitting), "⏳ Combining images...");
        assert_eq!(status_text(WorkflowState::Succeeded), "✅ Images combined");
    }
}
