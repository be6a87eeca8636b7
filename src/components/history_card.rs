//! History Card Component
//!
//! One diagnosis record: image (or filename placeholder), date, outcome
//! badge and confidence bar.

use leptos::prelude::*;

use crate::format;
use crate::models::HistoryEntry;

#[component]
pub fn HistoryCard(entry: HistoryEntry) -> impl IntoView {
    let date = format::long_date(&entry.created_at);
    let label = format::diagnosis_label(entry.is_coloboma);
    let badge_class = format::diagnosis_badge_class(entry.is_coloboma);
    let bar_class = format::confidence_bar_class(entry.is_coloboma);
    let bar_style = format::confidence_bar_style(entry.confidence);
    let confidence = format::confidence_text(entry.confidence);

    let image = match &entry.image_data {
        Some(data) => view! {
            <img
                class="scan-image"
                src=format!("data:image/jpeg;base64,{}", data)
                alt=entry.image_name.clone()
            />
        }
        .into_any(),
        // No image bytes: fall back to the filename, never an error.
        None => view! {
            <div class="scan-placeholder">
                <span>{entry.image_name.clone()}</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="history-card">
            <div class="scan-section">{image}</div>

            <div class="details-section">
                <div class="detail">
                    <p class="detail-label">"Date"</p>
                    <p class="detail-value">{date}</p>
                </div>

                <div class="detail">
                    <p class="detail-label">"Diagnosis Result"</p>
                    <span class=badge_class>{label}</span>
                </div>

                <div class="detail">
                    <p class="detail-label">"Confidence Level"</p>
                    <div class="confidence-row">
                        <p class="confidence-value">{confidence}"%"</p>
                        <div class="confidence-track">
                            <div class=bar_class style=bar_style></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
