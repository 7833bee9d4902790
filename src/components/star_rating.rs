//! Star Rating Component

use leptos::prelude::*;

use crate::display::filled_stars;

/// Five stars, `floor(rating)` of them filled, followed by the number
#[component]
pub fn StarRating(rating: f32) -> impl IntoView {
    let filled = filled_stars(rating);

    view! {
        <div class="star-rating" title=format!("{:.1} out of 5", rating)>
            {(0..5)
                .map(|i| {
                    let class = if i < filled { "star filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
            <span class="star-value">{format!("({:.1})", rating)}</span>
        </div>
    }
}
