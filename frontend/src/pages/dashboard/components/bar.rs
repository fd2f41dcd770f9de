use crate::{
    api::AttendanceRecord,
    pages::dashboard::utils::{
        bar_shape, BarShape, FILLER_WIDTH_PX, SEGMENT_GAP_PX, SEGMENT_WIDTH_PX,
    },
};
use leptos::*;

#[component]
pub fn DayBar(record: AttendanceRecord) -> impl IntoView {
    let bars = match bar_shape(&record) {
        BarShape::Filler(kind) => view! {
            <div
                class=format!("rounded-t-sm {}", kind.class())
                style=format!("width: {}px; height: {}px", FILLER_WIDTH_PX, kind.height())
            ></div>
        }
        .into_view(),
        BarShape::Segments(segments) => segments
            .into_iter()
            .map(|segment| {
                let gap = if segment.gap_after { SEGMENT_GAP_PX } else { 0 };
                view! {
                    <div
                        class="rounded-t-sm"
                        title=segment.category.label()
                        style=format!(
                            "width: {}px; height: {}px; background-color: {}; margin-right: {}px",
                            SEGMENT_WIDTH_PX, segment.height, segment.color, gap
                        )
                    ></div>
                }
            })
            .collect_view(),
    };

    view! {
        <div class="flex flex-col items-center justify-end flex-1 min-w-[20px]">
            <div class="flex items-end h-[140px]">{bars}</div>
            <span class="mt-2 text-[10px] text-gray-500 whitespace-nowrap">{record.date}</span>
        </div>
    }
}
