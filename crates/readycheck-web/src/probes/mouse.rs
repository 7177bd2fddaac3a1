use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use readycheck_core::{MouseProbe, Point, ProbeKind, Region};
use web_sys::MouseEvent;

use crate::components::status::{CheckRow, TestStatus};

/// Event position relative to the test region, plus the region's size.
fn local_point(region_ref: NodeRef<Div>, e: &MouseEvent) -> Option<(Point, Region)> {
    let el = region_ref.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    let point = Point::new(
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
    );
    Some((point, Region::new(rect.width(), rect.height())))
}

fn detected(flag: bool) -> String {
    let text = if flag { "Detected" } else { "Not detected" };
    text.to_string()
}

fn marker_style(p: Point) -> String {
    format!("left: {}px; top: {}px;", p.x, p.y)
}

#[component]
pub fn MouseProbePanel() -> impl IntoView {
    let probe = RwSignal::new(MouseProbe::new());
    let region_ref = NodeRef::<Div>::new();

    let handle = window_event_listener(ev::scroll, move |_| probe.update(|p| p.scroll()));
    on_cleanup(move || handle.remove());

    let on_move = move |e: MouseEvent| {
        if let Some((point, region)) = local_point(region_ref, &e) {
            probe.update(|p| p.pointer_move(point, region));
        }
    };

    let on_click = move |e: MouseEvent| {
        if let Some((point, region)) = local_point(region_ref, &e) {
            probe.update(|p| {
                p.click(point, region);
            });
        }
    };

    let status = Signal::derive(move || probe.with(|p| p.result.status()));

    view! {
        <div class="probe mouse-probe">
            <h3>{ProbeKind::Mouse.title()}</h3>

            <div
                class="mouse-region"
                node_ref=region_ref
                on:mousemove=on_move
                on:mouseenter=move |_| probe.update(|p| p.enter())
                on:mouseleave=move |_| probe.update(|p| p.leave())
                on:click=on_click
            >
                <div class="region-hint">"Move and click your mouse in this area"</div>
                {move || probe.with(|p| p.cursor()).map(|c| view! {
                    <div class="cursor-marker" style=marker_style(c)></div>
                })}
                {move || probe.with(|p| {
                    p.clicks().iter().map(|c| view! {
                        <div class="click-marker" style=marker_style(*c)></div>
                    }).collect::<Vec<_>>()
                })}
            </div>

            <div class="checks">
                <CheckRow
                    label="Mouse movement"
                    ok=Signal::derive(move || probe.with(|p| p.has_moved()))
                    text=Signal::derive(move || detected(probe.with(|p| p.has_moved())))
                />
                <CheckRow
                    label="Mouse clicks"
                    ok=Signal::derive(move || probe.with(|p| !p.clicks().is_empty()))
                    text=Signal::derive(move || probe.with(|p| p.click_summary()))
                />
                <CheckRow
                    label="Scrolling"
                    ok=Signal::derive(move || probe.with(|p| p.has_scrolled()))
                    text=Signal::derive(move || detected(probe.with(|p| p.has_scrolled())))
                />
            </div>

            <TestStatus kind=ProbeKind::Mouse status=status />

            <div class="button-group">
                <button class="reset-btn" on:click=move |_| probe.update(|p| p.reset())>
                    "Reset Test"
                </button>
            </div>
        </div>
    }
}
