use leptos::ev;
use leptos::prelude::*;
use readycheck_core::{KeyCap, KeyboardProbe, ProbeKind, ARROW_KEYS, KEYBOARD_ROWS};

use crate::components::status::TestStatus;

fn key_cap(cap: KeyCap, probe: RwSignal<KeyboardProbe>) -> impl IntoView {
    let lit = move || probe.with(|p| p.is_pressed(cap.label));
    let style = cap
        .cell
        .map(|(column, row)| format!("grid-column: {}; grid-row: {};", column + 1, row + 1))
        .unwrap_or_default();
    view! {
        <div
            class=move || if lit() {
                format!("{} lit", cap.width.css_class())
            } else {
                cap.width.css_class().to_string()
            }
            style=style
        >
            {cap.label}
        </div>
    }
}

#[component]
pub fn KeyboardProbePanel() -> impl IntoView {
    let probe = RwSignal::new(KeyboardProbe::new());

    let handle = window_event_listener(ev::keydown, move |e| {
        e.prevent_default();
        let key = e.key();
        probe.update(|p| {
            p.press(&key);
        });
    });
    on_cleanup(move || handle.remove());

    let status = Signal::derive(move || probe.with(|p| p.result.status()));

    view! {
        <div class="probe keyboard-probe">
            <h3>{ProbeKind::Keyboard.title()}</h3>
            <p class="hint">"Press at least 5 different keys on your keyboard"</p>

            <div class="virtual-keyboard">
                {KEYBOARD_ROWS.iter().map(|row| view! {
                    <div class="key-row">
                        {row.iter().map(|cap| key_cap(*cap, probe)).collect::<Vec<_>>()}
                    </div>
                }).collect::<Vec<_>>()}
                <div class="arrow-cluster">
                    {ARROW_KEYS.iter().map(|cap| key_cap(*cap, probe)).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="pressed-keys">
                <h4>"Keys Pressed"</h4>
                {move || probe.with(|p| {
                    if p.pressed().is_empty() {
                        view! { <p class="placeholder">"No keys pressed yet"</p> }.into_any()
                    } else {
                        view! {
                            <div class="pressed-list">
                                {p.pressed().iter().map(|k| view! {
                                    <span class="pressed-key">{k.clone()}</span>
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                })}
            </div>

            <TestStatus kind=ProbeKind::Keyboard status=status />

            <div class="button-group">
                <button class="reset-btn" on:click=move |_| probe.update(|p| p.reset())>
                    "Reset Test"
                </button>
            </div>
        </div>
    }
}
