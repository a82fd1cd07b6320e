use leptos::ev::PointerEvent;

use super::*;
use crate::color::{hex_to_hsl, hsl_to_hex, normalize_hex_input, Hsl, DEFAULT_COLOR, PRESET_COLORS};
use crate::drag::{use_pointer_drag, PointerPosition, SurfaceRect};
use crate::overlay::{apply_overlay_event, OverlayEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One choice in a [`Select`].
pub struct SelectOption {
    /// Value reported through `on_change`.
    pub value: String,
    /// Visible text.
    pub label: String,
    /// Disabled options cannot be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

fn select_key_event(key: &str, is_open: bool) -> Option<OverlayEvent> {
    match key {
        "Enter" | " " => Some(OverlayEvent::Trigger),
        "Escape" => Some(OverlayEvent::Close),
        "ArrowDown" if !is_open => Some(OverlayEvent::Open),
        _ => None,
    }
}

#[component]
/// Single-choice listbox with a button trigger.
///
/// Enter/Space toggle the list, Escape closes it, ArrowDown opens it. Disabled options ignore
/// clicks.
pub fn Select(
    options: Vec<SelectOption>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(default = "Select an option".into(), into)] placeholder: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let value = Controllable::new(value, default_value, on_change);
    let open = Controllable::new(None, false, None);
    let is_open = open.signal();
    let wrapper_ref = create_node_ref::<html::Div>();
    let options = store_value(options);
    let has_error = error_message.as_deref().is_some_and(|message| !message.is_empty());
    let helper = error_message.filter(|message| !message.is_empty()).or(helper_text);

    use_dismissible(
        is_open,
        wrapper_ref,
        DismissOptions::default(),
        Callback::new(move |reason: DismissReason| apply_overlay_event(open, reason.event())),
    );

    let selected_label = move || {
        let current = value.get();
        options.with_value(|options| {
            options
                .iter()
                .find(|option| option.value == current)
                .map(|option| option.label.clone())
        })
    };

    let choose = move |option: &SelectOption| {
        if option.disabled {
            return;
        }
        value.set(option.value.clone());
        apply_overlay_event(open, OverlayEvent::Close);
    };

    view! {
        <div
            node_ref=wrapper_ref
            class=merge_layout_class("ui-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-size=size.token()
            data-ui-state=if has_error { "error" } else { "default" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|text| view! {
                <label data-ui-slot="label" data-ui-required=bool_token(required)>{text}</label>
            })}
            <button
                type="button"
                data-ui-slot="trigger"
                aria-haspopup="listbox"
                aria-expanded=move || is_open.get().to_string()
                disabled=move || disabled.get()
                data-ui-selected=move || bool_token(is_open.get())
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        apply_overlay_event(open, OverlayEvent::Trigger);
                    }
                }
                on:keydown=move |ev| {
                    if disabled.get_untracked() {
                        return;
                    }
                    let Some(event) = select_key_event(&ev.key(), open.get_untracked()) else {
                        return;
                    };
                    if event != OverlayEvent::Close {
                        ev.prevent_default();
                    }
                    apply_overlay_event(open, event);
                }
            >
                {move || match selected_label() {
                    Some(text) => view! { <span data-ui-slot="value">{text}</span> }.into_view(),
                    None => view! {
                        <span data-ui-slot="placeholder">{placeholder.clone()}</span>
                    }
                    .into_view(),
                }}
                <span data-ui-slot="chevron"><Icon icon=IconName::ChevronDown size=size.icon_size() /></span>
            </button>
            <Show when=move || is_open.get()>
                <div role="listbox" data-ui-slot="listbox">
                    {move || {
                        let options = options.get_value();
                        if options.is_empty() {
                            return view! { <div data-ui-slot="empty">"No options available"</div> }.into_view();
                        }
                        options
                            .into_iter()
                            .map(|option| {
                                let is_selected = {
                                    let option_value = option.value.clone();
                                    move || value.get() == option_value
                                };
                                let is_selected_attr = is_selected.clone();
                                let option_disabled = option.disabled;
                                let label = option.label.clone();
                                view! {
                                    <button
                                        type="button"
                                        role="option"
                                        data-ui-slot="option"
                                        aria-selected=move || is_selected_attr().to_string()
                                        data-ui-selected=move || bool_token(is_selected())
                                        data-ui-disabled=bool_token(option_disabled)
                                        disabled=option_disabled
                                        on:click=move |_| choose(&option)
                                    >
                                        <span data-ui-slot="check"><Icon icon=IconName::Check size=IconSize::Sm /></span>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            {helper.map(|text| view! { <span data-ui-slot="helper">{text}</span> })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Numeric domain of a [`Slider`].
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl SliderRange {
    /// Builds a range, repairing unusable bounds with a warning.
    ///
    /// Reversed bounds are swapped, an empty range is widened by one step, and a non-positive
    /// step falls back to `1`.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let step = if step > 0.0 && step.is_finite() {
            step
        } else {
            logging::warn!("slider step {step} is not positive; using 1");
            1.0
        };
        let (min, max) = if max < min {
            logging::warn!("slider bounds {min}..{max} are reversed; swapping");
            (max, min)
        } else {
            (min, max)
        };
        let max = if max == min {
            logging::warn!("slider range {min}..{max} is empty; widening by one step");
            min + step
        } else {
            max
        };
        Self { min, max, step }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step between values.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamps `value` into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` along the track, in percent.
    pub fn percent(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min) / (self.max - self.min) * 100.0
    }

    /// Value under a track fraction (`0.0` = left edge), snapped to the step grid from `min`.
    pub fn value_at_ratio(&self, ratio: f64) -> f64 {
        let raw = ratio.clamp(0.0, 1.0) * (self.max - self.min);
        self.clamp(self.min + (raw / self.step).round() * self.step)
    }

    /// Value after a keyboard press, or `None` for keys the slider ignores.
    pub fn apply_key(&self, current: f64, key: &str) -> Option<f64> {
        match key {
            "ArrowRight" | "ArrowUp" => Some(self.clamp(current + self.step)),
            "ArrowLeft" | "ArrowDown" => Some(self.clamp(current - self.step)),
            "Home" => Some(self.min),
            "End" => Some(self.max),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Labelled tick under a slider track.
pub struct SliderMark {
    /// Position on the value scale.
    pub value: f64,
    /// Text; the formatted value is shown when absent.
    pub label: Option<String>,
}

impl SliderMark {
    /// Mark showing its formatted value.
    pub fn at(value: f64) -> Self {
        Self { value, label: None }
    }

    /// Mark with custom text.
    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// Applies a key press to `value` and reports the new value to `on_change_end`.
///
/// Returns `false` for keys the slider ignores. The reported value is the one requested, even when
/// the caller owns `value` and has not applied it yet.
fn commit_slider_key(
    range: SliderRange,
    value: Controllable<f64>,
    key: &str,
    on_change_end: Option<Callback<f64>>,
) -> bool {
    let Some(next) = range.apply_key(value.get_untracked(), key) else {
        return false;
    };
    value.set(next);
    if let Some(on_change_end) = on_change_end {
        on_change_end.call(next);
    }
    true
}

#[component]
/// Range slider driven by pointer drag on the track or by the keyboard on the thumb.
///
/// `on_change` fires for every intermediate value; `on_change_end` fires once a drag ends and
/// after every key press.
pub fn Slider(
    #[prop(optional, into)] value: Option<MaybeSignal<f64>>,
    #[prop(optional)] default_value: f64,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = true)] show_value: bool,
    #[prop(optional)] format_value: Option<Callback<f64, String>>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
    #[prop(optional)] on_change_end: Option<Callback<f64>>,
    #[prop(optional)] marks: Vec<SliderMark>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let range = SliderRange::new(min, max, step);
    let value = Controllable::new(value, range.clamp(default_value), on_change);
    let track_ref = create_node_ref::<html::Div>();
    let format = move |value: f64| match format_value.as_ref() {
        Some(format_value) => format_value.call(value),
        None => value.to_string(),
    };
    let percent = Signal::derive(move || range.percent(value.get()));

    let value_at = move |point: PointerPosition| {
        track_ref.get_untracked().map(|track| {
            let (ratio, _) = SurfaceRect::of(&track).ratios(point);
            range.value_at_ratio(ratio)
        })
    };

    let move_to = move |point: PointerPosition| {
        if let Some(next) = value_at(point) {
            if next != value.get_untracked() {
                value.set(next);
            }
        }
    };

    let dragging = use_pointer_drag(
        Callback::new(move_to),
        Callback::new(move |_: PointerPosition| {
            if let Some(on_change_end) = on_change_end.as_ref() {
                on_change_end.call(value.get_untracked());
            }
        }),
    );

    let has_header = label.is_some() || show_value;
    let aria_label = label.clone();

    view! {
        <div
            class=merge_layout_class("ui-slider", layout_class)
            data-ui-primitive="true"
            data-ui-kind="slider"
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-state=move || if dragging.get() { "dragging" } else { "idle" }
        >
            {has_header.then(|| view! {
                <div data-ui-slot="label">
                    {label.map(|text| view! { <span>{text}</span> })}
                    {show_value.then(|| view! {
                        <span data-ui-slot="value">{move || format(value.get())}</span>
                    })}
                </div>
            })}
            <div
                data-ui-slot="control"
                on:pointerdown=move |ev: PointerEvent| {
                    if disabled.get_untracked() {
                        return;
                    }
                    ev.prevent_default();
                    move_to(PointerPosition::of(&ev));
                    dragging.set(true);
                }
            >
                <div node_ref=track_ref data-ui-slot="track">
                    <div data-ui-slot="fill" style:width=move || format!("{}%", percent.get())></div>
                </div>
                <div
                    data-ui-slot="thumb"
                    role="slider"
                    tabindex=move || if disabled.get() { -1 } else { 0 }
                    aria-valuenow=move || value.get()
                    aria-valuemin=range.min()
                    aria-valuemax=range.max()
                    aria-label=aria_label
                    style:left=move || format!("{}%", percent.get())
                    on:keydown=move |ev| {
                        if disabled.get_untracked() {
                            return;
                        }
                        if commit_slider_key(range, value, &ev.key(), on_change_end) {
                            ev.prevent_default();
                        }
                    }
                ></div>
            </div>
            {(!marks.is_empty()).then(|| view! {
                <div data-ui-slot="marks">
                    {marks
                        .into_iter()
                        .map(|mark| {
                            let text = mark.label.unwrap_or_else(|| format(mark.value));
                            view! {
                                <span data-ui-slot="mark" style:left=format!("{}%", range.percent(mark.value))>
                                    {text}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorSurface {
    Saturation,
    Hue,
}

/// Saturation and lightness under a point in the saturation box (x = saturation, y = darkness).
fn saturation_at(hue: f64, (x, y): (f64, f64)) -> Hsl {
    Hsl {
        h: hue,
        s: x * 100.0,
        l: 100.0 - y * 100.0,
    }
}

#[component]
/// Hex color picker with a saturation/lightness box, hue strip, hex field, and preset swatches.
///
/// Hex input is accepted only once it forms a full `#RRGGBB` value; partial text is ignored.
pub fn ColorPicker(
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(default = DEFAULT_COLOR.into(), into)] default_value: String,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = true)] show_input: bool,
    #[prop(default = PRESET_COLORS.iter().map(|color| color.to_string()).collect())]
    presets: Vec<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let color = Controllable::new(value, default_value, on_change);
    let hsl = create_rw_signal(hex_to_hsl(&color.get_untracked()));
    let open = Controllable::new(None, false, None);
    let is_open = open.signal();
    let wrapper_ref = create_node_ref::<html::Div>();
    let saturation_ref = create_node_ref::<html::Div>();
    let hue_ref = create_node_ref::<html::Div>();
    let surface = store_value(ColorSurface::Saturation);
    let presets = store_value(presets);

    // Keep the handles in step with outside value changes without snapping hue on echoes.
    create_effect(move |_| {
        let current = color.get();
        if normalize_hex_input(&current).is_some()
            && hsl_to_hex(hsl.get_untracked()) != current.to_ascii_lowercase()
        {
            hsl.set(hex_to_hsl(&current));
        }
    });

    use_dismissible(
        is_open,
        wrapper_ref,
        DismissOptions::default(),
        Callback::new(move |reason: DismissReason| apply_overlay_event(open, reason.event())),
    );

    let update_hsl = move |next: Hsl| {
        hsl.set(next);
        color.set(hsl_to_hex(next));
    };

    let set_hex = move |hex: String| {
        hsl.set(hex_to_hsl(&hex));
        color.set(hex);
    };

    let drag_to = move |point: PointerPosition| {
        let surface = surface.get_value();
        let node = match surface {
            ColorSurface::Saturation => saturation_ref.get_untracked(),
            ColorSurface::Hue => hue_ref.get_untracked(),
        };
        let Some(node) = node else {
            return;
        };
        let ratios = SurfaceRect::of(&node).ratios(point);
        let current = hsl.get_untracked();
        let next = match surface {
            ColorSurface::Saturation => saturation_at(current.h, ratios),
            ColorSurface::Hue => Hsl {
                h: ratios.0 * 360.0,
                ..current
            },
        };
        update_hsl(next);
    };

    let dragging = use_pointer_drag(
        Callback::new(drag_to),
        Callback::new(|_: PointerPosition| {}),
    );

    let start_drag = move |target: ColorSurface, ev: PointerEvent| {
        ev.prevent_default();
        surface.set_value(target);
        drag_to(PointerPosition::of(&ev));
        dragging.set(true);
    };

    view! {
        <div
            node_ref=wrapper_ref
            class=merge_layout_class("ui-color-picker", layout_class)
            data-ui-primitive="true"
            data-ui-kind="color-picker"
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
        >
            {label.map(|text| view! { <label data-ui-slot="label">{text}</label> })}
            <button
                type="button"
                data-ui-slot="trigger"
                aria-haspopup="dialog"
                aria-expanded=move || is_open.get().to_string()
                disabled=move || disabled.get()
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        apply_overlay_event(open, OverlayEvent::Trigger);
                    }
                }
            >
                <span data-ui-slot="swatch" style:background-color=move || color.get()></span>
                <span data-ui-slot="color-value">{move || color.get().to_uppercase()}</span>
            </button>
            <Show when=move || is_open.get()>
                <div data-ui-slot="picker" role="dialog">
                    <div
                        node_ref=saturation_ref
                        data-ui-slot="saturation"
                        style:background-color=move || hsl_to_hex(hsl.get().pure_hue())
                        on:pointerdown=move |ev: PointerEvent| start_drag(ColorSurface::Saturation, ev)
                    >
                        <div data-ui-slot="saturation-gradient"></div>
                        <div data-ui-slot="lightness-gradient"></div>
                        <div
                            data-ui-slot="saturation-handle"
                            style:left=move || format!("{}%", hsl.get().s)
                            style:top=move || format!("{}%", 100.0 - hsl.get().l)
                            style:background-color=move || color.get()
                        ></div>
                    </div>
                    <div
                        node_ref=hue_ref
                        data-ui-slot="hue"
                        on:pointerdown=move |ev: PointerEvent| start_drag(ColorSurface::Hue, ev)
                    >
                        <div
                            data-ui-slot="hue-handle"
                            style:left=move || format!("{}%", hsl.get().h / 360.0 * 100.0)
                        ></div>
                    </div>
                    {show_input.then(|| view! {
                        <div data-ui-slot="input-row">
                            <input
                                type="text"
                                data-ui-slot="hex-input"
                                maxlength="7"
                                aria-label="Hex color"
                                prop:value=move || color.get()
                                on:input=move |ev| {
                                    let Some(hex) = normalize_hex_input(&event_target_value(&ev)) else {
                                        return;
                                    };
                                    match color.set_reconciled(hex.clone()) {
                                        Some(shown) => {
                                            event_target::<web_sys::HtmlInputElement>(&ev).set_value(&shown);
                                        }
                                        None => hsl.set(hex_to_hsl(&hex)),
                                    }
                                }
                            />
                        </div>
                    })}
                    {move || {
                        let presets = presets.get_value();
                        (!presets.is_empty()).then(|| view! {
                            <div data-ui-slot="presets">
                                {presets
                                    .into_iter()
                                    .map(|preset| {
                                        let swatch = preset.clone();
                                        view! {
                                            <button
                                                type="button"
                                                data-ui-slot="preset"
                                                aria-label=preset.to_uppercase()
                                                style:background-color=swatch
                                                on:click=move |_| set_hex(preset.clone())
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        })
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arrow_keys_move_by_exactly_one_step() {
        let range = SliderRange::new(0.0, 100.0, 10.0);
        assert_eq!(range.apply_key(50.0, "ArrowRight"), Some(60.0));
        assert_eq!(range.apply_key(50.0, "ArrowUp"), Some(60.0));
        assert_eq!(range.apply_key(50.0, "ArrowLeft"), Some(40.0));
        assert_eq!(range.apply_key(50.0, "ArrowDown"), Some(40.0));
        assert_eq!(range.apply_key(50.0, "Tab"), None);
    }

    #[test]
    fn keys_clamp_at_bounds() {
        let range = SliderRange::new(0.0, 100.0, 10.0);
        assert_eq!(range.apply_key(95.0, "ArrowRight"), Some(100.0));
        assert_eq!(range.apply_key(5.0, "ArrowLeft"), Some(0.0));
        assert_eq!(range.apply_key(42.0, "Home"), Some(0.0));
        assert_eq!(range.apply_key(42.0, "End"), Some(100.0));
    }

    #[test]
    fn drag_ratio_snaps_from_min() {
        let range = SliderRange::new(5.0, 25.0, 10.0);
        assert_eq!(range.value_at_ratio(0.0), 5.0);
        assert_eq!(range.value_at_ratio(0.2), 5.0);
        assert_eq!(range.value_at_ratio(0.4), 15.0);
        assert_eq!(range.value_at_ratio(0.6), 15.0);
        assert_eq!(range.value_at_ratio(1.0), 25.0);
        assert_eq!(range.value_at_ratio(3.0), 25.0);
    }

    #[test]
    fn controlled_key_press_reports_requested_value() {
        let runtime = create_runtime();
        let changes = create_rw_signal(Vec::<f64>::new());
        let ends = create_rw_signal(Vec::<f64>::new());
        let range = SliderRange::new(0.0, 100.0, 10.0);
        let value = Controllable::new(
            Some(MaybeSignal::Static(50.0)),
            0.0,
            Some(Callback::new(move |next| changes.update(|calls| calls.push(next)))),
        );
        let on_change_end = Some(Callback::new(move |next| ends.update(|calls| calls.push(next))));

        assert!(commit_slider_key(range, value, "ArrowRight", on_change_end));
        assert!(!commit_slider_key(range, value, "Tab", on_change_end));

        assert_eq!(value.get_untracked(), 50.0);
        assert_eq!(changes.get_untracked(), vec![60.0]);
        assert_eq!(ends.get_untracked(), vec![60.0]);
        runtime.dispose();
    }

    #[test]
    fn uncontrolled_key_press_moves_and_reports() {
        let runtime = create_runtime();
        let ends = create_rw_signal(Vec::<f64>::new());
        let range = SliderRange::new(0.0, 100.0, 10.0);
        let value = Controllable::new(None, 50.0, None);
        let on_change_end = Some(Callback::new(move |next| ends.update(|calls| calls.push(next))));

        commit_slider_key(range, value, "ArrowLeft", on_change_end);
        commit_slider_key(range, value, "End", on_change_end);

        assert_eq!(value.get_untracked(), 100.0);
        assert_eq!(ends.get_untracked(), vec![40.0, 100.0]);
        runtime.dispose();
    }

    #[test]
    fn percent_is_clamped() {
        let range = SliderRange::default();
        assert_eq!(range.percent(25.0), 25.0);
        assert_eq!(range.percent(-10.0), 0.0);
        assert_eq!(range.percent(250.0), 100.0);
    }

    #[test]
    fn unusable_ranges_are_repaired() {
        let reversed = SliderRange::new(10.0, 0.0, 2.0);
        assert_eq!((reversed.min(), reversed.max()), (0.0, 10.0));

        let empty = SliderRange::new(3.0, 3.0, 0.5);
        assert_eq!((empty.min(), empty.max()), (3.0, 3.5));

        let bad_step = SliderRange::new(0.0, 10.0, 0.0);
        assert_eq!(bad_step.step(), 1.0);
        assert_eq!(SliderRange::new(0.0, 10.0, f64::NAN).step(), 1.0);
    }

    #[test]
    fn select_keys_map_to_overlay_events() {
        assert_eq!(select_key_event("Enter", false), Some(OverlayEvent::Trigger));
        assert_eq!(select_key_event(" ", true), Some(OverlayEvent::Trigger));
        assert_eq!(select_key_event("Escape", true), Some(OverlayEvent::Close));
        assert_eq!(select_key_event("ArrowDown", false), Some(OverlayEvent::Open));
        assert_eq!(select_key_event("ArrowDown", true), None);
        assert_eq!(select_key_event("a", false), None);
    }

    #[test]
    fn saturation_box_maps_corners() {
        assert_eq!(saturation_at(200.0, (0.0, 0.0)), Hsl { h: 200.0, s: 0.0, l: 100.0 });
        assert_eq!(saturation_at(200.0, (1.0, 1.0)), Hsl { h: 200.0, s: 100.0, l: 0.0 });
    }
}
