use leptos::prelude::*;
use statemap_shared::callouts::CalloutLayout;
use statemap_shared::{ElementKind, PinMarker, PointerInput};
use web_sys::PointerEvent;

use crate::app::WidgetContext;
use crate::geo::StateShape;

fn pointer_position(ev: &PointerEvent) -> (f64, f64) {
    (ev.client_x() as f64, ev.client_y() as f64)
}

/// Pointer handlers shared by state polygons and callout labels.
fn bind_pointer(
    ctx: WidgetContext,
    kind: ElementKind,
    fips_id: String,
) -> (
    impl Fn(PointerEvent) + Send + Sync + 'static,
    impl Fn(PointerEvent) + Send + Sync + 'static,
    impl Fn(PointerEvent) + Send + Sync + 'static,
    impl Fn(web_sys::MouseEvent) + Send + Sync + 'static,
) {
    let enter_id = fips_id.clone();
    let move_id = fips_id.clone();
    let leave_id = fips_id.clone();
    let click_id = fips_id;
    (
        move |ev: PointerEvent| {
            let (x, y) = pointer_position(&ev);
            ctx.pointer(kind, &enter_id, PointerInput::Enter { x, y });
        },
        move |ev: PointerEvent| {
            let (x, y) = pointer_position(&ev);
            ctx.pointer(kind, &move_id, PointerInput::Move { x, y });
        },
        move |_: PointerEvent| ctx.pointer(kind, &leave_id, PointerInput::Leave),
        move |_: web_sys::MouseEvent| ctx.pointer(kind, &click_id, PointerInput::Click),
    )
}

#[component]
pub fn MapView() -> impl IntoView {
    let ctx: WidgetContext = expect_context();
    let view_box = ctx.view_box.get_value();

    let shapes = move || {
        ctx.geometry
            .with(|geometry| geometry.as_ref().map(|g| g.shapes.clone()))
            .unwrap_or_default()
    };
    let borders = move || {
        ctx.geometry
            .with(|geometry| geometry.as_ref().map(|g| g.borders.clone()))
            .unwrap_or_default()
    };

    view! {
        <svg
            class="statemap"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=view_box
            preserveAspectRatio="xMidYMid meet"
            style="display: block; width: 100%; height: auto;"
        >
            <g class="states">
                <For
                    each=shapes
                    key=|shape| shape.id.clone()
                    children=move |shape| view! { <StatePath shape=shape /> }
                />
            </g>
            <path
                class="state-borders"
                d=borders
                style="fill: none; stroke: #ffffff; stroke-width: 0.75; stroke-linejoin: round; pointer-events: none;"
            />
            <g class="pins" style="pointer-events: none;">
                <For
                    each=move || ctx.layers.pins.get()
                    key=|pin| pin.key.clone()
                    children=move |pin| view! { <Pin pin=pin /> }
                />
            </g>
            <g class="callouts">
                <For
                    each=move || ctx.callouts.get()
                    key=|layout| layout.fips_id
                    children=move |layout| view! { <Callout layout=layout /> }
                />
            </g>
        </svg>
    }
}

#[component]
fn StatePath(shape: StateShape) -> impl IntoView {
    let ctx: WidgetContext = expect_context();
    let StateShape { id, d, .. } = shape;
    let (on_enter, on_move, on_leave, on_click) = bind_pointer(ctx, ElementKind::State, id.clone());
    let fill = move || ctx.layers.state_fill(&id);

    view! {
        <path
            class="state"
            d=d
            style="stroke: #ffffff; stroke-width: 0.5; cursor: pointer; transition: fill 120ms ease;"
            style:fill=fill
            on:pointerenter=on_enter
            on:pointermove=on_move
            on:pointerleave=on_leave
            on:click=on_click
        />
    }
}

#[component]
fn Pin(pin: PinMarker) -> impl IntoView {
    let ctx: WidgetContext = expect_context();
    let style = ctx.pin_style;

    view! {
        <circle
            class="pin"
            cx=pin.x.to_string()
            cy=pin.y.to_string()
            r=style.radius.to_string()
            style=format!(
                "fill: {}; stroke: {}; stroke-width: {}; opacity: {};",
                style.fill, style.stroke, style.stroke_width, style.opacity,
            )
        />
    }
}

/// Offset label for a small state, joined to its centroid by a leader line.
/// Hovering or clicking it behaves exactly like the state itself.
#[component]
fn Callout(layout: CalloutLayout) -> impl IntoView {
    let ctx: WidgetContext = expect_context();
    let CalloutLayout {
        fips_id,
        abbrev,
        anchor: (ax, ay),
        label: (lx, ly),
    } = layout;
    let (on_enter, on_move, on_leave, on_click) =
        bind_pointer(ctx, ElementKind::Callout, fips_id.to_string());
    let fill = move || ctx.layers.callout_fill(fips_id);

    view! {
        <g class="callout" style="cursor: pointer;">
            <line
                class="callout-leader"
                x1=ax.to_string()
                y1=ay.to_string()
                x2=lx.to_string()
                y2=ly.to_string()
                style="stroke: #6b7280; stroke-width: 0.75; pointer-events: none;"
            />
            <rect
                class="callout-label"
                x=(lx - 14.0).to_string()
                y=(ly - 9.0).to_string()
                width="28"
                height="18"
                rx="3"
                style="stroke: #ffffff; stroke-width: 0.5; transition: fill 120ms ease;"
                style:fill=fill
                on:pointerenter=on_enter
                on:pointermove=on_move
                on:pointerleave=on_leave
                on:click=on_click
            />
            <text
                class="callout-text"
                x=lx.to_string()
                y=(ly + 4.0).to_string()
                style="font-size: 10px; font-weight: 600; fill: #1f2937; text-anchor: middle; pointer-events: none;"
            >
                {abbrev}
            </text>
        </g>
    }
}
