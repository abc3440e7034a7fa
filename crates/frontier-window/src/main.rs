// File: crates/frontier-window/src/main.rs
// Summary: Interactive viewer: binds keyboard/mouse input to view-state
// transitions and blits the rendered chart via winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use winit::event::{
    ElementState, Event, KeyboardInput, ModifiersState, MouseButton, MouseScrollDelta,
    VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use frontier_core::{
    AxisKind, ChartAdapter, Dataset, FilterKey, RangeShortcut, RenderOptions, VendorId,
};

/// Arrow-key pan step as a fraction of the visible span.
const PAN_STEP: f64 = 0.08;
/// Larger step while Shift is held.
const PAN_STEP_FAST: f64 = 0.2;
const ZOOM_IN_FACTOR: f64 = 1.2;
const ZOOM_OUT_FACTOR: f64 = 0.8;
/// Wheel zoom speed per scroll line.
const WHEEL_SPEED: f64 = 0.05;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Args: [dataset.csv] [logo_dir]
    let mut args = std::env::args().skip(1);
    let dataset = match args.next() {
        Some(path) => Dataset::from_csv_path(&path)
            .with_context(|| format!("failed to load dataset from {path}"))?,
        None => Dataset::builtin(),
    };
    let mut adapter = ChartAdapter::new(dataset);
    if let Some(dir) = args.next() {
        adapter.load_logos(dir);
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Frontier Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut modifiers = ModifiersState::default();
    let mut cursor: Option<(f64, f64)> = None;
    let mut panning = false;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::ModifiersChanged(state) => {
                    modifiers = state;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    // Right-button drag pans, like the browser original.
                    if button == MouseButton::Right {
                        panning = state == ElementState::Pressed;
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64 * WHEEL_SPEED,
                        MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
                    };
                    zoom_at_cursor(&mut adapter, cursor, size, scroll);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(code),
                            ..
                        },
                    ..
                } => {
                    if handle_key(&mut adapter, code, modifiers.shift()) {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } => {
                if panning {
                    let (plot_w, plot_h) = plot_size(&adapter, size);
                    let chart = adapter.chart();
                    let x_span = chart.x_axis.max - chart.x_axis.min;
                    let y_span = chart.y_axis.max - chart.y_axis.min;
                    let dx_ms = -dx / plot_w * x_span;
                    let dy_score = dy / plot_h * y_span;
                    adapter.pan(dx_ms, dy_score);
                    window.request_redraw();
                }
            }
            Event::MainEventsCleared => {
                if adapter.poll_logos() > 0 {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(err) = draw(&mut adapter, &mut surface, size) {
                    tracing::error!(error = %err, "draw failed");
                }
            }
            _ => {}
        }
    });
}

/// Map a key press to a state transition. Returns true when a redraw is due.
fn handle_key(adapter: &mut ChartAdapter, code: VirtualKeyCode, shift: bool) -> bool {
    use VirtualKeyCode as K;
    match code {
        // Filter buttons.
        K::Key1 => adapter.set_filter(FilterKey::All),
        K::Key2 => adapter.set_filter(FilterKey::Openai),
        K::Key3 => adapter.set_filter(FilterKey::Anthropic),
        K::Key4 => adapter.set_filter(FilterKey::Google),
        K::Key5 => adapter.set_filter(FilterKey::Alibaba),
        K::Key6 => adapter.set_filter(FilterKey::Deepseek),
        K::Key7 => adapter.set_filter(FilterKey::Meta),
        K::Key8 => adapter.set_filter(FilterKey::Other),

        // Legend toggles.
        K::O => adapter.toggle_vendor(VendorId::Openai),
        K::A => adapter.toggle_vendor(VendorId::Anthropic),
        K::G => adapter.toggle_vendor(VendorId::Google),
        K::X => adapter.toggle_vendor(VendorId::Xai),
        K::W => adapter.toggle_vendor(VendorId::Alibaba),
        K::D => adapter.toggle_vendor(VendorId::Deepseek),
        K::K => adapter.toggle_vendor(VendorId::Moonshot),
        K::Z => adapter.toggle_vendor(VendorId::Zhipu),
        K::N => adapter.toggle_vendor(VendorId::Minimax),
        K::M => adapter.toggle_vendor(VendorId::Meta),
        K::I => adapter.toggle_vendor(VendorId::Mistral),

        // Arrow-key panning.
        K::Left | K::Right | K::Up | K::Down => {
            let step = if shift { PAN_STEP_FAST } else { PAN_STEP };
            let chart = adapter.chart();
            let x_step = (chart.x_axis.max - chart.x_axis.min) * step;
            let y_step = (chart.y_axis.max - chart.y_axis.min) * step;
            let (dx, dy) = match code {
                K::Left => (-x_step, 0.0),
                K::Right => (x_step, 0.0),
                K::Up => (0.0, y_step),
                _ => (0.0, -y_step),
            };
            adapter.pan(dx, dy);
        }

        // Zoom and reset.
        K::Equals | K::NumpadAdd | K::Plus => adapter.zoom(ZOOM_IN_FACTOR),
        K::Minus | K::NumpadSubtract => adapter.zoom(ZOOM_OUT_FACTOR),
        K::R | K::Key0 => adapter.reset_axes(),

        // Date-range shortcuts.
        K::B => adapter.apply_range(RangeShortcut::Beginning),
        K::Y => adapter.apply_range(RangeShortcut::LastDays(365)),
        K::Q => adapter.apply_range(RangeShortcut::LastDays(90)),

        _ => return false,
    }
    true
}

fn render_options(size: winit::dpi::PhysicalSize<u32>) -> RenderOptions {
    RenderOptions {
        width: size.width.max(1) as i32,
        height: size.height.max(1) as i32,
        ..RenderOptions::default()
    }
}

fn plot_size(adapter: &ChartAdapter, size: winit::dpi::PhysicalSize<u32>) -> (f64, f64) {
    let opts = render_options(size);
    let layout = adapter.chart().plot_layout(&opts);
    (
        ((layout.right - layout.left) as f64).max(1.0),
        ((layout.bottom - layout.top) as f64).max(1.0),
    )
}

/// Wheel zoom about the cursor. The resulting bounds are written back through
/// the axis transitions, so manual zooming also turns auto-Y off.
fn zoom_at_cursor(
    adapter: &mut ChartAdapter,
    cursor: Option<(f64, f64)>,
    size: winit::dpi::PhysicalSize<u32>,
    scroll: f64,
) {
    let Some((cx, cy)) = cursor else { return };
    let opts = render_options(size);
    let layout = adapter.chart().plot_layout(&opts);

    let cx = (cx as f32).clamp(layout.left, layout.right);
    let cy = (cy as f32).clamp(layout.top, layout.bottom);
    let wx = layout.x.from_px(cx);
    let wy = layout.y.from_px(cy);

    let factor = (1.0 - scroll).clamp(0.1, 10.0);
    let x_span = layout.x.world_span();
    let y_span = layout.y.world_span();
    let nx = x_span * factor;
    let ny = y_span * factor;
    let rx = (wx - layout.x.world_min) / x_span;
    let ry = (wy - layout.y.world_min) / y_span;

    let x_min = wx - rx * nx;
    let y_min = wy - ry * ny;
    adapter.set_axis(AxisKind::X, Some(x_min), Some(x_min + nx));
    adapter.set_axis(AxisKind::Y, Some(y_min), Some(y_min + ny));
}

fn draw(
    adapter: &mut ChartAdapter,
    surface: &mut softbuffer::Surface,
    size: winit::dpi::PhysicalSize<u32>,
) -> Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    surface
        .resize(
            NonZeroU32::new(w).context("width")?,
            NonZeroU32::new(h).context("height")?,
        )
        .map_err(|e| anyhow::anyhow!("surface resize: {e}"))?;

    let opts = render_options(size);
    let (rgba, _, _, _) = adapter.render_to_rgba8(&opts)?;

    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("frame buffer: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let (r, g, b, a) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }
    frame
        .present()
        .map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
