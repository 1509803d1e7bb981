use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::error::Error;
use crate::gui::Framework;

/// Logical canvas size. Windows of any other size letterbox it.
pub const WIDTH: u32 = 720;
pub const HEIGHT: u32 = 1280;

pub const TITLE: &str = "RESISTORR";

pub trait App {
    fn init(&mut self, _pixels: &mut Pixels, _ctx: &egui::Context) {}

    /// Called once per batch of window events, before the next redraw. Not
    /// called while egui is using the pointer.
    fn input(&mut self, _input: &WinitInputHelper, _pixels: &Pixels) {}

    /// Called instead of `input` while egui is using the pointer.
    fn pointer_lost(&mut self) {}

    /// Draw one frame into `pixels` and lay out the egui widgets.
    fn update(&mut self, pixels: &mut Pixels, ctx: &egui::Context);
}

/// Open the window and drive `app` until the window closes.
pub fn mainloop<A: App + 'static>(mut app: A, scale: f64) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = {
        let size = LogicalSize::new(WIDTH as f64 * scale, HEIGHT as f64 * scale);
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(size)
            .with_min_inner_size(LogicalSize::new(WIDTH as f64 / 8.0, HEIGHT as f64 / 8.0))
            .build(&event_loop)?
    };

    let (mut pixels, mut framework) = {
        let window_size = window.inner_size();
        let scale_factor = window.scale_factor() as f32;
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        let pixels = Pixels::new(WIDTH, HEIGHT, surface_texture)?;
        let framework = Framework::new(window_size.width, window_size.height, scale_factor, &pixels);

        (pixels, framework)
    };

    app.init(&mut pixels, framework.context());
    info!("{}x{} canvas in a {:?} window", WIDTH, HEIGHT, window.inner_size());

    event_loop.run(move |event, _, control_flow| {
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(scale_factor) = input.scale_factor_changed() {
                framework.scale_factor(scale_factor);
            }

            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
                framework.resize(size.width, size.height);
            }

            if framework.wants_pointer_input() {
                app.pointer_lost();
            } else {
                app.input(&input, &pixels);
            }

            window.request_redraw();
        }

        match event {
            Event::WindowEvent { event, .. } => {
                framework.handle_event(&event);
            }
            Event::RedrawRequested(_) => {
                framework.prepare(&window, &mut app, &mut pixels);

                let render_result = pixels.render_with(|encoder, render_target, context| {
                    context.scaling_renderer.render(encoder, render_target);
                    framework.render(encoder, render_target, context)?;
                    Ok(())
                });

                if let Err(err) = render_result {
                    error!("pixels.render() failed: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => (),
        }
    })
}
