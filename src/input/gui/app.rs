//! Window and event loop of the explorer.

use log::{error, info};
use std::error::Error;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::interactive::ExplorerController;
use crate::core::actions::generate_fractal::fractal_evaluator::FractalEvaluator;
use crate::input::gui::events::{input_from_mouse_button, input_from_scroll};
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs until it is closed.
///
/// The worker pool belongs to the controller captured by the event loop,
/// so it is released on every exit path.
pub fn run_gui(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, config.width, config.height)?;
    let evaluator = FractalEvaluator::new()?;
    info!("rendering with {} worker threads", evaluator.threads());

    let mut controller = ExplorerController::new(config, evaluator, presenter)?;
    controller.redraw();
    window.request_redraw();

    let mut cursor = PhysicalPosition::new(0.0, 0.0);

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => cursor = position,
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button,
                ..
            } => {
                let position = controller.presenter().cursor_to_pixel(cursor);

                if controller.handle_input(input_from_mouse_button(button, position)) {
                    window.request_redraw();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if controller.handle_input(input_from_scroll(delta)) {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = controller.presenter().render() {
                    error!("render error: {}", err);
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
