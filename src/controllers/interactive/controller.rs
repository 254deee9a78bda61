use log::{debug, info};
use std::time::Instant;

use crate::config::errors::ConfigError;
use crate::config::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::generate_fractal::fractal_evaluator::FractalEvaluator;
use crate::core::view::input_event::InputEvent;
use crate::core::view::view_state::ViewState;

/// Drives the explorer: one view transition per input event, one
/// synchronous render per accepted transition.
///
/// Renders never overlap. An event arriving while a render runs is handled
/// by the caller after `handle_input` returns.
pub struct ExplorerController<P: FramePresenterPort> {
    config: ExplorerConfig,
    view: ViewState,
    evaluator: FractalEvaluator,
    presenter: P,
    generation: u64,
}

impl<P: FramePresenterPort> ExplorerController<P> {
    pub fn new(
        config: ExplorerConfig,
        evaluator: FractalEvaluator,
        presenter: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            view: config.initial_view_state(),
            evaluator,
            presenter,
            generation: 0,
        })
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Applies `event` to the current view. Returns `true` if the view
    /// changed and a new frame was presented.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let previous = self.view;
        let (next, redraw) = previous.apply(event, &self.config.limits);

        if !redraw {
            debug!("{:?} left the view unchanged", event);
            return false;
        }

        log_transition(&previous, &next);

        self.view = next;
        self.redraw();

        true
    }

    /// Renders the current view and presents it.
    pub fn redraw(&mut self) {
        let start = Instant::now();
        let pixel_buffer = self.evaluator.render(
            self.config.width,
            self.config.height,
            self.view.mapping(),
            self.view.iterations(),
        );
        let render_duration = start.elapsed();

        self.generation += 1;

        info!(
            "draw-perf: frame {} ({}x{}, {} iterations) in {:?}",
            self.generation,
            self.config.width,
            self.config.height,
            self.view.iterations(),
            render_duration
        );

        self.presenter.present(FrameData {
            generation: self.generation,
            pixel_buffer,
        });
    }
}

fn log_transition(previous: &ViewState, next: &ViewState) {
    let (old_ratio, new_ratio) = (previous.mapping().ratio, next.mapping().ratio);

    if old_ratio != new_ratio {
        info!("ratio: {:e} -> {:e}", old_ratio, new_ratio);
    }

    if previous.iterations() != next.iterations() {
        info!(
            "iterations: {} -> {}",
            previous.iterations(),
            next.iterations()
        );
    }
}
