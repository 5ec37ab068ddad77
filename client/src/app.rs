//! Window lifecycle: resolution menu first, then the game window

use std::process::ExitCode;
use std::sync::Arc;

use fontdue::Font;
use game_core::{Clock, Config, FrameOutcome, GameRng, Resolution, Score, Session, SystemClock};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::InitError;
use crate::input::KeyState;
use crate::menu::{self, MenuAction, MENU_SIZE, MENU_TITLE};
use crate::renderer::text::TextRasterizer;
use crate::renderer::Renderer;

pub const FONT_PATH: &str = "assets/DejaVuSans-Bold.ttf";
const GAME_TITLE: &str = "Pong Game";

/// A window and the renderer drawing into it
struct Screen {
    window: Arc<Window>,
    renderer: Renderer,
}

impl Screen {
    fn open(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        font: &Font,
        view: (u32, u32),
    ) -> Result<Self, InitError> {
        let window = Arc::new(event_loop.create_window(attributes)?);
        let text = TextRasterizer::new(font.clone());
        let renderer = pollster::block_on(Renderer::new(window.clone(), text, view))?;
        Ok(Self { window, renderer })
    }
}

struct Game {
    screen: Screen,
    session: Session,
    keys: KeyState,
}

enum Phase {
    Starting,
    Menu(Screen),
    Playing(Box<Game>),
    Finished,
}

enum Transition {
    Start(Resolution),
    Exit,
}

pub struct App {
    font: Font,
    phase: Phase,
    clock: SystemClock,
    exit_code: ExitCode,
}

impl App {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            phase: Phase::Starting,
            clock: SystemClock::new(),
            exit_code: ExitCode::SUCCESS,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    fn active_window(&self) -> Option<&Arc<Window>> {
        match &self.phase {
            Phase::Menu(screen) => Some(&screen.window),
            Phase::Playing(game) => Some(&game.screen.window),
            _ => None,
        }
    }

    fn open_menu(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let attributes = Window::default_attributes()
            .with_title(MENU_TITLE)
            .with_inner_size(PhysicalSize::new(MENU_SIZE.0, MENU_SIZE.1))
            .with_resizable(false);
        let screen = Screen::open(event_loop, attributes, &self.font, MENU_SIZE)?;
        tracing::info!("resolution menu open");
        self.phase = Phase::Menu(screen);
        Ok(())
    }

    fn start_game(
        &mut self,
        event_loop: &ActiveEventLoop,
        resolution: Resolution,
    ) -> Result<(), InitError> {
        // Menu window goes away before the game window appears
        self.phase = Phase::Finished;

        let session = Session::new(Config::for_resolution(resolution), GameRng::from_entropy())?;
        let (width, height) = resolution.size();
        let attributes = Window::default_attributes()
            .with_title(GAME_TITLE)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_decorations(false)
            .with_resizable(false);
        let screen = Screen::open(event_loop, attributes, &self.font, (width, height))?;

        tracing::info!(resolution = %resolution.label(), "game started");
        self.phase = Phase::Playing(Box::new(Game {
            screen,
            session,
            keys: KeyState::new(),
        }));
        Ok(())
    }

    fn finish(&mut self, event_loop: &ActiveEventLoop) {
        self.phase = Phase::Finished;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: InitError) {
        tracing::error!(%err, "initialization failed");
        self.exit_code = ExitCode::FAILURE;
        self.finish(event_loop);
    }
}

fn menu_event(screen: &mut Screen, event: WindowEvent) -> Option<Transition> {
    match event {
        WindowEvent::CloseRequested => {
            tracing::info!("menu closed");
            Some(Transition::Exit)
        }
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => match menu::handle_key(code)? {
            MenuAction::Select(resolution) => Some(Transition::Start(resolution)),
            MenuAction::Cancel => {
                tracing::info!("menu cancelled");
                Some(Transition::Exit)
            }
        },
        WindowEvent::Resized(size) => {
            screen.renderer.resize(size.width, size.height);
            None
        }
        WindowEvent::RedrawRequested => {
            menu::draw_menu(&mut screen.renderer);
            None
        }
        _ => None,
    }
}

/// Run the final frame straight away instead of waiting for a redraw that a
/// hidden window may never get
fn close_game<K: Clock + ?Sized>(session: &mut Session, keys: &mut KeyState, clock: &K) -> Score {
    keys.request_quit();
    session.frame(&keys.snapshot(), clock.now());
    session.score()
}

fn log_game_over(score: Score) {
    tracing::info!(
        player = score.player,
        opponent = score.opponent,
        "game over"
    );
}

fn game_event(game: &mut Game, event: WindowEvent, clock: &SystemClock) -> Option<Transition> {
    match event {
        WindowEvent::CloseRequested => {
            log_game_over(close_game(&mut game.session, &mut game.keys, clock));
            Some(Transition::Exit)
        }
        // Releases are not reported on every platform once focus is gone
        WindowEvent::Focused(false) => {
            game.keys.release_all();
            None
        }
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state,
                    ..
                },
            ..
        } => {
            game.keys.handle_key(code, state.is_pressed());
            None
        }
        WindowEvent::Resized(size) => {
            game.screen.renderer.resize(size.width, size.height);
            None
        }
        WindowEvent::RedrawRequested => {
            let input = game.keys.snapshot();
            match game
                .session
                .run_frame(&input, clock, &mut game.screen.renderer)
            {
                FrameOutcome::Continue => None,
                FrameOutcome::Quit => {
                    log_game_over(game.session.score());
                    Some(Transition::Exit)
                }
            }
        }
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.phase, Phase::Starting) {
            return;
        }
        if let Err(err) = self.open_menu(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.active_window().map(|w| w.id()) != Some(window_id) {
            return;
        }

        let transition = match &mut self.phase {
            Phase::Menu(screen) => menu_event(screen, event),
            Phase::Playing(game) => game_event(game, event, &self.clock),
            Phase::Starting | Phase::Finished => None,
        };

        match transition {
            Some(Transition::Start(resolution)) => {
                if let Err(err) = self.start_game(event_loop, resolution) {
                    self.fail(event_loop, err);
                }
            }
            Some(Transition::Exit) => self.finish(event_loop),
            None => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.active_window() {
            window.request_redraw();
        }
    }
}
