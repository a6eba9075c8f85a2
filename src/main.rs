//! Hana Run entry point
//!
//! Handles platform-specific initialization and runs the game loop. The
//! simulation core stays pure; everything DOM-shaped lives here.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, TouchEvent};

    use hana_run::consts::*;
    use hana_run::sim::{GameEvent, GamePhase, GameSession, HeightClass};
    use hana_run::{BestScore, Tuning};

    /// Obstacle image variants, picked at random per spawn
    const LOW_IMAGES: [&str; 4] = [
        "IMG_8329.png",
        "IMG_8337.png",
        "IMG_8338.png",
        "IMG_8341.png",
    ];
    const HIGH_IMAGES: [&str; 4] = [
        "unnamed.png",
        "IMG_8330.png",
        "IMG_8339.png",
        "IMG_8340.png",
    ];

    /// Pixel offset of the ground line inside the game screen
    const GROUND_OFFSET_PX: f32 = 180.0;
    /// Lifetime of the floating "+N" indicator
    const FLOAT_SCORE_MS: i32 = 900;

    /// Game instance plus the visuals it owns
    struct Game {
        session: GameSession,
        /// Live obstacle elements, keyed by simulation id
        obstacle_els: HashMap<u32, Element>,
    }

    /// The fixed page elements the driver mirrors core state into
    #[derive(Clone)]
    struct Dom {
        document: Document,
        start_screen: Element,
        game_screen: Element,
        player_el: HtmlElement,
        obstacle_container: Element,
        score_text: Element,
        high_score_text: Element,
        game_over_overlay: Element,
        final_score_text: Element,
    }

    impl Dom {
        fn grab(document: &Document) -> Option<Self> {
            let el = |id: &str| document.get_element_by_id(id);
            Some(Self {
                document: document.clone(),
                start_screen: el("start-screen")?,
                game_screen: el("game-screen")?,
                player_el: el("player")?.dyn_into().ok()?,
                obstacle_container: el("obstacle-container")?,
                score_text: el("score-text")?,
                high_score_text: el("high-score-text")?,
                game_over_overlay: el("game-over-overlay")?,
                final_score_text: el("final-score-text")?,
            })
        }
    }

    fn window_width() -> f32 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(|v| v as f32)
            .unwrap_or(DEFAULT_FIELD_WIDTH)
    }

    /// Start a run and swap the page to the game screen
    fn start_game(game: &mut Game, dom: &Dom) {
        game.session.set_field_width(window_width());
        game.session.start();

        // Drop any visuals left over from the previous run
        for (_, el) in game.obstacle_els.drain() {
            el.remove();
        }
        dom.score_text
            .set_text_content(Some(&game.session.score().current().to_string()));

        let _ = dom.start_screen.class_list().add_1("hidden");
        let _ = dom.game_screen.class_list().remove_1("hidden");
        let _ = dom.game_over_overlay.class_list().add_1("hidden");
        let _ = dom.game_over_overlay.class_list().remove_2("active", "show-text");
    }

    /// Jump-or-start, shared by every mapped input
    fn handle_action(game: &mut Game, dom: &Dom) {
        match game.session.phase() {
            GamePhase::Playing => game.session.jump(),
            GamePhase::Menu => start_game(game, dom),
            GamePhase::GameOver => {}
        }
    }

    /// Create the visual for a freshly spawned obstacle
    fn spawn_visual(dom: &Dom, class: HeightClass) -> Option<Element> {
        let el = dom.document.create_element("img").ok()?;
        let variants = match class {
            HeightClass::High => &HIGH_IMAGES,
            HeightClass::Low => &LOW_IMAGES,
        };
        let pick = (js_sys::Math::random() * variants.len() as f64) as usize;
        let _ = el.set_attribute("src", variants[pick.min(variants.len() - 1)]);
        el.set_class_name("obstacle");
        let _ = el.class_list().add_1(match class {
            HeightClass::High => "high",
            HeightClass::Low => "low",
        });
        if let Ok(html) = el.clone().dyn_into::<HtmlElement>() {
            let _ = html.style().set_property("right", "-200px");
        }
        let _ = dom.obstacle_container.append_child(&el);
        Some(el)
    }

    /// Transient "+N" indicator near the cleared obstacle, removed after ~900ms
    fn show_float_score(dom: &Dom, points: u32, near: Option<&Element>) {
        let Ok(float) = dom.document.create_element("div") else {
            return;
        };
        float.set_class_name("float-score");
        float.set_text_content(Some(&format!("+{}", points)));

        if let (Some(el), Ok(html)) = (near, float.clone().dyn_into::<HtmlElement>()) {
            let rect = el.get_bounding_client_rect();
            let _ = html
                .style()
                .set_property("left", &format!("{}px", rect.left() + rect.width() / 2.0));
            let _ = html.style().set_property("top", &format!("{}px", rect.top()));
        }

        if let Some(body) = dom.document.body() {
            let _ = body.append_child(&float);
        }

        let window = web_sys::window().unwrap();
        let closure = Closure::once(move || float.remove());
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            FLOAT_SCORE_MS,
        );
        closure.forget();
    }

    /// Apply one tick's events to the page
    fn handle_events(game: &mut Game, dom: &Dom, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Spawned { id, class } => {
                    if let Some(el) = spawn_visual(dom, class) {
                        game.obstacle_els.insert(id, el);
                    }
                }
                GameEvent::Scored { id, points, .. } => {
                    dom.score_text
                        .set_text_content(Some(&game.session.score().current().to_string()));
                    show_float_score(dom, points, game.obstacle_els.get(&id));
                }
                GameEvent::Removed { id } => {
                    if let Some(el) = game.obstacle_els.remove(&id) {
                        el.remove();
                    }
                }
                GameEvent::GameOver { score, new_best } => {
                    dom.final_score_text.set_text_content(Some(&score.to_string()));
                    let _ = dom.game_over_overlay.class_list().remove_1("hidden");
                    let _ = dom.game_over_overlay.class_list().add_1("active");
                    if new_best {
                        let best = game.session.score().best();
                        BestScore::save(best);
                        dom.high_score_text.set_text_content(Some(&best.to_string()));
                    }
                }
                GameEvent::BackToMenu => {
                    let _ = dom.game_screen.class_list().add_1("hidden");
                    let _ = dom.start_screen.class_list().remove_1("hidden");
                }
            }
        }
    }

    /// Mirror core positions into element styles
    fn render(game: &Game, dom: &Dom) {
        let bottom = GROUND_OFFSET_PX + game.session.player().bottom;
        let _ = dom
            .player_el
            .style()
            .set_property("bottom", &format!("{}px", bottom));

        let field_width = game.session.field().field_width();
        for obstacle in game.session.field().obstacles() {
            if let Some(el) = game.obstacle_els.get(&obstacle.id) {
                if let Ok(html) = el.clone().dyn_into::<HtmlElement>() {
                    let _ = html
                        .style()
                        .set_property("right", &format!("{}px", field_width - obstacle.x));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hana Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let dom = Dom::grab(&document).expect("missing page elements");

        let best = BestScore::load();
        let tuning = Tuning::load();
        dom.high_score_text.set_text_content(Some(&best.0.to_string()));

        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(seed, best.0, window_width(), tuning);
        log::info!("Session initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            obstacle_els: HashMap::new(),
        }));

        setup_input_handlers(game.clone(), dom.clone());
        request_animation_frame(game, dom);

        log::info!("Hana Run running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>, dom: Dom) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Start button
        if let Some(btn) = document.get_element_by_id("btn-start") {
            let game = game.clone();
            let dom = dom.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_game(&mut game.borrow_mut(), &dom);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: Space / ArrowUp, with default scrolling suppressed
        {
            let game = game.clone();
            let dom = dom.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        event.prevent_default();
                        handle_action(&mut game.borrow_mut(), &dom);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        {
            let game = game.clone();
            let dom = dom.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                handle_action(&mut game.borrow_mut(), &dom);
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch, with default scrolling suppressed
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                handle_action(&mut game.borrow_mut(), &dom);
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, dom: Dom) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, dom, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, dom: Dom, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.session.set_field_width(window_width());
            let events = g.session.tick(time);
            handle_events(&mut g, &dom, events);
            render(&g, &dom);
        }

        request_animation_frame(game, dom);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hana Run (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    // Headless smoke run: a seeded session must reach game over on its own
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use hana_run::Tuning;
    use hana_run::consts::BASELINE_FRAME_MS;
    use hana_run::sim::{GamePhase, GameSession};

    let mut session = GameSession::new(1234, 0, 960.0, Tuning::default());
    session.start();

    let mut t = 0.0;
    for _ in 0..2000 {
        t += BASELINE_FRAME_MS;
        session.tick(t);
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }
    assert_eq!(session.phase(), GamePhase::GameOver, "run should end");
    println!(
        "✓ Headless run ended with score {}",
        session.score().current()
    );
}
