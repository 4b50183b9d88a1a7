use std::cell::RefCell;
use std::rc::Rc;

use life_footer_engine::{
    ColorMode, ConsoleControls, DrawSurface, FooterConfig, FooterRenderer, FounderMode,
    HeadlessSurface, MemoryStore, Theme,
};

const FRAME_MS: f64 = 16.0;

fn footer(config: FooterConfig) -> FooterRenderer<HeadlessSurface> {
    FooterRenderer::new(Some(HeadlessSurface::new(0, 0)), 1024.0, config)
}

#[test]
fn footer_smoke_restart_cycle() {
    let config = FooterConfig {
        fps: 30.0,
        generation_ceiling: 20,
        rng_seed: Some(1),
        ..FooterConfig::default()
    };
    let mut footer = footer(config);

    let mut restarts = 0;
    let mut was_restarting = false;
    let mut saw_blank_frame = false;
    let mut now = 0.0;
    while now < 20_000.0 {
        assert!(footer.tick(now));
        now += FRAME_MS;

        let stats = footer.stats().unwrap();
        assert!((0.0..=1.0).contains(&stats.fade_alpha()));
        if stats.restarting() && !was_restarting {
            restarts += 1;
        }
        if restarts > 0 && stats.fade_alpha() == 0.0 {
            saw_blank_frame = true;
        }
        was_restarting = stats.restarting();

        for (_, _, w, h) in footer.surface().unwrap().filled_rects() {
            assert_eq!((w, h), (6.0, 6.0));
        }
    }

    assert!(restarts >= 2, "only {restarts} restarts");
    assert!(saw_blank_frame);
}

#[test]
fn footer_smoke_paused_footer_draws_nothing_new() {
    let mut footer = footer(FooterConfig { rng_seed: Some(9), ..FooterConfig::default() });
    footer.tick(0.0);
    footer.tick(200.0);
    assert!(footer.toggle_pause());

    let frames = footer.surface().unwrap().frames();
    let generation = footer.stats().unwrap().generation();
    assert!(!footer.tick(1_000.0));
    assert!(!footer.tick(2_000.0));
    assert_eq!(footer.surface().unwrap().frames(), frames);
    assert_eq!(footer.stats().unwrap().generation(), generation);
}

#[test]
fn footer_smoke_canvas_matches_layout() {
    let footer = footer(FooterConfig::default());
    let surface = footer.surface().unwrap();
    assert_eq!(surface.width(), 1024);
    assert_eq!(surface.height(), 96);
}

#[test]
fn founder_mode_switches_footer_colours() {
    let shared = Rc::new(RefCell::new(footer(FooterConfig { rng_seed: Some(4), ..FooterConfig::default() })));
    let mut mode = FounderMode::load(MemoryStore::new());

    let target = Rc::clone(&shared);
    mode.subscribe(move |active| target.borrow_mut().on_mode_change(active));
    assert_eq!(shared.borrow().core().unwrap().palette().mode, ColorMode::Plain);

    mode.toggle();
    assert_eq!(shared.borrow().core().unwrap().palette().mode, ColorMode::Enhanced);

    shared.borrow_mut().on_theme_change(Theme::Dark);
    let palette = *shared.borrow().core().unwrap().palette();
    assert_eq!(palette.theme, Theme::Dark);
    assert_eq!(palette.mode, ColorMode::Enhanced);

    mode.toggle();
    assert_eq!(shared.borrow().core().unwrap().palette().mode, ColorMode::Plain);
}

#[test]
fn console_controls_share_the_footer() {
    let shared = Rc::new(RefCell::new(footer(FooterConfig { rng_seed: Some(5), ..FooterConfig::default() })));
    let console = ConsoleControls::new(Rc::clone(&shared));

    assert!(console.pause());
    assert!(shared.borrow().is_paused());
    assert!(!console.pause());

    assert!(console.speed(12.0));
    assert_eq!(shared.borrow().stats().unwrap().fps(), 12.0);
    assert!(!console.speed(45.0));
    assert_eq!(shared.borrow().stats().unwrap().fps(), 12.0);

    assert!(console.reset());
    assert_eq!(shared.borrow().stats().unwrap().generation(), 0);
}
