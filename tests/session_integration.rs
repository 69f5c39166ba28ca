// SPDX-License-Identifier: MPL-2.0
//! Integration tests for a full playback session
//!
//! These tests drive a controller wired to the reference composition and
//! check what the engine ends up rendering, including the deferred pause
//! that follows every jump.

use loop_player::config::Config;
use loop_player::diagnostics::Direction;
use loop_player::error::{CatalogError, Error};
use loop_player::player::{
    Composition, Effect, EffectRegistry, FilterCatalog, PlaybackCommand, PlaybackSession,
    FALLBACK_EFFECT_ID,
};
use std::sync::Arc;
use std::time::Duration;

fn launch_with(config: &Config) -> PlaybackSession<Composition> {
    let catalog = config
        .catalog(&EffectRegistry::standard())
        .expect("valid catalog");
    PlaybackSession::launch(
        config,
        Arc::new(catalog),
        Composition::new(&config.player).with_duration(12.0),
    )
    .expect("inside a runtime")
}

fn launch() -> PlaybackSession<Composition> {
    launch_with(&Config::default())
}

#[tokio::test]
async fn test_commands_reach_engine_in_order() {
    let mut session = launch();
    let controller = session.controller_mut();

    controller.toggle_mute();
    controller.select_filter(4).unwrap();
    controller.toggle_overlay();
    controller.set_brightness(0.5);
    controller.set_contrast(1.5);
    controller.toggle_overlay();
    controller.toggle_overlay();

    let outbound = session.journal().commands(Direction::Outbound);
    let names: Vec<_> = outbound.iter().map(PlaybackCommand::name).collect();
    assert_eq!(
        names,
        vec![
            "unmute",
            "set_filter",
            "add_overlay",
            "brightness",
            "contrast",
            "clear_all_overlays",
            "add_overlay"
        ]
    );

    let engine = session.shutdown().await.unwrap();
    assert!(!engine.is_muted());
    assert_eq!(engine.filters().len(), 1);
    assert_eq!(engine.filters()[0].id(), "pixellate");
    assert_eq!(engine.overlays().len(), 1);
    assert_eq!(engine.color().brightness, 0.5);
    assert_eq!(engine.color().contrast, 1.5);
}

#[tokio::test(start_paused = true)]
async fn test_seek_settles_to_paused() {
    let mut session = launch();

    session.controller_mut().request_seek(4.0);
    assert!(session.controller().state().is_playing);

    assert_eq!(
        session.next_notification().await,
        Some(PlaybackCommand::Pause)
    );
    assert!(!session.controller().state().is_playing);

    let engine = session.shutdown().await.unwrap();
    assert_eq!(engine.position_secs(), 4.0);
    assert!(!engine.is_playing());
}

#[tokio::test(start_paused = true)]
async fn test_play_during_delay_keeps_playing() {
    let mut session = launch();

    session.controller_mut().request_seek_to_start();
    session.controller_mut().request_play();
    tokio::time::sleep(Duration::from_secs(1)).await;

    // The engine was already playing, so nothing was reported back.
    assert_eq!(session.sync(), 0);
    assert!(session.controller().state().is_playing);
    assert!(session.journal().commands(Direction::Deferred).is_empty());

    let engine = session.shutdown().await.unwrap();
    assert!(engine.is_playing());
    assert_eq!(engine.position_secs(), 0.0);
}

#[tokio::test(start_paused = true)]
async fn test_legacy_last_command_wins() {
    let mut config = Config::default();
    config.controller.cancel_pending_pause = false;
    let mut session = launch_with(&config);

    session.controller_mut().request_seek_to_end();
    session.controller_mut().request_play();

    assert_eq!(
        session.next_notification().await,
        Some(PlaybackCommand::Pause)
    );
    assert!(!session.controller().state().is_playing);
}

#[tokio::test]
async fn test_filter_selection_leaves_color_untouched() {
    let mut session = launch();
    let controller = session.controller_mut();

    controller.set_brightness(0.3);
    controller.set_contrast(1.2);
    controller.select_filter(2).unwrap();
    controller.select_filter(5).unwrap();
    controller.select_filter(0).unwrap();

    let engine = session.shutdown().await.unwrap();
    assert!(engine.filters().is_empty());
    assert_eq!(engine.color().brightness, 0.3);
    assert_eq!(engine.color().contrast, 1.2);
}

#[tokio::test]
async fn test_configured_catalog_with_unknown_effect() {
    let config: Config = toml::from_str(
        r#"
        [[filters]]
        name = "None"

        [[filters]]
        name = "sepia_tone"
        parameters = { intensity = 0.8 }

        [[filters]]
        name = "unknown_effect"
        "#,
    )
    .expect("valid toml");
    let mut session = launch_with(&config);
    let controller = session.controller_mut();

    controller.select_filter(1).unwrap();
    controller.select_filter(2).unwrap();
    let err = controller.select_filter(3).unwrap_err();
    assert_eq!(
        err,
        Error::Catalog(CatalogError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(session.controller().state().selected_filter_index, 2);

    let engine = session.shutdown().await.unwrap();
    assert_eq!(
        engine.filters(),
        &[Effect::Fallback {
            id: FALLBACK_EFFECT_ID.to_string()
        }]
    );
}

#[tokio::test]
async fn test_out_of_range_levels_pass_through_controller() {
    let mut session = launch();

    session.controller_mut().set_brightness(1.5);
    assert_eq!(session.controller().state().brightness, 1.5);
    assert_eq!(
        session.controller().last_command(),
        &PlaybackCommand::Brightness(1.5)
    );

    let engine = session.shutdown().await.unwrap();
    assert_eq!(engine.color().brightness, 1.0);
}

#[tokio::test]
async fn test_engine_driven_stop_is_reconciled() {
    let mut session = launch();
    assert!(session.controller().state().is_playing);

    // End of media on a non-looping engine.
    let mut settings = Config::default().player;
    settings.looping = false;
    let mut stopped = Composition::new(&settings).with_duration(2.0);
    let notification = stopped.finish();
    assert!(!stopped.is_playing());

    session
        .notifier()
        .send(notification.expect("pause notification"))
        .unwrap();
    assert_eq!(session.sync(), 1);
    assert!(!session.controller().state().is_playing);
}

#[tokio::test]
async fn test_journal_keeps_burst_up_to_configured_capacity() {
    let mut config = Config::default();
    config.diagnostics.journal_capacity = 1000;
    let mut session = launch_with(&config);

    // A slider drag emits many commands before anyone reads the journal.
    for step in 0..300 {
        session.controller_mut().set_brightness(step as f32 / 300.0);
    }

    let outbound = session.journal().commands(Direction::Outbound);
    assert_eq!(outbound.len(), 300);
    assert_eq!(outbound[0], PlaybackCommand::Brightness(0.0));
}

#[test]
fn test_invalid_configured_catalog_is_rejected() {
    let config: Config = toml::from_str(
        r#"
        [[filters]]
        name = "sepia_tone"
        "#,
    )
    .expect("valid toml");

    let err = config.catalog(&EffectRegistry::standard()).unwrap_err();
    assert_eq!(err, Error::Catalog(CatalogError::MissingSentinel));
    assert!(FilterCatalog::standard().len() > 1);
}
