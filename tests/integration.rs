// SPDX-License-Identifier: MPL-2.0
use iced_marquee::animation::{Channel, Choreography};
use iced_marquee::audio::{AutoplayFallback, Player, SinkCommand};
use iced_marquee::config;
use iced_marquee::video;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn intro_choreography_plays_out_and_stops() {
    let intro = Choreography::intro();

    // Mid-flight: the title pulse is somewhere between its endpoints.
    let mid_scale = intro
        .sample(Channel::TitleScale, 1.75)
        .expect("title scale is animated");
    assert!(mid_scale > 1.0 && mid_scale < 1.3);

    // After the end every channel is at rest and the intro reports done,
    // which is what detaches the frame tick.
    assert!(intro.is_finished(intro.duration()));
    assert_eq!(intro.sample(Channel::TitleScale, 60.0), Some(1.0));
    assert_eq!(intro.sample(Channel::TitleGap, 60.0), Some(0.0));
    assert_eq!(intro.sample(Channel::VideoSlide, 60.0), Some(0.0));
}

#[test]
fn playback_toggle_contract_round_trips() {
    let mut player = Player::new();

    assert_eq!(player.toggle(), SinkCommand::Play);
    assert!(player.is_playing());

    assert_eq!(player.toggle(), SinkCommand::Pause);
    assert!(!player.is_playing());
}

#[test]
fn autoplay_fallback_retries_exactly_once() {
    // Refused start arms the listener.
    let state = AutoplayFallback::after_initial(false);
    assert!(state.is_waiting());

    // One gesture resolves it; a refused retry is terminal.
    let state = state.after_retry(false);
    assert_eq!(state, AutoplayFallback::Abandoned);

    // Any further gesture is absorbed without another attempt.
    assert_eq!(state.after_retry(true), AutoplayFallback::Abandoned);
}

#[test]
fn clip_discovery_and_pick_work_over_a_real_directory() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join("night.mp4"), b"x").unwrap();
    std::fs::write(dir.path().join("day.mp4"), b"x").unwrap();
    std::fs::write(dir.path().join("README.txt"), b"x").unwrap();

    let clips = video::discover_clips(dir.path());
    assert_eq!(clips.len(), 2);

    let mut rng = StdRng::seed_from_u64(9);
    let picked = video::pick_clip(&clips, &mut rng).expect("a clip is picked");
    assert!(clips.contains(&picked));
}

#[test]
fn config_round_trips_through_a_settings_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let config: config::Config = toml::from_str(
        r#"
        [audio]
        volume = 0.25
        autoplay = false

        [assets]
        dir = "/srv/promo"
        "#,
    )
    .expect("valid settings");
    config::save_to_path(&config, &path).expect("save settings");

    let loaded = config::load_from_path(&path).expect("load settings");
    assert_eq!(loaded.volume(), 0.25);
    assert!(!loaded.autoplay());
    assert_eq!(loaded.assets_dir(), PathBuf::from("/srv/promo"));
}
