use super::*;

#[test]
fn press_when_paused_requests_play_and_waits() {
    let mut player = VideoPlayer::default();
    assert_eq!(player.press(), Some(VideoCommand::Play));
    assert_eq!(player.playback(), Playback::PlayPending);
    assert_eq!(VideoPlayer::view_after(VideoCommand::Play), None);
}

#[test]
fn press_while_pending_is_ignored() {
    let mut player = VideoPlayer::default();
    player.press();
    assert_eq!(player.press(), None);
}

#[test]
fn resolved_play_shows_pause_icon() {
    let mut player = VideoPlayer::default();
    player.press();
    let view = player.play_resolved();
    assert!(view.playing);
    assert_eq!(view.button_html, PAUSE_ICON_HTML);
    assert_eq!(player.playback(), Playback::Playing);
}

#[test]
fn rejected_play_leaves_player_paused() {
    let mut player = VideoPlayer::default();
    player.press();
    player.play_rejected();
    assert_eq!(player.playback(), Playback::Paused);
    assert_eq!(player.press(), Some(VideoCommand::Play));
}

#[test]
fn press_while_playing_pauses_and_rewinds() {
    let mut player = VideoPlayer::default();
    player.press();
    player.play_resolved();
    assert_eq!(player.press(), Some(VideoCommand::Pause));
    let view = VideoPlayer::view_after(VideoCommand::Pause).unwrap();
    assert!(!view.playing);
    assert!(view.rewind);
    assert_eq!(view.button_html, PLAY_ICON_HTML);
}

#[test]
fn media_events_drive_state() {
    let mut player = VideoPlayer::default();
    assert!(player.on_play_event().playing);
    assert_eq!(player.playback(), Playback::Playing);
    let view = player.on_stop_event();
    assert!(view.rewind);
    assert_eq!(player.playback(), Playback::Paused);
}

#[test]
fn hover_toggles_button_only_while_not_playing() {
    let mut player = VideoPlayer::default();
    assert_eq!(player.hover(true), Some(true));
    assert!(player.button_visible());
    player.on_play_event();
    assert_eq!(player.hover(false), None);
    assert!(player.button_visible());
    player.on_stop_event();
    assert_eq!(player.hover(false), Some(false));
}
