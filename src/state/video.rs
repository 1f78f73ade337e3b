//! Testimonial video playback state.
//!
//! Playback start is asynchronous: pressing play moves to `PlayPending` until
//! the platform resolves or rejects the request. A rejection returns to
//! `Paused` with nothing else changed.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

pub const PLAY_ICON_HTML: &str = r#"<i class="fa-solid fa-play"></i>"#;
pub const PAUSE_ICON_HTML: &str = r#"<i class="fa-solid fa-pause"></i>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Paused,
    PlayPending,
    Playing,
}

/// Media call the host must make after a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCommand {
    Play,
    Pause,
}

/// DOM state to apply after a playback transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoView {
    /// Whether the wrapper carries the `playing` class.
    pub playing: bool,
    pub button_html: &'static str,
    /// Reset `currentTime` to 0.
    pub rewind: bool,
}

impl VideoView {
    const PLAYING: Self = Self { playing: true, button_html: PAUSE_ICON_HTML, rewind: false };
    const STOPPED: Self = Self { playing: false, button_html: PLAY_ICON_HTML, rewind: true };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VideoPlayer {
    playback: Playback,
    button_visible: bool,
}

impl VideoPlayer {
    #[must_use]
    pub fn playback(self) -> Playback {
        self.playback
    }

    #[must_use]
    pub fn button_visible(self) -> bool {
        self.button_visible
    }

    /// Play button pressed. `None` while a play request is still in flight.
    pub fn press(&mut self) -> Option<VideoCommand> {
        match self.playback {
            Playback::Paused => {
                self.playback = Playback::PlayPending;
                Some(VideoCommand::Play)
            }
            Playback::Playing => {
                self.playback = Playback::Paused;
                Some(VideoCommand::Pause)
            }
            Playback::PlayPending => None,
        }
    }

    /// View to apply right after issuing `command`.
    ///
    /// Pausing takes effect synchronously; playing waits for the platform.
    #[must_use]
    pub fn view_after(command: VideoCommand) -> Option<VideoView> {
        match command {
            VideoCommand::Play => None,
            VideoCommand::Pause => Some(VideoView::STOPPED),
        }
    }

    pub fn play_resolved(&mut self) -> VideoView {
        self.playback = Playback::Playing;
        VideoView::PLAYING
    }

    /// The platform refused playback; nothing visible changes.
    pub fn play_rejected(&mut self) {
        if self.playback == Playback::PlayPending {
            self.playback = Playback::Paused;
        }
    }

    /// Media `play` event (also fires for native controls or autoplay).
    pub fn on_play_event(&mut self) -> VideoView {
        self.playback = Playback::Playing;
        VideoView::PLAYING
    }

    /// Media `pause` or `ended` event.
    pub fn on_stop_event(&mut self) -> VideoView {
        self.playback = Playback::Paused;
        VideoView::STOPPED
    }

    /// Pointer hover over the video. Returns the new button visibility, or
    /// `None` while playing (hover never hides controls of a running video).
    pub fn hover(&mut self, inside: bool) -> Option<bool> {
        if self.playback == Playback::Playing {
            return None;
        }
        self.button_visible = inside;
        Some(inside)
    }
}
