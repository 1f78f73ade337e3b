//! Testimonial video controls.
//!
//! Videos pair by position with `.play-button` and `.fullscreen-button`.
//! Playback and fullscreen requests may be refused by the browser; refusals
//! are logged and leave the player as it was.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlVideoElement};

use crate::config::SiteConfig;
use crate::consts::CLASS_PLAYING;
use crate::dom::{js_error_message, listen, query_all, set_class, set_style};
use crate::error::{Feature, MediaOp, SiteError};
use crate::state::video::{VideoCommand, VideoPlayer, VideoView};

const TARGET: &str = "site::video";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element)]
    type FullscreenElement;

    /// `Element.requestFullscreen()` with its promise kept, so a refusal can
    /// be awaited instead of surfacing as an unhandled rejection.
    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen_promise(this: &FullscreenElement) -> Result<js_sys::Promise, JsValue>;
}

struct Testimonial {
    /// 1-based, as shown in diagnostics.
    number: usize,
    video: HtmlVideoElement,
    play_button: Option<Element>,
    player: Cell<VideoPlayer>,
}

impl Testimonial {
    fn update<R>(&self, f: impl FnOnce(&mut VideoPlayer) -> R) -> R {
        let mut player = self.player.get();
        let out = f(&mut player);
        self.player.set(player);
        out
    }

    fn render(&self, view: VideoView) {
        if let Some(wrapper) = self.video.parent_element() {
            set_class(&wrapper, CLASS_PLAYING, view.playing);
        }
        if let Some(button) = &self.play_button {
            button.set_inner_html(view.button_html);
        }
        if view.rewind {
            self.video.set_current_time(0.0);
        }
    }

    fn rejected(&self, op: MediaOp, err: &JsValue) {
        if op == MediaOp::Play {
            self.update(VideoPlayer::play_rejected);
        }
        let err = SiteError::MediaRejected { op, video: self.number, reason: js_error_message(err) };
        log::warn!(target: TARGET, "{err}");
    }

    fn hover(&self, inside: bool) {
        let Some(visible) = self.update(|p| p.hover(inside)) else {
            return;
        };
        if let Some(button) = &self.play_button {
            set_style(button, "display", if visible { "flex" } else { "none" });
        }
    }
}

fn request_fullscreen(item: &Rc<Testimonial>) {
    let promise = match item.video.unchecked_ref::<FullscreenElement>().request_fullscreen_promise() {
        Ok(promise) => promise,
        Err(err) => {
            item.rejected(MediaOp::Fullscreen, &err);
            return;
        }
    };
    let item = Rc::clone(item);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::debug!(target: TARGET, "video {} entered fullscreen", item.number),
            Err(err) => item.rejected(MediaOp::Fullscreen, &err),
        }
    });
}

fn press(item: &Rc<Testimonial>) {
    let Some(command) = item.update(VideoPlayer::press) else {
        return;
    };
    match command {
        VideoCommand::Play => match item.video.play() {
            Ok(promise) => {
                let item = Rc::clone(item);
                wasm_bindgen_futures::spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            let view = item.update(VideoPlayer::play_resolved);
                            item.render(view);
                            log::info!(target: TARGET, "playing video {}", item.number);
                        }
                        Err(err) => item.rejected(MediaOp::Play, &err),
                    }
                });
            }
            Err(err) => item.rejected(MediaOp::Play, &err),
        },
        VideoCommand::Pause => {
            if let Err(err) = item.video.pause() {
                log::warn!(target: TARGET, "pause failed for video {}: {}", item.number, js_error_message(&err));
            }
            if let Some(view) = VideoPlayer::view_after(command) {
                item.render(view);
            }
            log::info!(target: TARGET, "paused video {}", item.number);
        }
    }
}

fn wire(item: &Rc<Testimonial>, fullscreen_button: Option<&Element>) -> Result<(), SiteError> {
    let video = item.video.clone();

    if let Some(button) = &item.play_button {
        let item = Rc::clone(item);
        listen(button, "click", move |_event| press(&item))?;
    }
    if let Some(button) = fullscreen_button {
        let item = Rc::clone(item);
        listen(button, "click", move |_event| request_fullscreen(&item))?;
    }
    {
        let item = Rc::clone(item);
        listen(&video, "dblclick", move |_event| request_fullscreen(&item))?;
    }
    {
        let item = Rc::clone(item);
        listen(&video, "play", move |_event| {
            let view = item.update(VideoPlayer::on_play_event);
            item.render(view);
            log::debug!(target: TARGET, "video {} started playing", item.number);
        })?;
    }
    for event in ["pause", "ended"] {
        let item = Rc::clone(item);
        listen(&video, event, move |_event| {
            let view = item.update(VideoPlayer::on_stop_event);
            item.render(view);
            log::debug!(target: TARGET, "video {} {event}", item.number);
        })?;
    }
    for (event, inside) in [("mouseenter", true), ("mouseleave", false)] {
        let item = Rc::clone(item);
        listen(&video, event, move |_event| item.hover(inside))?;
    }
    {
        let item = Rc::clone(item);
        listen(&video, "loadedmetadata", move |_event| {
            log::debug!(target: TARGET, "video {} metadata loaded: {}", item.number, item.video.src());
        })?;
    }
    let item = Rc::clone(item);
    listen(&video, "error", move |_event| {
        log::error!(target: TARGET, "error loading video {}: {}", item.number, item.video.src());
    })
}

pub fn install(doc: &Document, _config: &SiteConfig) -> Result<(), SiteError> {
    let videos = query_all(doc, ".testimonial-item video")
        .into_iter()
        .filter_map(|el| el.dyn_ref::<HtmlVideoElement>().cloned())
        .collect::<Vec<_>>();
    if videos.is_empty() {
        return Err(SiteError::missing(Feature::Video, ".testimonial-item video"));
    }
    let play_buttons = query_all(doc, ".play-button");
    let fullscreen_buttons = query_all(doc, ".fullscreen-button");

    for (index, video) in videos.iter().enumerate() {
        let item = Rc::new(Testimonial {
            number: index + 1,
            video: video.clone(),
            play_button: play_buttons.get(index).cloned(),
            player: Cell::new(VideoPlayer::default()),
        });
        if let Err(err) = wire(&item, fullscreen_buttons.get(index)) {
            log::warn!(target: TARGET, "video {}: {err}", item.number);
        }
    }
    log::info!(target: TARGET, "initialized {} testimonial videos", videos.len());
    Ok(())
}
