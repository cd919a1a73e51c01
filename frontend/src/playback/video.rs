//! egui-backed video surfaces.

use super::surface::MediaSurface;
use crate::models::{MediaHandle, StreamId};
use egui::{ColorImage, TextureHandle, TextureOptions};
use std::collections::HashMap;

/// Shows the frames of one bound stream as an egui texture.
pub struct VideoSurface {
    name: String,
    media: Option<MediaHandle>,
    texture: Option<TextureHandle>,
    shown_seq: Option<u64>,
}

impl VideoSurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media: None,
            texture: None,
            shown_seq: None,
        }
    }

    /// Uploads the newest frame if it changed and returns the texture.
    /// Returns `None` until the bound stream has produced a frame.
    pub fn refresh(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        let frame = self.media.as_ref()?.latest_frame()?;

        if self.shown_seq != Some(frame.seq) {
            let image = ColorImage::clone(&frame.image);
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::LINEAR),
                None => {
                    self.texture = Some(ctx.load_texture(&self.name, image, TextureOptions::LINEAR));
                }
            }
            self.shown_seq = Some(frame.seq);
        }
        self.texture.as_ref()
    }

    pub fn media(&self) -> Option<&MediaHandle> {
        self.media.as_ref()
    }
}

impl MediaSurface for VideoSurface {
    fn attach(&mut self, media: &MediaHandle) {
        self.media = Some(media.clone());
        self.shown_seq = None;
    }

    fn detach(&mut self) {
        self.media = None;
        self.texture = None;
        self.shown_seq = None;
    }
}

/// Small preview surfaces for the thumbnail strip, one per stream.
#[derive(Default)]
pub struct ThumbnailSurfaces {
    surfaces: HashMap<StreamId, VideoSurface>,
}

impl ThumbnailSurfaces {
    /// Texture for `media`, creating its surface on first use. A surface
    /// still showing an older stream under the same id is reattached.
    pub fn texture(&mut self, ctx: &egui::Context, media: &MediaHandle) -> Option<&TextureHandle> {
        let surface = self
            .surfaces
            .entry(media.id().clone())
            .or_insert_with(|| VideoSurface::new(format!("thumb-{}", media.id())));
        if !surface.media().is_some_and(|bound| bound.same_stream(media)) {
            if surface.media().is_some() {
                surface.detach();
            }
            surface.attach(media);
        }
        surface.refresh(ctx)
    }

    /// Drops surfaces for streams no longer in `live`.
    pub fn retain(&mut self, live: &[&StreamId]) {
        self.surfaces.retain(|id, _| live.contains(&id));
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::utils::rgb_to_color_image;

    fn with_ctx(f: impl FnOnce(&egui::Context)) {
        let ctx = egui::Context::default();
        let mut f = Some(f);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            if let Some(f) = f.take() {
                f(ctx);
            }
        });
    }

    #[test]
    fn test_no_texture_before_first_frame() {
        with_ctx(|ctx| {
            let media = MediaHandle::new("a");
            let mut surface = VideoSurface::new("main");
            surface.attach(&media);

            assert!(surface.refresh(ctx).is_none());

            media.push_frame(rgb_to_color_image(2, 1, vec![0; 6]));
            let size = surface.refresh(ctx).map(|t| t.size());
            assert_eq!(size, Some([2, 1]));
        });
    }

    #[test]
    fn test_detach_drops_texture() {
        with_ctx(|ctx| {
            let media = MediaHandle::new("a");
            media.push_frame(rgb_to_color_image(1, 1, vec![9, 9, 9]));
            let mut surface = VideoSurface::new("main");
            surface.attach(&media);
            assert!(surface.refresh(ctx).is_some());

            surface.detach();
            assert!(surface.refresh(ctx).is_none());
            assert!(surface.media().is_none());
        });
    }

    #[test]
    fn test_thumbnails_retain_live_streams() {
        with_ctx(|ctx| {
            let a = MediaHandle::new("a");
            let b = MediaHandle::new("b");
            let mut thumbs = ThumbnailSurfaces::default();
            thumbs.texture(ctx, &a);
            thumbs.texture(ctx, &b);
            assert_eq!(thumbs.len(), 2);

            thumbs.retain(&[b.id()]);
            assert_eq!(thumbs.len(), 1);
        });
    }

    #[test]
    fn test_thumbnail_follows_replaced_stream() {
        with_ctx(|ctx| {
            let old = MediaHandle::new("a");
            let mut thumbs = ThumbnailSurfaces::default();
            assert!(thumbs.texture(ctx, &old).is_none());

            let replacement = MediaHandle::new("a");
            replacement.push_frame(rgb_to_color_image(3, 1, vec![0; 9]));

            let size = thumbs.texture(ctx, &replacement).map(|t| t.size());
            assert_eq!(size, Some([3, 1]));
            assert_eq!(thumbs.len(), 1);
        });
    }
}
