//! Surface binding.
//!
//! A surface renders at most one media stream. [`SurfaceBinder`] owns a
//! surface and enforces the binding contract: the previous stream is always
//! detached before the next one is attached, so a surface is never bound to
//! two streams at once.

use crate::models::MediaHandle;

/// Something that can render a media stream (a video texture, an audio
/// output).
pub trait MediaSurface {
    fn attach(&mut self, media: &MediaHandle);
    fn detach(&mut self);
}

impl<T: MediaSurface + ?Sized> MediaSurface for Box<T> {
    fn attach(&mut self, media: &MediaHandle) {
        (**self).attach(media);
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}

pub struct SurfaceBinder<S> {
    surface: S,
    bound: Option<MediaHandle>,
}

impl<S: MediaSurface> SurfaceBinder<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            bound: None,
        }
    }

    /// Binds `media` (or nothing) to the surface.
    ///
    /// Binding the stream that is already bound is a no-op. A new handle
    /// reusing the bound id still rebinds. Returns true if the binding
    /// changed.
    pub fn bind(&mut self, media: Option<&MediaHandle>) -> bool {
        if same_binding(self.bound.as_ref(), media) {
            return false;
        }
        if self.bound.take().is_some() {
            self.surface.detach();
        }
        if let Some(media) = media {
            self.surface.attach(media);
            self.bound = Some(media.clone());
        }
        true
    }

    pub fn unbind(&mut self) -> bool {
        self.bind(None)
    }

    pub fn bound(&self) -> Option<&MediaHandle> {
        self.bound.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Identity comparison for optional bindings.
pub(crate) fn same_binding(a: Option<&MediaHandle>, b: Option<&MediaHandle>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_stream(b),
        (None, None) => true,
        _ => false,
    }
}
