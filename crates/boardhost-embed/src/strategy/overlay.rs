//! Overlay embedding: an undecorated popup owned by the host and kept on top
//! of the container surface, for viewers whose renderer breaks when re-parented.

use boardhost_common::errors::EmbedError;
use boardhost_common::types::PixelRect;
use boardhost_config::schema::ConcealMode;
use boardhost_platform::window_system::{ExtendedTrait, StylePatch, WindowTrait};
use boardhost_platform::{WindowHandle, WindowSystem};

use super::{step, CHROME, EDGES};

/// Placement bookkeeping for one overlay. `last_rect` is only meaningful
/// while `rect_initialized` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub visible: bool,
    pub last_rect: PixelRect,
    pub rect_initialized: bool,
}

impl OverlayState {
    fn forget_rect(&mut self) {
        self.rect_initialized = false;
    }
}

/// Restyle `window` as a popup owned by `owner`.
///
/// With `tool_window`, the owner is set first, the window drops its taskbar
/// button, and the frame is refreshed. Otherwise the window is parked
/// off-screen before it is restyled.
pub fn embed_overlay(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    owner: WindowHandle,
    tool_window: bool,
    offscreen: (i32, i32),
) -> Result<(), EmbedError> {
    let mut chrome = CHROME.to_vec();
    chrome.push(WindowTrait::Child);
    let style = StylePatch::new()
        .remove(&chrome)
        .add(&[WindowTrait::Popup, WindowTrait::Visible]);

    if tool_window {
        set_owner(ws, window, owner)?;
        step("strip decoration", ws.apply_style(window, &style))?;
        step(
            "tool window",
            ws.apply_style(
                window,
                &StylePatch::new()
                    .remove_extended(&[ExtendedTrait::AppWindow])
                    .add_extended(&[ExtendedTrait::ToolWindow]),
            ),
        )?;
        step("refresh frame", ws.refresh_frame(window))?;
    } else {
        step(
            "park offscreen",
            ws.move_window(window, PixelRect::new(offscreen.0, offscreen.1, 1, 1)),
        )?;
        step("strip decoration", ws.apply_style(window, &style))?;
        step(
            "strip edges",
            ws.apply_style(window, &StylePatch::new().remove_extended(EDGES)),
        )?;
        set_owner(ws, window, owner)?;
    }
    Ok(())
}

fn set_owner(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    owner: WindowHandle,
) -> Result<(), EmbedError> {
    if owner.is_null() {
        return Ok(());
    }
    step("set owner", ws.set_owner(window, owner))
}

/// Screen rectangle the overlay must cover: the surface's client area in
/// physical pixels. `None` when the surface has no area.
pub fn target_rect(ws: &dyn WindowSystem, surface: WindowHandle) -> Option<PixelRect> {
    ws.client_screen_rect(surface).filter(|rect| !rect.is_empty())
}

/// Move the overlay to `rect` unless it is already there or `rect` is empty.
/// Returns whether a native move was issued.
pub fn place_overlay(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    state: &mut OverlayState,
    rect: PixelRect,
) -> Result<bool, EmbedError> {
    if rect.is_empty() || !state.visible {
        return Ok(false);
    }
    if state.rect_initialized && state.last_rect == rect {
        return Ok(false);
    }
    step("place overlay", ws.move_window(window, rect))?;
    state.last_rect = rect;
    state.rect_initialized = true;
    Ok(true)
}

pub fn show_overlay(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    state: &mut OverlayState,
) -> Result<(), EmbedError> {
    if !state.visible {
        step("show overlay", ws.set_visible(window, true))?;
        state.visible = true;
    }
    Ok(())
}

/// Take the overlay of a deselected tab out of view.
///
/// `Offscreen` keeps the window shown but parks it outside every monitor at
/// its last size, for viewers that misbehave while hidden.
pub fn conceal_overlay(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    state: &mut OverlayState,
    mode: ConcealMode,
    offscreen: (i32, i32),
) -> Result<(), EmbedError> {
    if !state.visible {
        return Ok(());
    }
    match mode {
        ConcealMode::Hide => step("hide overlay", ws.set_visible(window, false))?,
        ConcealMode::Offscreen => {
            let (width, height) = if state.rect_initialized {
                state.last_rect.size()
            } else {
                (1, 1)
            };
            step(
                "park overlay",
                ws.move_window(window, PixelRect::new(offscreen.0, offscreen.1, width, height)),
            )?;
            step("keep overlay shown", ws.set_visible(window, true))?;
        }
    }
    state.visible = false;
    state.forget_rect();
    Ok(())
}

/// Hide unconditionally, used while the host is minimized.
pub fn hide_overlay(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    state: &mut OverlayState,
) -> Result<(), EmbedError> {
    step("hide overlay", ws.set_visible(window, false))?;
    state.visible = false;
    state.forget_rect();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardhost_platform::window_system::fake::{FakeCall, FakeWindowSystem};

    struct Scene {
        ws: FakeWindowSystem,
        host: WindowHandle,
        surface: WindowHandle,
        window: WindowHandle,
    }

    fn scene() -> Scene {
        let ws = FakeWindowSystem::new();
        let host = ws.add_host(PixelRect::new(100, 80, 1200, 900));
        let surface = ws
            .create_surface(host, PixelRect::new(0, 40, 1200, 860))
            .unwrap();
        let window = ws.spawn_window(500);
        ws.clear_calls();
        Scene {
            ws,
            host,
            surface,
            window,
        }
    }

    fn shown() -> OverlayState {
        OverlayState {
            visible: true,
            ..OverlayState::default()
        }
    }

    #[test]
    fn overlay_becomes_owned_popup() {
        let s = scene();
        embed_overlay(&s.ws, s.window, s.host, false, (-10000, -10000)).unwrap();

        let state = s.ws.window(s.window).unwrap();
        assert_eq!(state.owner, Some(s.host));
        assert_eq!(state.parent, None);
        assert!(state.has(WindowTrait::Popup));
        assert!(!state.has(WindowTrait::Child));
        assert!(!state.has(WindowTrait::Caption));
        assert_eq!(
            s.ws.calls()[0],
            FakeCall::Move(s.window, PixelRect::new(-10000, -10000, 1, 1))
        );
    }

    #[test]
    fn tool_window_overlay_sets_owner_first_and_refreshes() {
        let s = scene();
        embed_overlay(&s.ws, s.window, s.host, true, (-10000, -10000)).unwrap();

        let calls = s.ws.calls();
        assert_eq!(calls[0], FakeCall::SetOwner(s.window, s.host));
        assert_eq!(calls.last(), Some(&FakeCall::RefreshFrame(s.window)));
        assert!(s.ws.moves_of(s.window).is_empty());

        let state = s.ws.window(s.window).unwrap();
        assert!(state.has_extended(ExtendedTrait::ToolWindow));
        assert!(!state.has_extended(ExtendedTrait::AppWindow));
    }

    #[test]
    fn target_rect_is_surface_on_screen() {
        let s = scene();
        assert_eq!(
            target_rect(&s.ws, s.surface),
            Some(PixelRect::new(100, 120, 1200, 860))
        );
        s.ws.place(s.surface, PixelRect::new(0, 40, 1200, 0));
        assert_eq!(target_rect(&s.ws, s.surface), None);
    }

    #[test]
    fn placement_is_idempotent() {
        let s = scene();
        let mut state = shown();
        let rect = PixelRect::new(100, 120, 1200, 860);

        assert!(place_overlay(&s.ws, s.window, &mut state, rect).unwrap());
        assert!(!place_overlay(&s.ws, s.window, &mut state, rect).unwrap());
        assert_eq!(s.ws.moves_of(s.window), vec![rect]);
        assert!(state.rect_initialized);
        assert_eq!(state.last_rect, rect);
    }

    #[test]
    fn empty_rect_keeps_previous_placement() {
        let s = scene();
        let mut state = shown();
        let rect = PixelRect::new(100, 120, 1200, 860);
        place_overlay(&s.ws, s.window, &mut state, rect).unwrap();

        let moved = place_overlay(&s.ws, s.window, &mut state, PixelRect::new(0, 0, 0, 10));
        assert!(!moved.unwrap());
        assert_eq!(state.last_rect, rect);
    }

    #[test]
    fn conceal_by_hiding() {
        let s = scene();
        let mut state = shown();
        conceal_overlay(&s.ws, s.window, &mut state, ConcealMode::Hide, (-10000, -10000)).unwrap();
        assert!(!s.ws.window(s.window).unwrap().visible);
        assert!(!state.visible);

        // already concealed
        s.ws.clear_calls();
        conceal_overlay(&s.ws, s.window, &mut state, ConcealMode::Hide, (-10000, -10000)).unwrap();
        assert!(s.ws.calls().is_empty());
    }

    #[test]
    fn conceal_offscreen_keeps_last_size() {
        let s = scene();
        let mut state = shown();
        place_overlay(&s.ws, s.window, &mut state, PixelRect::new(100, 120, 1200, 860)).unwrap();

        conceal_overlay(
            &s.ws,
            s.window,
            &mut state,
            ConcealMode::Offscreen,
            (-10000, -10000),
        )
        .unwrap();

        let window = s.ws.window(s.window).unwrap();
        assert!(window.visible);
        assert_eq!(window.rect, PixelRect::new(-10000, -10000, 1200, 860));
        assert!(!state.visible);
        assert!(!state.rect_initialized);
    }

    #[test]
    fn conceal_offscreen_without_placement_uses_one_pixel() {
        let s = scene();
        let mut state = shown();
        conceal_overlay(&s.ws, s.window, &mut state, ConcealMode::Offscreen, (-9000, -9000))
            .unwrap();
        assert_eq!(
            s.ws.window(s.window).unwrap().rect,
            PixelRect::new(-9000, -9000, 1, 1)
        );
    }

    #[test]
    fn show_after_hide_replaces_overlay() {
        let s = scene();
        let mut state = shown();
        let rect = PixelRect::new(100, 120, 1200, 860);
        place_overlay(&s.ws, s.window, &mut state, rect).unwrap();
        hide_overlay(&s.ws, s.window, &mut state).unwrap();

        show_overlay(&s.ws, s.window, &mut state).unwrap();
        assert!(place_overlay(&s.ws, s.window, &mut state, rect).unwrap());
        assert!(s.ws.window(s.window).unwrap().visible);
    }
}
