//! Child-window embedding: re-parent the foreign window into a container surface.

use boardhost_common::errors::EmbedError;
use boardhost_common::types::PixelRect;
use boardhost_platform::window_system::{NativeMessage, StylePatch, WindowTrait};
use boardhost_platform::{WindowHandle, WindowSystem};

use super::{step, CHROME, EDGES};

/// Re-parent `window` into `surface` and make it fill the surface.
///
/// The window is parked off-screen before it is restyled so its old frame
/// never flashes, and restyled before it is re-parented so the new parent
/// never hosts a decorated frame. Every step is safe to repeat.
pub fn embed_child(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    surface: WindowHandle,
    offscreen: (i32, i32),
) -> Result<Option<PixelRect>, EmbedError> {
    step(
        "park offscreen",
        ws.move_window(window, PixelRect::new(offscreen.0, offscreen.1, 1, 1)),
    )?;
    step(
        "strip decoration",
        ws.apply_style(
            window,
            &StylePatch::new().remove(CHROME).add(&[WindowTrait::Child]),
        ),
    )?;
    step(
        "strip edges",
        ws.apply_style(window, &StylePatch::new().remove_extended(EDGES)),
    )?;
    step("reparent", ws.set_parent(window, surface))?;
    step("revoke drag and drop", ws.revoke_drag_drop(window))?;
    let fitted = fit_child(ws, window, surface, None, false)?;
    step("show", ws.set_visible(window, true))?;
    Ok(fitted)
}

/// Take over a window the viewer already created inside `surface`.
pub fn adopt_child(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    surface: WindowHandle,
    notify_resize: bool,
) -> Result<Option<PixelRect>, EmbedError> {
    fit_child(ws, window, surface, None, notify_resize)
}

/// Resize `window` to exactly fill `surface`.
///
/// Returns the applied rectangle, or `None` when the surface has no area or
/// the window already has that rectangle.
pub fn fit_child(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    surface: WindowHandle,
    last: Option<PixelRect>,
    notify_resize: bool,
) -> Result<Option<PixelRect>, EmbedError> {
    let Some((width, height)) = ws.client_size(surface) else {
        return Ok(None);
    };
    let fill = PixelRect::filling(width, height);
    if fill.is_empty() || last == Some(fill) {
        return Ok(None);
    }

    step("fit", ws.move_window(window, fill))?;
    if notify_resize {
        step(
            "notify size",
            ws.send_message(window, NativeMessage::Resized { width, height }),
        )?;
    }
    Ok(Some(fill))
}
