//! Win32 implementation of [`WindowSystem`].

use boardhost_common::errors::PlatformError;
use boardhost_common::types::PixelRect;
use windows::core::{BOOL, HSTRING, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Ole::RevokeDragDrop;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::{SetActiveWindow, SetFocus};
use windows::Win32::UI::WindowsAndMessaging::{
    AttachThreadInput, ClientToScreen, CreateWindowExW, DestroyWindow, EnumChildWindows,
    EnumWindows, GetClientRect, GetWindow, GetWindowLongPtrW, GetWindowThreadProcessId, IsWindow,
    IsWindowVisible, MessageBoxW, MoveWindow, SendMessageW, SetForegroundWindow,
    SetParent, SetWindowLongPtrW, SetWindowPos, ShowWindow, GWL_EXSTYLE, GWL_STYLE, GW_CHILD,
    GW_OWNER, MB_ICONERROR, MB_OK, SIZE_RESTORED, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOSIZE,
    SWP_NOZORDER, SW_HIDE, SW_SHOW, WA_ACTIVE, WINDOW_EX_STYLE, WINDOW_LONG_PTR_INDEX,
    WINDOW_STYLE, WM_ACTIVATE, WM_ACTIVATEAPP, WM_CHAR, WM_KEYDOWN, WM_KEYUP, WM_SIZE,
    WM_SYSKEYDOWN, WM_SYSKEYUP, WS_BORDER, WS_CAPTION, WS_CHILD, WS_CLIPCHILDREN, WS_EX_APPWINDOW,
    WS_EX_CLIENTEDGE, WS_EX_DLGMODALFRAME, WS_EX_STATICEDGE, WS_EX_TOOLWINDOW, WS_EX_WINDOWEDGE,
    WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_POPUP, WS_SYSMENU, WS_THICKFRAME, WS_VISIBLE,
};

use super::{
    ExtendedTrait, NativeMessage, Result, StylePatch, WindowHandle, WindowSystem, WindowTrait,
};

/// `GWLP_HWNDPARENT`: for top-level windows this slot holds the owner.
const OWNER_INDEX: WINDOW_LONG_PTR_INDEX = WINDOW_LONG_PTR_INDEX(-8);

/// Repeat count 1, previous-state and transition bits set.
const KEY_UP_LPARAM: isize = 0xC000_0001_u32 as isize;
/// Context-code bit marking a key pressed with Alt held.
const ALT_CONTEXT: isize = 1 << 29;

pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32WindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Handle and style conversion
// =============================================================================

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as usize as *mut _)
}

fn handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as usize as u64)
}

fn style_bits(t: WindowTrait) -> u32 {
    match t {
        WindowTrait::Caption => WS_CAPTION.0,
        WindowTrait::Border => WS_BORDER.0,
        WindowTrait::ThickFrame => WS_THICKFRAME.0,
        WindowTrait::MinimizeBox => WS_MINIMIZEBOX.0,
        WindowTrait::MaximizeBox => WS_MAXIMIZEBOX.0,
        WindowTrait::SystemMenu => WS_SYSMENU.0,
        WindowTrait::Child => WS_CHILD.0,
        WindowTrait::Popup => WS_POPUP.0,
        WindowTrait::Visible => WS_VISIBLE.0,
    }
}

fn extended_bits(t: ExtendedTrait) -> u32 {
    match t {
        ExtendedTrait::DialogFrame => WS_EX_DLGMODALFRAME.0,
        ExtendedTrait::WindowEdge => WS_EX_WINDOWEDGE.0,
        ExtendedTrait::ClientEdge => WS_EX_CLIENTEDGE.0,
        ExtendedTrait::StaticEdge => WS_EX_STATICEDGE.0,
        ExtendedTrait::ToolWindow => WS_EX_TOOLWINDOW.0,
        ExtendedTrait::AppWindow => WS_EX_APPWINDOW.0,
    }
}

fn patch_word<T: Copy>(current: u32, remove: &[T], add: &[T], bits: fn(T) -> u32) -> u32 {
    let cleared = remove.iter().fold(current, |acc, t| acc & !bits(*t));
    add.iter().fold(cleared, |acc, t| acc | bits(*t))
}

fn lparam_from_size(width: i32, height: i32) -> isize {
    (((height as u32 & 0xFFFF) << 16) | (width as u32 & 0xFFFF)) as isize
}

/// Native `(msg, wparam, lparam)` for a forwarded message.
///
/// Everything is delivered with `SendMessageW`. A posted key-down would pass
/// through the viewer's `TranslateMessage` and produce a second `WM_CHAR`
/// next to the one forwarded from host text input.
fn encode_message(message: NativeMessage) -> (u32, usize, isize) {
    match message {
        NativeMessage::KeyDown { vk, system: true } => (WM_SYSKEYDOWN, vk as usize, 1 | ALT_CONTEXT),
        NativeMessage::KeyDown { vk, system: false } => (WM_KEYDOWN, vk as usize, 1),
        NativeMessage::KeyUp { vk, system: true } => {
            (WM_SYSKEYUP, vk as usize, KEY_UP_LPARAM | ALT_CONTEXT)
        }
        NativeMessage::KeyUp { vk, system: false } => (WM_KEYUP, vk as usize, KEY_UP_LPARAM),
        NativeMessage::Char(c) => (WM_CHAR, c as u32 as usize, 1),
        NativeMessage::ActivateApp => (WM_ACTIVATEAPP, 1, 0),
        NativeMessage::Activate => (WM_ACTIVATE, WA_ACTIVE as usize, 0),
        NativeMessage::Resized { width, height } => (
            WM_SIZE,
            SIZE_RESTORED as usize,
            lparam_from_size(width, height),
        ),
    }
}

fn native_err(op: &'static str, err: windows::core::Error) -> PlatformError {
    PlatformError::native(op, err.message())
}

// =============================================================================
// Enumeration
// =============================================================================

unsafe extern "system" fn collect_window(window: HWND, lparam: LPARAM) -> BOOL {
    let found = &mut *(lparam.0 as *mut Vec<HWND>);
    found.push(window);
    BOOL(1)
}

fn top_level_windows() -> Vec<HWND> {
    let mut found: Vec<HWND> = Vec::new();
    unsafe {
        let _ = EnumWindows(
            Some(collect_window),
            LPARAM(&mut found as *mut Vec<HWND> as isize),
        );
    }
    found
}

fn descendants(parent: HWND) -> Vec<HWND> {
    let mut found: Vec<HWND> = Vec::new();
    unsafe {
        let _ = EnumChildWindows(
            Some(parent),
            Some(collect_window),
            LPARAM(&mut found as *mut Vec<HWND> as isize),
        );
    }
    found
}

fn process_id(window: HWND) -> u32 {
    let mut pid = 0u32;
    unsafe {
        GetWindowThreadProcessId(window, Some(&mut pid));
    }
    pid
}

fn has_owner(window: HWND) -> bool {
    unsafe { GetWindow(window, GW_OWNER) }.is_ok_and(|owner| !owner.is_invalid())
}

impl Win32WindowSystem {
    fn alive(&self, window: WindowHandle) -> Result<HWND> {
        let h = hwnd(window);
        if unsafe { IsWindow(Some(h)) }.as_bool() {
            Ok(h)
        } else {
            Err(PlatformError::WindowGone(window.0))
        }
    }

    fn send(&self, window: HWND, msg: u32, wparam: usize, lparam: isize) {
        unsafe {
            SendMessageW(window, msg, Some(WPARAM(wparam)), Some(LPARAM(lparam)));
        }
    }
}

impl WindowSystem for Win32WindowSystem {
    fn main_window(&self, pid: u32) -> Option<WindowHandle> {
        top_level_windows()
            .into_iter()
            .find(|w| {
                process_id(*w) == pid && unsafe { IsWindowVisible(*w) }.as_bool() && !has_owner(*w)
            })
            .map(handle)
    }

    fn find_visible_window(&self, pid: u32) -> Option<WindowHandle> {
        top_level_windows()
            .into_iter()
            .find(|w| process_id(*w) == pid && unsafe { IsWindowVisible(*w) }.as_bool())
            .map(handle)
    }

    fn first_child(&self, parent: WindowHandle) -> Option<WindowHandle> {
        unsafe { GetWindow(hwnd(parent), GW_CHILD) }
            .ok()
            .filter(|child| !child.is_invalid())
            .map(handle)
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        !window.is_null() && unsafe { IsWindow(Some(hwnd(window))) }.as_bool()
    }

    fn window_thread_id(&self, window: WindowHandle) -> Option<u32> {
        let thread = unsafe { GetWindowThreadProcessId(hwnd(window), None) };
        (thread != 0).then_some(thread)
    }

    fn current_thread_id(&self) -> u32 {
        unsafe { GetCurrentThreadId() }
    }

    fn client_size(&self, window: WindowHandle) -> Option<(i32, i32)> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(hwnd(window), &mut rect) }.ok()?;
        Some((rect.right - rect.left, rect.bottom - rect.top))
    }

    fn client_screen_rect(&self, window: WindowHandle) -> Option<PixelRect> {
        let h = hwnd(window);
        let mut rect = RECT::default();
        unsafe { GetClientRect(h, &mut rect) }.ok()?;
        let mut origin = POINT::default();
        if !unsafe { ClientToScreen(h, &mut origin) }.as_bool() {
            return None;
        }
        Some(PixelRect::new(
            origin.x,
            origin.y,
            rect.right - rect.left,
            rect.bottom - rect.top,
        ))
    }

    fn apply_style(&self, window: WindowHandle, patch: &StylePatch) -> Result<()> {
        let h = self.alive(window)?;
        unsafe {
            if !patch.remove.is_empty() || !patch.add.is_empty() {
                let current = GetWindowLongPtrW(h, GWL_STYLE) as u32;
                let next = patch_word(current, &patch.remove, &patch.add, style_bits);
                SetWindowLongPtrW(h, GWL_STYLE, WINDOW_STYLE(next).0 as isize);
            }
            if patch.touches_extended() {
                let current = GetWindowLongPtrW(h, GWL_EXSTYLE) as u32;
                let next = patch_word(
                    current,
                    &patch.remove_extended,
                    &patch.add_extended,
                    extended_bits,
                );
                SetWindowLongPtrW(h, GWL_EXSTYLE, WINDOW_EX_STYLE(next).0 as isize);
            }
        }
        Ok(())
    }

    fn set_parent(&self, window: WindowHandle, parent: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        unsafe { SetParent(h, Some(hwnd(parent))) }
            .map(|_| ())
            .map_err(|e| native_err("set_parent", e))
    }

    fn set_owner(&self, window: WindowHandle, owner: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        unsafe {
            SetWindowLongPtrW(h, OWNER_INDEX, owner.0 as isize);
        }
        Ok(())
    }

    fn refresh_frame(&self, window: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        unsafe {
            SetWindowPos(
                h,
                None,
                0,
                0,
                0,
                0,
                SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER,
            )
        }
        .map_err(|e| native_err("refresh_frame", e))
    }

    fn revoke_drag_drop(&self, window: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        // Windows that never registered a drop target report an error here.
        unsafe {
            let _ = RevokeDragDrop(h);
            for child in descendants(h) {
                let _ = RevokeDragDrop(child);
            }
        }
        Ok(())
    }

    fn move_window(&self, window: WindowHandle, rect: PixelRect) -> Result<()> {
        let h = self.alive(window)?;
        unsafe { MoveWindow(h, rect.x, rect.y, rect.width, rect.height, true) }
            .map_err(|e| native_err("move_window", e))
    }

    fn set_visible(&self, window: WindowHandle, visible: bool) -> Result<()> {
        let h = self.alive(window)?;
        // Return value is the previous visibility, not success.
        unsafe {
            let _ = ShowWindow(h, if visible { SW_SHOW } else { SW_HIDE });
        }
        Ok(())
    }

    fn send_message(&self, window: WindowHandle, message: NativeMessage) -> Result<()> {
        let h = self.alive(window)?;
        let (msg, wparam, lparam) = encode_message(message);
        self.send(h, msg, wparam, lparam);
        Ok(())
    }

    fn attach_thread_input(&self, from: u32, to: u32, attach: bool) -> Result<()> {
        if unsafe { AttachThreadInput(from, to, attach) }.as_bool() {
            Ok(())
        } else {
            Err(PlatformError::native(
                "attach_thread_input",
                format!("threads {from} -> {to}"),
            ))
        }
    }

    fn set_foreground(&self, window: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        if unsafe { SetForegroundWindow(h) }.as_bool() {
            Ok(())
        } else {
            Err(PlatformError::native("set_foreground", "request refused"))
        }
    }

    fn set_active(&self, window: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        unsafe { SetActiveWindow(h) }
            .map(|_| ())
            .map_err(|e| native_err("set_active", e))
    }

    fn set_focus(&self, window: WindowHandle) -> Result<()> {
        let h = self.alive(window)?;
        unsafe { SetFocus(Some(h)) }
            .map(|_| ())
            .map_err(|e| native_err("set_focus", e))
    }

    fn create_surface(&self, host: WindowHandle, bounds: PixelRect) -> Result<WindowHandle> {
        let parent = self.alive(host)?;
        let module = unsafe { GetModuleHandleW(None) }.map_err(|e| native_err("create_surface", e))?;
        let surface = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                &HSTRING::from("STATIC"),
                PCWSTR::null(),
                WS_CHILD | WS_CLIPCHILDREN,
                bounds.x,
                bounds.y,
                bounds.width,
                bounds.height,
                Some(parent),
                None,
                Some(module.into()),
                None,
            )
        }
        .map_err(|e| native_err("create_surface", e))?;
        Ok(handle(surface))
    }

    fn destroy_surface(&self, surface: WindowHandle) -> Result<()> {
        let h = self.alive(surface)?;
        unsafe { DestroyWindow(h) }.map_err(|e| native_err("destroy_surface", e))
    }

    fn show_alert(&self, owner: Option<WindowHandle>, title: &str, message: &str) {
        let owner = owner.filter(|o| !o.is_null()).map(hwnd);
        unsafe {
            MessageBoxW(
                owner,
                &HSTRING::from(message),
                &HSTRING::from(title),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_word_removes_before_adding() {
        let current = WS_CAPTION.0 | WS_SYSMENU.0 | WS_VISIBLE.0;
        let next = patch_word(
            current,
            &[WindowTrait::Caption, WindowTrait::SystemMenu],
            &[WindowTrait::Child],
            style_bits,
        );
        assert_eq!(next, WS_CHILD.0 | WS_VISIBLE.0);
    }

    #[test]
    fn size_lparam_packs_width_low() {
        assert_eq!(lparam_from_size(800, 600), (600 << 16) | 800);
    }

    #[test]
    fn handle_round_trip() {
        let h = WindowHandle(0x20_0a4c);
        assert_eq!(handle(hwnd(h)), h);
    }

    #[test]
    fn key_messages_encode_with_context_bits() {
        assert_eq!(
            encode_message(NativeMessage::KeyDown {
                vk: 0x41,
                system: false
            }),
            (WM_KEYDOWN, 0x41, 1)
        );
        assert_eq!(
            encode_message(NativeMessage::KeyUp {
                vk: 0x74,
                system: true
            }),
            (WM_SYSKEYUP, 0x74, KEY_UP_LPARAM | ALT_CONTEXT)
        );
        assert_eq!(encode_message(NativeMessage::Char('a')), (WM_CHAR, 'a' as usize, 1));
    }

    #[test]
    fn forwarded_keys_never_reach_the_message_queue() {
        use windows::Win32::UI::WindowsAndMessaging::{
            PeekMessageW, MSG, PM_REMOVE, WM_KEYFIRST, WM_KEYLAST, WS_OVERLAPPED,
        };

        let module = unsafe { GetModuleHandleW(None) }.unwrap();
        let window = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                &HSTRING::from("STATIC"),
                PCWSTR::null(),
                WS_OVERLAPPED,
                0,
                0,
                100,
                100,
                None,
                None,
                Some(module.into()),
                None,
            )
        }
        .unwrap();

        let ws = Win32WindowSystem::new();
        let target = handle(window);
        ws.send_message(
            target,
            NativeMessage::KeyDown {
                vk: 0x41,
                system: false,
            },
        )
        .unwrap();
        ws.send_message(target, NativeMessage::Char('a')).unwrap();

        let mut msg = MSG::default();
        let queued =
            unsafe { PeekMessageW(&mut msg, Some(window), WM_KEYFIRST, WM_KEYLAST, PM_REMOVE) };
        assert!(!queued.as_bool());

        unsafe { DestroyWindow(window) }.unwrap();
    }
}
