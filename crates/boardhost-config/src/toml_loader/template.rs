//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Boardhost Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[resolver]
# attempts = 50          # 1-600
# interval_ms = 100      # 10-5000

[geometry]
# debounce_ms = 50       # 0-1000
# offscreen_x = -10000
# offscreen_y = -10000

[lifecycle]
# terminate_timeout_ms = 3000   # 100-30000
# cleanup_delay_ms = 500        # 0-10000
# temp_root = ""                # empty: <system temp>/boardhost

# Per-viewer overrides. Sections: board_viewer, open_board_view,
# flex_board_view, sumatra_pdf.
[viewers.board_viewer]
# path = ""              # empty: look next to boardhost.exe
# isolate = false        # launch from a per-session copy of the install dir

[viewers.open_board_view]

[viewers.flex_board_view]
# conceal = "offscreen"  # "hide" or "offscreen" when its tab is deselected

[viewers.sumatra_pdf]
# startup_delay_ms = 1000

[window]
# title = "Boardhost"
# width = 1280
# height = 800

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
