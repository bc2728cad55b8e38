//! Chart font discovery
//!
//! Probes a fixed list of host font files so titles with CJK characters
//! render correctly. When none is found, charts fall back to the renderer's
//! default sans-serif family.

use std::path::Path;

/// Fallback family when no localized font file exists on the host
pub const DEFAULT_FAMILY: &str = "sans-serif";

/// Known CJK font files and the family names they provide
const CANDIDATES: &[(&str, &str)] = &[
    // Windows
    ("C:/Windows/Fonts/simhei.ttf", "SimHei"),
    ("C:/Windows/Fonts/simsun.ttc", "SimSun"),
    ("C:/Windows/Fonts/msyh.ttc", "Microsoft YaHei"),
    ("C:/Windows/Fonts/simkai.ttf", "KaiTi"),
    // Linux
    (
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "Noto Sans CJK SC",
    ),
    (
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        "WenQuanYi Micro Hei",
    ),
    // macOS
    ("/System/Library/Fonts/STHeiti Light.ttc", "Heiti SC"),
];

/// Pick the chart font family, preferring a discovered localized font
#[must_use]
pub fn chart_family() -> String {
    for (path, family) in CANDIDATES {
        if Path::new(path).exists() {
            tracing::debug!(path, family, "Using discovered chart font");
            return (*family).to_string();
        }
    }
    DEFAULT_FAMILY.to_string()
}
