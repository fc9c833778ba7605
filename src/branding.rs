//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, URLs)
//! to make future rebranding easier. Change values here to rebrand the entire
//! application.

/// The human-readable display name of the application.
///
/// Used in:
/// - The title bar
/// - Help text
/// - Documentation
pub const APP_DISPLAY_NAME: &str = "Swatch";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Binary executable name
/// - Command examples in documentation
pub const APP_BINARY_NAME: &str = "swatch";

/// The directory name for application data (config).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Swatch";

/// Short description for package metadata and help text.
pub const APP_DESCRIPTION: &str = "Terminal explorer for system colors and translucency materials";
