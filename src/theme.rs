//! Theme module for appcost-tui
//!
//! Centralized color palette and styling constants for the form and the
//! breakdown table.

use ratatui::style::Color;
use ratatui::symbols::border;

/// Rounded border set used for all form blocks
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color, used for checked features (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Red error color, used for the validation/fetch banner (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
