/// Configuration for turning a decoded tree into text.
///
/// ```text
/// ┌───────────────────┬──────────────────────────────────────────────┐
/// │ Field             │ Purpose                                      │
/// ├───────────────────┼──────────────────────────────────────────────┤
/// │ mode              │ Outline (one line per node) or ByteGroups    │
/// │ show_offsets      │ Append `@start..end` spans in outline mode   │
/// │ max_content_bytes │ Content octets shown per primitive node      │
/// └───────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub show_offsets: bool,
    pub max_content_bytes: usize,
}

impl Default for RenderConfig {
    /// Outline mode with offsets and the first 16 content octets.
    fn default() -> Self {
        Self {
            mode: RenderMode::Outline,
            show_offsets: true,
            max_content_bytes: 16,
        }
    }
}

/// Output layouts.
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────────┐
/// │ Mode       │ Shape                                             │
/// ├────────────┼───────────────────────────────────────────────────┤
/// │ Outline    │ 30 22  SEQUENCE len=34 children=3 @0..36          │
/// │            │   02 01 01  INTEGER len=1 @2..5                   │
/// ├────────────┼───────────────────────────────────────────────────┤
/// │ ByteGroups │ 0000  30  T  0                                    │
/// │            │ 0001  22  L  0                                    │
/// │            │ 0002  02  T  1                                    │
/// └────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Outline,
    ByteGroups,
}
