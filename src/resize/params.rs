//! Offset parameters: parsing, validation and interactive suggestions

use super::error::ResizeError;

/// Offsets to keep between a container's edges and its content.
///
/// `vertical` applies top and bottom, `horizontal` left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPair {
    pub vertical: u32,
    pub horizontal: u32,
}

impl OffsetPair {
    /// Horizontal falls back to vertical when not given
    pub fn new(vertical: u32, horizontal: Option<u32>) -> Self {
        Self {
            vertical,
            horizontal: horizontal.unwrap_or(vertical),
        }
    }

    pub fn uniform(offset: u32) -> Self {
        Self::new(offset, None)
    }
}

/// Raw parameter strings as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterValues {
    pub offset: String,
    pub offset_hor: Option<String>,
}

impl ParameterValues {
    pub fn new(offset: impl Into<String>) -> Self {
        Self {
            offset: offset.into(),
            offset_hor: None,
        }
    }

    pub fn with_horizontal(mut self, offset_hor: impl Into<String>) -> Self {
        self.offset_hor = Some(offset_hor.into());
        self
    }

    /// Validate both parameters
    pub fn offsets(&self) -> Result<OffsetPair, ResizeError> {
        let vertical = parse_offset(&self.offset)?;
        let horizontal = parse_optional_offset(self.offset_hor.as_deref())?;
        Ok(OffsetPair::new(vertical, horizontal))
    }
}

/// Parse a required offset: a non-negative integer, surrounding whitespace allowed
pub fn parse_offset(input: &str) -> Result<u32, ResizeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ResizeError::invalid_offset(input, "an offset is required"));
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ResizeError::invalid_offset(input, "not a whole number"))?;
    if value < 0 {
        return Err(ResizeError::invalid_offset(input, "must not be negative"));
    }
    u32::try_from(value).map_err(|_| ResizeError::invalid_offset(input, "too large"))
}

/// Parse an optional offset; absent or blank input means "not given"
pub fn parse_optional_offset(input: Option<&str>) -> Result<Option<u32>, ResizeError> {
    match input {
        Some(s) if !s.trim().is_empty() => parse_offset(s).map(Some),
        _ => Ok(None),
    }
}

/// Suggestions for an in-progress offset entry.
///
/// Fails when nothing is selected or when a non-empty query is not a valid
/// offset. Otherwise returns the presets, with the query itself first when
/// it is not one of them, filtered to entries containing the query.
pub fn suggest(
    query: &str,
    presets: &[u32],
    selection_len: usize,
) -> Result<Vec<String>, ResizeError> {
    if selection_len == 0 {
        return Err(ResizeError::EmptySelection);
    }

    let query = query.trim();
    if !query.is_empty() {
        parse_offset(query)?;
    }

    let presets: Vec<String> = presets.iter().map(u32::to_string).collect();
    let mut suggestions = Vec::with_capacity(presets.len() + 1);
    if !query.is_empty() && !presets.iter().any(|p| p == query) {
        suggestions.push(query.to_string());
    }
    suggestions.extend(presets);

    Ok(suggestions
        .into_iter()
        .filter(|s| s.contains(query))
        .collect())
}
