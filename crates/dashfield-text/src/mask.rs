//! Separator masks: `1234` is shown as `1-2-3-4` while editing still happens
//! on the raw digits.

use std::num::NonZeroUsize;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::TextTransformError;
use crate::graphemes::GraphemeBoundaries;
use crate::offset::OffsetMap;
use crate::transform::{TransformedText, VisualTransformation};

pub const DEFAULT_SEPARATOR: char = '-';

/// Where separators go and which character they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMaskConfig", into = "RawMaskConfig")
)]
pub struct MaskConfig {
    /// Raw characters between consecutive separators.
    pub stride: NonZeroUsize,
    pub separator: char,
}

impl MaskConfig {
    pub fn new(stride: usize, separator: char) -> Result<Self, TextTransformError> {
        let stride = NonZeroUsize::new(stride).ok_or(TextTransformError::ZeroStride)?;
        Ok(Self { stride, separator })
    }

    pub fn with_stride(mut self, stride: NonZeroUsize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            stride: NonZeroUsize::MIN,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct RawMaskConfig {
    stride: usize,
    separator: char,
}

#[cfg(feature = "serde")]
impl Default for RawMaskConfig {
    fn default() -> Self {
        MaskConfig::default().into()
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawMaskConfig> for MaskConfig {
    type Error = TextTransformError;

    fn try_from(raw: RawMaskConfig) -> Result<Self, Self::Error> {
        MaskConfig::new(raw.stride, raw.separator)
    }
}

#[cfg(feature = "serde")]
impl From<MaskConfig> for RawMaskConfig {
    fn from(c: MaskConfig) -> Self {
        Self {
            stride: c.stride.get(),
            separator: c.separator,
        }
    }
}

/// Inserts `config.separator` before every `stride`-th grapheme cluster of
/// `raw` (never before the first) and records where everything went.
///
/// A separator position maps back to the raw index of the cluster that
/// follows it. Separator characters already present in `raw` are ordinary
/// characters and are not escaped.
pub fn mask(raw: &str, config: &MaskConfig) -> TransformedText {
    let stride = config.stride.get();
    let separators = raw.len() / stride;
    let mut text = String::with_capacity(raw.len() + separators * config.separator.len_utf8());
    let mut raw_to_display = Vec::new();
    let mut display_to_raw = Vec::new();
    let mut boundaries = Vec::new();

    for (i, grapheme) in raw.graphemes(true).enumerate() {
        if i > 0 && i % stride == 0 {
            boundaries.push(text.len());
            text.push(config.separator);
            display_to_raw.push(i);
        }
        boundaries.push(text.len());
        text.push_str(grapheme);
        raw_to_display.push(display_to_raw.len());
        display_to_raw.push(i);
    }
    boundaries.push(text.len());

    log::trace!(
        "mask: {} raw clusters -> {} display units",
        raw_to_display.len(),
        display_to_raw.len()
    );

    TransformedText {
        text,
        mapping: OffsetMap::Table {
            raw_to_display,
            display_to_raw,
        },
        boundaries: GraphemeBoundaries::from_offsets(boundaries),
    }
}

/// [`mask`] as a [`VisualTransformation`] for text inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaskTransformation {
    pub config: MaskConfig,
}

impl MaskTransformation {
    pub fn new(config: MaskConfig) -> Self {
        Self { config }
    }

    /// One dash between every character.
    pub fn dashed() -> Self {
        Self::default()
    }
}

impl VisualTransformation for MaskTransformation {
    fn filter(&self, raw: &str) -> TransformedText {
        mask(raw, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::OffsetMapping;

    fn dashed(raw: &str) -> TransformedText {
        mask(raw, &MaskConfig::default())
    }

    #[test]
    fn empty_input() {
        let t = dashed("");
        assert_eq!(t.text, "");
        assert_eq!(t.display_len(), 0);
        assert_eq!(t.raw_to_display(0), 0);
        assert_eq!(t.display_to_raw(0), 0);
        assert_eq!(t.raw_to_display(5), 0);
    }

    #[test]
    fn single_char_has_no_separator() {
        let t = dashed("a");
        assert_eq!(t.text, "a");
        assert_eq!(t.raw_to_display(0), 0);
        assert_eq!(t.raw_to_display(1), 1);
    }

    #[test]
    fn two_chars() {
        let t = dashed("ab");
        assert_eq!(t.text, "a-b");
        assert_eq!(t.raw_to_display(0), 0);
        assert_eq!(t.raw_to_display(1), 2);
        // separator belongs to the following character
        assert_eq!(t.display_to_raw(1), 1);
        assert_eq!(t.display_to_raw(2), 1);
        assert_eq!(t.display_to_raw(3), 2);
    }

    #[test]
    fn digits() {
        let t = dashed("1234");
        insta::assert_snapshot!(t.text.as_str(), @"1-2-3-4");
        assert_eq!(t.display_len(), 7);
        assert_eq!(t.raw_to_display(4), 7);
        assert_eq!(t.display_to_raw(7), 4);
    }

    #[test]
    fn stride_two() {
        let config = MaskConfig::new(2, '-').unwrap();
        let t = mask("abc", &config);
        insta::assert_snapshot!(t.text.as_str(), @"ab-c");
        assert_eq!(t.raw_to_display(2), 3);
        assert_eq!(t.display_to_raw(2), 2);
    }

    #[test]
    fn card_number_grouping() {
        let config = MaskConfig::default()
            .with_stride(NonZeroUsize::new(4).unwrap())
            .with_separator(' ');
        let t = MaskTransformation::new(config).filter("4242424242424242");
        insta::assert_snapshot!(t.text.as_str(), @"4242 4242 4242 4242");
    }

    #[test]
    fn separator_in_input_is_not_escaped() {
        let t = dashed("a-b");
        assert_eq!(t.text, "a---b");
        assert_eq!(t.display_to_raw(2), 1);
    }

    #[test]
    fn clusters_are_single_characters() {
        let t = dashed("e\u{301}👍🏽");
        assert_eq!(t.text, "e\u{301}-👍🏽");
        assert_eq!(t.display_len(), 3);
        assert_eq!(t.boundaries.byte_for_index(1), "e\u{301}".len());
        assert_eq!(t.boundaries.byte_for_index(2), "e\u{301}-".len());
    }

    #[test]
    fn zero_stride_is_rejected() {
        assert_eq!(MaskConfig::new(0, '-'), Err(TextTransformError::ZeroStride));
    }

    #[test]
    fn repeated_calls_agree() {
        let t = MaskTransformation::dashed();
        assert_eq!(t.filter("0912"), t.filter("0912"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let c: MaskConfig = serde_json::from_str(r#"{"stride":3,"separator":" "}"#).unwrap();
        assert_eq!(c, MaskConfig::new(3, ' ').unwrap());

        let c: MaskConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, MaskConfig::default());

        let err = serde_json::from_str::<MaskConfig>(r#"{"stride":0}"#).unwrap_err();
        assert!(err.to_string().contains("stride must be at least 1"));
    }
}
