//! Single-channel binary mask storage.

use std::io::BufRead;

use crate::errors::RasterError;

/// A single-channel raster of `height` rows by `width` columns.
///
/// Samples are stored row-major. Zero means "not a point"; any non-zero
/// value denotes membership, and the magnitude is never interpreted.
///
/// # Examples
/// ```
/// use kumo_providers_raster::Mask;
///
/// let mask = Mask::new(2, 2, vec![0, 7, 0, 0]);
/// assert_eq!(mask.sample(1, 0), Some(7));
/// assert_eq!(mask.sample(0, 1), Some(0));
/// assert_eq!(mask.sample(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl Mask {
    /// Creates a mask from row-major samples.
    ///
    /// # Panics
    /// Panics if `samples.len() != width * height`; use [`Self::try_new`]
    /// for fallible construction.
    #[track_caller]
    #[must_use]
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Self {
        Self::try_new(width, height, samples).expect("sample count must match the dimensions")
    }

    /// Creates a mask after validating the sample count.
    ///
    /// Zero-sized masks (`width == 0` or `height == 0`) are valid and hold
    /// no samples.
    ///
    /// # Errors
    /// Returns [`RasterError::SampleCountMismatch`] when the buffer does not
    /// hold exactly `width * height` samples.
    pub fn try_new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(RasterError::SampleCountMismatch {
                width,
                height,
                expected,
                got: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Reads a plain-text mask, one row per line, one digit per pixel.
    ///
    /// `0` is background; `1`-`9` are foreground. Trailing whitespace is
    /// ignored and a blank line ends the raster; only further blank lines
    /// may follow it. An empty input yields the `0x0` mask.
    ///
    /// # Errors
    /// Returns [`RasterError::RaggedRow`] when a row's width differs from
    /// the first row, [`RasterError::UnexpectedSymbol`] for non-digit
    /// characters, [`RasterError::TrailingContent`] when a non-blank line
    /// follows the terminator, and [`RasterError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use kumo_providers_raster::Mask;
    ///
    /// let mask = Mask::from_reader("101\n010\n".as_bytes())?;
    /// assert_eq!((mask.width(), mask.height()), (3, 2));
    /// assert_eq!(mask.sample(1, 1), Some(1));
    /// # Ok::<(), kumo_providers_raster::RasterError>(())
    /// ```
    pub fn from_reader(reader: impl BufRead) -> Result<Self, RasterError> {
        let mut width = None;
        let mut height = 0usize;
        let mut samples = Vec::new();
        let mut terminated = false;

        for line in reader.lines() {
            let line = line?;
            let row = line.trim_end();
            if row.is_empty() {
                terminated = true;
                continue;
            }
            if terminated {
                return Err(RasterError::TrailingContent { rows: height });
            }

            let expected = *width.get_or_insert_with(|| row.chars().count());
            let mut got = 0usize;
            for (column, symbol) in row.chars().enumerate() {
                let value = symbol.to_digit(10).ok_or(RasterError::UnexpectedSymbol {
                    row: height,
                    column,
                    symbol,
                })?;
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "a decimal digit always fits in u8"
                )]
                samples.push(value as u8);
                got += 1;
            }
            if got != expected {
                return Err(RasterError::RaggedRow {
                    row: height,
                    expected,
                    got,
                });
            }
            height += 1;
        }

        Self::try_new(width.unwrap_or(0), height, samples)
    }

    /// Returns the mask width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the mask height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the sample at column `x`, row `y`, or `None` out of bounds.
    #[must_use]
    pub fn sample(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width {
            return None;
        }
        self.samples.get(y * self.width + x).copied()
    }

    /// Returns the row-major sample buffer.
    #[must_use]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}
