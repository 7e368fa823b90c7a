use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::foundation::error::{LinocutError, LinocutResult};

/// Supported output encodings. PNG and BMP are lossless.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Lossless PNG, the default.
    #[default]
    Png,
    /// Lossless BMP.
    Bmp,
    /// Lossy JPEG.
    Jpeg,
}

impl OutputFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
        }
    }

    fn as_image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpeg",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = LinocutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            other => Err(LinocutError::encode(format!(
                "unsupported output format '{other}'"
            ))),
        }
    }
}

/// Serialize the finished canvas into a byte buffer.
///
/// Pure serialization: no filesystem access, fails only on an encoding
/// error.
pub fn encode_canvas(canvas: &RgbImage, format: OutputFormat) -> LinocutResult<Vec<u8>> {
    let mut buf = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buf), format.as_image_format())
        .map_err(|e| LinocutError::encode(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
